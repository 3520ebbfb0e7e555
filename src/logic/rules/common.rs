//! ルール判定で共通して使うヘルパーを置くよ。

use itertools::Itertools;

use crate::components::card::{Card, Suit};
use crate::components::game_state::GameState;
use crate::components::stack::{StackInfo, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;

/// カードの色（赤か黒か）。場札は色を交互に積むので使うよ！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    pub fn from_suit(suit: Suit) -> Self {
        if suit.is_red() {
            CardColor::Red
        } else {
            CardColor::Black
        }
    }
}

/// カードの正体からエンティティを引くよ。ID = ソート済みデッキの番号、の約束！
pub fn card_entity(card: &Card) -> Entity {
    Entity(card.index())
}

/// エンティティの Card コンポーネントを取るよ。
///
/// # パニック
/// カードのエンティティに Card がないのは World が壊れてる (UI とエンジンがずれてる) 証拠なので、
/// 普通の「置けない」とは区別してパニックさせる。
pub fn card_of(world: &World, entity: Entity) -> Card {
    match world.get_component::<Card>(entity) {
        Some(card) => *card,
        None => panic!("card entity {:?} has no Card component; engine state is out of sync", entity),
    }
}

/// エンティティの StackInfo (どの山の何番目か) を取るよ。パニック条件は `card_of` と同じ。
pub fn stack_info_of(world: &World, entity: Entity) -> StackInfo {
    match world.get_component::<StackInfo>(entity) {
        Some(info) => *info,
        None => panic!("card entity {:?} is not in any pile; engine state is out of sync", entity),
    }
}

/// 指定した山のカードを下から順に並べて返すよ。
pub fn cards_in_stack(world: &World, stack_type: StackType) -> Vec<Entity> {
    world
        .query::<StackInfo>()
        .filter(|(_, info)| info.stack_type == stack_type)
        .sorted_by_key(|(_, info)| info.position_in_stack)
        .map(|(entity, _)| entity)
        .collect()
}

/// 山の枚数。
pub fn stack_len(world: &World, stack_type: StackType) -> usize {
    world
        .query::<StackInfo>()
        .filter(|(_, info)| info.stack_type == stack_type)
        .count()
}

/// 山の一番上のカードのエンティティ。空なら `None`。
pub fn get_top_card_entity(world: &World, stack_type: StackType) -> Option<Entity> {
    world
        .query::<StackInfo>()
        .filter(|(_, info)| info.stack_type == stack_type)
        .max_by_key(|(_, info)| info.position_in_stack)
        .map(|(entity, _)| entity)
}

/// 山の一番上のカード。空なら `None`。
pub fn get_top_card(world: &World, stack_type: StackType) -> Option<Card> {
    get_top_card_entity(world, stack_type).map(|entity| card_of(world, entity))
}

/// ゲーム状態 (シングルトン) のエンティティを探すよ。
pub fn game_state_entity(world: &World) -> Option<Entity> {
    world.query::<GameState>().map(|(entity, _)| entity).next()
}

/// ゲーム状態を読むよ。
pub fn game_state(world: &World) -> Option<&GameState> {
    world.query::<GameState>().map(|(_, state)| state).next()
}
