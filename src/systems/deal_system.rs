// src/systems/deal_system.rs

use log::info;

use crate::components::card::Card;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::{StackInfo, StackType};
use crate::config::rules::{DECK_SIZE, STOCK_DEAL_COUNT, TABLEAU_COUNT};
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::logic::rules::{card_entity, game_state_entity};

use super::update_game_state;

/// 初期配置のシステムだよ！ 渡されたデッキを 7 列の場札と山札に配る。🃏
///
/// デッキの末尾を「一番上」とみなして、そこから順にめくって配るよ:
/// 1. 列 i (0-6) に i+1 枚ずつ。各列の最後に配った 1 枚だけ表向き。
/// 2. 残りの 24 枚は裏向きのまま山札へ。デッキで上にあったものほど山札でも上。
/// 3. 組札と捨て札は空っぽ、めくり窓 (Draw1..Draw3) もなし。
///
/// 52 枚ちょうどのデッキを配るだけなので失敗はしない。
pub struct DealInitialCardsSystem {
    deck: Vec<Card>,
}

impl DealInitialCardsSystem {
    pub fn new(deck: Vec<Card>) -> Self {
        debug_assert_eq!(deck.len(), DECK_SIZE, "deal expects a full deck");
        Self { deck }
    }
}

impl System for DealInitialCardsSystem {
    fn run(&mut self, world: &mut World) {
        info!("DealInitialCardsSystem: dealing {} cards", self.deck.len());

        // ゲーム状態のシングルトンを用意して Dealing にする
        if game_state_entity(world).is_none() {
            // カードが 0-51 を使うので、ゲーム状態はその次の ID
            let entity = Entity(DECK_SIZE);
            world.create_entity_with_id(entity);
            world.add_component(entity, GameState::new());
        }
        update_game_state(world, |state| {
            state.status = GameStatus::Dealing;
            state.draw_window = 0;
        });

        let mut deck = std::mem::take(&mut self.deck);

        // 場札: 列 i に i+1 枚
        for column in 0..TABLEAU_COUNT {
            for position in 0..=column {
                let Some(mut card) = deck.pop() else {
                    return;
                };
                card.is_face_up = position == column;
                place(world, card, StackInfo::new(StackType::Tableau(column as u8), position as u8));
            }
        }

        // 山札: 残り。deck[0] が一番下
        debug_assert_eq!(deck.len(), STOCK_DEAL_COUNT);
        for (position, mut card) in deck.into_iter().enumerate() {
            card.is_face_up = false;
            place(world, card, StackInfo::new(StackType::Stock, position as u8));
        }

        update_game_state(world, |state| state.status = GameStatus::Playing);
        info!("DealInitialCardsSystem: deal complete");
    }
}

/// カードのエンティティ (ID = デッキ番号) を作って、Card と StackInfo を付ける。
fn place(world: &mut World, card: Card, info: StackInfo) {
    let entity: Entity = card_entity(&card);
    world.create_entity_with_id(entity);
    world.add_component(entity, card);
    world.add_component(entity, info);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::game_state::GameState;
    use crate::logic::deck::create_standard_deck;
    use crate::logic::rules::{cards_in_stack, card_of, game_state, stack_len};

    fn dealt_world() -> World {
        let mut world = World::new();
        world.register_component::<Card>();
        world.register_component::<StackInfo>();
        world.register_component::<GameState>();
        DealInitialCardsSystem::new(create_standard_deck()).run(&mut world);
        world
    }

    #[test]
    fn triangular_tableau_with_only_top_face_up() {
        let world = dealt_world();
        for column in 0..TABLEAU_COUNT as u8 {
            let cards = cards_in_stack(&world, StackType::Tableau(column));
            assert_eq!(cards.len(), column as usize + 1);
            for (i, entity) in cards.iter().enumerate() {
                let face_up = card_of(&world, *entity).is_face_up;
                assert_eq!(face_up, i == cards.len() - 1, "列 {} の {} 枚目", column, i);
            }
        }
    }

    #[test]
    fn remaining_cards_go_face_down_to_stock() {
        let world = dealt_world();
        let stock = cards_in_stack(&world, StackType::Stock);
        assert_eq!(stock.len(), 24);
        assert!(stock.iter().all(|e| !card_of(&world, *e).is_face_up));
        // ソート済みデッキなら deck[0..24] が山札、deck[23] が一番上
        assert_eq!(stock.first(), Some(&Entity(0)));
        assert_eq!(stock.last(), Some(&Entity(23)));
        assert_eq!(stack_len(&world, StackType::Waste), 0);
        for f in 0..4 {
            assert_eq!(stack_len(&world, StackType::Foundation(f)), 0);
        }
    }

    #[test]
    fn deal_takes_cards_from_the_top_of_the_deck() {
        let world = dealt_world();
        // 最初の 1 枚 (deck の末尾 = K♠) は列 0 に表向きで
        assert_eq!(cards_in_stack(&world, StackType::Tableau(0)), vec![Entity(51)]);
        assert!(card_of(&world, Entity(51)).is_face_up);
    }

    #[test]
    fn deal_leaves_game_playing() {
        let world = dealt_world();
        let state = game_state(&world).expect("GameState があるはず");
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.draw_window, 0);
        // 52 枚 + ゲーム状態 1 つ
        assert_eq!(world.entity_count(), 53);
    }
}
