// src/systems/move_card_system.rs

use log::{debug, info};

use crate::components::card::Card;
use crate::components::stack::{StackInfo, StackType};
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::logic::rules::{self, cards_in_stack, get_top_card_entity, stack_info_of};

use super::update_game_state;

/// カード移動を実行するシステムだよ！🖱️💨
///
/// 「どのカードをどこへ」を受け取って、ルール上 OK なら World を書き換える。
/// ダメならなにもしないで `false` を返すだけ (よくあることなのでエラーじゃない)。
pub struct MoveCardSystem;

impl MoveCardSystem {
    /// カードを組札 `foundation_index` へ動かすよ。動かせるのは山の一番上の 1 枚だけ。
    pub fn move_to_foundation(world: &mut World, card_entity: Entity, foundation_index: u8) -> bool {
        Self::process_move_request(world, card_entity, StackType::Foundation(foundation_index))
    }

    /// カードを場札 `tableau_index` へ動かすよ。場札の途中のカードなら、その上の列ごと動く。
    pub fn move_to_tableau(world: &mut World, card_entity: Entity, tableau_index: u8) -> bool {
        Self::process_move_request(world, card_entity, StackType::Tableau(tableau_index))
    }

    fn process_move_request(world: &mut World, card_entity: Entity, target: StackType) -> bool {
        if !rules::is_move_valid(world, card_entity, target) {
            debug!("MoveCardSystem: {:?} -> {:?} rejected 🙅‍♀️", card_entity, target);
            return false;
        }
        Self::apply_move(world, card_entity, target);
        true
    }

    /// 検証済みの移動を World に反映するよ。
    ///
    /// 1. 動かすカード (とその上に乗ってる列) を、順番を保ったまま移動先の上に積む。
    /// 2. 場札から動かしたなら、残った一番上のカードを表にする。
    /// 3. 捨て札から動かしたなら、めくり窓を 1 枚縮める。
    fn apply_move(world: &mut World, card_entity: Entity, target: StackType) {
        let source = stack_info_of(world, card_entity);
        let moving: Vec<Entity> = cards_in_stack(world, source.stack_type)
            .into_iter()
            .filter(|e| stack_info_of(world, *e).position_in_stack >= source.position_in_stack)
            .collect();
        let base = rules::stack_len(world, target);

        for (offset, entity) in moving.iter().enumerate() {
            if let Some(info) = world.get_component_mut::<StackInfo>(*entity) {
                *info = StackInfo::new(target, (base + offset) as u8);
            }
        }
        info!(
            "MoveCardSystem: moved {} card(s) from {:?} to {:?}",
            moving.len(),
            source.stack_type,
            target
        );

        match source.stack_type {
            StackType::Tableau(_) => Self::reveal_top(world, source.stack_type),
            StackType::Waste => Self::shrink_draw_window(world),
            StackType::Stock | StackType::Foundation(_) => {}
        }
    }

    /// 山の一番上が裏向きなら表にするよ。
    fn reveal_top(world: &mut World, stack_type: StackType) {
        if let Some(top) = get_top_card_entity(world, stack_type) {
            if let Some(card) = world.get_component_mut::<Card>(top) {
                if !card.is_face_up {
                    card.is_face_up = true;
                    debug!("MoveCardSystem: revealed {} on {:?}", card, stack_type);
                }
            }
        }
    }

    /// 捨て札から 1 枚遊んだあとのめくり窓の更新。
    ///
    /// 窓が空になっても捨て札が残っていれば、その一番上をまた遊べるように 1 枚窓にする。
    fn shrink_draw_window(world: &mut World) {
        let waste_left = rules::stack_len(world, StackType::Waste);
        update_game_state(world, |state| {
            state.draw_window = state.draw_window.saturating_sub(1);
            if state.draw_window == 0 && waste_left > 0 {
                state.draw_window = 1;
            }
        });
    }
}
