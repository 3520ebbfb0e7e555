//! カード移動の全体的なチェック。「持ち上げられるか」と「置けるか」の両方を見るよ。

use log::debug;

use crate::components::stack::StackType;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;

use super::common::{card_of, get_top_card_entity, stack_info_of};
use super::foundation::can_move_to_foundation;
use super::stock_waste::playable_waste_entity;
use super::tableau::can_move_to_tableau;

/// カードを `target` へ向けて持ち上げられるか。
///
/// - 裏向きのカードは持てない。
/// - 場札からは表向きのカードならどれでも (上に乗ってる列ごと動く)。
///   ただし組札へは一番上の 1 枚だけ。
/// - 捨て札からは、めくった 3 枚のうち遊べる 1 枚だけ。
/// - 山札と組札からは持てない。
pub fn can_pick_up(world: &World, card_entity: Entity, target: StackType) -> bool {
    let card = card_of(world, card_entity);
    if !card.is_face_up {
        return false;
    }
    let info = stack_info_of(world, card_entity);
    match info.stack_type {
        StackType::Tableau(_) => {
            if target.is_foundation() {
                get_top_card_entity(world, info.stack_type) == Some(card_entity)
            } else {
                true
            }
        }
        StackType::Waste => playable_waste_entity(world) == Some(card_entity),
        StackType::Stock | StackType::Foundation(_) => false,
    }
}

/// カードを `target` の山へ動かせるか検証する。
pub fn is_move_valid(world: &World, card_entity: Entity, target: StackType) -> bool {
    let source = stack_info_of(world, card_entity).stack_type;
    if source == target {
        debug!("[Rules Validation] {:?} is already in {:?}", card_entity, target);
        return false;
    }
    if !can_pick_up(world, card_entity, target) {
        debug!("[Rules Validation] {:?} cannot be picked up from {:?}", card_entity, source);
        return false;
    }
    match target {
        StackType::Tableau(index) => can_move_to_tableau(world, card_entity, index),
        StackType::Foundation(index) => can_move_to_foundation(world, card_entity, index),
        StackType::Stock | StackType::Waste => {
            debug!("[Rules Validation] moving onto {:?} is never allowed", target);
            false
        }
    }
}
