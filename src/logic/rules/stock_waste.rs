//! 山札 (Stock) と捨て札 (Waste) のルールだよ。

use crate::components::stack::StackType;
use crate::config::rules::DRAW_COUNT;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;

use super::common::{cards_in_stack, game_state};

/// 山札からめくれるか。山札に 1 枚でもあれば OK。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// 山札が空で捨て札があるときだけ、捨て札を山札に戻せる (リサイクル)。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// 山札のシャッフルは、まだ何もめくってない (捨て札が空) ときだけ。1 枚以下なら混ぜる意味がない。
pub fn can_shuffle_stock(stock_len: usize, waste_len: usize) -> bool {
    stock_len >= 2 && waste_len == 0
}

/// 今めくられている 3 枚 (Draw1, Draw2, Draw3) のエンティティを古い順に返すよ。
///
/// 枚数が足りないときは後ろが `None` になる。遊べるのは一番後ろの `Some` だけ！
pub fn draw_slot_entities(world: &World) -> [Option<Entity>; DRAW_COUNT] {
    let window = game_state(world).map_or(0, |state| state.draw_window as usize);
    let waste = cards_in_stack(world, StackType::Waste);
    let start = waste.len().saturating_sub(window.min(DRAW_COUNT));

    let mut slots = [None; DRAW_COUNT];
    for (slot, entity) in slots.iter_mut().zip(waste[start..].iter()) {
        *slot = Some(*entity);
    }
    slots
}

/// 捨て札から遊べるカード。めくった 3 枚のうち一番新しいもの。
pub fn playable_waste_entity(world: &World) -> Option<Entity> {
    draw_slot_entities(world).into_iter().flatten().last()
}
