// src/logic/auto_move.rs
//! カードの自動移動 (オートビルド) の行き先さがしだよ！🪄
//!
//! 表向きのカードを組札へ送るのは一番よくある操作なので、
//! 「どの組札に置くか」をプレイヤーに選ばせずにこっちで決めちゃう。

use log::debug;

use crate::components::stack::StackType;
use crate::config::rules::FOUNDATION_COUNT;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;
use crate::logic::rules;

/// カードを置ける組札を探して、その `StackType::Foundation(i)` を返すよ。
///
/// 1. まず、同じスートのカードが積まれている組札を探す。
/// 2. なければ、最初の空の組札 (A のときだけ置ける)。
///
/// 置ける場所がなければ `None`。カードを持ち上げられるかはここでは見ないよ。
pub fn find_automatic_foundation_move(world: &World, card_entity: Entity) -> Option<StackType> {
    let card = rules::card_of(world, card_entity);

    let (started, empty): (Vec<u8>, Vec<u8>) = (0..FOUNDATION_COUNT as u8)
        .partition(|&i| rules::get_top_card(world, StackType::Foundation(i)).is_some());

    let same_suit = started.into_iter().find(|&i| {
        rules::get_top_card(world, StackType::Foundation(i)).is_some_and(|top| top.suit == card.suit)
    });

    let target = match same_suit {
        Some(i) => Some(i),
        None => empty.into_iter().next(),
    }
    .filter(|&i| rules::can_move_to_foundation(world, card_entity, i))
    .map(StackType::Foundation);

    debug!("[AutoMove] {} -> {:?}", card, target);
    target
}
