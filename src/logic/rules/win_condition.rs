//! ゲームの勝利条件。

use crate::components::stack::StackType;
use crate::config::rules::{CARDS_PER_SUIT, DECK_SIZE, FOUNDATION_COUNT};
use crate::ecs::world::World;

use super::common::stack_len;

/// 組札にあるカードの合計枚数でクリア判定する。52 枚全部なら勝ち！
pub fn check_win_condition(foundation_card_count: usize) -> bool {
    foundation_card_count == DECK_SIZE
}

/// 4 つの組札がそれぞれ 13 枚 (A から K まで) 揃ってるか。
pub fn all_foundations_complete(world: &World) -> bool {
    let counts: Vec<usize> = (0..FOUNDATION_COUNT as u8)
        .map(|i| stack_len(world, StackType::Foundation(i)))
        .collect();
    counts.iter().all(|&n| n == CARDS_PER_SUIT) && check_win_condition(counts.iter().sum())
}
