//! 組札 (Foundation) へのカード移動ルールだよ。
//!
//! 組札のスートは固定じゃなくて、最初に置いた A で決まる。あとは同じスートを 1 つずつ上に積むだけ！

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::StackType;
use crate::config::rules::FOUNDATION_COUNT;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;

use super::common::{card_of, get_top_card};

/// カード単体を、組札の一番上 (`top`) に積めるか判定する。World を見ない純粋な関数。
///
/// - 空の組札には A だけ。
/// - カードがあれば、同じスートでランクがちょうど 1 つ上のカードだけ。
pub fn can_build_on(card: &Card, top: Option<&Card>) -> bool {
    match top {
        None => card.rank == Rank::Ace,
        Some(top) => card.suit == top.suit && top.rank.next() == Some(card.rank),
    }
}

/// 指定したカードを組札 `foundation_index` (0-3) に置けるかチェックする。
///
/// ここで見るのは「置き先」のルールだけ。カードを持ち上げられるか (表向きか、一番上か)
/// は `move_validation` 側で見るよ。
pub fn can_move_to_foundation(world: &World, card_entity: Entity, foundation_index: u8) -> bool {
    if foundation_index as usize >= FOUNDATION_COUNT {
        debug!("[Foundation Rule] invalid foundation index {}", foundation_index);
        return false;
    }
    let card = card_of(world, card_entity);
    let top = get_top_card(world, StackType::Foundation(foundation_index));
    let result = can_build_on(&card, top.as_ref());
    debug!(
        "[Foundation Rule] {} onto Foundation({}) (top: {:?}) -> {}",
        card,
        foundation_index,
        top.map(|c| c.to_string()),
        result
    );
    result
}
