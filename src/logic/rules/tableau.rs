//! 場札 (Tableau) へのカード移動ルールだよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::StackType;
use crate::config::rules::TABLEAU_COUNT;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;

use super::common::{card_of, get_top_card, CardColor};

/// カード (または表向きの列の一番下のカード) を、場札の一番上 (`top`) に重ねられるか判定する。
///
/// - 空の列には K だけ。
/// - カードがあれば、そのカードが表向きで、色が違って、ランクがちょうど 1 つ下のとき。
pub fn can_stack_on(card: &Card, top: Option<&Card>) -> bool {
    match top {
        None => card.rank == Rank::King,
        Some(top) => {
            let colors_different = CardColor::from_suit(card.suit) != CardColor::from_suit(top.suit);
            let rank_is_one_less = card.rank.value() + 1 == top.rank.value();
            top.is_face_up && colors_different && rank_is_one_less
        }
    }
}

/// 指定したカードを場札 `tableau_index` (0-6) の一番上に置けるかチェックする。
pub fn can_move_to_tableau(world: &World, card_entity: Entity, tableau_index: u8) -> bool {
    if tableau_index as usize >= TABLEAU_COUNT {
        debug!("[Tableau Rule] invalid tableau index {}", tableau_index);
        return false;
    }
    let card = card_of(world, card_entity);
    let top = get_top_card(world, StackType::Tableau(tableau_index));
    let result = can_stack_on(&card, top.as_ref());
    debug!(
        "[Tableau Rule] {} onto Tableau({}) (top: {:?}) -> {}",
        card,
        tableau_index,
        top.map(|c| c.to_string()),
        result
    );
    result
}
