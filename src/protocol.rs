// src/protocol.rs

// このファイルは、エンジンと UI (JavaScript) の間でやり取りするデータの形を決めるよ！💌
// 状態は GameStateData にして JSON で渡し、UI からの操作は Command を JSON で受け取る。
// カードはソート済みデッキの番号 (0-51) で指定する約束だよ。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::GameStatus;
use crate::config::rules::{DECK_SIZE, DRAW_COUNT};
use crate::error::GameError;

/// カード 1 枚の情報。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardData {
    /// ソート済みデッキでの番号 (0-51)。命令でカードを指定するときもこれを使う。
    pub index: usize,
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl From<Card> for CardData {
    fn from(card: Card) -> Self {
        CardData {
            index: card.index(),
            suit: card.suit,
            rank: card.rank,
            is_face_up: card.is_face_up,
        }
    }
}

/// ゲーム全体のスナップショット。山の中身はどれも下 (古い方) から順。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStateData {
    pub status: GameStatus,
    /// 山札の残り枚数。中身は裏向きなので見せない。
    pub hand_count: usize,
    pub waste: Vec<CardData>,
    /// Draw1..Draw3。遊べるのは最後の `Some` だけ。
    pub draw: [Option<CardData>; DRAW_COUNT],
    pub tableau: Vec<Vec<CardData>>,
    pub foundations: Vec<Vec<CardData>>,
}

impl GameStateData {
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string(self).map_err(GameError::Serialize)
    }
}

/// UI からエンジンへの命令。
///
/// JSON では `"DrawThree"` や `{"MoveToBuild": {"card": 0, "foundation": 1}}` の形だよ。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 山札をタップ (3 枚めくる / 捨て札を戻す)。
    DrawThree,
    /// カードを組札へ。
    MoveToBuild { card: usize, foundation: usize },
    /// カード (と、その上の列) を場札へ。
    MoveToStack { card: usize, stack: usize },
    /// 行き先の組札はエンジンにおまかせ。
    AutoBuild { card: usize },
    /// まだめくってないうちに山札を混ぜ直す。
    ShuffleStock,
    /// 配り直し。
    Restart,
}

impl Command {
    /// JSON から命令を読むよ。カード番号が 0-51 の外ならここで弾く。
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let command: Command = serde_json::from_str(json).map_err(GameError::InvalidCommand)?;
        match command.card() {
            Some(index) if index >= DECK_SIZE => Err(GameError::UnknownCard(index)),
            _ => Ok(command),
        }
    }

    /// 命令が指しているカードの番号 (あれば)。
    pub fn card(&self) -> Option<usize> {
        match *self {
            Command::MoveToBuild { card, .. }
            | Command::MoveToStack { card, .. }
            | Command::AutoBuild { card } => Some(card),
            Command::DrawThree | Command::ShuffleStock | Command::Restart => None,
        }
    }
}
