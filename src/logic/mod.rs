// src/logic/mod.rs
//! ゲームのロジック (デッキ作り・ルール判定・自動移動先さがし) をまとめるよ！

pub mod auto_move;
pub mod deck;
pub mod rules;
