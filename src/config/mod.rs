// src/config/mod.rs
//! ゲームの設定まわり。ルールの定数と、ゲーム開始時のオプションだよ。

pub mod rules;

pub use rules::GameConfig;
