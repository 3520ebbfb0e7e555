// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// ソリティア (クロンダイク、3 枚めくり) のルールエンジン。
// 状態は自作の ECS (ecs/) で持って、ルール判定は logic/、状態の書き換えは systems/ に分けてるよ。
pub mod app;
pub mod components;
pub mod config;
pub mod ecs;
pub mod error;
pub mod game;
pub mod logging;
pub mod logic;
pub mod protocol;
pub mod systems;


pub use app::game_app::GameApp;
pub use components::{Card, GameStatus, Rank, Suit};
pub use config::GameConfig;
pub use error::GameError;
pub use game::Game;
pub use protocol::{CardData, Command, GameStateData};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // ロガーはもう登録済みかもしれないので、失敗は気にしない
    let _ = logging::init();
    log::info!("klondike_wasm loaded. Panic hook set!");
}
