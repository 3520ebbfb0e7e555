// src/app/game_app.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use log::{error, info, warn};
use wasm_bindgen::prelude::*;

use crate::app::state_getter;
use crate::components::card::Card;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Game;
use crate::protocol::Command;

// --- JavaScript から使うゲーム本体 ---
//
// 命令メソッドは「動いたか」を bool で返すよ。ルール上ダメなら false (エラーじゃない)。
// Err になるのは、カード番号が範囲外・JSON が壊れてる・ロックが取れない、のどれか。
#[wasm_bindgen]
pub struct GameApp {
    game: Arc<Mutex<Game>>,
    // Game の勝利フックはこのフラグを立てるだけ。JS のコールバックはロックを離してから呼ぶ
    win_pending: Arc<AtomicBool>,
    on_win: Arc<Mutex<Option<js_sys::Function>>>,
}

#[wasm_bindgen]
impl GameApp {
    /// 新しいゲームを配るよ。`seed` を渡すと毎回同じ配り方になる。
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> GameApp {
        Self::from_config(GameConfig { seed })
    }

    /// `{"seed": 42}` みたいな JSON の設定から作るよ。
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<GameApp, JsValue> {
        let config = GameConfig::from_json(json)?;
        Ok(Self::from_config(config))
    }

    /// 山札をタップ (3 枚めくる / 捨て札を山札に戻す)。
    #[wasm_bindgen]
    pub fn draw_three(&self) -> Result<bool, JsValue> {
        self.with_game(|game| game.draw_three())
    }

    /// カードを組札 `foundation` (0-3) へ。
    #[wasm_bindgen]
    pub fn move_to_build(&self, card_index: usize, foundation: usize) -> Result<bool, JsValue> {
        let card = card_at(card_index)?;
        self.with_game(|game| game.move_card_to_build(foundation, card))
    }

    /// カード (とその上の列) を場札 `stack` (0-6) へ。
    #[wasm_bindgen]
    pub fn move_to_stack(&self, card_index: usize, stack: usize) -> Result<bool, JsValue> {
        let card = card_at(card_index)?;
        self.with_game(|game| game.move_card_to_stack(stack, card))
    }

    /// ダブルクリックされたカードを組札へ自動で送る。
    #[wasm_bindgen]
    pub fn auto_build(&self, card_index: usize) -> Result<bool, JsValue> {
        let card = card_at(card_index)?;
        self.with_game(|game| game.auto_build(card))
    }

    #[wasm_bindgen]
    pub fn shuffle_stock(&self) -> Result<bool, JsValue> {
        self.with_game(|game| game.shuffle_stock())
    }

    #[wasm_bindgen]
    pub fn restart(&self) -> Result<bool, JsValue> {
        self.with_game(|game| game.restart())
    }

    /// 勝ったときに引数なしで 1 回呼ばれる関数を登録するよ。リスタートしても残る。
    #[wasm_bindgen]
    pub fn set_on_win(&self, callback: js_sys::Function) -> Result<(), JsValue> {
        match self.on_win.try_lock() {
            Ok(mut slot) => {
                *slot = Some(callback);
                Ok(())
            }
            Err(e) => Err(JsValue::from_str(&format!("Failed to lock win callback: {}", e))),
        }
    }

    /// 今の状態を GameStateData の JSON 文字列で返すよ。
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> Result<JsValue, JsValue> {
        state_getter::get_state_json(&self.game)
    }

    /// `{"MoveToStack": {"card": 12, "stack": 3}}` みたいな JSON の命令を実行するよ。
    #[wasm_bindgen]
    pub fn apply_command_json(&self, json: &str) -> Result<bool, JsValue> {
        let command = Command::from_json(json).map_err(|e| {
            warn!("GameApp: rejected command JSON: {}", e);
            JsValue::from(e)
        })?;
        self.with_game(|game| game.apply(command))
    }
}

impl GameApp {
    fn from_config(config: GameConfig) -> GameApp {
        info!("GameApp: Initializing...");
        let win_pending = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&win_pending);
        let game = Game::with_config(config).with_win_hook(move || flag.store(true, Ordering::SeqCst));

        info!("GameApp: Initialization complete.");
        GameApp {
            game: Arc::new(Mutex::new(game)),
            win_pending,
            on_win: Arc::new(Mutex::new(None)),
        }
    }

    /// ロックを取って Game を触る。終わったら勝利通知が溜まってないか見る。
    fn with_game<T>(&self, f: impl FnOnce(&mut Game) -> T) -> Result<T, JsValue> {
        let result = {
            let mut game = self.game.try_lock().map_err(|e| {
                let error_msg = format!("Failed to lock game: {}", e);
                error!("{}", error_msg);
                JsValue::from_str(&error_msg)
            })?;
            f(&mut game)
        };
        self.notify_win();
        Ok(result)
    }

    fn notify_win(&self) {
        if !self.win_pending.swap(false, Ordering::SeqCst) {
            return;
        }
        info!("GameApp: game won, notifying JS 🏆");
        // コールバックの中から set_on_win を呼べるように、ロックは呼ぶ前に離す
        let callback = match self.on_win.try_lock() {
            Ok(slot) => slot.clone(),
            Err(e) => {
                error!("GameApp: win callback is busy, skipping notification: {}", e);
                return;
            }
        };
        if let Some(callback) = callback {
            if let Err(e) = callback.call0(&JsValue::NULL) {
                error!("GameApp: win callback threw: {:?}", e);
            }
        }
    }
}


fn card_at(card_index: usize) -> Result<Card, JsValue> {
    Card::from_index(card_index).ok_or_else(|| JsValue::from(GameError::UnknownCard(card_index)))
}
