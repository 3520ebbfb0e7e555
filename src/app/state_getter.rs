//! Gets the current game state and converts it to JSON for the UI.

use std::sync::{Arc, Mutex};

use log::{debug, error};
use wasm_bindgen::JsValue;

use crate::game::Game;

/// ゲームの状態を取得し、JSON 文字列として返します。
pub fn get_state_json(game_arc: &Arc<Mutex<Game>>) -> Result<JsValue, JsValue> {
    let game = match game_arc.try_lock() {
        Ok(g) => g,
        Err(e) => {
            let error_msg = format!("Failed to lock game for getting state: {}", e);
            error!("{}", error_msg);
            return Err(JsValue::from_str(&error_msg));
        }
    };

    let snapshot = game.snapshot();
    debug!(
        "Collected state: hand {}, waste {}, foundations {}",
        snapshot.hand_count,
        snapshot.waste.len(),
        game.foundation_total()
    );

    match snapshot.to_json() {
        Ok(json_string) => Ok(JsValue::from_str(&json_string)),
        Err(e) => {
            error!("{}", e);
            Err(e.into())
        }
    }
}
