// src/error.rs
//! Errors at the JSON / wasm boundary.
//!
//! Rule violations are never errors here: an illegal move is just a
//! rejected command (`false`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid game config: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    #[error("invalid command: {0}")]
    InvalidCommand(#[source] serde_json::Error),

    #[error("failed to serialize game state: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("card index {0} is out of range (expected 0-51)")]
    UnknownCard(usize),
}

impl From<GameError> for wasm_bindgen::JsValue {
    fn from(err: GameError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
