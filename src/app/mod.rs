// src/app/mod.rs
//! JavaScript から呼ばれる GameApp と、その中身を役割ごとに分けたモジュールだよ！

pub mod game_app;
pub mod state_getter;
