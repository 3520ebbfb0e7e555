// src/ecs/mod.rs
//! ソリティア用の小さな ECS (Entity-Component-System) だよ。
//! カード 1 枚 = エンティティ 1 つ。どの山にいるかはコンポーネントで表す！

pub mod component;
pub mod entity;
pub mod system;
pub mod world;

#[cfg(test)]
mod world_tests;

// `crate::ecs::X` で使えるように再エクスポート
pub use component::Component;
pub use entity::Entity;
pub use system::System;
pub use world::World;
