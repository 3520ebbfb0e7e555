// src/ecs/component.rs

/// Component（コンポーネント）トレイトだよ！
///
/// 構造体がエンティティに付けられる「データ」であることを示すマーカー。
/// 中身は空っぽでOK！ `World::register_component` の型制約に使うよ。
pub trait Component: std::fmt::Debug + Send + Sync + 'static {}
