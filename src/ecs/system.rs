// src/ecs/system.rs

use crate::ecs::world::World;

/// System（システム）トレイトだよ！
///
/// World のコンポーネントを読んだり書き換えたりして、ゲームのルールを進める役割。
/// 配り直し (deal) や勝利判定みたいに、引数なしで World 全体を相手にする処理はこれで表すよ。
/// カード移動みたいに「どのカードをどこへ」が必要な処理は、引数を取る関数として systems/ に置いてる。
pub trait System {
    /// このシステムを 1 回実行するよ！
    fn run(&mut self, world: &mut World);
}
