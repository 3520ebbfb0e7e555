// src/ecs/entity.rs

use serde::{Deserialize, Serialize};

/// ゲームに登場する「モノ」の識別子 (ID) だよ！
///
/// ID そのものには意味がなくて、コンポーネントと組み合わせて初めて
/// 「ID 12 はクラブのキングで、場札 3 列目の一番上にある」みたいな意味を持つんだ。
///
/// カードのエンティティは、ソート済みデッキでのインデックス (0-51) を
/// そのまま ID に使う約束になってるよ。だからカードの正体から ID が一発で引ける！✨
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Entity(pub usize);

impl Entity {
    /// ID の数値を返すよ。
    pub fn id(self) -> usize {
        self.0
    }
}
