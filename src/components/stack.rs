// src/components/stack.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// カードが置かれている場所の種類だよ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau)。7 列あるので列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。4 つ。スートは最初に置かれた A で決まるよ。
    Foundation(u8),
    /// 山札 (Stock)。配り残りの裏向きカード。
    Stock,
    /// 山札からめくったカードの置き場 (Waste)。
    Waste,
}

impl StackType {
    pub fn is_foundation(self) -> bool {
        matches!(self, StackType::Foundation(_))
    }
}

/// カードがどこにあるかを示すコンポーネントだよ。
///
/// カード 1 枚につきちょうど 1 つ付いていて、これが「このカードの持ち主の山」への
/// 逆引き参照になる。山の中の順番は `position_in_stack` (0 が一番下) で、
/// どの山でも 0 から隙間なく並ぶようにシステム側が保つよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackInfo {
    pub stack_type: StackType,
    pub position_in_stack: u8,
}

impl StackInfo {
    pub fn new(stack_type: StackType, position_in_stack: u8) -> Self {
        Self { stack_type, position_in_stack }
    }
}

impl Component for StackInfo {}
