// src/game.rs
//! 1 ゲームぶんのソリティアをまるごと持つ窓口だよ！🃏
//!
//! World (カードと山の状態) と乱数、勝利フックを抱えて、UI から呼ばれる
//! 問い合わせ (今の山の中身) と命令 (めくる・動かす・リスタート) を提供する。
//! 命令はぜんぶ `bool` を返す。`false` は「ルール上ダメだったので何もしてない」って意味で、エラーじゃないよ。

use log::{debug, info, warn};
use rand::rngs::StdRng;

use crate::components::card::Card;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::{StackInfo, StackType};
use crate::config::rules::{DRAW_COUNT, FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::config::GameConfig;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::deck::{create_shuffled_deck, rng_for};
use crate::logic::rules::{self, card_entity, card_of, cards_in_stack, get_top_card};
use crate::protocol::{CardData, Command, GameStateData};
use crate::systems::deal_system::DealInitialCardsSystem;
use crate::systems::draw_system::{self, DrawOutcome};
use crate::systems::move_card_system::MoveCardSystem;
use crate::systems::win_condition_system::WinConditionSystem;

/// 勝ったときに 1 回だけ呼ばれるコールバック。
pub type WinHook = Box<dyn FnMut()>;

pub struct Game {
    world: World,
    config: GameConfig,
    rng: StdRng,
    restarts: u64,
    on_win: Option<WinHook>,
}

impl Game {
    /// シードなし (毎回違う配り方) で新しいゲームを始めるよ。
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// 設定を指定して新しいゲームを配る。シードが同じなら配り方も同じ。
    pub fn with_config(config: GameConfig) -> Self {
        let mut rng = rng_for(&config);
        let world = deal_new_world(&mut rng);
        info!("Game: new game dealt (seed: {:?})", config.seed);
        Game { world, config, rng, restarts: 0, on_win: None }
    }

    /// 勝利フックを付けて返すビルダー。
    pub fn with_win_hook(mut self, hook: impl FnMut() + 'static) -> Self {
        self.set_on_win(hook);
        self
    }

    /// 勝利フックを登録するよ。前のフックは置き換え。リスタートしても残る。
    pub fn set_on_win(&mut self, hook: impl FnMut() + 'static) {
        self.on_win = Some(Box::new(hook));
    }

    /// 中の World を読むよ。書き換えは命令メソッド経由でね。
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    // --- 問い合わせ ---

    pub fn status(&self) -> GameStatus {
        rules::game_state(&self.world).map_or(GameStatus::Dealing, |state| state.status)
    }

    pub fn is_won(&self) -> bool {
        self.status() == GameStatus::Won
    }

    /// 山札 (Hand) の残り枚数。
    pub fn hand_len(&self) -> usize {
        rules::stack_len(&self.world, StackType::Stock)
    }

    /// 捨て札を下から順に。
    pub fn drawn(&self) -> Vec<Card> {
        self.cards(StackType::Waste)
    }

    /// 今めくられている Draw1..Draw3。足りないところは `None`。
    pub fn draw_slots(&self) -> [Option<Card>; DRAW_COUNT] {
        rules::draw_slot_entities(&self.world).map(|slot| slot.map(|entity| card_of(&self.world, entity)))
    }

    /// 捨て札から今遊べる 1 枚。
    pub fn playable_draw(&self) -> Option<Card> {
        rules::playable_waste_entity(&self.world).map(|entity| card_of(&self.world, entity))
    }

    /// 場札 `index` 列目のカードを下から順に。範囲外なら空。
    pub fn stack(&self, index: usize) -> Vec<Card> {
        if index >= TABLEAU_COUNT {
            return Vec::new();
        }
        self.cards(StackType::Tableau(index as u8))
    }

    /// 組札 `index` のカードを A から順に。範囲外なら空。
    pub fn foundation(&self, index: usize) -> Vec<Card> {
        if index >= FOUNDATION_COUNT {
            return Vec::new();
        }
        self.cards(StackType::Foundation(index as u8))
    }

    pub fn foundation_top(&self, index: usize) -> Option<Card> {
        if index >= FOUNDATION_COUNT {
            return None;
        }
        get_top_card(&self.world, StackType::Foundation(index as u8))
    }

    /// 組札 4 つに乗ってるカードの合計。
    pub fn foundation_total(&self) -> usize {
        (0..FOUNDATION_COUNT as u8)
            .map(|i| rules::stack_len(&self.world, StackType::Foundation(i)))
            .sum()
    }

    /// UI に渡すためのスナップショット。
    pub fn snapshot(&self) -> GameStateData {
        let to_data = |cards: Vec<Card>| cards.into_iter().map(CardData::from).collect::<Vec<_>>();
        GameStateData {
            status: self.status(),
            hand_count: self.hand_len(),
            waste: to_data(self.drawn()),
            draw: self.draw_slots().map(|slot| slot.map(CardData::from)),
            tableau: (0..TABLEAU_COUNT).map(|i| to_data(self.stack(i))).collect(),
            foundations: (0..FOUNDATION_COUNT).map(|i| to_data(self.foundation(i))).collect(),
        }
    }

    // --- 命令 ---

    /// 山札をタップ。3 枚めくるか、山札が空なら捨て札を戻す。どっちもできなければ `false`。
    pub fn draw_three(&mut self) -> bool {
        if !self.accepting_moves("draw_three") {
            return false;
        }
        let applied = draw_system::draw_three(&mut self.world) != DrawOutcome::Nothing;
        self.after_command();
        applied
    }

    /// カードを組札 `foundation` へ。
    ///
    /// # パニック
    /// `card` がどの山にも入ってないとき (UI とエンジンの状態がずれてる)。
    pub fn move_card_to_build(&mut self, foundation: usize, card: Card) -> bool {
        if !self.accepting_moves("move_card_to_build") {
            return false;
        }
        if foundation >= FOUNDATION_COUNT {
            debug!("Game: foundation {} does not exist", foundation);
            return false;
        }
        let applied = MoveCardSystem::move_to_foundation(&mut self.world, card_entity(&card), foundation as u8);
        self.after_command();
        applied
    }

    /// カードを場札 `stack` へ。場札の途中のカードなら、その上の列ごと動く。
    ///
    /// # パニック
    /// `move_card_to_build` と同じ。
    pub fn move_card_to_stack(&mut self, stack: usize, card: Card) -> bool {
        if !self.accepting_moves("move_card_to_stack") {
            return false;
        }
        if stack >= TABLEAU_COUNT {
            debug!("Game: tableau column {} does not exist", stack);
            return false;
        }
        let applied = MoveCardSystem::move_to_tableau(&mut self.world, card_entity(&card), stack as u8);
        self.after_command();
        applied
    }

    /// 行き先の組札をこっちで選んで送る (ダブルクリック用)。
    pub fn auto_build(&mut self, card: Card) -> bool {
        if !self.accepting_moves("auto_build") {
            return false;
        }
        let entity = card_entity(&card);
        let applied = match find_automatic_foundation_move(&self.world, entity) {
            Some(StackType::Foundation(index)) => MoveCardSystem::move_to_foundation(&mut self.world, entity, index),
            _ => false,
        };
        self.after_command();
        applied
    }

    /// まだ 1 枚もめくってないうちだけ、山札の残りを混ぜ直せるよ。
    pub fn shuffle_stock(&mut self) -> bool {
        if !self.accepting_moves("shuffle_stock") {
            return false;
        }
        draw_system::shuffle_stock(&mut self.world, &mut self.rng)
    }

    /// 新しいゲームを配り直す。勝利フックだけは引き継ぐよ。
    ///
    /// シードありの設定なら、リスタートのたびにシードを 1 ずつずらすので毎回違う配り方になる。
    pub fn restart(&mut self) -> bool {
        self.restarts += 1;
        let config = self.config.advanced(self.restarts);
        self.rng = rng_for(&config);
        self.world = deal_new_world(&mut self.rng);
        info!("Game: restarted (#{}, seed: {:?})", self.restarts, config.seed);
        true
    }

    /// シリアライズされた命令を実行するよ。カード番号が範囲外なら `false`。
    pub fn apply(&mut self, command: Command) -> bool {
        debug!("Game: applying {:?}", command);
        match command {
            Command::DrawThree => self.draw_three(),
            Command::MoveToBuild { card, foundation } => match Card::from_index(card) {
                Some(card) => self.move_card_to_build(foundation, card),
                None => unknown_card(card),
            },
            Command::MoveToStack { card, stack } => match Card::from_index(card) {
                Some(card) => self.move_card_to_stack(stack, card),
                None => unknown_card(card),
            },
            Command::AutoBuild { card } => match Card::from_index(card) {
                Some(card) => self.auto_build(card),
                None => unknown_card(card),
            },
            Command::ShuffleStock => self.shuffle_stock(),
            Command::Restart => self.restart(),
        }
    }

    fn cards(&self, stack_type: StackType) -> Vec<Card> {
        cards_in_stack(&self.world, stack_type)
            .into_iter()
            .map(|entity| card_of(&self.world, entity))
            .collect()
    }

    /// 勝ったあとはリスタート以外なにも受け付けない。
    fn accepting_moves(&self, command: &str) -> bool {
        let won = self.is_won();
        if won {
            debug!("Game: {} ignored, the game is already won", command);
        }
        !won
    }

    /// 命令のたびに勝利判定。Playing → Won になった瞬間だけフックを呼ぶ。
    fn after_command(&mut self) {
        let mut win_check = WinConditionSystem::new();
        win_check.run(&mut self.world);
        if win_check.just_won() {
            if let Some(hook) = self.on_win.as_mut() {
                hook();
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown_card(index: usize) -> bool {
    warn!("Game: card index {} does not exist", index);
    false
}

/// コンポーネントを登録した空の World を作って、シャッフルしたデッキを配る。
fn deal_new_world(rng: &mut StdRng) -> World {
    let mut world = World::new();
    world.register_component::<Card>();
    world.register_component::<StackInfo>();
    world.register_component::<GameState>();

    let deck = create_shuffled_deck(rng);
    DealInitialCardsSystem::new(deck).run(&mut world);
    world
}
