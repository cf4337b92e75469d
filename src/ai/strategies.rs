//! AI戦略の実装モジュール
//! 異なるAI戦略（ランダム、貪欲法）を定義し、
//! 統一されたインターフェースで提供する。

use crate::ai::evaluation::BoardEvaluator;
use crate::error::AIError;
use crate::game::{GameState, Position, ReversiRules};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// AIの難易度を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// 初心者レベル（ランダム戦略）
    Beginner,
    /// 標準レベル（1手読みの貪欲法）
    Standard,
}

/// AI戦略の共通インターフェース
/// 異なるAI実装を統一して扱うためのtrait
/// タイブレークに乱数を使うため手の計算は&mut selfを取る
pub trait AIStrategy {
    /// ゲーム状態から次の手を計算する
    fn calculate_move(&mut self, game_state: &GameState) -> Result<Position, AIError>;
    /// このAIの難易度を返す
    fn get_difficulty(&self) -> Difficulty;
    /// AIの名前を返す
    fn get_name(&self) -> &'static str;
}

/// 合法手の中から着手可能な手を列挙する共通処理
/// 終了済みゲームと合法手なしをエラーとして弾く
fn playable_moves(game_state: &GameState) -> Result<Vec<Position>, AIError> {
    if game_state.is_finished() {
        return Err(AIError::StrategyError {
            message: "Cannot calculate move for finished game".to_string(),
        });
    }

    let valid_moves = ReversiRules::get_valid_moves(&game_state.board, game_state.current_player);
    if valid_moves.is_empty() {
        return Err(AIError::NoValidMoves);
    }

    Ok(valid_moves)
}

/// ランダムに手を選択するAI実装
/// 初心者レベルで、合法手の中から一様ランダムに選ぶ
#[derive(Debug)]
pub struct RandomAI<R: Rng = StdRng> {
    rng: R,
}

impl RandomAI<StdRng> {
    /// エントロピーから初期化した乱数生成器で新しいRandomAIを作成する
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// 指定したシードで再現可能なRandomAIを作成する
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomAI<R> {
    /// 任意の乱数生成器を注入してRandomAIを作成する
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RandomAI<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AIStrategy for RandomAI<R> {
    fn calculate_move(&mut self, game_state: &GameState) -> Result<Position, AIError> {
        let valid_moves = playable_moves(game_state)?;
        let index = self.rng.gen_range(0..valid_moves.len());
        Ok(valid_moves[index])
    }

    fn get_difficulty(&self) -> Difficulty {
        Difficulty::Beginner
    }

    fn get_name(&self) -> &'static str {
        "RandomAI"
    }
}

/// 1手読みの貪欲法を使用するAI実装
/// 隅が取れるなら必ず隅を取り、そうでなければ
/// 各候補手を複製盤面でシミュレートして石数が最大になる手を選ぶ。
/// 同点の手はシャッフル後に最初に現れたものが選ばれる
#[derive(Debug)]
pub struct GreedyAI<R: Rng = StdRng> {
    rng: R,
}

impl GreedyAI<StdRng> {
    /// エントロピーから初期化した乱数生成器で新しいGreedyAIを作成する
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// 指定したシードで再現可能なGreedyAIを作成する
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> GreedyAI<R> {
    /// 任意の乱数生成器を注入してGreedyAIを作成する
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for GreedyAI<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AIStrategy for GreedyAI<R> {
    fn calculate_move(&mut self, game_state: &GameState) -> Result<Position, AIError> {
        let mut candidates = playable_moves(game_state)?;
        let player = game_state.current_player;

        // タイブレークを座標順にしないため先にシャッフルする
        candidates.shuffle(&mut self.rng);

        // 隅が取れるなら常に隅を選ぶ
        if let Some(&corner) = candidates.iter().find(|position| position.is_corner()) {
            return Ok(corner);
        }

        let mut best_move = None;
        let mut best_score = 0u8;
        for &candidate in &candidates {
            let score = BoardEvaluator::resulting_piece_count(&game_state.board, candidate, player)
                .ok_or_else(|| AIError::StrategyError {
                    message: format!(
                        "Candidate ({}, {}) failed to simulate",
                        candidate.row, candidate.col
                    ),
                })?;

            // 「より大きい」のみ更新するのでシャッフル後の先頭が同点勝者になる
            if best_move.is_none() || score > best_score {
                best_move = Some(candidate);
                best_score = score;
            }
        }

        best_move.ok_or(AIError::NoValidMoves)
    }

    fn get_difficulty(&self) -> Difficulty {
        Difficulty::Standard
    }

    fn get_name(&self) -> &'static str {
        "GreedyAI"
    }
}

/// 難易度に応じたAI戦略を生成するファクトリ関数
/// シードを指定すると再現可能な戦略を返す
pub fn create_ai_strategy(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn AIStrategy> {
    match (difficulty, seed) {
        (Difficulty::Beginner, Some(seed)) => Box::new(RandomAI::from_seed(seed)),
        (Difficulty::Beginner, None) => Box::new(RandomAI::new()),
        (Difficulty::Standard, Some(seed)) => Box::new(GreedyAI::from_seed(seed)),
        (Difficulty::Standard, None) => Box::new(GreedyAI::new()),
    }
}
