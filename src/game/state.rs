//! ゲーム状態管理モジュール
//! リバーシゲームの全体的な状態（盤面、プレイヤー、進行状態など）を管理する。

use super::board::Board;
use super::rules::ReversiRules;
use super::types::{Move, Player, Position};
use crate::error::{GameError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ゲームの進行状態を表すenum
/// ゲームの状態遷移と終了時の情報を管理する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲーム進行中
    InProgress,
    /// ゲーム終了（勝者と最終スコアを記録）
    Finished {
        winner: Option<Player>,
        score: (u8, u8),
    },
}

/// リバーシゲームの全体状態を保持する構造体
/// 盤面、現在のプレイヤー、手の履歴などを全て含む
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub current_player: Player,
    pub game_status: GameStatus,
    pub move_history: Vec<Move>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl GameState {
    /// 新しいゲーム状態を作成する
    /// 初期状態：黒の番でゲーム開始
    pub fn new() -> Self {
        Self::with_first_player(Player::Black)
    }

    /// 先手を指定して新しいゲーム状態を作成する
    /// 先手はコイントスで決まるため黒とは限らない
    pub fn with_first_player(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            game_status: GameStatus::InProgress,
            move_history: Vec::new(),
            created_at: Utc::now(),
            last_updated: Utc::now(),
        }
    }

    /// ゲームが終了しているかチェックする
    pub fn is_finished(&self) -> bool {
        matches!(self.game_status, GameStatus::Finished { .. })
    }

    /// 現在のプレイヤーの手を盤面に適用する
    /// 成功時は手を履歴に記録し、手番を相手に渡す
    /// 非合法手の場合は状態を変更せずにエラーを返す
    pub fn play(&mut self, position: Position) -> Result<Vec<Position>> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }

        let player = self.current_player;
        let flipped = ReversiRules::apply_move(&mut self.board, position, player)?;

        self.add_move(Move::new(player, position, flipped.clone()));
        self.switch_player();

        Ok(flipped)
    }

    /// 現在のプレイヤーを交代する
    /// 手の実行後やパス時に呼び出される
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opposite();
        self.last_updated = Utc::now();
    }

    /// 手の履歴に新しい手を追加する
    /// 最終更新時刻も同時に更新する
    pub fn add_move(&mut self, game_move: Move) {
        self.move_history.push(game_move);
        self.last_updated = Utc::now();
    }

    /// ゲームを終了させる
    /// 勝者と最終スコアを記録する
    pub fn finish(&mut self, winner: Option<Player>) {
        let (black_count, white_count) = self.board.count_pieces();
        self.game_status = GameStatus::Finished {
            winner,
            score: (black_count, white_count),
        };
        self.last_updated = Utc::now();
    }

    /// 現在のスコアを取得する
    /// 戻り値: (黒石数, 白石数)
    pub fn get_score(&self) -> (u8, u8) {
        self.board.count_pieces()
    }

    /// これまでの手数を取得する
    pub fn get_move_count(&self) -> usize {
        self.move_history.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
