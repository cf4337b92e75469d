//! リバーシのルールとゲームロジック実装モジュール
//! 合法手の判定、石のフリップ処理、ゲーム終了判定などを担当する。

use super::board::Board;
use super::types::{Player, Position};
use crate::error::{GameError, Result};

/// 盤面上の8方向への移動ベクトル
/// 上下左右および斜めの8方向で石のフリップをチェックする
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),  // 左上、上、右上
    (0, -1),           (0, 1),   // 左、右
    (1, -1),  (1, 0),  (1, 1),   // 左下、下、右下
];

/// リバーシのルールを実装する構造体
/// スタティックメソッドのみを提供する
pub struct ReversiRules;

impl ReversiRules {
    /// 指定した位置に現在のプレイヤーが置けるかチェックする
    /// 空のマスで、かつ相手の石を少なくとも1個フリップできる必要がある
    pub fn is_valid_move(board: &Board, position: Position, player: Player) -> bool {
        !Self::get_flipped_positions(board, position, player).is_empty()
    }

    /// 指定した位置に石を置いた場合にフリップされる石の位置を返す
    /// 置けない位置（範囲外、既に石がある、1個もフリップできない）では空のリストを返す
    pub fn get_flipped_positions(board: &Board, position: Position, player: Player) -> Vec<Position> {
        if !position.is_valid() || !board.is_empty(position) {
            return Vec::new();
        }

        DIRECTIONS
            .iter()
            .flat_map(|&(dr, dc)| Self::captured_in_direction(board, position, dr, dc, player))
            .collect()
    }

    /// 1方向をたどってはさまれた相手の石を収集する
    /// 相手の石の列が自分の石で終端する場合のみその列を返し、
    /// 空マスや盤面の端で途切れる場合は空のリストを返す
    fn captured_in_direction(
        board: &Board,
        start: Position,
        delta_row: i8,
        delta_col: i8,
        player: Player,
    ) -> Vec<Position> {
        let own = player.to_cell();
        let opponent = player.opposite().to_cell();

        let mut run = Vec::new();
        let mut cursor = start.step(delta_row, delta_col);

        while let Some(position) = cursor {
            match board.get_cell(position) {
                Some(cell) if cell == opponent => run.push(position),
                Some(cell) if cell == own => return run,
                _ => break,
            }
            cursor = position.step(delta_row, delta_col);
        }

        // 自分の石にたどり着かなかったのでこの方向のフリップはない
        Vec::new()
    }

    /// 指定したプレイヤーの合法手を全て取得する
    /// 盤面全体をスキャンして合法手を探索する
    pub fn get_valid_moves(board: &Board, player: Player) -> Vec<Position> {
        let mut valid_moves = Vec::new();

        for row in 0..8 {
            for col in 0..8 {
                let position = Position { row, col };
                if Self::is_valid_move(board, position, player) {
                    valid_moves.push(position);
                }
            }
        }

        valid_moves
    }

    /// 指定した位置に手を適用し、盤面を更新する
    /// 非合法手の場合は盤面を変更せずにエラーを返す
    /// 戻り値はフリップされた石の位置リスト
    pub fn apply_move(board: &mut Board, position: Position, player: Player) -> Result<Vec<Position>> {
        let flipped_positions = Self::get_flipped_positions(board, position, player);

        if flipped_positions.is_empty() {
            return Err(GameError::InvalidMove {
                reason: format!(
                    "Position ({}, {}) is not a valid move for {:?}",
                    position.row, position.col, player
                ),
            });
        }

        // 新しい石を配置し、はさんだ石を全て自分の色に変更
        board.set_cell(position, player.to_cell());
        for flip_pos in &flipped_positions {
            board.set_cell(*flip_pos, player.to_cell());
        }

        Ok(flipped_positions)
    }

    /// 指定したプレイヤーに合法手があるかチェックする
    /// パス判定に使用される
    pub fn has_valid_moves(board: &Board, player: Player) -> bool {
        !Self::get_valid_moves(board, player).is_empty()
    }

    /// ゲーム終了判定（両プレイヤーとも合法手がない）
    pub fn is_game_over(board: &Board) -> bool {
        !Self::has_valid_moves(board, Player::Black) && !Self::has_valid_moves(board, Player::White)
    }

    /// 最終スコアに基づいて勝者を決定する
    /// 同数の場合はNone（引き分け）を返す
    pub fn determine_winner(board: &Board) -> Option<Player> {
        let (black_count, white_count) = board.count_pieces();

        if black_count > white_count {
            Some(Player::Black)
        } else if white_count > black_count {
            Some(Player::White)
        } else {
            None
        }
    }
}
