//! AIの盤面評価システム
//! 候補手を複製盤面で1手だけシミュレートし、
//! 打った直後の自分の石数を評価値として返す。

use crate::game::{Board, Player, Position, ReversiRules};

/// 盤面評価を行うスタティックメソッド集
pub struct BoardEvaluator;

impl BoardEvaluator {
    /// 指定した手を打った直後のプレイヤーの石数を計算する
    /// 実際の盤面は変更せず、複製した盤面でシミュレートする
    /// 非合法手の場合はNoneを返す
    pub fn resulting_piece_count(board: &Board, position: Position, player: Player) -> Option<u8> {
        let mut copy = board.clone();
        ReversiRules::apply_move(&mut copy, position, player).ok()?;
        Some(copy.count_for(player))
    }

    /// 石数に基づく評価
    /// 自分の石数 - 相手の石数で計算
    pub fn evaluate_piece_count(board: &Board, player: Player) -> i16 {
        let own = board.count_for(player) as i16;
        let opponent = board.count_for(player.opposite()) as i16;
        own - opponent
    }
}
