//! プレイヤー入力の解析モジュール
//! 「列・行」2桁形式の手の入力、コマンド、石の選択、yes/noを解析する。
//! 座標の範囲チェックはこの境界で1度だけ行い、0-indexedに変換する。

use crate::game::{Player, Position};

/// プレイヤーターンで受け付けるコマンドを表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// 指定した位置への着手
    Place(Position),
    /// ヒント表示の切り替え
    Hints,
    /// ゲームの終了
    Quit,
}

/// プレイヤーターンの入力1行を解析する
/// 手は列(1-8)・行(1-8)の2桁（例: "46"は4列目・6行目）
/// 解析できない入力はNoneを返す
pub fn parse_command(raw: &str) -> Option<PlayerCommand> {
    let trimmed = raw.trim().to_lowercase();

    match trimmed.as_str() {
        "quit" => return Some(PlayerCommand::Quit),
        "hints" => return Some(PlayerCommand::Hints),
        _ => {}
    }

    let mut chars = trimmed.chars();
    let (first, second) = (chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }

    let col = digit_1_to_8(first)?;
    let row = digit_1_to_8(second)?;

    // 1-indexedの列・行を0-indexedの座標へ変換
    Position::new(row - 1, col - 1).map(PlayerCommand::Place)
}

/// '1'-'8'の文字を数値に変換する
fn digit_1_to_8(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(d) if (1..=8).contains(&d) => Some(d as usize),
        _ => None,
    }
}

/// 石の選択入力を解析する
/// Xが黒（先手の石）、Oが白に対応する
pub fn parse_tile_choice(raw: &str) -> Option<Player> {
    match raw.trim().to_uppercase().as_str() {
        "X" => Some(Player::Black),
        "O" => Some(Player::White),
        _ => None,
    }
}

/// yes/no入力を解析する
/// yで始まる入力のみyesとみなす
pub fn parse_yes_no(raw: &str) -> bool {
    raw.trim().to_lowercase().starts_with('y')
}
