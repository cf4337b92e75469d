//! 端末向けの盤面表示モジュール
//! 枠付きの盤面描画、ヒント表示、スコア表示を担当する。

use crate::game::{Board, Cell, Player, Position, ReversiRules};

/// セル状態を表示用の文字に変換する
pub fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Black => 'X',
        Cell::White => 'O',
    }
}

/// プレイヤーを表示用の文字に変換する
pub fn player_symbol(player: Player) -> char {
    cell_symbol(player.to_cell())
}

/// 枠と1-8の座標ラベル付きで盤面を描画する
/// 列が横方向、行が縦方向に対応する
pub fn render_board(board: &Board) -> String {
    render(board, &[])
}

/// 合法手を.で示した盤面を描画する
/// ヒント表示が有効な場合のプレイヤーターンで使用する
pub fn render_board_with_hints(board: &Board, player: Player) -> String {
    let hints = ReversiRules::get_valid_moves(board, player);
    render(board, &hints)
}

fn render(board: &Board, hints: &[Position]) -> String {
    let mut result = String::new();
    result.push_str("  12345678\n");
    result.push_str(" +--------+\n");

    for row in 0..8 {
        result.push_str(&format!("{}|", row + 1));
        for col in 0..8 {
            let position = Position { row, col };
            if hints.contains(&position) {
                result.push('.');
            } else {
                let cell = board.get_cell(position).unwrap_or(Cell::Empty);
                result.push(cell_symbol(cell));
            }
        }
        result.push_str(&format!("|{}\n", row + 1));
    }

    result.push_str(" +--------+\n");
    result.push_str("  12345678\n");
    result
}

/// プレイヤー視点の現在スコアを整形する
pub fn format_score_line(board: &Board, human: Player) -> String {
    let human_count = board.count_for(human);
    let computer_count = board.count_for(human.opposite());
    format!("あなた: {}石  コンピュータ: {}石", human_count, computer_count)
}

/// 最終結果のメッセージを整形する
/// 勝敗と石差、引き分けを判定して返す
pub fn format_final_result(board: &Board, human: Player) -> String {
    let human_count = board.count_for(human);
    let computer_count = board.count_for(human.opposite());

    if human_count > computer_count {
        format!(
            "あなたの勝ちです！{}石差でコンピュータに勝ちました！",
            human_count - computer_count
        )
    } else if human_count < computer_count {
        format!(
            "あなたの負けです。コンピュータに{}石差で負けました。",
            computer_count - human_count
        )
    } else {
        "引き分けです！".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_symbol() {
        assert_eq!(cell_symbol(Cell::Black), 'X');
        assert_eq!(cell_symbol(Cell::White), 'O');
        assert_eq!(cell_symbol(Cell::Empty), ' ');
    }

    #[test]
    fn test_player_symbol() {
        assert_eq!(player_symbol(Player::Black), 'X');
        assert_eq!(player_symbol(Player::White), 'O');
    }

    #[test]
    fn test_render_board_frame() {
        let board = Board::new();
        let rendered = render_board(&board);

        assert!(rendered.contains("  12345678"));
        assert!(rendered.contains(" +--------+"));
        // 初期配置の4行目と5行目（1-indexed）
        assert!(rendered.contains("4|   OX   |4"));
        assert!(rendered.contains("5|   XO   |5"));
    }

    #[test]
    fn test_render_board_with_hints_marks_valid_moves() {
        let board = Board::new();
        let rendered = render_board_with_hints(&board, Player::Black);

        // 黒の初期合法手 (2,3) は4列目・3行目に.として現れる
        assert!(rendered.contains("3|   .    |3"));
        assert!(rendered.contains("4|  .OX   |4"));
    }

    #[test]
    fn test_render_board_without_hints_has_no_dots() {
        let board = Board::new();
        let rendered = render_board(&board);

        assert!(!rendered.contains('.'));
    }

    #[test]
    fn test_format_score_line() {
        let board = Board::new();
        let line = format_score_line(&board, Player::Black);

        assert!(line.contains("あなた: 2石"));
        assert!(line.contains("コンピュータ: 2石"));
    }

    #[test]
    fn test_format_final_result_win_lose_tie() {
        let mut board = Board::new();
        assert_eq!(format_final_result(&board, Player::Black), "引き分けです！");

        board.set_cell(Position::new(0, 0).unwrap(), Cell::Black);
        assert!(format_final_result(&board, Player::Black).contains("勝ち"));
        assert!(format_final_result(&board, Player::White).contains("負け"));
    }
}
