//! 対話セッション管理モジュール
//! ターンの交互進行、パス判定、コンピュータの手の実行、
//! 「もう一度遊ぶ」ループなどゲーム全体の進行を担当する。

use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai::strategies::{create_ai_strategy, AIStrategy};
use crate::cli::display;
use crate::cli::input::{self, PlayerCommand};
use crate::config::{Config, FirstTurn};
use crate::error::Result;
use crate::game::{GameState, Player, Position, ReversiRules};

/// プレイヤーターンの結果を表すenum
enum TurnAction {
    Place(Position),
    ToggleHints,
    Quit,
}

/// 1回の対話セッション全体を管理する構造体
/// 設定と先手決定用の乱数生成器を保持する
pub struct GameSession {
    config: Config,
    rng: StdRng,
}

impl GameSession {
    /// 設定からセッションを作成する
    /// シードが指定されていれば先手決定も再現可能になる
    pub fn new(config: Config) -> Self {
        let rng = match config.ai.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// セッションを実行する
    /// 石の選択、ゲームの繰り返し、終了処理までを担当する
    pub fn run(&mut self, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
        writeln!(output, "リバーシゲームへようこそ！")?;

        let human = match prompt_tile_choice(input, output)? {
            Some(player) => player,
            None => {
                writeln!(output, "遊んでくれてありがとう！")?;
                return Ok(());
            }
        };

        loop {
            match self.play_game(human, input, output)? {
                Some(final_state) => {
                    writeln!(output, "{}", display::render_board(&final_state.board))?;
                    let (black_count, white_count) = final_state.get_score();
                    writeln!(output, "Xは{}石、Oは{}石でした。", black_count, white_count)?;
                    writeln!(
                        output,
                        "{}",
                        display::format_final_result(&final_state.board, human)
                    )?;

                    if !prompt_play_again(input, output)? {
                        break;
                    }
                }
                // 途中終了（quitまたは入力の終端）
                None => break,
            }
        }

        writeln!(output, "遊んでくれてありがとう！")?;
        Ok(())
    }

    /// 1ゲームを終局または途中終了まで進行する
    /// 終局時は終了状態のGameState、途中終了時はNoneを返す
    fn play_game(
        &mut self,
        human: Player,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<Option<GameState>> {
        let computer = human.opposite();

        let first = match self.config.game.first_turn {
            FirstTurn::Random => {
                if self.rng.gen_bool(0.5) {
                    human
                } else {
                    computer
                }
            }
            FirstTurn::Player => human,
            FirstTurn::Computer => computer,
        };

        let first_name = if first == human { "あなた" } else { "コンピュータ" };
        writeln!(output, "{}が先手です。", first_name)?;

        let mut ai = create_ai_strategy(self.config.ai.difficulty, self.config.ai.rng_seed);
        let mut state = GameState::with_first_player(first);
        let mut show_hints = self.config.game.show_hints;

        loop {
            if ReversiRules::is_game_over(&state.board) {
                let winner = ReversiRules::determine_winner(&state.board);
                state.finish(winner);
                return Ok(Some(state));
            }

            let current = state.current_player;
            if !ReversiRules::has_valid_moves(&state.board, current) {
                // 合法手がない側はターンを飛ばす
                state.switch_player();
                continue;
            }

            if current == human {
                if show_hints {
                    writeln!(output, "{}", display::render_board_with_hints(&state.board, human))?;
                } else {
                    writeln!(output, "{}", display::render_board(&state.board))?;
                }
                writeln!(output, "{}", display::format_score_line(&state.board, human))?;

                match prompt_move(&state, human, input, output)? {
                    TurnAction::Quit => return Ok(None),
                    TurnAction::ToggleHints => show_hints = !show_hints,
                    TurnAction::Place(position) => {
                        state.play(position)?;
                    }
                }
            } else {
                writeln!(output, "{}", display::render_board(&state.board))?;
                writeln!(output, "{}", display::format_score_line(&state.board, human))?;
                writeln!(output, "Enterキーでコンピュータの手を表示します。")?;

                if read_line(input)?.is_none() {
                    return Ok(None);
                }

                let position = ai.calculate_move(&state)?;
                writeln!(
                    output,
                    "コンピュータは {}{} に置きました。",
                    position.col + 1,
                    position.row + 1
                )?;
                state.play(position)?;
            }
        }
    }
}

/// プレイヤーに使用する石を選ばせる
/// 入力の終端に達した場合はNoneを返す
fn prompt_tile_choice(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<Player>> {
    loop {
        writeln!(output, "XとOのどちらを使いますか？ (X/O)")?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(None),
        };

        if let Some(player) = input::parse_tile_choice(&line) {
            return Ok(Some(player));
        }
    }
}

/// 合法手が入力されるまでプレイヤーに手を求める
/// quit・ヒント切替・入力の終端でもループを抜ける
fn prompt_move(
    state: &GameState,
    human: Player,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<TurnAction> {
    loop {
        writeln!(
            output,
            "手を入力してください（例: 46）。\"quit\"で終了、\"hints\"でヒント切替。"
        )?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(TurnAction::Quit),
        };

        match input::parse_command(&line) {
            Some(PlayerCommand::Quit) => return Ok(TurnAction::Quit),
            Some(PlayerCommand::Hints) => return Ok(TurnAction::ToggleHints),
            Some(PlayerCommand::Place(position)) => {
                if ReversiRules::is_valid_move(&state.board, position, human) {
                    return Ok(TurnAction::Place(position));
                }
                writeln!(output, "そこには置けません。")?;
            }
            None => {
                writeln!(
                    output,
                    "無効な入力です。列(1-8)と行(1-8)の2桁で入力してください。例: 81 は右上隅です。"
                )?;
            }
        }
    }
}

/// もう一度遊ぶかを確認する
/// 入力の終端はnoとして扱う
fn prompt_play_again(input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    writeln!(output, "もう一度遊びますか？ (yes/no)")?;

    match read_line(input)? {
        Some(line) => Ok(input::parse_yes_no(&line)),
        None => Ok(false),
    }
}

/// 入力から1行読み込む
/// 終端に達した場合はNoneを返す
fn read_line(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AiConfig, GameConfig};
    use crate::ai::strategies::Difficulty;
    use std::io::Cursor;

    fn test_config(first_turn: FirstTurn) -> Config {
        Config {
            game: GameConfig {
                show_hints: false,
                first_turn,
            },
            ai: AiConfig {
                difficulty: Difficulty::Standard,
                rng_seed: Some(42),
            },
        }
    }

    fn run_session(config: Config, script: &str) -> String {
        let mut session = GameSession::new(config);
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();

        session.run(&mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_quit_immediately() {
        let output = run_session(test_config(FirstTurn::Player), "x\nquit\n");

        assert!(output.contains("リバーシゲームへようこそ！"));
        assert!(output.contains("あなたが先手です。"));
        assert!(output.contains("あなた: 2石  コンピュータ: 2石"));
        assert!(output.contains("遊んでくれてありがとう！"));
    }

    #[test]
    fn test_session_retries_tile_choice() {
        let output = run_session(test_config(FirstTurn::Player), "z\no\nquit\n");

        // 1回目の不正入力で選択プロンプトが繰り返される
        let prompt_count = output.matches("XとOのどちらを使いますか？").count();
        assert_eq!(prompt_count, 2);
    }

    #[test]
    fn test_session_computer_moves_first() {
        let output = run_session(test_config(FirstTurn::Computer), "x\n\nquit\n");

        assert!(output.contains("コンピュータが先手です。"));
        assert!(output.contains("Enterキーでコンピュータの手を表示します。"));
        assert!(output.contains("コンピュータは "));
    }

    #[test]
    fn test_session_rejects_illegal_move_then_quits() {
        // "11"は初期盤面では非合法なので再入力になる
        let output = run_session(test_config(FirstTurn::Player), "x\n11\nquit\n");

        assert!(output.contains("そこには置けません。"));
        assert!(output.contains("遊んでくれてありがとう！"));
    }

    #[test]
    fn test_session_malformed_move_shows_guidance() {
        let output = run_session(test_config(FirstTurn::Player), "x\nabc\nquit\n");

        assert!(output.contains("無効な入力です。"));
    }

    #[test]
    fn test_session_eof_treated_as_quit() {
        let output = run_session(test_config(FirstTurn::Player), "x\n");

        assert!(output.contains("遊んでくれてありがとう！"));
    }

    #[test]
    fn test_session_hints_toggle() {
        let output = run_session(test_config(FirstTurn::Player), "x\nhints\nquit\n");

        // 切り替え後の盤面には合法手の.マークが現れる
        assert!(output.contains("4|  .OX   |4"));
    }
}
