//! アプリケーション設定管理モジュール
//! 画面表示、先手の決め方、AI戦略などの設定を
//! 設定ファイルと環境変数から読み込んで管理する。

use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

use crate::ai::strategies::Difficulty;

/// ゲーム開始時の先手の決め方を表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstTurn {
    /// コイントスで決める（オリジナルの挙動）
    Random,
    /// 常にプレイヤーが先手
    Player,
    /// 常にコンピュータが先手
    Computer,
}

/// ゲーム進行に関する設定を管理する構造体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// ゲーム開始時からヒント表示を有効にするか
    pub show_hints: bool,
    /// 先手の決め方
    pub first_turn: FirstTurn,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            show_hints: false,
            first_turn: FirstTurn::Random,
        }
    }
}

/// コンピュータプレイヤーの設定を管理する構造体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// 使用するAI戦略の難易度
    pub difficulty: Difficulty,
    /// 乱数シード（指定するとAIの手が再現可能になる）
    pub rng_seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Standard,
            rng_seed: None,
        }
    }
}

/// アプリケーションの全設定を統合するメイン設定構造体
/// 各サブシステムの設定をまとめて管理する
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub game: GameConfig,
    pub ai: AiConfig,
}

/// 設定関連のエラーを表すenum
/// ファイル読み込み、パース、環境変数エラーなどを含む
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("設定ファイル読み込みエラー: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("設定ファイル解析エラー: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("環境変数エラー: {name} = {value}")]
    EnvVarError { name: String, value: String },
}

impl Config {
    /// 指定したファイルパスから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 環境変数で設定を上書きする
    /// 設定されていない変数は既存の値を維持する
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(show_hints) = env::var("REVERSEGAM_SHOW_HINTS") {
            self.game.show_hints = show_hints.parse().map_err(|_| ConfigError::EnvVarError {
                name: "REVERSEGAM_SHOW_HINTS".to_string(),
                value: show_hints,
            })?;
        }

        if let Ok(first_turn) = env::var("REVERSEGAM_FIRST_TURN") {
            self.game.first_turn = match first_turn.to_lowercase().as_str() {
                "random" => FirstTurn::Random,
                "player" => FirstTurn::Player,
                "computer" => FirstTurn::Computer,
                _ => {
                    return Err(ConfigError::EnvVarError {
                        name: "REVERSEGAM_FIRST_TURN".to_string(),
                        value: first_turn,
                    })
                }
            };
        }

        if let Ok(difficulty) = env::var("REVERSEGAM_AI_DIFFICULTY") {
            self.ai.difficulty = match difficulty.to_lowercase().as_str() {
                "beginner" => Difficulty::Beginner,
                "standard" => Difficulty::Standard,
                _ => {
                    return Err(ConfigError::EnvVarError {
                        name: "REVERSEGAM_AI_DIFFICULTY".to_string(),
                        value: difficulty,
                    })
                }
            };
        }

        if let Ok(seed) = env::var("REVERSEGAM_AI_SEED") {
            self.ai.rng_seed = Some(seed.parse().map_err(|_| ConfigError::EnvVarError {
                name: "REVERSEGAM_AI_SEED".to_string(),
                value: seed,
            })?);
        }

        Ok(())
    }

    /// 設定ファイルと環境変数を結合して設定を読み込む
    /// 設定ファイルがなくてもデフォルト値で動作する
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Ok(file_config) = Self::from_file("config.json") {
            config = file_config;
        } else if let Ok(file_config) = Self::from_file("config/reversegam.json") {
            config = file_config;
        }

        // 環境変数で設定を上書き（不正な値はデフォルト側を維持）
        let _ = config.apply_env();

        config
    }

    /// 現在の設定を指定したファイルに保存する
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
