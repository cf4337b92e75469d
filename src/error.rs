//! アプリケーション全体のエラー定義モジュール
//! ゲームロジック、AI戦略、端末入出力のエラーを統一管理。

use thiserror::Error;

/// ゲームロジックに関連するエラー
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid move: {reason}")]
    InvalidMove { reason: String },

    #[error("Game already finished")]
    GameFinished,

    #[error("AI calculation failed: {source}")]
    AIError {
        #[from]
        source: AIError,
    },

    #[error("Terminal I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// AI戦略に関連するエラー
#[derive(Debug, Error)]
pub enum AIError {
    #[error("No valid moves available")]
    NoValidMoves,

    #[error("AI strategy error: {message}")]
    StrategyError { message: String },
}

/// ゲームエラーをベースとした結果型
pub type Result<T> = std::result::Result<T, GameError>;
