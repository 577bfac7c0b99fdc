use std::path::PathBuf;

use crate::board::{Pos, Stone};

/// Errors reported by the rule engine for calls that break its contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("position ({row}, {col}) is outside the {rows}x{columns} board")]
    InvalidPosition {
        row: usize,
        col: usize,
        rows: usize,
        columns: usize,
    },

    #[error("inconsistent state at ({row}, {col}): expected {expected}, found {found}")]
    InconsistentState {
        row: usize,
        col: usize,
        expected: Stone,
        found: Stone,
    },

    #[error("no stone at ({row}, {col})")]
    EmptyCell { row: usize, col: usize },

    #[error("board is {board_rows}x{board_columns} but the engine was built for {rows}x{columns}")]
    BoardMismatch {
        board_rows: usize,
        board_columns: usize,
        rows: usize,
        columns: usize,
    },
}

/// Errors that can occur while playing a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("the game is over")]
    GameOver,

    #[error("{0} is outside the board")]
    OutOfBounds(Pos),

    #[error("{0} is already occupied")]
    Occupied(Pos),

    #[error("rule engine error: {0}")]
    Rule(#[from] RuleError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
