//! Game configuration: win length and board dimensions
//!
//! Parameters come either from positional command-line arguments, where bad
//! values fall back to defaults with a warning, or from a TOML file, where
//! they are validated strictly.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::ConfigError;

/// Stones in a row needed to win unless configured otherwise
pub const DEFAULT_TO_WIN: i32 = 5;

/// Smallest board accepted on either side
pub const MIN_BOARD_SIZE: usize = 5;

/// Win length rejected by the game rules
const FORBIDDEN_TO_WIN: i32 = 3;

/// Parameters of one game, fixed for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub to_win: i32,
    pub rows: usize,
    pub columns: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            to_win: DEFAULT_TO_WIN,
            rows: DEFAULT_BOARD_SIZE,
            columns: DEFAULT_BOARD_SIZE,
        }
    }
}

/// A positional argument that was replaced by a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    ThreeToWin,
    BoardTooSmall { rows: usize, columns: usize },
    BoardTooLarge { rows: usize, columns: usize },
    Unparsable(String),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::ThreeToWin => write!(
                f,
                "{} stones to win violates game rules, using {}",
                FORBIDDEN_TO_WIN, DEFAULT_TO_WIN
            ),
            ConfigWarning::BoardTooSmall { rows, columns } => write!(
                f,
                "board {}x{} is below the {}x{} minimum, using {}x{}",
                rows, columns, MIN_BOARD_SIZE, MIN_BOARD_SIZE, DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE
            ),
            ConfigWarning::BoardTooLarge { rows, columns } => write!(
                f,
                "board {}x{} is above the {}x{} maximum, using {}x{}",
                rows, columns, MAX_BOARD_SIZE, MAX_BOARD_SIZE, DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE
            ),
            ConfigWarning::Unparsable(arg) => {
                write!(f, "invalid argument '{}', using default win length and board size", arg)
            }
        }
    }
}

impl GameConfig {
    pub fn new(to_win: i32, rows: usize, columns: usize) -> Self {
        GameConfig { to_win, rows, columns }
    }

    /// Resolve positional arguments: `TO_WIN`, `ROWS COLUMNS` or
    /// `TO_WIN ROWS COLUMNS`. Any other count keeps the defaults.
    ///
    /// A win length of 3 becomes the default win length without touching
    /// the board dimensions, whichever form it arrives in.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> (Self, Vec<ConfigWarning>) {
        let mut warnings = Vec::new();
        let parsed = match args {
            [to_win] => parse_i32(to_win.as_ref()).map(|to_win| (Some(to_win), None)),
            [rows, columns] => parse_dims(rows.as_ref(), columns.as_ref()).map(|dims| (None, Some(dims))),
            [to_win, rows, columns] => parse_i32(to_win.as_ref()).and_then(|to_win| {
                parse_dims(rows.as_ref(), columns.as_ref()).map(|dims| (Some(to_win), Some(dims)))
            }),
            _ => Ok((None, None)),
        };

        let mut config = GameConfig::default();
        match parsed {
            Ok((to_win, dims)) => {
                if let Some(to_win) = to_win {
                    if to_win == FORBIDDEN_TO_WIN {
                        warnings.push(ConfigWarning::ThreeToWin);
                    } else {
                        config.to_win = to_win;
                    }
                }
                if let Some((rows, columns)) = dims {
                    if rows < MIN_BOARD_SIZE || columns < MIN_BOARD_SIZE {
                        warnings.push(ConfigWarning::BoardTooSmall { rows, columns });
                    } else if rows > MAX_BOARD_SIZE || columns > MAX_BOARD_SIZE {
                        warnings.push(ConfigWarning::BoardTooLarge { rows, columns });
                    } else {
                        config.rows = rows;
                        config.columns = columns;
                    }
                }
            }
            Err(bad) => warnings.push(ConfigWarning::Unparsable(bad)),
        }

        (config, warnings)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply the game rules to the configured values.
    ///
    /// A non-positive win length or one longer than the board is allowed;
    /// such a game simply has no winner.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.to_win == FORBIDDEN_TO_WIN {
            return Err(ConfigError::Validation(format!(
                "to_win of {} violates game rules",
                FORBIDDEN_TO_WIN
            )));
        }
        if self.rows < MIN_BOARD_SIZE || self.columns < MIN_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board must be at least {}x{}, got {}x{}",
                MIN_BOARD_SIZE, MIN_BOARD_SIZE, self.rows, self.columns
            )));
        }
        if self.rows > MAX_BOARD_SIZE || self.columns > MAX_BOARD_SIZE {
            return Err(ConfigError::Validation(format!(
                "board must be at most {}x{}, got {}x{}",
                MAX_BOARD_SIZE, MAX_BOARD_SIZE, self.rows, self.columns
            )));
        }
        Ok(())
    }
}

fn parse_i32(arg: &str) -> Result<i32, String> {
    arg.trim().parse().map_err(|_| arg.to_string())
}

fn parse_usize(arg: &str) -> Result<usize, String> {
    arg.trim().parse().map_err(|_| arg.to_string())
}

fn parse_dims(rows: &str, columns: &str) -> Result<(usize, usize), String> {
    Ok((parse_usize(rows)?, parse_usize(columns)?))
}
