//! Gomoku rule engine with double-three and double-four restrictions
//!
//! Judges each stone as it is placed on a rectangular board:
//! - A line of `to_win` or more stones wins (overlines allowed)
//! - Two open fours at once are forbidden
//! - Two open threes at once are forbidden
//!
//! # Architecture
//!
//! - [`board`]: Board, stones and positions
//! - [`rules`]: Line scanning primitives
//! - [`engine`]: Rule engine classifying a placement
//! - [`session`]: Turn bookkeeping around the engine
//! - [`config`]: Game parameters from arguments or TOML
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameConfig, GameSession, Outcome, Pos};
//!
//! let mut session = GameSession::new(GameConfig::default());
//! let report = session.place(Pos::new(9, 9)).unwrap();
//! assert_eq!(report.outcome, Outcome::Normal);
//! println!("{}", session.status_line());
//! ```
//!
//! Forbidden placements are checked before wins, so a move completing five
//! while forming two open fours is still rejected.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, AXES, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use config::{ConfigWarning, GameConfig};
pub use engine::{Outcome, RuleEngine};
pub use error::{ConfigError, RuleError, SessionError};
pub use session::{GameSession, GameStatus, MoveReport};
