//! Rule engine classifying a freshly placed stone
//!
//! Every placement is checked along the four axes through the stone. The
//! classification order is fixed:
//!
//! 1. **Double-four**: two or more open lines of `to_win - 1`
//! 2. **Double-three**: two or more open lines of `to_win - 2`
//! 3. **Win**: any line of `to_win` or more (overlines included)
//! 4. **Normal**: anything else
//!
//! A move that completes a winning line while also forming a double pattern
//! is therefore rejected.
//!
//! # Example
//!
//! ```
//! use gomoku::{Board, Outcome, Pos, RuleEngine, Stone};
//!
//! let engine = RuleEngine::new(5, 19, 19);
//! let mut board = Board::new(19, 19);
//! for col in 0..5 {
//!     board.place_stone(Pos::new(0, col), Stone::Black);
//! }
//!
//! let outcome = engine.evaluate(&board, 0, 4, Stone::Black).unwrap();
//! assert_eq!(outcome, Outcome::Win);
//! ```

use std::fmt;

use crate::board::{Board, Pos, Stone, AXES};
use crate::config::GameConfig;
use crate::error::RuleError;
use crate::rules::LineScan;

/// Classification of a single placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The placement completes a line of at least `to_win` stones
    Win,
    /// Forbidden: two or more open fours at once
    DoubleFour,
    /// Forbidden: two or more open threes at once
    DoubleThree,
    /// Legal, game continues
    Normal,
}

impl Outcome {
    /// Double patterns must be taken back by the caller
    #[inline]
    pub fn is_forbidden(self) -> bool {
        matches!(self, Outcome::DoubleFour | Outcome::DoubleThree)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Win => "win",
            Outcome::DoubleFour => "four-four",
            Outcome::DoubleThree => "three-three",
            Outcome::Normal => "normal",
        })
    }
}

/// Pattern counts gathered over the four axes
#[derive(Debug, Default)]
struct AxisTally {
    open_threes: u32,
    open_fours: u32,
    max_line: usize,
}

/// Rule engine for one game.
///
/// Holds only the win length and the board extents; every evaluation reads
/// the board it is handed and keeps nothing afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleEngine {
    to_win: i32,
    rows: usize,
    columns: usize,
}

impl RuleEngine {
    /// Create an engine. `to_win` is not validated: a value that no line can
    /// reach (non-positive, or longer than the board) means no move ever wins.
    pub fn new(to_win: i32, rows: usize, columns: usize) -> Self {
        Self { to_win, rows, columns }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.to_win, config.rows, config.columns)
    }

    #[inline]
    pub fn to_win(&self) -> i32 {
        self.to_win
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Classify the stone `player` just placed at `(row, col)`.
    ///
    /// Fails with [`RuleError::InvalidPosition`] for coordinates off the
    /// board and [`RuleError::InconsistentState`] when `player` is empty or
    /// the cell does not hold `player`.
    pub fn evaluate(&self, board: &Board, row: usize, col: usize, player: Stone) -> Result<Outcome, RuleError> {
        let found = self.checked_cell(board, row, col)?;
        if !player.is_player() || found != player {
            return Err(RuleError::InconsistentState {
                row,
                col,
                expected: player,
                found,
            });
        }

        let scans = AXES.map(|axis| LineScan::measure(board, row, col, axis));
        Ok(self.classify(&scans))
    }

    /// Measure all four axes through an occupied cell, whichever color.
    ///
    /// An empty cell is reported as [`RuleError::EmptyCell`].
    pub fn scan_axes(&self, board: &Board, row: usize, col: usize) -> Result<[LineScan; 4], RuleError> {
        let found = self.checked_cell(board, row, col)?;
        if !found.is_player() {
            return Err(RuleError::EmptyCell { row, col });
        }
        Ok(AXES.map(|axis| LineScan::measure(board, row, col, axis)))
    }

    /// Turn per-axis measurements into an outcome
    pub fn classify(&self, scans: &[LineScan]) -> Outcome {
        let mut tally = AxisTally::default();

        for scan in scans {
            let length = scan.length as i64;
            let to_win = self.to_win as i64;

            if length == to_win - 2 && scan.is_open() {
                tally.open_threes += 1;
            } else if length == to_win - 1 && scan.is_open() {
                tally.open_fours += 1;
            }

            if to_win > 0 && length >= to_win {
                tally.max_line = tally.max_line.max(scan.length);
            }
        }

        if tally.open_fours >= 2 {
            Outcome::DoubleFour
        } else if tally.open_threes >= 2 {
            Outcome::DoubleThree
        } else if self.to_win > 0 && tally.max_line as i64 >= self.to_win as i64 {
            Outcome::Win
        } else {
            Outcome::Normal
        }
    }

    /// Bounds and dimension checks shared by the entry points
    fn checked_cell(&self, board: &Board, row: usize, col: usize) -> Result<Stone, RuleError> {
        if board.rows() != self.rows || board.columns() != self.columns {
            return Err(RuleError::BoardMismatch {
                board_rows: board.rows(),
                board_columns: board.columns(),
                rows: self.rows,
                columns: self.columns,
            });
        }
        board
            .get(Pos::new(row, col))
            .ok_or(RuleError::InvalidPosition {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            })
    }
}
