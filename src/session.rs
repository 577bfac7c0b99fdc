//! Game session: board ownership and turn bookkeeping
//!
//! The session places each stone, asks the rule engine about it and acts on
//! the answer: forbidden placements are taken back, wins end the game, and
//! anything else hands the turn to the opponent.

use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::engine::{Outcome, RuleEngine};
use crate::error::SessionError;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Stone),
    /// Board filled without a winner
    Draw,
}

/// Result of one placement attempt that reached the rule engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub pos: Pos,
    pub player: Stone,
    pub outcome: Outcome,
}

impl MoveReport {
    /// Whether the stone stayed on the board
    #[inline]
    pub fn accepted(&self) -> bool {
        !self.outcome.is_forbidden()
    }

    /// Human-readable line describing the placement
    pub fn message(&self) -> String {
        match self.outcome {
            Outcome::Win => format!("{} wins!", self.player),
            Outcome::DoubleFour | Outcome::DoubleThree => {
                format!("Illegal move: {}. Try again.", self.outcome)
            }
            Outcome::Normal => format!("{} to move", self.player.opponent()),
        }
    }
}

/// One game between Black and White. Black moves first.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    engine: RuleEngine,
    board: Board,
    current_turn: Stone,
    status: GameStatus,
    history: Vec<(Pos, Stone)>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            engine: RuleEngine::from_config(&config),
            board: Board::new(config.rows, config.columns),
            config,
            current_turn: Stone::Black,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Start a new game with the same configuration
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_turn = Stone::Black;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// Place the current player's stone at `pos`.
    ///
    /// Forbidden placements are removed again and the same player stays on
    /// turn. After a win every cell is closed to further moves.
    pub fn place(&mut self, pos: Pos) -> Result<MoveReport, SessionError> {
        if self.status != GameStatus::InProgress {
            return Err(SessionError::GameOver);
        }
        match self.board.get(pos) {
            None => return Err(SessionError::OutOfBounds(pos)),
            Some(Stone::Empty) => {}
            Some(_) => return Err(SessionError::Occupied(pos)),
        }

        let player = self.current_turn;
        self.board.place_stone(pos, player);

        let outcome = match self.engine.evaluate(&self.board, pos.row, pos.col, player) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.board.remove_stone(pos);
                return Err(e.into());
            }
        };

        match outcome {
            Outcome::DoubleFour | Outcome::DoubleThree => {
                self.board.remove_stone(pos);
            }
            Outcome::Win => {
                self.history.push((pos, player));
                self.status = GameStatus::Won(player);
            }
            Outcome::Normal => {
                self.history.push((pos, player));
                if self.board.is_full() {
                    self.status = GameStatus::Draw;
                } else {
                    self.current_turn = player.opponent();
                }
            }
        }

        Ok(MoveReport { pos, player, outcome })
    }

    /// Status text for the current position
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{} to move", self.current_turn),
            GameStatus::Won(player) => format!("{} wins!", player),
            GameStatus::Draw => "Draw: the board is full".to_string(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Accepted moves in play order
    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.history
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
