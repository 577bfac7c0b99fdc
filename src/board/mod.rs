//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::Board;

/// Default board size (19x19)
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Largest side length a board can have; keeps signed coordinates in range
pub const MAX_BOARD_SIZE: usize = 1024;

/// Line axes checked from a placed stone, each walked in both half-directions
pub const AXES: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal
    (1, -1), // Anti-diagonal
];

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// True for Black and White
    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }

    /// Board symbol used by the text renderer and `Board::from_rows`
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::Empty => '.',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Stone> {
        match symbol {
            'X' | 'x' => Some(Stone::Black),
            'O' | 'o' => Some(Stone::White),
            '.' => Some(Stone::Empty),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `distance` cells along `(dr, dc)`, as signed coordinates
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, distance: i32) -> (i32, i32) {
        (
            self.row as i32 + dr * distance,
            self.col as i32 + dc * distance,
        )
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
