//! Rectangular board of stones

use std::fmt;

use super::{Pos, Stone, MAX_BOARD_SIZE};

/// Game board of `rows x columns` cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Create an empty board. Each side is capped at `MAX_BOARD_SIZE`.
    pub fn new(rows: usize, columns: usize) -> Self {
        let rows = rows.min(MAX_BOARD_SIZE);
        let columns = columns.min(MAX_BOARD_SIZE);
        let cells = rows.checked_mul(columns).unwrap_or(0);
        Self {
            rows,
            columns,
            cells: vec![Stone::Empty; cells],
        }
    }

    /// Build a board from text rows (`X` = Black, `O` = White, `.` = Empty).
    ///
    /// Whitespace inside a row is ignored. Returns `None` for an empty
    /// layout, ragged rows, unknown symbols or a side over `MAX_BOARD_SIZE`.
    pub fn from_rows(layout: &[&str]) -> Option<Self> {
        let parsed: Vec<Vec<Stone>> = layout
            .iter()
            .map(|line| {
                line.chars()
                    .filter(|ch| !ch.is_whitespace())
                    .map(Stone::from_symbol)
                    .collect::<Option<Vec<_>>>()
            })
            .collect::<Option<Vec<_>>>()?;

        let columns = parsed.first()?.len();
        if columns == 0
            || columns > MAX_BOARD_SIZE
            || parsed.len() > MAX_BOARD_SIZE
            || parsed.iter().any(|row| row.len() != columns)
        {
            return None;
        }

        Some(Self {
            rows: parsed.len(),
            columns,
            cells: parsed.into_iter().flatten().collect(),
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Check if signed coordinates fall on the board
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.columns
    }

    #[inline]
    fn index(&self, pos: Pos) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.columns).then(|| pos.row * self.columns + pos.col)
    }

    /// Get stone at position (`None` outside the board)
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Get stone at signed coordinates (`None` outside the board)
    #[inline]
    pub fn cell(&self, row: i32, col: i32) -> Option<Stone> {
        if self.contains(row, col) {
            self.get(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Stone::Empty)
    }

    /// Place a stone. Positions outside the board are ignored.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx] = stone;
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_player()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|s| s.is_player())
    }

    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
    }
}

impl fmt::Display for Board {
    /// Render with column indices on top and row indices on the left
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.columns {
            write!(f, "{:>3}", c)?;
        }
        writeln!(f)?;

        for r in 0..self.rows {
            write!(f, "{:>3}", r)?;
            for stone in &self.cells[r * self.columns..(r + 1) * self.columns] {
                write!(f, "{:>3}", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
