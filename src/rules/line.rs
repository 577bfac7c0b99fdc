//! Line scanning from a placed stone
//!
//! Both primitives follow the run of stones matching the origin cell along
//! one half-direction. They never wrap around the board edge. Deltas are
//! unit steps: any value is reduced to its sign (-1, 0 or 1).

use crate::board::{Board, Pos, Stone};

/// Measurement of one axis through a stone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    /// Axis as (d_row, d_col), positive half-direction
    pub axis: (i32, i32),
    /// Consecutive stones through the origin, origin counted once
    pub length: usize,
    /// Cell past the run in the positive half-direction is on the board and empty
    pub open_positive: bool,
    /// Same for the negative half-direction
    pub open_negative: bool,
}

impl LineScan {
    /// Measure the full line through `(row, col)` along `axis`
    pub fn measure(board: &Board, row: usize, col: usize, axis: (i32, i32)) -> Self {
        let (dr, dc) = (axis.0.signum(), axis.1.signum());
        let forward = length_in_direction(board, row, col, dr, dc);
        let backward = length_in_direction(board, row, col, -dr, -dc);
        Self {
            axis,
            length: (forward + backward).saturating_sub(1),
            open_positive: has_open_end(board, row, col, dr, dc),
            open_negative: has_open_end(board, row, col, -dr, -dc),
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open_positive && self.open_negative
    }
}

/// Follow the run from the origin. Returns the run length and the first
/// signed coordinate past it, or `None` for an empty or off-board origin.
fn walk_run(board: &Board, row: usize, col: usize, dr: i32, dc: i32) -> Option<(usize, i32, i32)> {
    let (dr, dc) = (dr.signum(), dc.signum());
    let origin = Pos::new(row, col);
    let player = board.get(origin).filter(|s| s.is_player())?;
    if dr == 0 && dc == 0 {
        return Some((1, row as i32, col as i32));
    }

    let mut count = 1;
    let (mut r, mut c) = origin.offset(dr, dc, 1);
    while board.cell(r, c) == Some(player) {
        count += 1;
        r += dr;
        c += dc;
    }
    Some((count, r, c))
}

/// Count consecutive stones of the origin's color starting at `(row, col)`
/// and stepping by `(d_row, d_col)`. The origin counts as 1.
///
/// An empty or off-board origin yields 0.
pub fn length_in_direction(board: &Board, row: usize, col: usize, d_row: i32, d_col: i32) -> usize {
    walk_run(board, row, col, d_row, d_col).map_or(0, |(count, _, _)| count)
}

/// Check whether the run from `(row, col)` along `(d_row, d_col)` ends on an
/// empty cell inside the board.
pub fn has_open_end(board: &Board, row: usize, col: usize, d_row: i32, d_col: i32) -> bool {
    if d_row.signum() == 0 && d_col.signum() == 0 {
        return false;
    }
    walk_run(board, row, col, d_row, d_col)
        .is_some_and(|(_, r, c)| board.cell(r, c) == Some(Stone::Empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::AXES;
    use proptest::prelude::*;

    fn row_board(layout: &str) -> Board {
        Board::from_rows(&[layout]).unwrap()
    }

    #[test]
    fn test_single_stone() {
        let board = row_board("..X..");
        assert_eq!(length_in_direction(&board, 0, 2, 0, 1), 1);
        assert_eq!(length_in_direction(&board, 0, 2, 0, -1), 1);
        assert!(has_open_end(&board, 0, 2, 0, 1));
        assert!(has_open_end(&board, 0, 2, 0, -1));
    }

    #[test]
    fn test_run_stops_at_opponent() {
        let board = row_board(".XXXO");
        assert_eq!(length_in_direction(&board, 0, 1, 0, 1), 3);
        assert!(!has_open_end(&board, 0, 1, 0, 1));
        assert!(has_open_end(&board, 0, 1, 0, -1));
    }

    #[test]
    fn test_run_stops_at_edge() {
        let board = row_board("XXX..");
        assert_eq!(length_in_direction(&board, 0, 2, 0, -1), 3);
        assert!(!has_open_end(&board, 0, 2, 0, -1));
        assert!(has_open_end(&board, 0, 2, 0, 1));
    }

    #[test]
    fn test_no_wraparound() {
        // A run ending at the right edge must not continue on the next row
        let board = Board::from_rows(&[
            "...XX",
            "XX...",
        ])
        .unwrap();
        assert_eq!(length_in_direction(&board, 0, 3, 0, 1), 2);
        assert!(!has_open_end(&board, 0, 3, 0, 1));
    }

    #[test]
    fn test_follows_origin_color() {
        let board = row_board("OOXOO");
        assert_eq!(length_in_direction(&board, 0, 0, 0, 1), 2);
        assert_eq!(length_in_direction(&board, 0, 2, 0, 1), 1);
        assert!(!has_open_end(&board, 0, 0, 0, 1));
    }

    #[test]
    fn test_empty_origin() {
        let board = row_board("X.X");
        assert_eq!(length_in_direction(&board, 0, 1, 0, 1), 0);
        assert!(!has_open_end(&board, 0, 1, 0, 1));
        assert_eq!(length_in_direction(&board, 0, 9, 0, 1), 0);
    }

    #[test]
    fn test_zero_direction() {
        let board = row_board(".X.");
        assert_eq!(length_in_direction(&board, 0, 1, 0, 0), 1);
        assert!(!has_open_end(&board, 0, 1, 0, 0));
    }

    #[test]
    fn test_large_deltas_are_unit_steps() {
        let board = row_board(".XXX.O");
        assert_eq!(length_in_direction(&board, 0, 1, 0, 7), 3);
        assert_eq!(length_in_direction(&board, 0, 1, 0, i32::MAX), 3);
        assert_eq!(length_in_direction(&board, 0, 3, 0, i32::MIN), 3);
        assert!(has_open_end(&board, 0, 1, 0, i32::MAX));
        assert!(!has_open_end(&board, 0, 3, i32::MIN, i32::MIN));

        let scan = LineScan::measure(&board, 0, 2, (i32::MIN, i32::MAX));
        assert_eq!(scan.length, 1);
        assert!(!scan.is_open());
    }

    #[test]
    fn test_diagonal_scan() {
        let board = Board::from_rows(&[
            ".....",
            ".X...",
            "..X..",
            "...X.",
            "....O",
        ])
        .unwrap();
        let scan = LineScan::measure(&board, 2, 2, (1, 1));
        assert_eq!(scan.length, 3);
        assert!(!scan.open_positive);
        assert!(scan.open_negative);
        assert!(!scan.is_open());

        let anti = LineScan::measure(&board, 2, 2, (1, -1));
        assert_eq!(anti.length, 1);
        assert!(anti.is_open());
    }

    proptest! {
        #[test]
        fn prop_halves_sum_to_run_length(
            len in 1usize..=8,
            start in 0usize..6,
            at in 0usize..8,
            axis_idx in 0usize..4,
        ) {
            let at = at % len;
            let (dr, dc) = AXES[axis_idx];
            let size = 16;
            // Anchor the run so every axis, including the anti-diagonal, fits
            let (r0, c0) = (start as i32, 7 + (start % 2) as i32);
            let mut board = Board::new(size, size);
            for i in 0..len as i32 {
                board.place_stone(
                    Pos::new((r0 + dr * i) as usize, (c0 + dc * i) as usize),
                    Stone::Black,
                );
            }
            let origin = Pos::new(
                (r0 + dr * at as i32) as usize,
                (c0 + dc * at as i32) as usize,
            );

            let forward = length_in_direction(&board, origin.row, origin.col, dr, dc);
            let backward = length_in_direction(&board, origin.row, origin.col, -dr, -dc);
            prop_assert_eq!(forward + backward - 1, len);
            prop_assert_eq!(forward, len - at);
            prop_assert_eq!(LineScan::measure(&board, origin.row, origin.col, (dr, dc)).length, len);
        }
    }
}
