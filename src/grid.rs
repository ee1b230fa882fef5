//! Scratch board for the placement search.
//!
//! The board is a square matrix of cells; each cell is either empty (a
//! block in the printed grid) or holds one uppercase letter. Alongside the
//! letters the board keeps a usage map: two flags per cell recording
//! whether a committed placement traverses it across and/or down. The
//! flags drive crossing detection and make revert exact under the placer's
//! LIFO discipline.

use serde::{Deserialize, Serialize};

/// Orientation of a placed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Row/column step between consecutive letters.
    #[must_use]
    pub fn deltas(self) -> (usize, usize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

/// Square working board plus the per-cell usage map.
#[derive(Debug, Clone)]
pub struct Board {
    side: usize,
    letters: Vec<Option<char>>,
    used_across: Vec<bool>,
    used_down: Vec<bool>,
}

impl Board {
    pub fn new(side: usize) -> Self {
        Self {
            side,
            letters: vec![None; side * side],
            used_across: vec![false; side * side],
            used_down: vec![false; side * side],
        }
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.side && col < self.side);
        row * self.side + col
    }

    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.letters[self.idx(row, col)]
    }

    #[must_use]
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.letter(row, col).is_none()
    }

    /// Is this cell traversed by a committed placement in `dir`?
    #[must_use]
    pub fn used(&self, row: usize, col: usize, dir: Direction) -> bool {
        let i = self.idx(row, col);
        match dir {
            Direction::Across => self.used_across[i],
            Direction::Down => self.used_down[i],
        }
    }

    /// A true crossing: the cell belongs to one across and one down placement.
    #[must_use]
    pub fn is_crossing(&self, row: usize, col: usize) -> bool {
        let i = self.idx(row, col);
        self.used_across[i] && self.used_down[i]
    }

    /// Write `word` onto the board. Legality must already have been
    /// established; this only mutates state.
    pub fn place(&mut self, word: &str, row: usize, col: usize, dir: Direction) {
        let (dr, dc) = dir.deltas();
        for (k, ch) in word.chars().enumerate() {
            let i = self.idx(row + k * dr, col + k * dc);
            self.letters[i] = Some(ch);
            match dir {
                Direction::Across => self.used_across[i] = true,
                Direction::Down => self.used_down[i] = true,
            }
        }
    }

    /// Exact inverse of [`Board::place`] under LIFO ordering: drops the
    /// usage flag and clears the letter only when no other direction still
    /// uses the cell.
    pub fn unplace(&mut self, word_len: usize, row: usize, col: usize, dir: Direction) {
        let (dr, dc) = dir.deltas();
        for k in 0..word_len {
            let i = self.idx(row + k * dr, col + k * dc);
            match dir {
                Direction::Across => self.used_across[i] = false,
                Direction::Down => self.used_down[i] = false,
            }
            if !self.used_across[i] && !self.used_down[i] {
                self.letters[i] = None;
            }
        }
    }

    /// Bounding rectangle of all letter cells as
    /// `(min_row, min_col, max_row, max_col)`, or `None` on an empty board.
    #[must_use]
    pub fn letter_bounds(&self) -> Option<(usize, usize, usize, usize)> {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for row in 0..self.side {
            for col in 0..self.side {
                if self.letters[self.idx(row, col)].is_some() {
                    bounds = Some(match bounds {
                        None => (row, col, row, col),
                        Some((r0, c0, r1, c1)) => {
                            (r0.min(row), c0.min(col), r1.max(row), c1.max(col))
                        }
                    });
                }
            }
        }
        bounds
    }

    /// Count of letter cells.
    #[must_use]
    pub fn filled_cells(&self) -> usize {
        self.letters.iter().filter(|c| c.is_some()).count()
    }

    /// Count of true crossings over the whole board.
    #[must_use]
    pub fn crossing_cells(&self) -> usize {
        let mut count = 0;
        for row in 0..self.side {
            for col in 0..self.side {
                if self.is_crossing(row, col) {
                    count += 1;
                }
            }
        }
        count
    }
}
