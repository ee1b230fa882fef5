//! Trimming, numbering and the final layout bundle.
//!
//! A successful attempt leaves letters scattered over the square working
//! board. This module crops that board to the minimal rectangle holding
//! every letter, translates the placements accordingly, assigns standard
//! crossword numbers (row-major over the start cells, beginning at 1) and
//! assembles the ordered Across and Down clue lists.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::grid::{Board, Direction};
use crate::placer::PlacedEntry;

/// Where one answer lives in the final grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub clue: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    /// Index into the entry list the caller passed in.
    pub entry_index: usize,
    pub number: u32,
}

/// One line of a printed clue list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRef {
    pub number: u32,
    pub clue_text: String,
    pub answer_length: usize,
}

/// The returned bundle: trimmed grid, placements, numbering and clues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    /// Letter cells are `Some`, blocks are `None`. At least 1×1.
    pub grid: Vec<Vec<Option<char>>>,
    pub placements: Vec<Placement>,
    /// Same dimensions as `grid`; `Some` on numbered start cells.
    pub numbers_map: Vec<Vec<Option<u32>>>,
    pub across_clues: Vec<ClueRef>,
    pub down_clues: Vec<ClueRef>,
    pub requested_count: usize,
    pub rows: usize,
    pub cols: usize,
}

/// Crop the board, number the starts and build the clue lists.
///
/// `caller_indices` maps positions in `entries` (the generation subset)
/// back to the entry list the caller handed to `create_puzzle`, so that
/// `Placement::entry_index` stays meaningful to the caller.
pub(crate) fn finish(
    board: &Board,
    placed: &[PlacedEntry],
    entries: &[Entry],
    caller_indices: &[usize],
    requested_count: usize,
) -> Layout {
    // Trim to the letter bounding box. An empty board cannot come out of a
    // successful attempt, but fall back to the full square rather than
    // slicing nothing.
    let side = board.side();
    let (r0, c0, r1, c1) = board
        .letter_bounds()
        .unwrap_or((0, 0, side - 1, side - 1));
    let rows = r1 - r0 + 1;
    let cols = c1 - c0 + 1;

    let grid: Vec<Vec<Option<char>>> = (r0..=r1)
        .map(|r| (c0..=c1).map(|c| board.letter(r, c)).collect())
        .collect();

    let mut placements: Vec<Placement> = placed
        .iter()
        .map(|p| Placement {
            word: entries[p.entry_index].word.clone(),
            clue: entries[p.entry_index].clue.clone(),
            row: p.row - r0,
            col: p.col - c0,
            direction: p.direction,
            entry_index: caller_indices[p.entry_index],
            number: 0,
        })
        .collect();

    // Start cells, each pointing at the placements that begin there.
    let mut starts: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
    for (i, p) in placements.iter().enumerate() {
        starts.entry((p.row, p.col)).or_default().push(i);
    }

    // Row-major numbering: a cell gets the next number the first time a
    // placement is found starting on it.
    let mut numbers_map = vec![vec![None; cols]; rows];
    let mut next_number = 1u32;
    for row in 0..rows {
        for col in 0..cols {
            let Some(started) = starts.get(&(row, col)) else {
                continue;
            };
            numbers_map[row][col] = Some(next_number);
            for &i in started {
                placements[i].number = next_number;
            }
            next_number += 1;
        }
    }

    let clue_list = |dir: Direction| -> Vec<ClueRef> {
        let mut clues: Vec<ClueRef> = placements
            .iter()
            .filter(|p| p.direction == dir)
            .map(|p| ClueRef {
                number: p.number,
                clue_text: p.clue.clone(),
                answer_length: p.word.len(),
            })
            .collect();
        clues.sort_by_key(|c| c.number);
        clues
    };
    let across_clues = clue_list(Direction::Across);
    let down_clues = clue_list(Direction::Down);

    Layout {
        grid,
        placements,
        numbers_map,
        across_clues,
        down_clues,
        requested_count,
        rows,
        cols,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(words: &[&str]) -> Vec<Entry> {
        words
            .iter()
            .enumerate()
            .map(|(original_index, w)| Entry {
                word: (*w).to_string(),
                clue: format!("clue {original_index}"),
                original_index,
            })
            .collect()
    }

    /// Hand-built staircase layout used across the numbering tests:
    ///
    /// ```text
    /// C . . . .
    /// A . . . .
    /// T A R . .
    /// . . A R T
    /// . . T . A
    /// . . . . B
    /// ```
    fn staircase() -> (Board, Vec<PlacedEntry>, Vec<Entry>) {
        let es = entries(&["CAT", "TAR", "RAT", "ART", "TAB"]);
        let mut board = Board::new(10);
        let placed = vec![
            PlacedEntry { entry_index: 0, row: 2, col: 2, direction: Direction::Down },
            PlacedEntry { entry_index: 1, row: 4, col: 2, direction: Direction::Across },
            PlacedEntry { entry_index: 2, row: 4, col: 4, direction: Direction::Down },
            PlacedEntry { entry_index: 3, row: 5, col: 4, direction: Direction::Across },
            PlacedEntry { entry_index: 4, row: 5, col: 6, direction: Direction::Down },
        ];
        for p in &placed {
            board.place(&es[p.entry_index].word, p.row, p.col, p.direction);
        }
        (board, placed, es)
    }

    #[test]
    fn test_trim_translates_placements() {
        let (board, placed, es) = staircase();
        let caller_indices: Vec<usize> = (0..es.len()).collect();
        let layout = finish(&board, &placed, &es, &caller_indices, 5);

        assert_eq!(layout.rows, 6);
        assert_eq!(layout.cols, 5);
        // CAT moved from (2, 2) to the origin.
        assert_eq!(layout.placements[0].row, 0);
        assert_eq!(layout.placements[0].col, 0);
        // A letter touches every edge of the trimmed grid.
        assert!(layout.grid[0].iter().any(Option::is_some));
        assert!(layout.grid[layout.rows - 1].iter().any(Option::is_some));
        assert!(layout.grid.iter().any(|r| r[0].is_some()));
        assert!(layout.grid.iter().any(|r| r[layout.cols - 1].is_some()));
    }

    #[test]
    fn test_row_major_numbering() {
        let (board, placed, es) = staircase();
        let caller_indices: Vec<usize> = (0..es.len()).collect();
        let layout = finish(&board, &placed, &es, &caller_indices, 5);

        let number_of = |word: &str| {
            layout
                .placements
                .iter()
                .find(|p| p.word == word)
                .unwrap()
                .number
        };
        assert_eq!(number_of("CAT"), 1);
        assert_eq!(number_of("TAR"), 2);
        assert_eq!(number_of("RAT"), 3);
        assert_eq!(number_of("ART"), 4);
        assert_eq!(number_of("TAB"), 5);

        assert_eq!(layout.numbers_map[0][0], Some(1));
        assert_eq!(layout.numbers_map[2][0], Some(2));
        assert_eq!(layout.numbers_map[2][2], Some(3));
        assert_eq!(layout.numbers_map[3][2], Some(4));
        assert_eq!(layout.numbers_map[3][4], Some(5));
        assert_eq!(layout.numbers_map[1][0], None);
    }

    #[test]
    fn test_clue_lists_sorted_by_number() {
        let (board, placed, es) = staircase();
        let caller_indices: Vec<usize> = (0..es.len()).collect();
        let layout = finish(&board, &placed, &es, &caller_indices, 5);

        let across: Vec<u32> = layout.across_clues.iter().map(|c| c.number).collect();
        let down: Vec<u32> = layout.down_clues.iter().map(|c| c.number).collect();
        assert_eq!(across, vec![2, 4]);
        assert_eq!(down, vec![1, 3, 5]);

        for c in layout.across_clues.iter().chain(&layout.down_clues) {
            assert_eq!(c.answer_length, 3);
            assert!(c.clue_text.starts_with("clue "));
        }
    }

    #[test]
    fn test_shared_start_cell_gets_one_number() {
        // HI across and HO down both start at the same cell.
        let es = entries(&["HI", "HO"]);
        let mut board = Board::new(10);
        let placed = vec![
            PlacedEntry { entry_index: 0, row: 3, col: 3, direction: Direction::Across },
            PlacedEntry { entry_index: 1, row: 3, col: 3, direction: Direction::Down },
        ];
        for p in &placed {
            board.place(&es[p.entry_index].word, p.row, p.col, p.direction);
        }
        let layout = finish(&board, &placed, &es, &[0, 1], 2);

        assert_eq!(layout.placements[0].number, 1);
        assert_eq!(layout.placements[1].number, 1);
        assert_eq!(layout.numbers_map[0][0], Some(1));
        assert_eq!(layout.across_clues[0].number, 1);
        assert_eq!(layout.down_clues[0].number, 1);
    }

    #[test]
    fn test_entry_index_maps_back_to_caller_list() {
        let (board, placed, es) = staircase();
        // Pretend the subset picked entries 10, 11, 12, 13, 14.
        let caller_indices: Vec<usize> = (10..15).collect();
        let layout = finish(&board, &placed, &es, &caller_indices, 5);

        let cat = layout.placements.iter().find(|p| p.word == "CAT").unwrap();
        assert_eq!(cat.entry_index, 10);
    }
}
