//! Backtracking placement search.
//!
//! One attempt seeds the board with the most connectable entry, placed
//! horizontally at the center, then grows the layout by recursion: at each
//! step the unplaced entries that share a letter with the committed ones
//! are tried in descending connectivity order, each at every position a
//! letter coincidence allows, and the first legal option is committed
//! before recursing. Dead ends revert in strict LIFO order.
//!
//! Tie-breaking between equally scored entries routes through a per-attempt
//! shuffled rank, so repeated attempts explore different corners of the
//! search space while a fixed seed reproduces the run exactly.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::entry::Entry;
use crate::grid::{Board, Direction};
use crate::overlaps::OverlapMatrix;
use crate::puzzle::{CROSSING_BONUS, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// One committed placement during search: entry index plus board position.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlacedEntry {
    pub entry_index: usize,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// A successful attempt with its compactness score.
#[derive(Debug)]
pub(crate) struct AttemptLayout {
    pub board: Board,
    pub placed: Vec<PlacedEntry>,
    pub score: f64,
}

/// Side length of the square working board: a letter density near 50%
/// leaves the adjacency rules room to breathe while keeping the trimmed
/// result compact.
pub(crate) fn working_side(entries: &[Entry]) -> usize {
    let letters: usize = entries.iter().map(|e| e.word.len()).sum();
    let side = (2.0 * letters as f64).sqrt().ceil() as usize;
    side.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

/// A candidate position before the legality check. Coordinates are signed
/// because option generation can push a start off the top or left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PlacementOption {
    row: i32,
    col: i32,
    direction: Direction,
}

struct Searcher<'a> {
    entries: &'a [Entry],
    overlaps: &'a OverlapMatrix,
    board: Board,
    committed: Vec<PlacedEntry>,
    is_placed: Vec<bool>,
    /// Per-attempt shuffled rank; lower explores first on ties.
    tiebreak: Vec<usize>,
}

impl<'a> Searcher<'a> {
    fn new(
        entries: &'a [Entry],
        overlaps: &'a OverlapMatrix,
        side: usize,
        tiebreak: Vec<usize>,
    ) -> Self {
        Self {
            entries,
            overlaps,
            board: Board::new(side),
            committed: Vec::with_capacity(entries.len()),
            is_placed: vec![false; entries.len()],
            tiebreak,
        }
    }

    /// The starting entry: maximum overlap total, ties to the longer word,
    /// remaining ties to the attempt's shuffled rank.
    fn seed_entry(&self) -> usize {
        (0..self.entries.len())
            .max_by(|&i, &j| {
                self.overlaps
                    .total(i)
                    .cmp(&self.overlaps.total(j))
                    .then(self.entries[i].word.len().cmp(&self.entries[j].word.len()))
                    .then(self.tiebreak[j].cmp(&self.tiebreak[i]))
            })
            .expect("entry list is never empty here")
    }

    /// Unplaced entries sharing at least one letter with a committed
    /// placement, in descending (shared letters, overlap total, length)
    /// order. Entries with nothing to attach to are left for later steps.
    fn next_candidates(&self) -> Vec<usize> {
        let mut scored: Vec<(usize, usize)> = (0..self.entries.len())
            .filter(|&i| !self.is_placed[i])
            .filter_map(|i| {
                let shared: usize = self
                    .committed
                    .iter()
                    .map(|p| self.overlaps.coincidences(i, p.entry_index).len())
                    .sum();
                (shared > 0).then_some((i, shared))
            })
            .collect();

        scored.sort_by(|&(i, si), &(j, sj)| {
            sj.cmp(&si)
                .then(self.overlaps.total(j).cmp(&self.overlaps.total(i)))
                .then(self.entries[j].word.len().cmp(&self.entries[i].word.len()))
                .then(self.tiebreak[i].cmp(&self.tiebreak[j]))
        });
        scored.into_iter().map(|(i, _)| i).collect()
    }

    /// Every position where `cand` can cross a committed placement at a
    /// letter coincidence, deduplicated by (row, col, direction).
    fn placement_options(&self, cand: usize) -> Vec<PlacementOption> {
        let mut seen = HashSet::new();
        let mut options = Vec::new();

        for p in &self.committed {
            for &(cand_pos, p_pos) in self.overlaps.coincidences(cand, p.entry_index) {
                let option = match p.direction {
                    Direction::Across => PlacementOption {
                        row: p.row as i32 - cand_pos as i32,
                        col: p.col as i32 + p_pos as i32,
                        direction: Direction::Down,
                    },
                    Direction::Down => PlacementOption {
                        row: p.row as i32 + p_pos as i32,
                        col: p.col as i32 - cand_pos as i32,
                        direction: Direction::Across,
                    },
                };
                if seen.insert(option) {
                    options.push(option);
                }
            }
        }
        options
    }

    /// The adjacency rules. A position is legal when:
    /// 1. the whole word lies on the board;
    /// 2. the cells immediately before the start and after the end are
    ///    empty, so the word cannot fuse with one in line with it;
    /// 3. every non-empty cell on the path holds the same letter and is not
    ///    already used in this direction (crossings are perpendicular);
    /// 4. every cell that receives a new letter has empty perpendicular
    ///    neighbours, so no uninvited word forms in the other direction.
    fn is_legal(&self, word: &str, row: i32, col: i32, dir: Direction) -> bool {
        let side = self.board.side() as i32;
        let len = word.len() as i32;
        let (dr, dc) = match dir {
            Direction::Across => (0i32, 1i32),
            Direction::Down => (1, 0),
        };

        if row < 0 || col < 0 || row + (len - 1) * dr >= side || col + (len - 1) * dc >= side {
            return false;
        }

        let in_bounds = |r: i32, c: i32| r >= 0 && c >= 0 && r < side && c < side;
        let occupied = |r: i32, c: i32| {
            in_bounds(r, c) && !self.board.is_empty(r as usize, c as usize)
        };

        if occupied(row - dr, col - dc) || occupied(row + len * dr, col + len * dc) {
            return false;
        }

        for (k, ch) in word.chars().enumerate() {
            let r = row + k as i32 * dr;
            let c = col + k as i32 * dc;
            match self.board.letter(r as usize, c as usize) {
                Some(existing) => {
                    if existing != ch || self.board.used(r as usize, c as usize, dir) {
                        return false;
                    }
                }
                None => {
                    // Perpendicular deltas are the direction deltas swapped.
                    if occupied(r - dc, c - dr) || occupied(r + dc, c + dr) {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn commit(&mut self, entry_index: usize, row: usize, col: usize, direction: Direction) {
        self.board
            .place(&self.entries[entry_index].word, row, col, direction);
        self.committed.push(PlacedEntry {
            entry_index,
            row,
            col,
            direction,
        });
        self.is_placed[entry_index] = true;
    }

    fn revert(&mut self) {
        let last = self.committed.pop().expect("revert without commit");
        self.board.unplace(
            self.entries[last.entry_index].word.len(),
            last.row,
            last.col,
            last.direction,
        );
        self.is_placed[last.entry_index] = false;
    }

    /// Depth-first placement of everything not yet on the board. Commits
    /// the first legal option per candidate, recurses, and reverts on
    /// failure; returns false once every option of every candidate is
    /// exhausted at this step.
    fn place_remaining(&mut self) -> bool {
        if self.committed.len() == self.entries.len() {
            return true;
        }

        for cand in self.next_candidates() {
            for option in self.placement_options(cand) {
                let word = &self.entries[cand].word;
                if !self.is_legal(word, option.row, option.col, option.direction) {
                    continue;
                }
                self.commit(
                    cand,
                    option.row as usize,
                    option.col as usize,
                    option.direction,
                );
                if self.place_remaining() {
                    return true;
                }
                self.revert();
            }
        }
        false
    }
}

/// Fill ratio of the trimmed rectangle plus a bonus per true crossing.
fn score(board: &Board) -> f64 {
    let Some((r0, c0, r1, c1)) = board.letter_bounds() else {
        return 0.0;
    };
    let area = ((r1 - r0 + 1) * (c1 - c0 + 1)) as f64;
    board.filled_cells() as f64 / area + CROSSING_BONUS * board.crossing_cells() as f64
}

/// One complete layout attempt from an empty board. Returns `None` when the
/// search cannot place every entry.
pub(crate) fn run_attempt(
    entries: &[Entry],
    overlaps: &OverlapMatrix,
    side: usize,
    rng: &mut StdRng,
) -> Option<AttemptLayout> {
    let mut tiebreak: Vec<usize> = (0..entries.len()).collect();
    tiebreak.shuffle(rng);

    let mut searcher = Searcher::new(entries, overlaps, side, tiebreak);

    let seed = searcher.seed_entry();
    let word_len = entries[seed].word.len();
    let row = side / 2;
    let col = side.saturating_sub(word_len) / 2;
    if !searcher.is_legal(&entries[seed].word, row as i32, col as i32, Direction::Across) {
        return None;
    }
    searcher.commit(seed, row, col, Direction::Across);

    if !searcher.place_remaining() {
        return None;
    }

    let score = score(&searcher.board);
    Some(AttemptLayout {
        board: searcher.board,
        placed: searcher.committed,
        score,
    })
}
