//! Public entry point: from normalized entries to a finished layout.
//!
//! `create_puzzle` owns everything stateful about one generation: the
//! random source, the subset pick when more entries are supplied than
//! requested, the attempt loop over the backtracking placer, scoring, and
//! the final trim-and-number pass. Nothing here touches I/O; progress is
//! reported through an optional callback and the `log` facade.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::entry::Entry;
use crate::errors::PuzzleError;
use crate::layout::{self, Layout};
use crate::overlaps::OverlapMatrix;
use crate::placer::{self, AttemptLayout};

/// Tuning constants, part of the interface contract.
pub const MIN_WORDS: usize = 5;
pub const MAX_WORDS: usize = 25;
pub const MIN_WORD_LEN: usize = 2;
pub const MAX_WORD_LEN: usize = 12;
pub const MIN_GRID_SIZE: usize = 10;
pub const MAX_GRID_SIZE: usize = 25;
pub const MAX_ATTEMPTS: usize = 80;
pub const EARLY_EXIT_SCORE: f64 = 0.85;
pub const CROSSING_BONUS: f64 = 0.02;

/// Options for one generation call.
///
/// `on_progress` receives human-readable phase strings and must be
/// side-effect-only; it never influences the outcome. `seed` makes the
/// whole run reproducible; without it the random source is drawn from
/// entropy.
#[derive(Default)]
pub struct GenerateOptions<'a> {
    pub seed: Option<u64>,
    pub on_progress: Option<&'a mut dyn FnMut(&str)>,
}

fn report(on_progress: &mut Option<&mut dyn FnMut(&str)>, msg: &str) {
    if let Some(cb) = on_progress.as_mut() {
        cb(msg);
    }
}

/// Generate a crossword layout from `entries`.
///
/// When more entries are supplied than `requested_count`, a random subset
/// of that size is drawn (through the seeded random source). Up to
/// [`MAX_ATTEMPTS`] independent placement attempts run; every full layout
/// is scored by fill ratio plus a bonus per true crossing and the best one
/// is returned, early if a layout reaches [`EARLY_EXIT_SCORE`].
///
/// # Errors
///
/// - `CountBelowMinimum` when `requested_count` is under [`MIN_WORDS`];
/// - `NotEnoughEntries` when fewer than [`MIN_WORDS`] entries exist;
/// - `CountExceedsAvailable` when `requested_count` outstrips `entries`;
/// - `Unplaceable` when no attempt manages to place every word.
pub fn create_puzzle(
    entries: &[Entry],
    requested_count: usize,
    mut options: GenerateOptions<'_>,
) -> Result<Layout, PuzzleError> {
    if requested_count < MIN_WORDS {
        return Err(PuzzleError::CountBelowMinimum {
            requested: requested_count,
            minimum: MIN_WORDS,
        });
    }
    if entries.len() < MIN_WORDS {
        return Err(PuzzleError::NotEnoughEntries {
            available: entries.len(),
            minimum: MIN_WORDS,
        });
    }
    if requested_count > entries.len() {
        return Err(PuzzleError::CountExceedsAvailable {
            requested: requested_count,
            available: entries.len(),
        });
    }
    // The collaborator slider never goes past MAX_WORDS; treat anything
    // larger as "as many as allowed".
    let requested = requested_count.min(MAX_WORDS);

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Draw the generation subset, keeping input order.
    let chosen: Vec<usize> = if entries.len() > requested {
        report(
            &mut options.on_progress,
            &format!("Choosing {requested} of {} entries", entries.len()),
        );
        let mut indices: Vec<usize> = (0..entries.len()).collect();
        indices.shuffle(&mut rng);
        indices.truncate(requested);
        indices.sort_unstable();
        indices
    } else {
        (0..entries.len()).collect()
    };
    let subset: Vec<Entry> = chosen.iter().map(|&i| entries[i].clone()).collect();

    let side = placer::working_side(&subset);
    report(
        &mut options.on_progress,
        &format!("Sizing the board to {side}x{side}"),
    );
    let overlaps = OverlapMatrix::build(&subset);

    let mut best: Option<AttemptLayout> = None;
    for attempt in 1..=MAX_ATTEMPTS {
        report(
            &mut options.on_progress,
            &format!("Layout attempt {attempt} of {MAX_ATTEMPTS}"),
        );

        let Some(result) = placer::run_attempt(&subset, &overlaps, side, &mut rng) else {
            continue;
        };
        log::debug!("attempt {attempt} placed all words, score {:.3}", result.score);

        if best.as_ref().map_or(true, |b| result.score > b.score) {
            best = Some(result);
        }
        if best.as_ref().is_some_and(|b| b.score >= EARLY_EXIT_SCORE) {
            log::debug!("early exit at attempt {attempt}");
            break;
        }
    }

    let Some(best) = best else {
        return Err(PuzzleError::Unplaceable {
            requested,
            attempts: MAX_ATTEMPTS,
        });
    };

    report(&mut options.on_progress, "Trimming and numbering the grid");
    Ok(layout::finish(
        &best.board,
        &best.placed,
        &subset,
        &chosen,
        requested,
    ))
}
