use std::io;

/// Errors surfaced by the layout engine.
///
/// Every failure crosses the API boundary as one of these variants; the
/// display strings are meant to be shown to the end user verbatim.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("input must be a list of {{word, clue}} objects")]
    InvalidInputShape,

    #[error("no usable entries were left after cleanup")]
    NoValidEntries,

    #[error("need at least {minimum} entries, got {available}")]
    NotEnoughEntries { available: usize, minimum: usize },

    #[error("requested {requested} words; the minimum is {minimum}")]
    CountBelowMinimum { requested: usize, minimum: usize },

    #[error("requested {requested} words but only {available} entries are available")]
    CountExceedsAvailable { requested: usize, available: usize },

    #[error("could not fit all {requested} words on the board in {attempts} attempts")]
    Unplaceable { requested: usize, attempts: usize },

    // Part of the published taxonomy; the attempt loop returns the best
    // successful layout instead of raising this, so nothing constructs it.
    #[error("no compact layout found")]
    NoCompactLayout,
}

impl From<PuzzleError> for io::Error {
    fn from(pe: PuzzleError) -> Self {
        // Flatten to the display string; callers only ever show these.
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}
