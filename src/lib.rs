// Reusable library API — visible to both CLI and WASM builds
pub mod entry;
pub mod errors;
pub mod grid;
pub mod layout;
pub mod logging;
mod overlaps;
mod placer;
pub mod puzzle;

pub use errors::PuzzleError;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
