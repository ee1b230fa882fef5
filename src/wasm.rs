use wasm_bindgen::prelude::*;

use crate::entry::{self, Entry, NormalizeOptions};
use crate::errors::PuzzleError;
use crate::puzzle::{self, GenerateOptions};

/// Map engine errors onto `JsValue`s
impl From<PuzzleError> for JsValue {
    fn from(e: PuzzleError) -> JsValue {
        JsValue::from_str(format!("[puzzle error] {e}").as_str())
    }
}

#[wasm_bindgen(start)]
fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// JS entry: (raw: {word, clue}[]) -> Entry[]
///
/// Accepts the same loose input as the native API (alias keys, junk
/// characters) and returns the cleaned entry list.
///
/// # Errors
/// Returns a `JsValue` error when the input is not an array of objects or
/// every record is rejected.
#[wasm_bindgen]
pub fn normalize_entries(raw: JsValue) -> Result<JsValue, JsValue> {
    let value: serde_json::Value = serde_wasm_bindgen::from_value(raw)
        .map_err(|e| JsValue::from_str(&format!("entries must be an array of objects: {e}")))?;

    let entries = entry::normalize(&value, &NormalizeOptions::default())?;

    serde_wasm_bindgen::to_value(&entries)
        .map_err(|e| JsValue::from_str(&format!("serialization failed: {e}")))
}

/// JS entry: (entries: Entry[], requested_count: number, seed?: bigint)
/// returns the full layout object (grid, placements, numbers, clue lists).
#[wasm_bindgen]
pub fn create_puzzle_wasm(
    entries: JsValue,
    requested_count: usize,
    seed: Option<u64>,
) -> Result<JsValue, JsValue> {
    let entries: Vec<Entry> = serde_wasm_bindgen::from_value(entries)
        .map_err(|e| JsValue::from_str(&format!("entries must be Entry[]: {e}")))?;

    let layout = puzzle::create_puzzle(
        &entries,
        requested_count,
        GenerateOptions {
            seed,
            on_progress: None,
        },
    )?;

    serde_wasm_bindgen::to_value(&layout)
        .map_err(|e| JsValue::from_str(&format!("serialization failed: {e}")))
}
