//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points for hand data live here.
//! Re-exports only in mod.rs, logic in submodules.

mod hands;

pub use hands::{
    // WASM entry points
    classify_hands,
    clear_hands,
    get_hand_count,
    // Internal API
    get_current_hands,
    ingest_frame,
    parse_hands,
    HandInputError,
    // Constants
    FLOATS_PER_HAND,
};
