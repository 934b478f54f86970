//! Hand Gesture Web - finger counting and thumb gestures from hand landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

pub mod gesture;
mod bridge;
mod renderer;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    classify_hands, clear_hands, get_hand_count, ingest_frame, parse_hands, HandInputError,
    FLOATS_PER_HAND,
};

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the WebGPU overlay - must be called before render_frame
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn init() -> Result<(), JsValue> {
    renderer::initialize_gpu().await?;
    console_log!("✅ WebGPU overlay initialized ({} hand landmarks per hand)", gesture::LANDMARK_COUNT);
    Ok(())
}

/// Draw the hands from the last classify_hands call
#[wasm_bindgen]
pub fn render_frame() {
    renderer::render_frame();
}
