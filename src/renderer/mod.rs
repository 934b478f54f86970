//! Renderer module - WebGPU hand skeleton overlay
//!
//! Re-exports only. All logic in submodules.

mod state;
mod overlay;
mod shapes;

#[cfg(target_arch = "wasm32")]
pub use state::initialize_gpu;
pub use overlay::render_frame;
