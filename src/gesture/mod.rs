//! Gesture module - landmark → gesture classification
//!
//! Pure and stateless: no logging, no thread-locals, no cross-frame memory.
//! Re-exports only. All logic in submodules.

mod classify;
mod extension;
mod label;
mod landmarks;
mod thumb;
pub mod thresholds;

pub use classify::{classify, classify_frame, FrameReport, FrameResult};
pub use extension::{count_extended, is_extended};
pub use label::GestureLabel;
pub use landmarks::{
    Finger, FingerJoints, Hand, Landmark,
    FINGER_CHAINS, LANDMARK_COUNT, PALM_BASE,
};
pub use thumb::detect_thumb_gesture;
