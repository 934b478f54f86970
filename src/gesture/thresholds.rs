//! Fixed pixel thresholds for gesture classification
//!
//! Tuned for a 640×480 mirrored camera frame. They are not rescaled for
//! other resolutions.

/// Thumb: minimum horizontal tip↔base distance to count as splayed
pub const THUMB_SPREAD_X: f32 = 40.0;

/// Thumb: minimum vertical tip↔mid distance to count as splayed
pub const THUMB_SPREAD_Y: f32 = 20.0;

/// Other fingers: how far the tip must sit above its base
pub const FINGER_RAISE_Y: f32 = 30.0;

/// Other fingers: minimum |angle| of the base→tip vector (radians)
pub const FINGER_MIN_TILT: f32 = 0.3;

/// Thumb left/right: minimum horizontal tip offset from the palm base
pub const THUMB_SIDE_X: f32 = 30.0;

/// Thumb left/right: maximum vertical tip offset from the palm base
pub const THUMB_SIDE_MAX_Y: f32 = 50.0;
