//! Gesture labels and their display text

use std::fmt;

/// One classification result per hand per frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureLabel {
    /// Extended fingers, always 1..=5 when produced by `classify`.
    /// Use [`GestureLabel::finger_count`] to build one from a raw count.
    FingerCount(u8),
    ThumbUp,
    ThumbDown,
    /// Reported after the horizontal flip, i.e. the viewer's left
    ThumbLeft,
    /// Reported after the horizontal flip, i.e. the viewer's right
    ThumbRight,
    Fist,
}

impl GestureLabel {
    /// Largest count a single hand can show
    pub const MAX_FINGERS: u8 = 5;

    /// `FingerCount(n)` for n in 1..=5, `None` otherwise
    pub fn finger_count(n: u8) -> Option<Self> {
        (1..=Self::MAX_FINGERS)
            .contains(&n)
            .then_some(GestureLabel::FingerCount(n))
    }

    /// Stable machine-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureLabel::FingerCount(_) => "finger_count",
            GestureLabel::ThumbUp => "thumb_up",
            GestureLabel::ThumbDown => "thumb_down",
            GestureLabel::ThumbLeft => "thumb_left",
            GestureLabel::ThumbRight => "thumb_right",
            GestureLabel::Fist => "fist",
        }
    }

    /// Human-readable text with emoji marker.
    ///
    /// Left/right markers point the mirrored way: the camera image is
    /// flipped, so a thumb reported as "left" points right on screen.
    pub fn display_text(&self) -> String {
        match self {
            GestureLabel::ThumbLeft => "👉 Thumb left".to_string(),
            GestureLabel::ThumbRight => "👈 Thumb right".to_string(),
            GestureLabel::ThumbUp => "👍 Thumb up".to_string(),
            GestureLabel::ThumbDown => "👎 Thumb down".to_string(),
            GestureLabel::Fist => "✊ Fist".to_string(),
            GestureLabel::FingerCount(n) => format!("{} fingers", n),
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}
