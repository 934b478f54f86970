//! Hand → gesture classification and per-frame aggregation

use super::extension::count_extended;
use super::label::GestureLabel;
use super::landmarks::Hand;
use super::thumb::detect_thumb_gesture;

/// Classify one hand. Total: every hand gets exactly one label.
pub fn classify(hand: &Hand) -> GestureLabel {
    match GestureLabel::finger_count(count_extended(hand)) {
        Some(label) => label,
        None => detect_thumb_gesture(hand).unwrap_or(GestureLabel::Fist),
    }
}

/// Labels for every hand in one frame, in detection order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameResult {
    pub hand_count: usize,
    pub labels: Vec<GestureLabel>,
}

/// What one frame shows to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameReport {
    NoHandsDetected,
    Detected(FrameResult),
}

impl FrameReport {
    pub fn hand_count(&self) -> usize {
        match self {
            FrameReport::NoHandsDetected => 0,
            FrameReport::Detected(result) => result.hand_count,
        }
    }

    /// One line per display row
    pub fn display_lines(&self) -> Vec<String> {
        match self {
            FrameReport::NoHandsDetected => vec!["No hands detected".to_string()],
            FrameReport::Detected(result) => {
                let mut lines = Vec::with_capacity(result.labels.len() + 1);
                lines.push(format!("Hands: {}", result.hand_count));
                for (i, label) in result.labels.iter().enumerate() {
                    lines.push(format!("Hand {}: {}", i + 1, label.display_text()));
                }
                lines
            }
        }
    }

    pub fn display_text(&self) -> String {
        self.display_lines().join("\n")
    }
}

/// Classify every hand of a frame
pub fn classify_frame(hands: &[Hand]) -> FrameReport {
    if hands.is_empty() {
        return FrameReport::NoHandsDetected;
    }

    FrameReport::Detected(FrameResult {
        hand_count: hands.len(),
        labels: hands.iter().map(classify).collect(),
    })
}
