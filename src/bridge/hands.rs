//! Hand landmark intake and gesture report for JS
//!
//! Receives the pose model's hands as one flat Float32Array, classifies
//! them and keeps the frame's hands for the overlay renderer.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use std::fmt;
use crate::gesture::{classify_frame, FrameReport, Hand, Landmark, LANDMARK_COUNT};

/// Floats per hand: 21 landmarks × (x, y, z)
pub const FLOATS_PER_HAND: usize = LANDMARK_COUNT * 3;

/// Errors for malformed landmark data coming from JS
#[derive(Debug, PartialEq)]
pub enum HandInputError {
    TooShort { expected: usize, actual: usize },
    NonFinite { hand: usize, landmark: usize },
}

impl fmt::Display for HandInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandInputError::TooShort { expected, actual } => write!(
                f,
                "Invalid hand landmark data length: {} (expected at least {})",
                actual, expected
            ),
            HandInputError::NonFinite { hand, landmark } => write!(
                f,
                "Non-finite coordinate in hand {} landmark {}",
                hand, landmark
            ),
        }
    }
}

impl From<HandInputError> for JsValue {
    fn from(err: HandInputError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Split flat hand-major data into hands. Values past the last hand are ignored.
pub fn parse_hands(flat_data: &[f32], num_hands: usize) -> Result<Vec<Hand>, HandInputError> {
    let expected = num_hands * FLOATS_PER_HAND;
    if flat_data.len() < expected {
        return Err(HandInputError::TooShort {
            expected,
            actual: flat_data.len(),
        });
    }

    flat_data[..expected]
        .chunks_exact(FLOATS_PER_HAND)
        .enumerate()
        .map(|(h, chunk)| {
            let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
            for (i, xyz) in chunk.chunks_exact(3).enumerate() {
                let landmark = Landmark::new(xyz[0], xyz[1], xyz[2]);
                if !landmark.is_finite() {
                    return Err(HandInputError::NonFinite { hand: h, landmark: i });
                }
                landmarks[i] = landmark;
            }
            Ok(Hand::new(landmarks))
        })
        .collect()
}

// Thread-local storage (WASM is single-threaded), overwritten every frame
thread_local! {
    static CURRENT_HANDS: RefCell<Vec<Hand>> = RefCell::new(Vec::new());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript once per frame with `num_hands × 63` floats.
/// Returns the gesture report, one line per row.
#[wasm_bindgen]
pub fn classify_hands(flat_data: &[f32], num_hands: usize) -> Result<String, JsValue> {
    match ingest_frame(flat_data, num_hands) {
        Ok(report) => Ok(report.display_text()),
        Err(err) => {
            web_sys::console::warn_1(&err.to_string().into());
            Err(err.into())
        }
    }
}

/// Drop the stored frame (detection stopped)
#[wasm_bindgen]
pub fn clear_hands() {
    CURRENT_HANDS.with(|store| store.borrow_mut().clear());
}

/// Number of hands in the stored frame
#[wasm_bindgen]
pub fn get_hand_count() -> usize {
    CURRENT_HANDS.with(|store| store.borrow().len())
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Parse, classify and store one frame. A rejected frame empties the
/// store so the overlay does not keep drawing the last good skeleton.
pub fn ingest_frame(flat_data: &[f32], num_hands: usize) -> Result<FrameReport, HandInputError> {
    let hands = match parse_hands(flat_data, num_hands) {
        Ok(hands) => hands,
        Err(err) => {
            clear_hands();
            return Err(err);
        }
    };

    let report = classify_frame(&hands);
    CURRENT_HANDS.with(|store| *store.borrow_mut() = hands);
    Ok(report)
}

/// Hands of the current frame (for the renderer)
pub fn get_current_hands() -> Vec<Hand> {
    CURRENT_HANDS.with(|store| store.borrow().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{classify, GestureLabel};

    fn flat_hand(offset: f32) -> Vec<f32> {
        (0..LANDMARK_COUNT)
            .flat_map(|i| [offset + i as f32, 500.0 - i as f32, 0.1])
            .collect()
    }

    #[test]
    fn test_parse_two_hands_in_order() {
        let mut data = flat_hand(0.0);
        data.extend(flat_hand(1000.0));

        let hands = parse_hands(&data, 2).unwrap();
        assert_eq!(hands.len(), 2);
        assert_eq!(hands[0][0], Landmark::new(0.0, 500.0, 0.1));
        assert_eq!(hands[0][20], Landmark::new(20.0, 480.0, 0.1));
        assert_eq!(hands[1][4].x, 1004.0);
    }

    #[test]
    fn test_parse_zero_hands() {
        assert!(parse_hands(&[], 0).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_short_data() {
        let data = flat_hand(0.0);
        assert_eq!(
            parse_hands(&data, 2),
            Err(HandInputError::TooShort { expected: 126, actual: 63 })
        );
    }

    #[test]
    fn test_parse_ignores_surplus() {
        let mut data = flat_hand(0.0);
        data.extend([1.0, 2.0, 3.0]);
        assert_eq!(parse_hands(&data, 1).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_rejects_nan() {
        let mut data = flat_hand(0.0);
        data[3 * 7 + 1] = f32::NAN;
        assert_eq!(
            parse_hands(&data, 1),
            Err(HandInputError::NonFinite { hand: 0, landmark: 7 })
        );
    }

    #[test]
    fn test_parsed_hand_classifies() {
        // Every point on a descending diagonal: nothing raised, thumb tip below palm
        let data: Vec<f32> = (0..LANDMARK_COUNT)
            .flat_map(|i| [100.0, 200.0 + i as f32, 0.0])
            .collect();
        let hands = parse_hands(&data, 1).unwrap();
        assert_eq!(classify(&hands[0]), GestureLabel::ThumbDown);
    }

    #[test]
    fn test_error_message() {
        let err = HandInputError::TooShort { expected: 63, actual: 10 };
        assert_eq!(
            err.to_string(),
            "Invalid hand landmark data length: 10 (expected at least 63)"
        );
    }

    #[test]
    fn test_ingest_stores_hands() {
        let mut data = flat_hand(0.0);
        data.extend(flat_hand(1000.0));

        let report = ingest_frame(&data, 2).unwrap();
        assert_eq!(report.hand_count(), 2);
        assert_eq!(get_hand_count(), 2);
        assert_eq!(get_current_hands()[1][4].x, 1004.0);
    }

    #[test]
    fn test_rejected_frame_clears_stored_hands() {
        ingest_frame(&flat_hand(0.0), 1).unwrap();
        assert_eq!(get_hand_count(), 1);

        assert!(ingest_frame(&flat_hand(0.0), 2).is_err());
        assert_eq!(get_hand_count(), 0);
        assert!(get_current_hands().is_empty());

        let mut bad = flat_hand(0.0);
        bad[0] = f32::INFINITY;
        ingest_frame(&flat_hand(0.0), 1).unwrap();
        assert!(ingest_frame(&bad, 1).is_err());
        assert_eq!(get_hand_count(), 0);
    }

    #[test]
    fn test_empty_frame_reports_no_hands() {
        let report = ingest_frame(&[], 0).unwrap();
        assert_eq!(report, FrameReport::NoHandsDetected);
        assert_eq!(get_hand_count(), 0);
    }
}
