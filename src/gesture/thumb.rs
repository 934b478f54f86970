//! Thumb direction gestures, checked only when no finger is extended

use super::label::GestureLabel;
use super::landmarks::{Finger, FingerJoints, Hand, Landmark};
use super::thresholds::{THUMB_SIDE_MAX_Y, THUMB_SIDE_X};

type ThumbRule = fn(&FingerJoints, Landmark) -> bool;

/// Evaluated in order, first match wins.
///
/// Vertical rules come first: an up/down thumb can also fall inside the
/// loose horizontal bounds.
const THUMB_RULES: [(ThumbRule, GestureLabel); 4] = [
    (is_thumb_up, GestureLabel::ThumbUp),
    (is_thumb_down, GestureLabel::ThumbDown),
    (is_thumb_left, GestureLabel::ThumbLeft),
    (is_thumb_right, GestureLabel::ThumbRight),
];

/// Thumb direction of a hand with all fingers curled, if any
pub fn detect_thumb_gesture(hand: &Hand) -> Option<GestureLabel> {
    let thumb = hand.finger(Finger::Thumb);
    let palm = hand.palm_base();

    THUMB_RULES
        .iter()
        .find(|(rule, _)| rule(&thumb, palm))
        .map(|&(_, label)| label)
}

fn is_thumb_up(thumb: &FingerJoints, palm: Landmark) -> bool {
    thumb.tip.y < palm.y && thumb.tip.y < thumb.base.y
}

fn is_thumb_down(thumb: &FingerJoints, palm: Landmark) -> bool {
    thumb.tip.y > palm.y && thumb.tip.y > thumb.base.y
}

// Mirrored: the frame is flipped before it reaches us
fn is_thumb_left(thumb: &FingerJoints, palm: Landmark) -> bool {
    thumb.tip.x > palm.x + THUMB_SIDE_X && (thumb.tip.y - palm.y).abs() < THUMB_SIDE_MAX_Y
}

fn is_thumb_right(thumb: &FingerJoints, palm: Landmark) -> bool {
    thumb.tip.x < palm.x - THUMB_SIDE_X && (thumb.tip.y - palm.y).abs() < THUMB_SIDE_MAX_Y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::landmarks::{PALM_BASE, THUMB_IP, THUMB_MCP, THUMB_TIP};

    fn hand_with_thumb(tip: (f32, f32), base: (f32, f32), palm: (f32, f32)) -> Hand {
        let mut points = [Landmark::new(palm.0, palm.1, 0.0); 21];
        points[PALM_BASE] = Landmark::new(palm.0, palm.1, 0.0);
        points[THUMB_MCP] = Landmark::new(base.0, base.1, 0.0);
        points[THUMB_IP] = Landmark::new((tip.0 + base.0) / 2.0, (tip.1 + base.1) / 2.0, 0.0);
        points[THUMB_TIP] = Landmark::new(tip.0, tip.1, 0.0);
        Hand::new(points)
    }

    #[test]
    fn test_thumb_up() {
        let hand = hand_with_thumb((100.0, 50.0), (100.0, 150.0), (100.0, 200.0));
        assert_eq!(detect_thumb_gesture(&hand), Some(GestureLabel::ThumbUp));
    }

    #[test]
    fn test_thumb_down() {
        let hand = hand_with_thumb((100.0, 300.0), (100.0, 250.0), (100.0, 200.0));
        assert_eq!(detect_thumb_gesture(&hand), Some(GestureLabel::ThumbDown));
    }

    #[test]
    fn test_thumb_left_is_positive_x() {
        let hand = hand_with_thumb((150.0, 195.0), (120.0, 190.0), (100.0, 200.0));
        assert_eq!(detect_thumb_gesture(&hand), Some(GestureLabel::ThumbLeft));
    }

    #[test]
    fn test_thumb_right_is_negative_x() {
        let hand = hand_with_thumb((50.0, 195.0), (80.0, 190.0), (100.0, 200.0));
        assert_eq!(detect_thumb_gesture(&hand), Some(GestureLabel::ThumbRight));
    }

    #[test]
    fn test_vertical_wins_over_horizontal() {
        // Satisfies both the up rule and the left rule
        let hand = hand_with_thumb((150.0, 180.0), (145.0, 190.0), (100.0, 200.0));
        let thumb = hand.finger(Finger::Thumb);
        assert!(is_thumb_left(&thumb, hand.palm_base()));
        assert_eq!(detect_thumb_gesture(&hand), Some(GestureLabel::ThumbUp));
    }

    #[test]
    fn test_side_offset_too_small() {
        // Exactly 30px to the side and between palm and base vertically
        let hand = hand_with_thumb((130.0, 195.0), (120.0, 190.0), (100.0, 200.0));
        assert_eq!(detect_thumb_gesture(&hand), None);
    }

    #[test]
    fn test_side_too_far_vertically() {
        // Tip level with thumb base, 50px above palm: not up, not side
        let hand = hand_with_thumb((160.0, 150.0), (120.0, 150.0), (100.0, 200.0));
        assert_eq!(detect_thumb_gesture(&hand), None);
    }
}
