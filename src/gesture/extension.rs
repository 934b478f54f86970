//! Finger extension test
//!
//! Decides per finger whether it is held out straight. The thumb uses a
//! two-axis spread test; the other fingers need a raised tip and a minimum
//! tilt of the base→tip vector.

use super::landmarks::{Finger, FingerJoints, Hand};
use super::thresholds::{FINGER_MIN_TILT, FINGER_RAISE_Y, THUMB_SPREAD_X, THUMB_SPREAD_Y};

/// Whether `finger` is extended given its joints
pub fn is_extended(finger: Finger, joints: &FingerJoints) -> bool {
    match finger {
        Finger::Thumb => is_thumb_extended(joints),
        _ => is_finger_raised(joints),
    }
}

fn is_thumb_extended(joints: &FingerJoints) -> bool {
    (joints.tip.x - joints.base.x).abs() > THUMB_SPREAD_X
        && (joints.tip.y - joints.mid.y).abs() > THUMB_SPREAD_Y
}

fn is_finger_raised(joints: &FingerJoints) -> bool {
    let dx = joints.tip.x - joints.base.x;
    let dy = joints.tip.y - joints.base.y;

    // Image y grows downward: raised means smaller y
    let tip_above = joints.tip.y < joints.base.y - FINGER_RAISE_Y;
    let tilt = dy.atan2(dx);

    tip_above && tilt.abs() > FINGER_MIN_TILT
}

/// Number of extended fingers, 0..=5
pub fn count_extended(hand: &Hand) -> u8 {
    Finger::ALL
        .iter()
        .filter(|&&finger| is_extended(finger, &hand.finger(finger)))
        // At most Finger::ALL.len() == 5, fits u8
        .count() as u8
}
