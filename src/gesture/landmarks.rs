//! Hand landmark types and index layout
//!
//! Indices follow the hand pose model convention: 0 is the palm base,
//! then four landmarks per finger from base to tip.

use std::ops::Index;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const LANDMARK_COUNT: usize = 21;

pub const PALM_BASE: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Finger chains for the overlay, each drawn as one connected path
pub const FINGER_CHAINS: [[usize; 5]; 5] = [
    [PALM_BASE, THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP],
    [PALM_BASE, INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP],
    [PALM_BASE, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP],
    [PALM_BASE, RING_MCP, RING_PIP, RING_DIP, RING_TIP],
    [PALM_BASE, PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP],
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single landmark in image-pixel space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Fingers in the fixed thumb→pinky order used for counting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// (tip, mid, base) landmark indices read by the extension test.
    ///
    /// "Base" is two joints below the tip, not the knuckle.
    pub fn joint_indices(&self) -> (usize, usize, usize) {
        match self {
            Finger::Thumb => (THUMB_TIP, THUMB_IP, THUMB_MCP),
            Finger::Index => (INDEX_TIP, INDEX_DIP, INDEX_PIP),
            Finger::Middle => (MIDDLE_TIP, MIDDLE_DIP, MIDDLE_PIP),
            Finger::Ring => (RING_TIP, RING_DIP, RING_PIP),
            Finger::Pinky => (PINKY_TIP, PINKY_DIP, PINKY_PIP),
        }
    }
}

/// Tip, mid and base of one finger plus the palm base
#[derive(Clone, Copy, Debug)]
pub struct FingerJoints {
    pub tip: Landmark,
    pub mid: Landmark,
    pub base: Landmark,
    /// Carried with every finger; current extension rules do not read it
    pub palm_base: Landmark,
}

/// All 21 landmarks of one detected hand in one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hand {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl Hand {
    pub fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    pub fn palm_base(&self) -> Landmark {
        self.landmarks[PALM_BASE]
    }

    pub fn finger(&self, finger: Finger) -> FingerJoints {
        let (tip, mid, base) = finger.joint_indices();
        FingerJoints {
            tip: self.landmarks[tip],
            mid: self.landmarks[mid],
            base: self.landmarks[base],
            palm_base: self.palm_base(),
        }
    }
}

impl Index<usize> for Hand {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }
}

impl From<[Landmark; LANDMARK_COUNT]> for Hand {
    fn from(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self::new(landmarks)
    }
}
