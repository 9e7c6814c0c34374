//! # hand_model
//!
//! The fixed 21-landmark hand-skeleton geometry used by the Virtual Mouse
//! demo simulation.
//!
//! The skeleton is *derived*, never tracked: [`layout`] maps a cursor
//! position and a canvas size to 21 screen-space points arranged as a
//! stylized right hand, using the MediaPipe landmark numbering. It is a pure
//! function — no hidden state, and two calls with the same inputs produce
//! identical output.
//!
//! ## Quick start
//!
//! ```rust
//! use glam::Vec2;
//! use hand_model::{layout, Landmark, CONNECTIONS, FINGERTIPS};
//!
//! let points = layout(Vec2::new(300.0, 250.0), Vec2::new(800.0, 450.0));
//!
//! // One position per landmark, joined by the anatomical edge list.
//! assert_eq!(points.len(), 21);
//! for (a, b) in CONNECTIONS {
//!     let _bone = points[b.index()] - points[a.index()];
//! }
//!
//! // Fingertips are the five chain ends.
//! assert!(FINGERTIPS.contains(&Landmark::IndexTip));
//! ```

use glam::Vec2;

/// Number of landmarks in the skeleton.
pub const LANDMARK_COUNT: usize = 21;

// ════════════════════════════════════════════════════════════════════════════
// Landmark — MediaPipe hand landmark numbering (0–20)
// ════════════════════════════════════════════════════════════════════════════

/// The 21 hand landmarks, numbered as MediaPipe Hands numbers them.
///
/// Use [`Landmark::index`] to get the raw index into a layout array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Landmark {
    Wrist     = 0,
    // Thumb
    ThumbCmc  = 1,
    ThumbMcp  = 2,
    ThumbIp   = 3,
    ThumbTip  = 4,
    // Index
    IndexMcp  = 5,
    IndexPip  = 6,
    IndexDip  = 7,
    IndexTip  = 8,
    // Middle
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    // Ring
    RingMcp   = 13,
    RingPip   = 14,
    RingDip   = 15,
    RingTip   = 16,
    // Pinky
    PinkyMcp  = 17,
    PinkyPip  = 18,
    PinkyDip  = 19,
    PinkyTip  = 20,
}

impl Landmark {
    /// Raw layout-array index (0–20).
    pub const fn index(self) -> usize { self as usize }

    /// Landmark for a raw index, if in range.
    pub fn from_index(i: usize) -> Option<Landmark> {
        Self::all().get(i).copied()
    }

    /// True for the five fingertip landmarks (4, 8, 12, 16, 20).
    pub const fn is_fingertip(self) -> bool {
        matches!(
            self,
            Landmark::ThumbTip
                | Landmark::IndexTip
                | Landmark::MiddleTip
                | Landmark::RingTip
                | Landmark::PinkyTip
        )
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Landmark::Wrist     => "Wrist",
            Landmark::ThumbCmc  => "Thumb CMC",
            Landmark::ThumbMcp  => "Thumb MCP",
            Landmark::ThumbIp   => "Thumb IP",
            Landmark::ThumbTip  => "Thumb Tip",
            Landmark::IndexMcp  => "Index MCP",
            Landmark::IndexPip  => "Index PIP",
            Landmark::IndexDip  => "Index DIP",
            Landmark::IndexTip  => "Index Tip",
            Landmark::MiddleMcp => "Middle MCP",
            Landmark::MiddlePip => "Middle PIP",
            Landmark::MiddleDip => "Middle DIP",
            Landmark::MiddleTip => "Middle Tip",
            Landmark::RingMcp   => "Ring MCP",
            Landmark::RingPip   => "Ring PIP",
            Landmark::RingDip   => "Ring DIP",
            Landmark::RingTip   => "Ring Tip",
            Landmark::PinkyMcp  => "Pinky MCP",
            Landmark::PinkyPip  => "Pinky PIP",
            Landmark::PinkyDip  => "Pinky DIP",
            Landmark::PinkyTip  => "Pinky Tip",
        }
    }

    /// All 21 landmarks in index order.
    pub const fn all() -> [Landmark; LANDMARK_COUNT] {
        [
            Landmark::Wrist,
            Landmark::ThumbCmc,  Landmark::ThumbMcp,  Landmark::ThumbIp,   Landmark::ThumbTip,
            Landmark::IndexMcp,  Landmark::IndexPip,  Landmark::IndexDip,  Landmark::IndexTip,
            Landmark::MiddleMcp, Landmark::MiddlePip, Landmark::MiddleDip, Landmark::MiddleTip,
            Landmark::RingMcp,   Landmark::RingPip,   Landmark::RingDip,   Landmark::RingTip,
            Landmark::PinkyMcp,  Landmark::PinkyPip,  Landmark::PinkyDip,  Landmark::PinkyTip,
        ]
    }
}

/// The five fingertip landmarks, thumb first.
pub const FINGERTIPS: [Landmark; 5] = [
    Landmark::ThumbTip,
    Landmark::IndexTip,
    Landmark::MiddleTip,
    Landmark::RingTip,
    Landmark::PinkyTip,
];

// ════════════════════════════════════════════════════════════════════════════
// CONNECTIONS — anatomical edge list
// ════════════════════════════════════════════════════════════════════════════

/// Bone segments connecting the landmarks: each finger is a four-segment
/// chain from the wrist to its tip, plus three palm edges bridging the
/// knuckles.
pub const CONNECTIONS: [(Landmark, Landmark); 23] = {
    use Landmark::*;
    [
        // thumb
        (Wrist, ThumbCmc), (ThumbCmc, ThumbMcp), (ThumbMcp, ThumbIp), (ThumbIp, ThumbTip),
        // index
        (Wrist, IndexMcp), (IndexMcp, IndexPip), (IndexPip, IndexDip), (IndexDip, IndexTip),
        // middle
        (Wrist, MiddleMcp), (MiddleMcp, MiddlePip), (MiddlePip, MiddleDip), (MiddleDip, MiddleTip),
        // ring
        (Wrist, RingMcp), (RingMcp, RingPip), (RingPip, RingDip), (RingDip, RingTip),
        // pinky
        (Wrist, PinkyMcp), (PinkyMcp, PinkyPip), (PinkyPip, PinkyDip), (PinkyDip, PinkyTip),
        // palm
        (IndexMcp, MiddleMcp), (MiddleMcp, RingMcp), (RingMcp, PinkyMcp),
    ]
};

// ════════════════════════════════════════════════════════════════════════════
// BASE_OFFSETS — the fixed relative layout
// ════════════════════════════════════════════════════════════════════════════

/// Relative landmark offsets from the palm anchor, in anchor-normalized
/// units, before scaling by [`HAND_SCALE`]. Negative y is toward the
/// fingertips (screen-up); the wrist hangs below the anchor.
pub const BASE_OFFSETS: [Vec2; LANDMARK_COUNT] = [
    Vec2::new(0.0, 0.5),     // wrist
    Vec2::new(-0.15, 0.35),  // thumb cmc
    Vec2::new(-0.25, 0.2),   // thumb mcp
    Vec2::new(-0.32, 0.08),  // thumb ip
    Vec2::new(-0.36, -0.05), // thumb tip
    Vec2::new(-0.08, -0.05), // index mcp
    Vec2::new(-0.1, -0.2),   // index pip
    Vec2::new(-0.1, -0.32),  // index dip
    Vec2::new(-0.1, -0.42),  // index tip
    Vec2::new(0.0, -0.05),   // middle mcp
    Vec2::new(0.0, -0.22),   // middle pip
    Vec2::new(0.0, -0.35),   // middle dip
    Vec2::new(0.0, -0.47),   // middle tip
    Vec2::new(0.08, -0.03),  // ring mcp
    Vec2::new(0.09, -0.18),  // ring pip
    Vec2::new(0.09, -0.3),   // ring dip
    Vec2::new(0.09, -0.4),   // ring tip
    Vec2::new(0.15, 0.02),   // pinky mcp
    Vec2::new(0.17, -0.1),   // pinky pip
    Vec2::new(0.18, -0.2),   // pinky dip
    Vec2::new(0.18, -0.28),  // pinky tip
];

/// Scale factor applied to [`BASE_OFFSETS`] before mapping to pixels.
pub const HAND_SCALE: f32 = 0.15;

// ════════════════════════════════════════════════════════════════════════════
// layout — the pure layout function
// ════════════════════════════════════════════════════════════════════════════

/// Normalized palm-anchor position for a cursor inside a canvas of `size`.
///
/// The cursor is compressed into a sub-range of the canvas — x into
/// [0.2, 0.8], y into [0.3, 0.8] — so the whole hand stays on screen when
/// the cursor reaches an edge.
pub fn anchor(cursor: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(
        (cursor.x / size.x) * 0.6 + 0.2,
        (cursor.y / size.y) * 0.5 + 0.3,
    )
}

/// Compute the 21 landmark positions, in pixels, for a cursor position and
/// a canvas size (both in the same logical-pixel space).
///
/// Pure: the result depends only on the arguments. A degenerate canvas
/// (zero or negative extent on either axis) yields all-zero points rather
/// than dividing by zero.
pub fn layout(cursor: Vec2, size: Vec2) -> [Vec2; LANDMARK_COUNT] {
    if size.x <= 0.0 || size.y <= 0.0 {
        return [Vec2::ZERO; LANDMARK_COUNT];
    }
    let a = anchor(cursor, size);
    let mut points = [Vec2::ZERO; LANDMARK_COUNT];
    for (p, base) in points.iter_mut().zip(BASE_OFFSETS.iter()) {
        *p = (a + *base * HAND_SCALE) * size;
    }
    points
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    // ── Landmark taxonomy ────────────────────────────────────────────────
    #[test]
    fn all_landmarks_in_index_order() {
        for (i, lm) in Landmark::all().iter().enumerate() {
            assert_eq!(lm.index(), i);
        }
    }

    #[test]
    fn from_index_roundtrip() {
        for lm in Landmark::all() {
            assert_eq!(Landmark::from_index(lm.index()), Some(lm));
        }
        assert_eq!(Landmark::from_index(21), None);
    }

    #[test]
    fn fingertip_indices() {
        let tips: Vec<usize> = FINGERTIPS.iter().map(|t| t.index()).collect();
        assert_eq!(tips, [4, 8, 12, 16, 20]);
        for lm in Landmark::all() {
            assert_eq!(lm.is_fingertip(), FINGERTIPS.contains(&lm));
        }
    }

    #[test]
    fn names_are_distinct() {
        let mut names: Vec<&str> = Landmark::all().iter().map(|l| l.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), LANDMARK_COUNT);
    }

    // ── Edge list ────────────────────────────────────────────────────────
    #[test]
    fn connections_have_no_self_edges() {
        for (a, b) in CONNECTIONS {
            assert_ne!(a, b);
        }
    }

    #[test]
    fn connections_cover_every_landmark() {
        for lm in Landmark::all() {
            let touched = CONNECTIONS.iter().any(|&(a, b)| a == lm || b == lm);
            assert!(touched, "{} is not connected", lm.name());
        }
    }

    #[test]
    fn each_fingertip_terminates_one_edge() {
        // A tip appears exactly once, always as the far end of its chain.
        for tip in FINGERTIPS {
            let n = CONNECTIONS.iter().filter(|&&(a, b)| a == tip || b == tip).count();
            assert_eq!(n, 1, "{} should terminate exactly one bone", tip.name());
        }
    }

    // ── Layout ───────────────────────────────────────────────────────────
    #[test]
    fn layout_is_deterministic() {
        let cursor = Vec2::new(313.7, 189.2);
        let size = Vec2::new(800.0, 448.0);
        assert_eq!(layout(cursor, size), layout(cursor, size));
    }

    #[test]
    fn layout_moves_with_cursor() {
        let size = Vec2::new(800.0, 450.0);
        let left = layout(Vec2::new(100.0, 200.0), size);
        let right = layout(Vec2::new(700.0, 200.0), size);
        for (l, r) in left.iter().zip(right.iter()) {
            assert!(r.x > l.x);
            assert_eq!(r.y, l.y);
        }
    }

    #[test]
    fn layout_stays_on_canvas_for_interior_cursor() {
        let size = Vec2::new(800.0, 450.0);
        for &(cx, cy) in &[(0.0, 0.0), (400.0, 225.0), (800.0, 450.0)] {
            let points = layout(Vec2::new(cx, cy), size);
            for p in points {
                assert!(p.x >= 0.0 && p.x <= size.x, "x out of canvas: {}", p.x);
                assert!(p.y >= 0.0 && p.y <= size.y, "y out of canvas: {}", p.y);
            }
        }
    }

    #[test]
    fn wrist_below_middle_tip() {
        let points = layout(Vec2::new(400.0, 225.0), Vec2::new(800.0, 450.0));
        let wrist = points[Landmark::Wrist.index()];
        let tip = points[Landmark::MiddleTip.index()];
        assert!(wrist.y > tip.y, "wrist should hang below the fingertips");
    }

    #[test]
    fn degenerate_canvas_yields_zero_points() {
        let points = layout(Vec2::new(300.0, 250.0), Vec2::ZERO);
        assert!(points.iter().all(|p| *p == Vec2::ZERO));
    }

    #[test]
    fn anchor_compresses_into_interior() {
        let size = Vec2::new(640.0, 360.0);
        let a0 = anchor(Vec2::ZERO, size);
        let a1 = anchor(size, size);
        assert!((a0.x - 0.2).abs() < 1e-6 && (a1.x - 0.8).abs() < 1e-6);
        assert!((a0.y - 0.3).abs() < 1e-6 && (a1.y - 0.8).abs() < 1e-6);
    }
}
