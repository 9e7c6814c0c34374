//! # pointer_sim
//!
//! The state machine behind the Virtual Mouse demo: a pointer-driven
//! stand-in for a live hand-tracking feed.
//!
//! Raw pointer samples flow in through [`PointerInput`] events; once per
//! animation frame [`DemoState::tick`] low-passes the position, advances the
//! click-gesture deadline, and updates the frame-rate tally. Everything a
//! renderer needs — smoothed cursor, skeleton points, gesture label, click
//! count, enabled flag — is read from the state object. There is no module
//! state anywhere: each [`DemoState`] is a self-contained instance, so
//! several demos can run side by side and tests drive one directly.
//!
//! ## Quick start
//!
//! ```rust
//! use std::time::Instant;
//! use glam::Vec2;
//! use pointer_sim::{DemoState, PointerInput};
//!
//! let now = Instant::now();
//! let mut demo = DemoState::new(800.0, 1.0, now);
//!
//! demo.apply(PointerInput::Moved(Vec2::new(420.0, 120.0)), now);
//! demo.apply(PointerInput::Pressed, now);
//! demo.tick(now);
//!
//! assert_eq!(demo.clicks(), 1);
//! assert_eq!(demo.gesture_phase().label(), "CLICK");
//! assert_eq!(demo.hand_points().len(), 21);
//! ```

use std::time::{Duration, Instant};

use glam::Vec2;

// ════════════════════════════════════════════════════════════════════════════
// ExpSmoother — first-order exponential smoothing for the cursor
// ════════════════════════════════════════════════════════════════════════════

/// Fraction of the remaining distance covered each frame.
pub const SMOOTHING_ALPHA: f32 = 0.12;

/// Exponentially-smoothed 2D position.
///
/// The raw pointer sample is never drawn directly; the cursor eases toward
/// it a fixed fraction per frame: `value += (target − value) * alpha`, so
/// the distance to a held target shrinks by a factor of `1 − alpha` every
/// frame — geometric convergence. This is a plain low-pass filter; the
/// production tracker's Kalman pipeline is a different system and is not
/// reproduced here.
#[derive(Clone, Copy, Debug)]
pub struct ExpSmoother {
    value: Vec2,
    alpha: f32,
}

impl ExpSmoother {
    /// Smoother starting at `initial` with the standard [`SMOOTHING_ALPHA`].
    pub fn new(initial: Vec2) -> Self {
        Self::with_alpha(initial, SMOOTHING_ALPHA)
    }

    /// Smoother with a custom easing fraction, clamped to (0, 1].
    pub fn with_alpha(initial: Vec2, alpha: f32) -> Self {
        ExpSmoother {
            value: initial,
            alpha: alpha.clamp(f32::EPSILON, 1.0),
        }
    }

    /// Advance one frame toward `target`; returns the new smoothed value.
    pub fn advance(&mut self, target: Vec2) -> Vec2 {
        self.value += (target - self.value) * self.alpha;
        self.value
    }

    /// Current smoothed value.
    pub fn value(&self) -> Vec2 {
        self.value
    }

    /// The easing fraction in use.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SurfaceGeometry — responsive canvas sizing
// ════════════════════════════════════════════════════════════════════════════

/// Device pixel ratio is capped here to bound the backing buffer.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Logical height never exceeds this many units.
pub const MAX_LOGICAL_HEIGHT: f32 = 500.0;

/// Logical height as a fraction of the container width.
pub const HEIGHT_RATIO: f32 = 0.56;

/// Resolved drawing surface: logical units for layout and input, a scale
/// factor mapping logical units to backing-buffer pixels.
///
/// The logical width tracks the container; the height is
/// `width * HEIGHT_RATIO` capped at [`MAX_LOGICAL_HEIGHT`]. The scale is the
/// device pixel ratio capped at [`MAX_PIXEL_RATIO`], with non-positive
/// ratios treated as 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceGeometry {
    logical: Vec2,
    scale:   f32,
}

impl SurfaceGeometry {
    /// Geometry for a container `width` logical units wide on a display
    /// with the given device pixel ratio.
    pub fn from_container(width: f32, device_pixel_ratio: f32) -> Self {
        let width = width.max(0.0);
        let scale = if device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_PIXEL_RATIO)
        } else {
            1.0
        };
        SurfaceGeometry {
            logical: Vec2::new(width, (width * HEIGHT_RATIO).min(MAX_LOGICAL_HEIGHT)),
            scale,
        }
    }

    /// Size in logical units; all layout and input happens in this space.
    pub fn logical_size(&self) -> Vec2 {
        self.logical
    }

    /// Backing-buffer size in whole pixels.
    pub fn physical_size(&self) -> (usize, usize) {
        (
            (self.logical.x * self.scale).round() as usize,
            (self.logical.y * self.scale).round() as usize,
        )
    }

    /// Logical-to-physical scale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// True when the surface has no drawable area.
    pub fn is_degenerate(&self) -> bool {
        self.logical.x <= 0.0 || self.logical.y <= 0.0
    }
}

// ════════════════════════════════════════════════════════════════════════════
// GesturePhase — the HUD readout
// ════════════════════════════════════════════════════════════════════════════

/// How long the CLICK phase is held after the most recent press.
pub const CLICK_HOLD: Duration = Duration::from_millis(300);

/// Current gesture readout shown on the HUD.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// Idle tracking; the cursor follows the pointer.
    Move,
    /// A press was registered within the last [`CLICK_HOLD`].
    Click,
}

impl GesturePhase {
    /// HUD label for this phase.
    pub fn label(self) -> &'static str {
        match self {
            GesturePhase::Move  => "MOVE",
            GesturePhase::Click => "CLICK",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ClickGesture — timed reversion to the idle phase
// ════════════════════════════════════════════════════════════════════════════

/// Click phase tracker with a single reversion deadline.
///
/// Every press enters [`GesturePhase::Click`] and re-arms the deadline to
/// `now + CLICK_HOLD`; an earlier pending deadline is replaced, never
/// stacked. The phase falls back to [`GesturePhase::Move`] once the deadline
/// passes, so rapid presses hold CLICK until [`CLICK_HOLD`] after the last
/// one.
#[derive(Clone, Copy, Debug)]
pub struct ClickGesture {
    phase:     GesturePhase,
    revert_at: Option<Instant>,
}

impl ClickGesture {
    pub fn new() -> Self {
        ClickGesture {
            phase:     GesturePhase::Move,
            revert_at: None,
        }
    }

    /// Register a press at `now`.
    pub fn press(&mut self, now: Instant) {
        self.phase     = GesturePhase::Click;
        self.revert_at = Some(now + CLICK_HOLD);
    }

    /// Advance time; reverts to MOVE once the deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.revert_at {
            if now >= deadline {
                self.phase     = GesturePhase::Move;
                self.revert_at = None;
            }
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }
}

impl Default for ClickGesture {
    fn default() -> Self {
        Self::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// FpsCounter — HUD frame-rate tally
// ════════════════════════════════════════════════════════════════════════════

/// FPS is re-sampled once per this window.
pub const FPS_WINDOW: Duration = Duration::from_secs(1);

/// Frames-per-second tally for the HUD. Display only; nothing else reads it.
#[derive(Clone, Copy, Debug)]
pub struct FpsCounter {
    frames:       u32,
    fps:          u32,
    window_start: Instant,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        FpsCounter {
            frames:       0,
            fps:          0,
            window_start: now,
        }
    }

    /// Count one frame; once a full window has elapsed, snapshot the tally
    /// as the displayed rate and start a fresh window.
    pub fn frame(&mut self, now: Instant) {
        self.frames += 1;
        if now.duration_since(self.window_start) >= FPS_WINDOW {
            self.fps          = self.frames;
            self.frames       = 0;
            self.window_start = now;
        }
    }

    /// Most recently completed window's frame count. Zero until the first
    /// window closes.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

// ════════════════════════════════════════════════════════════════════════════
// PointerInput — host events
// ════════════════════════════════════════════════════════════════════════════

/// One host input event. The window layer batches these per frame; a later
/// `Moved` overwrites an earlier one, there is no sample queue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    /// Pointer position in logical surface coordinates. Mouse motion and
    /// touch drags arrive as the same event.
    Moved(Vec2),
    /// A click or a touch tap.
    Pressed,
    /// Flip the tracking-enabled flag.
    ToggleTracking,
    /// The hosting container changed width.
    Resized { container_width: f32 },
}

// ════════════════════════════════════════════════════════════════════════════
// DemoState — one demo instance
// ════════════════════════════════════════════════════════════════════════════

/// Where the cursor rests before the first pointer sample arrives.
pub const INITIAL_POINTER: Vec2 = Vec2::new(300.0, 250.0);

/// Complete state of one demo instance.
///
/// Everything lives on the instance; two `DemoState` values never share
/// anything, so several demos can run side by side. The host feeds events
/// through [`apply`](DemoState::apply) and advances time with
/// [`tick`](DemoState::tick); the painter only reads.
#[derive(Clone, Copy, Debug)]
pub struct DemoState {
    raw:                Vec2,
    smoother:           ExpSmoother,
    gesture:            ClickGesture,
    clicks:             u64,
    enabled:            bool,
    fps:                FpsCounter,
    geometry:           SurfaceGeometry,
    device_pixel_ratio: f32,
}

impl DemoState {
    /// Fresh demo for a container of the given width, tracking enabled,
    /// cursor at [`INITIAL_POINTER`].
    pub fn new(container_width: f32, device_pixel_ratio: f32, now: Instant) -> Self {
        DemoState {
            raw:                INITIAL_POINTER,
            smoother:           ExpSmoother::new(INITIAL_POINTER),
            gesture:            ClickGesture::new(),
            clicks:             0,
            enabled:            true,
            fps:                FpsCounter::new(now),
            geometry:           SurfaceGeometry::from_container(container_width, device_pixel_ratio),
            device_pixel_ratio,
        }
    }

    // ── input ────────────────────────────────────────────────────────────────

    /// Apply one input event. Presses are gated on the enabled flag here,
    /// in the handler, so a disabled demo never counts clicks no matter
    /// what the render layer does.
    pub fn apply(&mut self, input: PointerInput, now: Instant) {
        match input {
            PointerInput::Moved(p) => self.raw = p,
            PointerInput::Pressed => {
                if self.enabled {
                    self.gesture.press(now);
                    self.clicks += 1;
                }
            }
            PointerInput::ToggleTracking => self.enabled = !self.enabled,
            PointerInput::Resized { container_width } => {
                self.geometry =
                    SurfaceGeometry::from_container(container_width, self.device_pixel_ratio);
            }
        }
    }

    /// Force the enabled flag, bypassing the toggle.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    // ── per-frame step ───────────────────────────────────────────────────────

    /// One animation frame: ease the cursor toward the raw sample, expire
    /// the gesture deadline, count the frame.
    pub fn tick(&mut self, now: Instant) {
        self.smoother.advance(self.raw);
        self.gesture.tick(now);
        self.fps.frame(now);
    }

    // ── readout ──────────────────────────────────────────────────────────────

    /// Latest raw pointer sample.
    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    /// Smoothed cursor position; this is what gets drawn.
    pub fn smoothed(&self) -> Vec2 {
        self.smoother.value()
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    /// Skeleton joint positions for the current smoothed cursor.
    pub fn hand_points(&self) -> [Vec2; hand_model::LANDMARK_COUNT] {
        hand_model::layout(self.smoothed(), self.geometry.logical_size())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    // ── smoothing ────────────────────────────────────────────────────────

    #[test]
    fn converges_to_held_target() {
        let target = Vec2::new(640.0, 220.0);
        let mut s = ExpSmoother::new(Vec2::ZERO);
        for _ in 0..200 {
            s.advance(target);
        }
        assert!(s.value().distance(target) < 1e-3);
    }

    #[test]
    fn geometric_convergence_rate() {
        // Each frame the remaining error shrinks by exactly (1 - alpha).
        let target = Vec2::new(100.0, 0.0);
        let mut s = ExpSmoother::new(Vec2::ZERO);
        let mut prev = s.value().distance(target);
        for _ in 0..20 {
            s.advance(target);
            let err = s.value().distance(target);
            assert!((err / prev - (1.0 - SMOOTHING_ALPHA)).abs() < 1e-5);
            prev = err;
        }
    }

    #[test]
    fn stationary_at_target() {
        let target = Vec2::new(12.0, 34.0);
        let mut s = ExpSmoother::new(target);
        assert_eq!(s.advance(target), target);
    }

    #[test]
    fn alpha_one_snaps() {
        let mut s = ExpSmoother::with_alpha(Vec2::ZERO, 1.0);
        assert_eq!(s.advance(Vec2::new(5.0, 7.0)), Vec2::new(5.0, 7.0));
    }

    #[test]
    fn alpha_is_clamped() {
        assert!(ExpSmoother::with_alpha(Vec2::ZERO, 7.5).alpha() <= 1.0);
        assert!(ExpSmoother::with_alpha(Vec2::ZERO, -1.0).alpha() > 0.0);
    }

    // ── surface geometry ─────────────────────────────────────────────────

    #[test]
    fn height_follows_width_ratio() {
        let g = SurfaceGeometry::from_container(800.0, 1.5);
        assert_eq!(g.logical_size(), Vec2::new(800.0, 448.0));
        assert_eq!(g.physical_size(), (1200, 672));
    }

    #[test]
    fn pixel_ratio_is_capped() {
        let g = SurfaceGeometry::from_container(400.0, 3.0);
        assert_eq!(g.scale(), MAX_PIXEL_RATIO);
        assert_eq!(g.physical_size(), (800, 448));
    }

    #[test]
    fn zero_ratio_falls_back_to_one() {
        let g = SurfaceGeometry::from_container(400.0, 0.0);
        assert_eq!(g.scale(), 1.0);
    }

    #[test]
    fn height_is_capped_on_wide_containers() {
        let g = SurfaceGeometry::from_container(1000.0, 1.0);
        assert_eq!(g.logical_size().y, MAX_LOGICAL_HEIGHT);
    }

    #[test]
    fn zero_width_is_degenerate() {
        let g = SurfaceGeometry::from_container(0.0, 1.0);
        assert!(g.is_degenerate());
        assert_eq!(g.physical_size(), (0, 0));
    }

    #[test]
    fn negative_width_is_clamped() {
        let g = SurfaceGeometry::from_container(-50.0, 1.0);
        assert!(g.is_degenerate());
        assert_eq!(g.logical_size().x, 0.0);
    }

    // ── click gesture ────────────────────────────────────────────────────

    #[test]
    fn press_enters_click_immediately() {
        let base = Instant::now();
        let mut g = ClickGesture::new();
        assert_eq!(g.phase(), GesturePhase::Move);
        g.press(base);
        assert_eq!(g.phase(), GesturePhase::Click);
    }

    #[test]
    fn click_held_until_deadline() {
        let base = Instant::now();
        let mut g = ClickGesture::new();
        g.press(base);

        g.tick(base + ms(299));
        assert_eq!(g.phase(), GesturePhase::Click);

        g.tick(base + ms(300));
        assert_eq!(g.phase(), GesturePhase::Move);
    }

    #[test]
    fn repeat_press_rearms_deadline() {
        // A second press 200 ms in pushes the reversion to 500 ms total.
        let base = Instant::now();
        let mut g = ClickGesture::new();
        g.press(base);
        g.tick(base + ms(150));
        g.press(base + ms(200));

        g.tick(base + ms(350));
        assert_eq!(g.phase(), GesturePhase::Click);

        g.tick(base + ms(520));
        assert_eq!(g.phase(), GesturePhase::Move);
    }

    #[test]
    fn tick_is_noop_while_idle() {
        let base = Instant::now();
        let mut g = ClickGesture::new();
        g.tick(base + ms(1000));
        assert_eq!(g.phase(), GesturePhase::Move);
    }

    #[test]
    fn reversion_fires_once() {
        let base = Instant::now();
        let mut g = ClickGesture::new();
        g.press(base);
        g.tick(base + ms(400));
        g.press(base + ms(450));
        g.tick(base + ms(460));
        assert_eq!(g.phase(), GesturePhase::Click);
    }

    // ── clicks and gating ────────────────────────────────────────────────

    #[test]
    fn every_press_counts_once() {
        let now = Instant::now();
        let mut demo = DemoState::new(800.0, 1.0, now);
        for _ in 0..7 {
            demo.apply(PointerInput::Pressed, now);
        }
        assert_eq!(demo.clicks(), 7);
    }

    #[test]
    fn presses_ignored_while_disabled() {
        let now = Instant::now();
        let mut demo = DemoState::new(800.0, 1.0, now);
        demo.apply(PointerInput::ToggleTracking, now);
        assert!(!demo.enabled());

        demo.apply(PointerInput::Pressed, now);
        assert_eq!(demo.clicks(), 0);
        assert_eq!(demo.gesture_phase(), GesturePhase::Move);

        demo.apply(PointerInput::ToggleTracking, now);
        demo.apply(PointerInput::Pressed, now);
        assert_eq!(demo.clicks(), 1);
    }

    #[test]
    fn gesture_reverts_after_hold() {
        let base = Instant::now();
        let mut demo = DemoState::new(800.0, 1.0, base);
        demo.apply(PointerInput::Pressed, base);
        assert_eq!(demo.gesture_phase(), GesturePhase::Click);

        demo.tick(base + ms(100));
        assert_eq!(demo.gesture_phase(), GesturePhase::Click);

        demo.tick(base + ms(400));
        assert_eq!(demo.gesture_phase(), GesturePhase::Move);
    }

    #[test]
    fn set_enabled_overrides_toggle() {
        let now = Instant::now();
        let mut demo = DemoState::new(800.0, 1.0, now);
        demo.set_enabled(false);
        demo.apply(PointerInput::Pressed, now);
        assert_eq!(demo.clicks(), 0);
    }

    #[test]
    fn pending_reversion_survives_disable() {
        // Pausing mid-CLICK does not freeze the deadline; the phase still
        // falls back to MOVE on schedule.
        let base = Instant::now();
        let mut demo = DemoState::new(800.0, 1.0, base);
        demo.apply(PointerInput::Pressed, base);
        demo.apply(PointerInput::ToggleTracking, base + ms(50));
        assert_eq!(demo.gesture_phase(), GesturePhase::Click);

        demo.tick(base + ms(400));
        assert_eq!(demo.gesture_phase(), GesturePhase::Move);
    }

    // ── motion ───────────────────────────────────────────────────────────

    #[test]
    fn later_move_overwrites_earlier() {
        let now = Instant::now();
        let mut demo = DemoState::new(800.0, 1.0, now);
        demo.apply(PointerInput::Moved(Vec2::new(10.0, 10.0)), now);
        demo.apply(PointerInput::Moved(Vec2::new(600.0, 300.0)), now);
        assert_eq!(demo.raw(), Vec2::new(600.0, 300.0));
    }

    #[test]
    fn cursor_eases_toward_sample() {
        let base = Instant::now();
        let mut demo = DemoState::new(800.0, 1.0, base);
        let target = Vec2::new(700.0, 100.0);
        demo.apply(PointerInput::Moved(target), base);

        demo.tick(base + ms(16));
        let first_hop = demo.smoothed().distance(INITIAL_POINTER);
        assert!(first_hop > 0.0);
        assert!(demo.smoothed().distance(target) < INITIAL_POINTER.distance(target));

        for i in 2..200 {
            demo.tick(base + ms(16 * i));
        }
        assert!(demo.smoothed().distance(target) < 1e-2);
    }

    #[test]
    fn starts_at_rest_position() {
        let now = Instant::now();
        let demo = DemoState::new(800.0, 1.0, now);
        assert_eq!(demo.raw(), INITIAL_POINTER);
        assert_eq!(demo.smoothed(), INITIAL_POINTER);
        assert!(demo.enabled());
        assert_eq!(demo.clicks(), 0);
        assert_eq!(demo.fps(), 0);
    }

    // ── geometry ─────────────────────────────────────────────────────────

    #[test]
    fn resize_recomputes_geometry_with_same_ratio() {
        let now = Instant::now();
        let mut demo = DemoState::new(800.0, 2.0, now);
        demo.apply(PointerInput::Resized { container_width: 500.0 }, now);
        assert_eq!(demo.geometry().logical_size(), Vec2::new(500.0, 280.0));
        assert_eq!(demo.geometry().physical_size(), (1000, 560));
    }

    #[test]
    fn hand_points_track_smoothed_cursor() {
        let base = Instant::now();
        let mut demo = DemoState::new(800.0, 1.0, base);
        demo.apply(PointerInput::Moved(Vec2::new(640.0, 200.0)), base);
        demo.tick(base + ms(16));

        let expected = hand_model::layout(demo.smoothed(), demo.geometry().logical_size());
        assert_eq!(demo.hand_points(), expected);
    }

    // ── isolation ────────────────────────────────────────────────────────

    #[test]
    fn instances_do_not_share_state() {
        let now = Instant::now();
        let mut a = DemoState::new(800.0, 1.0, now);
        let mut b = DemoState::new(400.0, 1.0, now);

        a.apply(PointerInput::Pressed, now);
        a.apply(PointerInput::ToggleTracking, now);
        b.apply(PointerInput::Moved(Vec2::new(50.0, 50.0)), now);

        assert_eq!(a.clicks(), 1);
        assert_eq!(b.clicks(), 0);
        assert!(!a.enabled());
        assert!(b.enabled());
        assert_eq!(b.raw(), Vec2::new(50.0, 50.0));
        assert_eq!(a.raw(), INITIAL_POINTER);
    }

    // ── fps ──────────────────────────────────────────────────────────────

    #[test]
    fn fps_snapshots_after_one_second() {
        let base = Instant::now();
        let mut fps = FpsCounter::new(base);
        for i in 1..=10 {
            fps.frame(base + ms(100 * i));
        }
        assert_eq!(fps.fps(), 10);
    }

    #[test]
    fn fps_is_zero_before_first_window_closes() {
        let base = Instant::now();
        let mut fps = FpsCounter::new(base);
        for i in 1..=5 {
            fps.frame(base + ms(100 * i));
        }
        assert_eq!(fps.fps(), 0);
    }
}
