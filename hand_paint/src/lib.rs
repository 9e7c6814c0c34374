//! # hand_paint
//!
//! Software rasterizer for the Virtual Mouse tracking demo. Takes a
//! [`pointer_sim::DemoState`] snapshot and paints the full scene into an
//! ARGB pixel buffer:
//!
//! | Layer      | Ink                                              |
//! |------------|--------------------------------------------------|
//! | grid       | indigo hairlines every 40 logical units          |
//! | skeleton   | cyan bones, indigo joints, cyan fingertip halos  |
//! | cursor     | indigo disc (MOVE) or enlarged cyan disc (CLICK) |
//! | crosshair  | dashed hairlines through the cursor              |
//! | HUD        | FPS / gesture / click / status readout           |
//!
//! The buffer is plain `&[u32]` pixels, so it can go straight to a
//! windowed framebuffer or to a PPM snapshot on disk.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::time::Instant;
//!
//! use glam::Vec2;
//! use hand_paint::{paint_frame, Raster};
//! use pointer_sim::{DemoState, PointerInput};
//!
//! let now = Instant::now();
//! let mut demo = DemoState::new(800.0, 1.0, now);
//! demo.apply(PointerInput::Moved(Vec2::new(420.0, 160.0)), now);
//! demo.tick(now);
//!
//! let mut raster = Raster::new(demo.geometry());
//! paint_frame(&demo, &mut raster);
//! raster.write_ppm("frame.ppm").unwrap();
//! ```

use std::io::Write;

use glam::Vec2;

use hand_model::{Landmark, CONNECTIONS, LANDMARK_COUNT};
use pointer_sim::{DemoState, GesturePhase, SurfaceGeometry};

// ════════════════════════════════════════════════════════════════════════════
// Palette — colors are 0xAARRGGBB; alpha below 0xFF blends over the canvas
// ════════════════════════════════════════════════════════════════════════════

pub const BACKGROUND: u32 = 0xFF080808;
pub const GRID_LINE:  u32 = 0x0D6366F1;  // indigo at 5%
pub const BONE_LINE:  u32 = 0x4D22D3EE;  // cyan at 30%
pub const JOINT_FILL: u32 = 0xCC6366F1;  // indigo at 80%
pub const TIP_FILL:   u32 = 0xFF22D3EE;
pub const TIP_HALO:   u32 = 0x4D22D3EE;
pub const MOVE_FILL:  u32 = 0x4D6366F1;
pub const MOVE_RING:  u32 = 0xFF6366F1;
pub const CLICK_FILL: u32 = 0x6622D3EE;  // cyan at 40%
pub const CLICK_RING: u32 = 0xFF22D3EE;
pub const CROSSHAIR:  u32 = 0x266366F1;  // indigo at 15%
pub const COORD_TEXT: u32 = 0xCC888888;
pub const HUD_TEXT:   u32 = 0x99888888;  // gray at 60%

// ════════════════════════════════════════════════════════════════════════════
// Scene constants (logical units)
// ════════════════════════════════════════════════════════════════════════════

/// Grid line spacing.
pub const GRID_STEP: f32 = 40.0;

const BONE_WIDTH:   f32 = 1.5;
const JOINT_RADIUS: f32 = 3.0;
const TIP_RADIUS:   f32 = 5.0;
const HALO_EXTRA:   f32 = 4.0;
const MOVE_RADIUS:  f32 = 8.0;
const CLICK_RADIUS: f32 = 12.0;
const RING_WIDTH:   f32 = 2.0;
const DASH:         f32 = 4.0;
const LABEL_DX:     f32 = 15.0;
const LABEL_DY:     f32 = -10.0;
const HUD_X:        f32 = 12.0;
const HUD_TOP:      f32 = 24.0;
const HUD_STEP:     f32 = 16.0;

// ════════════════════════════════════════════════════════════════════════════
// Raster — scaled ARGB framebuffer
// ════════════════════════════════════════════════════════════════════════════

/// ARGB raster with logical-unit drawing.
///
/// The pixel buffer is allocated at the surface's *physical* size; every
/// drawing call takes *logical* coordinates and multiplies by the surface
/// scale, the same arrangement as a 2D context scaled once by the device
/// pixel ratio. An alpha byte below `0xFF` is blended over the existing
/// pixel, and each primitive touches every pixel it covers exactly once,
/// so translucent ink never double-darkens inside a single shape.
pub struct Raster {
    width:  usize,
    height: usize,
    scale:  f32,
    buf:    Vec<u32>,
}

impl Raster {
    /// Raster sized to the surface's backing store, filled with black.
    pub fn new(geometry: SurfaceGeometry) -> Self {
        let (width, height) = geometry.physical_size();
        Raster {
            width,
            height,
            scale: geometry.scale(),
            buf:   vec![0xFF000000; width * height],
        }
    }

    /// Reallocate if the surface changed size or scale; otherwise keep the
    /// current buffer.
    pub fn fit(&mut self, geometry: SurfaceGeometry) {
        let (width, height) = geometry.physical_size();
        if width != self.width || height != self.height || geometry.scale() != self.scale {
            self.width  = width;
            self.height = height;
            self.scale  = geometry.scale();
            self.buf    = vec![0xFF000000; width * height];
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// The raw physical pixel buffer, row-major.
    pub fn buffer(&self) -> &[u32] {
        &self.buf
    }

    /// One physical pixel; out-of-range reads return opaque black.
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buf[y * self.width + x]
        } else {
            0xFF000000
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.buf.fill(color | 0xFF000000);
    }

    // ── logical-space primitives ─────────────────────────────────────────────

    /// Axis-aligned rectangle. Spans are half-open after scaling, so
    /// adjacent rectangles tile without overlap.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: u32) {
        let (x0, x1) = self.span(x, x + w);
        let (y0, y1) = self.span(y, y + h);
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend_px(px, py, color);
            }
        }
    }

    /// Line segment of the given logical stroke width, centered on the
    /// path. Thickness comes from parallel one-pixel passes offset along
    /// the minor axis, none of which revisit a pixel.
    pub fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: u32) {
        let (x0, y0) = (self.px(a.x), self.px(a.y));
        let (x1, y1) = (self.px(b.x), self.px(b.y));
        let t = ((width * self.scale).round() as i32).max(1);
        let x_major = (x1 - x0).abs() >= (y1 - y0).abs();
        for k in 0..t {
            let off = k - t / 2;
            if x_major {
                self.thin_line(x0, y0 + off, x1, y1 + off, color);
            } else {
                self.thin_line(x0 + off, y0, x1 + off, y1, color);
            }
        }
    }

    /// Vertical dashed line from the top edge down to `len`, one logical
    /// unit wide, `dash` on / `dash` off. Non-positive `dash` draws solid.
    pub fn dashed_vline(&mut self, x: f32, len: f32, dash: f32, color: u32) {
        if dash <= 0.0 {
            self.fill_rect(x, 0.0, 1.0, len, color);
            return;
        }
        let mut y = 0.0;
        let mut ink = true;
        while y < len {
            let end = (y + dash).min(len);
            if ink {
                self.fill_rect(x, y, 1.0, end - y, color);
            }
            y = end;
            ink = !ink;
        }
    }

    /// Horizontal counterpart of [`dashed_vline`](Raster::dashed_vline).
    pub fn dashed_hline(&mut self, y: f32, len: f32, dash: f32, color: u32) {
        if dash <= 0.0 {
            self.fill_rect(0.0, y, len, 1.0, color);
            return;
        }
        let mut x = 0.0;
        let mut ink = true;
        while x < len {
            let end = (x + dash).min(len);
            if ink {
                self.fill_rect(x, y, end - x, 1.0, color);
            }
            x = end;
            ink = !ink;
        }
    }

    /// Filled disc, scanline by scanline.
    pub fn circle_fill(&mut self, center: Vec2, radius: f32, color: u32) {
        let (cx, cy) = (self.px(center.x), self.px(center.y));
        let r = (radius * self.scale).round() as i32;
        for dy in -r..=r {
            let half = (((r * r - dy * dy) as f32).sqrt()).round() as i32;
            for dx in -half..=half {
                self.blend_px(cx + dx, cy + dy, color);
            }
        }
    }

    /// Circle outline of the given logical stroke width, centered on the
    /// radius.
    pub fn circle_stroke(&mut self, center: Vec2, radius: f32, width: f32, color: u32) {
        let (cx, cy) = (self.px(center.x), self.px(center.y));
        let r      = radius * self.scale;
        let half_w = (width * self.scale).max(1.0) / 2.0;
        let outer  = r + half_w;
        let inner  = (r - half_w).max(0.0);
        let (o2, i2) = (outer * outer, inner * inner);
        let bound = outer.ceil() as i32;
        for dy in -bound..=bound {
            for dx in -bound..=bound {
                let d2 = (dx * dx + dy * dy) as f32;
                if d2 >= i2 && d2 <= o2 {
                    self.blend_px(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Bitmap text. `(x, y)` is the top-left of the first glyph; each
    /// glyph cell is 3×5 logical units plus a one-unit gap.
    pub fn text(&mut self, text: &str, x: f32, y: f32, color: u32) {
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) != 0 {
                        self.fill_rect(cx + col as f32, y + row as f32, 1.0, 1.0, color);
                    }
                }
            }
            cx += 4.0; // 3 wide + 1 gap
        }
    }

    // ── snapshot ─────────────────────────────────────────────────────────────

    /// Serialise to a binary PPM (P6) image.
    pub fn to_ppm_bytes(&self) -> Vec<u8> {
        let mut out = format!("P6\n{} {}\n255\n", self.width, self.height).into_bytes();
        out.reserve(self.buf.len() * 3);
        for &px in &self.buf {
            out.push(((px >> 16) & 0xFF) as u8);
            out.push(((px >>  8) & 0xFF) as u8);
            out.push(( px        & 0xFF) as u8);
        }
        out
    }

    /// Write the frame to `path` as a PPM image.
    pub fn write_ppm(&self, path: &str) -> std::io::Result<()> {
        let mut f = std::fs::File::create(path)?;
        f.write_all(&self.to_ppm_bytes())
    }

    // ── physical helpers ─────────────────────────────────────────────────────

    fn px(&self, v: f32) -> i32 {
        (v * self.scale).round() as i32
    }

    fn span(&self, v0: f32, v1: f32) -> (i32, i32) {
        (self.px(v0), self.px(v1))
    }

    fn thin_line(&mut self, mut x: i32, mut y: i32, x1: i32, y1: i32, color: u32) {
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.blend_px(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; x += sx; }
            if e2 <= dx { err += dx; y += sy; }
        }
    }

    fn blend_px(&mut self, x: i32, y: i32, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let i = y * self.width + x;
        self.buf[i] = if color >> 24 == 0xFF {
            color
        } else {
            over(self.buf[i], color)
        };
    }
}

/// Source-over blend of `src` (with alpha) onto an opaque `dst`.
fn over(dst: u32, src: u32) -> u32 {
    let t = ((src >> 24) & 0xFF) as f32 / 255.0;
    let lerp = |cd: u32, cs: u32| (cd as f32 * (1.0 - t) + cs as f32 * t) as u32;
    let dr = (dst >> 16) & 0xFF; let sr = (src >> 16) & 0xFF;
    let dg = (dst >>  8) & 0xFF; let sg = (src >>  8) & 0xFF;
    let db =  dst        & 0xFF; let sb =  src        & 0xFF;
    0xFF000000 | (lerp(dr, sr) << 16) | (lerp(dg, sg) << 8) | lerp(db, sb)
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' | 'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' | 'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' | 'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' | 'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' | 'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' | 'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' | 'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' | 'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' | 'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' | 'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'k' | 'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' | 'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' | 'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' | 'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'o' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'p' | 'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'q' | 'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'r' | 'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' | 'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' | 'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' | 'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' | 'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'w' | 'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' | 'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' | 'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'z' | 'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '(' => [0b001, 0b010, 0b010, 0b010, 0b001],
        ')' => [0b100, 0b010, 0b010, 0b010, 0b100],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '+' => [0b000, 0b010, 0b111, 0b010, 0b000],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _   => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Frame painter
// ════════════════════════════════════════════════════════════════════════════

/// Paint one frame of `demo`. Resizes the raster to the demo's surface
/// first, so the caller can hold one raster across resizes.
///
/// Draw order:
///
/// 1. background and the 40-unit tracking grid (always)
/// 2. while tracking is enabled: bone segments, joints, fingertips with
///    halo rings, the cursor disc, the dashed crosshair, the coordinate
///    label
/// 3. the four-line HUD (always, so the PAUSED readout stays visible)
pub fn paint_frame(demo: &DemoState, raster: &mut Raster) {
    raster.fit(demo.geometry());
    raster.clear(BACKGROUND);

    let size = demo.geometry().logical_size();
    draw_grid(raster, size);

    if demo.enabled() {
        draw_skeleton(raster, &demo.hand_points());
        draw_cursor(raster, demo, size);
    }

    draw_hud(raster, demo);
}

/// The four HUD readout lines, top to bottom.
pub fn hud_lines(demo: &DemoState) -> [String; 4] {
    [
        format!("FPS: {}", demo.fps()),
        format!("Gesture: {}", demo.gesture_phase().label()),
        format!("Clicks: {}", demo.clicks()),
        format!("Status: {}", if demo.enabled() { "TRACKING" } else { "PAUSED" }),
    ]
}

/// Cursor coordinate label, rounded to whole logical units.
pub fn coord_label(p: Vec2) -> String {
    format!("({}, {})", p.x.round() as i64, p.y.round() as i64)
}

// ── layers ───────────────────────────────────────────────────────────────────

fn draw_grid(raster: &mut Raster, size: Vec2) {
    let mut x = 0.0;
    while x < size.x {
        raster.fill_rect(x, 0.0, 1.0, size.y, GRID_LINE);
        x += GRID_STEP;
    }
    let mut y = 0.0;
    while y < size.y {
        raster.fill_rect(0.0, y, size.x, 1.0, GRID_LINE);
        y += GRID_STEP;
    }
}

fn draw_skeleton(raster: &mut Raster, points: &[Vec2; LANDMARK_COUNT]) {
    for (a, b) in CONNECTIONS {
        raster.line(points[a.index()], points[b.index()], BONE_WIDTH, BONE_LINE);
    }
    for lm in Landmark::all() {
        let p = points[lm.index()];
        if lm.is_fingertip() {
            raster.circle_fill(p, TIP_RADIUS, TIP_FILL);
            raster.circle_stroke(p, TIP_RADIUS + HALO_EXTRA, 1.0, TIP_HALO);
        } else {
            raster.circle_fill(p, JOINT_RADIUS, JOINT_FILL);
        }
    }
}

fn draw_cursor(raster: &mut Raster, demo: &DemoState, size: Vec2) {
    let c = demo.smoothed();
    let (radius, fill, ring) = match demo.gesture_phase() {
        GesturePhase::Click => (CLICK_RADIUS, CLICK_FILL, CLICK_RING),
        GesturePhase::Move  => (MOVE_RADIUS, MOVE_FILL, MOVE_RING),
    };
    raster.circle_fill(c, radius, fill);
    raster.circle_stroke(c, radius, RING_WIDTH, ring);

    raster.dashed_vline(c.x, size.y, DASH, CROSSHAIR);
    raster.dashed_hline(c.y, size.x, DASH, CROSSHAIR);

    raster.text(&coord_label(c), c.x + LABEL_DX, c.y + LABEL_DY, COORD_TEXT);
}

fn draw_hud(raster: &mut Raster, demo: &DemoState) {
    for (i, line) in hud_lines(demo).iter().enumerate() {
        raster.text(line, HUD_X, HUD_TOP + HUD_STEP * i as f32, HUD_TEXT);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
