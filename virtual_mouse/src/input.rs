//! Window input translation.
//!
//! The window is polled once per frame and raw minifb state is turned into
//! a batch of [`PointerInput`] events. Only transitions are forwarded:
//! holding the mouse button is one press, holding Space is one toggle. The
//! demo state machine never sees minifb types.

use glam::Vec2;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window};
use pointer_sim::PointerInput;

// ════════════════════════════════════════════════════════════════════════════
// InputPoller
// ════════════════════════════════════════════════════════════════════════════

/// Per-frame window poller with the edge-detection state for the mouse
/// button, the pointer position, and the window width.
pub struct InputPoller {
    left_down:  bool,
    last_pos:   Option<(f32, f32)>,
    last_width: usize,
}

impl InputPoller {
    pub fn new(window: &Window) -> Self {
        InputPoller {
            left_down:  false,
            last_pos:   None,
            last_width: window.get_size().0,
        }
    }

    /// Poll the window once, appending this frame's events.
    /// Returns false when the user asked to quit (Q or Escape).
    pub fn poll(&mut self, window: &Window, events: &mut Vec<PointerInput>) -> bool {
        let one_shot = |k: Key| window.is_key_pressed(k, KeyRepeat::No);

        if one_shot(Key::Q) || one_shot(Key::Escape) {
            return false;
        }
        if one_shot(Key::Space) {
            events.push(PointerInput::ToggleTracking);
        }

        // Window width drives the surface, like a container resize.
        let width = window.get_size().0;
        if width != self.last_width {
            self.last_width = width;
            events.push(PointerInput::Resized { container_width: width as f32 });
        }

        // Window-local pointer position in logical units.
        if let Some(pos) = window.get_mouse_pos(MouseMode::Clamp) {
            if self.last_pos != Some(pos) {
                self.last_pos = Some(pos);
                events.push(PointerInput::Moved(Vec2::new(pos.0, pos.1)));
            }
        }

        // Press edge only, so a held button counts one click.
        let down = window.get_mouse_down(MouseButton::Left);
        if down && !self.left_down {
            events.push(PointerInput::Pressed);
        }
        self.left_down = down;

        true
    }
}

/// The key legend shown at launch.
pub const KEY_LEGEND: &str = "Move mouse=track  Click=gesture  Space=pause/resume  Q/Esc=quit";
