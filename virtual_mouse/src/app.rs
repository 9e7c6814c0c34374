//! Demo lifecycle and the windowed run loop.
//!
//! [`DemoLoop`] owns one demo instance end to end: the state machine and
//! the raster it paints into. It has an explicit start/stop lifecycle and
//! a synchronous [`frame`](DemoLoop::frame) step, so tests (and any other
//! host) can drive it with synthetic events and never touch a window.
//! [`run`] is the interactive host: it opens a minifb window, polls input,
//! and feeds the loop at ~60 fps.

use std::time::{Duration, Instant};

use minifb::{Window, WindowOptions};

use hand_paint::{paint_frame, Raster};
use pointer_sim::{DemoState, PointerInput};

use crate::input::InputPoller;

// ════════════════════════════════════════════════════════════════════════════
// DemoConfig
// ════════════════════════════════════════════════════════════════════════════

/// Launch configuration for one demo instance.
pub struct DemoConfig {
    /// Logical container width; the surface height follows from it.
    pub container_width:    f32,
    /// Display density. Capped to 2 by the surface, 0 falls back to 1.
    pub device_pixel_ratio: f32,
    /// Whether tracking starts enabled.
    pub start_enabled:      bool,
    pub title:              String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            container_width:    800.0,
            device_pixel_ratio: 1.0,
            start_enabled:      true,
            title:              "Virtual Mouse — Tracking Demo".to_string(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DemoLoop
// ════════════════════════════════════════════════════════════════════════════

/// One demo instance with an explicit lifecycle.
///
/// Created stopped; [`start`](DemoLoop::start) arms it, after which each
/// [`frame`](DemoLoop::frame) call applies that frame's input batch,
/// advances the state one tick and repaints. While stopped, `frame` does
/// nothing, so a torn-down demo can never advance or repaint.
pub struct DemoLoop {
    state:   DemoState,
    raster:  Raster,
    running: bool,
}

impl DemoLoop {
    pub fn new(cfg: &DemoConfig, now: Instant) -> Self {
        let mut state = DemoState::new(cfg.container_width, cfg.device_pixel_ratio, now);
        state.set_enabled(cfg.start_enabled);
        DemoLoop {
            raster: Raster::new(state.geometry()),
            state,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one animation frame: apply the input batch, tick, repaint.
    /// No-op while stopped. A degenerate surface skips the repaint but the
    /// state still advances, so a later resize picks up where it left off.
    pub fn frame(&mut self, now: Instant, events: &[PointerInput]) {
        if !self.running {
            return;
        }
        for &event in events {
            self.state.apply(event, now);
        }
        self.state.tick(now);
        if self.state.geometry().is_degenerate() {
            return;
        }
        paint_frame(&self.state, &mut self.raster);
    }

    pub fn state(&self) -> &DemoState {
        &self.state
    }

    /// The most recently painted frame.
    pub fn raster(&self) -> &Raster {
        &self.raster
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the windowed host
// ════════════════════════════════════════════════════════════════════════════

/// Open a window sized to the configured surface and drive a [`DemoLoop`]
/// until the window closes or the user quits.
///
/// This is the entry point called from `main.rs`.
pub fn run(cfg: DemoConfig) -> Result<(), String> {
    let mut demo = DemoLoop::new(&cfg, Instant::now());

    let logical = demo.state().geometry().logical_size();
    let mut window = Window::new(
        &cfg.title,
        logical.x as usize,
        logical.y as usize,
        WindowOptions {
            resize: true,
            ..WindowOptions::default()
        },
    )
    .map_err(|e| e.to_string())?;

    window.limit_update_rate(Some(Duration::from_millis(16))); // ~60fps

    let mut poller = InputPoller::new(&window);
    let mut events: Vec<PointerInput> = Vec::new();

    demo.start();
    while window.is_open() {
        events.clear();
        if !poller.poll(&window, &mut events) {
            break;
        }

        demo.frame(Instant::now(), &events);

        let raster = demo.raster();
        if raster.buffer().is_empty() {
            window.update();
        } else {
            window
                .update_with_buffer(raster.buffer(), raster.width(), raster.height())
                .ok();
        }
    }
    demo.stop();

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
