//! # virtual_mouse
//!
//! Interactive showcase for the Virtual Mouse gesture-control pipeline:
//! a windowed demo where your real mouse stands in for the webcam feed,
//! and the app renders the hand skeleton, smoothed cursor and gesture HUD
//! exactly as the production tracker would.
//!
//! ## What you see
//!
//! A 21-landmark hand skeleton glides over a grid, anchored near the
//! cursor. The cursor itself trails the mouse with exponential smoothing,
//! a click flashes the CLICK gesture ring for 300 ms, and the HUD reports
//! live FPS, gesture, click count and tracking status.
//!
//! ## Controls
//!
//! | Input | Action |
//! |---|---|
//! | Move mouse | Drive the tracked pointer |
//! | Left click | Fire a click gesture (counts while tracking) |
//! | `Space` | Pause / resume tracking |
//! | Resize window | Reflow the surface (height follows width) |
//! | `Q` / `Escape` | Quit |
//!
//! ## Crate layering
//!
//! | Crate | Role |
//! |---|---|
//! | `hand_model` | Landmark catalogue and skeleton layout |
//! | `pointer_sim` | Smoothing, gesture and demo state machine |
//! | `hand_paint` | Software raster and scene painter |
//! | `virtual_mouse` | Window host, input polling, product copy |

pub mod about;
pub mod input;
pub mod app;
