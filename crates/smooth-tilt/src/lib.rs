//! Input-driven tilt effect for a single object.
//!
//! Maps a pointer position or a pair of analog axes onto a bounded
//! pitch/yaw offset around a captured center rotation, and smooths the
//! committed orientation toward it. The crate is engine-independent: the
//! host supplies input samples, a world-to-screen projection, and the
//! per-tick elapsed time, and commits the smoothed orientation itself.
//!
//! # Design principles
//!
//! - **Explicit lifecycle**: construction validates the configuration and
//!   resolves the operating mode once; each tick is a plain method call
//! - **No hidden collaborators**: the camera is a closure, the clock is a
//!   `dt` argument, the orientation sink is the caller
//! - **Never halts the host**: mode conflicts are normalized with a
//!   warning, bad input degrades to "no input"
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use smooth_tilt::{InputSample, ScreenRect, TiltConfig, TiltController, step_orientation};
//!
//! let mut controller =
//!     TiltController::new(TiltConfig::default(), Vec3::ZERO, false).unwrap();
//! let screen = ScreenRect::screen(1280.0, 720.0);
//!
//! // One tick: pointer at the screen center leaves the target at the
//! // center rotation.
//! let target = controller.target(InputSample::pointer(640.0, 360.0), screen);
//! let committed = step_orientation(glam::Quat::IDENTITY, target, 1.0, 1.0 / 60.0);
//! assert!(committed.is_finite());
//! ```

pub mod bounds;
pub mod config;
mod controller;
mod error;
mod input;
pub mod mapping;
mod smoothing;

pub use bounds::{ScreenRect, aabb_corners, screen_rect_of};
pub use config::{Domain, Input, ResolvedMode, TiltConfig};
pub use controller::TiltController;
pub use error::{TiltError, TiltResult};
pub use input::InputSample;
pub use smoothing::step_orientation;
