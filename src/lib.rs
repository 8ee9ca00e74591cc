//! Fixed-tick top-down character controller.
//!
//! Each tick the [`controller::PlayerController`] turns raw axis input into a
//! normalized ground displacement, faces the body toward the point where the
//! camera's aim ray meets the floor layer, and reports whether the character
//! is walking. Results come back as [`controller::TickCommands`] for a physics
//! integrator and an animator to apply.

pub mod config;
pub mod error;
pub mod logging;

// MVC-style split: model holds world data, controller the per-tick logic
pub mod model;
pub mod controller;

pub use config::ControllerConfig;
pub use controller::{PlayerController, TickCommands, TickContext};
pub use error::{ConfigError, LayerError};
