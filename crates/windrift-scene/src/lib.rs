//! Animation core for the windrift screensaver.
//!
//! This crate owns the moving parts: the position sampler with its
//! center-bias cadence, the logo sprites and their in-place recycling, and
//! the scene that advances them on a throttled frame clock and composites
//! each frame.

mod logo;
mod sampler;
mod scene;

pub use logo::Logo;
pub use sampler::Sampler;
pub use scene::{FRAME_INTERVAL_MS, Scene};
