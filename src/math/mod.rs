//! Math utilities module
//!
//! Provides convenient re-exports from glam and the shared 2D angle helpers.

mod angle;

pub use angle::{signed_angle, EPS};

// Re-export commonly used glam types
pub use glam::Vec2;
