//! Gravity simulation core: a fixed massive body, point-mass projectiles, and
//! the per-tick semi-implicit Euler step that moves them.
//!
//! Everything here is plain data and pure functions over [`bevy_math::Vec2`].  No
//! windowing or rendering crate is linked, so the whole module set can be
//! exercised from headless tests.
//!
//! All positions are in *scene coordinates*: origin at the top-left corner,
//! x to the right, y pointing down.

pub mod body;
pub mod error;
pub mod gravity;
pub mod launch;

pub use body::{Body, Projectile, Trail};
pub use error::BodyError;
pub use gravity::{
    advance, escape_velocity, is_removable, launch_velocity, removal_reason, step, Removal,
    SceneBounds,
};
pub use launch::{Launch, LaunchGesture};

pub use bevy_math::Vec2;
