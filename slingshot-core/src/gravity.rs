//! Single-body inverse-square gravity and the per-tick integration step.
//!
//! ## Integration
//!
//! One call to [`step`] advances a projectile by one fixed time unit with
//! semi-implicit Euler: the gravitational acceleration is added to the
//! velocity first, then the *updated* velocity is added to the position.
//!
//! ```text
//! d  = |body − p|
//! F  = G · m_p · m_b / d²
//! a  = F / m_p                      (= G · m_b / d², independent of m_p)
//! θ  = atan2(body.y − p.y, body.x − p.x)
//! v += (a·cos θ, a·sin θ)
//! p += v
//! ```
//!
//! ## Zero distance
//!
//! A projectile sitting exactly on the body centre has no defined direction
//! and an infinite acceleration.  It is treated as an instantaneous
//! collision: no acceleration is applied that tick and [`removal_reason`]
//! reports [`Removal::Collided`] because `0 ≤ radius` always holds.

use bevy_math::Vec2;

use crate::body::{Body, Projectile};

/// Scene extent.  A projectile is on screen while it lies in
/// `[0, width] × [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    pub width: f32,
    pub height: f32,
}

impl SceneBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Why a projectile left the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Removal {
    /// Distance to the body centre fell to or below the body radius.
    Collided,
    /// Position left the scene rectangle.
    OffScreen,
}

/// Advance `projectile` by one time unit under `body`'s gravity.
///
/// Appends the new position to the projectile's trail.
pub fn step(projectile: &mut Projectile, body: &Body, g: f32) {
    let to_body = body.position() - projectile.position;
    let distance = to_body.length();

    if distance > 0.0 {
        let force = g * projectile.mass() * body.mass() / (distance * distance);
        let acceleration = force / projectile.mass();
        let angle = to_body.y.atan2(to_body.x);
        projectile.velocity += Vec2::new(acceleration * angle.cos(), acceleration * angle.sin());
    }

    projectile.position += projectile.velocity;
    projectile.record_position();
}

/// Removal test on the projectile's current position.
///
/// Collision is checked before the scene bounds, so a projectile that is both
/// inside the body and off screen counts as collided.
pub fn removal_reason(projectile: &Projectile, body: &Body, bounds: SceneBounds) -> Option<Removal> {
    if projectile.position.distance(body.position()) <= body.radius() {
        Some(Removal::Collided)
    } else if !bounds.contains(projectile.position) {
        Some(Removal::OffScreen)
    } else {
        None
    }
}

pub fn is_removable(projectile: &Projectile, body: &Body, bounds: SceneBounds) -> bool {
    removal_reason(projectile, body, bounds).is_some()
}

/// One simulation tick for one projectile: integrate, then test the
/// post-step position.
pub fn advance(
    projectile: &mut Projectile,
    body: &Body,
    g: f32,
    bounds: SceneBounds,
) -> Option<Removal> {
    step(projectile, body, g);
    removal_reason(projectile, body, bounds)
}

/// `sqrt(2·G·M / d)` at the projectile's current distance.
///
/// Positive infinity when the projectile sits on the body centre.
pub fn escape_velocity(projectile: &Projectile, body: &Body, g: f32) -> f32 {
    let distance = projectile.position.distance(body.position());
    (2.0 * g * body.mass() / distance).sqrt()
}

/// Initial velocity for a slingshot launch: the drag vector from `anchor` to
/// `pointer`, divided by `velocity_scale`.
pub fn launch_velocity(anchor: Vec2, pointer: Vec2, velocity_scale: f32) -> Vec2 {
    (pointer - anchor) / velocity_scale
}
