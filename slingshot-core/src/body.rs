//! The massive body, the projectiles it attracts, and their trails.

use std::collections::VecDeque;

use bevy_math::Vec2;

use crate::error::{check_positive, BodyError};

/// Stationary massive body exerting gravity on every projectile.
///
/// Immutable once built; [`Body::new`] is the only way to obtain one, so mass
/// and radius are always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    position: Vec2,
    mass: f32,
    radius: f32,
}

impl Body {
    pub fn new(position: Vec2, mass: f32, radius: f32) -> Result<Self, BodyError> {
        if !check_positive(mass) {
            return Err(BodyError::NonPositiveMass { value: mass });
        }
        if !check_positive(radius) {
            return Err(BodyError::NonPositiveRadius { value: radius });
        }
        Ok(Self {
            position,
            mass,
            radius,
        })
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Collision threshold: a projectile at or inside this distance has hit the body.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

/// Chronological history of a projectile's positions.
///
/// Points are only ever appended at the back.  When a limit is set, the
/// oldest points are dropped from the front once it is exceeded; without one
/// the trail grows by exactly one point per step.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<Vec2>,
    limit: Option<usize>,
}

impl Trail {
    /// Start an unbounded trail at `origin`.
    pub fn new(origin: Vec2) -> Self {
        Self::with_limit(origin, None)
    }

    /// Start a trail at `origin` that keeps at most `limit` points.
    ///
    /// A limit of zero is raised to one so the trail is never empty.
    pub fn with_limit(origin: Vec2, limit: Option<usize>) -> Self {
        let mut points = VecDeque::new();
        points.push_back(origin);
        Self {
            points,
            limit: limit.map(|n| n.max(1)),
        }
    }

    pub fn push(&mut self, point: Vec2) {
        self.points.push_back(point);
        if let Some(limit) = self.limit {
            while self.points.len() > limit {
                self.points.pop_front();
            }
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a trail holds at least its starting point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Vec2> {
        self.points.front().copied()
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

/// Moving point mass under the body's gravity.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    mass: f32,
    trail: Trail,
}

impl Projectile {
    /// Create a projectile whose trail starts at `position`.
    pub fn new(position: Vec2, velocity: Vec2, mass: f32) -> Result<Self, BodyError> {
        Self::with_trail_limit(position, velocity, mass, None)
    }

    pub fn with_trail_limit(
        position: Vec2,
        velocity: Vec2,
        mass: f32,
        trail_limit: Option<usize>,
    ) -> Result<Self, BodyError> {
        if !check_positive(mass) {
            return Err(BodyError::NonPositiveMass { value: mass });
        }
        Ok(Self {
            position,
            velocity,
            mass,
            trail: Trail::with_limit(position, trail_limit),
        })
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Move the trail out, leaving a fresh one that starts at the current
    /// position.
    pub fn take_trail(&mut self) -> Trail {
        let fresh = Trail::with_limit(self.position, self.trail.limit());
        std::mem::replace(&mut self.trail, fresh)
    }

    pub(crate) fn record_position(&mut self) {
        self.trail.push(self.position);
    }
}
