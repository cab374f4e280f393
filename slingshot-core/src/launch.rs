//! Two-press slingshot gesture.
//!
//! The first press fixes the launch point (the *anchor*); the second press
//! releases a projectile from the anchor, with its velocity derived from the
//! drag vector anchor → pointer.

use bevy_math::Vec2;

/// Anchor and release point of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub anchor: Vec2,
    pub release: Vec2,
}

impl Launch {
    pub fn velocity(&self, velocity_scale: f32) -> Vec2 {
        crate::gravity::launch_velocity(self.anchor, self.release, velocity_scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LaunchGesture {
    /// Waiting for the press that sets the anchor.
    #[default]
    Idle,
    /// Anchor set; the next press launches.
    Aiming { anchor: Vec2 },
}

impl LaunchGesture {
    /// Feed a pointer press.  Returns the completed launch on the second press.
    pub fn press(&mut self, pointer: Vec2) -> Option<Launch> {
        match *self {
            LaunchGesture::Idle => {
                *self = LaunchGesture::Aiming { anchor: pointer };
                None
            }
            LaunchGesture::Aiming { anchor } => {
                *self = LaunchGesture::Idle;
                Some(Launch {
                    anchor,
                    release: pointer,
                })
            }
        }
    }

    /// Drop a pending anchor.
    pub fn cancel(&mut self) {
        *self = LaunchGesture::Idle;
    }

    pub fn anchor(&self) -> Option<Vec2> {
        match self {
            LaunchGesture::Idle => None,
            LaunchGesture::Aiming { anchor } => Some(*anchor),
        }
    }
}
