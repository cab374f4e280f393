//! Gravitational slingshot simulator.
//!
//! Ships are launched with a click-and-release gesture around a single fixed
//! planet and integrated with semi-implicit Euler steps until they collide or
//! leave the scene.  The physics lives in the `slingshot-core` crate; this
//! crate wires it into Bevy: setup form, input, fixed-rate tick, rendering and
//! HUD.

pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod menu;
pub mod rendering;
pub mod simulation;
