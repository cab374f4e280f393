//! Runtime configuration loaded from `assets/slingshot.toml`.
//!
//! [`SlingshotConfig`] is a Bevy [`Resource`] that mirrors the tunable
//! constants in [`crate::constants`].  At startup, [`load_slingshot_config`]
//! reads `assets/slingshot.toml` and overwrites the defaults with any values
//! present in the file.  Missing keys fall back to the compile-time defaults,
//! so a minimal TOML can override just the values you care about:
//!
//! ```toml
//! gravity_const = 8.0
//! trail_limit = 2000
//! ```
//!
//! The setup-form defaults (`default_planet_mass` and friends) are the values
//! the three text fields start with and fall back to on bad input.

use crate::constants::*;
use crate::error::{
    validate_gravity_const, validate_positive, validate_tick_rate, validate_velocity_scale,
    SimError, SimResult,
};
use crate::menu::SetupForm;
use bevy::prelude::*;
use serde::Deserialize;

pub const CONFIG_PATH: &str = "assets/slingshot.toml";

/// Runtime-tunable physics and presentation values.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SlingshotConfig {
    // ── Setup form ────────────────────────────────────────────────────────────
    pub default_planet_mass: f32,
    pub default_planet_radius: f32,
    pub default_ship_mass: f32,

    // ── Physics ───────────────────────────────────────────────────────────────
    pub gravity_const: f32,
    pub velocity_scale: f32,
    pub target_tick_rate: f64,
    /// 0 keeps every trail point.
    pub trail_limit: usize,

    // ── Rendering ─────────────────────────────────────────────────────────────
    pub ship_draw_radius: f32,
    pub hud_font_size: f32,
}

impl Default for SlingshotConfig {
    fn default() -> Self {
        Self {
            default_planet_mass: DEFAULT_PLANET_MASS,
            default_planet_radius: DEFAULT_PLANET_RADIUS,
            default_ship_mass: DEFAULT_SHIP_MASS,
            gravity_const: GRAVITY_CONST,
            velocity_scale: VELOCITY_SCALE,
            target_tick_rate: TARGET_TICK_RATE,
            trail_limit: TRAIL_LIMIT,
            ship_draw_radius: SHIP_DRAW_RADIUS,
            hud_font_size: HUD_FONT_SIZE,
        }
    }
}

impl SlingshotConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(path: &str, contents: &str) -> SimResult<Self> {
        let config: SlingshotConfig =
            toml::from_str(contents).map_err(|source| SimError::ConfigParse {
                path: path.to_string(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        validate_gravity_const(self.gravity_const)?;
        validate_velocity_scale(self.velocity_scale)?;
        validate_tick_rate(self.target_tick_rate)?;
        validate_positive("default_planet_mass", self.default_planet_mass)?;
        validate_positive("default_planet_radius", self.default_planet_radius)?;
        validate_positive("default_ship_mass", self.default_ship_mass)?;
        validate_positive("ship_draw_radius", self.ship_draw_radius)?;
        Ok(())
    }

    /// Trail cap for new ships; `None` when unbounded.
    pub fn trail_cap(&self) -> Option<usize> {
        (self.trail_limit > 0).then_some(self.trail_limit)
    }
}

/// Startup system: attempt to load `assets/slingshot.toml` and overwrite the
/// `SlingshotConfig` resource, then retune the fixed timestep and refill the
/// setup form to match.
///
/// A missing file is not an error.  Parse or validation failures are logged
/// and the compiled defaults stay in place.
pub fn load_slingshot_config(
    mut config: ResMut<SlingshotConfig>,
    mut fixed: ResMut<Time<Fixed>>,
    mut form: ResMut<SetupForm>,
) {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match SlingshotConfig::from_toml_str(CONFIG_PATH, &contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded config from {CONFIG_PATH}");
            }
            Err(e) => {
                warn!("{e}; using defaults");
            }
        },
        Err(_) => {
            info!("No {CONFIG_PATH} found; using compiled defaults");
        }
    }

    fixed.set_timestep_hz(config.target_tick_rate);
    *form = SetupForm::from_config(&config);
}
