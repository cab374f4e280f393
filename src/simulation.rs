//! Simulation plugin: planet placement, slingshot launches, and the fixed-rate
//! integration tick.
//!
//! | System                    | Schedule                        | Purpose                                  |
//! |---------------------------|---------------------------------|------------------------------------------|
//! | `spawn_planet_system`     | `OnEnter(Running)`              | Build the planet from `RunParameters`    |
//! | `launch_input_system`     | `Update / in Running`           | Two-click slingshot gesture              |
//! | `integrate_ships_system`  | `FixedUpdate / in Running`      | One step per ship, then removal test     |
//!
//! Ships live as ECS entities carrying a [`Ship`] component.  A ship that
//! leaves the scene or hits the planet is despawned on the tick it happens
//! and replaced by a [`SpentTrail`] entity, so its path stays on screen.
//! Despawns go through `Commands` and are applied after the whole query has
//! been stepped.

use crate::config::SlingshotConfig;
use crate::constants::{SCENE_HEIGHT, SCENE_WIDTH};
use crate::error::SimResult;
use crate::menu::{GameState, RunParameters};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use slingshot_core::{advance, Body, Launch, LaunchGesture, Projectile, Removal, SceneBounds, Trail};

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationStats>()
            .init_resource::<LaunchAim>()
            .add_systems(OnEnter(GameState::Running), spawn_planet_system)
            .add_systems(
                Update,
                launch_input_system.run_if(in_state(GameState::Running)),
            )
            .add_systems(
                FixedUpdate,
                integrate_ships_system.run_if(in_state(GameState::Running)),
            );
    }
}

// ── Resources ────────────────────────────────────────────────────────────────

/// The planet for this run.  Inserted once on entering `Running`.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlanetBody(pub Body);

/// Pending slingshot anchor, if any.
#[derive(Resource, Debug, Default)]
pub struct LaunchAim(pub LaunchGesture);

/// Running counters.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct SimulationStats {
    pub ticks: u64,
    pub launched: u64,
    pub escaped: u64,
    pub collided: u64,
}

// ── Components ───────────────────────────────────────────────────────────────

/// An active ship.  `serial` orders ships by launch time.
#[derive(Component, Debug, Clone)]
pub struct Ship {
    pub projectile: Projectile,
    pub serial: u64,
}

/// The frozen path of a removed ship.
#[derive(Component, Debug, Clone)]
pub struct SpentTrail {
    pub trail: Trail,
    pub removal: Removal,
}

pub fn scene_bounds() -> SceneBounds {
    SceneBounds::new(SCENE_WIDTH, SCENE_HEIGHT)
}

/// Build the ship for a completed gesture.
pub fn launch_ship(
    launch: Launch,
    params: &RunParameters,
    config: &SlingshotConfig,
    serial: u64,
) -> SimResult<Ship> {
    let projectile = Projectile::with_trail_limit(
        launch.anchor,
        launch.velocity(config.velocity_scale),
        params.ship_mass,
        config.trail_cap(),
    )?;
    Ok(Ship { projectile, serial })
}

// ── OnEnter(Running) ─────────────────────────────────────────────────────────

/// Place the planet at the scene centre.
pub fn spawn_planet_system(mut commands: Commands, params: Res<RunParameters>) {
    match params.planet_body(scene_bounds().center()) {
        Ok(body) => {
            info!(
                "Planet placed at ({}, {}) with mass {} and radius {}",
                body.position().x,
                body.position().y,
                body.mass(),
                body.radius()
            );
            commands.insert_resource(PlanetBody(body));
        }
        Err(e) => error!("Could not place planet: {e}"),
    }
}

// ── Update (Running) ─────────────────────────────────────────────────────────

/// First left click sets the anchor, the next one launches.  Right click or
/// Escape drops a pending anchor.
///
/// Cursor positions are window coordinates, which are scene coordinates
/// because the window is fixed at the scene size.
#[allow(clippy::too_many_arguments)]
pub fn launch_input_system(
    mut commands: Commands,
    buttons: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    params: Res<RunParameters>,
    config: Res<SlingshotConfig>,
    mut aim: ResMut<LaunchAim>,
    mut stats: ResMut<SimulationStats>,
) {
    if buttons.just_pressed(MouseButton::Right) || keys.just_pressed(KeyCode::Escape) {
        aim.0.cancel();
    }
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Some(launch) = aim.0.press(cursor) else {
        return;
    };

    match launch_ship(launch, &params, &config, stats.launched) {
        Ok(ship) => {
            info!(
                "Ship {} launched from ({:.0}, {:.0}) with velocity ({:.2}, {:.2})",
                ship.serial,
                launch.anchor.x,
                launch.anchor.y,
                ship.projectile.velocity.x,
                ship.projectile.velocity.y
            );
            stats.launched += 1;
            commands.spawn(ship);
        }
        Err(e) => warn!("Launch rejected: {e}"),
    }
}

// ── FixedUpdate (Running) ────────────────────────────────────────────────────

/// Advance every ship by one time unit, then retire the ones that left the
/// scene or hit the planet.
///
/// Every ship is stepped against the same immutable planet, and removal is
/// decided on the post-step position.
pub fn integrate_ships_system(
    mut commands: Commands,
    planet: Option<Res<PlanetBody>>,
    config: Res<SlingshotConfig>,
    mut stats: ResMut<SimulationStats>,
    mut ships: Query<(Entity, &mut Ship)>,
) {
    let Some(planet) = planet else {
        return;
    };
    let bounds = scene_bounds();
    stats.ticks += 1;

    for (entity, mut ship) in ships.iter_mut() {
        let Some(removal) = advance(&mut ship.projectile, &planet.0, config.gravity_const, bounds)
        else {
            continue;
        };

        match removal {
            Removal::Collided => stats.collided += 1,
            Removal::OffScreen => stats.escaped += 1,
        }
        debug!(
            "Ship {} removed ({:?}) after {} trail points",
            ship.serial,
            removal,
            ship.projectile.trail().len()
        );

        commands.entity(entity).despawn();
        commands.spawn(SpentTrail {
            trail: ship.projectile.take_trail(),
            removal,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> RunParameters {
        RunParameters {
            planet_mass: 100.0,
            planet_radius: 50.0,
            ship_mass: 5.0,
        }
    }

    #[test]
    fn launch_uses_scaled_drag_and_ship_mass() {
        let launch = Launch {
            anchor: Vec2::new(400.0, 100.0),
            release: Vec2::new(450.0, 100.0),
        };
        let ship = launch_ship(launch, &params(), &SlingshotConfig::default(), 7).unwrap();
        assert_eq!(ship.serial, 7);
        assert_eq!(ship.projectile.position, Vec2::new(400.0, 100.0));
        assert_eq!(ship.projectile.velocity, Vec2::new(0.5, 0.0));
        assert_eq!(ship.projectile.mass(), 5.0);
        assert_eq!(ship.projectile.trail().len(), 1);
    }

    #[test]
    fn launch_applies_trail_limit() {
        let config = SlingshotConfig {
            trail_limit: 10,
            ..SlingshotConfig::default()
        };
        let launch = Launch {
            anchor: Vec2::ZERO,
            release: Vec2::ONE,
        };
        let ship = launch_ship(launch, &params(), &config, 0).unwrap();
        assert_eq!(ship.projectile.trail().limit(), Some(10));
    }

    #[test]
    fn scene_bounds_match_window() {
        let bounds = scene_bounds();
        assert_eq!(bounds.width, SCENE_WIDTH);
        assert_eq!(bounds.height, SCENE_HEIGHT);
    }
}
