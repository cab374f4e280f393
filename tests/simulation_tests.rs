//! Headless tests for the fixed-rate integration tick and planet placement.
//!
//! `FixedUpdate` is run directly with `run_schedule`, one call per tick, so
//! the tests do not depend on wall-clock time.

use bevy::prelude::*;
use slingshot::config::SlingshotConfig;
use slingshot::menu::RunParameters;
use slingshot::simulation::{
    integrate_ships_system, spawn_planet_system, PlanetBody, Ship, SimulationStats, SpentTrail,
};
use slingshot_core::{Body, Projectile, Removal};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn sim_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(SlingshotConfig::default());
    app.init_resource::<SimulationStats>();
    app.insert_resource(PlanetBody(
        Body::new(Vec2::new(400.0, 300.0), 100.0, 50.0).unwrap(),
    ));
    app.add_systems(FixedUpdate, integrate_ships_system);
    app
}

fn spawn_ship(app: &mut App, position: Vec2, velocity: Vec2, serial: u64) -> Entity {
    let projectile = Projectile::new(position, velocity, 5.0).unwrap();
    app.world_mut().spawn(Ship { projectile, serial }).id()
}

fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

fn spent_trails(app: &mut App) -> Vec<SpentTrail> {
    let world = app.world_mut();
    let mut query = world.query::<&SpentTrail>();
    query.iter(world).cloned().collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn ship_on_stable_path_keeps_flying() {
    let mut app = sim_app();
    let ship = spawn_ship(&mut app, Vec2::new(400.0, 100.0), Vec2::new(0.5, 0.0), 0);

    for _ in 0..3 {
        tick(&mut app);
    }

    let ship = app.world().get::<Ship>(ship).expect("ship still active");
    assert_eq!(ship.projectile.trail().len(), 4);
    assert!(ship.projectile.velocity.y > 0.0, "ship must fall toward planet");
    assert_eq!(app.world().resource::<SimulationStats>().ticks, 3);
    assert!(spent_trails(&mut app).is_empty());
}

#[test]
fn ship_hitting_planet_becomes_spent_trail() {
    let mut app = sim_app();
    let ship = spawn_ship(&mut app, Vec2::new(400.0, 249.0), Vec2::new(0.0, 2.0), 0);

    tick(&mut app);

    assert!(app.world().get_entity(ship).is_err(), "ship must be despawned");
    let spent = spent_trails(&mut app);
    assert_eq!(spent.len(), 1);
    assert_eq!(spent[0].removal, Removal::Collided);
    assert_eq!(spent[0].trail.len(), 2);

    let stats = app.world().resource::<SimulationStats>();
    assert_eq!(stats.collided, 1);
    assert_eq!(stats.escaped, 0);
}

#[test]
fn ship_leaving_scene_is_counted_as_escaped() {
    let mut app = sim_app();
    spawn_ship(&mut app, Vec2::new(799.5, 300.0), Vec2::new(1.0, 0.0), 0);

    tick(&mut app);

    let spent = spent_trails(&mut app);
    assert_eq!(spent.len(), 1);
    assert_eq!(spent[0].removal, Removal::OffScreen);
    assert_eq!(app.world().resource::<SimulationStats>().escaped, 1);
}

#[test]
fn removal_of_one_ship_leaves_others_untouched() {
    let mut app = sim_app();
    let doomed = spawn_ship(&mut app, Vec2::new(400.0, 249.0), Vec2::new(0.0, 2.0), 0);
    let survivor = spawn_ship(&mut app, Vec2::new(400.0, 100.0), Vec2::new(0.5, 0.0), 1);

    tick(&mut app);
    tick(&mut app);

    assert!(app.world().get_entity(doomed).is_err());
    let survivor = app.world().get::<Ship>(survivor).expect("survivor active");
    assert_eq!(survivor.projectile.trail().len(), 3);
    assert_eq!(spent_trails(&mut app).len(), 1);
}

#[test]
fn no_planet_means_no_tick() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(SlingshotConfig::default());
    app.init_resource::<SimulationStats>();
    app.add_systems(FixedUpdate, integrate_ships_system);
    let ship = spawn_ship(&mut app, Vec2::new(400.0, 100.0), Vec2::new(0.5, 0.0), 0);

    tick(&mut app);

    assert_eq!(app.world().resource::<SimulationStats>().ticks, 0);
    let ship = app.world().get::<Ship>(ship).unwrap();
    assert_eq!(ship.projectile.trail().len(), 1);
}

#[test]
fn planet_is_placed_at_scene_centre() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(RunParameters {
        planet_mass: 250.0,
        planet_radius: 30.0,
        ship_mass: 5.0,
    });
    app.add_systems(Update, spawn_planet_system);
    app.update();

    let planet = app.world().resource::<PlanetBody>();
    assert_eq!(planet.0.position(), Vec2::new(400.0, 300.0));
    assert_eq!(planet.0.mass(), 250.0);
    assert_eq!(planet.0.radius(), 30.0);
}
