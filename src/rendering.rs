//! Rendering systems: scene backdrop, planet, ships, trails, aim line and HUD.
//!
//! ## Layer Model
//!
//! | Layer           | Technology   | z     | Notes                                   |
//! |-----------------|--------------|-------|-----------------------------------------|
//! | Background      | `Sprite`     | -10   | Star-field `Mesh2d`s if image missing   |
//! | Spent trails    | `Mesh2d`     | 0.5   | Retained line strips, built once        |
//! | Planet          | `Sprite`     | 1     | Filled circle `Mesh2d` if image missing |
//! | Active trails   | Gizmos       | n/a   | Rebuilt every frame                     |
//! | Ships           | Gizmos       | n/a   | Circle per ship                         |
//! | Aim line        | Gizmos       | n/a   | Only while an anchor is pending         |
//! | HUD             | Bevy UI      | n/a   | Ship info, run values, counters         |
//!
//! The simulation works in scene coordinates (top-left origin, y down).
//! [`scene_to_world`] maps them into Bevy's centred, y-up world for drawing.

use crate::config::SlingshotConfig;
use crate::constants::*;
use crate::menu::{GameState, RunParameters};
use crate::simulation::{LaunchAim, PlanetBody, Ship, SimulationStats, SpentTrail};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_asset::RenderAssetUsages;
use bevy_mesh::PrimitiveTopology;
use rand::Rng;
use slingshot_core::{escape_velocity, Body, Projectile, Trail};
use std::path::Path;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Running), (setup_background, setup_hud))
            .add_systems(
                Update,
                (
                    spawn_planet_visual.run_if(resource_added::<PlanetBody>),
                    attach_trail_mesh_system,
                    draw_ships_system,
                    draw_aim_system,
                    hud_display_system,
                )
                    .run_if(in_state(GameState::Running)),
            );
    }
}

// ── Component markers ─────────────────────────────────────────────────────────

/// HUD text for the oldest active ship.
#[derive(Component)]
pub struct ShipInfoText;

/// HUD text listing the planet/ship values in use.
#[derive(Component)]
pub struct RunValuesText;

/// HUD text with launch/escape/collision counters.
#[derive(Component)]
pub struct StatsText;

// ── Colour helpers ────────────────────────────────────────────────────────────

fn ship_color() -> Color {
    Color::srgb(1.0, 0.0, 0.0)
}
fn trail_color() -> Color {
    Color::WHITE
}
fn planet_placeholder_color() -> Color {
    Color::srgb(0.85, 0.62, 0.38)
}
fn star_color() -> Color {
    Color::srgb(0.80, 0.82, 0.92)
}
fn stats_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Scene coordinates (top-left origin, y down) → world coordinates (centre
/// origin, y up).
pub fn scene_to_world(point: Vec2) -> Vec2 {
    Vec2::new(point.x - SCENE_WIDTH / 2.0, SCENE_HEIGHT / 2.0 - point.y)
}

fn asset_exists(name: &str) -> bool {
    Path::new("assets").join(name).is_file()
}

/// Line-strip mesh through every trail point, in world coordinates.
///
/// `None` for a single-point trail: there is nothing to connect.
pub fn trail_mesh(trail: &Trail) -> Option<Mesh> {
    if trail.len() < 2 {
        return None;
    }
    let positions: Vec<[f32; 3]> = trail
        .iter()
        .map(|p| {
            let w = scene_to_world(p);
            [w.x, w.y, 0.0]
        })
        .collect();
    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];
    let uvs = vec![[0.0, 0.0]; positions.len()];

    let mut mesh = Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    Some(mesh)
}

pub fn ship_info_text(projectile: &Projectile, planet: &Body, gravity_const: f32) -> String {
    format!(
        "Position: ({}, {})\nVelocity: ({:.2}, {:.2})\nEscape Velocity: {:.2}",
        projectile.position.x as i32,
        projectile.position.y as i32,
        projectile.velocity.x,
        projectile.velocity.y,
        escape_velocity(projectile, planet, gravity_const)
    )
}

pub fn run_values_text(params: &RunParameters) -> String {
    format!(
        "Planet Mass: {}\nPlanet Radius: {}\nShip Mass: {}",
        params.planet_mass, params.planet_radius, params.ship_mass
    )
}

// ── OnEnter(Running) ──────────────────────────────────────────────────────────

/// Background image scaled to the window, or a random star field when
/// `assets/background.jpg` is missing.
pub fn setup_background(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    if asset_exists(BACKGROUND_IMAGE) {
        commands.spawn((
            Sprite {
                image: asset_server.load(BACKGROUND_IMAGE),
                custom_size: Some(Vec2::new(SCENE_WIDTH, SCENE_HEIGHT)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, -10.0),
        ));
        return;
    }

    warn!("assets/{BACKGROUND_IMAGE} not found; drawing a star field instead");
    let star = meshes.add(Circle::new(1.0));
    let material = materials.add(ColorMaterial::from_color(star_color()));
    let mut rng = rand::thread_rng();
    for _ in 0..STAR_COUNT {
        let point = Vec2::new(
            rng.gen_range(0.0..SCENE_WIDTH),
            rng.gen_range(0.0..SCENE_HEIGHT),
        );
        let size = rng.gen_range(0.4..1.4);
        commands.spawn((
            Mesh2d(star.clone()),
            MeshMaterial2d(material.clone()),
            Transform::from_translation(scene_to_world(point).extend(-10.0))
                .with_scale(Vec3::splat(size)),
        ));
    }
}

pub fn setup_hud(mut commands: Commands, config: Res<SlingshotConfig>) {
    let font = TextFont {
        font_size: config.hud_font_size,
        ..default()
    };
    commands.spawn((
        Text::new(""),
        font.clone(),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(SCENE_WIDTH - 200.0),
            top: Val::Px(10.0),
            ..default()
        },
        ShipInfoText,
    ));
    commands.spawn((
        Text::new(""),
        font.clone(),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(SCENE_WIDTH - 200.0),
            top: Val::Px(80.0),
            ..default()
        },
        RunValuesText,
    ));
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: config.hud_font_size * 0.75,
            ..default()
        },
        TextColor(stats_color()),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            bottom: Val::Px(10.0),
            ..default()
        },
        StatsText,
    ));
}

// ── Update (Running) ──────────────────────────────────────────────────────────

/// Planet image sized to its diameter, or a filled circle when
/// `assets/jupiter.png` is missing.
pub fn spawn_planet_visual(
    mut commands: Commands,
    planet: Res<PlanetBody>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let body = planet.0;
    let transform = Transform::from_translation(scene_to_world(body.position()).extend(1.0));

    if asset_exists(PLANET_IMAGE) {
        commands.spawn((
            Sprite {
                image: asset_server.load(PLANET_IMAGE),
                custom_size: Some(Vec2::splat(body.radius() * 2.0)),
                ..default()
            },
            transform,
        ));
    } else {
        warn!("assets/{PLANET_IMAGE} not found; drawing a plain disc");
        commands.spawn((
            Mesh2d(meshes.add(Circle::new(body.radius()))),
            MeshMaterial2d(materials.add(ColorMaterial::from_color(planet_placeholder_color()))),
            transform,
        ));
    }
}

/// Give every newly spent trail a retained line-strip mesh.
///
/// Uses [`Added<SpentTrail>`]; the trail never changes afterwards, so the mesh
/// is built exactly once.
pub fn attach_trail_mesh_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut shared_material: Local<Option<Handle<ColorMaterial>>>,
    query: Query<(Entity, &SpentTrail), Added<SpentTrail>>,
) {
    for (entity, spent) in query.iter() {
        let Some(mesh) = trail_mesh(&spent.trail) else {
            continue;
        };
        let material = shared_material
            .get_or_insert_with(|| materials.add(ColorMaterial::from_color(trail_color())))
            .clone();
        commands.entity(entity).insert((
            Mesh2d(meshes.add(mesh)),
            MeshMaterial2d(material),
            Transform::from_xyz(0.0, 0.0, 0.5),
        ));
    }
}

/// Active ships: trail polyline plus a circle at the current position.
pub fn draw_ships_system(
    mut gizmos: Gizmos,
    config: Res<SlingshotConfig>,
    ships: Query<&Ship>,
) {
    for ship in ships.iter() {
        let trail = ship.projectile.trail();
        if trail.len() > 1 {
            gizmos.linestrip_2d(trail.iter().map(scene_to_world), trail_color());
        }
        gizmos.circle_2d(
            scene_to_world(ship.projectile.position),
            config.ship_draw_radius,
            ship_color(),
        );
    }
}

/// While aiming: a line from the anchor to the cursor and a marker at the anchor.
pub fn draw_aim_system(
    mut gizmos: Gizmos,
    aim: Res<LaunchAim>,
    config: Res<SlingshotConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Some(anchor) = aim.0.anchor() else {
        return;
    };
    let anchor_world = scene_to_world(anchor);
    if let Some(cursor) = windows.single().ok().and_then(|w| w.cursor_position()) {
        gizmos.line_2d(anchor_world, scene_to_world(cursor), Color::WHITE);
    }
    gizmos.circle_2d(anchor_world, config.ship_draw_radius, ship_color());
}

#[allow(clippy::type_complexity, clippy::too_many_arguments)]
pub fn hud_display_system(
    ships: Query<&Ship>,
    planet: Option<Res<PlanetBody>>,
    params: Res<RunParameters>,
    config: Res<SlingshotConfig>,
    stats: Res<SimulationStats>,
    mut info_text: Query<&mut Text, (With<ShipInfoText>, Without<RunValuesText>, Without<StatsText>)>,
    mut values_text: Query<&mut Text, (With<RunValuesText>, Without<ShipInfoText>, Without<StatsText>)>,
    mut stats_text: Query<&mut Text, (With<StatsText>, Without<ShipInfoText>, Without<RunValuesText>)>,
) {
    let info = match (ships.iter().min_by_key(|s| s.serial), planet.as_deref()) {
        (Some(ship), Some(planet)) => ship_info_text(&ship.projectile, &planet.0, config.gravity_const),
        _ => String::new(),
    };
    for mut text in info_text.iter_mut() {
        if text.0 != info {
            text.0 = info.clone();
        }
    }

    let values = run_values_text(&params);
    for mut text in values_text.iter_mut() {
        if text.0 != values {
            text.0 = values.clone();
        }
    }

    if stats.is_changed() {
        for mut text in stats_text.iter_mut() {
            text.0 = format!(
                "Launched: {} | Escaped: {} | Collided: {}",
                stats.launched, stats.escaped, stats.collided
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_corners_map_to_world_corners() {
        assert_eq!(scene_to_world(Vec2::ZERO), Vec2::new(-400.0, 300.0));
        assert_eq!(scene_to_world(Vec2::new(800.0, 600.0)), Vec2::new(400.0, -300.0));
        assert_eq!(scene_to_world(Vec2::new(400.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn single_point_trail_has_no_mesh() {
        assert!(trail_mesh(&Trail::new(Vec2::new(10.0, 10.0))).is_none());
    }

    #[test]
    fn trail_mesh_has_one_vertex_per_point() {
        let mut trail = Trail::new(Vec2::ZERO);
        trail.push(Vec2::new(1.0, 1.0));
        trail.push(Vec2::new(2.0, 4.0));
        let mesh = trail_mesh(&trail).expect("mesh");
        assert_eq!(mesh.count_vertices(), 3);
        assert_eq!(mesh.primitive_topology(), PrimitiveTopology::LineStrip);
    }

    #[test]
    fn ship_info_truncates_position_and_rounds_velocity() {
        let planet = Body::new(Vec2::new(400.0, 300.0), 100.0, 50.0).unwrap();
        let ship = Projectile::new(Vec2::new(400.7, 100.2), Vec2::new(0.5, 0.0125), 5.0).unwrap();
        let text = ship_info_text(&ship, &planet, 5.0);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Position: (400, 100)");
        assert_eq!(lines[1], "Velocity: (0.50, 0.01)");
        assert!(lines[2].starts_with("Escape Velocity: 2.2"));
    }

    #[test]
    fn run_values_lists_all_three() {
        let params = RunParameters {
            planet_mass: 100.0,
            planet_radius: 50.0,
            ship_mass: 2.5,
        };
        assert_eq!(
            run_values_text(&params),
            "Planet Mass: 100\nPlanet Radius: 50\nShip Mass: 2.5"
        );
    }
}
