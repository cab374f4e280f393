//! End-to-end trajectories through the public core API.

use slingshot_core::{
    advance, launch_velocity, step, Body, LaunchGesture, Projectile, Removal, SceneBounds, Vec2,
};

const G: f32 = 5.0;
const VELOCITY_SCALE: f32 = 100.0;

fn planet() -> Body {
    Body::new(Vec2::new(400.0, 300.0), 100.0, 50.0).unwrap()
}

fn scene() -> SceneBounds {
    SceneBounds::new(800.0, 600.0)
}

/// Launch from (400,100) releasing at (450,100), then one tick.
///
/// d = 200, F = 5·5·100/200² = 0.0625, a = F/5 = 0.0125, body straight below.
#[test]
fn first_tick_above_planet() {
    let mut gesture = LaunchGesture::default();
    gesture.press(Vec2::new(400.0, 100.0));
    let launch = gesture.press(Vec2::new(450.0, 100.0)).unwrap();

    let velocity = launch.velocity(VELOCITY_SCALE);
    assert_eq!(velocity, Vec2::new(0.5, 0.0));

    let mut ship = Projectile::new(launch.anchor, velocity, 5.0).unwrap();
    let removal = advance(&mut ship, &planet(), G, scene());

    assert_eq!(removal, None);
    assert!((ship.velocity.x - 0.5).abs() < 1e-6, "vx = {}", ship.velocity.x);
    assert!((ship.velocity.y - 0.0125).abs() < 1e-6, "vy = {}", ship.velocity.y);
    assert!((ship.position.x - 400.5).abs() < 1e-4);
    assert!((ship.position.y - 100.0125).abs() < 1e-4);
    assert_eq!(ship.trail().len(), 2);
}

#[test]
fn head_on_launch_collides_before_leaving_scene() {
    let body = planet();
    let anchor = Vec2::new(400.0, 60.0);
    let velocity = launch_velocity(anchor, Vec2::new(400.0, 160.0), VELOCITY_SCALE);
    let mut ship = Projectile::new(anchor, velocity, 5.0).unwrap();

    let mut outcome = None;
    for _ in 0..1_000 {
        outcome = advance(&mut ship, &body, G, scene());
        if outcome.is_some() {
            break;
        }
    }

    assert_eq!(outcome, Some(Removal::Collided));
    assert!(ship.position.distance(body.position()) <= body.radius());
}

#[test]
fn trail_length_is_one_plus_steps() {
    let body = planet();
    let mut ship = Projectile::new(Vec2::new(100.0, 100.0), Vec2::new(0.3, -0.2), 5.0).unwrap();
    for n in 1..=40 {
        step(&mut ship, &body, G);
        assert_eq!(ship.trail().len(), 1 + n);
    }
    assert_eq!(ship.trail().first(), Some(Vec2::new(100.0, 100.0)));
    assert_eq!(ship.trail().last(), Some(ship.position));
}

/// Every velocity change points straight at the body from the pre-step
/// position, so the path only ever bends toward it.
#[test]
fn path_bends_toward_body_every_step() {
    let body = planet();
    let mut ship = Projectile::new(Vec2::new(400.0, 100.0), Vec2::new(0.5, 0.0), 5.0).unwrap();

    for _ in 0..200 {
        if ship.position.distance(body.position()) <= body.radius() {
            break;
        }
        let before = ship.position;
        let old_velocity = ship.velocity;
        step(&mut ship, &body, G);

        let dv = ship.velocity - old_velocity;
        let to_body = body.position() - before;
        assert!(dv.dot(to_body) > 0.0, "acceleration points away from body");
        let misalignment = dv.normalize().perp_dot(to_body.normalize()).abs();
        assert!(misalignment < 1e-3, "acceleration off the body line: {misalignment}");
    }
}

#[test]
fn fast_tangential_launch_escapes_off_screen() {
    let body = planet();
    let mut ship = Projectile::new(Vec2::new(400.0, 100.0), Vec2::new(6.0, 0.0), 5.0).unwrap();

    let mut outcome = None;
    for _ in 0..1_000 {
        outcome = advance(&mut ship, &body, G, scene());
        if outcome.is_some() {
            break;
        }
    }
    assert_eq!(outcome, Some(Removal::OffScreen));
}
