//! Compiled-in defaults.
//!
//! Every runtime-tunable value in [`crate::config::SlingshotConfig`] falls back
//! to the constant of the same name here.  The scene size is fixed: the window
//! is not resizable and scene coordinates are window pixels.

// ── Scene ─────────────────────────────────────────────────────────────────────

/// Window and scene width (pixels).
pub const SCENE_WIDTH: f32 = 800.0;

/// Window and scene height (pixels).
pub const SCENE_HEIGHT: f32 = 600.0;

pub const WINDOW_TITLE: &str = "Gravitational Slingshot Effect";

// ── Setup form defaults ───────────────────────────────────────────────────────

/// Planet mass used when the setup field is empty or not a positive number.
pub const DEFAULT_PLANET_MASS: f32 = 100.0;

/// Planet collision radius; also the half-size of the planet image.
pub const DEFAULT_PLANET_RADIUS: f32 = 50.0;

/// Mass given to every launched ship.
///
/// The ship's own mass cancels out of its acceleration, so this only shows up
/// in the HUD.
pub const DEFAULT_SHIP_MASS: f32 = 5.0;

// ── Physics ───────────────────────────────────────────────────────────────────

/// Gravitational constant in scene units.
///
/// At 5.0 a ship 200 px from a mass-100 planet gains 0.0125 px/tick² toward it.
pub const GRAVITY_CONST: f32 = 5.0;

/// Divisor turning a slingshot drag (px) into a launch velocity (px/tick).
///
/// A 100 px drag launches at 1 px/tick.
pub const VELOCITY_SCALE: f32 = 100.0;

/// Integration ticks per second.  Each tick advances ships by one time unit
/// regardless of real frame time.
pub const TARGET_TICK_RATE: f64 = 60.0;

/// Maximum points kept per trail; 0 keeps every point.
pub const TRAIL_LIMIT: usize = 0;

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Radius of the circle drawn for each ship and for the pending anchor.
pub const SHIP_DRAW_RADIUS: f32 = 5.0;

/// Font size of HUD and setup-form text.
pub const HUD_FONT_SIZE: f32 = 18.0;

/// Minimum width of a setup-form text box.
pub const INPUT_BOX_MIN_WIDTH: f32 = 200.0;

/// Number of stars in the placeholder background.
pub const STAR_COUNT: usize = 160;

pub const BACKGROUND_IMAGE: &str = "background.jpg";
pub const PLANET_IMAGE: &str = "jupiter.png";
