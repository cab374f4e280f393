use bevy::prelude::*;
use bevy::window::WindowResolution;
use slingshot::config::{self, SlingshotConfig};
use slingshot::constants::{SCENE_HEIGHT, SCENE_WIDTH, TARGET_TICK_RATE, WINDOW_TITLE};
use slingshot::graphics;
use slingshot::menu::SetupMenuPlugin;
use slingshot::rendering::RenderingPlugin;
use slingshot::simulation::SimulationPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                // Cursor positions double as scene coordinates, so the window
                // must stay at the scene size with no DPI scaling.
                resolution: WindowResolution::new(SCENE_WIDTH as u32, SCENE_HEIGHT as u32)
                    .with_scale_factor_override(1.0),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Compiled defaults; load_slingshot_config overwrites them from
        // assets/slingshot.toml (if present) in the Startup schedule.
        .insert_resource(SlingshotConfig::default())
        .insert_resource(Time::<Fixed>::from_hz(TARGET_TICK_RATE))
        .add_plugins((SetupMenuPlugin, SimulationPlugin, RenderingPlugin))
        .add_systems(
            Startup,
            (
                config::load_slingshot_config,
                graphics::setup_camera.after(config::load_slingshot_config),
            ),
        )
        .run();
}
