//! Setup screen: `GameState` definition, the three numeric text fields, and
//! `SetupMenuPlugin`.
//!
//! ## States
//!
//! | State     | Description                                          |
//! |-----------|------------------------------------------------------|
//! | `Setup`   | Initial state; planet/ship parameters are edited     |
//! | `Running` | Planet fixed; ships can be launched                  |
//!
//! ## Systems (registered by `SetupMenuPlugin`)
//!
//! | System                   | Schedule              | Purpose                              |
//! |--------------------------|-----------------------|--------------------------------------|
//! | `setup_form_ui`          | `OnEnter(Setup)`      | Spawn the text boxes and prompt      |
//! | `cleanup_form_ui`        | `OnExit(Setup)`       | Despawn the form                     |
//! | `field_focus_system`     | `Update / in Setup`   | Click toggles focus on a box         |
//! | `field_typing_system`    | `Update / in Setup`   | Typed text and Backspace             |
//! | `confirm_setup_system`   | `Update / in Setup`   | Enter → `RunParameters` → `Running`  |
//! | `form_display_system`    | `Update / in Setup`   | Sync box text and focus colours      |

use crate::config::SlingshotConfig;
use crate::constants::*;
use crate::error::SimResult;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::input::ButtonState;
use bevy::prelude::*;
use slingshot_core::Body;

// ── Game state ────────────────────────────────────────────────────────────────

/// Top-level application state machine.
///
/// Launch input and integration in [`crate::simulation::SimulationPlugin`] run
/// under `.run_if(in_state(GameState::Running))`.  There is no way back to
/// `Setup`; closing the window ends the run.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Parameter entry screen; shown on startup.
    #[default]
    Setup,
    /// Planet placed; ships are launched and integrated.
    Running,
}

// ── Input field ───────────────────────────────────────────────────────────────

/// One numeric text box.
///
/// Text is free-form while editing; it is only interpreted when the run
/// starts, and anything that is not a finite positive number falls back to
/// `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    pub text: String,
    pub active: bool,
    pub default: f32,
}

impl InputField {
    /// A field pre-filled with its default value.
    pub fn new(default: f32) -> Self {
        Self {
            text: default.to_string(),
            active: false,
            default,
        }
    }

    /// Append typed text, dropping control characters.  Ignored unless focused.
    pub fn insert_text(&mut self, typed: &str) {
        if self.active {
            self.text.extend(typed.chars().filter(|c| !c.is_control()));
        }
    }

    pub fn backspace(&mut self) {
        if self.active {
            self.text.pop();
        }
    }

    /// The parsed number, if the text is one.
    pub fn value(&self) -> Option<f32> {
        self.text.trim().parse().ok()
    }

    /// The parsed number if it is usable as a mass or radius, else the default.
    pub fn value_or_default(&self) -> f32 {
        match self.value() {
            Some(v) if v.is_finite() && v > 0.0 => v,
            _ => self.default,
        }
    }
}

/// Identifies one of the three setup fields.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetupField {
    PlanetMass,
    PlanetRadius,
    ShipMass,
}

impl SetupField {
    pub const ALL: [SetupField; 3] = [
        SetupField::PlanetMass,
        SetupField::PlanetRadius,
        SetupField::ShipMass,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SetupField::PlanetMass => "Planet Mass",
            SetupField::PlanetRadius => "Planet Radius",
            SetupField::ShipMass => "Ship Mass",
        }
    }

    fn index(self) -> usize {
        match self {
            SetupField::PlanetMass => 0,
            SetupField::PlanetRadius => 1,
            SetupField::ShipMass => 2,
        }
    }
}

/// Editable contents of the setup screen.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SetupForm {
    fields: [InputField; 3],
}

impl Default for SetupForm {
    fn default() -> Self {
        Self::from_config(&SlingshotConfig::default())
    }
}

impl SetupForm {
    pub fn from_config(config: &SlingshotConfig) -> Self {
        Self {
            fields: [
                InputField::new(config.default_planet_mass),
                InputField::new(config.default_planet_radius),
                InputField::new(config.default_ship_mass),
            ],
        }
    }

    pub fn field(&self, which: SetupField) -> &InputField {
        &self.fields[which.index()]
    }

    pub fn field_mut(&mut self, which: SetupField) -> &mut InputField {
        &mut self.fields[which.index()]
    }

    /// Apply a click: a pressed field toggles focus, every other field loses it.
    pub fn click(&mut self, pressed: Option<SetupField>) {
        for which in SetupField::ALL {
            let field = self.field_mut(which);
            field.active = Some(which) == pressed && !field.active;
        }
    }

    pub fn active_mut(&mut self) -> Option<&mut InputField> {
        self.fields.iter_mut().find(|f| f.active)
    }

    /// Freeze the current text into the values used for the run.
    pub fn confirm(&self) -> RunParameters {
        RunParameters {
            planet_mass: self.field(SetupField::PlanetMass).value_or_default(),
            planet_radius: self.field(SetupField::PlanetRadius).value_or_default(),
            ship_mass: self.field(SetupField::ShipMass).value_or_default(),
        }
    }
}

/// Values fixed when the run starts.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct RunParameters {
    pub planet_mass: f32,
    pub planet_radius: f32,
    pub ship_mass: f32,
}

impl RunParameters {
    /// Build the planet at `center` (scene coordinates).
    pub fn planet_body(&self, center: Vec2) -> SimResult<Body> {
        Ok(Body::new(center, self.planet_mass, self.planet_radius)?)
    }
}

// ── Component markers ─────────────────────────────────────────────────────────

/// Root node of the setup screen; entire tree is despawned on `OnExit(Setup)`.
#[derive(Component)]
pub struct SetupFormRoot;

/// Text node inside a field's box.
#[derive(Component)]
pub struct FieldText(pub SetupField);

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Registers `GameState`, the setup form, and its input handling.
///
/// Must be added before any plugin that calls
/// `.run_if(in_state(GameState::Running))`.
pub struct SetupMenuPlugin;

impl Plugin for SetupMenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SetupForm>()
            .add_systems(OnEnter(GameState::Setup), setup_form_ui)
            .add_systems(OnExit(GameState::Setup), cleanup_form_ui)
            .add_systems(
                Update,
                (
                    field_focus_system,
                    field_typing_system,
                    confirm_setup_system,
                    form_display_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Setup)),
            );
    }
}

// ── Colour helpers ────────────────────────────────────────────────────────────

fn idle_color() -> Color {
    Color::WHITE
}
fn focus_color() -> Color {
    Color::srgb(0.0, 0.0, 1.0)
}
fn label_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}

// ── OnEnter(Setup): spawn UI ──────────────────────────────────────────────────

/// Spawn the setup screen.
///
/// Layout:
/// ```text
///   ┌──────────────────┐
///   │ 100              │  Planet Mass
///   └──────────────────┘
///   ┌──────────────────┐
///   │ 50               │  Planet Radius
///   └──────────────────┘
///   ┌──────────────────┐
///   │ 5                │  Ship Mass
///   └──────────────────┘
///   Press Enter to start the simulation
/// ```
pub fn setup_form_ui(mut commands: Commands, form: Res<SetupForm>, config: Res<SlingshotConfig>) {
    let font_size = config.hud_font_size;
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            BackgroundColor(Color::BLACK),
            SetupFormRoot,
        ))
        .with_children(|root| {
            for (row, which) in SetupField::ALL.into_iter().enumerate() {
                let top = 50.0 + 50.0 * row as f32;
                root.spawn((
                    Button,
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(50.0),
                        top: Val::Px(top),
                        min_width: Val::Px(INPUT_BOX_MIN_WIDTH),
                        height: Val::Px(30.0),
                        padding: UiRect::horizontal(Val::Px(5.0)),
                        align_items: AlignItems::Center,
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BorderColor::all(idle_color()),
                    which,
                ))
                .with_children(|field| {
                    field.spawn((
                        Text::new(form.field(which).text.clone()),
                        TextFont {
                            font_size,
                            ..default()
                        },
                        TextColor(idle_color()),
                        FieldText(which),
                    ));
                });

                root.spawn((
                    Text::new(which.label()),
                    TextFont {
                        font_size: font_size * 0.8,
                        ..default()
                    },
                    TextColor(label_color()),
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Px(50.0 + INPUT_BOX_MIN_WIDTH + 120.0),
                        top: Val::Px(top + 6.0),
                        ..default()
                    },
                ));
            }

            root.spawn((
                Text::new("Press Enter to start the simulation"),
                TextFont {
                    font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(50.0),
                    top: Val::Px(200.0),
                    ..default()
                },
            ));
        });
}

// ── OnExit(Setup): despawn UI ─────────────────────────────────────────────────

pub fn cleanup_form_ui(mut commands: Commands, query: Query<Entity, With<SetupFormRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

// ── Update (Setup only) ───────────────────────────────────────────────────────

/// On every left click, focus the clicked box (toggling it) and unfocus the rest.
pub fn field_focus_system(
    buttons: Res<ButtonInput<MouseButton>>,
    boxes: Query<(&Interaction, &SetupField)>,
    mut form: ResMut<SetupForm>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let pressed = boxes
        .iter()
        .find(|(interaction, _)| **interaction == Interaction::Pressed)
        .map(|(_, which)| *which);
    form.click(pressed);
}

/// Route typed characters and Backspace into the focused box.
pub fn field_typing_system(mut keys: MessageReader<KeyboardInput>, mut form: ResMut<SetupForm>) {
    for event in keys.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        let Some(field) = form.active_mut() else {
            continue;
        };
        match &event.logical_key {
            Key::Backspace => field.backspace(),
            Key::Enter => {}
            _ => {
                if let Some(text) = &event.text {
                    field.insert_text(text);
                }
            }
        }
    }
}

/// Enter starts the run with the current field values.
pub fn confirm_setup_system(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    form: Res<SetupForm>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !(keys.just_pressed(KeyCode::Enter) || keys.just_pressed(KeyCode::NumpadEnter)) {
        return;
    }
    let params = form.confirm();
    info!(
        "Starting simulation: planet mass {}, planet radius {}, ship mass {}",
        params.planet_mass, params.planet_radius, params.ship_mass
    );
    commands.insert_resource(params);
    next_state.set(GameState::Running);
}

/// Mirror `SetupForm` into the box text and focus colours.
pub fn form_display_system(
    form: Res<SetupForm>,
    mut boxes: Query<(&SetupField, &mut BorderColor)>,
    mut texts: Query<(&FieldText, &mut Text, &mut TextColor)>,
) {
    if !form.is_changed() {
        return;
    }
    for (which, mut border) in boxes.iter_mut() {
        let color = if form.field(*which).active {
            focus_color()
        } else {
            idle_color()
        };
        *border = BorderColor::all(color);
    }
    for (field_text, mut text, mut text_color) in texts.iter_mut() {
        let field = form.field(field_text.0);
        if text.0 != field.text {
            text.0 = field.text.clone();
        }
        text_color.0 = if field.active {
            focus_color()
        } else {
            idle_color()
        };
    }
}
