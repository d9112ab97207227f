//! Follow camera with a perspective/orthographic toggle.

use bevy::{
    input::mouse::{MouseScrollUnit, MouseWheel},
    prelude::*,
    render::camera::ScalingMode,
};
use sim::{
    camera::{FAR_PLANE, NEAR_PLANE, ORTHOGRAPHIC_FRUSTUM_SIZE, PERSPECTIVE_FOV_DEGREES},
    CameraMode, CameraZoom, Character,
};

use crate::{
    constants::{MODE_LABEL_FADED_ALPHA, MODE_LABEL_FADE_DELAY, SCROLL_PIXELS_PER_LINE},
    input::{data::GameAction, keyboard::is_action_just_pressed},
    player::PlayerCharacter,
    KeyMap,
};

#[derive(Component)]
pub struct FollowCamera;

/// On-screen label naming the active camera mode.
#[derive(Component)]
pub struct CameraModeLabel {
    shown_at: f32,
}

fn projection_for(mode: CameraMode) -> Projection {
    match mode {
        CameraMode::Perspective => Projection::Perspective(PerspectiveProjection {
            fov: PERSPECTIVE_FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        CameraMode::Orthographic => Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: ORTHOGRAPHIC_FRUSTUM_SIZE,
            },
            far: FAR_PLANE,
            ..OrthographicProjection::default_3d()
        }),
    }
}

fn mode_label(mode: CameraMode) -> &'static str {
    match mode {
        CameraMode::Perspective => "Perspective",
        CameraMode::Orthographic => "Orthographic",
    }
}

pub fn spawn_camera(mut commands: Commands, mode: Res<CameraMode>) {
    commands.spawn((
        FollowCamera,
        Camera3d::default(),
        projection_for(*mode),
        mode.follow_transform(Vec3::ZERO),
    ));

    commands.spawn((
        CameraModeLabel { shown_at: 0.0 },
        Text::new(mode_label(*mode)),
        TextFont::from_font_size(16.0),
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(12.0),
            top: Val::Px(12.0),
            padding: UiRect::all(Val::Px(4.0)),
            ..default()
        },
        BackgroundColor(Color::BLACK.with_alpha(0.5)),
    ));
}

pub fn toggle_camera_mode_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    key_map: Res<KeyMap>,
    time: Res<Time>,
    mut mode: ResMut<CameraMode>,
    mut zoom: ResMut<CameraZoom>,
    mut cameras: Query<&mut Projection, With<FollowCamera>>,
    mut labels: Query<(&mut Text, &mut CameraModeLabel)>,
) {
    if !is_action_just_pressed(GameAction::ToggleCameraMode, &keyboard_input, &key_map) {
        return;
    }

    *mode = mode.toggled();
    *zoom = CameraZoom::for_mode(*mode);
    for mut projection in &mut cameras {
        *projection = projection_for(*mode);
    }
    for (mut text, mut label) in &mut labels {
        text.0 = mode_label(*mode).to_string();
        label.shown_at = time.elapsed_secs();
    }
    info!("Camera mode switched to: {:?}", *mode);
}

/// Wheel lines scrolled this frame, positive toward the screen.
fn scrolled_lines(events: &mut EventReader<MouseWheel>) -> f32 {
    events
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y,
            MouseScrollUnit::Pixel => event.y / SCROLL_PIXELS_PER_LINE,
        })
        .sum()
}

/// Keeps the camera at the mode's offset from the player, looking at it.
/// The wheel zooms: perspective moves the camera along its offset,
/// orthographic widens or narrows the view.
pub fn follow_camera_system(
    time: Res<Time>,
    mode: Res<CameraMode>,
    mut zoom: ResMut<CameraZoom>,
    mut wheel: EventReader<MouseWheel>,
    player: Query<&Character, With<PlayerCharacter>>,
    mut cameras: Query<(&mut Transform, &mut Projection), With<FollowCamera>>,
) {
    let lines = scrolled_lines(&mut wheel);
    if lines != 0.0 {
        zoom.scroll(lines);
    }
    zoom.update(time.delta_secs());

    let Ok(character) = player.single() else {
        return;
    };
    for (mut transform, mut projection) in &mut cameras {
        *transform = mode.zoomed_follow_transform(character.position(), &zoom);
        if let Projection::Orthographic(ortho) = &mut *projection {
            ortho.scaling_mode = ScalingMode::FixedVertical {
                viewport_height: zoom.viewport_height(*mode),
            };
        }
    }
}

pub fn fade_mode_label_system(
    time: Res<Time>,
    mut labels: Query<(&CameraModeLabel, &mut TextColor)>,
) {
    for (label, mut color) in &mut labels {
        let alpha = if time.elapsed_secs() - label.shown_at < MODE_LABEL_FADE_DELAY {
            1.0
        } else {
            MODE_LABEL_FADED_ALPHA
        };
        color.0.set_alpha(alpha);
    }
}
