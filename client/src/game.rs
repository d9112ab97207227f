use bevy::prelude::*;
use sim::{CameraMode, CameraZoom, GameUpdateSet, IslandSimPlugin};

use crate::{
    audio::{load_sounds, play_sound_cues_system},
    camera::{fade_mode_label_system, follow_camera_system, spawn_camera, toggle_camera_mode_system},
    constants::SKY_COLOR,
    debug::{draw_debug_boxes_system, toggle_debug_mode_system, DebugMode},
    effects::{setup_splash_assets, sync_splash_visuals_system},
    input::movement_input_system,
    player::{
        controller::{character_transform_system, raft_model_system},
        setup::spawn_player,
    },
    world::{animate_water_system, face_palms_system, spawn_island, spawn_palms, spawn_water},
};

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(IslandSimPlugin)
            .insert_resource(ClearColor(SKY_COLOR))
            .init_resource::<CameraMode>()
            .init_resource::<CameraZoom>()
            .init_resource::<DebugMode>()
            .add_systems(
                Startup,
                (
                    setup_lighting,
                    spawn_camera,
                    spawn_island,
                    spawn_water,
                    spawn_palms,
                    spawn_player,
                    setup_splash_assets,
                    load_sounds,
                ),
            )
            .add_systems(
                Update,
                movement_input_system.in_set(GameUpdateSet::Input),
            )
            .add_systems(
                Update,
                (
                    toggle_camera_mode_system,
                    toggle_debug_mode_system,
                    play_sound_cues_system,
                )
                    .in_set(GameUpdateSet::Effects),
            )
            .add_systems(
                Update,
                (
                    character_transform_system,
                    raft_model_system,
                    sync_splash_visuals_system,
                    animate_water_system,
                    face_palms_system,
                    draw_debug_boxes_system,
                )
                    .in_set(GameUpdateSet::Rendering),
            )
            .add_systems(
                Update,
                (follow_camera_system, fade_mode_label_system).in_set(GameUpdateSet::Camera),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 400.0,
        ..default()
    });
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
