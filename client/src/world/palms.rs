use bevy::prelude::*;
use sim::{camera::palm_yaw, Island, IslandConfig};

use crate::{
    camera::FollowCamera,
    constants::{PALM_SIZE, PALM_TEXTURE},
};

#[derive(Component)]
pub struct Palm;

pub fn spawn_palms(
    mut commands: Commands,
    island: Res<Island>,
    config: Res<IslandConfig>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let sprite = meshes.add(Rectangle::new(PALM_SIZE, PALM_SIZE));
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(PALM_TEXTURE)),
        alpha_mode: AlphaMode::Mask(0.5),
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let mut rng = config.rng();
    for position in island.spawn_points(config.palm_count, &mut rng) {
        commands
            .spawn((Palm, Transform::from_translation(position), Visibility::default()))
            .with_child((
                Mesh3d(sprite.clone()),
                MeshMaterial3d(material.clone()),
                // Pivot at the bottom edge of the sprite.
                Transform::from_xyz(0.0, PALM_SIZE / 2.0, 0.0),
            ));
    }
}

/// Palms turn part of the way toward the camera.
pub fn face_palms_system(
    camera: Query<&GlobalTransform, With<FollowCamera>>,
    mut palms: Query<&mut Transform, With<Palm>>,
) {
    let Ok(camera) = camera.single() else {
        return;
    };
    for mut transform in &mut palms {
        transform.rotation = Quat::from_rotation_y(palm_yaw(camera, transform.translation));
    }
}
