use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use sim::{Character, Island, CHARACTER_HEIGHT_OFFSET, CHARACTER_SIZE};

use super::{PlayerCharacter, RaftFlag, RaftModel};
use crate::{
    constants::{
        DARK_PLANK_COLOR, EYE_COLOR, FACE_COLOR, FLAG_COLOR, PLANK_COLOR, PLANK_COUNT,
        PLANK_HEIGHT, PLANK_LENGTH, PLANK_SPACING, PLANK_WIDTH, POST_COLOR,
    },
    effects::SplashVisuals,
};

/// Cell nearest the island center that is land, as a world position.
fn spawn_position(island: &Island) -> Vec3 {
    let grid = island.grid();
    let center = Vec2::splat(grid.center_offset());
    let cell = grid
        .filled_cells()
        .min_by(|a, b| {
            let da = a.as_vec2().distance_squared(center);
            let db = b.as_vec2().distance_squared(center);
            da.total_cmp(&db)
        })
        .unwrap_or(IVec2::ZERO);
    let xz = island.cell_to_world(cell);
    let ground = island.sample_cell(cell).elevation();
    Vec3::new(xz.x, ground + CHARACTER_HEIGHT_OFFSET, xz.y)
}

pub fn spawn_player(
    mut commands: Commands,
    island: Res<Island>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let position = spawn_position(&island);

    let face = meshes.add(Circle::new(CHARACTER_SIZE / 2.0));
    let eye = meshes.add(Circle::new(CHARACTER_SIZE * 0.06));
    let face_material = materials.add(StandardMaterial {
        base_color: FACE_COLOR,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let eye_material = materials.add(StandardMaterial {
        base_color: EYE_COLOR,
        unlit: true,
        ..default()
    });

    let eye_y = CHARACTER_SIZE * 0.11;
    let eye_x = CHARACTER_SIZE * 0.15;
    commands
        .spawn((
            PlayerCharacter,
            Character::new(position),
            SplashVisuals::default(),
            Mesh3d(face),
            MeshMaterial3d(face_material),
            Transform::from_translation(position),
        ))
        .with_children(|parent| {
            for x in [-eye_x, eye_x] {
                parent.spawn((
                    Mesh3d(eye.clone()),
                    MeshMaterial3d(eye_material.clone()),
                    Transform::from_xyz(x, eye_y, 0.01),
                ));
            }
        });

    spawn_raft_model(&mut commands, &mut meshes, &mut materials);
    info!("Player spawned at {:?}", position);
}

fn spawn_raft_model(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let plank = materials.add(StandardMaterial {
        base_color: PLANK_COLOR,
        perceptual_roughness: 0.9,
        metallic: 0.1,
        ..default()
    });
    let dark_plank = materials.add(StandardMaterial {
        base_color: DARK_PLANK_COLOR,
        perceptual_roughness: 0.85,
        metallic: 0.15,
        ..default()
    });
    let post = materials.add(StandardMaterial {
        base_color: POST_COLOR,
        perceptual_roughness: 0.7,
        metallic: 0.2,
        ..default()
    });
    let flag = materials.add(StandardMaterial {
        base_color: FLAG_COLOR,
        perceptual_roughness: 0.8,
        metallic: 0.1,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let total_width =
        PLANK_COUNT as f32 * PLANK_WIDTH + (PLANK_COUNT - 1) as f32 * PLANK_SPACING;
    let plank_mesh = meshes.add(Cuboid::new(PLANK_WIDTH, PLANK_HEIGHT, PLANK_LENGTH));
    let cross_mesh = meshes.add(Cuboid::new(total_width, PLANK_HEIGHT, PLANK_WIDTH));
    let post_mesh = meshes.add(Cylinder::new(0.125, 0.8));
    let flag_mesh = meshes.add(Rectangle::new(0.4, 0.3));

    commands
        .spawn((
            RaftModel,
            Transform::from_xyz(0.0, sim::RAFT_SUBMERGED_Y, 0.0),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            for i in 0..PLANK_COUNT {
                let x = i as f32 * (PLANK_WIDTH + PLANK_SPACING) - total_width / 2.0
                    + PLANK_WIDTH / 2.0;
                let material = if i % 2 == 0 { &plank } else { &dark_plank };
                parent.spawn((
                    Mesh3d(plank_mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_xyz(x, 0.0, 0.0),
                ));
            }
            for z in [PLANK_LENGTH / 3.0, -PLANK_LENGTH / 3.0] {
                parent.spawn((
                    Mesh3d(cross_mesh.clone()),
                    MeshMaterial3d(dark_plank.clone()),
                    Transform::from_xyz(0.0, -PLANK_HEIGHT, z),
                ));
            }
            parent.spawn((
                Mesh3d(post_mesh),
                MeshMaterial3d(post),
                Transform::from_xyz(0.0, 0.3, -1.3),
            ));
            parent.spawn((
                RaftFlag,
                Mesh3d(flag_mesh),
                MeshMaterial3d(flag),
                Transform::from_xyz(0.0, 0.6, -1.3)
                    .with_rotation(Quat::from_rotation_y(FRAC_PI_2)),
            ));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim::{IslandConfig, TerrainQuery};

    #[test]
    fn player_starts_on_land() {
        for seed in 0..5 {
            let config = IslandConfig {
                target_cells: 80,
                seed: Some(seed),
                ..Default::default()
            };
            let island = Island::generate(&config, &mut config.rng()).unwrap();
            let position = spawn_position(&island);
            assert!(!island.sample(position.x, position.z).is_water());
            assert_eq!(
                position.y,
                island.height_at(position.x, position.z) + CHARACTER_HEIGHT_OFFSET
            );
        }
    }
}
