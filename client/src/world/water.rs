//! Sea plane with vertex waves recomputed on the CPU every frame.

use bevy::{prelude::*, render::mesh::VertexAttributeValues};
use sim::{
    water::{wave_height, WATER_PLANE_SIZE, WATER_PLANE_SUBDIVISIONS},
    WATER_LEVEL,
};

use crate::constants::WATER_COLOR;

#[derive(Component)]
pub struct WaterSurface {
    /// Undisplaced vertex positions of the plane.
    base: Vec<[f32; 3]>,
}

pub fn spawn_water(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = Plane3d::default()
        .mesh()
        .size(WATER_PLANE_SIZE, WATER_PLANE_SIZE)
        .subdivisions(WATER_PLANE_SUBDIVISIONS)
        .build();

    let base = match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
        Some(VertexAttributeValues::Float32x3(positions)) => positions.clone(),
        _ => Vec::new(),
    };

    commands.spawn((
        WaterSurface { base },
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: WATER_COLOR,
            alpha_mode: AlphaMode::Blend,
            perceptual_roughness: 0.3,
            metallic: 0.1,
            ..default()
        })),
        Transform::from_xyz(0.0, WATER_LEVEL, 0.0),
    ));
}

pub fn animate_water_system(
    time: Res<Time>,
    mut meshes: ResMut<Assets<Mesh>>,
    surfaces: Query<(&WaterSurface, &Mesh3d)>,
) {
    let t = time.elapsed_secs();
    for (surface, mesh) in &surfaces {
        let Some(mesh) = meshes.get_mut(&mesh.0) else {
            continue;
        };
        if let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
        {
            for (position, base) in positions.iter_mut().zip(&surface.base) {
                position[1] = base[1] + wave_height(base[0], base[2], t);
            }
        }
        mesh.compute_normals();
    }
}
