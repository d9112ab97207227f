//! Voxel rendering of the generated island.

use bevy::prelude::*;
use sim::{
    terrain::{Grid, Island},
    GROUND_LAYER_1_ELEVATION,
};

use crate::constants::{CUBE_SIZE, DIRT_COLOR, GRASS_COLOR, SAND_COLOR};

#[derive(Component)]
pub struct IslandBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Grass,
    Sand,
    Dirt,
}

/// Blocks for one cell as `(kind, center height)`: a surface block, dirt
/// below it, and a grass block on top for raised cells.
pub fn column_blocks(grid: &Grid, cell: IVec2) -> Vec<(BlockKind, f32)> {
    if !grid.is_filled(cell) {
        return Vec::new();
    }

    let surface_y = GROUND_LAYER_1_ELEVATION - CUBE_SIZE / 2.0;
    let surface = if grid.is_edge(cell) {
        BlockKind::Sand
    } else {
        BlockKind::Grass
    };

    let mut blocks = vec![(surface, surface_y), (BlockKind::Dirt, surface_y - CUBE_SIZE)];
    if grid.is_upper(cell) {
        blocks.push((BlockKind::Grass, surface_y + CUBE_SIZE));
    }
    blocks
}

pub fn spawn_island(
    mut commands: Commands,
    island: Res<Island>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let cube = meshes.add(Cuboid::new(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE));
    let grass = materials.add(GRASS_COLOR);
    let sand = materials.add(SAND_COLOR);
    let dirt = materials.add(DIRT_COLOR);

    let scale = island.cell_size() / CUBE_SIZE;
    let mut count = 0;
    for cell in island.grid().filled_cells() {
        let xz = island.cell_to_world(cell);
        for (kind, y) in column_blocks(island.grid(), cell) {
            let material = match kind {
                BlockKind::Grass => grass.clone(),
                BlockKind::Sand => sand.clone(),
                BlockKind::Dirt => dirt.clone(),
            };
            commands.spawn((
                IslandBlock,
                Mesh3d(cube.clone()),
                MeshMaterial3d(material),
                Transform::from_xyz(xz.x, y, xz.y).with_scale(Vec3::new(scale, 1.0, scale)),
            ));
            count += 1;
        }
    }
    info!("Spawned {count} island blocks");
}
