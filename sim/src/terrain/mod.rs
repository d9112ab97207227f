pub mod generation;
pub mod grid;
pub mod height;

use bevy::prelude::*;
use rand::{seq::SliceRandom, Rng};

pub use generation::generate_grid;
pub use grid::Grid;
pub use height::{TerrainQuery, TerrainSample};

use crate::{config::IslandConfig, error::IslandError};

/// Generated island, immutable for the rest of the session.
#[derive(Resource, Debug, Clone)]
pub struct Island {
    grid: Grid,
    cell_size: f32,
}

impl Island {
    pub fn generate(config: &IslandConfig, rng: &mut impl Rng) -> Result<Self, IslandError> {
        config.validate()?;
        let target = config.target_cells as usize;
        let upper_target = (target as f32 * config.second_layer_ratio).floor() as usize;
        let grid = generate_grid(target, upper_target, rng)?;
        Ok(Self::from_grid(grid, config.cell_size))
    }

    pub fn from_grid(grid: Grid, cell_size: f32) -> Self {
        Self { grid, cell_size }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World XZ position of a cell center.
    pub fn cell_to_world(&self, cell: IVec2) -> Vec2 {
        let offset = self.grid.center_offset();
        Vec2::new(
            (cell.x as f32 - offset) * self.cell_size,
            (cell.y as f32 - offset) * self.cell_size,
        )
    }

    /// Nearest cell to a world XZ position. May lie outside the grid.
    pub fn world_to_cell(&self, x: f32, z: f32) -> IVec2 {
        let offset = self.grid.center_offset();
        IVec2::new(
            (x / self.cell_size + offset).round() as i32,
            (z / self.cell_size + offset).round() as i32,
        )
    }

    pub fn sample_cell(&self, cell: IVec2) -> TerrainSample {
        if self.grid.is_upper(cell) {
            TerrainSample::GroundLayer2
        } else if self.grid.is_filled(cell) {
            TerrainSample::GroundLayer1
        } else {
            TerrainSample::Water
        }
    }

    /// Picks up to `count` distinct land cells and returns their standing
    /// positions, for decorations such as palms.
    pub fn spawn_points(&self, count: usize, rng: &mut impl Rng) -> Vec<Vec3> {
        let mut cells: Vec<IVec2> = self.grid.filled_cells().collect();
        cells.shuffle(rng);
        cells
            .into_iter()
            .take(count)
            .map(|cell| {
                let xz = self.cell_to_world(cell);
                Vec3::new(xz.x, self.sample_cell(cell).elevation(), xz.y)
            })
            .collect()
    }
}

impl TerrainQuery for Island {
    fn sample(&self, x: f32, z: f32) -> TerrainSample {
        self.sample_cell(self.world_to_cell(x, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use generation::{enclosed_water, land_components};
    use rand::{rngs::StdRng, SeedableRng};

    fn island(target: u32, seed: u64) -> Island {
        let config = IslandConfig {
            target_cells: target,
            seed: Some(seed),
            ..Default::default()
        };
        Island::generate(&config, &mut config.rng()).unwrap()
    }

    #[test]
    fn cell_world_mapping_round_trips() {
        let island = island(100, 1);
        for cell in island.grid().cells() {
            let world = island.cell_to_world(cell);
            assert_eq!(island.world_to_cell(world.x, world.y), cell);
        }
    }

    #[test]
    fn sample_follows_layer_priority() {
        let island = island(300, 4);
        let grid = island.grid();
        for cell in grid.cells() {
            let world = island.cell_to_world(cell);
            let expected = if grid.is_upper(cell) {
                TerrainSample::GroundLayer2
            } else if grid.is_filled(cell) {
                TerrainSample::GroundLayer1
            } else {
                TerrainSample::Water
            };
            assert_eq!(island.sample(world.x, world.y), expected);
        }
    }

    #[test]
    fn far_away_positions_are_water() {
        let island = island(50, 2);
        assert_eq!(island.sample(10_000.0, -10_000.0), TerrainSample::Water);
        assert_eq!(island.height_at(-500.0, 0.0), TerrainSample::Water.elevation());
    }

    #[test]
    fn queries_are_idempotent() {
        let island = island(120, 8);
        let first = island.sample(0.3, -1.7);
        for _ in 0..10 {
            assert_eq!(island.sample(0.3, -1.7), first);
        }
    }

    #[test]
    fn walking_outward_ends_in_water_and_inward_finds_land() {
        let island = island(200, 6);
        assert!(enclosed_water(island.grid()).is_empty());
        assert_eq!(land_components(island.grid()).len(), 1);

        let step = island.cell_size();
        for direction in [Vec2::X, Vec2::NEG_X, Vec2::Y, Vec2::NEG_Y] {
            let mut position = Vec2::ZERO;
            let mut reached_water = false;
            for _ in 0..island.grid().size() {
                position += direction * step;
                if island.sample(position.x, position.y).is_water() {
                    reached_water = true;
                    break;
                }
            }
            assert!(reached_water, "no water towards {direction}");
        }
    }

    #[test]
    fn invalid_config_is_reported() {
        let config = IslandConfig {
            target_cells: 0,
            ..Default::default()
        };
        let result = Island::generate(&config, &mut StdRng::seed_from_u64(0));
        assert!(matches!(result, Err(IslandError::InvalidCellCount { .. })));
    }

    #[test]
    fn spawn_points_stand_on_land() {
        let island = island(150, 3);
        let mut rng = StdRng::seed_from_u64(12);
        let points = island.spawn_points(5, &mut rng);
        assert_eq!(points.len(), 5);
        for point in points {
            let sample = island.sample(point.x, point.z);
            assert!(!sample.is_water());
            assert_eq!(point.y, sample.elevation());
        }
    }
}
