use serde::{Deserialize, Serialize};

use crate::constants::{GROUND_LAYER_1_ELEVATION, GROUND_LAYER_2_ELEVATION, WATER_ELEVATION};

/// What lies under a world position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainSample {
    Water,
    GroundLayer1,
    GroundLayer2,
}

impl TerrainSample {
    /// Standing height on top of this terrain.
    pub fn elevation(self) -> f32 {
        match self {
            TerrainSample::Water => WATER_ELEVATION,
            TerrainSample::GroundLayer1 => GROUND_LAYER_1_ELEVATION,
            TerrainSample::GroundLayer2 => GROUND_LAYER_2_ELEVATION,
        }
    }

    pub fn is_water(self) -> bool {
        self == TerrainSample::Water
    }
}

/// Anything that can answer terrain queries at a world position.
pub trait TerrainQuery {
    fn sample(&self, x: f32, z: f32) -> TerrainSample;

    fn height_at(&self, x: f32, z: f32) -> f32 {
        self.sample(x, z).elevation()
    }
}
