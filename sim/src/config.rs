//! Island generation settings, stored as RON next to the key bindings.

use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use bevy::prelude::*;
use bevy_log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};

use crate::{error::IslandError, MAX_TARGET_CELLS};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IslandConfig {
    /// Exact number of first layer cells the island ends up with.
    pub target_cells: u32,
    /// World size of one grid cell.
    pub cell_size: f32,
    /// Fraction of `target_cells` raised onto the second layer.
    pub second_layer_ratio: f32,
    /// Fixed seed for reproducible islands, random when absent.
    pub seed: Option<u64>,
    /// Number of palms scattered over the island.
    pub palm_count: usize,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            target_cells: 100,
            cell_size: 1.0,
            second_layer_ratio: 0.3,
            seed: None,
            palm_count: 3,
        }
    }
}

impl IslandConfig {
    pub fn validate(&self) -> Result<(), IslandError> {
        if self.target_cells == 0 || self.target_cells > MAX_TARGET_CELLS {
            return Err(IslandError::InvalidCellCount {
                got: self.target_cells,
                max: MAX_TARGET_CELLS,
            });
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(IslandError::InvalidCellSize(self.cell_size));
        }
        if !(0.0..=1.0).contains(&self.second_layer_ratio) {
            return Err(IslandError::InvalidLayerRatio(self.second_layer_ratio));
        }
        Ok(())
    }

    /// Random source for generation, seeded when the config asks for it.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, IslandError> {
        let content = fs::read_to_string(path).map_err(|source| IslandError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        ron::de::from_str(&content).map_err(|e| IslandError::ConfigFormat(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<(), IslandError> {
        let pretty_config = PrettyConfig::new().with_depth_limit(2);
        let serialized = ron::ser::to_string_pretty(self, pretty_config)
            .map_err(|e| IslandError::ConfigFormat(e.to_string()))?;

        let io_error = |source| IslandError::ConfigIo {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let mut file = File::create(path).map_err(io_error)?;
        file.write_all(serialized.as_bytes()).map_err(io_error)
    }

    /// Reads the config at `path`, falling back to (and writing out) the
    /// defaults when the file is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded island config from {:?}", path);
                config
            }
            Err(err) => {
                warn!("Using default island config ({err})");
                let config = Self::default();
                if let Err(e) = config.save(path) {
                    warn!("Failed to write default island config: {e}");
                }
                config
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(IslandConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_cells_is_rejected() {
        let config = IslandConfig {
            target_cells: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(IslandError::InvalidCellCount { got: 0, .. })
        ));
    }

    #[test]
    fn bad_cell_size_and_ratio_are_rejected() {
        let config = IslandConfig {
            cell_size: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(IslandError::InvalidCellSize(_))
        ));

        let config = IslandConfig {
            second_layer_ratio: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(IslandError::InvalidLayerRatio(_))
        ));
    }

    #[test]
    fn partial_ron_falls_back_to_defaults() {
        let config: IslandConfig = ron::de::from_str("(target_cells: 42)").unwrap();
        assert_eq!(config.target_cells, 42);
        assert_eq!(config.cell_size, 1.0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        use rand::Rng;

        let config = IslandConfig {
            seed: Some(9),
            ..Default::default()
        };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
