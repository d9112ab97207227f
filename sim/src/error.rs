use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IslandError {
    #[error("target cell count must be between 1 and {max}, got {got}")]
    InvalidCellCount { got: u32, max: u32 },

    #[error("cell size must be a positive finite number, got {0}")]
    InvalidCellSize(f32),

    #[error("second layer ratio must lie within [0, 1], got {0}")]
    InvalidLayerRatio(f32),

    /// Generation kept bouncing between trimming and growing. Unreachable
    /// for well-formed ovals, but capped so startup cannot hang.
    #[error("island generation did not converge during {stage} after {iterations} passes")]
    GenerationNonconvergence {
        stage: &'static str,
        iterations: usize,
    },

    #[error("failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config format: {0}")]
    ConfigFormat(String),
}
