//! Simulation core of the raft island toy.
//!
//! Everything in here is renderer agnostic: island generation, terrain
//! queries, the character/raft state machine and the splash effects. The
//! Bevy client mirrors this state into meshes every frame.

pub mod camera;
pub mod config;
pub mod constants;
pub mod effects;
pub mod entities;
pub mod error;
pub mod input;
pub mod plugin;
pub mod sets;
pub mod terrain;
pub mod water;

pub use camera::{CameraMode, CameraZoom, ViewPoint};
pub use config::IslandConfig;
pub use constants::*;
pub use effects::{SoundCue, SoundSink, SplashDirection, SplashEffect};
pub use entities::{Character, Raft, Transition, VerticalState};
pub use error::IslandError;
pub use plugin::{IslandSimPlugin, MovementIntent};
pub use sets::GameUpdateSet;
pub use terrain::{Island, TerrainQuery, TerrainSample};
