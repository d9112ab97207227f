use bevy::prelude::*;

/// Frame stages, configured to run in declaration order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameUpdateSet {
    Input,
    Simulation,
    Effects,
    Rendering,
    Camera,
}
