pub mod controller;
pub mod setup;

use bevy::prelude::*;

/// The character driven by local input.
#[derive(Component)]
pub struct PlayerCharacter;

/// Root of the raft model, mirrored from the player's raft each frame.
#[derive(Component)]
pub struct RaftModel;

#[derive(Component)]
pub struct RaftFlag;
