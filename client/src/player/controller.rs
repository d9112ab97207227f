use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use sim::{camera::billboard_yaw, Character};

use super::{PlayerCharacter, RaftFlag, RaftModel};
use crate::camera::FollowCamera;

/// Places the character billboard and turns it toward the camera.
pub fn character_transform_system(
    camera: Query<&GlobalTransform, With<FollowCamera>>,
    mut characters: Query<(&Character, &mut Transform), Without<FollowCamera>>,
) {
    let yaw = camera.single().map(billboard_yaw).unwrap_or(0.0);
    for (character, mut transform) in &mut characters {
        transform.translation = character.position();
        transform.rotation = Quat::from_rotation_y(yaw);
    }
}

/// Mirrors the player's raft: placement, heading, visibility and flag.
pub fn raft_model_system(
    player: Query<&Character, With<PlayerCharacter>>,
    mut rafts: Query<(&mut Transform, &mut Visibility), (With<RaftModel>, Without<RaftFlag>)>,
    mut flags: Query<&mut Transform, (With<RaftFlag>, Without<RaftModel>)>,
) {
    let Ok(character) = player.single() else {
        return;
    };
    let raft = character.raft();

    for (mut transform, mut visibility) in &mut rafts {
        transform.translation = raft.position();
        transform.rotation = raft.rotation();
        *visibility = if raft.is_visible() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    for mut transform in &mut flags {
        transform.rotation =
            Quat::from_rotation_y(FRAC_PI_2) * Quat::from_rotation_z(raft.flag_angle());
    }
}
