//! Tab toggles wireframe boxes around the character, palms and raft.

use bevy::prelude::*;
use sim::{Character, CHARACTER_SIZE, RAFT_HALF_SIZE};

use crate::{
    constants::{DEBUG_BOX_COLOR, PALM_BOX_SIZE},
    input::{data::GameAction, keyboard::is_action_just_pressed},
    world::palms::Palm,
    KeyMap,
};

#[derive(Resource, Default)]
pub struct DebugMode {
    enabled: bool,
}

impl DebugMode {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

pub fn toggle_debug_mode_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    key_map: Res<KeyMap>,
    mut debug_mode: ResMut<DebugMode>,
) {
    if is_action_just_pressed(GameAction::ToggleDebugMode, &keyboard_input, &key_map) {
        debug_mode.toggle();
        if debug_mode.is_enabled() {
            info!("Debug mode enabled");
        } else {
            info!("Debug mode disabled");
        }
    }
}

pub fn draw_debug_boxes_system(
    debug_mode: Res<DebugMode>,
    characters: Query<&Character>,
    palms: Query<&Transform, With<Palm>>,
    mut gizmos: Gizmos,
) {
    if !debug_mode.is_enabled() {
        return;
    }

    for character in &characters {
        gizmos.cuboid(
            Transform::from_translation(character.position())
                .with_scale(Vec3::splat(CHARACTER_SIZE)),
            DEBUG_BOX_COLOR,
        );

        let raft = character.raft();
        if raft.is_visible() {
            gizmos.cuboid(
                Transform::from_translation(raft.position())
                    .with_rotation(raft.rotation())
                    .with_scale(Vec3::new(2.0 * RAFT_HALF_SIZE, 0.25, 2.0 * RAFT_HALF_SIZE)),
                DEBUG_BOX_COLOR,
            );
        }
    }

    for transform in &palms {
        gizmos.cuboid(
            Transform::from_translation(transform.translation + Vec3::Y * PALM_BOX_SIZE)
                .with_scale(Vec3::splat(PALM_BOX_SIZE)),
            DEBUG_BOX_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_mode_starts_off_and_toggles() {
        let mut mode = DebugMode::default();
        assert!(!mode.is_enabled());
        mode.toggle();
        assert!(mode.is_enabled());
        mode.toggle();
        assert!(!mode.is_enabled());
    }
}
