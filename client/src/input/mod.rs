pub mod data;
pub mod keyboard;

use bevy::prelude::*;
use sim::{
    input::{joystick_direction, MovementAxes},
    MovementIntent,
};

use crate::KeyMap;
use data::GameAction;
use keyboard::is_action_pressed;

/// Writes this frame's movement for the simulation. An active touch drag
/// wins over the keyboard.
pub fn movement_input_system(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    key_map: Res<KeyMap>,
    mut intent: ResMut<MovementIntent>,
) {
    if let Some(touch) = touches.iter().next() {
        intent.0 = joystick_direction(touch.distance());
        return;
    }

    let axes = MovementAxes {
        forward: is_action_pressed(GameAction::MoveForward, &keyboard_input, &key_map),
        backward: is_action_pressed(GameAction::MoveBackward, &keyboard_input, &key_map),
        left: is_action_pressed(GameAction::MoveLeft, &keyboard_input, &key_map),
        right: is_action_pressed(GameAction::MoveRight, &keyboard_input, &key_map),
    };
    intent.0 = axes.direction();
}
