use crate::{constants::BINDS_PATH, input::data::GameAction, paths::GameFolderPaths, KeyMap};
use bevy::prelude::*;
use ron::{from_str, ser::PrettyConfig};
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::Path,
};

fn write_keybindings_to_path(key_map: &KeyMap, binds_path: &Path) -> Result<(), std::io::Error> {
    let pretty_config = PrettyConfig::new()
        .with_depth_limit(3)
        .with_separate_tuple_members(true)
        .with_enumerate_arrays(true);

    let serialized = ron::ser::to_string_pretty(key_map, pretty_config)
        .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "serialization failed"))?;
    if let Some(parent) = binds_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(binds_path)?;
    file.write_all(serialized.as_bytes())
}

pub fn is_action_pressed(
    action: GameAction,
    keyboard_input: &ButtonInput<KeyCode>,
    key_map: &KeyMap,
) -> bool {
    key_map
        .map
        .get(&action)
        .is_some_and(|keys| keyboard_input.any_pressed(keys.iter().copied()))
}

pub fn is_action_just_pressed(
    action: GameAction,
    keyboard_input: &ButtonInput<KeyCode>,
    key_map: &KeyMap,
) -> bool {
    key_map
        .map
        .get(&action)
        .is_some_and(|keys| keyboard_input.any_just_pressed(keys.iter().copied()))
}

pub(crate) fn default_key_map() -> BTreeMap<GameAction, Vec<KeyCode>> {
    let mut map = BTreeMap::new();
    map.insert(GameAction::MoveForward, vec![KeyCode::KeyW, KeyCode::ArrowUp]);
    map.insert(
        GameAction::MoveBackward,
        vec![KeyCode::KeyS, KeyCode::ArrowDown],
    );
    map.insert(GameAction::MoveLeft, vec![KeyCode::KeyA, KeyCode::ArrowLeft]);
    map.insert(
        GameAction::MoveRight,
        vec![KeyCode::KeyD, KeyCode::ArrowRight],
    );
    map.insert(GameAction::ToggleCameraMode, vec![KeyCode::KeyP]);
    map.insert(GameAction::ToggleDebugMode, vec![KeyCode::Tab]);
    map
}

/// Reads the key bindings from the game folder, writing the defaults there
/// when the file is missing or unreadable.
pub fn get_bindings(game_folder_paths: &GameFolderPaths) -> KeyMap {
    let binds_path = game_folder_paths.game_folder_path.join(BINDS_PATH);

    let loaded = fs::read_to_string(&binds_path)
        .ok()
        .and_then(|content| from_str::<KeyMap>(&content).ok());
    if let Some(key_map) = loaded {
        return key_map;
    }

    let key_map = KeyMap::default();
    if let Err(e) = write_keybindings_to_path(&key_map, &binds_path) {
        error!(
            "Failed to create default keybindings file at {:?}: {}",
            binds_path, e
        );
    }
    key_map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_key_triggers_bound_action() {
        let key_map = KeyMap::default();
        let mut input = ButtonInput::<KeyCode>::default();
        input.press(KeyCode::ArrowUp);

        assert!(is_action_pressed(GameAction::MoveForward, &input, &key_map));
        assert!(is_action_just_pressed(GameAction::MoveForward, &input, &key_map));
        assert!(!is_action_pressed(GameAction::MoveLeft, &input, &key_map));
    }

    #[test]
    fn missing_bindings_fall_back_to_defaults() {
        let key_map: KeyMap = from_str("()").unwrap();
        assert_eq!(key_map.map, default_key_map());
    }

    #[test]
    fn bindings_survive_a_write_and_read() {
        let dir = std::env::temp_dir().join(format!("raft-island-binds-{}", std::process::id()));
        let paths = GameFolderPaths {
            game_folder_path: dir.clone(),
            assets_folder_path: dir.clone(),
        };

        let mut key_map = KeyMap::default();
        key_map
            .map
            .insert(GameAction::ToggleDebugMode, vec![KeyCode::F3]);
        write_keybindings_to_path(&key_map, &dir.join(BINDS_PATH)).unwrap();

        let loaded = get_bindings(&paths);
        assert_eq!(loaded.map, key_map.map);
        let _ = fs::remove_dir_all(dir);
    }
}
