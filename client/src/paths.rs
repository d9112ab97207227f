use std::{env, path::PathBuf};

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct GameFolderPaths {
    /// Holds config files such as the island settings and key bindings.
    pub game_folder_path: PathBuf,
    /// Root handed to the asset server.
    pub assets_folder_path: PathBuf,
}

pub fn get_game_folder_paths(
    game_folder_path: Option<String>,
    assets_folder_path: Option<String>,
) -> GameFolderPaths {
    let mut paths = default_game_folder_paths();

    if let Some(game_data) = game_folder_path {
        paths.game_folder_path = game_data.into();
    }
    if let Some(game_assets) = assets_folder_path {
        paths.assets_folder_path = game_assets.into();
    }

    paths
}

fn home_dir() -> PathBuf {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(target_os = "windows")]
pub fn default_game_folder_paths() -> GameFolderPaths {
    let root = env::var_os("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(home_dir)
        .join("raft-island");
    GameFolderPaths {
        assets_folder_path: root.join("data"),
        game_folder_path: root,
    }
}

#[cfg(target_os = "macos")]
pub fn default_game_folder_paths() -> GameFolderPaths {
    let root = home_dir().join("Library/Application Support/raft-island");
    GameFolderPaths {
        assets_folder_path: root.join("data"),
        game_folder_path: root,
    }
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub fn default_game_folder_paths() -> GameFolderPaths {
    let data_home = env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| home_dir().join(".local/share"));
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| home_dir().join(".config"));
    GameFolderPaths {
        game_folder_path: config_home.join("raft-island"),
        assets_folder_path: data_home.join("raft-island/data"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_paths_override_defaults() {
        let paths = get_game_folder_paths(Some("/tmp/game".into()), None);
        assert_eq!(paths.game_folder_path, PathBuf::from("/tmp/game"));
        assert_eq!(
            paths.assets_folder_path,
            default_game_folder_paths().assets_folder_path
        );
    }
}
