mod audio;
mod camera;
mod constants;
mod debug;
mod effects;
mod game;
mod input;
mod paths;
mod player;
mod world;

use std::{collections::BTreeMap, path::PathBuf};

use bevy::{prelude::*, window::PresentMode};
use clap::Parser;
use constants::{ISLAND_CONFIG_PATH, WINDOW_TITLE};
use input::{data::GameAction, keyboard::get_bindings};
use paths::get_game_folder_paths;
use serde::{Deserialize, Serialize};
use sim::{Island, IslandConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(
        short,
        long,
        help = "Island config file, defaults to <game_folder_path>/island.ron"
    )]
    config: Option<PathBuf>,

    #[arg(long, help = "Overrides the number of island cells")]
    cells: Option<u32>,

    #[arg(long, help = "Seed for a reproducible island")]
    seed: Option<u64>,

    #[arg(short, long)]
    game_folder_path: Option<String>,

    #[arg(
        short,
        long,
        help = "Allows overriding of the asset folder path, defaults to <game_folder_path>/data"
    )]
    assets_folder_path: Option<String>,
}

#[derive(Resource, Serialize, Deserialize)]
pub struct KeyMap {
    #[serde(default = "input::keyboard::default_key_map")]
    pub map: BTreeMap<GameAction, Vec<KeyCode>>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            map: input::keyboard::default_key_map(),
        }
    }
}

fn main() {
    let args = Args::parse();

    let game_folder_paths = get_game_folder_paths(args.game_folder_path, args.assets_folder_path);

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(ImagePlugin::default_nearest())
            .set(AssetPlugin {
                file_path: game_folder_paths
                    .assets_folder_path
                    .to_string_lossy()
                    .into_owned(),
                ..Default::default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            }),
    );

    // The log subscriber exists once the default plugins are built, so
    // config and generation messages below reach the console.
    info!(
        "Starting application with game folder: {}",
        game_folder_paths.game_folder_path.display()
    );

    let config_path = args
        .config
        .unwrap_or_else(|| game_folder_paths.game_folder_path.join(ISLAND_CONFIG_PATH));
    let mut config = IslandConfig::load_or_default(&config_path);
    if let Some(cells) = args.cells {
        config.target_cells = cells;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let island = match Island::generate(&config, &mut config.rng()) {
        Ok(island) => island,
        Err(err) => {
            error!("Failed to generate island: {err}");
            std::process::exit(1);
        }
    };

    app.insert_resource(get_bindings(&game_folder_paths))
        .insert_resource(island)
        .insert_resource(config)
        .insert_resource(game_folder_paths)
        .add_plugins(game::GamePlugin)
        .run();
}
