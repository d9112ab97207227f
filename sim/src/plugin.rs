//! Bevy wiring for the simulation core.

use bevy::prelude::*;
use bevy_log::info;

use crate::{
    effects::SoundCue,
    entities::{Character, Transition},
    sets::GameUpdateSet,
    terrain::Island,
};

/// Movement requested by the input layer this frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementIntent(pub Vec3);

/// Steps every [`Character`] once per frame against the [`Island`]
/// resource and forwards splash sounds as [`SoundCue`] events.
///
/// The island is inserted by the app after generation; characters are not
/// updated until it exists.
pub struct IslandSimPlugin;

impl Plugin for IslandSimPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SoundCue>()
            .init_resource::<MovementIntent>()
            .configure_sets(
                Update,
                (
                    GameUpdateSet::Input,
                    GameUpdateSet::Simulation,
                    GameUpdateSet::Effects,
                    GameUpdateSet::Rendering,
                    GameUpdateSet::Camera,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                update_characters.in_set(GameUpdateSet::Simulation),
            );
    }
}

fn update_characters(
    time: Res<Time>,
    island: Option<Res<Island>>,
    intent: Res<MovementIntent>,
    mut characters: Query<&mut Character>,
    mut sounds: EventWriter<SoundCue>,
) {
    let Some(island) = island else {
        return;
    };

    let delta = time.delta_secs();
    for mut character in &mut characters {
        character.set_movement(intent.0);
        match character.update(delta, &*island, &mut sounds) {
            Transition::EnteredWater => info!("Character took to the water"),
            Transition::LeftWater => info!("Character came ashore"),
            Transition::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{config::IslandConfig, entities::Raft};

    fn test_app() -> App {
        let config = IslandConfig {
            target_cells: 60,
            seed: Some(21),
            ..Default::default()
        };
        let island = Island::generate(&config, &mut config.rng()).unwrap();

        let mut app = App::new();
        app.init_resource::<Time>()
            .add_plugins(IslandSimPlugin)
            .insert_resource(island);
        app
    }

    fn step(app: &mut App) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(16));
        app.update();
    }

    #[test]
    fn entering_water_emits_one_sound() {
        let mut app = test_app();
        let character = app
            .world_mut()
            .spawn(Character::with_raft(
                Vec3::new(500.0, 1.0, 500.0),
                Raft::with_seed(1),
            ))
            .id();

        step(&mut app);
        step(&mut app);

        let character = app.world().get::<Character>(character).unwrap();
        assert!(character.is_on_water());
        assert!(character.raft().is_visible());
        assert_eq!(app.world().resource::<Events<SoundCue>>().len(), 1);
    }

    #[test]
    fn movement_intent_drives_characters() {
        let mut app = test_app();
        let character = app.world_mut().spawn(Character::new(Vec3::ZERO)).id();
        app.insert_resource(MovementIntent(Vec3::X));

        step(&mut app);
        step(&mut app);

        let position = app.world().get::<Character>(character).unwrap().position();
        assert!(position.x > 0.0);
        assert_eq!(position.z, 0.0);
    }

    #[test]
    fn nothing_moves_without_an_island() {
        let mut app = App::new();
        app.init_resource::<Time>().add_plugins(IslandSimPlugin);
        app.insert_resource(MovementIntent(Vec3::X));
        let character = app.world_mut().spawn(Character::new(Vec3::ZERO)).id();

        step(&mut app);

        let position = app.world().get::<Character>(character).unwrap().position();
        assert_eq!(position, Vec3::ZERO);
    }
}
