//! The player character: walks over the island and floats on a raft over
//! water.

use bevy::prelude::*;

use super::{approach, frame_scaled, Raft};
use crate::{
    constants::{CHARACTER_HEIGHT_OFFSET, CHARACTER_SPEED, CHARACTER_VERTICAL_SPEED},
    effects::SoundSink,
    terrain::{TerrainQuery, TerrainSample},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundLayer {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalState {
    Grounded(GroundLayer),
    OnWater,
}

/// Water boundary crossing observed during one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    #[default]
    None,
    EnteredWater,
    LeftWater,
}

#[derive(Component, Debug, Clone)]
pub struct Character {
    /// `y` is the current height, eased toward the terrain below.
    position: Vec3,
    target_height: f32,
    surface: TerrainSample,
    movement: Vec3,
    raft: Raft,
}

impl Character {
    pub fn new(position: Vec3) -> Self {
        Self::with_raft(position, Raft::default())
    }

    pub fn with_raft(position: Vec3, raft: Raft) -> Self {
        Self {
            position,
            target_height: position.y,
            surface: TerrainSample::GroundLayer1,
            movement: Vec3::ZERO,
            raft,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target_height(&self) -> f32 {
        self.target_height
    }

    pub fn movement(&self) -> Vec3 {
        self.movement
    }

    pub fn raft(&self) -> &Raft {
        &self.raft
    }

    pub fn is_on_water(&self) -> bool {
        self.surface.is_water()
    }

    pub fn vertical_state(&self) -> VerticalState {
        match self.surface {
            TerrainSample::Water => VerticalState::OnWater,
            TerrainSample::GroundLayer1 => VerticalState::Grounded(GroundLayer::First),
            TerrainSample::GroundLayer2 => VerticalState::Grounded(GroundLayer::Second),
        }
    }

    /// Sets the horizontal movement direction. Vectors longer than one are
    /// normalized so diagonals are not faster.
    pub fn set_movement(&mut self, direction: Vec3) {
        let flat = direction.with_y(0.0);
        self.movement = if flat.length_squared() > 1.0 {
            flat.normalize()
        } else {
            flat
        };
    }

    /// Moves horizontally without walking. Height still eases on the next
    /// update.
    pub fn teleport(&mut self, x: f32, z: f32) {
        self.position.x = x;
        self.position.z = z;
    }

    /// One frame: walk, settle toward the terrain height, toggle the raft on
    /// water boundary crossings and let it follow.
    pub fn update(
        &mut self,
        delta: f32,
        terrain: &impl TerrainQuery,
        sounds: &mut impl SoundSink,
    ) -> Transition {
        let step = frame_scaled(CHARACTER_SPEED, delta);
        self.position.x += self.movement.x * step;
        self.position.z += self.movement.z * step;

        let was_on_water = self.surface.is_water();
        self.surface = terrain.sample(self.position.x, self.position.z);
        self.target_height = self.surface.elevation() + CHARACTER_HEIGHT_OFFSET;
        self.position.y = approach(
            self.position.y,
            self.target_height,
            frame_scaled(CHARACTER_VERTICAL_SPEED, delta),
        );

        self.raft.align_with(self.position);
        let transition = match (was_on_water, self.surface.is_water()) {
            (false, true) => {
                self.raft.show(sounds);
                Transition::EnteredWater
            }
            (true, false) => {
                self.raft.hide(sounds);
                Transition::LeftWater
            }
            _ => Transition::None,
        };

        self.raft.update(delta, self.position, self.movement);
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::{GROUND_LAYER_1_ELEVATION, WATER_ELEVATION},
        effects::SoundCue,
    };

    const FRAME: f32 = 1.0 / 60.0;

    /// Land for `x >= 0`, a raised plateau for `x >= 5`, water elsewhere.
    struct Shore;

    impl TerrainQuery for Shore {
        fn sample(&self, x: f32, _z: f32) -> TerrainSample {
            if x >= 5.0 {
                TerrainSample::GroundLayer2
            } else if x >= 0.0 {
                TerrainSample::GroundLayer1
            } else {
                TerrainSample::Water
            }
        }
    }

    fn character_at(x: f32) -> Character {
        Character::with_raft(Vec3::new(x, 1.0, 0.0), Raft::with_seed(11))
    }

    #[test]
    fn walking_into_water_shows_raft_once() {
        let mut character = character_at(0.02);
        let mut sounds: Vec<SoundCue> = Vec::new();
        character.set_movement(Vec3::NEG_X);

        let transitions: Vec<Transition> = (0..10)
            .map(|_| character.update(FRAME, &Shore, &mut sounds))
            .collect();

        assert_eq!(
            transitions
                .iter()
                .filter(|t| **t == Transition::EnteredWater)
                .count(),
            1
        );
        assert!(character.is_on_water());
        assert!(character.raft().is_visible());
        assert_eq!(sounds.len(), 1);
        assert_eq!(character.vertical_state(), VerticalState::OnWater);
    }

    #[test]
    fn leaving_water_hides_raft() {
        let mut character = character_at(-1.0);
        assert_eq!(
            character.update(FRAME, &Shore, &mut ()),
            Transition::EnteredWater
        );

        character.teleport(1.0, 0.0);
        assert_eq!(
            character.update(FRAME, &Shore, &mut ()),
            Transition::LeftWater
        );
        assert!(!character.raft().is_visible());
        assert_eq!(character.raft().splash().systems().len(), 4);
        assert_eq!(character.raft().splash().ripples().len(), 1);
    }

    #[test]
    fn boundary_flips_every_frame_without_hysteresis() {
        let mut character = character_at(1.0);
        let mut sounds: Vec<SoundCue> = Vec::new();
        for i in 0..6 {
            let x = if i % 2 == 0 { -0.01 } else { 0.01 };
            character.teleport(x, 0.0);
            let expected = if i % 2 == 0 {
                Transition::EnteredWater
            } else {
                Transition::LeftWater
            };
            assert_eq!(character.update(FRAME, &Shore, &mut sounds), expected);
        }
        assert_eq!(sounds.len(), 6);
    }

    #[test]
    fn height_settles_on_terrain_without_overshoot() {
        let mut character = character_at(2.0);
        character.position.y = 3.0;
        let target = GROUND_LAYER_1_ELEVATION + CHARACTER_HEIGHT_OFFSET;

        let mut gap = (character.position().y - target).abs();
        for _ in 0..60 {
            character.update(FRAME, &Shore, &mut ());
            let next_gap = (character.position().y - target).abs();
            assert!(next_gap < gap || next_gap == 0.0);
            gap = next_gap;
        }
        assert_eq!(character.position().y, target);
        assert_eq!(
            character.vertical_state(),
            VerticalState::Grounded(GroundLayer::First)
        );
    }

    #[test]
    fn climbs_onto_second_layer() {
        let mut character = character_at(6.0);
        for _ in 0..60 {
            character.update(FRAME, &Shore, &mut ());
        }
        assert_eq!(
            character.vertical_state(),
            VerticalState::Grounded(GroundLayer::Second)
        );
        assert!(character.target_height() > GROUND_LAYER_1_ELEVATION + CHARACTER_HEIGHT_OFFSET);
    }

    #[test]
    fn water_height_uses_water_elevation() {
        let mut character = character_at(-3.0);
        character.update(FRAME, &Shore, &mut ());
        assert_eq!(
            character.target_height(),
            WATER_ELEVATION + CHARACTER_HEIGHT_OFFSET
        );
    }

    #[test]
    fn diagonal_input_is_normalized() {
        let mut character = character_at(2.0);
        character.set_movement(Vec3::new(1.0, 0.0, 1.0));
        let start = character.position();
        character.update(FRAME, &Shore, &mut ());

        let travelled = (character.position() - start).with_y(0.0).length();
        assert!((travelled - CHARACTER_SPEED).abs() < 1e-5);
    }

    #[test]
    fn raft_tracks_character_while_hidden() {
        let mut character = character_at(2.0);
        character.set_movement(Vec3::Z);
        for _ in 0..30 {
            character.update(FRAME, &Shore, &mut ());
        }
        assert!(!character.raft().is_visible());
        assert_eq!(
            character.raft().position().xz(),
            character.position().xz()
        );
    }

    #[test]
    fn teleport_splashes_surround_the_new_position() {
        let mut character = character_at(3.0);
        character.update(FRAME, &Shore, &mut ());

        character.teleport(-20.0, 7.0);
        assert_eq!(
            character.update(FRAME, &Shore, &mut ()),
            Transition::EnteredWater
        );
        let origins: Vec<Vec3> = character
            .raft()
            .splash()
            .systems()
            .iter()
            .map(|s| s.origin)
            .collect();
        let center = origins.iter().sum::<Vec3>() / origins.len() as f32;
        assert!((center.x + 20.0).abs() < 1e-4);
        assert!((center.z - 7.0).abs() < 1e-4);
    }
}
