//! Raft that surfaces under the character whenever it stands on water.

use std::f32::consts::{PI, TAU};

use bevy::math::{Quat, Vec3, Vec3Swizzles};
use bevy_log::debug;

use super::{approach, frame_scaled};
use crate::{
    constants::{
        RAFT_HALF_SIZE, RAFT_MOVEMENT_EPSILON, RAFT_ROTATION_EPSILON, RAFT_ROTATION_SMOOTHING,
        RAFT_SUBMERGED_Y, RAFT_SURFACED_Y, RAFT_VERTICAL_SPEED, WATER_LEVEL,
    },
    effects::{SoundSink, SplashDirection, SplashEffect},
};

pub const FLAG_WAVE_SPEED: f32 = 3.0;
pub const FLAG_WAVE_AMPLITUDE: f32 = 0.1;

/// Wraps an angle into `(-PI, PI]`.
pub fn wrap_angle(angle: f32) -> f32 {
    PI - (PI - angle).rem_euclid(TAU)
}

#[derive(Debug, Clone)]
pub struct Raft {
    visible: bool,
    position: Vec3,
    target_y: f32,
    heading: f32,
    last_position: Option<Vec3>,
    flag_time: f32,
    flag_angle: f32,
    splash: SplashEffect,
}

impl Default for Raft {
    fn default() -> Self {
        Self::with_splash(SplashEffect::default())
    }
}

impl Raft {
    /// Raft whose splashes use a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_splash(SplashEffect::with_seed(seed))
    }

    fn with_splash(splash: SplashEffect) -> Self {
        Self {
            visible: false,
            position: Vec3::new(0.0, RAFT_SUBMERGED_Y, 0.0),
            target_y: RAFT_SUBMERGED_Y,
            heading: 0.0,
            last_position: None,
            flag_time: 0.0,
            flag_angle: 0.0,
            splash,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target_y(&self) -> f32 {
        self.target_y
    }

    /// Yaw in radians, 0 facing +Z.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.heading)
    }

    /// Roll of the flag around its pole.
    pub fn flag_angle(&self) -> f32 {
        self.flag_angle
    }

    pub fn splash(&self) -> &SplashEffect {
        &self.splash
    }

    /// Footprint corners on the water plane.
    pub fn corner_positions(&self) -> [Vec3; 4] {
        let x = self.position.x;
        let z = self.position.z;
        [
            Vec3::new(x - RAFT_HALF_SIZE, WATER_LEVEL, z - RAFT_HALF_SIZE),
            Vec3::new(x + RAFT_HALF_SIZE, WATER_LEVEL, z - RAFT_HALF_SIZE),
            Vec3::new(x - RAFT_HALF_SIZE, WATER_LEVEL, z + RAFT_HALF_SIZE),
            Vec3::new(x + RAFT_HALF_SIZE, WATER_LEVEL, z + RAFT_HALF_SIZE),
        ]
    }

    /// Moves the raft under `position` without touching its height, so
    /// splashes triggered this frame surround the character.
    pub fn align_with(&mut self, position: Vec3) {
        self.position.x = position.x;
        self.position.z = position.z;
    }

    /// Surfaces the raft with an upward splash at each corner. Returns false
    /// if it was already visible.
    pub fn show(&mut self, sounds: &mut impl SoundSink) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        self.target_y = RAFT_SURFACED_Y;
        self.splash
            .trigger_multiple(&self.corner_positions(), SplashDirection::Up, None, sounds);
        debug!("Raft surfaced at {:?}", self.position.xz());
        true
    }

    /// Sinks the raft. It disappears right away while the corner splashes
    /// and a center ripple play. Returns false if it was already hidden.
    pub fn hide(&mut self, sounds: &mut impl SoundSink) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        self.target_y = RAFT_SUBMERGED_Y;
        let center = self.position.with_y(WATER_LEVEL);
        self.splash.trigger_multiple(
            &self.corner_positions(),
            SplashDirection::Down,
            Some(center),
            sounds,
        );
        debug!("Raft sank at {:?}", self.position.xz());
        true
    }

    /// Follows the character horizontally, hidden or not, and steers toward
    /// the travel direction while visible. Falls back to the position change
    /// since the previous frame when `movement` is zero.
    pub fn update(&mut self, delta: f32, character_position: Vec3, movement: Vec3) {
        self.splash.update(delta);

        if self.visible {
            self.flag_time += delta;
            self.flag_angle = (self.flag_time * FLAG_WAVE_SPEED).sin() * FLAG_WAVE_AMPLITUDE;
        }

        let travel = if movement != Vec3::ZERO {
            movement
        } else if let Some(last) = self.last_position {
            character_position - last
        } else {
            Vec3::ZERO
        };

        self.position.x = character_position.x;
        self.position.z = character_position.z;
        self.position.y = approach(
            self.position.y,
            self.target_y,
            frame_scaled(RAFT_VERTICAL_SPEED, delta),
        );

        if self.visible && travel.xz().length() > RAFT_MOVEMENT_EPSILON {
            let target = travel.x.atan2(travel.z);
            let turn = wrap_angle(target - self.heading);
            if turn.abs() > RAFT_ROTATION_EPSILON {
                self.heading = wrap_angle(self.heading + turn * RAFT_ROTATION_SMOOTHING);
            }
        }

        self.last_position = Some(character_position);
    }
}
