//! Fire-and-forget sound requests.
//!
//! The simulation never plays audio itself. It hands [`SoundCue`]s to a
//! [`SoundSink`], which in the app is an `EventWriter` read by the client's
//! audio system.

use bevy::prelude::*;

pub const SPLASH_UP: &str = "splash_up";
pub const SPLASH_DOWN: &str = "splash_down";

pub const SPLASH_VOLUME: f32 = 0.4;
pub const SPLASH_MIN_PITCH: f32 = 0.8;
pub const SPLASH_MAX_PITCH: f32 = 1.2;

#[derive(Event, Debug, Clone, PartialEq)]
pub struct SoundCue {
    pub name: &'static str,
    pub volume: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl SoundCue {
    pub fn splash(name: &'static str) -> Self {
        Self {
            name,
            volume: SPLASH_VOLUME,
            min_pitch: SPLASH_MIN_PITCH,
            max_pitch: SPLASH_MAX_PITCH,
        }
    }
}

pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);
}

impl SoundSink for Vec<SoundCue> {
    fn play(&mut self, cue: SoundCue) {
        self.push(cue);
    }
}

/// Discards every cue.
impl SoundSink for () {
    fn play(&mut self, _cue: SoundCue) {}
}

impl SoundSink for EventWriter<'_, SoundCue> {
    fn play(&mut self, cue: SoundCue) {
        self.write(cue);
    }
}
