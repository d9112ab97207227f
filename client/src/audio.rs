//! Plays the sound cues emitted by the simulation.

use std::collections::HashMap;

use bevy::{audio::Volume, prelude::*};
use rand::Rng;
use sim::effects::{
    sound::{SPLASH_DOWN, SPLASH_UP},
    SoundCue,
};

use crate::constants::{MASTER_VOLUME, SOUND_FOLDER};

#[derive(Resource, Debug)]
pub struct SoundLibrary {
    pub master_volume: f32,
    sounds: HashMap<&'static str, Handle<AudioSource>>,
}

impl SoundLibrary {
    pub fn get(&self, name: &str) -> Option<&Handle<AudioSource>> {
        self.sounds.get(name)
    }
}

pub fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    let sounds = [SPLASH_UP, SPLASH_DOWN]
        .into_iter()
        .map(|name| {
            let path = format!("{SOUND_FOLDER}/{name}.mp3");
            (name, asset_server.load(path))
        })
        .collect();
    commands.insert_resource(SoundLibrary {
        master_volume: MASTER_VOLUME,
        sounds,
    });
}

/// Picks the playback speed for a cue, which also shifts its pitch.
pub fn cue_speed(cue: &SoundCue, rng: &mut impl Rng) -> f32 {
    if cue.max_pitch > cue.min_pitch {
        rng.gen_range(cue.min_pitch..cue.max_pitch)
    } else {
        cue.min_pitch
    }
}

/// Spawns a one-shot player per cue. Missing sound files only produce an
/// asset load error in the log.
pub fn play_sound_cues_system(
    mut commands: Commands,
    mut cues: EventReader<SoundCue>,
    library: Res<SoundLibrary>,
) {
    let mut rng = rand::thread_rng();
    for cue in cues.read() {
        let Some(handle) = library.get(cue.name) else {
            warn!("Sound '{}' not found", cue.name);
            continue;
        };
        commands.spawn((
            AudioPlayer::new(handle.clone()),
            PlaybackSettings::DESPAWN
                .with_volume(Volume::Linear(cue.volume * library.master_volume))
                .with_speed(cue_speed(cue, &mut rng)),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn pitch_stays_in_cue_range() {
        let cue = SoundCue::splash(SPLASH_UP);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            let speed = cue_speed(&cue, &mut rng);
            assert!((cue.min_pitch..cue.max_pitch).contains(&speed));
        }
    }

    #[test]
    fn fixed_pitch_cue_plays_at_that_speed() {
        let cue = SoundCue {
            name: SPLASH_DOWN,
            volume: 1.0,
            min_pitch: 1.0,
            max_pitch: 1.0,
        };
        assert_eq!(cue_speed(&cue, &mut StdRng::seed_from_u64(1)), 1.0);
    }
}
