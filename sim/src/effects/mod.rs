pub mod ripple;
pub mod sound;
pub mod splash;

pub use ripple::{Ripple, RippleSize};
pub use sound::{SoundCue, SoundSink};
pub use splash::{Particle, ParticleSystem, SplashDirection, SplashEffect};
