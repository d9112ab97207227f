//! Water splash particles.
//!
//! A [`SplashEffect`] owns at most one splash event at a time: every trigger
//! throws away the particle systems of the previous one. Ripples are left to
//! finish on their own.

use std::f32::consts::TAU;

use bevy::math::Vec3;
use bevy_log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    ripple::{Ripple, RippleSize},
    sound::{SoundCue, SoundSink, SPLASH_DOWN, SPLASH_UP},
};

pub const PARTICLES_PER_SYSTEM: usize = 15;
/// Nominal particle lifetime in seconds. Each particle lives a random
/// fraction of it.
pub const PARTICLE_LIFETIME: f32 = 1.2;
pub const PARTICLE_SIZE: f32 = 0.1;
pub const PARTICLE_OPACITY: f32 = 0.7;
pub const GRAVITY: f32 = 9.8;
/// Share of the nominal lifetime over which particles fade out.
pub const FADE_START: f32 = 0.3;
pub const SPAWN_RADIUS: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashDirection {
    /// Spray thrown up as something emerges.
    Up,
    /// Outward splash as something sinks.
    Down,
}

impl SplashDirection {
    pub fn sound(self) -> &'static str {
        match self {
            SplashDirection::Up => SPLASH_UP,
            SplashDirection::Down => SPLASH_DOWN,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position relative to the owning system's origin.
    pub offset: Vec3,
    pub velocity: Vec3,
    /// Seconds left before deactivation.
    pub lifetime: f32,
    pub active: bool,
    pub opacity: f32,
    pub scale: f32,
    /// Hue, saturation and lightness, each in `[0, 1]`.
    pub hsl: Vec3,
}

impl Particle {
    fn spawn(
        rng: &mut StdRng,
        direction: SplashDirection,
        intensity: f32,
        angle_offset: f32,
    ) -> Self {
        let angle = angle_offset + rng.gen_range(0.0..std::f32::consts::PI);
        let radius = rng.gen_range(0.0..SPAWN_RADIUS);
        let offset = Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);

        let scale = rng.gen_range(0.7..1.3);
        let speed = rng.gen_range(1.0..3.0) * intensity;
        let velocity = match direction {
            SplashDirection::Up => Vec3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(2.0..4.0) * intensity,
                rng.gen_range(-1.0..1.0),
            ),
            SplashDirection::Down => Vec3::new(
                rng.gen_range(-1.5..1.5) * intensity,
                rng.gen_range(0.5..1.5) * intensity,
                rng.gen_range(-1.5..1.5) * intensity,
            ),
        } * speed;

        let hsl = Vec3::new(
            0.55 + rng.gen_range(-0.05..0.05),
            rng.gen_range(0.7..1.0),
            rng.gen_range(0.7..1.0),
        );

        Self {
            offset,
            velocity,
            lifetime: PARTICLE_LIFETIME * rng.gen_range(0.5..1.0),
            active: true,
            opacity: PARTICLE_OPACITY,
            scale,
            hsl,
        }
    }

    /// Advances one step. Returns true on the step that deactivates it.
    pub fn update(&mut self, delta: f32) -> bool {
        if !self.active {
            return false;
        }

        self.lifetime -= delta;
        if self.lifetime <= 0.0 {
            self.active = false;
            self.opacity = 0.0;
            return true;
        }

        self.offset += self.velocity * delta;
        self.velocity.y -= GRAVITY * delta;

        let fade_window = PARTICLE_LIFETIME * FADE_START;
        if self.lifetime < fade_window {
            self.opacity = PARTICLE_OPACITY * self.lifetime / fade_window;
        }
        false
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSystem {
    pub origin: Vec3,
    pub particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn is_active(&self) -> bool {
        self.particles.iter().any(|p| p.active)
    }

    pub fn world_position(&self, particle: &Particle) -> Vec3 {
        self.origin + particle.offset
    }
}

#[derive(Debug, Clone)]
pub struct SplashEffect {
    systems: Vec<ParticleSystem>,
    ripples: Vec<Ripple>,
    rng: StdRng,
    generation: u64,
    next_ripple_id: u64,
    active: bool,
}

impl Default for SplashEffect {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl SplashEffect {
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            systems: Vec::new(),
            ripples: Vec::new(),
            rng,
            generation: 0,
            next_ripple_id: 0,
            active: false,
        }
    }

    /// Replaces the current splash with one particle system per position.
    /// For [`SplashDirection::Down`] a large ripple is spawned at `center`
    /// first. Emits a single sound cue for the whole event.
    pub fn trigger_multiple(
        &mut self,
        positions: &[Vec3],
        direction: SplashDirection,
        center: Option<Vec3>,
        sounds: &mut impl SoundSink,
    ) {
        self.begin_event();

        if direction == SplashDirection::Down {
            if let Some(center) = center {
                self.spawn_ripple(center, RippleSize::Large);
            }
        }

        for position in positions {
            self.spawn_system(*position, direction);
        }

        if !positions.is_empty() {
            sounds.play(SoundCue::splash(direction.sound()));
        }

        debug!(
            "Splash {:?}: {} systems, {} ripples",
            direction,
            self.systems.len(),
            self.ripples.len()
        );
    }

    /// Replaces the current splash with a single system and a small ripple.
    pub fn trigger(
        &mut self,
        position: Vec3,
        direction: SplashDirection,
        sounds: &mut impl SoundSink,
    ) {
        self.begin_event();
        self.spawn_ripple(position, RippleSize::Small);
        self.spawn_system(position, direction);
        sounds.play(SoundCue::splash(direction.sound()));
    }

    /// Steps every particle and ripple. Returns how many particles were
    /// deactivated during this step.
    pub fn update(&mut self, delta: f32) -> usize {
        if !self.active {
            return 0;
        }

        let mut expired = 0;
        let mut any_active = false;
        for system in &mut self.systems {
            for particle in &mut system.particles {
                if particle.update(delta) {
                    expired += 1;
                }
                any_active |= particle.active;
            }
        }

        self.ripples.retain_mut(|ripple| ripple.update(delta));

        self.active = any_active || !self.ripples.is_empty();
        expired
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn systems(&self) -> &[ParticleSystem] {
        &self.systems
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    /// Bumped on every trigger, so renderers know when to rebuild particle
    /// visuals.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn active_particle_count(&self) -> usize {
        self.systems
            .iter()
            .flat_map(|s| s.particles.iter())
            .filter(|p| p.active)
            .count()
    }

    fn begin_event(&mut self) {
        self.active = true;
        self.systems.clear();
        self.generation += 1;
    }

    fn spawn_system(&mut self, origin: Vec3, direction: SplashDirection) {
        let intensity = self.rng.gen_range(0.5..1.5);
        let angle_offset = self.rng.gen_range(0.0..TAU);
        let rng = &mut self.rng;
        let particles = (0..PARTICLES_PER_SYSTEM)
            .map(|_| Particle::spawn(rng, direction, intensity, angle_offset))
            .collect();
        self.systems.push(ParticleSystem { origin, particles });
    }

    fn spawn_ripple(&mut self, position: Vec3, size: RippleSize) {
        self.ripples.push(Ripple::new(self.next_ripple_id, position, size));
        self.next_ripple_id += 1;
    }
}
