use bevy::math::Vec3;

/// Ripples sit just above the water plane to avoid z-fighting.
pub const RIPPLE_Y: f32 = -0.19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RippleSize {
    Small,
    Large,
}

impl RippleSize {
    fn initial_radius(self) -> f32 {
        match self {
            RippleSize::Small => 0.2,
            RippleSize::Large => 0.5,
        }
    }

    fn width(self) -> f32 {
        match self {
            RippleSize::Small => 0.1,
            RippleSize::Large => 0.2,
        }
    }

    fn lifetime(self) -> f32 {
        match self {
            RippleSize::Small => 1.5,
            RippleSize::Large => 2.0,
        }
    }

    fn max_radius(self) -> f32 {
        match self {
            RippleSize::Small => 2.0,
            RippleSize::Large => 4.0,
        }
    }

    fn opacity(self) -> f32 {
        match self {
            RippleSize::Small => 0.7,
            RippleSize::Large => 0.8,
        }
    }
}

/// Flat expanding ring on the water surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    id: u64,
    size: RippleSize,
    position: Vec3,
    lifetime: f32,
    remaining: f32,
    radius: f32,
    opacity: f32,
}

impl Ripple {
    pub fn new(id: u64, position: Vec3, size: RippleSize) -> Self {
        let lifetime = size.lifetime();
        Self {
            id,
            size,
            position: position.with_y(RIPPLE_Y),
            lifetime,
            remaining: lifetime,
            radius: size.initial_radius(),
            opacity: size.opacity(),
        }
    }

    /// Stable identifier, used by renderers to match meshes across frames.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn size(&self) -> RippleSize {
        self.size
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn inner_radius(&self) -> f32 {
        self.radius
    }

    pub fn outer_radius(&self) -> f32 {
        self.radius + self.size.width()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_alive(&self) -> bool {
        self.remaining > 0.0
    }

    /// Advances the ripple. Radius and opacity are interpolated from the
    /// elapsed fraction of the lifetime. Returns false once expired.
    pub fn update(&mut self, delta: f32) -> bool {
        self.remaining -= delta;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.opacity = 0.0;
            return false;
        }

        let progress = 1.0 - self.remaining / self.lifetime;
        let initial = self.size.initial_radius();
        self.radius = initial + (self.size.max_radius() - initial) * progress;
        self.opacity = self.size.opacity() * (1.0 - progress);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_lies_on_water() {
        let ripple = Ripple::new(0, Vec3::new(3.0, 5.0, -1.0), RippleSize::Small);
        assert_eq!(ripple.position(), Vec3::new(3.0, RIPPLE_Y, -1.0));
        assert_eq!(ripple.inner_radius(), 0.2);
        assert!((ripple.outer_radius() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn radius_grows_and_opacity_fades_linearly() {
        let mut ripple = Ripple::new(1, Vec3::ZERO, RippleSize::Large);
        assert!(ripple.update(1.0));
        assert!((ripple.inner_radius() - 2.25).abs() < 1e-5);
        assert!((ripple.opacity() - 0.4).abs() < 1e-5);

        assert!(ripple.update(0.5));
        assert!((ripple.inner_radius() - 3.125).abs() < 1e-5);
        assert!((ripple.opacity() - 0.2).abs() < 1e-5);
    }

    #[test]
    fn ripple_expires_after_lifetime() {
        let mut ripple = Ripple::new(2, Vec3::ZERO, RippleSize::Small);
        assert!(ripple.update(1.4));
        assert!(!ripple.update(0.2));
        assert!(!ripple.is_alive());
        assert_eq!(ripple.opacity(), 0.0);
    }
}
