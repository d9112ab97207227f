//! Turns held directions and touch drags into a movement vector on the XZ
//! plane, at most one unit long.

use bevy::prelude::*;

/// Drag distance in pixels that maps to full speed.
pub const JOYSTICK_RADIUS: f32 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementAxes {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementAxes {
    /// Forward is -Z and right is +X, matching the follow camera.
    pub fn direction(&self) -> Vec3 {
        let mut direction = Vec3::ZERO;
        if self.forward {
            direction.z -= 1.0;
        }
        if self.backward {
            direction.z += 1.0;
        }
        if self.left {
            direction.x -= 1.0;
        }
        if self.right {
            direction.x += 1.0;
        }
        direction.normalize_or_zero()
    }
}

/// Movement from a touch drag, `delta` in screen pixels (y down).
pub fn joystick_direction(delta: Vec2) -> Vec3 {
    Vec3::new(delta.x, 0.0, delta.y).clamp_length_max(JOYSTICK_RADIUS) / JOYSTICK_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_keys_map_to_axes() {
        let forward = MovementAxes {
            forward: true,
            ..Default::default()
        };
        assert_eq!(forward.direction(), Vec3::NEG_Z);

        let right = MovementAxes {
            right: true,
            ..Default::default()
        };
        assert_eq!(right.direction(), Vec3::X);
    }

    #[test]
    fn diagonals_are_unit_length() {
        let axes = MovementAxes {
            forward: true,
            left: true,
            ..Default::default()
        };
        assert!((axes.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn opposite_keys_cancel() {
        let axes = MovementAxes {
            forward: true,
            backward: true,
            ..Default::default()
        };
        assert_eq!(axes.direction(), Vec3::ZERO);
    }

    #[test]
    fn joystick_scales_and_clamps() {
        let half = joystick_direction(Vec2::new(25.0, 0.0));
        assert!((half - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-6);

        let far = joystick_direction(Vec2::new(0.0, 400.0));
        assert!((far - Vec3::Z).length() < 1e-6);
    }
}
