pub mod character;
pub mod raft;

pub use character::{Character, GroundLayer, Transition, VerticalState};
pub use raft::Raft;

use crate::constants::REFERENCE_FPS;

/// Converts a per-frame speed tuned at 60 Hz into a distance for `delta`
/// seconds.
#[inline]
pub fn frame_scaled(speed: f32, delta: f32) -> f32 {
    speed * delta * REFERENCE_FPS
}

/// Moves `current` toward `target` by at most `max_step`, landing exactly on
/// the target instead of overshooting it.
pub fn approach(current: f32, target: f32, max_step: f32) -> f32 {
    let remaining = target - current;
    if remaining.abs() <= max_step {
        target
    } else {
        current + max_step.copysign(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_converges_without_overshoot() {
        for (start, target) in [(3.0_f32, 0.5_f32), (-0.7, 0.1), (1.25, 1.25)] {
            let mut current = start;
            let mut gap = (current - target).abs();
            for _ in 0..200 {
                current = approach(current, target, frame_scaled(0.1, 1.0 / 60.0));
                let next_gap = (current - target).abs();
                assert!(next_gap < gap || next_gap == 0.0);
                gap = next_gap;
            }
            assert_eq!(current, target);
        }
    }

    #[test]
    fn approach_moves_by_max_step() {
        assert_eq!(approach(0.0, 1.0, 0.25), 0.25);
        assert_eq!(approach(0.0, -1.0, 0.25), -0.25);
        assert_eq!(approach(0.9, 1.0, 0.25), 1.0);
    }

    #[test]
    fn frame_scaling_matches_reference_rate() {
        assert!((frame_scaled(0.1, 1.0 / 60.0) - 0.1).abs() < 1e-6);
        assert!((frame_scaled(0.1, 1.0 / 30.0) - 0.2).abs() < 1e-6);
    }
}
