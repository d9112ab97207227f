//! Ambient waves of the sea plane. Purely visual: terrain queries and the
//! raft use the flat [`WATER_LEVEL`](crate::WATER_LEVEL).

pub const WAVE_AMPLITUDE: f32 = 0.2;
/// Distance scale of the wave pattern, in world units per radian.
pub const WAVE_LENGTH: f32 = 2.0;
/// Side of the rendered sea plane.
pub const WATER_PLANE_SIZE: f32 = 100.0;
pub const WATER_PLANE_SUBDIVISIONS: u32 = 32;

/// Height offset of the sea surface at `(x, z)` after `time` seconds.
pub fn wave_height(x: f32, z: f32, time: f32) -> f32 {
    let along_x = (x / WAVE_LENGTH + time).sin();
    let along_z = (z / WAVE_LENGTH + time).cos();
    (along_x + along_z) * WAVE_AMPLITUDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waves_stay_within_amplitude() {
        for i in 0..100 {
            let t = i as f32 * 0.37;
            let h = wave_height(i as f32 - 50.0, 17.0 - i as f32, t);
            assert!(h.abs() <= 2.0 * WAVE_AMPLITUDE + 1e-6);
        }
    }

    #[test]
    fn origin_starts_on_a_crest_of_the_cosine_term() {
        assert!((wave_height(0.0, 0.0, 0.0) - WAVE_AMPLITUDE).abs() < 1e-6);
    }
}
