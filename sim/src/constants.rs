/// Height of the visual water plane.
pub const WATER_LEVEL: f32 = -0.2;

/// Surface elevations reported by terrain samples.
pub const WATER_ELEVATION: f32 = 0.2;
pub const GROUND_LAYER_1_ELEVATION: f32 = 0.5;
pub const GROUND_LAYER_2_ELEVATION: f32 = 1.5;

/// Character tuning. Speeds are expressed per 60 Hz frame and scaled by
/// `delta * 60` at runtime.
pub const CHARACTER_SPEED: f32 = 0.05;
pub const CHARACTER_VERTICAL_SPEED: f32 = 0.1;
pub const CHARACTER_HEIGHT_OFFSET: f32 = 0.75;
pub const CHARACTER_SIZE: f32 = 1.5;

/// Raft tuning.
pub const RAFT_SURFACED_Y: f32 = 0.1;
pub const RAFT_SUBMERGED_Y: f32 = -0.7;
pub const RAFT_VERTICAL_SPEED: f32 = 0.1;
pub const RAFT_ROTATION_SMOOTHING: f32 = 0.1;
pub const RAFT_HALF_SIZE: f32 = 1.5;
pub const RAFT_MOVEMENT_EPSILON: f32 = 0.001;
pub const RAFT_ROTATION_EPSILON: f32 = 0.01;

/// Frame rate the per-frame speeds were tuned for.
pub const REFERENCE_FPS: f32 = 60.0;

pub const MAX_TARGET_CELLS: u32 = 250_000;
