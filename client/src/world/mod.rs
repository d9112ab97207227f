pub mod island;
pub mod palms;
pub mod water;

pub use island::spawn_island;
pub use palms::{face_palms_system, spawn_palms};
pub use water::{animate_water_system, spawn_water};
