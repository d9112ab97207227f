use bevy::color::Color;

pub const BINDS_PATH: &str = "keybindings.ron";
pub const ISLAND_CONFIG_PATH: &str = "island.ron";

pub const WINDOW_TITLE: &str = "Raft Island";
pub const SKY_COLOR: Color = Color::srgb(0.53, 0.81, 0.92);

// Island blocks
pub const CUBE_SIZE: f32 = 1.0;
pub const GRASS_COLOR: Color = Color::srgb(0.235, 0.69, 0.263);
pub const SAND_COLOR: Color = Color::srgb(0.761, 0.698, 0.502);
pub const DIRT_COLOR: Color = Color::srgb(0.545, 0.271, 0.075);

pub const WATER_COLOR: Color = Color::srgba(0.0, 0.467, 0.745, 0.8);

// Raft model
pub const PLANK_COLOR: Color = Color::srgb(0.545, 0.271, 0.075);
pub const DARK_PLANK_COLOR: Color = Color::srgb(0.396, 0.263, 0.129);
pub const POST_COLOR: Color = Color::srgb(0.365, 0.251, 0.216);
pub const FLAG_COLOR: Color = Color::srgb(0.647, 0.165, 0.165);
pub const PLANK_WIDTH: f32 = 0.5;
pub const PLANK_HEIGHT: f32 = 0.25;
pub const PLANK_LENGTH: f32 = 3.0;
pub const PLANK_SPACING: f32 = 0.1;
pub const PLANK_COUNT: usize = 5;

// Character billboard
pub const FACE_COLOR: Color = Color::srgb(1.0, 0.843, 0.0);
pub const EYE_COLOR: Color = Color::BLACK;

pub const PALM_SIZE: f32 = 4.0;
pub const PALM_TEXTURE: &str = "textures/palm.png";

pub const RIPPLE_COLOR: Color = Color::WHITE;
pub const RIPPLE_RESOLUTION: u32 = 32;

// Audio
pub const MASTER_VOLUME: f32 = 0.5;
pub const SOUND_FOLDER: &str = "audio";

/// Seconds the camera mode label stays fully visible after a switch.
/// Wheel pixels that count as one scrolled line.
pub const SCROLL_PIXELS_PER_LINE: f32 = 100.0;
pub const MODE_LABEL_FADE_DELAY: f32 = 3.0;
pub const MODE_LABEL_FADED_ALPHA: f32 = 0.3;

// Debug overlay
pub const DEBUG_BOX_COLOR: Color = Color::srgb(1.0, 0.0, 0.784);
pub const PALM_BOX_SIZE: f32 = 1.2;
