use std::time::Duration;

pub const AUTO_PLAY_INTERVAL: Duration = Duration::from_millis(5000); // Time between automatic advances
pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal travel for a swipe (pixels)

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const DOT_RADIUS: f32 = 7.0;              // Indicator dot radius (pixels)
pub const DOT_SPACING: f32 = 28.0;            // Distance between dot centers (pixels)
pub const DOT_BOTTOM_MARGIN: f32 = 40.0;      // Distance from the bottom edge to the dot row
