use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1280;           // Initial window width
pub const RENDER_HEIGHT: i32 = 540;           // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTO_PLAY_DELAY_MS: u64 = 5000;     // Time between automatic advances (milliseconds)
pub const FADE_DURATION: f32 = 0.6;           // Cross-fade between slides (seconds)
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(5); // Auto-dismiss delay for notices

pub const NAV_BUTTON_RADIUS: f32 = 24.0;      // Prev/next button radius (pixels)
pub const NAV_BUTTON_MARGIN: f32 = 40.0;      // Distance from the slider edge to the button center
pub const DOT_RADIUS: f32 = 7.0;              // Indicator dot radius
pub const DOT_SPACING: f32 = 26.0;            // Distance between dot centers
pub const DOT_BOTTOM_MARGIN: f32 = 30.0;      // Distance from the bottom edge to the dot row
