// Logical viewport (world units are pixels; the UI scales them to cells)
pub const VIEWPORT_WIDTH: f64 = 800.0;
pub const VIEWPORT_HEIGHT: f64 = 600.0;

// Frame loop timing
pub const FRAME_INTERVAL_MS: u64 = 16;

// World gravity in px/s²; scrolling bodies opt out individually
pub const GRAVITY_Y: f64 = 1200.0;
