/// Game tuning parameters for the runner
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Viewport
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 100.0; // Ground band at the bottom of the viewport

    // Scrolling
    pub const SCROLL_SPEED: f32 = 2.0; // px per tick
    pub const BACKGROUND_PARALLAX: f32 = 0.5; // Background layer moves at half speed

    // Player
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;
    pub const GRAVITY: f32 = 0.35; // px per tick^2 (was 0.6, obstacles were unclearable)
    pub const JUMP_IMPULSE: f32 = -15.0;
    pub const JUMP_COOLDOWN: u32 = 10; // ticks
    pub const ANIMATION_SPEED: u32 = 8; // ticks per running frame
    pub const RUN_FRAMES: u8 = 5; // frames 1..=5, frame 0 is idle/jump

    // Collision
    pub const HITBOX_PADDING: f32 = 25.0;

    // Spawning
    pub const SPAWN_INTERVAL_MIN: u32 = 60; // ticks
    pub const SPAWN_INTERVAL_MAX: u32 = 119; // ticks, inclusive
    pub const MIN_SPAWN_GAP: f32 = 100.0; // px from any obstacle
    pub const MIN_OBSTACLE_DISTANCE: f32 = 400.0; // px between obstacles
    pub const OBSTACLE_CHANCE: f32 = 0.4;
    pub const RABBI_CHANCE: f32 = 0.7; // cumulative
    pub const CHANNEL14_CHANCE: f32 = 0.9; // cumulative, remainder is coins
}
