use thiserror::Error;

/// Reasons a [`Config`](crate::Config) is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("jump impulse must be negative (y grows downward), got {0}")]
    JumpImpulseNotUpward(f32),

    #[error("ground band {ground_height} does not fit in viewport height {viewport_height}")]
    GroundTooTall {
        ground_height: f32,
        viewport_height: f32,
    },

    #[error("spawn interval is empty: min {min} > max {max}")]
    SpawnIntervalInverted { min: u32, max: u32 },

    #[error("spawn chances must ascend within [0, 1], got {obstacle}, {rabbi}, {channel14}")]
    SpawnChances {
        obstacle: f32,
        rabbi: f32,
        channel14: f32,
    },

    #[error("hitbox padding {padding} leaves no hitbox on a {width}x{height} player")]
    HitboxCollapsed { padding: f32, width: f32, height: f32 },
}
