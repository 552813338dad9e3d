use crate::{ConfigError, EntityKind, Params};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub ground_height: f32,
    pub scroll_speed: f32,
    pub background_parallax: f32,
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub jump_cooldown: u32,
    pub animation_speed: u32,
    pub hitbox_padding: f32,
    pub spawn_interval_min: u32,
    pub spawn_interval_max: u32,
    pub min_spawn_gap: f32,
    pub min_obstacle_distance: f32,
    pub obstacle_chance: f32,
    pub rabbi_chance: f32,
    pub channel14_chance: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_width: Params::VIEWPORT_WIDTH,
            viewport_height: Params::VIEWPORT_HEIGHT,
            ground_height: Params::GROUND_HEIGHT,
            scroll_speed: Params::SCROLL_SPEED,
            background_parallax: Params::BACKGROUND_PARALLAX,
            player_x: Params::PLAYER_X,
            player_width: Params::PLAYER_WIDTH,
            player_height: Params::PLAYER_HEIGHT,
            gravity: Params::GRAVITY,
            jump_impulse: Params::JUMP_IMPULSE,
            jump_cooldown: Params::JUMP_COOLDOWN,
            animation_speed: Params::ANIMATION_SPEED,
            hitbox_padding: Params::HITBOX_PADDING,
            spawn_interval_min: Params::SPAWN_INTERVAL_MIN,
            spawn_interval_max: Params::SPAWN_INTERVAL_MAX,
            min_spawn_gap: Params::MIN_SPAWN_GAP,
            min_obstacle_distance: Params::MIN_OBSTACLE_DISTANCE,
            obstacle_chance: Params::OBSTACLE_CHANCE,
            rabbi_chance: Params::RABBI_CHANCE,
            channel14_chance: Params::CHANNEL14_CHANCE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Y coordinate of the playable surface (top of the ground band)
    pub fn ground_level(&self) -> f32 {
        self.viewport_height - self.ground_height
    }

    /// Lowest y the player's top edge may reach
    pub fn player_floor(&self) -> f32 {
        self.ground_level() - self.player_height
    }

    /// Where the player starts a run: standing on the ground
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(self.player_x, self.player_floor())
    }

    /// Spawn point for a new entity, just past the right edge of the viewport
    pub fn spawn_position(&self, kind: EntityKind) -> Vec2 {
        Vec2::new(
            self.viewport_width,
            self.ground_level() - kind.spec().ground_offset,
        )
    }

    /// Check that the tuning describes a playable game
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("ground_height", self.ground_height),
            ("scroll_speed", self.scroll_speed),
            ("gravity", self.gravity),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
        ];
        for (field, value) in positives {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.jump_impulse.is_nan() || self.jump_impulse >= 0.0 {
            return Err(ConfigError::JumpImpulseNotUpward(self.jump_impulse));
        }

        if self.ground_height >= self.viewport_height {
            return Err(ConfigError::GroundTooTall {
                ground_height: self.ground_height,
                viewport_height: self.viewport_height,
            });
        }

        if self.spawn_interval_min > self.spawn_interval_max {
            return Err(ConfigError::SpawnIntervalInverted {
                min: self.spawn_interval_min,
                max: self.spawn_interval_max,
            });
        }

        let ascending = 0.0 <= self.obstacle_chance
            && self.obstacle_chance <= self.rabbi_chance
            && self.rabbi_chance <= self.channel14_chance
            && self.channel14_chance <= 1.0;
        if !ascending {
            return Err(ConfigError::SpawnChances {
                obstacle: self.obstacle_chance,
                rabbi: self.rabbi_chance,
                channel14: self.channel14_chance,
            });
        }

        let padding = self.hitbox_padding;
        if padding.is_nan()
            || padding < 0.0
            || padding * 2.0 >= self.player_width
            || padding * 2.0 >= self.player_height
        {
            return Err(ConfigError::HitboxCollapsed {
                padding,
                width: self.player_width,
                height: self.player_height,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CollectibleKind, ObstacleKind};

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
    }

    #[test]
    fn test_config_ground_level() {
        let config = Config::new();
        assert_eq!(config.ground_level(), 500.0, "600px viewport minus 100px ground");
        assert_eq!(config.player_floor(), 400.0);
        assert_eq!(config.player_spawn(), Vec2::new(50.0, 400.0));
    }

    #[test]
    fn test_config_spawn_positions() {
        let config = Config::new();
        let obstacle = config.spawn_position(EntityKind::Obstacle(ObstacleKind::Barrel));
        assert_eq!(obstacle, Vec2::new(800.0, 430.0), "Obstacles rest on the ground");

        let rabbi = config.spawn_position(EntityKind::Collectible(CollectibleKind::Rabbi));
        assert_eq!(rabbi.y + 70.0, config.ground_level());

        let coin = config.spawn_position(EntityKind::Collectible(CollectibleKind::Coin));
        assert_eq!(coin.y, 380.0, "Coins float above the ground");
    }

    #[test]
    fn test_validate_rejects_downward_jump() {
        let config = Config {
            jump_impulse: 15.0,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::JumpImpulseNotUpward(15.0))
        );
    }

    #[test]
    fn test_validate_rejects_zero_scroll_speed() {
        let config = Config {
            scroll_speed: 0.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "scroll_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_interval() {
        let config = Config {
            spawn_interval_min: 120,
            spawn_interval_max: 60,
            ..Config::new()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpawnIntervalInverted { min: 120, max: 60 })
        );
    }

    #[test]
    fn test_validate_rejects_unordered_chances() {
        let config = Config {
            rabbi_chance: 0.2,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpawnChances { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_padding() {
        let config = Config {
            hitbox_padding: 50.0,
            ..Config::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::HitboxCollapsed { .. })
        ));
    }

    #[test]
    fn test_config_partial_override_from_json() {
        let config: Config = serde_json::from_str(r#"{ "scroll_speed": 3.5 }"#).unwrap();
        assert_eq!(config.scroll_speed, 3.5);
        assert_eq!(config.gravity, Params::GRAVITY, "Missing fields fall back to defaults");
    }
}
