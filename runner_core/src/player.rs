use crate::{Aabb, Config, Params, SpriteKey};
use glam::Vec2;

/// The runner. x never changes; only the vertical physics and the running
/// animation evolve per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    size: Vec2,
    spawn: Vec2,
    floor: f32, // Lowest allowed top-edge y
    gravity: f32,
    jump_impulse: f32,
    jump_cooldown_ticks: u32,
    animation_speed: u32,
    pub velocity_y: f32,
    pub is_jumping: bool,
    pub jump_cooldown: u32,
    pub current_frame: u8,
    pub animation_counter: u32,
}

impl Player {
    pub fn new(config: &Config) -> Self {
        let spawn = config.player_spawn();
        Self {
            pos: spawn,
            size: Vec2::new(config.player_width, config.player_height),
            spawn,
            floor: config.player_floor(),
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            jump_cooldown_ticks: config.jump_cooldown,
            animation_speed: config.animation_speed.max(1),
            velocity_y: 0.0,
            is_jumping: false,
            jump_cooldown: 0,
            current_frame: 0,
            animation_counter: 0,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Advance physics and animation by one tick
    pub fn update(&mut self) {
        self.velocity_y += self.gravity;
        self.pos.y += self.velocity_y;

        // Ground clamp
        if self.pos.y > self.floor {
            self.pos.y = self.floor;
            self.velocity_y = 0.0;
            self.is_jumping = false;
        }

        if self.jump_cooldown > 0 {
            self.jump_cooldown -= 1;
        }

        if self.is_jumping {
            self.current_frame = 0;
        } else {
            self.animation_counter += 1;
            if self.animation_counter >= self.animation_speed {
                self.current_frame = self.current_frame % Params::RUN_FRAMES + 1;
                self.animation_counter = 0;
            }
        }
    }

    /// Start a jump if grounded and off cooldown. Returns whether it took effect.
    pub fn jump(&mut self) -> bool {
        if self.is_jumping || self.jump_cooldown > 0 {
            return false;
        }
        self.velocity_y = self.jump_impulse;
        self.is_jumping = true;
        self.jump_cooldown = self.jump_cooldown_ticks;
        true
    }

    /// Back to the spawn point with all physics and animation state cleared
    pub fn reset(&mut self) {
        self.pos = self.spawn;
        self.velocity_y = 0.0;
        self.is_jumping = false;
        self.jump_cooldown = 0;
        self.current_frame = 0;
        self.animation_counter = 0;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Bounds shrunk by `padding` on every side
    pub fn hitbox(&self, padding: f32) -> Aabb {
        self.bounds().inset(padding)
    }

    pub fn sprite(&self) -> SpriteKey {
        SpriteKey::PlayerFrame(self.current_frame)
    }
}
