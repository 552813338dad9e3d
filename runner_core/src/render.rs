//! Rendering boundary.
//!
//! The host implements [`Renderer`] on top of whatever draws pixels (a 2D
//! canvas, a GPU pipeline). [`CommandBuffer`] records calls instead, for
//! headless runs and tests.

use crate::SpriteKey;
use glam::Vec2;

pub trait Renderer {
    /// Called before each frame's draw calls
    fn begin_frame(&mut self) {}

    /// Blit `sprite` with its top-left corner at `pos`, scaled to `size`
    fn draw_sprite(&mut self, sprite: SpriteKey, pos: Vec2, size: Vec2);

    fn draw_score(&mut self, score: u32);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Sprite { sprite: SpriteKey, pos: Vec2, size: Vec2 },
    Score(u32),
}

/// Renderer that only records what it was asked to draw
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Positions of every draw of `sprite`, in draw order
    pub fn positions_of(&self, sprite: SpriteKey) -> Vec<Vec2> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Sprite { sprite: s, pos, .. } if *s == sprite => Some(*pos),
                _ => None,
            })
            .collect()
    }

    pub fn last_score(&self) -> Option<u32> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::Score(score) => Some(*score),
            _ => None,
        })
    }
}

impl Renderer for CommandBuffer {
    /// Keeps only the latest frame
    fn begin_frame(&mut self) {
        self.clear();
    }

    fn draw_sprite(&mut self, sprite: SpriteKey, pos: Vec2, size: Vec2) {
        self.commands.push(DrawCommand::Sprite { sprite, pos, size });
    }

    fn draw_score(&mut self, score: u32) {
        self.commands.push(DrawCommand::Score(score));
    }
}
