use crate::{SoundKey, SpriteKey};
use glam::Vec2;

/// Axis-aligned bounding box, y grows downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos, pos + size)
    }

    /// Shrink every side by `padding`
    pub fn inset(&self, padding: f32) -> Self {
        let padding = Vec2::splat(padding);
        Self::new(self.min + padding, self.max - padding)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap: touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Position and size of a scrolling entity. Size is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2, // Top-left corner
    size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Fully past the left edge of the viewport
    pub fn is_offscreen_left(&self) -> bool {
        self.pos.x + self.size.x < 0.0
    }
}

/// Obstacle variants, each with its own sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Sign,
    Barrel,
    Judge,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Sign, ObstacleKind::Barrel, ObstacleKind::Judge];
}

/// Collectible variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectibleKind {
    Rabbi,
    Channel14,
    Coin,
}

impl CollectibleKind {
    pub const ALL: [CollectibleKind; 3] = [
        CollectibleKind::Rabbi,
        CollectibleKind::Channel14,
        CollectibleKind::Coin,
    ];

    pub fn points(self) -> u32 {
        EntityKind::Collectible(self).spec().points
    }
}

/// Everything the spawner can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Obstacle(ObstacleKind),
    Collectible(CollectibleKind),
}

/// Fixed per-kind properties
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindSpec {
    pub size: Vec2,
    /// Distance from the ground level up to the entity's top edge
    pub ground_offset: f32,
    pub points: u32,
    pub sprite: SpriteKey,
    pub pickup_sound: Option<SoundKey>,
}

impl EntityKind {
    pub fn spec(self) -> KindSpec {
        match self {
            EntityKind::Obstacle(kind) => KindSpec {
                size: Vec2::new(70.0, 70.0),
                ground_offset: 70.0,
                points: 0,
                sprite: SpriteKey::Obstacle(kind),
                pickup_sound: None,
            },
            EntityKind::Collectible(CollectibleKind::Rabbi) => KindSpec {
                size: Vec2::new(70.0, 70.0),
                ground_offset: 70.0,
                points: 100,
                sprite: SpriteKey::Rabbi,
                pickup_sound: Some(SoundKey::Rabbi),
            },
            EntityKind::Collectible(CollectibleKind::Channel14) => KindSpec {
                size: Vec2::new(50.0, 50.0),
                ground_offset: 50.0,
                points: 50,
                sprite: SpriteKey::Channel14,
                pickup_sound: Some(SoundKey::Channel14),
            },
            EntityKind::Collectible(CollectibleKind::Coin) => KindSpec {
                size: Vec2::new(30.0, 30.0),
                ground_offset: 120.0, // Floats: only reachable mid-jump
                points: 10,
                sprite: SpriteKey::Coin,
                pickup_sound: Some(SoundKey::Coin),
            },
        }
    }
}

/// Obstacle tag component
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub kind: ObstacleKind,
}

/// Collectible tag component
#[derive(Debug, Clone, Copy)]
pub struct Collectible {
    pub kind: CollectibleKind,
}

/// Monotonic spawn counter; hecs does not iterate in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpawnOrder(pub u64);
