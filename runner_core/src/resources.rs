use crate::{CollectibleKind, EntityKind, MusicCue, SoundKey, SpawnOrder};

/// Run score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Spawn timer with a randomized threshold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnTimer {
    pub ticks: u32, // Ticks since the last spawn attempt
    pub threshold: Option<u32>, // Rolled lazily on the first tick of an interval
}

impl SpawnTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick; true when an attempt is due. `roll` picks the
    /// interval length when none is active.
    pub fn tick(&mut self, roll: impl FnOnce() -> u32) -> bool {
        let threshold = *self.threshold.get_or_insert_with(roll);
        self.ticks += 1;
        if self.ticks >= threshold {
            self.ticks = 0;
            self.threshold = None;
            true
        } else {
            false
        }
    }
}

/// Hands out monotonically increasing spawn orders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnCounter {
    next: u64,
}

impl SpawnCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_order(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.next);
        self.next += 1;
        order
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub jumped: bool,
    pub spawned: Vec<EntityKind>,
    pub spawn_skipped: bool,
    pub collected: Vec<CollectibleKind>,
    pub game_over: Option<u32>, // Final score
    pub music: Option<MusicCue>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.jumped = false;
        self.spawned.clear();
        self.spawn_skipped = false;
        self.collected.clear();
        self.game_over = None;
        self.music = None;
    }

    /// Sound cues for the host's audio layer, in the order they happened
    pub fn sounds(&self) -> Vec<SoundKey> {
        let mut sounds = Vec::new();
        if self.jumped {
            sounds.push(SoundKey::Jump);
        }
        sounds.extend(
            self.collected
                .iter()
                .filter_map(|kind| EntityKind::Collectible(*kind).spec().pickup_sound),
        );
        sounds
    }

    /// Background track change for this tick, if any
    pub fn music_cue(&self) -> Option<(SoundKey, MusicCue)> {
        self.music.map(|cue| (SoundKey::BackgroundMusic, cue))
    }
}
