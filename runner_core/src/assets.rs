//! Opaque asset handles.
//!
//! The host resolves every key to a loaded image or sound before the session
//! starts; the core only passes keys through to the renderer and audio layer.

use crate::ObstacleKind;

/// Sprite handle by logical name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    /// Player animation frame, 0 = idle/jump, 1..=5 = running
    PlayerFrame(u8),
    Obstacle(ObstacleKind),
    Rabbi,
    Channel14,
    Coin,
    Background,
    Ground,
}

/// Sound handle by logical name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundKey {
    Jump,
    Rabbi,
    Channel14,
    Coin,
    /// Looping track, driven by [`MusicCue`]s rather than one-shot cues
    BackgroundMusic,
}

/// Playback change for [`SoundKey::BackgroundMusic`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicCue {
    /// Restart the track from the beginning
    Play,
    Pause,
}
