//! Sound effects
//!
//! The game fires sounds and forgets them. Playback itself belongs to a
//! `SoundSink`; a sink that fails is logged and otherwise ignored.

use crate::error::AssetLoadError;
use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Collectible picked up
    ItemPickup,
    /// Ball left the ground
    Jump,
    /// Enemy contact or fall
    Hit,
    /// All items on a level collected
    LevelClear,
    GameOver,
    Victory,
    /// Background loop, started once at boot
    Music,
}

impl SoundEffect {
    /// Asset name a sink would look up
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::ItemPickup => "pickup",
            SoundEffect::Jump => "jump",
            SoundEffect::Hit => "hit",
            SoundEffect::LevelClear => "level_clear",
            SoundEffect::GameOver => "game_over",
            SoundEffect::Victory => "victory",
            SoundEffect::Music => "music",
        }
    }

    pub fn is_music(&self) -> bool {
        matches!(self, SoundEffect::Music)
    }
}

/// Something that can actually make noise
pub trait SoundSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AssetLoadError>;
}

/// Discards every sound
#[derive(Debug, Default)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&mut self, _effect: SoundEffect, _volume: f32) -> Result<(), AssetLoadError> {
        Ok(())
    }
}

/// Writes each sound to the log instead of playing it
#[derive(Debug, Default)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AssetLoadError> {
        log::debug!("Playing {} at {volume:.2}", effect.asset_name());
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Box<dyn SoundSink>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Box::new(NullSink))
    }
}

impl std::fmt::Debug for AudioManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioManager")
            .field("master_volume", &self.master_volume)
            .field("muted", &self.muted)
            .finish_non_exhaustive()
    }
}

impl AudioManager {
    pub fn new(sink: Box<dyn SoundSink>) -> Self {
        let defaults = Settings::default();
        let mut audio = Self {
            sink,
            master_volume: 0.0,
            sfx_volume: 0.0,
            music_volume: 0.0,
            muted: false,
        };
        audio.apply_settings(&defaults);
        audio
    }

    /// Take volumes and mute state from settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.master_volume = settings.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = settings.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = settings.music_volume.clamp(0.0, 1.0);
        self.muted = settings.muted;
    }

    /// Get effective volume
    fn effective_volume(&self, effect: SoundEffect) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = if effect.is_music() {
            self.music_volume
        } else {
            self.sfx_volume
        };
        self.master_volume * channel
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume(effect);
        if vol <= 0.0 {
            return;
        }
        if let Err(e) = self.sink.play(effect, vol) {
            log::warn!("Sound {} skipped: {e}", effect.asset_name());
        }
    }
}
