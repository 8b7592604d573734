//! Playback-related types and state management

use tokio::time::Instant;

use super::types::Track;
use crate::error::Error;

pub const DEFAULT_VOLUME_PERCENT: u8 = 70;

/// Transport state of the playlist player
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackState {
    pub current_index: usize,
    pub is_playing: bool,
    pub progress_fraction: f64,
    pub duration_secs: f64,
    pub volume_percent: u8,
    pub is_muted: bool,
    pub has_error: bool,
    pub error: Option<String>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            progress_fraction: 0.0,
            duration_secs: 0.0,
            volume_percent: DEFAULT_VOLUME_PERCENT,
            is_muted: false,
            has_error: false,
            error: None,
        }
    }
}

impl PlaybackState {
    pub fn effective_volume(&self) -> u8 {
        if self.is_muted { 0 } else { self.volume_percent }
    }

    /// Progress and duration refer to the current track only.
    pub(crate) fn reset_progress(&mut self) {
        self.progress_fraction = 0.0;
        self.duration_secs = 0.0;
    }
}

/// What the presentation layer renders for the player
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerSnapshot {
    pub track: Track,
    pub playback: PlaybackState,
}

impl PlayerSnapshot {
    pub fn effective_volume(&self) -> u8 {
        self.playback.effective_volume()
    }

    pub fn current_time_secs(&self) -> f64 {
        self.playback.duration_secs * self.playback.progress_fraction
    }

    /// The failure that put the player into its degraded state, if any
    pub fn media_error(&self) -> Option<Error> {
        if !self.playback.has_error {
            return None;
        }
        let reason = self.playback.error.clone().unwrap_or_else(|| "unknown media error".to_string());
        Some(Error::MediaUnavailable(reason))
    }
}

/// Position bookkeeping for an output that advances with the clock
#[derive(Clone, Debug)]
pub struct PlaybackTiming {
    pub position_secs: f64,
    pub last_update: Instant,
    pub is_playing: bool,
    pub duration_secs: f64,
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            position_secs: 0.0,
            last_update: Instant::now(),
            is_playing: false,
            duration_secs: 0.0,
        }
    }
}

impl PlaybackTiming {
    pub fn current_position_secs(&self) -> f64 {
        let position = if self.is_playing {
            self.position_secs + self.last_update.elapsed().as_secs_f64()
        } else {
            self.position_secs
        };
        position.clamp(0.0, self.duration_secs.max(0.0))
    }

    pub fn remaining_secs(&self) -> f64 {
        (self.duration_secs - self.current_position_secs()).max(0.0)
    }

    pub fn set_playing(&mut self, is_playing: bool) {
        self.position_secs = self.current_position_secs();
        self.is_playing = is_playing;
        self.last_update = Instant::now();
    }

    pub fn set_position(&mut self, position_secs: f64) {
        self.position_secs = position_secs.clamp(0.0, self.duration_secs.max(0.0));
        self.last_update = Instant::now();
    }

    /// A freshly loaded source starts paused at zero.
    pub fn reset(&mut self, duration_secs: f64) {
        self.position_secs = 0.0;
        self.duration_secs = duration_secs;
        self.is_playing = false;
        self.last_update = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn media_error_only_when_degraded() {
        let mut snapshot = PlayerSnapshot {
            track: Track {
                id: 1,
                title: "Neon Dreams".to_string(),
                artist: "Synthwave".to_string(),
                cover_ref: String::new(),
                audio_ref: "neon.mp3".to_string(),
            },
            playback: PlaybackState::default(),
        };
        assert_eq!(snapshot.media_error(), None);

        snapshot.playback.has_error = true;
        snapshot.playback.error = Some("decode failed".to_string());
        assert_eq!(
            snapshot.media_error(),
            Some(Error::MediaUnavailable("decode failed".to_string()))
        );
    }

    #[test]
    fn muting_zeroes_effective_volume_only() {
        let mut state = PlaybackState {
            volume_percent: 40,
            ..Default::default()
        };
        assert_eq!(state.effective_volume(), 40);
        state.is_muted = true;
        assert_eq!(state.effective_volume(), 0);
        assert_eq!(state.volume_percent, 40);
    }

    #[tokio::test(start_paused = true)]
    async fn timing_advances_only_while_playing() {
        let mut timing = PlaybackTiming::default();
        timing.reset(10.0);
        timing.set_playing(true);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!((timing.current_position_secs() - 3.0).abs() < 1e-6);

        timing.set_playing(false);
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!((timing.current_position_secs() - 3.0).abs() < 1e-6);
        assert!((timing.remaining_secs() - 7.0).abs() < 1e-6);
    }

    #[tokio::test(start_paused = true)]
    async fn timing_clamps_to_duration() {
        let mut timing = PlaybackTiming::default();
        timing.reset(2.0);
        timing.set_playing(true);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(timing.current_position_secs(), 2.0);

        timing.set_position(-4.0);
        assert_eq!(timing.current_position_secs(), 0.0);
    }
}
