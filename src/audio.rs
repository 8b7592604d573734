//! Audio output capability consumed by the playlist player
//!
//! The player never talks to a platform API directly. It owns one
//! [`AudioCapability`] handed to it at mount time; [`acquire_audio`] picks the
//! clock-driven output or the silent fallback when no output is available.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::PlaybackTiming;

/// Identifies one `load` call. The player hands out a fresh one per load, so
/// reloading the same source still tells old and new events apart.
pub type LoadId = u64;

/// Notifications raised by an audio output, tagged with the load they refer to
#[derive(Clone, Debug, PartialEq)]
pub enum MediaEvent {
    MetadataLoaded { load: LoadId, source: String, duration_secs: f64 },
    Ended { load: LoadId, source: String },
    Error { load: LoadId, source: String, reason: String },
}

impl MediaEvent {
    pub fn load_id(&self) -> LoadId {
        match self {
            MediaEvent::MetadataLoaded { load, .. }
            | MediaEvent::Ended { load, .. }
            | MediaEvent::Error { load, .. } => *load,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            MediaEvent::MetadataLoaded { source, .. }
            | MediaEvent::Ended { source, .. }
            | MediaEvent::Error { source, .. } => source,
        }
    }
}

pub type MediaEventChannel = mpsc::UnboundedReceiver<MediaEvent>;

#[async_trait]
pub trait AudioCapability: Send {
    fn name(&self) -> &str;

    /// Replace the current source. Playback stops and the position resets.
    /// Every event raised for this source carries `load`.
    fn load(&mut self, source: &str, load: LoadId);

    /// Start or resume playback; fails with [`Error::PlaybackRejected`].
    async fn play(&mut self) -> Result<()>;

    fn pause(&mut self);

    fn set_current_time(&mut self, seconds: f64);

    fn current_time(&self) -> f64;

    /// `None` until metadata for the current source is known
    fn duration(&self) -> Option<f64>;

    /// Output level in `0.0..=1.0`
    fn set_volume(&mut self, level: f32);

    /// Hand over the event receiver. Only the first call returns it.
    fn take_event_channel(&mut self) -> Option<MediaEventChannel>;
}

/// Pick an output for this session.
pub fn acquire_audio(config: &Config) -> Box<dyn AudioCapability> {
    if config.player.audio_enabled {
        tracing::info!(tracks = config.playlist.len(), "Using clock audio output");
        Box::new(ClockAudio::new(config.durations()))
    } else {
        tracing::info!("Audio output disabled, using silent fallback");
        Box::new(SilentAudio)
    }
}

/// An output that advances with the tokio clock instead of decoding audio.
///
/// Sources are looked up in a catalog of known durations; a source missing
/// from the catalog reports an unrecoverable error on load.
pub struct ClockAudio {
    catalog: HashMap<String, f64>,
    source: Option<String>,
    load_id: LoadId,
    duration: Option<f64>,
    timing: PlaybackTiming,
    volume: f32,
    events_tx: mpsc::UnboundedSender<MediaEvent>,
    events_rx: Option<MediaEventChannel>,
    end_timer: Option<JoinHandle<()>>,
}

impl ClockAudio {
    pub fn new(catalog: HashMap<String, f64>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            catalog,
            source: None,
            load_id: 0,
            duration: None,
            timing: PlaybackTiming::default(),
            volume: 1.0,
            events_tx,
            events_rx: Some(events_rx),
            end_timer: None,
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.timing.is_playing
    }

    fn emit(&self, event: MediaEvent) {
        // The receiver is gone once the player has been torn down.
        let _ = self.events_tx.send(event);
    }

    fn cancel_end_timer(&mut self) {
        if let Some(timer) = self.end_timer.take() {
            timer.abort();
        }
    }

    fn schedule_end(&mut self) {
        self.cancel_end_timer();
        let Some(source) = self.source.clone() else {
            return;
        };
        let remaining = match Duration::try_from_secs_f64(self.timing.remaining_secs()) {
            Ok(remaining) => remaining,
            Err(e) => {
                tracing::warn!(source = %source, error = %e, "Track end not representable, playing without an end");
                return;
            }
        };
        let load = self.load_id;
        let events_tx = self.events_tx.clone();
        self.end_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(remaining).await;
            let _ = events_tx.send(MediaEvent::Ended { load, source });
        }));
    }
}

#[async_trait]
impl AudioCapability for ClockAudio {
    fn name(&self) -> &str {
        "clock"
    }

    fn load(&mut self, source: &str, load: LoadId) {
        self.cancel_end_timer();
        self.source = Some(source.to_string());
        self.load_id = load;

        match self.catalog.get(source).copied() {
            Some(duration_secs) => {
                tracing::debug!(source, duration_secs, "Source loaded");
                self.duration = Some(duration_secs);
                self.timing.reset(duration_secs);
                self.emit(MediaEvent::MetadataLoaded {
                    load,
                    source: source.to_string(),
                    duration_secs,
                });
            }
            None => {
                tracing::warn!(source, "Source not found in catalog");
                self.duration = None;
                self.timing.reset(0.0);
                self.emit(MediaEvent::Error {
                    load,
                    source: source.to_string(),
                    reason: format!("no media available at {}", source),
                });
            }
        }
    }

    async fn play(&mut self) -> Result<()> {
        if self.source.is_none() {
            return Err(Error::rejected("no source loaded"));
        }
        if self.duration.is_none() {
            return Err(Error::rejected("source could not be loaded"));
        }

        self.timing.set_playing(true);
        self.schedule_end();
        Ok(())
    }

    fn pause(&mut self) {
        self.cancel_end_timer();
        self.timing.set_playing(false);
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.timing.set_position(seconds);
        if self.timing.is_playing {
            self.schedule_end();
        }
    }

    fn current_time(&self) -> f64 {
        self.timing.current_position_secs()
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level.clamp(0.0, 1.0);
    }

    fn take_event_channel(&mut self) -> Option<MediaEventChannel> {
        self.events_rx.take()
    }
}

impl Drop for ClockAudio {
    fn drop(&mut self) {
        self.cancel_end_timer();
    }
}

/// Fallback used when no audio output exists. Every play request is rejected.
#[derive(Debug, Default)]
pub struct SilentAudio;

#[async_trait]
impl AudioCapability for SilentAudio {
    fn name(&self) -> &str {
        "silent"
    }

    fn load(&mut self, _source: &str, _load: LoadId) {}

    async fn play(&mut self) -> Result<()> {
        Err(Error::rejected("audio output unavailable"))
    }

    fn pause(&mut self) {}

    fn set_current_time(&mut self, _seconds: f64) {}

    fn current_time(&self) -> f64 {
        0.0
    }

    fn duration(&self) -> Option<f64> {
        None
    }

    fn set_volume(&mut self, _level: f32) {}

    fn take_event_channel(&mut self) -> Option<MediaEventChannel> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(entries: &[(&str, f64)]) -> ClockAudio {
        ClockAudio::new(entries.iter().map(|(s, d)| (s.to_string(), *d)).collect())
    }

    #[tokio::test(start_paused = true)]
    async fn load_reports_metadata() {
        let mut audio = clock(&[("a.mp3", 120.0)]);
        let mut events = audio.take_event_channel().unwrap();
        assert!(audio.take_event_channel().is_none());

        audio.load("a.mp3", 7);
        assert_eq!(audio.duration(), Some(120.0));
        assert_eq!(
            events.recv().await,
            Some(MediaEvent::MetadataLoaded {
                load: 7,
                source: "a.mp3".to_string(),
                duration_secs: 120.0
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_source_reports_error_and_rejects_play() {
        let mut audio = clock(&[]);
        let mut events = audio.take_event_channel().unwrap();

        audio.load("missing.mp3", 1);
        assert!(matches!(events.recv().await, Some(MediaEvent::Error { .. })));
        assert!(matches!(audio.play().await, Err(Error::PlaybackRejected(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn playing_to_the_end_emits_ended() {
        let mut audio = clock(&[("a.mp3", 3.0)]);
        let mut events = audio.take_event_channel().unwrap();
        audio.load("a.mp3", 4);
        events.recv().await;

        audio.play().await.unwrap();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!((audio.current_time() - 1.5).abs() < 1e-6);

        assert_eq!(
            events.recv().await,
            Some(MediaEvent::Ended {
                load: 4,
                source: "a.mp3".to_string()
            })
        );
        assert_eq!(audio.current_time(), 3.0);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_freezes_position_and_cancels_end() {
        let mut audio = clock(&[("a.mp3", 2.0)]);
        let mut events = audio.take_event_channel().unwrap();
        audio.load("a.mp3", 1);
        events.recv().await;

        audio.play().await.unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
        audio.pause();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!((audio.current_time() - 1.0).abs() < 1e-6);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn seeking_reschedules_the_end() {
        let mut audio = clock(&[("a.mp3", 10.0)]);
        let mut events = audio.take_event_channel().unwrap();
        audio.load("a.mp3", 1);
        events.recv().await;

        audio.play().await.unwrap();
        audio.set_current_time(9.0);
        tokio::time::sleep(Duration::from_millis(1100)).await;
        assert!(matches!(events.try_recv(), Ok(MediaEvent::Ended { .. })));
    }

    #[tokio::test(start_paused = true)]
    async fn huge_duration_plays_without_an_end() {
        let mut audio = clock(&[("a.mp3", 1e20)]);
        let mut events = audio.take_event_channel().unwrap();
        audio.load("a.mp3", 1);
        events.recv().await;

        audio.play().await.unwrap();
        audio.set_current_time(5.0);
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(audio.is_playing());
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn silent_output_rejects_playback() {
        let mut audio = SilentAudio;
        audio.load("a.mp3", 1);
        assert!(audio.take_event_channel().is_none());
        assert!(audio.play().await.unwrap_err().is_transient());
        assert_eq!(audio.duration(), None);
    }
}
