//! Playlist player - playback state machine over a fixed list of tracks
//!
//! Organized like the rest of the crate's components:
//!
//! - `transport`: user-facing transport operations (play, seek, next, volume)
//! - `media_events`: listener for notifications raised by the audio output
//!
//! All state lives behind one mutex. The progress sampler and the event
//! listener only hold weak references to it, so nothing they do can outlive
//! the player.

mod media_events;
mod transport;

use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::{Mutex, broadcast, watch};
use tokio::task::JoinHandle;

use crate::audio::{AudioCapability, LoadId};
use crate::config::DEFAULT_SAMPLE_INTERVAL_MS;
use crate::error::{Error, Result};
use crate::model::{DEFAULT_VOLUME_PERCENT, PlaybackState, PlayerSnapshot, Track};
use crate::task::RepeatingTask;

const BACKGROUND_ERROR_CAPACITY: usize = 8;

/// Knobs applied when the player mounts
#[derive(Clone, Debug)]
pub struct PlayerSettings {
    pub initial_volume: u8,
    pub sample_interval: Duration,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            initial_volume: DEFAULT_VOLUME_PERCENT,
            sample_interval: Duration::from_millis(DEFAULT_SAMPLE_INTERVAL_MS),
        }
    }
}

pub(crate) struct PlayerInner {
    this: Weak<Mutex<PlayerInner>>,
    tracks: Vec<Track>,
    state: PlaybackState,
    audio: Box<dyn AudioCapability>,
    sampler: RepeatingTask,
    sample_interval: Duration,
    listener: Option<JoinHandle<()>>,
    /// Bumped on every load; events tagged with an older one are stale
    load_id: LoadId,
    snapshots: watch::Sender<PlayerSnapshot>,
    background_errors: broadcast::Sender<Error>,
}

/// Handle to a mounted player. Clones share the same player.
#[derive(Clone)]
pub struct PlaylistPlayer {
    inner: Arc<Mutex<PlayerInner>>,
    updates: watch::Receiver<PlayerSnapshot>,
    background_errors: broadcast::Sender<Error>,
}

impl PlaylistPlayer {
    /// Take ownership of `audio`, load the first track and start listening
    /// for media events. Must be called from within a tokio runtime.
    pub async fn mount(
        tracks: Vec<Track>,
        mut audio: Box<dyn AudioCapability>,
        settings: PlayerSettings,
    ) -> Result<Self> {
        if tracks.is_empty() {
            return Err(Error::invalid("playlist must contain at least one track"));
        }
        if settings.initial_volume > 100 {
            return Err(Error::invalid(format!(
                "initial volume {} outside 0..=100",
                settings.initial_volume
            )));
        }
        if settings.sample_interval.is_zero() {
            return Err(Error::invalid("sample interval must be greater than zero"));
        }

        let state = PlaybackState {
            volume_percent: settings.initial_volume,
            ..Default::default()
        };
        let initial = PlayerSnapshot {
            track: tracks[0].clone(),
            playback: state.clone(),
        };
        let (snapshots, updates) = watch::channel(initial);
        let (background_errors, _) = broadcast::channel(BACKGROUND_ERROR_CAPACITY);

        let events = audio.take_event_channel();
        audio.set_volume(state.effective_volume() as f32 / 100.0);

        tracing::info!(
            tracks = tracks.len(),
            output = audio.name(),
            volume = state.volume_percent,
            "Mounting playlist player"
        );

        let inner = Arc::new_cyclic(|this| {
            Mutex::new(PlayerInner {
                this: this.clone(),
                tracks,
                state,
                audio,
                sampler: RepeatingTask::idle(),
                sample_interval: settings.sample_interval,
                listener: None,
                load_id: 0,
                snapshots,
                background_errors: background_errors.clone(),
            })
        });

        {
            let mut guard = inner.lock().await;
            if let Some(events) = events {
                guard.listener = Some(media_events::spawn_listener(Arc::downgrade(&inner), events));
            } else {
                tracing::debug!("Audio output has no event channel");
            }
            guard.load_current();
        }

        Ok(Self {
            inner,
            updates,
            background_errors,
        })
    }

    /// Stop sampling and listening, pause the output. Safe to call twice.
    pub async fn unmount(&self) {
        let mut inner = self.inner.lock().await;
        inner.sampler.stop();
        if let Some(listener) = inner.listener.take() {
            listener.abort();
        }
        if inner.state.is_playing {
            inner.audio.pause();
            inner.state.is_playing = false;
        }
        inner.publish();
        tracing::info!("Playlist player unmounted");
    }

    pub fn subscribe(&self) -> watch::Receiver<PlayerSnapshot> {
        self.updates.clone()
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.updates.borrow().clone()
    }

    pub async fn tracks(&self) -> Vec<Track> {
        self.inner.lock().await.tracks.clone()
    }

    /// Failures that happen with no caller to return them to, such as a
    /// rejected play request while continuing after a finished track.
    pub fn background_errors(&self) -> broadcast::Receiver<Error> {
        self.background_errors.subscribe()
    }

    pub async fn is_sampling(&self) -> bool {
        self.inner.lock().await.sampler.is_running()
    }
}

impl PlayerInner {
    fn current_track(&self) -> &Track {
        &self.tracks[self.state.current_index]
    }

    /// Load the current track under a fresh load id.
    fn load_current(&mut self) {
        self.load_id += 1;
        let source = self.current_track().audio_ref.clone();
        self.audio.load(&source, self.load_id);
    }

    fn publish(&self) {
        let next = PlayerSnapshot {
            track: self.current_track().clone(),
            playback: self.state.clone(),
        };
        self.snapshots.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    fn apply_volume(&mut self) {
        let level = self.state.effective_volume() as f32 / 100.0;
        self.audio.set_volume(level);
    }

    fn start_sampler(&mut self) {
        let this = self.this.clone();
        self.sampler = RepeatingTask::start(self.sample_interval, move || {
            let this = this.clone();
            async move {
                if let Some(inner) = this.upgrade() {
                    inner.lock().await.sample_progress();
                }
            }
        });
    }

    fn sample_progress(&mut self) {
        if !self.state.is_playing {
            return;
        }
        let duration = self.state.duration_secs;
        self.state.progress_fraction = if duration > 0.0 {
            (self.audio.current_time() / duration).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.publish();
    }
}
