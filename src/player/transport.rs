//! Transport operations forwarded from the presentation layer

use crate::error::{Error, Result};

use super::{PlayerInner, PlaylistPlayer};

impl PlaylistPlayer {
    pub async fn toggle_play(&self) -> Result<()> {
        self.inner.lock().await.toggle_play().await
    }

    pub async fn seek_to(&self, fraction: f64) -> Result<()> {
        self.inner.lock().await.seek_to(fraction)
    }

    pub async fn next(&self) -> Result<()> {
        self.inner.lock().await.step(1).await
    }

    pub async fn previous(&self) -> Result<()> {
        self.inner.lock().await.step(-1).await
    }

    pub async fn select_track(&self, index: usize) -> Result<()> {
        let mut inner = self.inner.lock().await;
        if inner.state.has_error {
            return Ok(());
        }
        let len = inner.tracks.len();
        if index >= len {
            return Err(Error::OutOfRange { index, len });
        }
        inner.switch_to(index).await
    }

    pub async fn set_volume(&self, percent: i32) -> Result<()> {
        self.inner.lock().await.set_volume(percent)
    }

    pub async fn toggle_mute(&self) {
        self.inner.lock().await.toggle_mute();
    }
}

impl PlayerInner {
    pub(super) async fn toggle_play(&mut self) -> Result<()> {
        if self.state.has_error {
            tracing::debug!("Ignoring play toggle, player is degraded");
            return Ok(());
        }

        if self.state.is_playing {
            self.audio.pause();
            self.sampler.stop();
            self.state.is_playing = false;
            tracing::debug!(index = self.state.current_index, "Playback paused");
            self.publish();
            return Ok(());
        }

        let result = self.start_playback().await;
        self.publish();
        result
    }

    /// Ask the output to play the current track. On rejection the player
    /// stays paused and the error goes back to the caller.
    async fn start_playback(&mut self) -> Result<()> {
        match self.audio.play().await {
            Ok(()) => {
                self.state.is_playing = true;
                self.start_sampler();
                tracing::debug!(
                    index = self.state.current_index,
                    track = %self.current_track().title,
                    "Playback started"
                );
                Ok(())
            }
            Err(e) => {
                self.sampler.stop();
                self.state.is_playing = false;
                tracing::warn!(error = %e, "Playback request rejected");
                Err(match e {
                    Error::PlaybackRejected(_) => e,
                    other => Error::rejected(other.to_string()),
                })
            }
        }
    }

    pub(super) fn seek_to(&mut self, fraction: f64) -> Result<()> {
        if self.state.has_error {
            return Ok(());
        }
        if !(0.0..=1.0).contains(&fraction) {
            return Err(Error::invalid(format!("seek fraction {} outside 0..=1", fraction)));
        }
        if self.state.duration_secs <= 0.0 {
            return Err(Error::invalid("cannot seek before the track duration is known"));
        }

        let position = fraction * self.state.duration_secs;
        self.audio.set_current_time(position);
        self.state.progress_fraction = fraction;
        tracing::debug!(fraction, position, "Seeked");
        self.publish();
        Ok(())
    }

    pub(super) async fn step(&mut self, steps: isize) -> Result<()> {
        if self.state.has_error {
            return Ok(());
        }
        let len = self.tracks.len() as isize;
        let index = (self.state.current_index as isize + steps).rem_euclid(len) as usize;
        self.switch_to(index).await
    }

    /// Make `index` the current track, keeping playback going if it was.
    pub(super) async fn switch_to(&mut self, index: usize) -> Result<()> {
        let was_playing = self.state.is_playing;

        // A pending sample must not land on the new track.
        self.sampler.stop();
        self.state.current_index = index;
        self.state.reset_progress();

        self.load_current();
        tracing::info!(
            index,
            track = %self.current_track().title,
            artist = %self.current_track().artist,
            was_playing,
            "Track changed"
        );

        let result = if was_playing {
            self.start_playback().await
        } else {
            Ok(())
        };
        self.publish();
        result
    }

    pub(super) fn set_volume(&mut self, percent: i32) -> Result<()> {
        let volume = u8::try_from(percent)
            .ok()
            .filter(|v| *v <= 100)
            .ok_or_else(|| Error::invalid(format!("volume {} outside 0..=100", percent)))?;

        self.state.volume_percent = volume;
        self.apply_volume();
        tracing::debug!(volume, muted = self.state.is_muted, "Volume changed");
        self.publish();
        Ok(())
    }

    pub(super) fn toggle_mute(&mut self) {
        self.state.is_muted = !self.state.is_muted;
        self.apply_volume();
        tracing::debug!(muted = self.state.is_muted, "Mute toggled");
        self.publish();
    }
}
