//! Listener for notifications raised by the audio output

use std::sync::Weak;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::audio::{MediaEvent, MediaEventChannel};

use super::{PlayerInner, PlaylistPlayer};

pub(super) fn spawn_listener(
    player: Weak<Mutex<PlayerInner>>,
    mut events: MediaEventChannel,
) -> JoinHandle<()> {
    tracing::info!("Starting media event listener");

    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            let Some(inner) = player.upgrade() else {
                tracing::debug!("Player gone, media event listener shutting down");
                break;
            };
            inner.lock().await.handle_media_event(event).await;
        }
    })
}

impl PlaylistPlayer {
    /// Feed an event as if the audio output had raised it.
    pub async fn handle_media_event(&self, event: MediaEvent) {
        self.inner.lock().await.handle_media_event(event).await;
    }
}

impl PlayerInner {
    pub(super) async fn handle_media_event(&mut self, event: MediaEvent) {
        if event.load_id() != self.load_id {
            tracing::trace!(
                source = event.source(),
                load = event.load_id(),
                current = self.load_id,
                "Dropping media event for a previous load"
            );
            return;
        }
        if self.state.has_error {
            return;
        }

        match event {
            MediaEvent::MetadataLoaded { duration_secs, .. } => {
                tracing::debug!(duration_secs, "Metadata loaded");
                self.state.duration_secs = duration_secs.max(0.0);
                self.publish();
            }
            MediaEvent::Ended { .. } => {
                tracing::debug!(index = self.state.current_index, "Track ended, advancing");
                if let Err(e) = self.step(1).await {
                    tracing::warn!(error = %e, "Could not continue with the next track");
                    // Nobody may be listening
                    let _ = self.background_errors.send(e);
                }
            }
            MediaEvent::Error { source, reason, .. } => {
                tracing::error!(source = %source, reason = %reason, "Media unavailable, player degraded");
                self.sampler.stop();
                self.audio.pause();
                self.state.is_playing = false;
                self.state.has_error = true;
                self.state.error = Some(reason);
                self.publish();
            }
        }
    }
}

impl Drop for PlayerInner {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            listener.abort();
        }
    }
}
