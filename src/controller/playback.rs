//! Player intents

use crate::log_intent_result;

use super::AppController;

const VOLUME_STEP: i32 = 5;
const SEEK_STEP: f64 = 0.05;

impl AppController {
    pub async fn toggle_playback(&self) {
        if let Some(e) = self.player.snapshot().media_error() {
            self.notify(Self::format_error(&e)).await;
            return;
        }
        let result = self.player.toggle_play().await;
        log_intent_result!("toggle_play", result);
        if let Err(e) = result {
            self.notify(Self::format_error(&e)).await;
        }
    }

    pub async fn next_track(&self) {
        let result = self.player.next().await;
        log_intent_result!("next", result);
        if let Err(e) = result {
            self.notify(Self::format_error(&e)).await;
        }
    }

    pub async fn previous_track(&self) {
        let result = self.player.previous().await;
        log_intent_result!("previous", result);
        if let Err(e) = result {
            self.notify(Self::format_error(&e)).await;
        }
    }

    pub async fn select_track(&self, index: usize) {
        let result = self.player.select_track(index).await;
        log_intent_result!("select_track", result);
        if let Err(e) = result {
            self.notify(Self::format_error(&e)).await;
        }
    }

    /// Move the playhead by `direction` seek steps.
    pub async fn seek_by(&self, direction: f64) {
        let current = self.player.snapshot().playback.progress_fraction;
        let target = (current + direction * SEEK_STEP).clamp(0.0, 1.0);
        let result = self.player.seek_to(target).await;
        log_intent_result!("seek", result);
        if let Err(e) = result {
            self.notify(Self::format_error(&e)).await;
        }
    }

    pub async fn volume_up(&self) {
        let current = self.player.snapshot().playback.volume_percent as i32;
        self.change_volume((current + VOLUME_STEP).min(100)).await;
    }

    pub async fn volume_down(&self) {
        let current = self.player.snapshot().playback.volume_percent as i32;
        self.change_volume((current - VOLUME_STEP).max(0)).await;
    }

    async fn change_volume(&self, percent: i32) {
        let result = self.player.set_volume(percent).await;
        log_intent_result!("set_volume", result);
        if let Err(e) = result {
            self.notify(Self::format_error(&e)).await;
        }
    }

    pub async fn toggle_mute(&self) {
        self.player.toggle_mute().await;
    }
}
