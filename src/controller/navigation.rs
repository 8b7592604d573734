//! Carousel intents, category tabs and panel toggles

use crate::carousel::RotationCarousel;
use crate::log_intent_result;
use crate::model::{filter_by_category, next_category};

use super::AppController;

impl AppController {
    pub async fn carousel_next(&self) {
        self.carousel.lock().await.next().await;
    }

    pub async fn carousel_previous(&self) {
        self.carousel.lock().await.previous().await;
    }

    pub async fn carousel_go_to(&self, index: usize) {
        let result = self.carousel.lock().await.go_to(index).await;
        log_intent_result!("carousel_go_to", result);
        if let Err(e) = result {
            self.notify(Self::format_error(&e)).await;
        }
    }

    /// Stands in for pointer hover: pauses rotation, or resumes it.
    pub async fn toggle_carousel_hold(&self) {
        let carousel = self.carousel.lock().await;
        if carousel.snapshot().is_paused {
            carousel.resume().await;
        } else {
            carousel.pause().await;
        }
    }

    /// Switch to the next category tab and rebuild the carousel for it.
    pub async fn cycle_category(&self) {
        let mut ui = self.ui_state.lock().await;
        let category = next_category(ui.category.as_deref());
        let items = filter_by_category(&self.testimonials, category.as_deref());
        tracing::debug!(category = ?category, items = items.len(), "Testimonial category changed");

        let mut carousel = self.carousel.lock().await;
        match RotationCarousel::mount(items, self.autoplay_interval) {
            Ok(fresh) => {
                carousel.unmount().await;
                *carousel = fresh;
                ui.category = category;
            }
            Err(e) => {
                tracing::error!(error = %e, "Could not rebuild carousel");
                ui.set_notice(Self::format_error(&e));
            }
        }
    }

    pub async fn toggle_playlist(&self) {
        let mut ui = self.ui_state.lock().await;
        ui.playlist_expanded = !ui.playlist_expanded;
    }

    pub async fn toggle_player_visible(&self) {
        let mut ui = self.ui_state.lock().await;
        ui.player_visible = !ui.player_visible;
        if !ui.player_visible {
            ui.playlist_expanded = false;
        }
    }
}
