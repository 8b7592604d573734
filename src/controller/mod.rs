//! Controller module - Forwards user intents to the components
//!
//! The controller owns the mounted player and carousel, turns key presses
//! into intents and collects their snapshots for the view.
//!
//! - `input`: Key event handling
//! - `playback`: Player intents (transport, volume)
//! - `navigation`: Carousel intents, category tabs and panel toggles

mod input;
mod navigation;
mod playback;

use crossterm::event::KeyCode;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::carousel::{CarouselState, RotationCarousel};
use crate::error::{Error, Result};
use crate::model::{PlayerSnapshot, Testimonial, Track, UiState};
use crate::player::PlaylistPlayer;
use crate::sequence::KeySequence;

/// How long a transient notice stays on screen
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Everything the view needs for one frame
#[derive(Clone, Debug)]
pub struct ViewState {
    pub player: PlayerSnapshot,
    pub tracks: Vec<Track>,
    pub carousel: CarouselState,
    pub testimonial: Option<Testimonial>,
    pub ui: UiState,
}

#[derive(Clone)]
pub struct AppController {
    pub(crate) player: PlaylistPlayer,
    pub(crate) carousel: Arc<Mutex<RotationCarousel<Testimonial>>>,
    pub(crate) ui_state: Arc<Mutex<UiState>>,
    secret: Arc<Mutex<KeySequence<KeyCode>>>,
    background_errors: Arc<Mutex<broadcast::Receiver<Error>>>,
    testimonials: Arc<Vec<Testimonial>>,
    autoplay_interval: Duration,
}

impl AppController {
    pub fn new(
        player: PlaylistPlayer,
        testimonials: Vec<Testimonial>,
        autoplay_interval: Duration,
    ) -> Result<Self> {
        let carousel = RotationCarousel::mount(testimonials.clone(), autoplay_interval)?;
        let background_errors = player.background_errors();
        Ok(Self {
            player,
            carousel: Arc::new(Mutex::new(carousel)),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            secret: Arc::new(Mutex::new(KeySequence::new(konami_code()))),
            background_errors: Arc::new(Mutex::new(background_errors)),
            testimonials: Arc::new(testimonials),
            autoplay_interval,
        })
    }

    pub async fn view_state(&self) -> ViewState {
        if let Some(e) = self.drain_background_errors().await {
            self.notify(Self::format_error(&e)).await;
        }

        let ui = {
            let mut guard = self.ui_state.lock().await;
            guard.clear_stale_notice(NOTICE_TTL);
            guard.clone()
        };

        let carousel = self.carousel.lock().await;
        ViewState {
            player: self.player.snapshot(),
            tracks: self.player.tracks().await,
            carousel: carousel.snapshot(),
            testimonial: carousel.current().await,
            ui,
        }
    }

    /// Latest error the player raised on its own since the last frame
    async fn drain_background_errors(&self) -> Option<Error> {
        let mut errors = self.background_errors.lock().await;
        let mut latest = None;
        loop {
            match errors.try_recv() {
                Ok(e) => latest = Some(e),
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Dropped older background errors");
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }
        latest
    }

    pub async fn should_quit(&self) -> bool {
        self.ui_state.lock().await.should_quit
    }

    /// Release the components before the front end exits.
    pub async fn shutdown(&self) {
        self.carousel.lock().await.unmount().await;
        self.player.unmount().await;
    }

    pub(crate) async fn notify(&self, message: impl Into<String>) {
        self.ui_state.lock().await.set_notice(message);
    }

    pub(crate) fn format_error(error: &Error) -> String {
        match error {
            Error::PlaybackRejected(_) => {
                "Playback was blocked. Press space to try again.".to_string()
            }
            Error::MediaUnavailable(_) => {
                "Music player unavailable. Please check your audio settings.".to_string()
            }
            Error::OutOfRange { index, len } => {
                format!("Nothing at position {} (only {} entries)", index + 1, len)
            }
            Error::InvalidArgument(reason) => format!("Error: {}", reason),
        }
    }
}

/// ↑ ↑ ↓ ↓ ← → ← → b a
pub fn konami_code() -> Vec<KeyCode> {
    vec![
        KeyCode::Up,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Char('b'),
        KeyCode::Char('a'),
    ]
}
