//! Core type definitions shared by the components and the terminal UI

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// One playable audio item with its display metadata
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub cover_ref: String,
    pub audio_ref: String,
}

/// A quote shown by the testimonial carousel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Testimonial {
    /// Initials used when the avatar cannot be shown
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Last carousel transition direction, only used to pick an animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn from_steps(steps: isize) -> Self {
        if steps < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

/// UI state for the terminal front end
#[derive(Clone, Debug)]
pub struct UiState {
    pub started_at: Instant,
    pub player_visible: bool,
    pub playlist_expanded: bool,
    pub category: Option<String>,
    pub notice: Option<String>,
    pub notice_timestamp: Option<Instant>,
    pub secret_unlocked: bool,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            started_at: Instant::now(),
            player_visible: true,
            playlist_expanded: false,
            category: None,
            notice: None,
            notice_timestamp: None,
            secret_unlocked: false,
            should_quit: false,
        }
    }
}

impl UiState {
    pub fn set_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
        self.notice_timestamp = Some(Instant::now());
    }

    /// Drop a notice once it has been on screen for `max_age`
    pub fn clear_stale_notice(&mut self, max_age: std::time::Duration) {
        if let Some(ts) = self.notice_timestamp {
            if ts.elapsed() >= max_age {
                self.notice = None;
                self.notice_timestamp = None;
            }
        }
    }
}
