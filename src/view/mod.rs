//! View module - UI rendering
//!
//! Renders component snapshots with ratatui. Nothing here holds state.
//!
//! - `utils`: Shared helpers (time formatting, truncation, dots)
//! - `layout`: Hero headline and key hints
//! - `content`: Testimonial carousel
//! - `progress`: Player bar, playlist panel, degraded display
//! - `overlays`: Transient notices

mod utils;
mod layout;
mod content;
mod progress;
mod overlays;

pub use utils::format_duration;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::controller::ViewState;
use crate::typewriter::TypewriterFrame;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, state: &ViewState, headline: &TypewriterFrame<'_>) {
        let player_height = match (state.ui.player_visible, state.ui.playlist_expanded) {
            (false, _) => 0,
            (true, false) => 3,
            (true, true) => 3 + state.tracks.len() as u16 + 2,
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // Hero headline
                Constraint::Min(6),                // Testimonials
                Constraint::Length(player_height), // Player
                Constraint::Length(1),             // Key hints
            ])
            .split(frame.area());

        layout::render_hero(frame, chunks[0], headline, state.ui.secret_unlocked);

        content::render_testimonials(
            frame,
            chunks[1],
            &state.carousel,
            state.testimonial.as_ref(),
            state.ui.category.as_deref(),
        );

        if state.ui.player_visible {
            if state.player.playback.has_error {
                progress::render_unavailable(frame, chunks[2], &state.player);
            } else if state.ui.playlist_expanded {
                let player_chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(chunks[2]);
                progress::render_playlist(frame, player_chunks[0], &state.tracks, &state.player);
                progress::render_progress_bar(frame, player_chunks[1], &state.player);
            } else {
                progress::render_progress_bar(frame, chunks[2], &state.player);
            }
        }

        layout::render_key_hints(frame, chunks[3], state.ui.player_visible);

        if let Some(notice) = &state.ui.notice {
            overlays::render_notice(frame, notice);
        }
    }
}
