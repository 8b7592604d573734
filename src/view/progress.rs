//! Player bar rendering: now playing, progress gauge and the playlist panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{PlayerSnapshot, Track};
use super::utils::{format_duration, render_scrollable_list, truncate_string};

pub fn render_progress_bar(frame: &mut Frame, area: Rect, player: &PlayerSnapshot) {
    let playback = &player.playback;

    let status_text = if playback.is_playing {
        format!(" ▶ {} | {}", player.track.title, player.track.artist)
    } else {
        format!(" ⏸  {} | {}", player.track.title, player.track.artist)
    };

    let volume_text = if playback.is_muted {
        "Muted".to_string()
    } else {
        format!("Vol: {}%", playback.volume_percent)
    };

    let time_str = format!(
        "{} / {}",
        format_duration(player.current_time_secs()),
        format_duration(playback.duration_secs)
    );

    let controls_info = format!(" Track {} | {} ", playback.current_index + 1, volume_text);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} ", status_text))
                .title_bottom(Line::from(controls_info).right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(playback.progress_fraction.clamp(0.0, 1.0))
        .label(time_str);

    frame.render_widget(gauge, area);
}

/// Shown instead of the player once the audio output failed for good
pub fn render_unavailable(frame: &mut Frame, area: Rect, player: &PlayerSnapshot) {
    let detail = player
        .playback
        .error
        .as_deref()
        .map(|reason| format!(" ({})", reason))
        .unwrap_or_default();

    let message = Paragraph::new(format!(
        "Music player unavailable. Please check your audio settings.{}",
        detail
    ))
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Music ")
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(message, area);
}

pub fn render_playlist(frame: &mut Frame, area: Rect, tracks: &[Track], player: &PlayerSnapshot) {
    let current = player.playback.current_index;
    let width = area.width.saturating_sub(12) as usize;

    let items: Vec<ListItem> = tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let playing_marker = if i == current && player.playback.is_playing { " ♪" } else { "" };
            let text = format!(
                "{} {}{}",
                i + 1,
                truncate_string(&format!("{} - {}", track.title, track.artist), width),
                playing_marker
            );
            let style = if i == current {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Playlist (1-9 to select) ")
        .padding(Padding::horizontal(1));

    render_scrollable_list(frame, area, items, current, block);
}
