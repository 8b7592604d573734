//! Layout rendering (hero headline, key hints)

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::typewriter::TypewriterFrame;

pub fn render_hero(frame: &mut Frame, area: Rect, headline: &TypewriterFrame<'_>, secret_unlocked: bool) {
    let cursor = if headline.cursor_blinking() { "▌" } else { "" };
    let title = if secret_unlocked { " Portfolio 🎮 " } else { " Portfolio " };

    let hero = Paragraph::new(Line::from(vec![
        Span::styled(
            headline.visible.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(hero, area);
}

pub fn render_key_hints(frame: &mut Frame, area: Rect, player_visible: bool) {
    let hints: &[(&str, &str)] = if player_visible {
        &[
            ("Space", "play"),
            ("N/P", "track"),
            (",/.", "seek"),
            ("+/-", "vol"),
            ("M", "mute"),
            ("E", "playlist"),
            ("←/→", "quote"),
            ("H", "hold"),
            ("C", "category"),
            ("V", "hide player"),
            ("Q", "quit"),
        ]
    } else {
        &[
            ("←/→", "quote"),
            ("1-9", "dot"),
            ("H", "hold"),
            ("C", "category"),
            ("V", "show player"),
            ("Q", "quit"),
        ]
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(
                    format!(" {}", key),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" {} ", action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
