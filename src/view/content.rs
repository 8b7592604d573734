//! Testimonial carousel rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::carousel::CarouselState;
use crate::model::{self, Testimonial};
use super::utils::dots;

pub fn render_testimonials(
    frame: &mut Frame,
    area: Rect,
    carousel: &CarouselState,
    testimonial: Option<&Testimonial>,
    category: Option<&str>,
) {
    let arrow = match carousel.direction {
        model::Direction::Forward => "→",
        model::Direction::Backward => "←",
    };
    let hold = if carousel.is_paused { " (held)" } else { "" };
    let title = format!(
        " Testimonials: {} {}{} ",
        category.unwrap_or("all"),
        arrow,
        hold
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding::horizontal(2));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(testimonial) = testimonial else {
        let empty = Paragraph::new("No testimonials found in this category.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Quote
            Constraint::Length(2), // Name and role
            Constraint::Length(1), // Dots
        ])
        .split(inner);

    let quote = Paragraph::new(format!("\u{201c}{}\u{201d}", testimonial.content))
        .style(Style::default().add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(quote, chunks[0]);

    let author = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", testimonial.initials()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                testimonial.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            testimonial.role.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(author, chunks[1]);

    let strip = Paragraph::new(dots(carousel.len, carousel.active_index))
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    frame.render_widget(strip, chunks[2]);
}
