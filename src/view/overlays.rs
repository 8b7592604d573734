//! Overlay rendering (transient notices)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_notice(frame: &mut Frame, message: &str) {
    let area = frame.area();

    let popup_width = 52.min(area.width.saturating_sub(4));
    let inner_width = popup_width.saturating_sub(4).max(1) as usize;

    let line_count = ((message.chars().count() as f32) / (inner_width as f32)).ceil() as u16;

    // Height: top border (1) + message lines + bottom border (1)
    let popup_height = (2 + line_count.max(1)).min(area.height.saturating_sub(4).max(3));

    let popup_area = Rect {
        x: area.width.saturating_sub(popup_width) / 2,
        y: 1,
        width: popup_width,
        height: popup_height,
    };

    frame.render_widget(Clear, popup_area);

    let notice = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Yellow))
        .wrap(ratatui::widgets::Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Notice ")
                .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(notice, popup_area);
}
