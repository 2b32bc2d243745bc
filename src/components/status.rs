use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

pub struct StatusInfo<'a> {
    pub active: usize,
    pub total: usize,
    pub message: &'a str,
    pub hint: &'a str,
}

pub fn render(frame: &mut Frame, area: Rect, info: StatusInfo) {
    // Fill the entire status bar background
    let bg = Paragraph::new("").style(theme::status_style());
    frame.render_widget(bg, area);

    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(2),
        Constraint::Fill(1),
    ])
    .split(area);

    // Left: active avatar
    let left = Paragraph::new(Line::from(Span::styled(
        format!("  Avatar {}/{}", info.active, info.total),
        theme::status_style(),
    )));
    frame.render_widget(left, chunks[0]);

    // Center: status message
    if !info.message.is_empty() {
        let center = Paragraph::new(Line::from(Span::styled(
            info.message.to_string(),
            theme::status_style(),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(center, chunks[1]);
    }

    // Right: contextual key hint
    let right = Paragraph::new(Line::from(Span::styled(
        format!("{}  ", info.hint),
        theme::hint_style(),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(right, chunks[2]);
}
