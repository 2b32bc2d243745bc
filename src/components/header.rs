use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect, entry_count: usize) {
    // Fill background
    let bg = Paragraph::new("").style(theme::header_style());
    frame.render_widget(bg, area);

    let right_label = format!(" {} SIGNED ", entry_count);
    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(right_label.len() as u16),
    ])
    .split(area);

    let left = Paragraph::new(Line::from(vec![
        Span::styled(
            "  GUESTBOOK",
            Style::default()
                .fg(theme::KIOSK_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  leave us a note", theme::hint_style()),
    ]));
    frame.render_widget(left, chunks[0]);

    let right = Paragraph::new(Line::from(Span::styled(
        right_label,
        Style::default()
            .fg(theme::WHITE)
            .bg(theme::KIOSK_GREEN)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(right, chunks[1]);
}
