//! Thank-you screen shown after a successful submission: the visitor's
//! chosen avatar, their name, and a hint that any key starts over.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::avatar::AvatarSet;
use crate::guestbook::Entry;
use crate::theme;

const AVATAR_W: u16 = 24;
const AVATAR_H: u16 = 10;

pub fn render(frame: &mut Frame, area: Rect, entry: &Entry, avatars: &mut AvatarSet) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(AVATAR_H),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);

    // Chosen avatar, centered
    let w = AVATAR_W.min(area.width);
    let x = area.x + (area.width - w) / 2;
    let avatar_area = Rect::new(x, chunks[1].y, w, chunks[1].height);
    avatars.render(
        frame.buffer_mut(),
        avatar_area.x as i32,
        avatar_area.y,
        avatar_area.width,
        avatar_area.height,
        avatar_area,
        entry.avatar,
    );

    let title = Paragraph::new(Line::from(Span::styled(
        "Thank You",
        Style::default()
            .fg(theme::KIOSK_GREEN)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[3]);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "For Your Participation!",
        Style::default().fg(theme::KIOSK_GREEN),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[4]);

    let name = Paragraph::new(Line::from(Span::styled(
        entry.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(name, chunks[5]);

    let hint = Paragraph::new(Line::from(Span::styled(
        "press any key to sign again",
        theme::hint_style(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[6]);
}
