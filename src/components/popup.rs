//! Centered popup overlay, the kiosk's toast: a timed success card after a
//! submission and a dismiss-on-any-key error card for validation and store
//! failures.

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Popup {
    pub kind: PopupKind,
    pub title: String,
    pub text: String,
    /// When set, tick() dismisses the popup once this instant passes.
    pub expires_at: Option<Instant>,
}

impl Popup {
    /// Auto-dismissing success card.
    pub fn success(title: &str, text: &str, visible_for: Duration) -> Self {
        Self {
            kind: PopupKind::Success,
            title: title.to_string(),
            text: text.to_string(),
            expires_at: Some(Instant::now() + visible_for),
        }
    }

    /// Error card, stays until any key or click.
    pub fn error(text: &str) -> Self {
        Self {
            kind: PopupKind::Error,
            title: "Oops...".to_string(),
            text: text.to_string(),
            expires_at: None,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.map(|at| now >= at).unwrap_or(false)
    }
}

pub fn render(frame: &mut Frame, popup: &Popup) {
    let area = frame.area();
    let width = 38u16.min(area.width.saturating_sub(4));
    let height = 7u16.min(area.height.saturating_sub(2));
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    let popup_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, popup_area);

    let style = match popup.kind {
        PopupKind::Success => theme::success_popup_style(),
        PopupKind::Error => theme::error_popup_style(),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(popup.title.clone()),
        Line::from(""),
        Line::from(popup.text.clone()),
    ];
    if popup.expires_at.is_none() {
        lines.push(Line::from(""));
        lines.push(Line::from("press any key"));
    }

    let card = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(card, popup_area);
}
