//! The sign-in form: name and comment inputs plus the submit button.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::Focus;
use crate::theme;

pub fn configure_input(textarea: &mut TextArea) {
    textarea.set_cursor_line_style(theme::base_style());
    textarea.set_style(theme::base_style());
    textarea.set_cursor_style(
        ratatui::style::Style::default()
            .add_modifier(ratatui::style::Modifier::REVERSED | ratatui::style::Modifier::BOLD),
    );
    textarea.set_tab_length(2);
    textarea.set_hard_tab_indent(false);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        theme::focused_block_style()
    } else {
        theme::blurred_block_style()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(format!(" {} ", title))
}

pub fn render_name(frame: &mut Frame, area: Rect, input: &mut TextArea, focus: &Focus) {
    input.set_block(field_block("NAME", matches!(focus, Focus::Name)));
    frame.render_widget(&*input, area);
}

pub fn render_comment(frame: &mut Frame, area: Rect, input: &mut TextArea, focus: &Focus) {
    input.set_block(field_block("COMMENT", matches!(focus, Focus::Comment)));
    frame.render_widget(&*input, area);
}

pub fn render_submit(frame: &mut Frame, area: Rect) {
    let button = Paragraph::new(Line::from(Span::styled(
        "  SIGN THE GUESTBOOK  ",
        theme::submit_style(),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(button, area);
}
