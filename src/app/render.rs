//! UI rendering: main frame layout, the form screen with the card strip,
//! the thank-you screen, and the popup/help overlays.

use super::*;

impl<'a> App<'a> {
    /// Runs one frame of the main loop: draw + tick.
    pub fn render_frame<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> std::io::Result<()> {
        terminal.draw(|frame| self.render(frame))?;
        self.tick();
        Ok(())
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame) {
        let full = frame.area();

        // Fill entire frame background first (covers margins outside capped area)
        let bg = Paragraph::new("").style(theme::base_style());
        frame.render_widget(bg, full);

        // Cap width and center horizontally
        let capped_width = full.width.min(MAX_WIDTH);
        let x_offset = (full.width - capped_width) / 2;
        let usable_area = Rect::new(x_offset, full.y, capped_width, full.height);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Divider
            Constraint::Min(1),   // Content
            Constraint::Length(1), // Divider
            Constraint::Length(1), // Status
        ])
        .split(usable_area);

        header::render(frame, chunks[0], self.entry_count);

        let divider_style = Style::default().fg(theme::BORDER);
        let top_divider =
            Paragraph::new("\u{2500}".repeat(chunks[1].width as usize)).style(divider_style);
        frame.render_widget(top_divider, chunks[1]);
        let bottom_divider =
            Paragraph::new("\u{2500}".repeat(chunks[3].width as usize)).style(divider_style);
        frame.render_widget(bottom_divider, chunks[3]);

        match self.screen {
            Screen::Form => self.render_form(frame, chunks[2]),
            Screen::ThankYou => {
                if let Some(entry) = self.last_entry.clone() {
                    thanks::render(frame, chunks[2], &entry, &mut self.avatars);
                }
            }
        }

        status::render(
            frame,
            chunks[4],
            status::StatusInfo {
                active: self.carousel.active_index(),
                total: self.carousel.buffer().card_count(),
                message: &self.status_message,
                hint: self.focus_hint(),
            },
        );

        // Overlays last, on top of everything
        if self.show_help {
            self.render_help(frame);
        }
        if let Some(p) = &self.popup {
            popup::render(frame, p);
        }
    }

    fn focus_hint(&self) -> &'static str {
        if self.screen == Screen::ThankYou {
            return "any key: next visitor";
        }
        match self.focus {
            Focus::Carousel => "\u{2190}/\u{2192} or drag: choose | Tab: next | F1: help",
            Focus::Name => "type your name | Enter: comment | F1: help",
            Focus::Comment => "type a note | Ctrl+S: submit | F1: help",
        }
    }

    /// Form screen: carousel strip flanked by arrows, then the name and
    /// comment fields and the submit button. All rects are cached for mouse
    /// hit-testing.
    fn render_form(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::vertical([
            Constraint::Length(CAROUSEL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

        let strip_row = Layout::horizontal([
            Constraint::Length(ARROW_WIDTH),
            Constraint::Fill(1),
            Constraint::Length(ARROW_WIDTH),
        ])
        .split(rows[0]);

        self.arrow_left_area = strip_row[0];
        self.strip_area = strip_row[1];
        self.arrow_right_area = strip_row[2];
        self.name_area = rows[2];
        self.comment_area = rows[3];
        self.submit_area = rows[5];

        strip::render(frame, self.strip_area, &self.carousel, &mut self.avatars);
        strip::render_arrows(frame, self.arrow_left_area, self.arrow_right_area);

        form::render_name(frame, self.name_area, &mut self.name_input, &self.focus);
        form::render_comment(frame, self.comment_area, &mut self.comment_input, &self.focus);
        form::render_submit(frame, self.submit_area);
    }

    /// Renders a centered modal overlay listing the keybindings.
    /// Dismissed by pressing any key.
    fn render_help(&self, frame: &mut Frame) {
        let area = frame.area();
        let width = 46u16.min(area.width.saturating_sub(4));
        let height = 15u16.min(area.height.saturating_sub(2));
        let x = (area.width.saturating_sub(width)) / 2;
        let y = (area.height.saturating_sub(height)) / 2;
        let help_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, help_area);

        let key_style = Style::default().fg(theme::KIOSK_GREEN);
        let help_text = vec![
            Line::from(Span::styled(
                "Keybindings",
                Style::default()
                    .fg(theme::KIOSK_GREEN)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  \u{2190} / \u{2192}        ", key_style),
                Span::raw("Previous / next avatar"),
            ]),
            Line::from(vec![
                Span::styled("  Drag strip     ", key_style),
                Span::raw("Browse avatars"),
            ]),
            Line::from(vec![
                Span::styled("  Tab            ", key_style),
                Span::raw("Next field"),
            ]),
            Line::from(vec![
                Span::styled("  Enter          ", key_style),
                Span::raw("Advance to the next field"),
            ]),
            Line::from(vec![
                Span::styled("  Esc            ", key_style),
                Span::raw("Back to the carousel"),
            ]),
            Line::from(vec![
                Span::styled("  Ctrl+S         ", key_style),
                Span::raw("Sign the guestbook"),
            ]),
            Line::from(vec![
                Span::styled("  Ctrl+Q         ", key_style),
                Span::raw("Quit"),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Click          ", key_style),
                Span::raw("Arrows, fields, submit button"),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER))
            .style(Style::default().fg(theme::FG).bg(theme::BAR_BG));

        let paragraph = Paragraph::new(help_text)
            .block(block)
            .alignment(Alignment::Left);

        frame.render_widget(paragraph, help_area);
    }
}
