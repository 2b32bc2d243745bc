//! Input handling: keyboard events routed by focus, mouse events routed by
//! hit-testing the cached layout rects, and paste into the form inputs.

use super::*;

impl<'a> App<'a> {
    /// Handles bracketed paste events. Pasted text goes to the focused form
    /// input; the single-line name field strips newlines.
    pub(super) fn handle_paste(&mut self, text: String) {
        if self.screen != Screen::Form || self.popup.is_some() {
            return;
        }
        match self.focus {
            Focus::Name => {
                for ch in text.chars() {
                    if ch != '\n' && ch != '\r' {
                        self.name_input.insert_char(ch);
                    }
                }
            }
            Focus::Comment => {
                self.comment_input.insert_str(text);
            }
            Focus::Carousel => {}
        }
    }

    // ─── Key handling ────────────────────────────────────────────────────

    /// Main key handler. Modal states first (popup, help, thank-you), then
    /// global keybindings, then the focused form element.
    pub(super) fn handle_key(&mut self, key: KeyEvent) {
        // Quit always works, even with an overlay up.
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        // Error popups: any key dismisses (swallows the keypress).
        // Timed success popups expire on their own but a key skips them.
        if self.popup.is_some() {
            self.popup = None;
            return;
        }

        // Help modal: any key dismisses it
        if self.show_help {
            self.show_help = false;
            return;
        }

        // Thank-you screen: any key starts the next visitor's session
        if self.screen == Screen::ThankYou {
            self.reset_form();
            return;
        }

        // Global keybindings
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('s')) => {
                self.submit();
                return;
            }
            (_, KeyCode::F(1)) => {
                self.show_help = true;
                return;
            }
            (_, KeyCode::Tab) => {
                self.focus = match self.focus {
                    Focus::Carousel => Focus::Name,
                    Focus::Name => Focus::Comment,
                    Focus::Comment => Focus::Carousel,
                };
                return;
            }
            (KeyModifiers::NONE, KeyCode::Esc) => {
                if self.focus != Focus::Carousel {
                    self.focus = Focus::Carousel;
                }
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Carousel => self.handle_carousel_key(key),
            Focus::Name => self.handle_name_key(key),
            Focus::Comment => self.handle_comment_key(key),
        }
    }

    /// Carousel focus: arrows step the active card, Enter/Down move on to
    /// the name field.
    fn handle_carousel_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.carousel.step_active(-1),
            KeyCode::Right => self.carousel.step_active(1),
            KeyCode::Enter | KeyCode::Down => self.focus = Focus::Name,
            _ => {}
        }
    }

    /// Name focus: single-line input. Enter advances to the comment field
    /// instead of inserting a newline; Up returns to the carousel.
    fn handle_name_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.focus = Focus::Comment;
            }
            KeyCode::Up => {
                self.focus = Focus::Carousel;
            }
            _ => {
                self.name_input.input(Input::from(key));
            }
        }
    }

    /// Comment focus: multi-line input, everything passes through.
    fn handle_comment_key(&mut self, key: KeyEvent) {
        self.comment_input.input(Input::from(key));
    }

    // ─── Mouse handling ──────────────────────────────────────────────────

    /// Handles all mouse events: clicks route by hit-testing the cached
    /// rects; drag and release always reach the carousel, so a drag that
    /// leaves the widget still ends cleanly on release.
    pub(super) fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.popup.is_some() {
                    self.popup = None;
                    return;
                }
                if self.show_help {
                    self.show_help = false;
                    return;
                }
                if self.screen == Screen::ThankYou {
                    self.reset_form();
                    return;
                }

                if strip::hit(self.arrow_left_area, mouse.column, mouse.row) {
                    self.carousel.step_active(-1);
                } else if strip::hit(self.arrow_right_area, mouse.column, mouse.row) {
                    self.carousel.step_active(1);
                } else if strip::hit(self.strip_area, mouse.column, mouse.row) {
                    self.focus = Focus::Carousel;
                    self.carousel.press(mouse.column as f32);
                } else if strip::hit(self.name_area, mouse.column, mouse.row) {
                    self.focus = Focus::Name;
                } else if strip::hit(self.comment_area, mouse.column, mouse.row) {
                    self.focus = Focus::Comment;
                } else if strip::hit(self.submit_area, mouse.column, mouse.row) {
                    self.submit();
                }
            }

            // 1:1 tracking; a no-op unless a press started inside the strip
            MouseEventKind::Drag(MouseButton::Left) => {
                self.carousel.drag_to(mouse.column as f32);
            }

            // Release is honored anywhere, never a stuck drag
            MouseEventKind::Up(MouseButton::Left) => {
                self.carousel.release();
            }

            _ => {}
        }
    }
}
