use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use tui_textarea::{Input, TextArea};

use crate::avatar::AvatarSet;
use crate::carousel::Carousel;
use crate::components::popup::Popup;
use crate::components::{carousel as strip, form, header, popup, status, thanks};
use crate::guestbook::{Entry, GuestbookStore};
use crate::theme;

/// How long status bar messages stay visible before auto-clearing.
const STATUS_DURATION: Duration = Duration::from_secs(3);

/// How long the post-submission success popup stays up.
const SUCCESS_POPUP_DURATION: Duration = Duration::from_millis(1600);

/// Width of one carousel card in terminal columns (border included).
pub const CARD_WIDTH: u16 = 18;

/// Height of the carousel strip (top border + avatar rows + bottom border).
const CAROUSEL_HEIGHT: u16 = 11;

/// Columns reserved for each step arrow beside the strip.
const ARROW_WIDTH: u16 = 3;

/// Maximum width for the UI content area. Wider terminals get centered, capped layout.
const MAX_WIDTH: u16 = 100;

/// The two kiosk screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Form,
    ThankYou,
}

/// Which part of the form owns keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    Carousel,
    Name,
    Comment,
}

/// Startup configuration, resolved from the CLI in main.rs.
pub struct KioskOptions {
    /// File the JSON-lines store appends to.
    pub entries: PathBuf,
    /// Directory holding the avatar PNGs (`1.png`, `2.png`, ...).
    pub assets: PathBuf,
    /// Number of avatar cards.
    pub cards: usize,
    /// Terminal width at startup; the carousel geometry is measured once
    /// from this (no dynamic resize of the loop buffer).
    pub terminal_width: u16,
}

/// Carousel viewport width for a given terminal width. Shared between
/// App::new (which builds the loop buffer from it) and render (which lays
/// the strip out), so the two always agree.
pub fn carousel_viewport_width(terminal_width: u16) -> f32 {
    terminal_width
        .min(MAX_WIDTH)
        .saturating_sub(2 * ARROW_WIDTH)
        .max(1) as f32
}

pub struct App<'a> {
    // --- Core state ---
    pub screen: Screen,
    pub carousel: Carousel,
    pub focus: Focus,
    pub should_quit: bool,

    // --- Form inputs ---
    pub name_input: TextArea<'a>,
    pub comment_input: TextArea<'a>,

    // --- Persistence boundary ---
    pub store: GuestbookStore,
    pub entry_count: usize,
    /// The entry shown on the thank-you screen.
    pub last_entry: Option<Entry>,

    // --- Presentation ---
    pub popup: Option<Popup>,
    pub status_message: String,
    pub status_time: Option<Instant>,
    pub show_help: bool,
    avatars: AvatarSet,

    // --- Internal tracking ---
    /// Guards against double-submission from queued events.
    submitting: bool,
    /// Cached rects from the last render, for mouse hit-testing.
    strip_area: Rect,
    arrow_left_area: Rect,
    arrow_right_area: Rect,
    name_area: Rect,
    comment_area: Rect,
    submit_area: Rect,
    /// Drives the carousel animation clock from tick().
    last_tick: Instant,
}

impl<'a> App<'a> {
    pub fn new(options: KioskOptions) -> Self {
        let carousel = Carousel::new(
            options.cards.max(1),
            CARD_WIDTH as f32,
            carousel_viewport_width(options.terminal_width),
        );
        let avatars = AvatarSet::load(&options.assets, carousel.buffer().cards());

        let store = GuestbookStore::open(options.entries);
        let entry_count = store.count();

        let mut name_input = TextArea::new(vec![String::new()]);
        form::configure_input(&mut name_input);
        let mut comment_input = TextArea::new(vec![String::new()]);
        form::configure_input(&mut comment_input);

        Self {
            screen: Screen::Form,
            carousel,
            focus: Focus::Carousel,
            should_quit: false,
            name_input,
            comment_input,
            store,
            entry_count,
            last_entry: None,
            popup: None,
            status_message: "Pick an avatar, tell us your name, leave a note".to_string(),
            status_time: Some(Instant::now()),
            show_help: false,
            avatars,
            submitting: false,
            strip_area: Rect::default(),
            arrow_left_area: Rect::default(),
            arrow_right_area: Rect::default(),
            name_area: Rect::default(),
            comment_area: Rect::default(),
            submit_area: Rect::default(),
            last_tick: Instant::now(),
        }
    }

    // ─── Tick / timers ───────────────────────────────────────────────────

    /// Called every 100ms from the main loop. Advances the carousel
    /// animation and expires timed UI state.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;

        self.carousel.tick(dt);

        if let Some(popup) = &self.popup {
            if popup.is_expired(now) {
                self.popup = None;
            }
        }

        if let Some(time) = self.status_time {
            if time.elapsed() >= STATUS_DURATION {
                self.status_message.clear();
                self.status_time = None;
            }
        }
    }

    // ─── Event dispatch ──────────────────────────────────────────────────

    /// Top-level event handler. Dispatches to key, mouse, or paste handlers.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Paste(text) => self.handle_paste(text),
            Event::Resize(_, _) => {} // layout re-derives, loop geometry stays fixed
            _ => {}
        }
    }

    /// Shows a temporary message in the status bar.
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = msg.to_string();
        self.status_time = Some(Instant::now());
    }

    fn trimmed(input: &TextArea) -> String {
        input.lines().join("\n").trim().to_string()
    }

    pub fn name(&self) -> String {
        Self::trimmed(&self.name_input)
    }

    pub fn comment(&self) -> String {
        Self::trimmed(&self.comment_input)
    }

    /// Clears the form for the next visitor. The carousel keeps its
    /// position; only the inputs and focus reset.
    pub fn reset_form(&mut self) {
        let mut name_input = TextArea::new(vec![String::new()]);
        form::configure_input(&mut name_input);
        self.name_input = name_input;

        let mut comment_input = TextArea::new(vec![String::new()]);
        form::configure_input(&mut comment_input);
        self.comment_input = comment_input;

        self.focus = Focus::Carousel;
        self.screen = Screen::Form;
        self.last_entry = None;
        self.popup = None;
    }
}

mod input;
mod render;
mod submit;

#[cfg(test)]
mod tests;
