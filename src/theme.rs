use ratatui::style::{Color, Modifier, Style};

// Base colors — Color::Reset inherits terminal defaults
pub const BG: Color = Color::Reset;
pub const FG: Color = Color::Reset;
pub const BORDER: Color = Color::DarkGray;

// Kiosk brand green, used for the active card, submit button, and popups
pub const KIOSK_GREEN: Color = Color::Rgb(51, 158, 125);

// UI elements
pub const BAR_BG: Color = Color::Reset;
pub const FOCUS: Color = Color::Rgb(51, 158, 125);
pub const HINT: Color = Color::DarkGray;

// Card strip
pub const CARD_BORDER: Color = Color::DarkGray;
pub const ACTIVE_CARD: Color = Color::Rgb(51, 158, 125);
pub const ARROW: Color = Color::Gray;

// Placeholder avatar backgrounds, one per card index (1-based, wraps)
pub const AVATAR_COLORS: [Color; 5] = [
    Color::Rgb(235, 168, 52),
    Color::Rgb(86, 157, 229),
    Color::Rgb(201, 92, 124),
    Color::Rgb(120, 176, 96),
    Color::Rgb(150, 111, 214),
];

// Status indicators
pub const SUCCESS: Color = Color::Green;
pub const WARNING: Color = Color::Yellow;
pub const ERROR: Color = Color::Red;

// White for text on colored backgrounds
pub const WHITE: Color = Color::White;

// Pre-built styles
pub fn base_style() -> Style {
    Style::default()
}

pub fn header_style() -> Style {
    Style::default()
}

pub fn status_style() -> Style {
    Style::default()
}

pub fn hint_style() -> Style {
    Style::default().fg(HINT)
}

pub fn active_card_style() -> Style {
    Style::default()
        .fg(ACTIVE_CARD)
        .add_modifier(Modifier::BOLD)
}

pub fn card_style() -> Style {
    Style::default().fg(CARD_BORDER)
}

pub fn focused_block_style() -> Style {
    Style::default().fg(FOCUS).add_modifier(Modifier::BOLD)
}

pub fn blurred_block_style() -> Style {
    Style::default().fg(BORDER)
}

pub fn submit_style() -> Style {
    Style::default()
        .fg(WHITE)
        .bg(KIOSK_GREEN)
        .add_modifier(Modifier::BOLD)
}

pub fn success_popup_style() -> Style {
    Style::default()
        .fg(WHITE)
        .bg(KIOSK_GREEN)
        .add_modifier(Modifier::BOLD)
}

pub fn error_popup_style() -> Style {
    Style::default().fg(WHITE).bg(Color::Rgb(170, 54, 54))
}

pub fn avatar_color(index: usize) -> Color {
    AVATAR_COLORS[index.saturating_sub(1) % AVATAR_COLORS.len()]
}
