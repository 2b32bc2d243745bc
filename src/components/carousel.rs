//! Card strip rendering: paints every slot of the loop buffer at its scroll
//! position, clipped to the viewport, with the active slot highlighted and
//! the step arrows on either side.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::avatar::AvatarSet;
use crate::carousel::Carousel;
use crate::theme;

/// Renders the strip into `area`. The area width is the viewport the
/// carousel was measured against; partially visible cards at either edge are
/// clipped cell by cell, which is what sells the seamless loop.
pub fn render(frame: &mut Frame, area: Rect, carousel: &Carousel, avatars: &mut AvatarSet) {
    if area.width == 0 || area.height < 3 {
        return;
    }

    let buffer = carousel.buffer();
    let card_w = buffer.card_width().round() as i32;
    let offset = carousel.offset();
    let dragging = carousel.is_dragging();

    for slot in buffer.slots() {
        let left = area.x as i32 + (slot.dom_order as f32 * buffer.card_width() - offset).round() as i32;
        if left + card_w <= area.x as i32 || left >= (area.x + area.width) as i32 {
            continue;
        }

        let style = if dragging {
            // Grabbing affordance: the whole strip reads as "held".
            Style::default().fg(theme::WHITE)
        } else if slot.dom_order == carousel.active_slot() {
            theme::active_card_style()
        } else {
            theme::card_style()
        };

        draw_card_frame(frame.buffer_mut(), area, left, card_w, style);

        // Inner avatar region, clipped to the viewport.
        let inner_left = left + 1;
        let inner_w = card_w - 2;
        if inner_w > 0 && area.height > 2 {
            let clip = Rect::new(area.x, area.y + 1, area.width, area.height - 2);
            avatars.render(
                frame.buffer_mut(),
                inner_left,
                area.y + 1,
                inner_w as u16,
                area.height - 2,
                clip,
                buffer.card_at(slot.dom_order).index,
            );
        }
    }
}

/// Paints a rounded card border at `left` (may extend past the viewport on
/// either side), writing only the cells that fall inside `area`.
fn draw_card_frame(buf: &mut Buffer, area: Rect, left: i32, card_w: i32, style: Style) {
    let top = area.y;
    let bottom = area.y + area.height - 1;
    let right = left + card_w - 1;

    let mut put = |x: i32, y: u16, symbol: &str| {
        if x < area.x as i32 || x >= (area.x + area.width) as i32 {
            return;
        }
        if let Some(cell) = buf.cell_mut((x as u16, y)) {
            cell.set_symbol(symbol).set_style(style);
        }
    };

    put(left, top, "\u{256d}"); // ╭
    put(right, top, "\u{256e}"); // ╮
    put(left, bottom, "\u{2570}"); // ╰
    put(right, bottom, "\u{256f}"); // ╯
    for x in (left + 1)..right {
        put(x, top, "\u{2500}");
        put(x, bottom, "\u{2500}");
    }
    for y in (top + 1)..bottom {
        put(left, y, "\u{2502}");
        put(right, y, "\u{2502}");
    }
}

/// The `❮` / `❯` step controls flanking the strip.
pub fn render_arrows(frame: &mut Frame, left: Rect, right: Rect) {
    let style = Style::default().fg(theme::ARROW);
    let mid_left = Rect::new(left.x, left.y + left.height / 2, left.width, 1);
    let mid_right = Rect::new(right.x, right.y + right.height / 2, right.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" \u{276e}", style))),
        mid_left,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(" \u{276f}", style))),
        mid_right,
    );
}

/// True when the position falls inside the rect (mouse hit-testing).
pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}
