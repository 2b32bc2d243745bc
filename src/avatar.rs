//! Avatar assets: resolves a card index to its PNG on disk, decodes it once
//! (clones of a card share the decode), and paints it into the terminal
//! buffer with half-block characters. Cards with no asset on disk get a
//! drawn placeholder so the kiosk runs with an empty assets directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::carousel::Card;
use crate::theme;

/// Resolves a card's visual to a path inside the assets directory
/// (e.g. `assets/char/3.png`).
pub fn resolve(assets_dir: &Path, card: &Card) -> PathBuf {
    assets_dir.join(&card.asset)
}

/// Decoded avatars plus a per-target-size resize cache, so rendering never
/// rescales the same image twice for the same card geometry.
pub struct AvatarSet {
    decoded: HashMap<usize, DynamicImage>,
    resized: HashMap<(usize, u16, u16), RgbaImage>,
}

impl AvatarSet {
    /// Decodes every card's asset up front. Missing or undecodable files are
    /// simply absent from the set; rendering falls back to the placeholder.
    pub fn load(assets_dir: &Path, cards: &[Card]) -> Self {
        let mut decoded = HashMap::new();
        for card in cards {
            let path = resolve(assets_dir, card);
            if let Ok(img) = image::open(&path) {
                decoded.insert(card.index, img);
            }
        }
        Self {
            decoded,
            resized: HashMap::new(),
        }
    }

    /// Paints the avatar for `index` into a `width` × `height` cell region
    /// whose left edge is `origin_x` (may be negative for cards sliding out
    /// of view); only cells inside `clip` are written. Half-block rendering
    /// shows two vertical pixels per cell; images are resized (preserving
    /// aspect) to fit the region and centered.
    pub fn render(
        &mut self,
        buf: &mut Buffer,
        origin_x: i32,
        y: u16,
        width: u16,
        height: u16,
        clip: Rect,
        index: usize,
    ) {
        if width == 0 || height == 0 {
            return;
        }
        match self.resized_for(index, width, height) {
            Some(rgba) => render_halfblock(buf, origin_x, y, width, height, clip, rgba),
            None => render_placeholder(buf, origin_x, y, width, height, clip, index),
        }
    }

    fn resized_for(&mut self, index: usize, cols: u16, rows: u16) -> Option<&RgbaImage> {
        let key = (index, cols, rows);
        if !self.resized.contains_key(&key) {
            let img = self.decoded.get(&index)?;
            // One cell is one pixel wide and two pixels tall.
            let fitted = img.resize(cols as u32, rows as u32 * 2, FilterType::Triangle);
            self.resized.insert(key, fitted.to_rgba8());
        }
        self.resized.get(&key)
    }
}

fn blend(pixel: &image::Rgba<u8>, bg: (u8, u8, u8)) -> (u8, u8, u8) {
    let a = pixel[3] as u16;
    let inv_a = 255 - a;
    (
        ((pixel[0] as u16 * a + bg.0 as u16 * inv_a) / 255) as u8,
        ((pixel[1] as u16 * a + bg.1 as u16 * inv_a) / 255) as u8,
        ((pixel[2] as u16 * a + bg.2 as u16 * inv_a) / 255) as u8,
    )
}

/// Half-block painter: upper pixel as fg, lower pixel as bg, `▀` glyph.
/// Cells outside `clip` are left untouched (partially visible cards).
fn render_halfblock(
    buf: &mut Buffer,
    origin_x: i32,
    y0: u16,
    width: u16,
    height: u16,
    clip: Rect,
    rgba: &RgbaImage,
) {
    let bg = (24u8, 24u8, 24u8);
    let img_w = rgba.width();
    let img_h = rgba.height();
    let x_pad = (width as u32).saturating_sub(img_w) / 2;
    let y_pad = (height as u32 * 2).saturating_sub(img_h) / 2;

    for dy in 0..height {
        let y = y0 + dy;
        for dx in 0..width {
            let x = origin_x + dx as i32;
            if x < 0 || !clip.contains(ratatui::layout::Position::new(x as u16, y)) {
                continue;
            }
            let img_x = (dx as u32).wrapping_sub(x_pad);
            let upper_y = (dy as u32 * 2).wrapping_sub(y_pad);
            let lower_y = upper_y.wrapping_add(1);

            let (ur, ug, ub) = if img_x < img_w && upper_y < img_h {
                blend(rgba.get_pixel(img_x, upper_y), bg)
            } else {
                bg
            };
            let (lr, lg, lb) = if img_x < img_w && lower_y < img_h {
                blend(rgba.get_pixel(img_x, lower_y), bg)
            } else {
                bg
            };

            if let Some(cell) = buf.cell_mut((x as u16, y)) {
                cell.set_symbol("\u{2580}")
                    .set_fg(Color::Rgb(ur, ug, ub))
                    .set_bg(Color::Rgb(lr, lg, lb));
            }
        }
    }
}

/// Fallback avatar: a solid color block with the card number centered.
fn render_placeholder(
    buf: &mut Buffer,
    origin_x: i32,
    y0: u16,
    width: u16,
    height: u16,
    clip: Rect,
    index: usize,
) {
    let color = theme::avatar_color(index);
    let label = index.to_string();
    let label_y = y0 + height / 2;
    let label_x = origin_x + (width.saturating_sub(label.len() as u16) / 2) as i32;

    for dy in 0..height {
        let y = y0 + dy;
        for dx in 0..width {
            let x = origin_x + dx as i32;
            if x < 0 || !clip.contains(ratatui::layout::Position::new(x as u16, y)) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x as u16, y)) {
                cell.set_symbol(" ").set_bg(color);
            }
        }
    }

    for (i, ch) in label.chars().enumerate() {
        let x = label_x + i as i32;
        if x < 0 || !clip.contains(ratatui::layout::Position::new(x as u16, label_y)) {
            continue;
        }
        if let Some(cell) = buf.cell_mut((x as u16, label_y)) {
            cell.set_char(ch).set_fg(theme::WHITE).set_bg(color);
        }
    }
}
