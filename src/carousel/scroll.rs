//! Scroll-offset state: boundary re-homing, nearest-to-center tracking, and
//! the tween used for animated arrow navigation.

use std::time::Duration;

use super::buffer::LoopBuffer;

/// How long an arrow-triggered animated scroll takes.
pub const SCROLL_DURATION: Duration = Duration::from_millis(250);

/// Current scroll position against the measured strip geometry.
#[derive(Debug, Clone, Copy)]
pub struct ScrollState {
    pub offset: f32,
    pub viewport_width: f32,
    pub content_width: f32,
}

impl ScrollState {
    pub fn new(buffer: &LoopBuffer) -> Self {
        Self {
            offset: buffer.initial_offset(),
            viewport_width: buffer.viewport_width(),
            content_width: buffer.content_width(),
        }
    }

    /// Boundary correction: when the offset has drifted past a clone band,
    /// silently relocate it to the equivalent position in the originals.
    /// Valid because the clone bands are pixel-identical copies of the
    /// wrapped-to region. Returns the shift applied (0.0 when in range) so
    /// callers tracking positions relative to the offset can follow the jump.
    ///
    /// Runs on every offset write; O(1) and allocation-free.
    pub fn rehome(&mut self) -> f32 {
        let before = self.offset;
        if self.offset <= 0.0 {
            self.offset = self.content_width - 2.0 * self.viewport_width;
        } else if self.offset >= self.content_width - self.viewport_width {
            self.offset = self.viewport_width;
        }
        self.offset - before
    }
}

/// The slot whose visual center sits closest to the viewport center.
/// Ties break toward the first slot in sequence order, so the result is
/// stable and deterministic.
pub fn nearest_center(buffer: &LoopBuffer, offset: f32) -> usize {
    let center = offset + buffer.viewport_width() / 2.0;
    let mut closest = 0;
    let mut min_dist = f32::INFINITY;
    for slot in buffer.slots() {
        let dist = (center - buffer.slot_center(slot.dom_order)).abs();
        if dist < min_dist {
            min_dist = dist;
            closest = slot.dom_order;
        }
    }
    closest
}

/// Scroll delta that would center the given slot in the viewport.
pub fn center_delta(buffer: &LoopBuffer, dom_order: usize, offset: f32) -> f32 {
    buffer.slot_center(dom_order) - offset - buffer.viewport_width() / 2.0
}

/// A smoothstep interpolation between two offsets, advanced by explicit
/// time deltas so playback is deterministic under test.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration: duration.max(Duration::from_millis(1)),
        }
    }

    /// Advances the animation and returns the interpolated offset.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = t * t * (3.0 - 2.0 * t);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Translates both endpoints, used when a boundary re-home fires while
    /// the animation is in flight: the jump lands on an identical-looking
    /// frame, so the remaining motion carries over unchanged.
    pub fn shift(&mut self, delta: f32) {
        self.from += delta;
        self.to += delta;
    }
}
