//! The infinite carousel widget: a seamless, wrap-around, draggable strip of
//! selectable cards with exactly one card active at a time.
//!
//! All state lives in one [`Carousel`] instance and mutates only through its
//! methods, driven by discrete input notifications (pointer press/move/
//! release, arrow steps, timer ticks). Handlers run to completion on the UI
//! thread, so there is no locking anywhere in here. The ordering invariant
//! is that boundary re-homing always runs before active-card recomputation
//! for the same notification: a stale offset must never pick the active card.

use std::time::Duration;

pub mod buffer;
pub mod drag;
pub mod scroll;

pub use buffer::{Card, LoopBuffer, RenderSlot};
pub use drag::{DragController, DragPhase};
pub use scroll::{ScrollState, Tween, SCROLL_DURATION};

/// Distances closer than this are considered a tie when picking an arrow
/// target slot (slots in the originals band win ties).
const TIE_EPSILON: f32 = 0.001;

/// Observer invoked with the new active index whenever it changes.
pub type ActiveObserver = Box<dyn FnMut(usize)>;

pub struct Carousel {
    buffer: LoopBuffer,
    scroll: ScrollState,
    drag: DragController,
    /// In-flight animated scroll from arrow navigation. A new arrow step
    /// replaces it and a drag press cancels it, so the tween is never
    /// writing the offset concurrently with another source.
    tween: Option<Tween>,
    active_index: usize,
    active_slot: usize,
    observers: Vec<ActiveObserver>,
}

impl Carousel {
    /// Builds a carousel over `card_count` cards with the measured geometry
    /// (widths in terminal columns). The initial active card is whichever
    /// slot sits nearest the viewport center at the initial offset.
    pub fn new(card_count: usize, card_width: f32, viewport_width: f32) -> Self {
        let cards = (1..=card_count).map(Card::new).collect();
        let buffer = LoopBuffer::new(cards, card_width, viewport_width);
        let scroll = ScrollState::new(&buffer);
        let active_slot = scroll::nearest_center(&buffer, scroll.offset);
        let active_index = buffer.card_at(active_slot).index;
        Self {
            buffer,
            scroll,
            drag: DragController::new(),
            tween: None,
            active_index,
            active_slot,
            observers: Vec::new(),
        }
    }

    // ─── Observation ─────────────────────────────────────────────────────

    /// Currently selected card index, always in `[1, N]`. This is the value
    /// the submission flow reads at submit time.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Dom order of the slot carrying the active marking. Exactly one slot
    /// holds it at any time; it may be a clone of the active card.
    pub fn active_slot(&self) -> usize {
        self.active_slot
    }

    /// Registers an observer called with the new index on every active-card
    /// change.
    pub fn subscribe(&mut self, observer: impl FnMut(usize) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn buffer(&self) -> &LoopBuffer {
        &self.buffer
    }

    pub fn offset(&self) -> f32 {
        self.scroll.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    // ─── Pointer input ───────────────────────────────────────────────────

    /// Pointer-press inside the carousel. Cancels any in-flight animated
    /// scroll: from here on the pointer owns the offset.
    pub fn press(&mut self, x: f32) {
        self.tween = None;
        self.drag.press(x, self.scroll.offset);
    }

    /// Pointer-move while pressed: 1:1 tracking, then boundary correction.
    /// The active card is deliberately not recomputed mid-gesture.
    pub fn drag_to(&mut self, x: f32) {
        if let Some(offset) = self.drag.offset_for(x) {
            self.scroll.offset = offset;
            let shift = self.scroll.rehome();
            if shift != 0.0 {
                self.drag.shift(shift);
            }
        }
    }

    /// Pointer-release, honored no matter where the pointer ended up.
    /// Settles the offset and recomputes the active card from the center.
    pub fn release(&mut self) {
        if self.drag.release() {
            self.scroll.rehome();
            self.select_from_center();
        }
    }

    // ─── Arrow navigation ────────────────────────────────────────────────

    /// Steps the active card by `direction` (−1 or +1), wrapping within
    /// `[1, N]`, and starts an animated scroll that centers it. The target
    /// is marked active immediately rather than when the animation settles.
    pub fn step_active(&mut self, direction: isize) {
        let n = self.buffer.card_count() as isize;
        let next =
            (((self.active_index as isize - 1 + direction).rem_euclid(n)) + 1) as usize;

        let target = match self.find_slot_near_center(next) {
            Some(dom) => dom,
            // Unreachable given the buffer construction guarantee; treat a
            // miss as an internal invariant violation and do nothing.
            None => return,
        };

        let delta = scroll::center_delta(&self.buffer, target, self.scroll.offset);
        // Replacing the tween (rather than letting two animations race on
        // the offset) is what makes rapid arrow clicks safe.
        self.tween = Some(Tween::new(
            self.scroll.offset,
            self.scroll.offset + delta,
            SCROLL_DURATION,
        ));

        self.active_slot = target;
        self.set_active(next);
    }

    /// The slot showing `card_index` that is closest to the viewport center,
    /// preferring the originals band on ties (those are guaranteed not to
    /// trigger an immediate re-home).
    fn find_slot_near_center(&self, card_index: usize) -> Option<usize> {
        let originals = self.buffer.originals();
        let mut best: Option<(usize, f32, bool)> = None;
        for slot in self.buffer.slots() {
            if self.buffer.card_at(slot.dom_order).index != card_index {
                continue;
            }
            let dist =
                scroll::center_delta(&self.buffer, slot.dom_order, self.scroll.offset).abs();
            let in_originals = originals.contains(&slot.dom_order);
            let better = match best {
                None => true,
                Some((_, best_dist, best_in_originals)) => {
                    dist + TIE_EPSILON < best_dist
                        || ((dist - best_dist).abs() <= TIE_EPSILON
                            && in_originals
                            && !best_in_originals)
                }
            };
            if better {
                best = Some((slot.dom_order, dist, in_originals));
            }
        }
        best.map(|(dom, _, _)| dom)
    }

    // ─── Timer ───────────────────────────────────────────────────────────

    /// Advances the animated scroll, if any. Called from the app tick with
    /// the elapsed time since the previous tick. When the animation
    /// completes, the offset is settled and the active card recomputed.
    pub fn tick(&mut self, dt: Duration) {
        let Some(tween) = &mut self.tween else {
            return;
        };
        self.scroll.offset = tween.advance(dt);
        let shift = self.scroll.rehome();
        if shift != 0.0 {
            tween.shift(shift);
        }
        if tween.is_done() {
            self.tween = None;
            self.select_from_center();
        }
    }

    // ─── Active selection ────────────────────────────────────────────────

    /// Marks the slot nearest the viewport center active and publishes its
    /// card index. Runs on settled positions only (drag release, animation
    /// completion), never mid-drag.
    fn select_from_center(&mut self) {
        let dom = scroll::nearest_center(&self.buffer, self.scroll.offset);
        self.active_slot = dom;
        let index = self.buffer.card_at(dom).index;
        self.set_active(index);
    }

    fn set_active(&mut self, index: usize) {
        if index == self.active_index {
            return;
        }
        self.active_index = index;
        for observer in &mut self.observers {
            observer(index);
        }
    }
}

impl std::fmt::Debug for Carousel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("offset", &self.scroll.offset)
            .field("active_index", &self.active_index)
            .field("active_slot", &self.active_slot)
            .field("dragging", &self.drag.is_dragging())
            .field("animating", &self.tween.is_some())
            .finish()
    }
}
