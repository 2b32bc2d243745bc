//! Loop buffer: the fixed card set plus the cloned padding bands that make
//! the carousel read as an endless strip.

/// One selectable avatar. `index` is 1-based and stable for the lifetime of
/// the widget; `asset` names the visual resource (e.g. "3.png").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub index: usize,
    pub asset: String,
}

impl Card {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            asset: format!("{}.png", index),
        }
    }
}

/// A positioned instance of a card inside the rendered strip. Clone slots
/// share the underlying card (by position into the card set) rather than
/// duplicating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSlot {
    /// Position into the card set this slot displays.
    pub card: usize,
    /// True for the padding bands at either end of the strip.
    pub is_clone: bool,
    /// Position of this slot in the rendered sequence.
    pub dom_order: usize,
}

/// The rendered sequence `[tail clones][originals][head clones]`, built once
/// at widget initialization and immutable afterwards.
///
/// The clone band on each side is as wide as the number of cards visible at
/// once, so any window that fits the viewport always has real-looking
/// neighbors on both sides.
#[derive(Debug)]
pub struct LoopBuffer {
    cards: Vec<Card>,
    slots: Vec<RenderSlot>,
    cards_per_view: usize,
    card_width: f32,
    viewport_width: f32,
}

impl LoopBuffer {
    /// Builds the strip from a card set and the measured geometry.
    /// `cards_per_view` is clamped to at least 1 (a viewport narrower than
    /// one card would otherwise produce a zero-width clone band and break
    /// wrap-around) and the band itself to at most the card count.
    pub fn new(cards: Vec<Card>, card_width: f32, viewport_width: f32) -> Self {
        debug_assert!(!cards.is_empty());
        debug_assert!(card_width > 0.0);

        let cards_per_view = ((viewport_width / card_width).round() as usize).max(1);
        let n = cards.len();
        let band = cards_per_view.min(n);

        let mut slots = Vec::with_capacity(n + 2 * band);
        // Tail clones: the last `band` cards, in original order.
        for pos in (n - band)..n {
            slots.push(RenderSlot {
                card: pos,
                is_clone: true,
                dom_order: slots.len(),
            });
        }
        for pos in 0..n {
            slots.push(RenderSlot {
                card: pos,
                is_clone: false,
                dom_order: slots.len(),
            });
        }
        // Head clones: the first `band` cards.
        for pos in 0..band {
            slots.push(RenderSlot {
                card: pos,
                is_clone: true,
                dom_order: slots.len(),
            });
        }

        Self {
            cards,
            slots,
            cards_per_view,
            card_width,
            viewport_width,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn slots(&self) -> &[RenderSlot] {
        &self.slots
    }

    /// The card a slot displays (clones resolve to their original).
    pub fn card_at(&self, dom_order: usize) -> &Card {
        &self.cards[self.slots[dom_order].card]
    }

    pub fn cards_per_view(&self) -> usize {
        self.cards_per_view
    }

    pub fn card_width(&self) -> f32 {
        self.card_width
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Total width of the rendered strip, clones included.
    pub fn content_width(&self) -> f32 {
        self.slots.len() as f32 * self.card_width
    }

    /// Center of a slot in strip coordinates (independent of scroll offset).
    pub fn slot_center(&self, dom_order: usize) -> f32 {
        dom_order as f32 * self.card_width + self.card_width / 2.0
    }

    /// Dom-order range of the non-cloned originals.
    pub fn originals(&self) -> std::ops::Range<usize> {
        let band = self.cards_per_view.min(self.cards.len());
        band..band + self.cards.len()
    }

    /// Offset the strip starts at: the first visible window shows true
    /// originals, not clones.
    pub fn initial_offset(&self) -> f32 {
        self.viewport_width
    }
}
