//! Pointer-drag state machine: Idle → Dragging → Idle, with 1:1 offset
//! tracking and no inertia.

/// Drag phase. `Dragging` remembers where the gesture started so every move
/// maps back to an absolute offset rather than accumulating deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    Idle,
    Dragging { start_x: f32, start_offset: f32 },
}

#[derive(Debug)]
pub struct DragController {
    phase: DragPhase,
}

impl DragController {
    pub fn new() -> Self {
        Self { phase: DragPhase::Idle }
    }

    /// Pointer-press inside the carousel: records the anchor point.
    pub fn press(&mut self, x: f32, offset: f32) {
        self.phase = DragPhase::Dragging {
            start_x: x,
            start_offset: offset,
        };
    }

    /// Pointer-move: the offset that keeps the strip glued to the pointer,
    /// or None when no drag is in progress.
    pub fn offset_for(&self, x: f32) -> Option<f32> {
        match self.phase {
            DragPhase::Dragging { start_x, start_offset } => {
                Some(start_offset - (x - start_x))
            }
            DragPhase::Idle => None,
        }
    }

    /// Follows a boundary re-home mid-gesture so subsequent moves stay 1:1
    /// with the pointer instead of fighting the relocated offset.
    pub fn shift(&mut self, delta: f32) {
        if let DragPhase::Dragging { start_offset, .. } = &mut self.phase {
            *start_offset += delta;
        }
    }

    /// Pointer-release from anywhere (the pointer may have left the widget
    /// mid-drag). Returns true when a drag was actually in progress.
    pub fn release(&mut self) -> bool {
        let was_dragging = matches!(self.phase, DragPhase::Dragging { .. });
        self.phase = DragPhase::Idle;
        was_dragging
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}
