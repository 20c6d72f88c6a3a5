//! Input Events
//!
//! Unified input handling for mouse, touch, and keyboard. The host delivers
//! these at the outermost capture stage, before any page handler runs.

/// Input event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    PointerDown,
    PointerUp,
    PointerMove,
    KeyDown,
    KeyUp,
    TouchStart,
    TouchEnd,
}

impl InputKind {
    /// Whether this category counts as a manual gesture: pointer press,
    /// key press, or touch start.
    pub fn arms_gesture(&self) -> bool {
        matches!(
            self,
            InputKind::PointerDown | InputKind::KeyDown | InputKind::TouchStart
        )
    }
}

/// An input event as delivered by the host
#[derive(Debug, Clone, Copy)]
pub struct InputEvent {
    pub kind: InputKind,
    /// False for events synthesized by page script
    pub is_trusted: bool,
}

impl InputEvent {
    /// A host-generated (human) event
    pub fn trusted(kind: InputKind) -> Self {
        Self { kind, is_trusted: true }
    }

    /// A script-generated event
    pub fn synthetic(kind: InputKind) -> Self {
        Self { kind, is_trusted: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_categories() {
        assert!(InputKind::PointerDown.arms_gesture());
        assert!(InputKind::KeyDown.arms_gesture());
        assert!(InputKind::TouchStart.arms_gesture());

        assert!(!InputKind::PointerUp.arms_gesture());
        assert!(!InputKind::PointerMove.arms_gesture());
        assert!(!InputKind::KeyUp.arms_gesture());
        assert!(!InputKind::TouchEnd.arms_gesture());
    }

    #[test]
    fn test_trust_bit() {
        assert!(InputEvent::trusted(InputKind::PointerDown).is_trusted);
        assert!(!InputEvent::synthetic(InputKind::PointerDown).is_trusted);
    }
}
