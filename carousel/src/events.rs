//! Host event surface: key input mapping and slide notifications.
//!
//! ## Usage
//!
//! Feed decoded key presses into [`crate::Carousel::handle_key`] and receive
//! slide notifications through the hooks on [`crate::CarouselArgs`].

/// Payload of the `before_slide` hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    /// Index the carousel is leaving.
    pub from: usize,
    /// Index the carousel is heading to.
    pub to: usize,
}

/// Payload of the announce-message renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideStatus {
    /// Currently settled slide index.
    pub current_slide: usize,
    /// Total number of slides.
    pub slide_count: usize,
}

/// Default accessibility live-region message.
pub fn default_announce_slide_message(status: SlideStatus) -> String {
    format!(
        "Slide {} of {}",
        status.current_slide + 1,
        status.slide_count
    )
}

/// Decoded key press understood by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyInput {
    /// Right arrow.
    ArrowRight,
    /// Left arrow.
    ArrowLeft,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// `W` key.
    KeyW,
    /// `A` key.
    KeyA,
    /// `S` key.
    KeyS,
    /// `D` key.
    KeyD,
    /// `Q` key.
    KeyQ,
    /// `E` key.
    KeyE,
    /// Space bar.
    Space,
}

/// Navigation action a key press maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Next,
    Previous,
    First,
    Last,
    TogglePause,
}

impl KeyInput {
    pub(crate) fn action(self) -> KeyAction {
        match self {
            Self::ArrowRight | Self::KeyD | Self::ArrowUp | Self::KeyW => KeyAction::Next,
            Self::ArrowLeft | Self::KeyA | Self::ArrowDown | Self::KeyS => KeyAction::Previous,
            Self::KeyQ => KeyAction::First,
            Self::KeyE => KeyAction::Last,
            Self::Space => KeyAction::TogglePause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_message_is_one_based() {
        let message = default_announce_slide_message(SlideStatus {
            current_slide: 0,
            slide_count: 6,
        });
        assert_eq!(message, "Slide 1 of 6");
    }

    #[test]
    fn wasd_mirrors_arrows() {
        assert_eq!(KeyInput::KeyD.action(), KeyInput::ArrowRight.action());
        assert_eq!(KeyInput::KeyA.action(), KeyInput::ArrowLeft.action());
        assert_eq!(KeyInput::KeyW.action(), KeyAction::Next);
        assert_eq!(KeyInput::KeyS.action(), KeyAction::Previous);
    }
}
