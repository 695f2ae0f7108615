//! Host-rendered control support.
//!
//! The carousel draws no buttons or dots of its own. Hosts render their own
//! controls from a [`ControlProps`] snapshot and anchor them with a
//! [`ControlPlacement`].

use crate::args::CellAlign;

/// Anchor cell for a host-rendered control overlay, on a 3x3 grid over the
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlPlacement {
    /// Top edge, leading corner.
    TopLeft,
    /// Top edge, centered.
    TopCenter,
    /// Top edge, trailing corner.
    TopRight,
    /// Vertically centered at the leading edge; the usual previous button.
    CenterLeft,
    /// Dead center of the frame.
    CenterCenter,
    /// Vertically centered at the trailing edge; the usual next button.
    CenterRight,
    /// Bottom edge, leading corner.
    BottomLeft,
    /// Bottom edge, centered; the usual paging dots.
    BottomCenter,
    /// Bottom edge, trailing corner.
    BottomRight,
}

impl ControlPlacement {
    /// All placements, in reading order.
    pub const ALL: [ControlPlacement; 9] = [
        ControlPlacement::TopLeft,
        ControlPlacement::TopCenter,
        ControlPlacement::TopRight,
        ControlPlacement::CenterLeft,
        ControlPlacement::CenterCenter,
        ControlPlacement::CenterRight,
        ControlPlacement::BottomLeft,
        ControlPlacement::BottomCenter,
        ControlPlacement::BottomRight,
    ];

    /// Normalized anchor within the frame, `(0, 0)` top-leading to `(1, 1)`
    /// bottom-trailing.
    pub fn anchor(self) -> (f32, f32) {
        let column = match self {
            Self::TopLeft | Self::CenterLeft | Self::BottomLeft => 0.0,
            Self::TopCenter | Self::CenterCenter | Self::BottomCenter => 0.5,
            Self::TopRight | Self::CenterRight | Self::BottomRight => 1.0,
        };
        let row = match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => 0.0,
            Self::CenterLeft | Self::CenterCenter | Self::CenterRight => 0.5,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => 1.0,
        };
        (column, row)
    }
}

/// Navigation state snapshot for rendering controls.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlProps {
    /// Current slide index.
    pub current_slide: usize,
    /// Total number of slides.
    pub slide_count: usize,
    /// Visible window width in slides.
    pub slides_to_show: f32,
    /// Resolved navigation step.
    pub slides_to_scroll: usize,
    /// Anchor point of the current slide within the frame.
    pub cell_align: CellAlign,
    /// Whether navigation wraps at the strip bounds.
    pub wrap_around: bool,
    /// Frame width of the current layout pass.
    pub frame_width: f32,
    /// Slide width of the current layout pass.
    pub slide_width: f32,
}

impl ControlProps {
    /// A previous button should be enabled.
    pub fn can_go_previous(&self) -> bool {
        self.wrap_around || self.current_slide > 0
    }

    /// A next button should be enabled.
    pub fn can_go_next(&self) -> bool {
        self.wrap_around
            || (self.current_slide as f32) < self.slide_count as f32 - self.slides_to_show
    }

    /// Indices a dot strip should offer, one per navigation page.
    pub fn page_indices(&self) -> Vec<usize> {
        if self.slide_count == 0 || self.slides_to_scroll == 0 {
            return Vec::new();
        }
        (0..self.slide_count)
            .step_by(self.slides_to_scroll)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_span_the_unit_square() {
        assert_eq!(ControlPlacement::TopLeft.anchor(), (0.0, 0.0));
        assert_eq!(ControlPlacement::CenterCenter.anchor(), (0.5, 0.5));
        assert_eq!(ControlPlacement::BottomRight.anchor(), (1.0, 1.0));
        assert_eq!(ControlPlacement::CenterRight.anchor(), (1.0, 0.5));
    }

    #[test]
    fn buttons_disable_at_the_bounds() {
        let props = ControlProps {
            current_slide: 0,
            slide_count: 5,
            slides_to_show: 1.0,
            slides_to_scroll: 1,
            cell_align: CellAlign::Left,
            wrap_around: false,
            frame_width: 300.0,
            slide_width: 300.0,
        };
        assert!(!props.can_go_previous());
        assert!(props.can_go_next());

        let at_end = ControlProps {
            current_slide: 4,
            ..props
        };
        assert!(at_end.can_go_previous());
        assert!(!at_end.can_go_next());

        let wrapping = ControlProps {
            wrap_around: true,
            ..at_end
        };
        assert!(wrapping.can_go_previous() && wrapping.can_go_next());
    }

    #[test]
    fn page_indices_follow_the_step() {
        let props = ControlProps {
            current_slide: 0,
            slide_count: 7,
            slides_to_show: 2.0,
            slides_to_scroll: 2,
            cell_align: CellAlign::Left,
            wrap_around: false,
            frame_width: 600.0,
            slide_width: 300.0,
        };
        assert_eq!(props.page_indices(), vec![0, 2, 4, 6]);
    }
}
