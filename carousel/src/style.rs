//! Per-frame visual output handed to the host for painting.
//!
//! ## Usage
//!
//! Call [`crate::Carousel::frame`] every paint and apply the returned
//! container translation and per-slide styles to the host's elements.

/// Host-measured frame (viewport) box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Frame width in pixels.
    pub width: f32,
    /// Frame height in pixels.
    pub height: f32,
}

/// Host-measured box of one child slide.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideExtent {
    /// Child width in pixels.
    pub width: f32,
    /// Child height in pixels.
    pub height: f32,
}

/// Visual state of a single slide for one frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideStyle {
    /// Slide index within the child list.
    pub index: usize,
    /// Horizontal position within the strip.
    pub x: f32,
    /// Vertical position within the strip.
    pub y: f32,
    /// Slide width along the main axis.
    pub width: f32,
    /// Slide height.
    pub height: f32,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Uniform transform scale.
    pub scale: f32,
    /// Paint order; larger is closer to the viewer.
    pub z_index: i32,
    /// Slide is inside the visible window; only visible slides should be
    /// focusable and announced to assistive technology.
    pub visible: bool,
    /// Slide carries no style data this frame and must not be painted.
    pub hidden: bool,
    /// Half of the cell spacing, applied as a margin on each main-axis side.
    pub margin: f32,
}

impl Default for SlideStyle {
    fn default() -> Self {
        Self {
            index: 0,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            opacity: 1.0,
            scale: 1.0,
            z_index: 0,
            visible: false,
            hidden: false,
            margin: 0.0,
        }
    }
}

/// Visual state of the slide strip container for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerStyle {
    /// Horizontal strip translation.
    pub tx: f32,
    /// Vertical strip translation.
    pub ty: f32,
    /// Strip extent along the scroll axis.
    pub extent: f32,
    /// Negative half-spacing margin compensating the per-slide margins.
    pub margin: f32,
    /// A drag is in progress; hosts typically switch the cursor.
    pub dragging: bool,
}

/// Everything the host needs to paint one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselFrame {
    /// Strip container style.
    pub container: ContainerStyle,
    /// One style per child slide, in child order.
    pub slides: Vec<SlideStyle>,
    /// Accessibility live-region text; absent while autoplay runs.
    pub announcement: Option<String>,
}
