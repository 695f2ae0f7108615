//! Layout measurement: slide and frame geometry derived from host metrics.
//!
//! ## Usage
//!
//! Recomputed on mount, on resize, on children change and on any geometry
//! affecting config change. The first pass typically runs against placeholder
//! measurements and is corrected once the host content has real extents.

use crate::args::{CarouselArgs, HeightMode, SlideAnimation, SlidesToScroll};
use crate::style::{SlideExtent, Viewport};

/// Fraction of the frame width reserved around a zooming slide.
const ZOOM_WIDTH_MARGIN: f32 = 0.15;

/// Derived slide and frame geometry for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideGeometry {
    /// Width of one slide along the main axis.
    pub slide_width: f32,
    /// Height of the slide strip (rows stacked for vertical orientation).
    pub slide_height: f32,
    /// Frame width used by offset math.
    pub frame_width: f32,
    /// Frame height.
    pub frame_height: f32,
}

impl SlideGeometry {
    /// Geometry used before the host has produced a real measurement,
    /// seeded from `initial_slide_width` / `initial_slide_height`.
    pub fn placeholder(args: &CarouselArgs) -> Self {
        let slide_width = if args.vertical {
            args.initial_slide_height
        } else {
            args.initial_slide_width
        };
        let slide_height = if args.vertical {
            args.initial_slide_height * args.slides_to_show
        } else {
            args.initial_slide_height
        };
        let frame_height = slide_height + args.cell_spacing * (args.slides_to_show - 1.0);
        let frame_width = if args.vertical { frame_height } else { 0.0 };
        Self {
            slide_width,
            slide_height,
            frame_width,
            frame_height,
        }
    }

    /// Derives geometry from a live host measurement snapshot.
    ///
    /// Zero-sized measurements degrade to zero-sized geometry rather than
    /// failing; a later pass corrects them.
    pub fn measure(
        args: &CarouselArgs,
        viewport: Viewport,
        slides: &[SlideExtent],
        current_slide: usize,
    ) -> Self {
        let base_height = match args.height_mode {
            HeightMode::Max => slides.iter().map(|s| s.height).fold(0.0, f32::max),
            HeightMode::Current => slides.get(current_slide).map_or(0.0, |s| s.height),
            HeightMode::First => slides.first().map_or(0.0, |s| s.height),
        };

        let slide_height = if args.vertical {
            base_height * args.slides_to_show
        } else {
            base_height
        };
        let frame_height = slide_height + args.cell_spacing * (args.slides_to_show - 1.0);
        let frame_width = if args.vertical {
            frame_height
        } else {
            viewport.width
        };

        let mut slide_width = if args.animation == SlideAnimation::Zoom {
            frame_width - frame_width * ZOOM_WIDTH_MARGIN
        } else if let Some(explicit) = args.slide_width {
            explicit
        } else if args.vertical {
            slide_height / args.slides_to_show
        } else {
            frame_width / args.slides_to_show
        };
        if !args.vertical {
            slide_width -= args.cell_spacing * ((100.0 - 100.0 / args.slides_to_show) / 100.0);
        }

        Self {
            slide_width: slide_width.max(0.0),
            slide_height,
            frame_width,
            frame_height,
        }
    }

    /// Extent of the frame along the scroll axis.
    pub fn frame_extent(&self, vertical: bool) -> f32 {
        if vertical {
            self.frame_height
        } else {
            self.frame_width
        }
    }
}

/// Resolves the configured step to a concrete slide count for this layout
/// pass. `Auto` fills the frame and never resolves below 1.
pub fn resolve_slides_to_scroll(args: &CarouselArgs, geometry: &SlideGeometry) -> usize {
    match args.slides_to_scroll {
        SlidesToScroll::Count(n) => n.max(1),
        SlidesToScroll::Auto => {
            let step = geometry.slide_width + args.cell_spacing;
            if step <= f32::EPSILON {
                return 1;
            }
            ((geometry.frame_width / step).floor() as usize).max(1)
        }
    }
}
