//! Offset calculation: target index and drag delta to strip translation.
//!
//! ## Usage
//!
//! Feeds the transition renderers with the pixel translation of the slide
//! strip, both for settled positions and for live drag previews.

use crate::args::{CarouselArgs, CellAlign, SlidesToScroll};
use crate::layout::SlideGeometry;

/// Inputs shared by every offset computation in one pass.
#[derive(Clone, Copy)]
pub(crate) struct OffsetParams<'a> {
    pub args: &'a CarouselArgs,
    pub geometry: &'a SlideGeometry,
    pub slide_count: usize,
    pub current_slide: usize,
    /// Step resolved for this layout pass (never 0).
    pub slides_to_scroll: usize,
}

/// Pixel translation of the strip for `target` (defaults to the current
/// slide), shifted by a live drag delta.
///
/// `target` is fractional because wrap-around snaps aim one logical page past
/// the real index range.
pub(crate) fn target_left(params: &OffsetParams<'_>, touch_offset: f32, target: Option<f32>) -> f32 {
    let geometry = params.geometry;
    let target = target.unwrap_or(params.current_slide as f32);
    let spacing = params.args.cell_spacing;

    let mut offset = match params.args.cell_align {
        CellAlign::Left => 0.0,
        CellAlign::Center => (geometry.frame_width - geometry.slide_width) / 2.0,
        CellAlign::Right => geometry.frame_width - geometry.slide_width,
    };
    offset -= spacing * target;

    let mut position = geometry.slide_width * target;

    // The last reachable page of an auto-stepped, non-wrapping strip is
    // clamped so it never overshoots past the final slide.
    let last_page = params.current_slide > 0
        && target + params.slides_to_scroll as f32 >= params.slide_count as f32;
    if last_page
        && !params.args.wrap_around
        && params.args.slides_to_scroll == SlidesToScroll::Auto
    {
        position = geometry.slide_width * params.slide_count as f32 - geometry.frame_width;
        offset = -spacing * (params.slide_count as f32 - 1.0);
    }

    offset -= touch_offset;

    -(position - offset)
}

/// Splits the computed offset into the axis-correct `(tx, ty)` pair.
///
/// While a wrap-around snap is in flight the offset aims at the logical wrap
/// target instead of the (already reset) current index.
pub(crate) fn offset_deltas(
    params: &OffsetParams<'_>,
    touch_offset: f32,
    wrap_target: Option<f32>,
) -> (f32, f32) {
    let offset = match wrap_target {
        Some(target) => target_left(params, 0.0, Some(target)),
        None => target_left(params, touch_offset, None),
    };
    if params.args.vertical {
        (0.0, offset)
    } else {
        (offset, 0.0)
    }
}

/// Whether `(tx, ty)` would place the strip before slide 0 or past the last
/// slide (or row, for vertical orientation).
pub(crate) fn is_edge_swiping(params: &OffsetParams<'_>, tx: f32, ty: f32) -> bool {
    let geometry = params.geometry;
    if params.args.vertical {
        let row_height = geometry.slide_height / params.args.slides_to_show;
        let rows_left = params.slide_count as f32 - params.args.slides_to_show;
        let last_limit = row_height * rows_left;
        return ty > 0.0 || -ty > last_limit;
    }
    tx > 0.0 || -tx > geometry.slide_width * (params.slide_count as f32 - 1.0)
}
