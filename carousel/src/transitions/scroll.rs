//! Linear scroll transition.
//!
//! Slides sit at `(slide_width + cell_spacing) * index` and the whole strip
//! is translated by the animated offset. With wrap-around on, slides far from
//! the settled position are repositioned one strip length ahead or behind so
//! the visible neighborhood is always populated.

use crate::args::SlideAnimation;
use crate::style::{ContainerStyle, SlideStyle};
use crate::transitions::TransitionInput;

/// Scroll direction of the running transition, from the strip's point of
/// view. Wrap-around snaps travel opposite to the index delta.
fn slide_direction(start: usize, end: usize, wrapping: bool) -> i32 {
    if start == end {
        return 0;
    }
    let forward = start < end;
    if wrapping == forward { -1 } else { 1 }
}

fn slide_target_position(input: &TransitionInput<'_>, index: usize, position_value: f32) -> f32 {
    let geometry = input.geometry;
    let span = geometry.slide_width + input.args.cell_spacing;
    let mut target = span * index as f32;

    let start_slide = if geometry.slide_width <= f32::EPSILON {
        0
    } else {
        ((position_value / geometry.slide_width).floor().abs() as usize)
            .min(input.slide_count.saturating_sub(1))
    };

    if input.args.wrap_around && index != start_slide {
        let direction = slide_direction(start_slide, input.current_slide, input.is_wrapping);
        let mut slides_before = (input.slide_count - 1) / 2;
        let mut slides_after = input.slide_count - slides_before - 1;
        if direction < 0 {
            std::mem::swap(&mut slides_before, &mut slides_after);
        }

        let distance_from_start = start_slide.abs_diff(index);
        if index < start_slide {
            if distance_from_start > slides_before {
                target = span * (input.slide_count + index) as f32;
            }
        } else if distance_from_start > slides_after {
            target = -span * (input.slide_count - index) as f32;
        }
    }

    target + input.zoom_nudge(index)
}

pub(crate) fn render(input: &TransitionInput<'_>) -> (ContainerStyle, Vec<SlideStyle>) {
    let args = input.args;
    let geometry = input.geometry;
    let span = geometry.slide_width + args.cell_spacing;
    let container = ContainerStyle {
        tx: input.tx,
        ty: input.ty,
        extent: span * input.slide_count as f32,
        margin: -args.cell_spacing / 2.0,
        dragging: input.dragging,
    };

    let position_value = input.position_value();
    let zoomed = args.animation == SlideAnimation::Zoom;
    let slides = (0..input.slide_count)
        .map(|index| {
            let target = slide_target_position(input, index, position_value);
            let scale = if zoomed && index != input.current_slide {
                args.zoom_scale
            } else {
                1.0
            };
            SlideStyle {
                index,
                x: if args.vertical { 0.0 } else { target },
                y: if args.vertical { target } else { 0.0 },
                width: geometry.slide_width,
                height: geometry.slide_height,
                scale,
                visible: input.in_window(index),
                margin: args.cell_spacing / 2.0,
                ..SlideStyle::default()
            }
        })
        .collect();

    (container, slides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{CarouselArgs, SlideAnimation};
    use crate::layout::SlideGeometry;

    fn geometry() -> SlideGeometry {
        SlideGeometry {
            slide_width: 300.0,
            slide_height: 200.0,
            frame_width: 300.0,
            frame_height: 200.0,
        }
    }

    fn input<'a>(args: &'a CarouselArgs, geometry: &'a SlideGeometry) -> TransitionInput<'a> {
        TransitionInput {
            args,
            geometry,
            slide_count: 5,
            current_slide: 0,
            tx: 0.0,
            ty: 0.0,
            left: 0.0,
            top: 0.0,
            dragging: false,
            is_wrapping: false,
        }
    }

    #[test]
    fn slides_sit_at_span_multiples() {
        let args = CarouselArgs::default().cell_spacing(10.0);
        let geometry = geometry();
        let (container, slides) = render(&input(&args, &geometry));
        assert_eq!(container.extent, 310.0 * 5.0);
        for (index, slide) in slides.iter().enumerate() {
            assert_eq!(slide.x, 310.0 * index as f32);
            assert_eq!(slide.y, 0.0);
            assert_eq!(slide.scale, 1.0);
        }
    }

    #[test]
    fn only_the_revealed_window_is_visible() {
        let args = CarouselArgs::default().slides_to_show(2.0);
        let geometry = geometry();
        let mut input = input(&args, &geometry);
        input.current_slide = 1;
        let (_, slides) = render(&input);
        let visible: Vec<usize> = slides.iter().filter(|s| s.visible).map(|s| s.index).collect();
        assert_eq!(visible, vec![1, 2]);
    }

    #[test]
    fn wrap_repositions_far_slides_behind_the_start() {
        let args = CarouselArgs::default().wrap_around(true);
        let geometry = geometry();
        let mut input = input(&args, &geometry);
        // Settled on slide 0: the far half of the strip moves before it so a
        // backward swipe has neighbors to reveal.
        input.left = 0.0;
        let (_, slides) = render(&input);
        assert_eq!(slides[1].x, 300.0);
        assert_eq!(slides[2].x, 600.0);
        assert_eq!(slides[3].x, -2.0 * 300.0);
        assert_eq!(slides[4].x, -300.0);
    }

    #[test]
    fn wrap_repositions_far_slides_past_the_end() {
        let args = CarouselArgs::default().wrap_around(true);
        let geometry = geometry();
        let mut input = input(&args, &geometry);
        input.current_slide = 4;
        input.left = -4.0 * 300.0;
        let (_, slides) = render(&input);
        // Slides 0 and 1 jump one strip length forward.
        assert_eq!(slides[0].x, 300.0 * 5.0);
        assert_eq!(slides[1].x, 300.0 * 6.0);
        assert_eq!(slides[3].x, 300.0 * 3.0);
    }

    #[test]
    fn zoom_shrinks_and_nudges_neighbors() {
        let args = CarouselArgs::default()
            .animation(SlideAnimation::Zoom)
            .zoom_scale(0.85)
            .slide_offset(25.0);
        let geometry = geometry();
        let mut input = input(&args, &geometry);
        input.current_slide = 2;
        input.left = -600.0;
        let (_, slides) = render(&input);
        assert_eq!(slides[2].scale, 1.0);
        assert_eq!(slides[1].scale, 0.85);
        assert_eq!(slides[3].scale, 0.85);
        // Previous neighbor nudged toward current, next pulled back.
        assert_eq!(slides[1].x, 300.0 + 25.0);
        assert_eq!(slides[3].x, 900.0 - 25.0);
    }

    #[test]
    fn vertical_positions_go_on_the_y_axis() {
        let args = CarouselArgs::default().vertical(true);
        let geometry = geometry();
        let (_, slides) = render(&input(&args, &geometry));
        assert_eq!(slides[2].y, 600.0);
        assert_eq!(slides[2].x, 0.0);
    }
}
