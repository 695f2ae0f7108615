//! Perspective scroll transition.
//!
//! The current slide sits centered in the frame; every other slide is placed
//! by its signed distance from current, scaled and dimmed per step of
//! distance and stacked so nearer slides paint on top. With wrap-around on,
//! distances take the shorter way around the strip.

use crate::style::{ContainerStyle, SlideStyle};
use crate::transitions::TransitionInput;

fn distance(a: usize, b: usize) -> usize {
    a.abs_diff(b)
}

/// Steps between `index` and the current slide, through the nearer end of
/// the strip when wrapping.
fn distance_to_current(input: &TransitionInput<'_>, index: usize) -> usize {
    let direct = distance(index, input.current_slide);
    if !input.args.wrap_around {
        return direct;
    }
    let by_leading_edge = distance(index, 0) + distance(input.current_slide, input.slide_count);
    let by_trailing_edge = distance(index, input.slide_count) + distance(input.current_slide, 0);
    direct.min(by_leading_edge).min(by_trailing_edge)
}

/// Signed variant of [`distance_to_current`]; positive means past the
/// current slide in index order.
fn relative_distance_to_current(input: &TransitionInput<'_>, index: usize) -> isize {
    let direct = index as isize - input.current_slide as isize;
    if !input.args.wrap_around {
        return direct;
    }
    let by_leading_edge = distance(index, 0) + distance(input.current_slide, input.slide_count);
    let by_trailing_edge = distance(index, input.slide_count) + distance(input.current_slide, 0);
    let minimum = direct
        .unsigned_abs()
        .min(by_leading_edge)
        .min(by_trailing_edge);

    if minimum == direct.unsigned_abs() {
        direct
    } else if minimum == by_leading_edge {
        by_leading_edge as isize
    } else {
        -(by_trailing_edge as isize)
    }
}

/// Total margin freed up by the shrunken slides between here and current.
/// Each step toward current compounds another power of the zoom scale.
fn zoom_offset(zoom_scale: f32, slide_width: f32, relative: isize) -> f32 {
    if relative == 0 {
        return 0.0;
    }
    let margin = (1.0 - zoom_scale.powi(relative.unsigned_abs() as i32)) * slide_width;
    let direction = if relative < 0 { -1.0 } else { 1.0 };
    margin * direction + zoom_offset(zoom_scale, slide_width, relative - relative.signum())
}

fn slide_target_position(input: &TransitionInput<'_>, index: usize) -> f32 {
    if index == input.current_slide {
        return 0.0;
    }
    let relative = relative_distance_to_current(input, index);
    let span = input.geometry.slide_width + input.args.cell_spacing;
    span * relative as f32 - zoom_offset(input.args.zoom_scale, input.geometry.slide_width, relative)
        + input.zoom_nudge(index)
}

pub(crate) fn render(input: &TransitionInput<'_>) -> (ContainerStyle, Vec<SlideStyle>) {
    let args = input.args;
    let geometry = input.geometry;
    let container = ContainerStyle {
        // Center the current slide in the frame.
        tx: (geometry.frame_width - geometry.slide_width) / 2.0,
        ty: 0.0,
        extent: (geometry.slide_width + args.cell_spacing) * input.slide_count as f32,
        margin: -args.cell_spacing / 2.0,
        dragging: input.dragging,
    };

    let slides = (0..input.slide_count)
        .map(|index| {
            let steps = distance_to_current(input, index);
            let current = index == input.current_slide;
            let falloff = |per_step: f32| {
                if current {
                    1.0
                } else {
                    per_step.powi(steps as i32).clamp(0.0, 1.0)
                }
            };
            let target = slide_target_position(input, index);
            SlideStyle {
                index,
                x: if args.vertical { 0.0 } else { target },
                y: if args.vertical { target } else { 0.0 },
                width: geometry.slide_width,
                height: geometry.slide_height,
                opacity: falloff(args.opacity_scale),
                scale: falloff(args.zoom_scale),
                z_index: (input.slide_count - steps) as i32,
                visible: steps as f32 <= args.slides_to_show / 2.0,
                margin: args.cell_spacing / 2.0,
                ..SlideStyle::default()
            }
        })
        .collect();

    (container, slides)
}
