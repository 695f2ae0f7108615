//! Cross-fade transition.
//!
//! The strip never moves. The animated offset is reinterpreted as a
//! fractional slide position and the windows anchored at the fade origin and
//! the current slide dissolve into each other, opacities summing to 1.

use smallvec::SmallVec;

use crate::style::{ContainerStyle, SlideStyle};
use crate::transitions::TransitionInput;

struct FadeCell {
    opacity: f32,
    left: f32,
}

type FadeMap = SmallVec<[(isize, FadeCell); 8]>;

fn insert(map: &mut FadeMap, key: isize, cell: FadeCell) {
    if let Some(entry) = map.iter_mut().find(|(k, _)| *k == key) {
        entry.1 = cell;
    } else {
        map.push((key, cell));
    }
}

/// Builds the opacity and position of every slide taking part in the fade.
/// Slides absent from the map are fully transparent and unpainted.
fn opacity_and_left_map(
    input: &TransitionInput<'_>,
    fade_from: f32,
    fade_to: f32,
    fade: f32,
) -> FadeMap {
    let show = input.args.slides_to_show;
    let slide_count = input.slide_count as f32;

    // At the strip bounds the neighboring page does not exist; aim the fade
    // at the phantom window past the edge so the origin still dissolves out.
    let mut fade_to_position = fade_to;
    if fade_from > fade && fade_from == 0.0 {
        fade_to_position = fade_from - show;
    } else if fade_from < fade && fade_from + show > slide_count - 1.0 {
        fade_to_position = fade_from + show;
    }

    let (from_opacity, to_opacity) = if fade_from == fade_to {
        (1.0, 1.0)
    } else {
        let distance = fade_from - fade_to_position;
        if distance.abs() <= f32::EPSILON {
            (1.0, 1.0)
        } else {
            (
                ((fade - fade_to_position) / distance).clamp(0.0, 1.0),
                ((fade_from - fade) / distance).clamp(0.0, 1.0),
            )
        }
    };

    let mut map = FadeMap::new();
    for i in 0..show as isize {
        let left = input.geometry.slide_width * i as f32;
        insert(
            &mut map,
            fade_from as isize + i,
            FadeCell {
                opacity: from_opacity,
                left,
            },
        );
        insert(
            &mut map,
            fade_to as isize + i,
            FadeCell {
                opacity: to_opacity,
                left,
            },
        );
    }
    map
}

pub(crate) fn render(
    input: &TransitionInput<'_>,
    fade_from: &mut f32,
) -> (ContainerStyle, Vec<SlideStyle>) {
    let args = input.args;
    let geometry = input.geometry;
    let container = ContainerStyle {
        tx: 0.0,
        ty: 0.0,
        extent: geometry.slide_width * args.slides_to_show,
        margin: -args.cell_spacing / 2.0,
        dragging: input.dragging,
    };

    let fade = if geometry.slide_width > f32::EPSILON {
        -input.delta() / geometry.slide_width
    } else {
        input.current_slide as f32
    };
    // A whole-slide position anchors the next dissolve; mid-fade the anchor
    // stays where the animation started.
    if fade.fract() == 0.0 {
        *fade_from = fade;
    }

    let map = opacity_and_left_map(input, *fade_from, input.current_slide as f32, fade);
    let slides = (0..input.slide_count)
        .map(|index| {
            let cell = map.iter().find(|(k, _)| *k == index as isize).map(|(_, c)| c);
            SlideStyle {
                index,
                x: cell.map_or(0.0, |c| c.left),
                y: 0.0,
                width: geometry.slide_width,
                height: geometry.slide_height,
                opacity: cell.map_or(0.0, |c| c.opacity),
                visible: input.in_window(index),
                hidden: cell.is_none(),
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
    use crate::args::{CarouselArgs, TransitionMode};
    use crate::layout::SlideGeometry;

    fn args() -> CarouselArgs {
        let mut args = CarouselArgs::default().transition_mode(TransitionMode::Fade);
        args.sanitize();
        args
    }

    fn geometry() -> SlideGeometry {
        SlideGeometry {
            slide_width: 400.0,
            slide_height: 200.0,
            frame_width: 400.0,
            frame_height: 200.0,
        }
    }

    fn input<'a>(args: &'a CarouselArgs, geometry: &'a SlideGeometry) -> TransitionInput<'a> {
        TransitionInput {
            args,
            geometry,
            slide_count: 4,
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
    fn settled_frame_shows_only_the_current_slide() {
        let args = args();
        let geometry = geometry();
        let mut input = input(&args, &geometry);
        input.current_slide = 1;
        input.tx = -400.0;
        let mut fade_from = 0.0;
        let (container, slides) = render(&input, &mut fade_from);
        assert_eq!(container.tx, 0.0);
        assert_eq!(fade_from, 1.0);
        assert_eq!(slides[1].opacity, 1.0);
        assert!(!slides[1].hidden);
        assert!(slides[0].hidden);
        assert_eq!(slides[0].opacity, 0.0);
    }

    #[test]
    fn opacities_sum_to_one_mid_fade() {
        let args = args();
        let geometry = geometry();
        let mut input = input(&args, &geometry);
        input.current_slide = 2;
        input.tx = -400.0 * 1.25;
        let mut fade_from = 1.0;
        let (_, slides) = render(&input, &mut fade_from);
        // Anchor holds at 1 because the position is fractional.
        assert_eq!(fade_from, 1.0);
        assert!((slides[1].opacity - 0.75).abs() < 1e-5);
        assert!((slides[2].opacity - 0.25).abs() < 1e-5);
        assert!((slides[1].opacity + slides[2].opacity - 1.0).abs() < 1e-5);
        assert!(slides[0].hidden && slides[3].hidden);
    }

    #[test]
    fn window_lands_on_stacked_positions() {
        let mut args = CarouselArgs::default()
            .transition_mode(TransitionMode::Fade)
            .slides_to_show(2.0);
        args.sanitize();
        let geometry = geometry();
        let mut input = input(&args, &geometry);
        input.current_slide = 2;
        input.tx = -800.0;
        let mut fade_from = 2.0;
        let (container, slides) = render(&input, &mut fade_from);
        assert_eq!(container.extent, 800.0);
        assert_eq!(slides[2].x, 0.0);
        assert_eq!(slides[3].x, 400.0);
        assert_eq!(slides[2].opacity, 1.0);
        assert_eq!(slides[3].opacity, 1.0);
    }

    #[test]
    fn backward_wrap_fades_through_a_phantom_window() {
        let mut args = args().wrap_around(true);
        args.sanitize();
        let geometry = geometry();
        let mut input = input(&args, &geometry);
        // Wrapping from slide 0 back to 3: the strip aims past the leading
        // edge, so the origin dissolves against a window at -slides_to_show
        // while the opacity lands on the real target.
        input.current_slide = 3;
        input.is_wrapping = true;
        input.tx = 100.0;
        let mut fade_from = 0.0;
        let (_, slides) = render(&input, &mut fade_from);
        assert!((slides[0].opacity - 0.75).abs() < 1e-5);
        assert!((slides[3].opacity - 0.25).abs() < 1e-5);
        assert!(slides[1].hidden && slides[2].hidden);
    }
}
