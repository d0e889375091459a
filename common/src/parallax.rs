// scroll-proportional offsets for parallax sections
//
// the anchor is the scroll position at which the section's top edge reaches
// the bottom of the viewport.  the offset is zero there and grows linearly in
// both directions; before the anchor the section is off screen, so whatever
// offset it carries is never seen
pub fn anchor(element_doc_top: f64, viewport_height: f64) -> f64 {
    (element_doc_top - viewport_height).max(0.0)
}

// negative speeds move the section against the scroll direction
pub fn parallax_offset(scroll_y: f64, anchor: f64, speed: f64) -> f64 {
    (scroll_y - anchor) * speed
}

pub fn parallax_style(offset: f64) -> String {
    format!("transform: translate3d(0, {offset}px, 0); will-change: transform;")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn anchor_is_clamped_for_sections_above_the_fold() {
        assert_eq!(anchor(300.0, 900.0), 0.0);
        assert_eq!(anchor(2400.0, 900.0), 1500.0);
    }

    #[test]
    fn zero_at_anchor() {
        assert_eq!(parallax_offset(1500.0, 1500.0, 0.5), 0.0);
    }

    #[test]
    fn keeps_moving_before_anchor() {
        // off screen, but the offset is not clamped
        assert_eq!(parallax_offset(1000.0, 1500.0, 0.5), -250.0);
        assert_eq!(parallax_offset(1000.0, 1500.0, -0.25), 125.0);
    }

    #[test]
    fn style_uses_offset() {
        assert_eq!(
            parallax_style(-12.5),
            "transform: translate3d(0, -12.5px, 0); will-change: transform;"
        );
    }

    proptest! {
        #[test]
        fn offset_is_linear_in_scroll(
            scroll in 0.0f64..10_000.0,
            extra in 0.0f64..1_000.0,
            anchor in 0.0f64..5_000.0,
            speed in -1.0f64..1.0,
        ) {
            let base = parallax_offset(scroll, anchor, speed);
            let moved = parallax_offset(scroll + extra, anchor, speed);
            prop_assert!(((moved - base) - extra * speed).abs() < 1e-6);
        }

        #[test]
        fn negative_speed_inverts(scroll in 0.0f64..10_000.0, speed in 0.0f64..1.0) {
            let forward = parallax_offset(scroll, 0.0, speed);
            let inverse = parallax_offset(scroll, 0.0, -speed);
            prop_assert!((forward + inverse).abs() < 1e-9);
        }
    }
}
