// decorative pointer follower: an outer ring and an inner dot, both centred
// on the pointer and hidden while it is outside the page
const RING_RADIUS: f64 = 8.0;
const DOT_RADIUS: f64 = 2.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
}

impl CursorState {
    pub fn at(x: f64, y: f64) -> Self {
        CursorState { x, y, visible: true }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    fn style(&self, radius: f64, opacity: f64) -> String {
        let opacity = if self.visible { opacity } else { 0.0 };
        format!(
            "transform: translate3d({}px, {}px, 0); opacity: {opacity};",
            self.x - radius,
            self.y - radius
        )
    }

    pub fn ring_style(&self) -> String {
        self.style(RING_RADIUS, 0.5)
    }

    pub fn dot_style(&self) -> String {
        self.style(DOT_RADIUS, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_are_centred_on_the_pointer() {
        let cursor = CursorState::at(100.0, 50.0);
        assert_eq!(
            cursor.ring_style(),
            "transform: translate3d(92px, 42px, 0); opacity: 0.5;"
        );
        assert_eq!(
            cursor.dot_style(),
            "transform: translate3d(98px, 48px, 0); opacity: 1;"
        );
    }

    #[test]
    fn hidden_until_the_pointer_moves() {
        let mut cursor = CursorState::default();
        assert!(cursor.ring_style().ends_with("opacity: 0;"));

        cursor = CursorState::at(1.0, 1.0);
        cursor.hide();
        assert!(cursor.dot_style().ends_with("opacity: 0;"));
    }
}
