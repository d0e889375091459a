use serde::{Deserialize, Serialize};

// browsers report the crossing entry with a ratio that can land a hair under
// the threshold it crossed
pub const RATIO_EPSILON: f64 = 1e-3;

// one-shot viewport trigger
//
// every scroll-reveal wrapper owns one of these.  the state only ever moves
// forward: Unobserved -> Pending once an observer is attached, Pending ->
// Revealed the first time enough of the element is on screen.  nothing moves
// it back, so a revealed section stays visible when it is scrolled away
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Unobserved,
    Pending,
    Revealed,
}

impl RevealState {
    // an observer has been attached to the element
    pub fn arm(&mut self) {
        if *self == Self::Unobserved {
            *self = Self::Pending;
        }
    }

    // feed one intersection report; returns true only on the transition
    // into Revealed, which is the caller's cue to drop its observer
    pub fn observe(&mut self, ratio: f64, threshold: f64) -> bool {
        match self {
            Self::Revealed => false,
            Self::Unobserved | Self::Pending => {
                if ratio + RATIO_EPSILON >= threshold {
                    *self = Self::Revealed;
                    true
                } else {
                    false
                }
            }
        }
    }

    // used when no observer can be attached at all
    pub fn force(&mut self) {
        *self = Self::Revealed;
    }

    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    // fraction of the element that must be in view
    pub threshold: f64,
    pub duration_secs: f64,
    // initial downward offset of hidden content
    pub distance_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        RevealConfig {
            threshold: 0.2,
            duration_secs: 0.8,
            distance_px: 40.0,
        }
    }
}

// inline style for a wrapper in the given state
//
// the transition is present in both states so that the browser animates the
// change from hidden to visible; the delay applies to that change only
pub fn reveal_style(state: RevealState, duration_secs: f64, delay_secs: f64, distance_px: f64) -> String {
    let (opacity, offset) = if state.is_revealed() {
        (1.0, 0.0)
    } else {
        (0.0, distance_px)
    };

    format!(
        "opacity: {opacity}; transform: translate3d(0, {offset}px, 0); \
         transition: opacity {duration_secs}s ease-out {delay_secs}s, transform {duration_secs}s ease-out {delay_secs}s;"
    )
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn arm_moves_forward_only() {
        let mut state = RevealState::default();
        state.arm();
        assert_eq!(state, RevealState::Pending);

        state.force();
        state.arm();
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn below_threshold_stays_pending() {
        let mut state = RevealState::Pending;
        assert!(!state.observe(0.19, 0.2));
        assert_eq!(state, RevealState::Pending);
    }

    #[test]
    fn threshold_crossing_reveals_exactly_once() {
        let mut state = RevealState::Pending;
        assert!(state.observe(0.1999, 0.2));
        assert!(state.is_revealed());
        assert!(!state.observe(1.0, 0.2));
        assert!(!state.observe(0.0, 0.2));
        assert!(state.is_revealed());
    }

    #[test]
    fn style_reflects_state() {
        let hidden = reveal_style(RevealState::Pending, 0.8, 0.2, 40.0);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translate3d(0, 40px, 0)"));
        assert!(hidden.contains("0.8s ease-out 0.2s"));

        let shown = reveal_style(RevealState::Revealed, 0.8, 0.2, 40.0);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("translate3d(0, 0px, 0)"));
    }

    proptest! {
        #[test]
        fn revealed_never_reverts(ratios in prop::collection::vec(0.0f64..=1.0, 1..64)) {
            let threshold = RevealConfig::default().threshold;
            let mut state = RevealState::default();
            state.arm();

            let mut seen = false;
            let mut transitions = 0;
            for ratio in ratios {
                if state.observe(ratio, threshold) {
                    transitions += 1;
                }
                seen |= ratio + RATIO_EPSILON >= threshold;
                prop_assert_eq!(state.is_revealed(), seen);
            }
            prop_assert!(transitions <= 1);
        }
    }
}
