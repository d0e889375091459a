use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::common::dom::ViewportObserver;
use kuro::{
    config::site,
    reveal::{RevealState, reveal_style},
};

#[derive(Clone, PartialEq, Props)]
pub struct FadeInSectionProps {
    // seconds to wait after the trigger
    #[props(default)]
    delay: f64,
    // overrides for the configured transition
    duration: Option<f64>,
    distance: Option<f64>,
    #[props(default, into)]
    class: String,
    children: Element,
}

// fades and lifts its children into place the first time they scroll into
// view, then stays put
#[component]
pub fn FadeInSection(props: FadeInSectionProps) -> Element {
    let config = site().reveal;

    let mut reveal = use_signal(RevealState::default);
    let mut observer = use_signal(|| None::<ViewportObserver>);

    let attach = move |event: MountedEvent| {
        let data = event.data();
        let Some(element) = data.downcast::<web_sys::Element>() else {
            // not rendered into a browser dom, nothing to observe
            reveal.write().force();
            return;
        };

        let threshold = config.threshold;
        let result = ViewportObserver::new(element, threshold, move |ratio| {
            let mut next = *reveal.peek();
            if next.observe(ratio, threshold) {
                reveal.set(next);
            }
        });

        match result {
            Ok(handle) => {
                reveal.write().arm();
                observer.set(Some(handle));
            }
            Err(err) => {
                warn!("failed to observe section, showing it immediately: {err}");
                reveal.write().force();
            }
        }
    };

    // one-shot: nothing left to watch once the section is visible
    use_effect(move || {
        if reveal().is_revealed() && observer.peek().is_some() {
            debug!("section revealed, disconnecting observer");
            observer.set(None);
        }
    });

    let style = reveal_style(
        reveal(),
        props.duration.unwrap_or(config.duration_secs),
        props.delay,
        props.distance.unwrap_or(config.distance_px),
    );

    rsx! {
        div { class: "{props.class}", style: "{style}", onmounted: attach, {props.children} }
    }
}
