use dioxus::prelude::*;
use tracing::warn;

use crate::common::dom::{self, WindowListener};
use kuro::parallax::{anchor, parallax_offset, parallax_style};

#[derive(Clone, PartialEq, Props)]
pub struct ParallaxSectionProps {
    // negative values move against the scroll direction
    speed: f64,
    children: Element,
}

#[component]
pub fn ParallaxSection(props: ParallaxSectionProps) -> Element {
    let speed = props.speed;

    let mut offset = use_signal(|| 0.0);
    let mut listener = use_signal(|| None::<WindowListener>);

    let attach = move |event: MountedEvent| {
        let data = event.data();
        let Some(element) = data.downcast::<web_sys::Element>() else {
            return;
        };

        let anchor = anchor(dom::document_top(element), dom::viewport_height());
        let mut update = move || offset.set(parallax_offset(dom::scroll_y(), anchor, speed));
        update();

        match WindowListener::new("scroll", update) {
            Ok(handle) => listener.set(Some(handle)),
            Err(err) => warn!("failed to attach parallax scroll listener: {err}"),
        }
    };

    rsx! {
        div { style: "{parallax_style(offset())}", onmounted: attach, {props.children} }
    }
}
