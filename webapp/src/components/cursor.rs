use dioxus::prelude::*;

use kuro::cursor::CursorState;

#[derive(Clone, PartialEq, Props)]
struct CursorMarksProps {
    cursor: Signal<CursorState>,
}

// split out so that pointer moves only re-render the two marks
#[component]
fn CursorMarks(props: CursorMarksProps) -> Element {
    let cursor = props.cursor.read();

    rsx! {
        div { class: "cursor-ring", style: "{cursor.ring_style()}" }
        div { class: "cursor-dot", style: "{cursor.dot_style()}" }
    }
}

#[component]
pub fn CursorFollower(children: Element) -> Element {
    let mut cursor = use_signal(CursorState::default);

    rsx! {
        div {
            onmousemove: move |event: MouseEvent| {
                let point = event.client_coordinates();
                cursor.set(CursorState::at(point.x, point.y));
            },
            onmouseleave: move |_| cursor.write().hide(),
            {children}
            CursorMarks { cursor }
        }
    }
}
