use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use crate::{Route, components::footer::PageFooter, store::language::use_language};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let t = use_language().t();

    let path = segments.join("/");
    use_hook(move || warn!({ path = %path }, "no route matched"));

    rsx! {
        div { class: "page",
            section { class: "screen",
                div { class: "centered stack-lg enter-rise",
                    h1 { class: "page-title", style: "margin-bottom: 0;", "{t.not_found.title}" }
                    p { class: "prose", "{t.not_found.body}" }
                    Link { class: "nav-link active", to: Route::Home {}, "{t.not_found.back}" }
                }
            }

            PageFooter { tagline: t.footer.tagline }
        }
    }
}
