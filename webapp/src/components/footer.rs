use dioxus::prelude::*;

use crate::store::language::use_language;

#[derive(Clone, PartialEq, Props)]
pub struct PageFooterProps {
    tagline: &'static str,
    // max-width class matching the page column
    #[props(default = "width-wide")]
    width: &'static str,
}

#[component]
pub fn PageFooter(props: PageFooterProps) -> Element {
    let t = use_language().t();

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer-inner {props.width}",
                p { "{t.footer.copyright}" }
                p { "{props.tagline}" }
            }
        }
    }
}
