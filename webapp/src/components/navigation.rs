use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    components::icons::{MoonIcon, SunIcon},
    store::{language::use_language, theme::use_theme},
};
use kuro::theme::Theme;

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: &'static str,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    let class = if current_path == target { "nav-link active" } else { "nav-link" };

    rsx! {
        Link {
            class: "{class}",
            to: target.clone(),
            "{name}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let mut language = use_language();
    let mut theme = use_theme();
    let t = language.t();

    rsx! {
        nav { class: "site-nav",
            Link { class: "nav-logo", to: Route::Home {}, "黒" }

            div { class: "nav-links",
                NavBarButton { name: t.nav.home, target: Route::Home {} }
                NavBarButton { name: t.nav.archive, target: Route::Archive {} }
                NavBarButton { name: t.nav.about, target: Route::About {} }
                NavBarButton { name: t.nav.contact, target: Route::Contact {} }

                div { class: "nav-divider" }

                // labelled with the locale it switches to
                button {
                    class: "btn-ghost",
                    r#type: "button",
                    onclick: move |_| language.toggle(),
                    "{language.lang().toggled().label()}"
                }

                button {
                    class: "btn-ghost btn-icon",
                    r#type: "button",
                    "aria-label": "Toggle theme",
                    onclick: move |_| theme.toggle(),
                    {match theme.theme() {
                        Theme::Dark => rsx! { SunIcon {} },
                        Theme::Light => rsx! { MoonIcon {} },
                    }}
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}
