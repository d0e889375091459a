#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::{cursor::CursorFollower, navigation::NavBar, toast::Toaster};

mod store;
use store::{language::LanguageProvider, theme::ThemeProvider};

mod home;
use home::Home;

mod archive;
use archive::Archive;

mod about;
use about::About;

mod contact;
use contact::Contact;

mod not_found;
use not_found::NotFound;

#[cfg(test)]
mod testing;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// navigation never reloads the page, and the stores sit above the router, so
// the chosen locale and theme carry across routes
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/archive")]
        Archive {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        LanguageProvider {
            ThemeProvider {
                CursorFollower {
                    Router::<Route> { config: RouterConfig::default }
                    Toaster {}
                }
            }
        }
    }
}
