use dioxus::prelude::*;
use tracing::debug;

use crate::common::storage::{StoredPreference, get_local_storage, set_local_storage};
use kuro::{config::site, theme::Theme};

impl StoredPreference for Theme {
    const KEY: &'static str = "theme";

    fn store(&self) -> () {
        set_local_storage(Self::KEY, *self)
    }

    fn fetch_or(default: Self) -> Self {
        get_local_storage(Self::KEY).ok().flatten().unwrap_or(default)
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct ThemeStore {
    theme: Signal<Theme>,
}

impl ThemeStore {
    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    pub fn toggle(&mut self) {
        let next = self.theme.peek().toggled();
        debug!({ theme = %next }, "switching theme");

        self.theme.set(next);
        next.store();
    }
}

// installs the store and renders the themed site root
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let theme = use_signal(|| Theme::fetch_or(site().default_theme));
    use_context_provider(|| ThemeStore { theme });

    rsx! {
        div { class: "site-root", "data-theme": "{theme().css_value()}", {children} }
    }
}

pub fn use_theme() -> ThemeStore {
    match try_use_context::<ThemeStore>() {
        Some(store) => store,
        None => panic!("use_theme() called outside of a ThemeProvider"),
    }
}
