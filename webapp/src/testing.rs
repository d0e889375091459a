use dioxus::prelude::*;

use crate::{
    Route, about::About, archive::Archive, contact::Contact, home::Home,
    store::language::LanguageStore,
};
use kuro::i18n::Lang;

// server-side rendering of single pages
//
// the language store is installed directly instead of through
// LanguageProvider, whose effect touches the browser document.  the current
// page is held in a signal above the pages, in the same position the router
// holds it in the app, so switching it stands in for a navigation

#[derive(Clone, PartialEq, Props)]
struct PageHarnessProps {
    lang: Lang,
    route: Route,
}

#[component]
fn PageHarness(props: PageHarnessProps) -> Element {
    let lang = use_signal(|| props.lang);
    let route = use_signal(|| props.route.clone());
    use_context_provider(|| LanguageStore::new(lang));
    use_context_provider(|| route);

    let page = match route() {
        Route::Home {} => rsx! { Home {} },
        Route::Archive {} => rsx! { Archive {} },
        Route::About {} => rsx! { About {} },
        Route::Contact {} => rsx! { Contact {} },
        // links need a router
        Route::NotFound { .. } => rsx! {},
    };

    rsx! {
        {page}
    }
}

pub struct RenderedPage {
    dom: VirtualDom,
}

impl RenderedPage {
    pub fn new(lang: Lang, route: Route) -> Self {
        let mut dom = VirtualDom::new_with_props(PageHarness, PageHarnessProps { lang, route });
        dom.rebuild_in_place();
        RenderedPage { dom }
    }

    pub fn html(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn language(&self) -> LanguageStore {
        self.dom
            .in_runtime(|| ScopeId::APP.consume_context::<LanguageStore>())
            .expect("harness provides a language store")
    }

    pub fn toggle_language(&mut self) {
        let mut store = self.language();
        self.dom.in_runtime(|| store.toggle());
        self.dom.render_immediate_to_vec();
    }

    pub fn navigate(&mut self, to: Route) {
        let mut route = self
            .dom
            .in_runtime(|| ScopeId::APP.consume_context::<Signal<Route>>())
            .expect("harness provides the current route");
        self.dom.in_runtime(|| route.set(to));
        self.dom.render_immediate_to_vec();
    }
}
