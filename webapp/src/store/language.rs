use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::common::dom;
use kuro::{
    config::site,
    i18n::{Lang, Translations},
};

#[derive(Clone, Copy, PartialEq)]
pub struct LanguageStore {
    lang: Signal<Lang>,
}

impl LanguageStore {
    pub fn new(lang: Signal<Lang>) -> Self {
        LanguageStore { lang }
    }

    pub fn lang(&self) -> Lang {
        *self.lang.read()
    }

    // the dictionary for the active locale
    pub fn t(&self) -> &'static Translations {
        self.lang().translations()
    }

    pub fn set(&mut self, lang: Lang) {
        self.lang.set(lang);
    }

    pub fn toggle(&mut self) {
        let next = self.lang.peek().toggled();
        self.set(next);
    }
}

#[component]
pub fn LanguageProvider(children: Element) -> Element {
    // never persisted; every load starts from the configured default
    let lang = use_signal(|| site().default_lang);
    use_context_provider(|| LanguageStore::new(lang));

    use_effect(move || {
        let lang = lang();
        debug!({ lang = ?lang }, "active locale");

        if let Err(err) = dom::set_document_lang(lang.code()) {
            warn!("failed to set document lang: {err}");
        }
    });

    rsx! {
        {children}
    }
}

pub fn use_language() -> LanguageStore {
    match try_use_context::<LanguageStore>() {
        Some(store) => store,
        None => panic!("use_language() called outside of a LanguageProvider"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Route, testing::RenderedPage};

    // text the home page draws from the dictionary that exists only in the
    // given locale
    fn home_text(lang: Lang) -> [&'static str; 6] {
        let t = lang.translations();
        [
            t.hero.title,
            t.hero.subtitle,
            t.intro.title,
            t.philosophy.faith,
            t.manifesto.title,
            t.footer.tagline,
        ]
    }

    fn assert_shows(html: &str, lang: Lang) {
        for text in home_text(lang) {
            assert!(html.contains(text), "missing {lang:?} text {text}");
        }
        for text in home_text(lang.toggled()) {
            assert!(!html.contains(text), "stale {:?} text {text}", lang.toggled());
        }
    }

    #[test]
    fn home_renders_active_locale_only() {
        for lang in [Lang::Jp, Lang::En] {
            let page = RenderedPage::new(lang, Route::Home {});
            assert_shows(&page.html(), lang);
        }
    }

    #[test]
    fn toggle_rerenders_every_section() {
        let mut page = RenderedPage::new(Lang::Jp, Route::Home {});
        assert_shows(&page.html(), Lang::Jp);

        page.toggle_language();
        assert_eq!(page.language().lang(), Lang::En);
        assert_shows(&page.html(), Lang::En);

        page.toggle_language();
        assert_shows(&page.html(), Lang::Jp);
    }

    #[test]
    fn locale_survives_navigation() {
        let mut page = RenderedPage::new(Lang::Jp, Route::Home {});
        page.toggle_language();

        page.navigate(Route::Contact {});
        let html = page.html();
        assert_eq!(page.language().lang(), Lang::En);
        assert!(html.contains(Lang::En.translations().contact.response_title));
        assert!(!html.contains(Lang::Jp.translations().contact.response_title));

        page.navigate(Route::Archive {});
        assert!(page.html().contains(Lang::En.translations().archive.ledger_title));
    }

    #[test]
    #[should_panic(expected = "outside of a LanguageProvider")]
    fn store_requires_provider() {
        #[component]
        fn Orphan() -> Element {
            let t = use_language().t();
            rsx! { "{t.nav.home}" }
        }

        let mut dom = VirtualDom::new(Orphan);
        dom.rebuild_in_place();
    }
}
