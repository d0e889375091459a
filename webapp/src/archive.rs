use dioxus::prelude::*;

use crate::{
    components::{footer::PageFooter, reveal::FadeInSection},
    store::language::use_language,
};
use kuro::gallery::{WORKS, Work, card_delay};

#[derive(Clone, PartialEq, Props)]
struct WorkCardProps {
    work: Work,
    delay: f64,
}

// one catalogue entry; every field is shown exactly as authored
#[component]
fn WorkCard(props: WorkCardProps) -> Element {
    let t = use_language().t();
    let work = props.work;

    rsx! {
        FadeInSection { delay: props.delay,
            div { class: "work-card",
                div { class: "work-frame",
                    img { class: "cover", src: work.image, alt: work.title }
                }
                h3 { class: "work-id", "{work.id}" }
                h4 { class: "work-title", "{work.title}" }
                div { class: "work-meta",
                    p { "{t.archive.date}: {work.date}" }
                    p { "{t.archive.owner}: {work.owner}" }
                }
                p { class: "work-description", "{work.description}" }
                div { class: "work-cid",
                    p { class: "work-cid-label", "{t.archive.cid}" }
                    p { class: "work-cid-value", "{work.cid}" }
                }
            }
        }
    }
}

#[component]
pub fn Archive() -> Element {
    let t = use_language().t();

    rsx! {
        div { class: "page",
            div { class: "page-body",
                div { class: "page-column width-gallery enter-rise",
                    h1 { class: "page-title", style: "margin-bottom: var(--space-8);", "{t.nav.archive}" }
                    p { class: "page-lead", "{t.archive.intro}" }

                    div { class: "grid-3 grid-gallery", style: "gap: var(--space-12);",
                        for (index, work) in WORKS.iter().enumerate() {
                            WorkCard { key: "{work.id}", work: *work, delay: card_delay(index) }
                        }
                    }

                    FadeInSection { delay: 0.8,
                        div {
                            class: "page-column width-narrow centered stack",
                            style: "margin-top: var(--space-32);",
                            h2 { class: "section-title", "{t.archive.ledger_title}" }
                            p { class: "prose", "{t.archive.ledger_body}" }
                        }
                    }
                }
            }

            PageFooter { tagline: t.footer.archive_tagline, width: "width-gallery" }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Route, testing::RenderedPage};
    use kuro::{gallery::WORKS, i18n::Lang};

    #[test]
    fn renders_one_card_per_work() {
        let html = RenderedPage::new(Lang::En, Route::Archive {}).html();

        assert_eq!(html.matches(r#"class="work-card""#).count(), WORKS.len());
    }

    #[test]
    fn cards_show_records_verbatim() {
        let html = RenderedPage::new(Lang::Jp, Route::Archive {}).html();

        for work in WORKS.iter() {
            for field in [work.id, work.title, work.date, work.owner, work.cid] {
                assert!(html.contains(field), "{} missing {field}", work.id);
            }
        }
    }

    #[test]
    fn labels_follow_locale_but_records_do_not() {
        let jp = RenderedPage::new(Lang::Jp, Route::Archive {}).html();
        let en = RenderedPage::new(Lang::En, Route::Archive {}).html();

        let label = |lang: Lang, work: usize| format!("{}: {}", lang.translations().archive.owner, WORKS[work].owner);
        assert!(jp.contains(&label(Lang::Jp, 0)));
        assert!(en.contains(&label(Lang::En, 0)));
        assert!(!en.contains(&label(Lang::Jp, 0)));

        assert!(en.contains(WORKS[5].cid));
    }
}
