use dioxus::prelude::*;

use crate::{
    components::{footer::PageFooter, parallax::ParallaxSection, reveal::FadeInSection},
    store::language::use_language,
};
use kuro::gallery::{Work, featured, images};

// the home page reveals a little slower than the rest of the site
const HOME_REVEAL_SECS: f64 = 1.0;

#[derive(Clone, PartialEq, Props)]
struct PillarProps {
    glyph: &'static str,
    title: &'static str,
    body: &'static str,
    delay: f64,
}

#[component]
fn Pillar(props: PillarProps) -> Element {
    rsx! {
        FadeInSection { delay: props.delay, duration: HOME_REVEAL_SECS,
            div { class: "pillar",
                div { class: "pillar-glyph", "{props.glyph}" }
                h3 { class: "pillar-title", "{props.title}" }
                p { class: "pillar-body", "{props.body}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct WorkPreviewProps {
    work: Work,
    delay: f64,
}

#[component]
fn WorkPreview(props: WorkPreviewProps) -> Element {
    let t = use_language().t();
    let work = props.work;

    rsx! {
        FadeInSection { delay: props.delay, duration: HOME_REVEAL_SECS,
            div { class: "work-card",
                div { class: "work-frame",
                    img { class: "cover", src: work.image, alt: "{work.preview_label()}" }
                }
                h3 { class: "work-id", "{work.preview_label()}" }
                p { class: "work-meta", "{work.preview_caption(t.archive.owner)}" }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let t = use_language().t();

    rsx! {
        div { class: "page",
            // hero
            section { class: "screen-fixed", style: "display: flex; align-items: center; justify-content: center;",
                div { class: "layer enter-settle",
                    img { class: "cover opacity-90", src: images::HERO_KIMONO, alt: "Hero" }
                    div { class: "hero-shade" }
                }
                div { class: "layer-content", style: "padding: 0 var(--space-4);",
                    h1 {
                        class: "hero-title enter-rise",
                        style: "--enter-distance: 30px; animation-delay: 0.5s;",
                        "{t.hero.title}"
                    }
                    p { class: "hero-subtitle enter-fade", style: "animation-delay: 1s;",
                        "{t.hero.subtitle}"
                    }
                }
                div { class: "scroll-cue" }
            }

            // introduction
            section { class: "screen",
                FadeInSection { duration: HOME_REVEAL_SECS,
                    div { class: "page-column width-text centered stack-lg",
                        h2 { class: "section-title", "{t.intro.title}" }
                        p { class: "prose", "{t.intro.body}" }
                    }
                }
            }

            ParallaxSection { speed: -0.3,
                section { class: "screen",
                    FadeInSection { duration: HOME_REVEAL_SECS,
                        div { class: "page-column width-wide",
                            img {
                                class: "opacity-80",
                                style: "width: 100%; max-width: 672px; margin: 0 auto;",
                                src: images::CALLIGRAPHY,
                                alt: "Japanese Calligraphy",
                            }
                        }
                    }
                }
            }

            // philosophy
            section { class: "screen",
                div { class: "page-column width-wide",
                    FadeInSection { duration: HOME_REVEAL_SECS,
                        h2 { class: "section-title centered", "{t.philosophy.title}" }
                    }
                    div { class: "grid-3",
                        Pillar {
                            glyph: "衣",
                            title: t.philosophy.faith,
                            body: t.philosophy.faith_body,
                            delay: 0.2,
                        }
                        Pillar {
                            glyph: "儀",
                            title: t.philosophy.ritual,
                            body: t.philosophy.ritual_body,
                            delay: 0.4,
                        }
                        Pillar {
                            glyph: "祈",
                            title: t.philosophy.prayer,
                            body: t.philosophy.prayer_body,
                            delay: 0.6,
                        }
                    }
                }
            }

            ParallaxSection { speed: 0.5,
                section { class: "screen-fixed",
                    FadeInSection { duration: HOME_REVEAL_SECS, class: "layer",
                        img { class: "cover opacity-60", src: images::ZEN_GARDEN, alt: "Zen Garden" }
                    }
                }
            }

            // materiality
            section { class: "screen",
                div { class: "page-column width-wide grid-2",
                    FadeInSection { duration: HOME_REVEAL_SECS,
                        div { class: "stack",
                            h2 { class: "section-title", "{t.materiality.title}" }
                            p { class: "prose", "{t.materiality.body1}" }
                            p { class: "prose", "{t.materiality.body2}" }
                        }
                    }
                    FadeInSection { delay: 0.3, duration: HOME_REVEAL_SECS,
                        img {
                            class: "cover",
                            style: "aspect-ratio: 1 / 1;",
                            src: images::FABRIC_TEXTURE,
                            alt: "Fabric Texture",
                        }
                    }
                }
            }

            ParallaxSection { speed: -0.4,
                section { class: "screen", style: "position: relative;",
                    div { class: "layer",
                        img { class: "cover opacity-40", src: images::INCENSE_SMOKE, alt: "Incense" }
                    }
                    FadeInSection { duration: HOME_REVEAL_SECS,
                        div { class: "layer-content page-column width-narrow stack-lg",
                            h2 { class: "section-title", "{t.breath.title}" }
                            p { class: "prose prose-strong", "{t.breath.body}" }
                        }
                    }
                }
            }

            // archive preview
            section { class: "screen",
                div { class: "page-column width-wide",
                    FadeInSection { duration: HOME_REVEAL_SECS,
                        h2 { class: "section-title centered", "{t.archive.title}" }
                    }
                    div { class: "grid-2",
                        for (index, work) in featured().iter().enumerate() {
                            WorkPreview {
                                key: "{work.id}",
                                work: *work,
                                delay: 0.2 * (index + 1) as f64,
                            }
                        }
                    }
                }
            }

            ParallaxSection { speed: 0.3,
                section {
                    class: "screen-fixed",
                    style: "display: flex; align-items: center; justify-content: center;",
                    div { class: "layer",
                        img { class: "cover opacity-50", src: images::PRAYER_HANDS, alt: "Prayer" }
                    }
                    FadeInSection { duration: HOME_REVEAL_SECS,
                        div { class: "layer-content stack",
                            h2 { class: "page-title", style: "margin-bottom: 0;", "{t.prayer.title}" }
                            p { class: "hero-subtitle", "{t.prayer.subtitle}" }
                        }
                    }
                }
            }

            // manifesto
            section { class: "screen",
                FadeInSection { duration: HOME_REVEAL_SECS,
                    div { class: "page-column width-text centered stack-xl",
                        h2 { class: "section-title", "{t.manifesto.title}" }
                        div { class: "prose stack-lg",
                            p { "{t.manifesto.text1}" }
                            p { "{t.manifesto.text2}" }
                            p { "{t.manifesto.text3}" }
                            p { class: "statement", style: "padding-top: var(--space-8);",
                                "{t.manifesto.text4}"
                            }
                        }
                    }
                }
            }

            // closing mark
            section { class: "screen-fixed", style: "display: flex; align-items: center; justify-content: center;",
                FadeInSection { duration: 2.0, distance: 0.0,
                    div { class: "centered",
                        div { class: "mark", "黒" }
                        p { class: "caption", "KURO ARCHIVE" }
                    }
                }
            }

            PageFooter { tagline: t.footer.tagline }
        }
    }
}
