use dioxus::prelude::*;

use crate::{
    components::{footer::PageFooter, reveal::FadeInSection},
    store::language::use_language,
};
use kuro::gallery::images;

// the principle blocks carry both languages side by side regardless of the
// active locale
#[derive(Clone, PartialEq, Props)]
struct PrincipleProps {
    title: &'static str,
    en: &'static str,
    jp: &'static str,
}

#[component]
fn Principle(props: PrincipleProps) -> Element {
    rsx! {
        div {
            h2 { class: "section-title", style: "margin-bottom: var(--space-8);", "{props.title}" }
            div { class: "prose stack",
                p { "{props.en}" }
                p { "{props.jp}" }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let t = use_language().t();

    rsx! {
        div { class: "page",
            div { class: "page-body",
                div { class: "page-column width-content enter-rise",
                    h1 { class: "page-title", style: "margin-bottom: var(--space-24);", "{t.about.title}" }

                    FadeInSection {
                        div { class: "prose prose-strong stack-lg gap-after",
                            p { "{t.about.body}" }
                            p {
                                "我々は単なるブランドではない。思想の実装である。"
                                "衣服という物理的媒体を通じて、信仰という抽象概念を具現化する。"
                            }
                            p {
                                "We are not merely a brand. We are the implementation of thought itself. "
                                "Through the physical medium of clothing, we manifest the abstract concept of faith."
                            }
                        }
                    }

                    FadeInSection { delay: 0.2,
                        div { class: "banner",
                            img { class: "cover opacity-60", src: images::PRAYER_HANDS, alt: "Prayer" }
                            div { class: "layer", style: "display: flex; align-items: center; justify-content: center;",
                                h2 { class: "section-title", "信仰" }
                            }
                        }
                    }

                    FadeInSection { delay: 0.3,
                        div { class: "stack-xl gap-after",
                            Principle {
                                title: "The Philosophy",
                                en: "In a world consumed by excess and disposability, we propose an alternative: conscious consumption as spiritual practice. Each piece we create carries intention. Each purchase becomes an act of mindful commitment.",
                                jp: "過剰と使い捨ての世界において、我々は別の道を提案する：意識的な消費を精神的実践として。創作する各作品は意図を宿す。各購入行為は、意識的なコミットメントとなる。",
                            }
                            Principle {
                                title: "The Structure",
                                en: "Our system integrates blockchain technology not as gimmick, but as necessity. IPFS ensures permanent documentation. Smart contracts encode the relationship between creator and collector. This is structure as aesthetic—beauty found in the architecture of permanence.",
                                jp: "我々のシステムは、ブロックチェーン技術をギミックとしてではなく、必要性として統合する。IPFSは永続的な記録を保証する。スマートコントラクトは、創造者とコレクターの関係を符号化する。これは構造としての美学——永続性の建築に見出される美である。",
                            }
                            Principle {
                                title: "The Practice",
                                en: "We produce slowly. Intentionally. Every work is numbered, documented, and traceable from conception through eternity. Buyers may choose to add their story to the record—a personal prayer inscribed in the ledger of time.",
                                jp: "我々はゆっくりと制作する。意図的に。すべての作品には番号が付けられ、記録され、構想から永遠まで追跡可能である。購入者は自身の物語を記録に追加することができる——時間の台帳に刻まれた個人的な祈りとして。",
                            }
                        }
                    }

                    FadeInSection { delay: 0.4,
                        div { class: "banner",
                            img { class: "cover opacity-50", src: images::ZEN_GARDEN, alt: "Zen Garden" }
                            div { class: "layer", style: "display: flex; align-items: center; justify-content: center;",
                                div { class: "centered stack",
                                    h2 { class: "section-title", "Structure as Aesthetic" }
                                    p { class: "hero-subtitle", "{t.about.concept}" }
                                }
                            }
                        }
                    }

                    FadeInSection { delay: 0.5,
                        div { class: "page-column width-narrow centered stack-lg",
                            h2 { class: "section-title", "The Vision" }
                            p { class: "prose prose-strong",
                                "We envision a future where every object carries meaning. "
                                "Where commerce and consciousness converge. "
                                "Where the act of creation and acquisition both become forms of prayer."
                            }
                            p { class: "prose prose-strong",
                                "我々は、すべての物体が意味を持つ未来を思い描く。"
                                "商業と意識が収束する場所。"
                                "創造と獲得の行為がともに祈りの形となる場所。"
                            }
                            div { style: "padding-top: var(--space-12);",
                                p { class: "statement", "This is the scripture of black." }
                                p { class: "statement", style: "margin-top: var(--space-4);",
                                    "これは黒の聖典である。"
                                }
                            }
                        }
                    }
                }
            }

            PageFooter { tagline: t.footer.about_tagline, width: "width-content" }
        }
    }
}
