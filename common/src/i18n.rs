use serde::{Deserialize, Serialize};

// supported locales
//
// there are exactly two, and the site always starts in the configured default
// (see config.rs) -- the active locale is never persisted across reloads
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Jp,
    En,
}

impl Lang {
    // BCP 47 tag, used for the document lang attribute
    pub fn code(self) -> &'static str {
        match self {
            Self::Jp => "ja",
            Self::En => "en",
        }
    }

    // label shown on the toggle button
    pub fn label(self) -> &'static str {
        match self {
            Self::Jp => "JP",
            Self::En => "EN",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Jp => Self::En,
            Self::En => Self::Jp,
        }
    }

    pub fn translations(self) -> &'static Translations {
        match self {
            Self::Jp => &JP,
            Self::En => &EN,
        }
    }
}

// the dictionary schema
//
// both locales instantiate the same struct tree, so a key missing from one
// of them is a compile error rather than a blank string at runtime
#[derive(Debug, PartialEq, Serialize)]
pub struct Translations {
    pub nav: NavText,
    pub hero: HeroText,
    pub intro: IntroText,
    pub philosophy: PhilosophyText,
    pub about: AboutText,
    pub contact: ContactText,
    pub materiality: MaterialityText,
    pub breath: BreathText,
    pub archive: ArchiveText,
    pub prayer: PrayerText,
    pub manifesto: ManifestoText,
    pub not_found: NotFoundText,
    pub footer: FooterText,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct NavText {
    pub home: &'static str,
    pub archive: &'static str,
    pub about: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct HeroText {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct IntroText {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct PhilosophyText {
    pub title: &'static str,
    pub faith: &'static str,
    pub faith_body: &'static str,
    pub ritual: &'static str,
    pub ritual_body: &'static str,
    pub prayer: &'static str,
    pub prayer_body: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct AboutText {
    pub title: &'static str,
    pub concept: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ContactText {
    pub title: &'static str,
    pub intro: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub message: &'static str,
    pub submit: &'static str,
    pub sent_title: &'static str,
    pub sent_body: &'static str,
    pub alternative: &'static str,
    pub response_title: &'static str,
    pub response_body: &'static str,
    pub visit_title: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct MaterialityText {
    pub title: &'static str,
    pub body1: &'static str,
    pub body2: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct BreathText {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ArchiveText {
    pub title: &'static str,
    pub intro: &'static str,
    pub date: &'static str,
    pub owner: &'static str,
    pub cid: &'static str,
    pub ledger_title: &'static str,
    pub ledger_body: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct PrayerText {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ManifestoText {
    pub title: &'static str,
    pub text1: &'static str,
    pub text2: &'static str,
    pub text3: &'static str,
    pub text4: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct NotFoundText {
    pub title: &'static str,
    pub body: &'static str,
    pub back: &'static str,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct FooterText {
    pub copyright: &'static str,
    pub tagline: &'static str,
    pub archive_tagline: &'static str,
    pub about_tagline: &'static str,
    pub contact_tagline: &'static str,
}

pub static JP: Translations = Translations {
    nav: NavText {
        home: "ホーム",
        archive: "アーカイブ",
        about: "理念",
        contact: "問い合わせ",
    },
    hero: HeroText {
        title: "信仰と黒のアーカイブ",
        subtitle: "静寂を通して、存在を記録する",
    },
    intro: IntroText {
        title: "これは店ではない。黒の聖典である。",
        body: "衣服とは信仰であり、購入とは儀式である。そして記録とは祈りである。我々は単なる販売を超えた、思想と存在の記録システムを構築する。",
    },
    philosophy: PhilosophyText {
        title: "哲学",
        faith: "衣服 = 信仰",
        faith_body: "すべての衣服は信念の重みを宿し、その布地そのものに織り込まれている。",
        ritual: "購入 = 儀式",
        ritual_body: "獲得という行為は、献身を誓う神聖な儀式となる。",
        prayer: "記録 = 祈り",
        prayer_body: "記録は取引を超え、永遠への捧げものとなる。",
    },
    about: AboutText {
        title: "理念",
        concept: "構造としての美学",
        body: "我々は衣服を通じて信仰を表現し、購入を通じて儀式を執り行い、記録を通じて祈りを捧げる。これは単なるeコマースではなく、思想の記録装置である。",
    },
    contact: ContactText {
        title: "問い合わせ",
        intro: "作品、制作依頼、または哲学的な対話についてのお問い合わせは、以下のフォームよりご連絡ください。すべてのメッセージに相応の敬意をもって返信いたします。",
        name: "名前",
        email: "メールアドレス",
        message: "メッセージ",
        submit: "送信",
        sent_title: "送信完了",
        sent_body: "お問い合わせを受け付けました。48時間以内に返信いたします。",
        alternative: "その他の連絡先",
        response_title: "返信について",
        response_body: "通常24〜48時間以内に返信いたします",
        visit_title: "訪問",
    },
    materiality: MaterialityText {
        title: "沈黙の物質性",
        body1: "すべての糸は囁きで語る。闇の質感、光の重み。我々の作品は、物質と虚無の間の空間に存在する。",
        body2: "伝統的な日本の職人技と哲学的探求の融合。各作品は番号付けされ、記録され、ブロックチェーンに保存される—儚い美の永遠の記録。",
    },
    breath: BreathText {
        title: "虚空の息吹",
        body: "闇に立ち昇る香のように、我々の創造物は商業を超えて意味の領域へと昇華する。各作品は意図を運び、各購入は記憶となる。",
    },
    archive: ArchiveText {
        title: "アーカイブ",
        intro: "信仰の永続的な記録。各作品はIPFSに記録され、創造と獲得の瞬間を永遠に保存する。",
        date: "日付",
        owner: "所有者",
        cid: "CID",
        ledger_title: "永遠の台帳",
        ledger_body: "このアーカイブのすべての作品は、物理と電子の領域に同時に存在する。IPFSの技術により、これらの記録—これらの祈り—はネットワークが存在する限りアクセス可能であり続ける。これは不変となった信仰である。",
    },
    prayer: PrayerText {
        title: "祈",
        subtitle: "取引としての祈り",
    },
    manifesto: ManifestoText {
        title: "マニフェスト",
        text1: "我々はファストファッションの表面性を拒絶する。永続性の重みを受け入れる。",
        text2: "すべての衣服は存在の表明である。すべての購入は信仰の行為である。すべての記録は時間そのものへの祈りである。",
        text3: "ブロックチェーン技術と伝統的な職人技を通じて、我々は単なる物体ではなく、意識の瞬間を保存する。",
        text4: "これが黒の聖典である。",
    },
    not_found: NotFoundText {
        title: "404",
        body: "このページは虚空に還った。",
        back: "ホームへ戻る",
    },
    footer: FooterText {
        copyright: "© 2024 黒アーカイブ",
        tagline: "信仰・儀式・祈り",
        archive_tagline: "技術による永続",
        about_tagline: "具現化された思想",
        contact_tagline: "沈黙による対話",
    },
};

pub static EN: Translations = Translations {
    nav: NavText {
        home: "HOME",
        archive: "ARCHIVE",
        about: "ABOUT",
        contact: "CONTACT",
    },
    hero: HeroText {
        title: "The archive of faith and black",
        subtitle: "Existence, traced through silence",
    },
    intro: IntroText {
        title: "This is not a shop. It is a scripture of black.",
        body: "Clothing is faith. Purchase is ritual. Record is prayer. We build a system for recording ideas and existence, beyond mere commerce.",
    },
    philosophy: PhilosophyText {
        title: "PHILOSOPHY",
        faith: "CLOTHING = FAITH",
        faith_body: "Each garment carries the weight of belief, woven into its very fabric.",
        ritual: "PURCHASE = RITUAL",
        ritual_body: "The act of acquisition becomes a sacred ceremony of commitment.",
        prayer: "RECORD = PRAYER",
        prayer_body: "Documentation transcends transaction, becoming an offering to eternity.",
    },
    about: AboutText {
        title: "ABOUT",
        concept: "Structure as Aesthetic",
        body: "We express faith through clothing, perform rituals through purchase, and offer prayers through records. This is not just e-commerce—it is a device for documenting thought.",
    },
    contact: ContactText {
        title: "CONTACT",
        intro: "For inquiries regarding works, commissions, or philosophical discussions, please reach out through the form below. We respond to all messages with the care they deserve.",
        name: "Name",
        email: "Email",
        message: "Message",
        submit: "Submit",
        sent_title: "Message Sent",
        sent_body: "Your inquiry has been received. We will respond within 48 hours.",
        alternative: "ALTERNATIVE CONTACT",
        response_title: "RESPONSE TIME",
        response_body: "We typically respond within 24-48 hours",
        visit_title: "Visit Us",
    },
    materiality: MaterialityText {
        title: "Materiality of Silence",
        body1: "Every thread speaks in whispers. The texture of darkness, the weight of light. Our pieces exist in the space between substance and void.",
        body2: "Traditional Japanese craftsmanship meets philosophical inquiry. Each work is numbered, documented, and preserved in the blockchain—an eternal record of transient beauty.",
    },
    breath: BreathText {
        title: "Breath of the Void",
        body: "Like incense rising into darkness, our creations ascend beyond commerce into the realm of meaning. Each piece carries intention, each purchase becomes remembrance.",
    },
    archive: ArchiveText {
        title: "ARCHIVE",
        intro: "A permanent record of faith. Each work is documented on IPFS, preserving the moment of creation and acquisition for eternity.",
        date: "Date",
        owner: "Owner",
        cid: "CID",
        ledger_title: "The Eternal Ledger",
        ledger_body: "Every piece in this archive exists simultaneously in physical and digital realms. Through IPFS technology, we ensure that these records—these prayers—remain accessible as long as the network exists. This is faith made immutable.",
    },
    prayer: PrayerText {
        title: "祈",
        subtitle: "PRAYER AS TRANSACTION",
    },
    manifesto: ManifestoText {
        title: "MANIFESTO",
        text1: "We reject the superficiality of fast fashion. We embrace the weight of permanence.",
        text2: "Every garment is a statement of being. Every purchase, an act of faith. Every record, a prayer to time itself.",
        text3: "Through blockchain technology and traditional craftsmanship, we preserve not just objects, but moments of consciousness.",
        text4: "This is the scripture of black.",
    },
    not_found: NotFoundText {
        title: "404",
        body: "This page has returned to the void.",
        back: "Return home",
    },
    footer: FooterText {
        copyright: "© 2024 KURO ARCHIVE",
        tagline: "FAITH • RITUAL • PRAYER",
        archive_tagline: "PERMANENCE THROUGH TECHNOLOGY",
        about_tagline: "THOUGHT MADE MANIFEST",
        contact_tagline: "DIALOGUE THROUGH SILENCE",
    },
};

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use serde_json::Value;

    use super::*;

    // flatten a dictionary into its dotted key paths, e.g. "nav.home"
    fn key_paths(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    key_paths(child, &path, out);
                }
            }
            _ => {
                out.insert(prefix.to_owned());
            }
        }
    }

    fn leaves(value: &Value) -> Vec<String> {
        match value {
            Value::Object(map) => map.values().flat_map(leaves).collect(),
            Value::String(s) => vec![s.clone()],
            other => vec![other.to_string()],
        }
    }

    #[test]
    fn dictionaries_share_key_set() {
        let jp = serde_json::to_value(&JP).unwrap();
        let en = serde_json::to_value(&EN).unwrap();

        let mut jp_keys = BTreeSet::new();
        let mut en_keys = BTreeSet::new();
        key_paths(&jp, "", &mut jp_keys);
        key_paths(&en, "", &mut en_keys);

        assert!(jp_keys.contains("nav.home"));
        assert!(jp_keys.contains("footer.tagline"));
        assert_eq!(jp_keys, en_keys);
    }

    #[test]
    fn no_blank_entries() {
        for lang in [Lang::Jp, Lang::En] {
            let value = serde_json::to_value(lang.translations()).unwrap();
            for text in leaves(&value) {
                assert!(!text.trim().is_empty(), "blank entry in {lang:?}");
            }
        }
    }

    #[test]
    fn toggle_round_trips() {
        for lang in [Lang::Jp, Lang::En] {
            let other = lang.toggled();
            assert_ne!(lang, other);
            assert_ne!(lang.translations(), other.translations());
            assert_eq!(other.toggled(), lang);
            assert_eq!(other.toggled().translations(), lang.translations());
        }
    }

    #[test]
    fn toggle_switches_every_nav_label() {
        let jp = Lang::Jp.translations();
        let en = Lang::Jp.toggled().translations();

        assert_eq!(en.nav.home, "HOME");
        assert_ne!(jp.nav.home, en.nav.home);
        assert_ne!(jp.nav.archive, en.nav.archive);
        assert_ne!(jp.nav.about, en.nav.about);
        assert_ne!(jp.nav.contact, en.nav.contact);
    }

    #[test]
    fn lang_uses_config_tags_only() {
        let parse = |tag: &str| serde_json::from_value::<Lang>(serde_json::Value::from(tag));

        assert_eq!(parse("jp").unwrap(), Lang::Jp);
        assert_eq!(parse("en").unwrap(), Lang::En);
        assert!(parse("fr").is_err());
        assert_eq!(Lang::default(), Lang::Jp);
    }

    #[test]
    fn toggle_label_names_the_current_locale() {
        assert_eq!(Lang::Jp.label(), "JP");
        assert_eq!(Lang::Jp.toggled().label(), "EN");
        assert_eq!(Lang::En.code(), "en");
        assert_eq!(Lang::Jp.code(), "ja");
    }
}
