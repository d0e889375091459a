use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{i18n::Lang, reveal::RevealConfig, theme::Theme, toast::ToastConfig};

// site configuration
//
// the document is compiled into the wasm bundle, so there is no runtime file
// to go missing; a document that fails to parse is a build defect and we
// refuse to start with it
const SITE_TOML: &str = include_str!("../site.toml");

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SiteConfig {
    pub name: String,

    // the locale every fresh page load starts in
    pub default_lang: Lang,

    // used until the visitor picks one (which is then remembered)
    pub default_theme: Theme,

    pub contact_email: String,

    // studio address lines on the contact page
    pub address: Vec<String>,

    #[serde(default)]
    pub reveal: RevealConfig,

    #[serde(default)]
    pub toast: ToastConfig,
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    site: SiteConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;

    let reveal = &data.site.reveal;
    if !(0.0..=1.0).contains(&reveal.threshold) {
        return Err(anyhow::Error::msg(format!(
            "reveal threshold must be within [0, 1], got {}",
            reveal.threshold
        )));
    }

    Ok(data.site)
}

static SITE: LazyLock<SiteConfig> = LazyLock::new(|| match parse_config(SITE_TOML) {
    Ok(config) => {
        debug!("successfully parsed site config");
        config
    }
    Err(err) => panic!("failed to parse site config: {err}"),
});

pub fn site() -> &'static SiteConfig {
    &SITE
}
