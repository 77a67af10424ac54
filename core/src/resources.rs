//! Per-language resource packs for the hard-keyboard translator.
//!
//! The host supplies character maps and multitap tables as opaque strings
//! at language-switch time; the core never reads configuration files or
//! the network itself. Packs can be deserialized from TOML or JSON strings
//! the host already has on hand.
//!
//! Both maps are indexed per `char`, so all strings are NFC-normalized on
//! load: a decomposed "à" would otherwise occupy two slots and shift every
//! entry after it.

use serde::{Deserialize, Serialize};

use crate::utils::normalize_nfc;

/// Resources for one language/layout combination.
///
/// `char_map` holds one character per physical key in the layout's
/// physical ordering (QWERTY or Cyrillic). `multitap_map` is a flat run of
/// `base`,`alt`,`alt`…`:` groups; the group is found by its first
/// character, and `:` terminates each cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangPack {
    /// Two-letter language code, e.g. "KO", "RU", "HE".
    pub lang_code: String,

    /// Full layout identifier, e.g. "RU_YaShERT"; empty when the language
    /// has a single layout.
    #[serde(default)]
    pub full_lang: String,

    /// Logical character per physical key, in physical-key order.
    #[serde(default)]
    pub char_map: Option<String>,

    /// Multitap cycle groups, `:`-terminated.
    #[serde(default)]
    pub multitap_map: Option<String>,
}

impl LangPack {
    pub fn new<S: Into<String>>(lang_code: S) -> Self {
        Self {
            lang_code: lang_code.into(),
            ..Default::default()
        }
    }

    pub fn with_char_map<S: Into<String>>(mut self, map: S) -> Self {
        self.char_map = Some(normalize_nfc(&map.into()));
        self
    }

    pub fn with_multitap_map<S: Into<String>>(mut self, map: S) -> Self {
        self.multitap_map = Some(normalize_nfc(&map.into()));
        self
    }

    pub fn with_full_lang<S: Into<String>>(mut self, full_lang: S) -> Self {
        self.full_lang = full_lang.into();
        self
    }

    /// Deserialize a pack from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let mut pack: LangPack = toml::from_str(content)?;
        pack.normalize();
        Ok(pack)
    }

    /// Serialize the pack to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserialize a pack from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        let mut pack: LangPack = serde_json::from_str(content)?;
        pack.normalize();
        Ok(pack)
    }

    /// The registry key this pack activates under: the full layout id when
    /// present, the bare language code otherwise.
    pub fn key(&self) -> &str {
        if self.full_lang.is_empty() {
            &self.lang_code
        } else {
            &self.full_lang
        }
    }

    fn normalize(&mut self) {
        if let Some(map) = &self.char_map {
            self.char_map = Some(normalize_nfc(map));
        }
        if let Some(map) = &self.multitap_map {
            self.multitap_map = Some(normalize_nfc(map));
        }
    }
}
