//! libscripts
//!
//! The script converter family built on `libcompose-core`: stateful text
//! composition for Korean Hangul, Japanese Hiragana, Pinyin tone marks,
//! Vietnamese Telex, Tamil ligatures, and explicit code point entry.
//! Latin scripts use no converter at all (`None` at the call site).
//!
//! Public API:
//! - `ScriptKind` - the serializable script tag hosts store in preferences
//! - `Script` - one converter value dispatching the `Converter` capability
//! - The per-script converters (`Hangul`, `RomajiKana`, ...) for direct use

use serde::{Deserialize, Serialize};

use libcompose_core::{Converter, T9Preprocess};

pub mod hangul;
pub use hangul::Hangul;

pub mod kana;
pub use kana::RomajiKana;

pub mod pinyin;
pub use pinyin::Pinyin;

pub mod telex;
pub use telex::Telex;

pub mod tamil;
pub use tamil::Tamil;

pub mod unicode;
pub use unicode::Unicode;

/// The supported scripts, as stored in host preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptKind {
    Hangul,
    Kana,
    Pinyin,
    Telex,
    Tamil,
    Unicode,
}

impl ScriptKind {
    /// Parse a script name as written in preferences ("hangul", "kana", ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hangul" => Some(Self::Hangul),
            "kana" => Some(Self::Kana),
            "pinyin" => Some(Self::Pinyin),
            "telex" => Some(Self::Telex),
            "tamil" => Some(Self::Tamil),
            "unicode" => Some(Self::Unicode),
            _ => None,
        }
    }
}

/// A converter for one script, dispatching the shared conversion
/// capability over the script kinds.
///
/// All variants are stateless and freely shareable except `Hangul`, which
/// owns a scratch composer for T9 preprocessing and belongs to a single
/// input session.
#[derive(Debug)]
pub enum Script {
    Hangul(Hangul),
    Kana(RomajiKana),
    Pinyin(Pinyin),
    Telex(Telex),
    Tamil(Tamil),
    Unicode(Unicode),
}

impl Script {
    pub fn new(kind: ScriptKind) -> Self {
        match kind {
            ScriptKind::Hangul => Self::Hangul(Hangul::new()),
            ScriptKind::Kana => Self::Kana(RomajiKana::new()),
            ScriptKind::Pinyin => Self::Pinyin(Pinyin::new()),
            ScriptKind::Telex => Self::Telex(Telex::new()),
            ScriptKind::Tamil => Self::Tamil(Tamil::new()),
            ScriptKind::Unicode => Self::Unicode(Unicode::new()),
        }
    }

    pub fn kind(&self) -> ScriptKind {
        match self {
            Self::Hangul(_) => ScriptKind::Hangul,
            Self::Kana(_) => ScriptKind::Kana,
            Self::Pinyin(_) => ScriptKind::Pinyin,
            Self::Telex(_) => ScriptKind::Telex,
            Self::Tamil(_) => ScriptKind::Tamil,
            Self::Unicode(_) => ScriptKind::Unicode,
        }
    }

    /// The T9 vowel preprocessing capability, for the scripts that have
    /// one (only Hangul).
    pub fn t9_preprocess(&mut self) -> Option<&mut dyn T9Preprocess> {
        match self {
            Self::Hangul(hangul) => Some(hangul),
            _ => None,
        }
    }
}

impl Converter for Script {
    fn convert(&self, input: &str, output: &mut String) {
        match self {
            Self::Hangul(c) => c.convert(input, output),
            Self::Kana(c) => c.convert(input, output),
            Self::Pinyin(c) => c.convert(input, output),
            Self::Telex(c) => c.convert(input, output),
            Self::Tamil(c) => c.convert(input, output),
            Self::Unicode(c) => c.convert(input, output),
        }
    }

    fn reverse(&self, input: &str, output: &mut String) {
        match self {
            Self::Hangul(c) => c.reverse(input, output),
            Self::Kana(c) => c.reverse(input, output),
            Self::Pinyin(c) => c.reverse(input, output),
            Self::Telex(c) => c.reverse(input, output),
            Self::Tamil(c) => c.reverse(input, output),
            Self::Unicode(c) => c.reverse(input, output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trip() {
        for kind in [
            ScriptKind::Hangul,
            ScriptKind::Kana,
            ScriptKind::Pinyin,
            ScriptKind::Telex,
            ScriptKind::Tamil,
            ScriptKind::Unicode,
        ] {
            assert_eq!(Script::new(kind).kind(), kind);
        }
    }

    #[test]
    fn kind_serializes_by_name() {
        let json = serde_json::to_string(&ScriptKind::Hangul).unwrap();
        assert_eq!(json, "\"hangul\"");
        assert_eq!(ScriptKind::from_name("hangul"), Some(ScriptKind::Hangul));
        assert_eq!(ScriptKind::from_name("latin"), None);
    }

    #[test]
    fn only_hangul_has_t9_preprocess() {
        assert!(Script::new(ScriptKind::Hangul).t9_preprocess().is_some());
        assert!(Script::new(ScriptKind::Kana).t9_preprocess().is_none());
    }

    #[test]
    fn dispatch_reaches_the_converter() {
        let script = Script::new(ScriptKind::Tamil);
        let mut output = String::new();
        script.convert("\u{0b95}\u{0b87}", &mut output);
        assert_eq!(output, "\u{0b95}\u{0bbf}");
    }

    #[test]
    fn reverse_is_a_no_op_for_scripts_without_inverse() {
        let script = Script::new(ScriptKind::Kana);
        let mut output = String::new();
        script.reverse("\u{3063}\u{305f}", &mut output);
        assert_eq!(output, "");
    }
}
