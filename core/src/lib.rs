//! libcompose-core
//!
//! Script-agnostic composition machinery shared by the script converter
//! crates: the word composer tracking per-keystroke ambiguity, the kana
//! voicing table, and the hard-keyboard/multitap translator. All state here
//! is single-session and single-threaded; the host guarantees serialized
//! delivery of key events, so nothing locks.
//!
//! Public API:
//! - `WordComposer` - the currently composing word with candidate codes
//! - `KeyStroke` - one keystroke with its proximity alternatives
//! - `Converter` / `T9Preprocess` - script conversion capabilities
//! - `HardKeyboardTranslator` - physical key to logical character mapping
//! - `LangPack` - host-supplied per-language resources
//! - `InputSession` - thin sequencing layer over the composer

pub mod keystroke;
pub use keystroke::KeyStroke;

pub mod word_composer;
pub use word_composer::WordComposer;

pub mod converter;
pub use converter::{Converter, T9Preprocess};

pub mod dakuten;
pub use dakuten::convert_dakuten;

pub mod error;
pub use error::ComposeError;

pub mod clock;
pub use clock::{MonotonicClock, SystemClock};

pub mod keycodes;

pub mod resources;
pub use resources::LangPack;

pub mod translator;
pub use translator::{AsciiKeyCharacterMap, HardKeyboardTranslator, KeyCharacterMap};

pub mod session;
pub use session::{InputSession, SENTENCE_SEPARATORS, WORD_SEPARATORS};

/// Utility helpers.
pub mod utils {
    /// Normalize a resource string to NFC so per-`char` indexing sees one
    /// slot per displayed character.
    pub fn normalize_nfc(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect()
    }
}
