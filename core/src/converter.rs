//! Script conversion capabilities.
//!
//! A converter rewrites the full typed buffer into the script's output form
//! on every keystroke; combination rules may retroactively change earlier
//! output, so conversion is never incremental. Converters are total: input
//! they cannot map passes through unchanged.

use crate::word_composer::WordComposer;

/// A stateless buffer-to-buffer script conversion.
///
/// Both operations append to `output`; the caller clears the buffer it
/// reuses between keystrokes.
pub trait Converter {
    /// Append the script's display/commit form of `input` to `output`.
    fn convert(&self, input: &str, output: &mut String);

    /// Inverse mapping, used for editing already-committed text. Most
    /// scripts have no meaningful inverse; the default appends nothing.
    fn reverse(&self, _input: &str, _output: &mut String) {}
}

/// Optional preprocessing capability for converters that accept multi-press
/// T9 vowel entry. Only the Hangul converter implements this; it rewrites
/// component-press sequences into compound vowels through an internally
/// owned scratch composer, so implementations take `&mut self` and must not
/// be shared across concurrent sessions.
pub trait T9Preprocess {
    /// Rewrite the word's T9 vowel-component sequences and return the
    /// preprocessed composer.
    fn convert_t9_vowels(&mut self, word: &WordComposer) -> &WordComposer;
}
