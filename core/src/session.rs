//! Thin input-session sequencing over the word composer.
//!
//! This is the surface-free part of the input orchestrator: separator
//! classification, the predicting flag, and the keystroke-to-composing-text
//! sequencing. Everything that touches the host text field (cursor
//! tracking, batch edits, suggestion bars) stays with the host. The session
//! owns its composer exclusively; the host serializes key events.

use crate::converter::Converter;
use crate::word_composer::WordComposer;

/// Characters ending a word. Includes CJK and Arabic punctuation plus the
/// symbol keys the stock layouts emit.
pub const WORD_SEPARATORS: &str = ". \u{a0},;:!?\n()[]*&@{}/<>_+=|\"\u{3002}\u{3001}\u{3000}\u{060c}\u{061f}\u{300e}\u{300f}\u{ff5b}\u{ff5d}\u{ff08}\u{ff09}\u{300c}\u{300d}\u{ff1a}\u{ff1b}\u{ff3b}\u{ff3d}\u{ff01}\u{ff1f}\u{ff5e}\u{ff0a}\u{203b}\u{266a}\u{266c}\u{2026}\u{ff3f}\u{30fb}\u{2022}\u{25e6}\u{3010}\u{3011}\u{2606}\u{2605}\u{2665}";

/// Characters ending a sentence (auto-capitalization boundary).
pub const SENTENCE_SEPARATORS: &str =
    ".,;:!?\u{060c}\u{061f}\u{3002}\u{3001}\u{ff1a}\u{ff01}\u{ff1f}\u{2026}";

/// Per-field input session: the composing word plus prediction state.
#[derive(Debug, Default)]
pub struct InputSession {
    word: WordComposer,
    predicting: bool,
    /// Whether the apostrophe ends a word (language dependent).
    apostrophe_separator: bool,
}

impl InputSession {
    pub fn new(apostrophe_separator: bool) -> Self {
        Self {
            word: WordComposer::new(),
            predicting: false,
            apostrophe_separator,
        }
    }

    pub fn word(&self) -> &WordComposer {
        &self.word
    }

    pub fn word_mut(&mut self) -> &mut WordComposer {
        &mut self.word
    }

    pub fn predicting(&self) -> bool {
        self.predicting
    }

    pub fn set_predicting(&mut self, predicting: bool) {
        self.predicting = predicting;
    }

    pub fn is_word_separator(&self, code: i32) -> bool {
        if code == '\'' as i32 {
            self.apostrophe_separator
        } else {
            char::from_u32(code as u32).is_some_and(|c| WORD_SEPARATORS.contains(c))
        }
    }

    pub fn is_sentence_separator(&self, code: i32) -> bool {
        char::from_u32(code as u32).is_some_and(|c| SENTENCE_SEPARATORS.contains(c))
    }

    /// Whether the committed word should keep the user's capitalization.
    pub fn prefer_capitalization(&self) -> bool {
        self.word.is_capitalized()
    }

    /// Record a keystroke and recompute the composing text through the
    /// active converter. Returns the text to display as the composition.
    pub fn add_character(
        &mut self,
        primary: i32,
        candidates: &[i32],
        replace: bool,
        shifted: bool,
        converter: Option<&dyn Converter>,
    ) -> &str {
        self.predicting = true;
        self.word.add_character(primary, candidates, replace, shifted);
        self.word.convert_word(converter);
        self.word.converted_word()
    }

    /// Delete the last composing keystroke. Returns the updated composing
    /// text, or `None` when nothing was composing (the caller should
    /// delete from the editor surface instead).
    pub fn delete_last(&mut self, converter: Option<&dyn Converter>) -> Option<&str> {
        if self.word.size() == 0 {
            return None;
        }
        // size checked above, so this cannot fail
        let _ = self.word.delete_last();
        self.word.convert_word(converter);
        if self.word.size() == 0 {
            self.predicting = false;
        }
        Some(self.word.converted_word())
    }

    /// Replace the composing word with an externally supplied one.
    pub fn force_typed_word(&mut self, word: &str, converter: Option<&dyn Converter>) {
        self.word.force_typed_word(word);
        self.word.convert_word(converter);
        self.predicting = self.word.size() > 0;
    }

    /// Commit the current word: returns the preferred text and clears the
    /// session for the next word.
    pub fn commit_word(&mut self) -> String {
        let committed = self.word.preferred_word().to_string();
        self.word.reset();
        self.predicting = false;
        committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Converter for Upper {
        fn convert(&self, input: &str, output: &mut String) {
            output.extend(input.chars().flat_map(|c| c.to_uppercase()));
        }
    }

    fn add(session: &mut InputSession, ch: char, converter: Option<&dyn Converter>) -> String {
        session
            .add_character(ch as i32, &[ch as i32], false, false, converter)
            .to_string()
    }

    #[test]
    fn separators() {
        let session = InputSession::new(false);
        assert!(session.is_word_separator(' ' as i32));
        assert!(session.is_word_separator(0x3002)); // 。
        assert!(!session.is_word_separator('a' as i32));
        assert!(!session.is_word_separator('\'' as i32));
        assert!(InputSession::new(true).is_word_separator('\'' as i32));
        assert!(session.is_sentence_separator('.' as i32));
        assert!(!session.is_sentence_separator(' ' as i32));
    }

    #[test]
    fn composing_goes_through_converter() {
        let mut session = InputSession::new(false);
        assert_eq!(add(&mut session, 'a', Some(&Upper)), "A");
        assert_eq!(add(&mut session, 'b', Some(&Upper)), "AB");
        assert!(session.predicting());
        assert_eq!(session.word().typed_word(), "ab");
    }

    #[test]
    fn delete_last_ends_prediction_at_empty() {
        let mut session = InputSession::new(false);
        add(&mut session, 'a', None);
        assert_eq!(session.delete_last(None), Some(""));
        assert!(!session.predicting());
        assert_eq!(session.delete_last(None), None);
    }

    #[test]
    fn commit_returns_preferred_and_resets() {
        let mut session = InputSession::new(false);
        add(&mut session, 'h', None);
        add(&mut session, 'i', None);
        session.word_mut().set_preferred_word(Some("his".into()));
        assert_eq!(session.commit_word(), "his");
        assert_eq!(session.word().size(), 0);
        assert!(!session.predicting());
    }
}
