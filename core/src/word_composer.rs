//! The currently composing word.
//!
//! Stores one [`KeyStroke`] per typed character together with the derived
//! typed/converted text buffers and capitalization counters. The composer
//! is owned exclusively by one input session; the host serializes key
//! events, so no locking happens here.

use tracing::error;

use crate::converter::Converter;
use crate::dakuten::convert_dakuten;
use crate::error::ComposeError;
use crate::keystroke::KeyStroke;

/// A place to store the currently composing word with information such as
/// adjacent key codes as well.
#[derive(Debug, Clone, Default)]
pub struct WordComposer {
    /// One entry per keystroke, including surrounding-key candidates.
    strokes: Vec<KeyStroke>,
    /// The word as typed, before any script conversion.
    typed_word: String,
    /// The word after script conversion (romaji -> kana, jamo -> hangul).
    converted_word: String,
    was_converted: bool,
    /// The word chosen from the candidate list, until it is committed.
    preferred_word: Option<String>,
    caps_count: usize,
    /// Whether the user chose to capitalize the word.
    is_capitalized: bool,
}

impl WordComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear out the keys registered so far.
    pub fn reset(&mut self) {
        self.strokes.clear();
        self.typed_word.clear();
        self.converted_word.clear();
        self.was_converted = false;
        self.preferred_word = None;
        self.caps_count = 0;
        self.is_capitalized = false;
    }

    /// Number of keystrokes in the composing word.
    pub fn size(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// The candidate codes recorded for the keystroke at `index`.
    pub fn codes_at(&self, index: usize) -> Option<&[i32]> {
        self.strokes.get(index).map(|s| s.codes())
    }

    /// Add a new keystroke, with `candidates[0]` holding the pressed key's
    /// code and the rest holding codes for adjacent keys, sorted by
    /// reducing probability.
    pub fn add(&mut self, primary: i32, candidates: &[i32]) {
        let ch = char::from_u32(primary as u32).unwrap_or(char::REPLACEMENT_CHARACTER);
        self.typed_word.push(ch);
        self.strokes.push(KeyStroke::new(primary, candidates));
        if ch.is_uppercase() {
            self.caps_count += 1;
        }
    }

    /// Add a keystroke, optionally replacing the previous one (multitap
    /// cycling) and marking the word capitalized when the first character
    /// arrives shifted. Returns the primary code actually added, which is
    /// upper-cased when it replaces an upper-case character.
    pub fn add_character(
        &mut self,
        primary: i32,
        candidates: &[i32],
        replace: bool,
        shifted: bool,
    ) -> i32 {
        let mut primary = primary;
        if replace {
            primary = self.replace_last_character(primary);
        }
        if shifted && self.size() == 0 {
            self.set_capitalized(true);
        }
        self.add(primary, candidates);
        primary
    }

    fn replace_last_character(&mut self, primary: i32) -> i32 {
        if self.size() > 0 {
            // Preserve case across the multitap cycle
            let prev = self.typed_word.chars().last();
            let primary = match prev {
                Some(p) if p.is_uppercase() => char::from_u32(primary as u32)
                    .and_then(|c| c.to_uppercase().next())
                    .map(|c| c as i32)
                    .unwrap_or(primary),
                _ => primary,
            };
            let _ = self.delete_last();
            primary
        } else {
            error!("no character to replace");
            primary
        }
    }

    /// Delete the last keystroke as a result of hitting backspace.
    ///
    /// Fails when the composer is empty; callers must check `size()` first.
    pub fn delete_last(&mut self) -> Result<(), ComposeError> {
        if self.strokes.is_empty() {
            return Err(ComposeError::EmptyComposer);
        }
        self.strokes.pop();
        if let Some(last) = self.typed_word.pop() {
            if last.is_uppercase() {
                self.caps_count -= 1;
            }
        }
        Ok(())
    }

    /// The word as it was typed, without any conversion applied.
    pub fn typed_word(&self) -> &str {
        &self.typed_word
    }

    /// Recompute the converted word by running `converter` over the full
    /// typed buffer. With no active converter the converted word aliases
    /// the typed word.
    pub fn convert_word(&mut self, converter: Option<&dyn Converter>) {
        match converter {
            Some(converter) => {
                self.converted_word.clear();
                converter.convert(&self.typed_word, &mut self.converted_word);
                self.was_converted = true;
            }
            None => {
                self.was_converted = false;
            }
        }
    }

    pub fn converted_word(&self) -> &str {
        if self.was_converted {
            &self.converted_word
        } else {
            &self.typed_word
        }
    }

    /// Store the user's selected word, before it is actually committed.
    pub fn set_preferred_word(&mut self, preferred: Option<String>) {
        self.preferred_word = preferred;
    }

    /// The word chosen by the user, or the converted word if no other word
    /// was chosen.
    pub fn preferred_word(&self) -> &str {
        match &self.preferred_word {
            Some(preferred) => preferred,
            None => self.converted_word(),
        }
    }

    pub fn set_capitalized(&mut self, capitalized: bool) {
        self.is_capitalized = capitalized;
    }

    /// Whether the user typed a capital letter as the first letter in the
    /// word.
    pub fn is_capitalized(&self) -> bool {
        self.is_capitalized
    }

    /// Whether all of the typed characters are upper case.
    pub fn is_all_upper_case(&self) -> bool {
        self.caps_count > 0 && self.caps_count == self.size()
    }

    /// Whether more than one typed character is upper case.
    pub fn is_mostly_caps(&self) -> bool {
        self.caps_count > 1
    }

    /// Replace the whole composer state with `word`, one keystroke per
    /// character with the character itself as the only candidate. Used when
    /// accepting an externally supplied word, e.g. a multitap commit.
    pub fn force_typed_word(&mut self, word: &str) {
        self.strokes.clear();
        self.typed_word.clear();
        self.caps_count = 0;
        for ch in word.chars() {
            let code = ch as i32;
            self.add(code, &[code]);
        }
    }

    /// Handle the voice-mark key in Japanese T9: pop the last typed
    /// character and push its dakuten counterpart (identity if unmapped).
    pub fn handle_diacritic(&mut self) {
        if let Some(last) = self.typed_word.pop() {
            self.typed_word.push(convert_dakuten(last));
        }
    }
}
