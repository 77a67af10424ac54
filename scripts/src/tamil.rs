//! Tamil consonant-vowel ligature composition.
//!
//! Consonants carry an inherent short a, so the explicit U+0B85 directly
//! after a consonant is elided, and any other independent vowel following
//! a consonant shifts to its combining sign form (a fixed offset in the
//! block). The two ligature code points SRI and KSA expand to their full
//! sequences regardless of context.

use libcompose_core::Converter;

/// Independent vowel -> combining vowel sign offset.
const COMPOUND_VOWEL_OFFSET: u32 = 56;

/// The inherent vowel, elided after a consonant.
const VOWEL_A: char = '\u{0b85}';

/// SRI ligature key and its expansion.
const SRI: char = '\u{0b84}';
const SRI_EXPANSION: &str = "\u{0bb6}\u{0bcd}\u{0bb0}\u{0bc0}";

/// KSA ligature key and its expansion.
const KSA: char = '\u{0b98}';
const KSA_EXPANSION: &str = "\u{0b95}\u{0bcd}\u{0bb7}";

fn is_vowel(c: char) -> bool {
    c > '\u{0b85}' && c <= '\u{0b94}'
}

fn is_consonant(c: char) -> bool {
    ('\u{0b95}'..='\u{0bb9}').contains(&c)
}

/// Ligature composition converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tamil;

impl Tamil {
    pub fn new() -> Self {
        Self
    }
}

impl Converter for Tamil {
    fn convert(&self, input: &str, output: &mut String) {
        let mut prev_is_consonant = false;
        for c in input.chars() {
            if c == SRI {
                output.push_str(SRI_EXPANSION);
            } else if c == KSA {
                output.push_str(KSA_EXPANSION);
            } else if prev_is_consonant && is_vowel(c) {
                let shifted = char::from_u32(c as u32 + COMPOUND_VOWEL_OFFSET).unwrap_or(c);
                output.push(shifted);
            } else if !prev_is_consonant || c != VOWEL_A {
                output.push(c);
            }
            prev_is_consonant = is_consonant(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str) -> String {
        let mut output = String::new();
        Tamil.convert(input, &mut output);
        output
    }

    #[test]
    fn single_vowel_stays_independent() {
        assert_eq!(convert("\u{0b85}"), "\u{0b85}");
        assert_eq!(convert("\u{0b87}"), "\u{0b87}");
    }

    #[test]
    fn consonant_keeps_inherent_vowel() {
        // ka typed as the bare consonant
        assert_eq!(convert("\u{0b95}"), "\u{0b95}");
        // the explicit a adds nothing
        assert_eq!(convert("\u{0b95}\u{0b85}"), "\u{0b95}");
    }

    #[test]
    fn vowel_after_consonant_compounds() {
        // ki
        assert_eq!(convert("\u{0b95}\u{0b87}"), "\u{0b95}\u{0bbf}");
    }

    #[test]
    fn explicit_a_then_vowel() {
        // ka-i: the a is elided, the i compounds
        assert_eq!(convert("\u{0b95}\u{0b85}\u{0b87}"), "\u{0b95}\u{0b87}");
    }

    #[test]
    fn sri_ligature() {
        assert_eq!(convert("\u{0b84}"), "\u{0bb6}\u{0bcd}\u{0bb0}\u{0bc0}");
    }

    #[test]
    fn ksa_ligature_takes_vowel_signs() {
        assert_eq!(convert("\u{0b98}\u{0b87}"), "\u{0b95}\u{0bcd}\u{0bb7}\u{0bbf}");
    }
}
