//! Pinyin tone-mark placement.
//!
//! The typed buffer carries plain vowels followed by one of the spacing
//! tone marks ˉ ˊ ˇ ˋ; conversion decides which vowel of each syllable
//! bears the tone and substitutes the accented form from the vowel table.
//! Bearing rules: a/e always take the tone; otherwise the first vowel of a
//! cluster takes it when it ends the word, precedes a non-vowel, or is the
//! o of "ou"; failing that, the second vowel takes it. Tone marks are
//! consumed; the last one wins.

use ahash::AHashMap;
use once_cell::sync::Lazy;

use libcompose_core::Converter;

/// Base vowel plus its four tone forms, lower case then upper case rows.
const VOWELS: [[char; 5]; 12] = [
    ['a', '\u{0101}', '\u{00e1}', '\u{01ce}', '\u{00e0}'],
    ['e', '\u{0113}', '\u{00e9}', '\u{011b}', '\u{00e8}'],
    ['i', '\u{012b}', '\u{00ed}', '\u{01d0}', '\u{00ec}'],
    ['o', '\u{014d}', '\u{00f3}', '\u{01d2}', '\u{00f2}'],
    ['u', '\u{016b}', '\u{00fa}', '\u{01d4}', '\u{00f9}'],
    ['\u{00fc}', '\u{01d6}', '\u{01d8}', '\u{01da}', '\u{01dc}'],
    ['A', '\u{0100}', '\u{00c1}', '\u{01cd}', '\u{00c0}'],
    ['E', '\u{0112}', '\u{00c9}', '\u{011a}', '\u{00c8}'],
    ['I', '\u{012a}', '\u{00cd}', '\u{01cf}', '\u{00cc}'],
    ['O', '\u{014c}', '\u{00d3}', '\u{01d1}', '\u{00d2}'],
    ['U', '\u{016a}', '\u{00da}', '\u{01d3}', '\u{00d9}'],
    ['\u{00dc}', '\u{01d5}', '\u{01d7}', '\u{01d9}', '\u{01db}'],
];

/// Any form of a vowel (base or toned) -> its row in [`VOWELS`].
static BASE_VOWELS: Lazy<AHashMap<char, usize>> = Lazy::new(|| {
    let mut map = AHashMap::new();
    for (row, forms) in VOWELS.iter().enumerate() {
        for &form in forms {
            map.insert(form, row);
        }
    }
    map
});

fn is_vowel(c: char) -> bool {
    BASE_VOWELS.contains_key(&c)
}

/// Tone number for the spacing modifier letters, 0 for anything else.
fn tone_of(c: char) -> usize {
    match c {
        '\u{02c9}' => 1, // ˉ
        '\u{02ca}' => 2, // ˊ
        '\u{02c7}' => 3, // ˇ
        '\u{02cb}' => 4, // ˋ
        _ => 0,
    }
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Tone-mark placement converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pinyin;

impl Pinyin {
    pub fn new() -> Self {
        Self
    }
}

impl Converter for Pinyin {
    fn convert(&self, input: &str, output: &mut String) {
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut prev_vowel = false;
        let mut prev_has_tone = false;
        for i in 0..len {
            let mut c = chars[i];
            if let Some(&base) = BASE_VOWELS.get(&c) {
                let mut has_tone = false;
                let mut tone = 0;
                let lower_c = lower(c);
                if lower_c == 'a' || lower_c == 'e' {
                    // a and e take the tone in any cluster
                    has_tone = true;
                } else if !prev_vowel {
                    if i + 1 == len {
                        // Last letter of the word
                        has_tone = true;
                    } else {
                        let next_lower = lower(chars[i + 1]);
                        // Next letter is not a vowel, or o takes the tone
                        // in "ou"
                        if !is_vowel(next_lower) || (lower_c == 'o' && next_lower == 'u') {
                            has_tone = true;
                        }
                    }
                } else {
                    // The second vowel takes the tone when the first did not
                    has_tone = !prev_has_tone;
                }

                if has_tone {
                    // Scan ahead for a tone mark, stopping at the next
                    // syllable (a vowel after a consonant); last mark wins
                    let mut consonant_found = false;
                    for &next in &chars[i + 1..] {
                        if is_vowel(next) {
                            if consonant_found {
                                break;
                            }
                        } else {
                            let cur_tone = tone_of(next);
                            if cur_tone != 0 {
                                tone = cur_tone;
                            } else {
                                consonant_found = true;
                            }
                        }
                    }
                }

                prev_vowel = true;
                prev_has_tone = has_tone;

                if tone != 0 {
                    c = VOWELS[base][tone];
                }
                output.push(c);
            } else if tone_of(c) == 0 {
                // Consonants pass through; tone marks are consumed
                output.push(c);
                prev_vowel = false;
                prev_has_tone = false;
            }
        }
    }
}
