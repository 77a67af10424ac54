//! Vietnamese Telex conversion.
//!
//! Two passes over the typed buffer. Pass one merges the fixed digraph
//! pairs (aw, aa, dd, ee, oo, ow, uw and their case variants) and consumes
//! trailing tone letters (z f r x s j, case-insensitive, last one wins,
//! only once a vowel has appeared), while tracking the most recent and
//! previous vowel positions and any vowel already carrying a diacritic.
//! Pass two places the resolved tone: on the diacritic vowel when present,
//! else on the previous vowel when the tone vowel ends the word, else on
//! the recorded position.

use ahash::AHashMap;
use once_cell::sync::Lazy;

use libcompose_core::Converter;

const PAIR_KEYS: [&str; 21] = [
    "aw", "aa", "dd", "ee", "oo", "ow", "uw", "Aw", "Aa", "Dd", "Ee", "Oo", "Ow", "Uw", "AW",
    "AA", "DD", "EE", "OO", "OW", "UW",
];
const PAIR_VALUES: [char; 21] = [
    '\u{0103}', '\u{00e2}', '\u{0111}', '\u{00ea}', '\u{00f4}', '\u{01a1}', '\u{01b0}',
    '\u{0102}', '\u{00c2}', '\u{0110}', '\u{00ca}', '\u{00d4}', '\u{01a0}', '\u{01af}',
    '\u{0102}', '\u{00c2}', '\u{0110}', '\u{00ca}', '\u{00d4}', '\u{01a0}', '\u{01af}',
];

/// Base vowel plus the five tone forms (grave, hook, tilde, acute, dot).
const VOWELS: [[char; 6]; 24] = [
    ['A', '\u{00c0}', '\u{1ea2}', '\u{00c3}', '\u{00c1}', '\u{1ea0}'], // A
    ['\u{0102}', '\u{1eb0}', '\u{1eb2}', '\u{1eb4}', '\u{1eae}', '\u{1eb6}'],
    ['\u{00c2}', '\u{1ea6}', '\u{1ea8}', '\u{1eaa}', '\u{1ea4}', '\u{1eac}'],
    ['E', '\u{00c8}', '\u{1eba}', '\u{1ebc}', '\u{00c9}', '\u{1eb8}'], // E
    ['\u{00ca}', '\u{1ec0}', '\u{1ec2}', '\u{1ec4}', '\u{1ebe}', '\u{1ec6}'],
    ['I', '\u{00cc}', '\u{1ec8}', '\u{0128}', '\u{00cd}', '\u{1eca}'], // I
    ['O', '\u{00d2}', '\u{1ece}', '\u{00d5}', '\u{00d3}', '\u{1ecc}'], // O
    ['\u{00d4}', '\u{1ed2}', '\u{1ed4}', '\u{1ed6}', '\u{1ed0}', '\u{1ed8}'],
    ['\u{01a0}', '\u{1edc}', '\u{1ede}', '\u{1ee0}', '\u{1eda}', '\u{1ee2}'],
    ['U', '\u{00d9}', '\u{1ee6}', '\u{0168}', '\u{00da}', '\u{1ee4}'], // U
    ['\u{01af}', '\u{1eea}', '\u{1eec}', '\u{1eee}', '\u{1ee8}', '\u{1ef0}'],
    ['Y', '\u{1ef2}', '\u{1ef6}', '\u{1ef8}', '\u{00dd}', '\u{1ef4}'], // Y
    ['a', '\u{00e0}', '\u{1ea3}', '\u{00e3}', '\u{00e1}', '\u{1ea1}'], // a
    ['\u{0103}', '\u{1eb1}', '\u{1eb3}', '\u{1eb5}', '\u{1eaf}', '\u{1eb7}'],
    ['\u{00e2}', '\u{1ea7}', '\u{1ea9}', '\u{1eab}', '\u{1ea5}', '\u{1ead}'],
    ['e', '\u{00e8}', '\u{1ebb}', '\u{1ebd}', '\u{00e9}', '\u{1eb9}'], // e
    ['\u{00ea}', '\u{1ec1}', '\u{1ec3}', '\u{1ec5}', '\u{1ebf}', '\u{1ec7}'],
    ['i', '\u{00ec}', '\u{1ec9}', '\u{0129}', '\u{00ed}', '\u{1ecb}'], // i
    ['o', '\u{00f2}', '\u{1ecf}', '\u{00f5}', '\u{00f3}', '\u{1ecd}'], // o
    ['\u{00f4}', '\u{1ed3}', '\u{1ed5}', '\u{1ed7}', '\u{1ed1}', '\u{1ed9}'],
    ['\u{01a1}', '\u{1edd}', '\u{1edf}', '\u{1ee1}', '\u{1edb}', '\u{1ee3}'],
    ['u', '\u{00f9}', '\u{1ee7}', '\u{0169}', '\u{00fa}', '\u{1ee5}'], // u
    ['\u{01b0}', '\u{1eeb}', '\u{1eed}', '\u{1eef}', '\u{1ee9}', '\u{1ef1}'],
    ['y', '\u{1ef3}', '\u{1ef7}', '\u{1ef9}', '\u{00fd}', '\u{1ef5}'], // y
];

static PAIR_MAP: Lazy<AHashMap<(char, char), char>> = Lazy::new(|| {
    PAIR_KEYS
        .iter()
        .zip(PAIR_VALUES)
        .map(|(key, value)| {
            let mut chars = key.chars();
            let first = chars.next().unwrap_or('\0');
            let second = chars.next().unwrap_or('\0');
            ((first, second), value)
        })
        .collect()
});

/// Any form of a vowel -> its row in [`VOWELS`].
static BASE_VOWELS: Lazy<AHashMap<char, usize>> = Lazy::new(|| {
    let mut map = AHashMap::new();
    for (row, forms) in VOWELS.iter().enumerate() {
        for &form in forms {
            map.insert(form, row);
        }
    }
    map
});

/// Tone index for the Telex tone letters: z(none) f(grave) r(hook)
/// x(tilde) s(acute) j(dot).
fn tone_of(c: char) -> Option<usize> {
    match c.to_ascii_lowercase() {
        'z' => Some(0),
        'f' => Some(1),
        'r' => Some(2),
        'x' => Some(3),
        's' => Some(4),
        'j' => Some(5),
        _ => None,
    }
}

/// Telex converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Telex;

impl Telex {
    pub fn new() -> Self {
        Self
    }
}

impl Converter for Telex {
    fn convert(&self, input: &str, output: &mut String) {
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        if len == 0 {
            return;
        }
        let mut cur = chars[0];
        let mut word: Vec<char> = Vec::with_capacity(len);
        let mut tone = 0;
        let mut tone_index: Option<usize> = None;
        let mut prev_vowel_index: Option<usize> = None;
        let mut diacritic_vowel: Option<usize> = None;

        // First pass: merge pairs, consume tone letters
        let mut i = 0;
        while i < len {
            let mut next = '\0';
            if i + 1 < len {
                next = chars[i + 1];
                if let Some(&merged) = PAIR_MAP.get(&(cur, next)) {
                    cur = merged;
                    i += 1;
                    if i + 1 < len {
                        next = chars[i + 1];
                    }
                }
            }
            let mut cur_tone = None;
            if let Some(&base) = BASE_VOWELS.get(&cur) {
                prev_vowel_index = tone_index;
                tone_index = Some(word.len());
                // A vowel form above the plain letters already carries a
                // diacritic and attracts the tone
                if VOWELS[base][0] > 'y' {
                    diacritic_vowel = Some(word.len());
                }
            } else if tone_index.is_some() {
                cur_tone = tone_of(cur);
            }
            match cur_tone {
                Some(t) => tone = t,
                None => word.push(cur),
            }
            cur = next;
            i += 1;
        }

        // Resolve the tone position
        let last = word.len().checked_sub(1);
        let tone_index = if diacritic_vowel.is_some() {
            diacritic_vowel
        } else if tone_index == last && tone_index.is_some() && prev_vowel_index.is_some() {
            // A word-final vowel yields the tone to the previous vowel
            prev_vowel_index
        } else {
            tone_index
        };

        // Second pass: output with the tone applied
        for (index, &ch) in word.iter().enumerate() {
            if Some(index) == tone_index {
                if let Some(&base) = BASE_VOWELS.get(&ch) {
                    output.push(VOWELS[base][tone]);
                    continue;
                }
            }
            output.push(ch);
        }
    }
}
