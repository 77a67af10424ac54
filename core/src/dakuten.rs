//! Kana voicing (dakuten/handakuten) table.
//!
//! Maps a kana character to its voiced or semi-voiced counterpart; most
//! entries are each other's inverse, so pressing the voice-mark key twice
//! restores the original character. Unmapped input returns unchanged.

use phf::phf_map;

static DAKUTEN_TABLE: phf::Map<char, char> = phf_map! {
    '\u{3042}' => '\u{3041}',
    '\u{3044}' => '\u{3043}',
    '\u{3046}' => '\u{3045}',
    '\u{3048}' => '\u{3047}',
    '\u{304a}' => '\u{3049}',
    '\u{3041}' => '\u{3042}',
    '\u{3043}' => '\u{3044}',
    '\u{3045}' => '\u{30f4}',
    '\u{3047}' => '\u{3048}',
    '\u{3049}' => '\u{304a}',
    '\u{304b}' => '\u{304c}',
    '\u{304d}' => '\u{304e}',
    '\u{304f}' => '\u{3050}',
    '\u{3051}' => '\u{3052}',
    '\u{3053}' => '\u{3054}',
    '\u{304c}' => '\u{304b}',
    '\u{304e}' => '\u{304d}',
    '\u{3050}' => '\u{304f}',
    '\u{3052}' => '\u{3051}',
    '\u{3054}' => '\u{3053}',
    '\u{3055}' => '\u{3056}',
    '\u{3057}' => '\u{3058}',
    '\u{3059}' => '\u{305a}',
    '\u{305b}' => '\u{305c}',
    '\u{305d}' => '\u{305e}',
    '\u{3056}' => '\u{3055}',
    '\u{3058}' => '\u{3057}',
    '\u{305a}' => '\u{3059}',
    '\u{305c}' => '\u{305b}',
    '\u{305e}' => '\u{305d}',
    '\u{305f}' => '\u{3060}',
    '\u{3061}' => '\u{3062}',
    '\u{3064}' => '\u{3063}',
    '\u{3066}' => '\u{3067}',
    '\u{3068}' => '\u{3069}',
    '\u{3060}' => '\u{305f}',
    '\u{3062}' => '\u{3061}',
    '\u{3063}' => '\u{3065}',
    '\u{3067}' => '\u{3066}',
    '\u{3069}' => '\u{3068}',
    '\u{3065}' => '\u{3064}',
    '\u{30f4}' => '\u{3046}',
    '\u{306f}' => '\u{3070}',
    '\u{3072}' => '\u{3073}',
    '\u{3075}' => '\u{3076}',
    '\u{3078}' => '\u{3079}',
    '\u{307b}' => '\u{307c}',
    '\u{3070}' => '\u{3071}',
    '\u{3073}' => '\u{3074}',
    '\u{3076}' => '\u{3077}',
    '\u{3079}' => '\u{307a}',
    '\u{307c}' => '\u{307d}',
    '\u{3071}' => '\u{306f}',
    '\u{3074}' => '\u{3072}',
    '\u{3077}' => '\u{3075}',
    '\u{307a}' => '\u{3078}',
    '\u{307d}' => '\u{307b}',
    '\u{3084}' => '\u{3083}',
    '\u{3086}' => '\u{3085}',
    '\u{3088}' => '\u{3087}',
    '\u{3083}' => '\u{3084}',
    '\u{3085}' => '\u{3086}',
    '\u{3087}' => '\u{3088}',
    '\u{308f}' => '\u{308e}',
    '\u{308e}' => '\u{308f}',
    '\u{309b}' => '\u{309c}',
    '\u{309c}' => '\u{309b}',};

/// Convert a kana character to its dakuten/handakuten counterpart, or
/// return it unchanged when no mapping exists.
pub fn convert_dakuten(c: char) -> char {
    DAKUTEN_TABLE.get(&c).copied().unwrap_or(c)
}
