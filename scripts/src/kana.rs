//! Romaji to hiragana conversion.
//!
//! Greedy longest-match (up to three letters) against a fixed romaji
//! table, with the doubled-consonant rule applied against the previous
//! output character: a repeated consonant becomes the small tsu geminate
//! marker and a bare trailing `n` becomes ん once the next letter arrives.
//! Input the table cannot match passes through unchanged.

use phf::phf_map;

use libcompose_core::Converter;

/// Longest romaji key in the table.
const MAX_ROMAJI_LEN: usize = 3;

static ROMAJI_TABLE: phf::Map<&'static str, &'static str> = phf_map! {
    "la" => "\u{3041}",
    "xa" => "\u{3041}",
    "a" => "\u{3042}",
    "li" => "\u{3043}",
    "lyi" => "\u{3043}",
    "xi" => "\u{3043}",
    "xyi" => "\u{3043}",
    "i" => "\u{3044}",
    "yi" => "\u{3044}",
    "ye" => "\u{3044}\u{3047}",
    "lu" => "\u{3045}",
    "xu" => "\u{3045}",
    "u" => "\u{3046}",
    "whu" => "\u{3046}",
    "wu" => "\u{3046}",
    "wha" => "\u{3046}\u{3041}",
    "whi" => "\u{3046}\u{3043}",
    "wi" => "\u{3046}\u{3043}",
    "we" => "\u{3046}\u{3047}",
    "whe" => "\u{3046}\u{3047}",
    "who" => "\u{3046}\u{3049}",
    "le" => "\u{3047}",
    "lye" => "\u{3047}",
    "xe" => "\u{3047}",
    "xye" => "\u{3047}",
    "e" => "\u{3048}",
    "lo" => "\u{3049}",
    "xo" => "\u{3049}",
    "o" => "\u{304a}",
    "ca" => "\u{304b}",
    "ka" => "\u{304b}",
    "ga" => "\u{304c}",
    "ki" => "\u{304d}",
    "kyi" => "\u{304d}\u{3043}",
    "kye" => "\u{304d}\u{3047}",
    "kya" => "\u{304d}\u{3083}",
    "kyu" => "\u{304d}\u{3085}",
    "kyo" => "\u{304d}\u{3087}",
    "gi" => "\u{304e}",
    "gyi" => "\u{304e}\u{3043}",
    "gye" => "\u{304e}\u{3047}",
    "gya" => "\u{304e}\u{3083}",
    "gyu" => "\u{304e}\u{3085}",
    "gyo" => "\u{304e}\u{3087}",
    "cu" => "\u{304f}",
    "ku" => "\u{304f}",
    "qu" => "\u{304f}",
    "kwa" => "\u{304f}\u{3041}",
    "qa" => "\u{304f}\u{3041}",
    "qwa" => "\u{304f}\u{3041}",
    "qi" => "\u{304f}\u{3043}",
    "qwi" => "\u{304f}\u{3043}",
    "qyi" => "\u{304f}\u{3043}",
    "qwu" => "\u{304f}\u{3045}",
    "qe" => "\u{304f}\u{3047}",
    "qwe" => "\u{304f}\u{3047}",
    "qye" => "\u{304f}\u{3047}",
    "qo" => "\u{304f}\u{3049}",
    "qwo" => "\u{304f}\u{3049}",
    "qya" => "\u{304f}\u{3083}",
    "qyu" => "\u{304f}\u{3085}",
    "qyo" => "\u{304f}\u{3087}",
    "gu" => "\u{3050}",
    "gwa" => "\u{3050}\u{3041}",
    "gwi" => "\u{3050}\u{3043}",
    "gwu" => "\u{3050}\u{3045}",
    "gwe" => "\u{3050}\u{3047}",
    "gwo" => "\u{3050}\u{3049}",
    "ke" => "\u{3051}",
    "ge" => "\u{3052}",
    "co" => "\u{3053}",
    "ko" => "\u{3053}",
    "go" => "\u{3054}",
    "sa" => "\u{3055}",
    "za" => "\u{3056}",
    "ci" => "\u{3057}",
    "shi" => "\u{3057}",
    "si" => "\u{3057}",
    "syi" => "\u{3057}\u{3043}",
    "she" => "\u{3057}\u{3047}",
    "sye" => "\u{3057}\u{3047}",
    "sha" => "\u{3057}\u{3083}",
    "sya" => "\u{3057}\u{3083}",
    "shu" => "\u{3057}\u{3085}",
    "syu" => "\u{3057}\u{3085}",
    "sho" => "\u{3057}\u{3087}",
    "syo" => "\u{3057}\u{3087}",
    "ji" => "\u{3058}",
    "zi" => "\u{3058}",
    "jyi" => "\u{3058}\u{3043}",
    "zyi" => "\u{3058}\u{3043}",
    "je" => "\u{3058}\u{3047}",
    "jye" => "\u{3058}\u{3047}",
    "zye" => "\u{3058}\u{3047}",
    "ja" => "\u{3058}\u{3083}",
    "jya" => "\u{3058}\u{3083}",
    "zya" => "\u{3058}\u{3083}",
    "ju" => "\u{3058}\u{3085}",
    "jyu" => "\u{3058}\u{3085}",
    "zyu" => "\u{3058}\u{3085}",
    "jo" => "\u{3058}\u{3087}",
    "jyo" => "\u{3058}\u{3087}",
    "zyo" => "\u{3058}\u{3087}",
    "su" => "\u{3059}",
    "swa" => "\u{3059}\u{3041}",
    "swi" => "\u{3059}\u{3043}",
    "swu" => "\u{3059}\u{3045}",
    "swe" => "\u{3059}\u{3047}",
    "swo" => "\u{3059}\u{3049}",
    "zu" => "\u{305a}",
    "ce" => "\u{305b}",
    "se" => "\u{305b}",
    "ze" => "\u{305c}",
    "so" => "\u{305d}",
    "zo" => "\u{305e}",
    "ta" => "\u{305f}",
    "da" => "\u{3060}",
    "chi" => "\u{3061}",
    "ti" => "\u{3061}",
    "cyi" => "\u{3061}\u{3043}",
    "tyi" => "\u{3061}\u{3043}",
    "che" => "\u{3061}\u{3047}",
    "cye" => "\u{3061}\u{3047}",
    "tye" => "\u{3061}\u{3047}",
    "cha" => "\u{3061}\u{3083}",
    "cya" => "\u{3061}\u{3083}",
    "tya" => "\u{3061}\u{3083}",
    "chu" => "\u{3061}\u{3085}",
    "cyu" => "\u{3061}\u{3085}",
    "tyu" => "\u{3061}\u{3085}",
    "cho" => "\u{3061}\u{3087}",
    "cyo" => "\u{3061}\u{3087}",
    "tyo" => "\u{3061}\u{3087}",
    "di" => "\u{3062}",
    "dyi" => "\u{3062}\u{3043}",
    "dye" => "\u{3062}\u{3047}",
    "dya" => "\u{3062}\u{3083}",
    "dyu" => "\u{3062}\u{3085}",
    "dyo" => "\u{3062}\u{3087}",
    "ltsu" => "\u{3063}",
    "ltu" => "\u{3063}",
    "xtu" => "\u{3063}",
    "tsu" => "\u{3064}",
    "tu" => "\u{3064}",
    "tsa" => "\u{3064}\u{3041}",
    "tsi" => "\u{3064}\u{3043}",
    "tse" => "\u{3064}\u{3047}",
    "tso" => "\u{3064}\u{3049}",
    "du" => "\u{3065}",
    "te" => "\u{3066}",
    "thi" => "\u{3066}\u{3043}",
    "the" => "\u{3066}\u{3047}",
    "tha" => "\u{3066}\u{3083}",
    "thu" => "\u{3066}\u{3085}",
    "tho" => "\u{3066}\u{3087}",
    "de" => "\u{3067}",
    "dhi" => "\u{3067}\u{3043}",
    "dhe" => "\u{3067}\u{3047}",
    "dha" => "\u{3067}\u{3083}",
    "dhu" => "\u{3067}\u{3085}",
    "dho" => "\u{3067}\u{3087}",
    "to" => "\u{3068}",
    "twa" => "\u{3068}\u{3041}",
    "twi" => "\u{3068}\u{3043}",
    "twu" => "\u{3068}\u{3045}",
    "twe" => "\u{3068}\u{3047}",
    "two" => "\u{3068}\u{3049}",
    "do" => "\u{3069}",
    "dwa" => "\u{3069}\u{3041}",
    "dwi" => "\u{3069}\u{3043}",
    "dwu" => "\u{3069}\u{3045}",
    "dwe" => "\u{3069}\u{3047}",
    "dwo" => "\u{3069}\u{3049}",
    "na" => "\u{306a}",
    "ni" => "\u{306b}",
    "nyi" => "\u{306b}\u{3043}",
    "nye" => "\u{306b}\u{3047}",
    "nya" => "\u{306b}\u{3083}",
    "nyu" => "\u{306b}\u{3085}",
    "nyo" => "\u{306b}\u{3087}",
    "nu" => "\u{306c}",
    "ne" => "\u{306d}",
    "no" => "\u{306e}",
    "ha" => "\u{306f}",
    "ba" => "\u{3070}",
    "pa" => "\u{3071}",
    "hi" => "\u{3072}",
    "hyi" => "\u{3072}\u{3043}",
    "hye" => "\u{3072}\u{3047}",
    "hya" => "\u{3072}\u{3083}",
    "hyu" => "\u{3072}\u{3085}",
    "hyo" => "\u{3072}\u{3087}",
    "bi" => "\u{3073}",
    "byi" => "\u{3073}\u{3043}",
    "bye" => "\u{3073}\u{3047}",
    "bya" => "\u{3073}\u{3083}",
    "byu" => "\u{3073}\u{3085}",
    "byo" => "\u{3073}\u{3087}",
    "pi" => "\u{3074}",
    "pyi" => "\u{3074}\u{3043}",
    "pye" => "\u{3074}\u{3047}",
    "pya" => "\u{3074}\u{3083}",
    "pyu" => "\u{3074}\u{3085}",
    "pyo" => "\u{3074}\u{3087}",
    "fu" => "\u{3075}",
    "hu" => "\u{3075}",
    "fa" => "\u{3075}\u{3041}",
    "fwa" => "\u{3075}\u{3041}",
    "fi" => "\u{3075}\u{3043}",
    "fwi" => "\u{3075}\u{3043}",
    "fyi" => "\u{3075}\u{3043}",
    "fwu" => "\u{3075}\u{3045}",
    "fe" => "\u{3075}\u{3047}",
    "fwe" => "\u{3075}\u{3047}",
    "fye" => "\u{3075}\u{3047}",
    "fo" => "\u{3075}\u{3049}",
    "fwo" => "\u{3075}\u{3049}",
    "fya" => "\u{3075}\u{3083}",
    "fyu" => "\u{3075}\u{3085}",
    "fyo" => "\u{3075}\u{3087}",
    "bu" => "\u{3076}",
    "pu" => "\u{3077}",
    "he" => "\u{3078}",
    "be" => "\u{3079}",
    "pe" => "\u{307a}",
    "ho" => "\u{307b}",
    "bo" => "\u{307c}",
    "po" => "\u{307d}",
    "ma" => "\u{307e}",
    "mi" => "\u{307f}",
    "myi" => "\u{307f}\u{3043}",
    "mye" => "\u{307f}\u{3047}",
    "mya" => "\u{307f}\u{3083}",
    "myu" => "\u{307f}\u{3085}",
    "myo" => "\u{307f}\u{3087}",
    "mu" => "\u{3080}",
    "me" => "\u{3081}",
    "mo" => "\u{3082}",
    "lya" => "\u{3083}",
    "xya" => "\u{3083}",
    "ya" => "\u{3084}",
    "lyu" => "\u{3085}",
    "xyu" => "\u{3085}",
    "yu" => "\u{3086}",
    "lyo" => "\u{3087}",
    "xyo" => "\u{3087}",
    "yo" => "\u{3088}",
    "ra" => "\u{3089}",
    "ri" => "\u{308a}",
    "ryi" => "\u{308a}\u{3043}",
    "rye" => "\u{308a}\u{3047}",
    "rya" => "\u{308a}\u{3083}",
    "ryu" => "\u{308a}\u{3085}",
    "ryo" => "\u{308a}\u{3087}",
    "ru" => "\u{308b}",
    "re" => "\u{308c}",
    "ro" => "\u{308d}",
    "lwa" => "\u{308e}",
    "xwa" => "\u{308e}",
    "wa" => "\u{308f}",
    "wo" => "\u{3092}",
    "xn" => "\u{3093}",
    "vu" => "\u{30f4}",
    "va" => "\u{30f4}\u{3041}",
    "vi" => "\u{30f4}\u{3043}",
    "vyi" => "\u{30f4}\u{3043}",
    "ve" => "\u{30f4}\u{3047}",
    "vye" => "\u{30f4}\u{3047}",
    "vo" => "\u{30f4}\u{3049}",
    "vya" => "\u{30f4}\u{3083}",
    "vyu" => "\u{30f4}\u{3085}",
    "vyo" => "\u{30f4}\u{3087}",
    "nn" => "\u{3093}",};

/// Romaji to hiragana converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RomajiKana;

impl RomajiKana {
    pub fn new() -> Self {
        Self
    }
}

impl Converter for RomajiKana {
    fn convert(&self, input: &str, output: &mut String) {
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut i = 0;
        let mut key = String::new();
        while i < len {
            let lookup_len = (len - i).min(MAX_ROMAJI_LEN);
            let mut kana: Option<&str> = None;
            let mut matched = 0;
            for j in (1..=lookup_len).rev() {
                key.clear();
                key.extend(&chars[i..i + j]);
                if let Some(&value) = ROMAJI_TABLE.get(key.as_str()) {
                    kana = Some(value);
                    matched = j;
                    break;
                }
            }
            // Check double consonant against the previous output char
            if let Some(prev) = output.chars().last() {
                if prev == 'n' {
                    output.pop();
                    output.push('\u{3093}'); // ん
                } else if prev == chars[i] && prev != '\u{30fc}' && prev < '\u{3000}' {
                    output.pop();
                    output.push('\u{3063}'); // っ
                }
            }
            match kana {
                Some(kana) => {
                    output.push_str(kana);
                    i += matched;
                }
                None => {
                    output.push(chars[i]);
                    i += 1;
                }
            }
        }
    }
}
