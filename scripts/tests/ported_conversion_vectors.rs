// Ported conversion vectors (from the upstream Korean and Tamil test
// suites), plus the round-trip property over the whole precomposed
// syllable block.

use libcompose_core::Converter;
use libscripts::{Hangul, Tamil};

fn convert<C: Converter>(converter: &C, input: &str) -> String {
    let mut output = String::new();
    converter.convert(input, &mut output);
    output
}

fn reverse<C: Converter>(converter: &C, input: &str) -> String {
    let mut output = String::new();
    converter.reverse(input, &mut output);
    output
}

#[test]
fn ported_convert_empty() {
    assert_eq!(convert(&Hangul::new(), ""), "");
}

#[test]
fn ported_convert_jamo_to_hangeul() {
    let hangul = Hangul::new();
    // JamoHangeul
    assert_eq!(
        convert(&hangul, "\u{3148}\u{314F}\u{3141}\u{3157}\u{314E}\u{314F}\u{3134}\u{3131}\u{3161}\u{3139}"),
        "자모한글"
    );
    // SeoulPyeongYang
    assert_eq!(
        convert(&hangul, "\u{3145}\u{3153}\u{3147}\u{315C}\u{3139}\u{314D}\u{3155}\u{3147}\u{3147}\u{3151}\u{3147}"),
        "서울평양"
    );
}

#[test]
fn ported_convert_hangeul_to_jamo() {
    let hangul = Hangul::new();
    assert_eq!(
        reverse(&hangul, "자모한글"),
        "\u{3148}\u{314F}\u{3141}\u{3157}\u{314E}\u{314F}\u{3134}\u{3131}\u{3161}\u{3139}"
    );
    assert_eq!(
        reverse(&hangul, "서울평양"),
        "\u{3145}\u{3153}\u{3147}\u{315C}\u{3139}\u{314D}\u{3155}\u{3147}\u{3147}\u{3151}\u{3147}"
    );
}

#[test]
fn reverse_then_convert_round_trips_every_syllable() {
    let hangul = Hangul::new();
    let mut jamo = String::new();
    let mut recomposed = String::new();
    for code in 0xAC00..=0xD7A3u32 {
        let syllable = char::from_u32(code).unwrap();
        jamo.clear();
        recomposed.clear();
        hangul.reverse(&syllable.to_string(), &mut jamo);
        hangul.convert(&jamo, &mut recomposed);
        assert_eq!(
            recomposed,
            syllable.to_string(),
            "syllable U+{:04X} did not round-trip through {:?}",
            code,
            jamo
        );
    }
}

#[test]
fn ported_tamil_single_vowel() {
    assert_eq!(convert(&Tamil::new(), "\u{0b85}"), "\u{0b85}");
}

#[test]
fn ported_tamil_consonant_plus_default_a() {
    assert_eq!(convert(&Tamil::new(), "\u{0b95}"), "\u{0b95}");
}

#[test]
fn ported_tamil_consonant_plus_explicit_i() {
    assert_eq!(convert(&Tamil::new(), "\u{0b95}\u{0b87}"), "\u{0b95}\u{0bbf}");
}

#[test]
fn ported_tamil_explicit_a_followed_by_single_vowel() {
    assert_eq!(
        convert(&Tamil::new(), "\u{0b95}\u{0b85}\u{0b87}"),
        "\u{0b95}\u{0b87}"
    );
}

#[test]
fn ported_tamil_word() {
    assert_eq!(
        convert(&Tamil::new(), "\u{0ba4}\u{0bae}\u{0b87}\u{0bb4}\u{0bcd}"),
        "தமிழ்"
    );
}

#[test]
fn ported_tamil_sri() {
    assert_eq!(convert(&Tamil::new(), "\u{0b84}"), "ஶ்ரீ");
}

#[test]
fn ported_tamil_ksi() {
    assert_eq!(
        convert(&Tamil::new(), "\u{0b98}\u{0b87}"),
        "\u{0b95}\u{0bcd}\u{0bb7}\u{0bbf}"
    );
}
