// End-to-end flows through the composition core: the word composer and
// hard-keyboard translator from libcompose-core driving the script
// converters, the way an input session wires them together.

use std::cell::Cell;
use std::rc::Rc;

use libcompose_core::keycodes::KEYCODE_A;
use libcompose_core::{
    AsciiKeyCharacterMap, Converter, HardKeyboardTranslator, InputSession, LangPack,
    MonotonicClock, WordComposer,
};
use libscripts::{RomajiKana, Script, ScriptKind};

#[derive(Clone, Default)]
struct FakeClock(Rc<Cell<u64>>);

impl FakeClock {
    fn advance(&self, millis: u64) {
        self.0.set(self.0.get() + millis);
    }
}

impl MonotonicClock for FakeClock {
    fn uptime_millis(&self) -> u64 {
        self.0.get()
    }
}

#[test]
fn jamo_keystrokes_compose_hangul_per_keystroke() {
    let script = Script::new(ScriptKind::Hangul);
    let mut session = InputSession::new(false);

    // 한 grows syllable by syllable as jamo arrive
    let jamo = [0x314E, 0x314F, 0x3134];
    let composing: Vec<String> = jamo
        .iter()
        .map(|&code| {
            session
                .add_character(code, &[code], false, false, Some(&script))
                .to_string()
        })
        .collect();
    assert_eq!(composing[0], "\u{314E}");
    assert_eq!(composing[1], "\u{D558}");
    assert_eq!(composing[2], "\u{D55C}");

    // backspace re-converts the shorter buffer
    assert_eq!(session.delete_last(Some(&script)), Some("\u{D558}"));
}

#[test]
fn romaji_session_applies_doubled_consonant_retroactively() {
    let script = Script::new(ScriptKind::Kana);
    let mut session = InputSession::new(false);
    for ch in "tta".chars() {
        session.add_character(ch as i32, &[ch as i32], false, false, Some(&script));
    }
    assert_eq!(session.word().converted_word(), "\u{3063}\u{305f}");
    assert_eq!(session.word().typed_word(), "tta");
}

#[test]
fn multitap_translator_drives_replace_last() {
    // The orchestrator replaces the previous character while the
    // translator reports a multitap cycle in progress
    let clock = FakeClock::default();
    let mut translator = HardKeyboardTranslator::new(AsciiKeyCharacterMap, clock.clone());
    translator.add_lang(LangPack::new("FR").with_multitap_map("a\u{00e0}\u{00e2}:"));
    translator.set_lang("FR", "FR");

    let mut word = WordComposer::new();
    for _ in 0..3 {
        let code = translator.translate_key(KEYCODE_A, 0).unwrap();
        let replace = word.size() > 0 && translator.is_multi_tap();
        word.add_character(code as i32, &[code as i32], replace, false);
        translator.key_up();
        clock.advance(100);
    }
    // three presses of the same key leave one character, the second alternate
    assert_eq!(word.size(), 1);
    assert_eq!(word.typed_word(), "\u{00e2}");
}

#[test]
fn t9_vowel_preprocess_feeds_the_main_machine() {
    let mut script = Script::new(ScriptKind::Hangul);
    let mut word = WordComposer::new();
    // ㄱ then the T9 presses ㅣ ㆍ for ㅏ
    for code in [0x3131, 0x3163, 0x318D] {
        word.add(code, &[code]);
    }
    let preprocessor = script.t9_preprocess().unwrap();
    let preprocessed = preprocessor.convert_t9_vowels(&word);
    assert_eq!(preprocessed.typed_word(), "\u{3131}\u{314F}");

    let mut output = String::new();
    Script::new(ScriptKind::Hangul).convert(preprocessed.typed_word(), &mut output);
    assert_eq!(output, "\u{AC00}");
}

#[test]
fn diacritic_key_then_conversion() {
    // Japanese T9: kana arrive already converted, the voice-mark key
    // rewrites the last one in place
    let mut word = WordComposer::new();
    word.add(0x306f, &[0x306f]); // は
    word.handle_diacritic();
    assert_eq!(word.typed_word(), "\u{3070}"); // ば

    // the identity conversion leaves the voiced kana alone
    word.convert_word(Some(&RomajiKana::new()));
    assert_eq!(word.converted_word(), "\u{3070}");
}

#[test]
fn preferred_word_survives_conversion() {
    let script = Script::new(ScriptKind::Telex);
    let mut session = InputSession::new(false);
    for ch in "tooi".chars() {
        session.add_character(ch as i32, &[ch as i32], false, false, Some(&script));
    }
    assert_eq!(session.word().converted_word(), "t\u{00f4}i");
    assert_eq!(session.commit_word(), "t\u{00f4}i");
}
