//! Hard-keyboard key translation and multitap cycling.
//!
//! Maps physical key events (with modifier state) to logical characters
//! through a per-language character map, with a multitap state machine for
//! layouts that cycle one key through several characters. Language packs
//! are registered up front and activated with [`HardKeyboardTranslator::set_lang`],
//! which acts as a barrier: every piece of derived state is discarded
//! before the next keystroke is processed.

use ahash::AHashMap;
use tracing::debug;

use crate::clock::{MonotonicClock, SystemClock};
use crate::keycodes::{
    Keycode, KEYCODE_COMMA, META_ALT_ON, META_SHIFT_ON, QWERTY_ORDER, RUSSIAN_ORDER,
};
use crate::resources::LangPack;

/// Milliseconds after a release before a same-key press stops cycling.
const MULTITAP_TIMEOUT_MS: u64 = 600;

/// Terminates each multitap group in the flat map encoding.
const GROUP_TERMINATOR: char = ':';

/// The host's native character map, used when no language-specific entry
/// applies (and always when the language has no custom map).
pub trait KeyCharacterMap {
    fn get(&self, keycode: Keycode, meta: u32) -> Option<char>;
}

/// Plain US layout fallback: letters, the punctuation keys the physical
/// orderings reference, and shift upper-casing.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiKeyCharacterMap;

impl KeyCharacterMap for AsciiKeyCharacterMap {
    fn get(&self, keycode: Keycode, meta: u32) -> Option<char> {
        use crate::keycodes::*;
        let base = match keycode {
            KEYCODE_A..=KEYCODE_Z => {
                // a..z are contiguous in the host numbering
                char::from(b'a' + (keycode - KEYCODE_A) as u8)
            }
            KEYCODE_COMMA => ',',
            KEYCODE_PERIOD => '.',
            KEYCODE_SEMICOLON => ';',
            KEYCODE_APOSTROPHE => '\'',
            KEYCODE_GRAVE => '`',
            KEYCODE_LEFT_BRACKET => '[',
            KEYCODE_RIGHT_BRACKET => ']',
            _ => return None,
        };
        if meta & META_SHIFT_ON != 0 {
            base.to_uppercase().next()
        } else {
            Some(base)
        }
    }
}

/// Tap tracking across key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TapState {
    /// No press tracked since the last language switch.
    Idle,
    /// A key is being pressed or was pressed once.
    Pressed,
    /// Repeated presses of one key are cycling its multitap group.
    Multitap,
}

/// Translates physical key events into logical characters for the active
/// language.
pub struct HardKeyboardTranslator<M = AsciiKeyCharacterMap, C = SystemClock> {
    key_char_map: M,
    clock: C,
    packs: AHashMap<String, LangPack>,
    qwerty_index: AHashMap<Keycode, usize>,
    russian_index: AHashMap<Keycode, usize>,

    cur_map: Option<Vec<char>>,
    cur_multitap_map: Option<Vec<char>>,
    /// First character of each multitap group -> offset of the group.
    multitap_index: AHashMap<char, usize>,
    hebrew: bool,
    standard_russian: bool,

    state: TapState,
    tap_count: usize,
    last_keycode: Keycode,
    last_was_up: bool,
    last_up_time: u64,
}

impl Default for HardKeyboardTranslator {
    fn default() -> Self {
        Self::new(AsciiKeyCharacterMap, SystemClock::new())
    }
}

impl<M: KeyCharacterMap, C: MonotonicClock> HardKeyboardTranslator<M, C> {
    pub fn new(key_char_map: M, clock: C) -> Self {
        let qwerty_index = QWERTY_ORDER
            .iter()
            .enumerate()
            .map(|(i, &k)| (k, i))
            .collect();
        let russian_index = RUSSIAN_ORDER
            .iter()
            .enumerate()
            .map(|(i, &k)| (k, i))
            .collect();
        Self {
            key_char_map,
            clock,
            packs: AHashMap::new(),
            qwerty_index,
            russian_index,
            cur_map: None,
            cur_multitap_map: None,
            multitap_index: AHashMap::new(),
            hebrew: false,
            standard_russian: false,
            state: TapState::Idle,
            tap_count: 0,
            last_keycode: 0,
            last_was_up: true,
            last_up_time: 0,
        }
    }

    /// Register a language pack. Packs with a full layout id are keyed by
    /// it, others by the bare language code.
    pub fn add_lang(&mut self, pack: LangPack) {
        self.packs.insert(pack.key().to_string(), pack);
    }

    /// Activate a language. All derived state (active maps, multitap
    /// index, cycle counters) is discarded before the next keystroke.
    pub fn set_lang(&mut self, lang_code: &str, full_lang: &str) {
        self.cur_map = None;
        self.cur_multitap_map = None;
        self.multitap_index.clear();
        self.state = TapState::Idle;
        self.tap_count = 0;
        self.last_keycode = 0;
        self.last_was_up = true;
        self.last_up_time = 0;

        let pack = self
            .packs
            .get(full_lang)
            .or_else(|| self.packs.get(lang_code))
            .cloned();
        if let Some(pack) = pack {
            if let Some(map) = &pack.char_map {
                self.cur_map = Some(map.chars().collect());
            }
            if let Some(map) = &pack.multitap_map {
                self.load_multitap_map(map);
            }
        }
        self.hebrew = lang_code == "HE";
        self.standard_russian = lang_code == "RU" && full_lang != "RU_YaShERT";
        debug!(lang_code, full_lang, "hard keyboard language set");
    }

    fn load_multitap_map(&mut self, map: &str) {
        let chars: Vec<char> = map.chars().collect();
        let mut in_group = false;
        for (i, &c) in chars.iter().enumerate() {
            if !in_group {
                self.multitap_index.insert(c, i);
                in_group = true;
            } else if c == GROUP_TERMINATOR {
                in_group = false;
            }
        }
        self.cur_multitap_map = Some(chars);
    }

    /// Translate a physical key press into a logical character, advancing
    /// the multitap state machine. Returns `None` when neither the active
    /// language map nor the host map resolves the key.
    pub fn translate_key(&mut self, keycode: Keycode, meta: u32) -> Option<char> {
        let alt_on = meta & META_ALT_ON != 0;
        let shift_on = meta & META_SHIFT_ON != 0;

        // With shift alone the caller handles upper-casing; drop the mask
        // so the host map yields the base character.
        let meta = if shift_on && !alt_on { 0 } else { meta };

        let mut code = match &self.cur_map {
            Some(map) => {
                let index = if self.standard_russian {
                    self.russian_index.get(&keycode)
                } else {
                    self.qwerty_index.get(&keycode)
                };
                match index {
                    Some(&index) if !alt_on => map.get(index).copied(),
                    _ if self.hebrew && keycode == KEYCODE_COMMA => {
                        // comma -> tav, shift+comma -> comma
                        Some(if shift_on { ',' } else { '\u{05ea}' })
                    }
                    _ => self.key_char_map.get(keycode, meta),
                }
            }
            None => self.key_char_map.get(keycode, meta),
        };

        if self.cur_multitap_map.is_some() && keycode == self.last_keycode {
            // A repeat before the previous release is still the first
            // press; only a release-then-repress moves the machine.
            if self.last_was_up {
                if self.clock.uptime_millis() > self.last_up_time + MULTITAP_TIMEOUT_MS {
                    self.state = TapState::Pressed;
                    self.tap_count = 0;
                } else if self.state == TapState::Multitap {
                    self.tap_count += 1;
                } else {
                    self.state = TapState::Multitap;
                    self.tap_count = 1;
                }
            }

            if self.state == TapState::Multitap {
                if let (Some(map), Some(base)) = (&self.cur_multitap_map, code) {
                    if let Some(&offset) = self.multitap_index.get(&base) {
                        match map.get(offset + self.tap_count) {
                            Some(&c) if c != GROUP_TERMINATOR => code = Some(c),
                            // Past the group: wrap back to the base character
                            _ => self.tap_count = 0,
                        }
                    }
                }
            }
        } else {
            self.state = TapState::Pressed;
            self.tap_count = 0;
        }

        self.last_keycode = keycode;
        self.last_was_up = false;
        code
    }

    /// Record a key release for the next press's timing decision.
    pub fn key_up(&mut self) {
        self.last_was_up = true;
        self.last_up_time = self.clock.uptime_millis();
    }

    /// Whether the translator is currently cycling a multitap group.
    pub fn is_multi_tap(&self) -> bool {
        self.state == TapState::Multitap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycodes::{KEYCODE_A, KEYCODE_B, KEYCODE_Q, KEYCODE_S, KEYCODE_W};
    use std::cell::Cell;
    use std::rc::Rc;

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

    fn multitap_translator() -> (HardKeyboardTranslator<AsciiKeyCharacterMap, FakeClock>, FakeClock)
    {
        let clock = FakeClock::default();
        let mut translator = HardKeyboardTranslator::new(AsciiKeyCharacterMap, clock.clone());
        translator.add_lang(LangPack::new("FR").with_multitap_map("aàâ:eéèê:"));
        translator.set_lang("FR", "FR");
        (translator, clock)
    }

    fn tap(
        translator: &mut HardKeyboardTranslator<AsciiKeyCharacterMap, FakeClock>,
        clock: &FakeClock,
        keycode: Keycode,
        gap_ms: u64,
    ) -> Option<char> {
        let code = translator.translate_key(keycode, 0);
        translator.key_up();
        clock.advance(gap_ms);
        code
    }

    #[test]
    fn multitap_cycles_and_wraps() {
        let (mut translator, clock) = multitap_translator();
        assert_eq!(tap(&mut translator, &clock, KEYCODE_A, 100), Some('a'));
        assert!(!translator.is_multi_tap());
        assert_eq!(tap(&mut translator, &clock, KEYCODE_A, 100), Some('à'));
        assert!(translator.is_multi_tap());
        assert_eq!(tap(&mut translator, &clock, KEYCODE_A, 100), Some('â'));
        // group exhausted: wrap back to the base character
        assert_eq!(tap(&mut translator, &clock, KEYCODE_A, 100), Some('a'));
        assert_eq!(tap(&mut translator, &clock, KEYCODE_A, 100), Some('à'));
    }

    #[test]
    fn different_key_resets_cycle() {
        let (mut translator, clock) = multitap_translator();
        tap(&mut translator, &clock, KEYCODE_A, 100);
        tap(&mut translator, &clock, KEYCODE_A, 100);
        assert!(translator.is_multi_tap());
        assert_eq!(tap(&mut translator, &clock, KEYCODE_B, 100), Some('b'));
        assert!(!translator.is_multi_tap());
        assert_eq!(tap(&mut translator, &clock, KEYCODE_A, 100), Some('a'));
    }

    #[test]
    fn timeout_cancels_multitap() {
        let (mut translator, clock) = multitap_translator();
        tap(&mut translator, &clock, KEYCODE_A, 100);
        assert_eq!(tap(&mut translator, &clock, KEYCODE_A, 700), Some('à'));
        // over 600ms since the release: back to the base character
        assert_eq!(tap(&mut translator, &clock, KEYCODE_A, 100), Some('a'));
        assert!(!translator.is_multi_tap());
    }

    #[test]
    fn held_key_repeat_does_not_advance() {
        let (mut translator, clock) = multitap_translator();
        // press without release: auto-repeat events stay on the base char
        assert_eq!(translator.translate_key(KEYCODE_A, 0), Some('a'));
        assert_eq!(translator.translate_key(KEYCODE_A, 0), Some('a'));
        assert!(!translator.is_multi_tap());
        translator.key_up();
        clock.advance(100);
        assert_eq!(translator.translate_key(KEYCODE_A, 0), Some('à'));
    }

    #[test]
    fn char_map_overrides_host_map() {
        let mut translator =
            HardKeyboardTranslator::new(AsciiKeyCharacterMap, FakeClock::default());
        translator.add_lang(LangPack::new("KO").with_char_map("ㅂㅈㄷ"));
        translator.set_lang("KO", "KO");
        assert_eq!(translator.translate_key(KEYCODE_Q, 0), Some('ㅂ'));
        assert_eq!(translator.translate_key(KEYCODE_W, 0), Some('ㅈ'));
        // past the supplied map: nothing resolves
        assert_eq!(translator.translate_key(KEYCODE_S, 0), None);
    }

    #[test]
    fn alt_bypasses_language_map() {
        let mut translator =
            HardKeyboardTranslator::new(AsciiKeyCharacterMap, FakeClock::default());
        translator.add_lang(LangPack::new("KO").with_char_map("ㅂㅈㄷ"));
        translator.set_lang("KO", "KO");
        assert_eq!(translator.translate_key(KEYCODE_Q, META_ALT_ON), Some('q'));
    }

    #[test]
    fn hebrew_comma_swap() {
        let mut translator =
            HardKeyboardTranslator::new(AsciiKeyCharacterMap, FakeClock::default());
        translator.add_lang(LangPack::new("HE").with_char_map("'קראטוןםפ"));
        translator.set_lang("HE", "HE");
        assert_eq!(translator.translate_key(KEYCODE_COMMA, 0), Some('\u{05ea}'));
        assert_eq!(
            translator.translate_key(KEYCODE_COMMA, META_SHIFT_ON),
            Some(',')
        );
    }

    #[test]
    fn standard_russian_uses_cyrillic_ordering() {
        let mut translator =
            HardKeyboardTranslator::new(AsciiKeyCharacterMap, FakeClock::default());
        translator.add_lang(LangPack::new("RU").with_char_map("йцукенгшщзхъфывапролджэёячсмитьбю"));
        translator.add_lang(
            LangPack::new("RU")
                .with_full_lang("RU_YaShERT")
                .with_char_map("яшертыуиопасдфгчйкл"),
        );
        translator.set_lang("RU", "RU");
        // 11th physical key is the left bracket row extension
        assert_eq!(
            translator.translate_key(crate::keycodes::KEYCODE_LEFT_BRACKET, 0),
            Some('х')
        );
        assert_eq!(translator.translate_key(KEYCODE_A, 0), Some('ф'));

        translator.set_lang("RU", "RU_YaShERT");
        assert_eq!(translator.translate_key(KEYCODE_A, 0), Some('а'));
    }

    #[test]
    fn set_lang_resets_multitap_state() {
        let (mut translator, clock) = multitap_translator();
        tap(&mut translator, &clock, KEYCODE_A, 100);
        tap(&mut translator, &clock, KEYCODE_A, 100);
        assert!(translator.is_multi_tap());
        translator.set_lang("FR", "FR");
        assert!(!translator.is_multi_tap());
        assert_eq!(tap(&mut translator, &clock, KEYCODE_A, 100), Some('a'));
    }

    #[test]
    fn shift_clears_meta_for_host_lookup() {
        let mut translator =
            HardKeyboardTranslator::new(AsciiKeyCharacterMap, FakeClock::default());
        // no language map: host map is consulted with the cleared mask, so
        // the caller keeps responsibility for upper-casing
        assert_eq!(translator.translate_key(KEYCODE_A, META_SHIFT_ON), Some('a'));
        assert_eq!(
            translator.translate_key(KEYCODE_A, META_SHIFT_ON | META_ALT_ON),
            Some('A')
        );
    }
}
