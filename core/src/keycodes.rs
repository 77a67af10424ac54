//! Physical key codes, modifier masks, and physical key orderings.
//!
//! Key codes keep the Android `KeyEvent` numbering so hosts can feed
//! hardware events through unchanged. Character maps are indexed by the
//! position of the physical key in a fixed ordering (QWERTY rows for most
//! layouts, the wider Cyrillic rows for standard Russian).

pub type Keycode = i32;

pub const KEYCODE_A: Keycode = 29;
pub const KEYCODE_B: Keycode = 30;
pub const KEYCODE_C: Keycode = 31;
pub const KEYCODE_D: Keycode = 32;
pub const KEYCODE_E: Keycode = 33;
pub const KEYCODE_F: Keycode = 34;
pub const KEYCODE_G: Keycode = 35;
pub const KEYCODE_H: Keycode = 36;
pub const KEYCODE_I: Keycode = 37;
pub const KEYCODE_J: Keycode = 38;
pub const KEYCODE_K: Keycode = 39;
pub const KEYCODE_L: Keycode = 40;
pub const KEYCODE_M: Keycode = 41;
pub const KEYCODE_N: Keycode = 42;
pub const KEYCODE_O: Keycode = 43;
pub const KEYCODE_P: Keycode = 44;
pub const KEYCODE_Q: Keycode = 45;
pub const KEYCODE_R: Keycode = 46;
pub const KEYCODE_S: Keycode = 47;
pub const KEYCODE_T: Keycode = 48;
pub const KEYCODE_U: Keycode = 49;
pub const KEYCODE_V: Keycode = 50;
pub const KEYCODE_W: Keycode = 51;
pub const KEYCODE_X: Keycode = 52;
pub const KEYCODE_Y: Keycode = 53;
pub const KEYCODE_Z: Keycode = 54;
pub const KEYCODE_COMMA: Keycode = 55;
pub const KEYCODE_PERIOD: Keycode = 56;
pub const KEYCODE_GRAVE: Keycode = 68;
pub const KEYCODE_LEFT_BRACKET: Keycode = 71;
pub const KEYCODE_RIGHT_BRACKET: Keycode = 72;
pub const KEYCODE_SEMICOLON: Keycode = 74;
pub const KEYCODE_APOSTROPHE: Keycode = 75;

/// Modifier mask bits, matching the host meta-key listener.
pub const META_SHIFT_ON: u32 = 0x1;
pub const META_ALT_ON: u32 = 0x2;
pub const META_SYM_ON: u32 = 0x4;

/// QWERTY physical ordering: q..p, a..l, z..m (26 keys).
pub const QWERTY_ORDER: [Keycode; 26] = [
    KEYCODE_Q,
    KEYCODE_W,
    KEYCODE_E,
    KEYCODE_R,
    KEYCODE_T,
    KEYCODE_Y,
    KEYCODE_U,
    KEYCODE_I,
    KEYCODE_O,
    KEYCODE_P,
    KEYCODE_A,
    KEYCODE_S,
    KEYCODE_D,
    KEYCODE_F,
    KEYCODE_G,
    KEYCODE_H,
    KEYCODE_J,
    KEYCODE_K,
    KEYCODE_L,
    KEYCODE_Z,
    KEYCODE_X,
    KEYCODE_C,
    KEYCODE_V,
    KEYCODE_B,
    KEYCODE_N,
    KEYCODE_M,
];

/// Cyrillic physical ordering for the standard Russian layout: the three
/// QWERTY rows widened with the bracket/punctuation keys (33 keys).
pub const RUSSIAN_ORDER: [Keycode; 33] = [
    KEYCODE_Q,
    KEYCODE_W,
    KEYCODE_E,
    KEYCODE_R,
    KEYCODE_T,
    KEYCODE_Y,
    KEYCODE_U,
    KEYCODE_I,
    KEYCODE_O,
    KEYCODE_P,
    KEYCODE_LEFT_BRACKET,
    KEYCODE_RIGHT_BRACKET,
    KEYCODE_A,
    KEYCODE_S,
    KEYCODE_D,
    KEYCODE_F,
    KEYCODE_G,
    KEYCODE_H,
    KEYCODE_J,
    KEYCODE_K,
    KEYCODE_L,
    KEYCODE_SEMICOLON,
    KEYCODE_APOSTROPHE,
    KEYCODE_GRAVE,
    KEYCODE_Z,
    KEYCODE_X,
    KEYCODE_C,
    KEYCODE_V,
    KEYCODE_B,
    KEYCODE_N,
    KEYCODE_M,
    KEYCODE_COMMA,
    KEYCODE_PERIOD,
];
