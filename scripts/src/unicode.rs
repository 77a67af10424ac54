//! Explicit code point entry.
//!
//! The unicode layout emits hex digit keys; every complete group of four
//! digits composes the corresponding scalar value. Incomplete trailing
//! groups, surrogate values, and anything that is not a hex digit pass
//! through unchanged, so the converter is the identity on ordinary text
//! buffers.

use libcompose_core::Converter;

/// Digits per code point group.
const GROUP_LEN: usize = 4;

/// Hex code point entry converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unicode;

impl Unicode {
    pub fn new() -> Self {
        Self
    }
}

impl Converter for Unicode {
    fn convert(&self, input: &str, output: &mut String) {
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        let mut i = 0;
        while i < len {
            let group_ok =
                len - i >= GROUP_LEN && chars[i..i + GROUP_LEN].iter().all(char::is_ascii_hexdigit);
            if group_ok {
                let group: String = chars[i..i + GROUP_LEN].iter().collect();
                if let Some(composed) = u32::from_str_radix(&group, 16)
                    .ok()
                    .and_then(char::from_u32)
                {
                    output.push(composed);
                    i += GROUP_LEN;
                    continue;
                }
            }
            output.push(chars[i]);
            i += 1;
        }
    }
}
