//! Hex color codes to RGBA pixels.

use crate::error::ColorError;

/// An 8-bit RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Fully opaque pixel.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// How malformed color codes are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPolicy {
    /// Never fail: a channel that does not parse becomes 0.
    #[default]
    Lenient,
    /// Reject anything but exactly six hex digits.
    Strict,
}

impl ColorPolicy {
    pub fn decode(self, code: &str) -> Result<Pixel, ColorError> {
        match self {
            ColorPolicy::Lenient => Ok(decode(code)),
            ColorPolicy::Strict => decode_strict(code),
        }
    }
}

/// Remove the first `#` from a color string.
pub fn strip_hash(code: &str) -> String {
    code.replacen('#', "", 1)
}

/// Decode an `RRGGBB` code. Alpha is always 255.
///
/// Each two-character pair is read like a permissive integer parse: leading
/// whitespace and an optional sign are accepted, then as many hex digits as
/// are present. A pair with no digits yields 0, and negative values wrap into
/// the 8-bit channel.
pub fn decode(code: &str) -> Pixel {
    let chars: Vec<char> = code.chars().collect();
    let channel = |start: usize| {
        let end = (start + 2).min(chars.len());
        let pair = chars.get(start..end).unwrap_or(&[]);
        parse_channel(pair)
    };
    Pixel::rgb(channel(0), channel(2), channel(4))
}

/// Decode an `RRGGBB` code, rejecting anything that is not exactly six hex digits.
pub fn decode_strict(code: &str) -> Result<Pixel, ColorError> {
    if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::Malformed(code.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&code[i..i + 2], 16).map_err(|_| ColorError::Malformed(code.to_string()))
    };
    Ok(Pixel::rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn parse_channel(pair: &[char]) -> u8 {
    let mut rest = pair.iter().skip_while(|c| c.is_whitespace()).peekable();
    let negative = match rest.peek() {
        Some('-') => {
            rest.next();
            true
        }
        Some('+') => {
            rest.next();
            false
        }
        _ => false,
    };

    let mut value: u32 = 0;
    for c in rest {
        match c.to_digit(16) {
            Some(d) => value = value * 16 + d,
            None => break,
        }
    }

    let value = value as u8;
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}
