//! Swatch colour decoding.

use serde::{Deserialize, Serialize};

/// Swatch payload attached to an option value: a hex colour string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Swatch {
    pub value: String,
}

impl Swatch {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Decode the hex string into an RGBA colour.
    ///
    /// Accepts `RGB`, `RRGGBB` and `AARRGGBB`, with or without a leading `#`.
    pub fn rgba(&self) -> Option<Rgba> {
        Rgba::from_hex(&self.value)
    }
}

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a hex colour string.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;

        match hex.len() {
            3 => {
                let nibble = |shift: u32| (((value >> shift) & 0xF) * 17) as u8;
                Some(Self::opaque(nibble(8), nibble(4), nibble(0)))
            }
            6 => Some(Self::opaque(
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            )),
            8 => Some(Self {
                a: (value >> 24) as u8,
                r: (value >> 16) as u8,
                g: (value >> 8) as u8,
                b: value as u8,
            }),
            _ => None,
        }
    }

    /// Format as `#RRGGBB`, dropping alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
