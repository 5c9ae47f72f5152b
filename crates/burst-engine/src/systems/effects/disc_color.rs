//! Disc colors parsed from `#RRGGBB` palette entries.

use super::rng::RandomSource;

/// The warm palette the celebration uses when no config overrides it.
pub const DEFAULT_PALETTE: [&str; 7] = [
    "#DA7756", "#BD5D3A", "#E8A890", "#F5F3EE",
    "#C9937B", "#D9957C", "#F0DDD3",
];

/// Linear RGB color, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl DiscColor {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (leading `#` optional). Returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| -> Option<f32> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Pick one palette entry uniformly. `palette` must be non-empty.
    pub fn pick(palette: &[DiscColor], rng: &mut (impl RandomSource + ?Sized)) -> Self {
        palette[rng.index(palette.len())]
    }
}

impl Default for DiscColor {
    fn default() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0 }
    }
}
