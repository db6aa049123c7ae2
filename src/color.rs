//! Accent color parsing and the lightness-driven background treatment.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use crate::consts::LIGHT_BACKDROP_THRESHOLD;

/// An sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Two hex digits as one channel. Signs are rejected.
fn channel(digits: &str) -> Option<u8> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match u8::from_str_radix(digits, 16) {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

impl Rgb {
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB` values.
    #[must_use]
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let r = channel(&hex[0..1].repeat(2))?;
                let g = channel(&hex[1..2].repeat(2))?;
                let b = channel(&hex[2..3].repeat(2))?;
                Some(Self { r, g, b })
            }
            6 => {
                let r = channel(&hex[0..2])?;
                let g = channel(&hex[2..4])?;
                let b = channel(&hex[4..6])?;
                Some(Self { r, g, b })
            }
            _ => None,
        }
    }

    /// Canonical lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived lightness: mean of the largest and smallest normalized channel.
    #[must_use]
    pub fn lightness(self) -> f64 {
        let channels = [self.r, self.g, self.b];
        let max = channels.iter().copied().max().unwrap_or(0);
        let min = channels.iter().copied().min().unwrap_or(0);
        (f64::from(max) / 255.0 + f64::from(min) / 255.0) / 2.0
    }
}

/// Which gradient pair a chosen accent gets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backdrop {
    /// Lightness above one half: stronger tint.
    Light,
    /// Everything else, exact one half included.
    Dark,
}

impl Backdrop {
    #[must_use]
    pub fn for_color(color: Rgb) -> Self {
        if color.lightness() > LIGHT_BACKDROP_THRESHOLD { Self::Light } else { Self::Dark }
    }

    /// Hex alpha suffixes `(start, end)` appended to `#rrggbb`.
    #[must_use]
    pub fn alphas(self) -> (&'static str, &'static str) {
        match self {
            Self::Light => ("15", "05"),
            Self::Dark => ("10", "03"),
        }
    }

    /// CSS `background` value for `color` under this treatment.
    #[must_use]
    pub fn gradient(self, color: Rgb) -> String {
        let hex = color.to_hex();
        let (start, end) = self.alphas();
        format!("linear-gradient(135deg, {hex}{start} 0%, {hex}{end} 100%)")
    }
}
