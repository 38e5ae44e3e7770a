use serde::{Deserialize, Serialize};

/// Caller-supplied branding, immutable for the duration of one generation
/// call. The logo is raw image bytes; decoding happens at render time and
/// a logo that fails to decode is skipped, never fatal.
#[derive(Debug, Clone)]
pub struct Branding {
    pub primary_color: RgbColor,
    pub logo: Option<Vec<u8>>,
}

impl Default for Branding {
    fn default() -> Self {
        Branding {
            primary_color: RgbColor::DEFAULT_PRIMARY,
            logo: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    /// Muted slate blue used when the caller sends no color.
    pub const DEFAULT_PRIMARY: RgbColor = RgbColor {
        r: 0x4A,
        g: 0x6F,
        b: 0xA5,
    };

    /// Parses `#RRGGBB` or `RRGGBB`.
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(RgbColor {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }

    /// Channel floats in 0.0..=1.0, the form the drawing library expects.
    pub fn as_fractions(&self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    /// Uppercase `RRGGBB` without the hash, the form the tree library expects.
    pub fn as_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(
            RgbColor::parse("#4A6FA5"),
            Some(RgbColor { r: 0x4A, g: 0x6F, b: 0xA5 })
        );
        assert_eq!(RgbColor::parse("ffffff"), Some(RgbColor { r: 255, g: 255, b: 255 }));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(RgbColor::parse("#fff"), None);
        assert_eq!(RgbColor::parse("not-a-color"), None);
        assert_eq!(RgbColor::parse("#12345G"), None);
    }

    #[test]
    fn hex_round_trip() {
        let color = RgbColor::parse("#1B998B").unwrap();
        assert_eq!(color.as_hex(), "1B998B");
    }
}
