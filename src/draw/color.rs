//! Color type, alpha tokens and predefined color constants.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents an RGB color with an optional embedded alpha channel.
///
/// A color without an embedded alpha takes its opacity from the active
/// [`AlphaToken`] when it is sent to the canvas. A color that already carries
/// alpha (for example the eraser sentinel `#00000000`) is sent unchanged.
///
/// # Examples
///
/// ```
/// use sketchbar::draw::Color;
/// let red: Color = "#FF0000".parse().unwrap();
/// assert_eq!(red.to_string(), "#FF0000");
///
/// let faded: Color = "rgba(255, 0, 0, 0.5)".parse().unwrap();
/// assert_eq!(faded.to_string(), "#FF000080");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Explicit alpha channel, if the color encodes one
    pub alpha: Option<u8>,
}

impl Color {
    /// Creates an opaque-by-token color (no embedded alpha).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: None,
        }
    }

    /// Creates a color with an embedded alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: Some(a),
        }
    }

    /// Returns true if the color encodes its own alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.alpha.is_some()
    }

    /// Returns the color to hand to the canvas for the given alpha level.
    ///
    /// The token is only applied when the color has no alpha of its own.
    pub fn with_alpha_token(self, token: AlphaToken) -> Self {
        match self.alpha {
            Some(_) => self,
            None => Self {
                alpha: Some(token.value()),
                ..self
            },
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if let Some(a) = self.alpha {
            write!(f, "{a:02X}")?;
        }
        Ok(())
    }
}

/// Errors produced while parsing color and alpha strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color '{0}' (expected #RRGGBB or #RRGGBBAA)")]
    InvalidHex(String),

    #[error("invalid functional color '{0}' (expected rgb(r,g,b) or rgba(r,g,b,a))")]
    InvalidFunctional(String),

    #[error("unknown color name '{0}'")]
    UnknownName(String),

    #[error("invalid alpha token '{0}' (expected two hex digits)")]
    InvalidAlpha(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(s.to_string()));
        }

        let lower = s.to_ascii_lowercase();
        if lower.starts_with("rgb") {
            return parse_functional(&lower)
                .ok_or_else(|| ColorParseError::InvalidFunctional(s.to_string()));
        }

        crate::util::name_to_color(s).ok_or_else(|| ColorParseError::UnknownName(s.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn parse_functional(s: &str) -> Option<Color> {
    let (has_alpha, body) = if let Some(rest) = s.strip_prefix("rgba") {
        (true, rest)
    } else {
        (false, s.strip_prefix("rgb")?)
    };
    let body = body.trim().strip_prefix('(')?.strip_suffix(')')?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();

    fn channel(p: &str) -> Option<u8> {
        p.parse().ok()
    }

    match (has_alpha, parts.as_slice()) {
        (false, [r, g, b]) => Some(Color::rgb(channel(r)?, channel(g)?, channel(b)?)),
        (true, [r, g, b, a]) => {
            let a: f64 = a.parse().ok()?;
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            let a = (a * 255.0).round() as u8;
            Some(Color::rgba(channel(r)?, channel(g)?, channel(b)?, a))
        }
        _ => None,
    }
}

/// One discrete opacity level, written as two hex digits (`33`, `AA`, `FF`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlphaToken(u8);

impl AlphaToken {
    /// Fully opaque level.
    pub const OPAQUE: AlphaToken = AlphaToken(0xFF);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for AlphaToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.0)
    }
}

impl FromStr for AlphaToken {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 2 {
            return Err(ColorParseError::InvalidAlpha(s.to_string()));
        }
        u8::from_str_radix(trimmed, 16)
            .map(AlphaToken)
            .map_err(|_| ColorParseError::InvalidAlpha(s.to_string()))
    }
}

// ============================================================================
// Predefined Color Constants (default toolbar palette)
// ============================================================================

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const RED: Color = Color::rgb(239, 89, 82);
pub const YELLOW: Color = Color::rgb(255, 211, 39);
pub const GREEN: Color = Color::rgb(154, 230, 0);
pub const ORANGE: Color = Color::rgb(255, 128, 0);
pub const PINK: Color = Color::rgb(255, 0, 255);
/// Light blue swatch of the default palette
pub const BLUE: Color = Color::rgb(85, 162, 248);
pub const PURPLE: Color = Color::rgb(162, 108, 250);

/// Fully transparent sentinel committed by the eraser tool.
pub const ERASER: Color = Color::rgba(0, 0, 0, 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_without_alpha() {
        let color: Color = "#ef5952".parse().unwrap();
        assert_eq!(color, Color::rgb(0xEF, 0x59, 0x52));
        assert!(!color.has_alpha());
    }

    #[test]
    fn parses_hex_with_alpha() {
        let color: Color = "#00000000".parse().unwrap();
        assert_eq!(color, ERASER);
        assert!(color.has_alpha());
    }

    #[test]
    fn parses_functional_forms() {
        let rgb: Color = "rgb(80, 213, 245)".parse().unwrap();
        assert_eq!(rgb, Color::rgb(80, 213, 245));

        let rgba: Color = "rgba(239,89,82,1)".parse().unwrap();
        assert_eq!(rgba, Color::rgba(239, 89, 82, 255));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!("".parse::<Color>(), Err(ColorParseError::Empty));
        assert!(matches!(
            "#12345".parse::<Color>(),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            "rgba(1,2,3,4)".parse::<Color>(),
            Err(ColorParseError::InvalidFunctional(_))
        ));
        assert!(matches!(
            "chartreuse".parse::<Color>(),
            Err(ColorParseError::UnknownName(_))
        ));
    }

    #[test]
    fn alpha_token_applies_only_without_embedded_alpha() {
        let token: AlphaToken = "77".parse().unwrap();
        assert_eq!(RED.with_alpha_token(token).to_string(), "#EF595277");
        assert_eq!(ERASER.with_alpha_token(token).to_string(), "#00000000");
    }

    #[test]
    fn alpha_token_round_trips_as_hex() {
        let token: AlphaToken = "aa".parse().unwrap();
        assert_eq!(token.value(), 0xAA);
        assert_eq!(token.to_string(), "AA");
        assert!("A".parse::<AlphaToken>().is_err());
    }
}
