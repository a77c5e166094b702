//! Android color literal normalization
//!
//! Android accepts `#RGB`, `#ARGB`, `#RRGGBB` and `#AARRGGBB`. Every shape is
//! expanded to eight hex digits and split into four channels.

use crate::error::{Error, Result};

/// A color split into 0-255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argb {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Argb {
    /// Channels as `[alpha, red, green, blue]`.
    #[must_use]
    pub fn channels(self) -> [u8; 4] {
        [self.alpha, self.red, self.green, self.blue]
    }
}

/// Expand a color literal to its 8-digit `AARRGGBB` form.
///
/// Whitespace around the literal and one leading `#` are ignored.
pub fn expand_hex_color(literal: &str) -> Result<String> {
    let trimmed = literal.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(invalid(literal, format!("'{bad}' is not a hex digit")));
    }

    // All ASCII from here on, so byte length == digit count
    let expanded = match digits.len() {
        8 => digits.to_string(),
        6 => format!("FF{digits}"),
        4 => double_digits(digits),
        3 => double_digits(&format!("F{digits}")),
        n => {
            return Err(invalid(
                literal,
                format!("expected 3, 4, 6 or 8 hex digits, found {n}"),
            ));
        }
    };

    Ok(expanded)
}

/// Parse a color literal into alpha, red, green and blue channels.
///
/// # Errors
/// Returns [`Error::InvalidColor`] if the literal has a length other than
/// 3, 4, 6 or 8 digits, or contains a non-hex character.
pub fn parse_hex_color(literal: &str) -> Result<Argb> {
    let expanded = expand_hex_color(literal)?;

    let mut channels = [0u8; 4];
    for (i, channel) in channels.iter_mut().enumerate() {
        let pair = &expanded[i * 2..i * 2 + 2];
        *channel = u8::from_str_radix(pair, 16)
            .map_err(|e| invalid(literal, e.to_string()))?;
    }

    let [alpha, red, green, blue] = channels;
    Ok(Argb {
        alpha,
        red,
        green,
        blue,
    })
}

/// `ARGB` -> `AARRGGBB`
fn double_digits(digits: &str) -> String {
    digits.chars().flat_map(|c| [c, c]).collect()
}

fn invalid(literal: &str, reason: String) -> Error {
    Error::InvalidColor {
        value: literal.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argb(literal: &str) -> [u8; 4] {
        parse_hex_color(literal).unwrap().channels()
    }

    #[test]
    fn test_eight_digits() {
        assert_eq!(argb("#80FF0000"), [128, 255, 0, 0]);
        assert_eq!(argb("00000000"), [0, 0, 0, 0]);
    }

    #[test]
    fn test_six_digits_forces_opaque() {
        assert_eq!(argb("#336699"), [255, 0x33, 0x66, 0x99]);
        assert_eq!(expand_hex_color("#336699").unwrap(), "FF336699");
    }

    #[test]
    fn test_four_digits() {
        assert_eq!(expand_hex_color("#8F0A").unwrap(), "88FF00AA");
        assert_eq!(argb("#8F0A"), [0x88, 255, 0, 0xAA]);
    }

    #[test]
    fn test_three_digits() {
        assert_eq!(argb("#FFF"), [255, 255, 255, 255]);
        assert_eq!(expand_hex_color("123").unwrap(), "FF112233");
        assert_eq!(argb("123"), [255, 17, 34, 51]);
    }

    #[test]
    fn test_lowercase_and_whitespace() {
        assert_eq!(argb("  #ff00ff\n"), [255, 255, 0, 255]);
    }

    #[test]
    fn test_invalid_lengths() {
        for literal in ["", "#", "#12", "#12345", "#1234567", "#123456789"] {
            let err = parse_hex_color(literal).unwrap_err();
            assert!(
                matches!(err, Error::InvalidColor { .. }),
                "{literal:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_invalid_digits() {
        let err = parse_hex_color("#GGG").unwrap_err();
        assert!(err.to_string().contains("'G' is not a hex digit"));
        // A second '#' is not stripped
        assert!(parse_hex_color("##FFF").is_err());
    }
}
