// Copyright (c) 2016-2017 Martijn Rijkeboer <mrr@sru-systems.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::error;
use std::fmt;

/// An RGB color as stored in the XML document (`#RRGGBB`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub struct Color {
    /// The red component.
    pub red: u8,

    /// The green component.
    pub green: u8,

    /// The blue component.
    pub blue: u8,
}

impl Color {
    /// Attempts to parse a color from a `#RRGGBB` string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdbx2::Color;
    ///
    /// let red = Color::from_hex_string("#FF0000").unwrap();
    /// ```
    pub fn from_hex_string(string: &str) -> Result<Color, ColorError> {
        let digits = match string.strip_prefix('#') {
            Some(digits) if digits.len() == 6 => digits,
            _ => return Err(ColorError::InvalidFormat),
        };
        let bytes = hex::decode(digits).map_err(|_| ColorError::InvalidFormat)?;
        Ok(Color {
            red: bytes[0],
            green: bytes[1],
            blue: bytes[2],
        })
    }

    /// Gets the `#RRGGBB` representation of the color.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

/// Error type for color errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColorError {
    /// The string is not a `#RRGGBB` color.
    InvalidFormat,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ColorError::InvalidFormat => write!(f, "Color: invalid format"),
        }
    }
}

impl error::Error for ColorError {}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_from_hex_string_returns_correct_color() {
        let color = Color::from_hex_string("#1A2B3C").unwrap();
        assert_eq!(
            color,
            Color {
                red: 0x1a,
                green: 0x2b,
                blue: 0x3c,
            }
        );
    }

    #[test]
    fn test_from_hex_string_with_invalid_input_returns_error() {
        for input in ["", "#", "#123", "123456", "#12345G", "#1234567"] {
            assert_eq!(Color::from_hex_string(input), Err(ColorError::InvalidFormat));
        }
    }

    #[test]
    fn test_to_hex_string_inverses_from_hex_string() {
        let color = Color {
            red: 0xff,
            green: 0x00,
            blue: 0x7f,
        };
        assert_eq!(Color::from_hex_string(&color.to_hex_string()), Ok(color));
    }
}
