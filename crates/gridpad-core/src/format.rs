use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Convert to CSS hex color string
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Background of cells matching the search query
    pub const HIGHLIGHT: Color = Color::rgb(0xe1, 0xff, 0xc7);
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    /// CSS `text-align` value
    pub fn as_css(&self) -> &'static str {
        match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
        }
    }
}

impl fmt::Display for HorizontalAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl FromStr for HorizontalAlign {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(HorizontalAlign::Left),
            "center" => Ok(HorizontalAlign::Center),
            "right" => Ok(HorizontalAlign::Right),
            _ => Err(GridError::InvalidAlignment(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::HIGHLIGHT.to_hex(), "#e1ffc7");
        assert_eq!(Color::default().to_hex(), "#ffffff");
    }

    #[test]
    fn test_align_from_str() {
        assert_eq!("left".parse::<HorizontalAlign>().unwrap(), HorizontalAlign::Left);
        assert_eq!(" Center ".parse::<HorizontalAlign>().unwrap(), HorizontalAlign::Center);
        assert_eq!("RIGHT".parse::<HorizontalAlign>().unwrap(), HorizontalAlign::Right);
        assert!("justify".parse::<HorizontalAlign>().is_err());
    }

    #[test]
    fn test_align_serde() {
        let json = serde_json::to_string(&HorizontalAlign::Center).unwrap();
        assert_eq!(json, "\"center\"");
        let back: HorizontalAlign = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(back, HorizontalAlign::Right);
    }
}
