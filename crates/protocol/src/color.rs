use std::fmt;

use serde::{Deserialize, Serialize};

/// A CSS color exactly as the author wrote it.
///
/// Colors are never validated. Derived values built from a malformed color
/// are malformed too, and the browser ignores the resulting declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels read as `#RRGGBB`.
    ///
    /// Each channel is the pair of hex digits at character offsets 1, 3 and 5.
    /// A pair that is missing or not hexadecimal yields `None`.
    pub fn rgb_channels(&self) -> [Option<u8>; 3] {
        let chars: Vec<char> = self.0.chars().collect();
        [1, 3, 5].map(|start| {
            let pair: String = chars.get(start..start + 2)?.iter().collect();
            u8::from_str_radix(&pair, 16).ok()
        })
    }

    /// `rgba(r, g, b, alpha)` built from [`Color::rgb_channels`].
    ///
    /// Unreadable channels are written as `NaN`.
    pub fn to_rgba(&self, alpha: f64) -> String {
        let [r, g, b] = self
            .rgb_channels()
            .map(|channel| channel.map_or_else(|| "NaN".to_string(), |c| c.to_string()));
        format!("rgba({r}, {g}, {b}, {alpha})")
    }

    /// The color with a two-digit hex alpha appended (`#1E1E1E` + `80`).
    pub fn with_alpha_hex(&self, alpha: u8) -> String {
        format!("{}{alpha:02x}", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self(s)
    }
}
