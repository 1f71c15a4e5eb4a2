use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The configuration attributes the widget reacts to.
///
/// Any other attribute set on the element is ignored: it neither changes the
/// resolved configuration nor triggers a re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeName {
    Text,
    HeadingTag,
    FillColor,
    OutlineColor,
    BackgroundColor,
    BackgroundOpacity,
    FontSize,
    FontFamily,
    AnimationDuration,
}

impl AttributeName {
    /// Every recognized attribute, in declaration order.
    pub const OBSERVED: [AttributeName; 9] = [
        AttributeName::Text,
        AttributeName::HeadingTag,
        AttributeName::FillColor,
        AttributeName::OutlineColor,
        AttributeName::BackgroundColor,
        AttributeName::BackgroundOpacity,
        AttributeName::FontSize,
        AttributeName::FontFamily,
        AttributeName::AnimationDuration,
    ];

    /// The attribute's name as written in markup.
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeName::Text => "text",
            AttributeName::HeadingTag => "heading-tag",
            AttributeName::FillColor => "fill-color",
            AttributeName::OutlineColor => "outline-color",
            AttributeName::BackgroundColor => "background-color",
            AttributeName::BackgroundOpacity => "background-opacity",
            AttributeName::FontSize => "font-size",
            AttributeName::FontFamily => "font-family",
            AttributeName::AnimationDuration => "animation-duration",
        }
    }

    /// Whether the attribute carries a number rather than free text.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            AttributeName::BackgroundOpacity
                | AttributeName::FontSize
                | AttributeName::AnimationDuration
        )
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown attribute: {0}")]
pub struct UnknownAttribute(pub String);

impl FromStr for AttributeName {
    type Err = UnknownAttribute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Markup attribute names are case-insensitive.
        let lower = s.to_ascii_lowercase();
        AttributeName::OBSERVED
            .into_iter()
            .find(|name| name.as_str() == lower)
            .ok_or_else(|| UnknownAttribute(s.to_string()))
    }
}
