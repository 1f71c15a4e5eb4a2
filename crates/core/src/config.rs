//! Attribute resolution: raw attribute strings in, a fully defaulted
//! [`WidgetConfig`] out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use svg_reveal_protocol::{AttributeName, Color};
use tracing::debug;

pub const DEFAULT_TEXT: &str = "Creative Spark";
pub const DEFAULT_HEADING_TAG: &str = "p";
pub const DEFAULT_FILL_COLOR: &str = "#00CED1";
pub const DEFAULT_OUTLINE_COLOR: &str = "#FFFFFF";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#1E1E1E";
pub const DEFAULT_BACKGROUND_OPACITY: f64 = 100.0;
pub const DEFAULT_FONT_SIZE_VW: f64 = 10.0;
pub const DEFAULT_FONT_FAMILY: &str = "Lobster";
pub const DEFAULT_ANIMATION_DURATION_SECONDS: f64 = 3.0;

/// Current attribute values of one widget, keyed by recognized name.
pub type Attributes = BTreeMap<AttributeName, String>;

/// Everything a render needs, with every default already applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub text: String,
    pub heading_tag: String,
    pub fill_color: Color,
    pub outline_color: Color,
    pub background_color: Color,
    /// Percent, `0.0..=100.0`.
    pub background_opacity: f64,
    pub font_size_vw: f64,
    pub font_family: String,
    pub animation_duration_seconds: f64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            heading_tag: DEFAULT_HEADING_TAG.to_string(),
            fill_color: Color::from(DEFAULT_FILL_COLOR),
            outline_color: Color::from(DEFAULT_OUTLINE_COLOR),
            background_color: Color::from(DEFAULT_BACKGROUND_COLOR),
            background_opacity: DEFAULT_BACKGROUND_OPACITY,
            font_size_vw: DEFAULT_FONT_SIZE_VW,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            animation_duration_seconds: DEFAULT_ANIMATION_DURATION_SECONDS,
        }
    }
}

impl WidgetConfig {
    /// Resolve a config from the element's attributes.
    ///
    /// Absent or empty text attributes take their default. Numeric attributes
    /// that have no leading number take their default as well; nothing is
    /// reported to the caller.
    pub fn resolve(attributes: &Attributes) -> Self {
        let text_attr = |name: AttributeName, default: &str| -> String {
            attributes
                .get(&name)
                .filter(|value| !value.is_empty())
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        let background_opacity = number_attr(
            attributes,
            AttributeName::BackgroundOpacity,
            DEFAULT_BACKGROUND_OPACITY,
        )
        .clamp(0.0, 100.0);
        let font_size_vw = non_negative(number_attr(
            attributes,
            AttributeName::FontSize,
            DEFAULT_FONT_SIZE_VW,
        ))
        .unwrap_or(DEFAULT_FONT_SIZE_VW);
        let animation_duration_seconds = non_negative(number_attr(
            attributes,
            AttributeName::AnimationDuration,
            DEFAULT_ANIMATION_DURATION_SECONDS,
        ))
        .unwrap_or(DEFAULT_ANIMATION_DURATION_SECONDS);

        Self {
            text: text_attr(AttributeName::Text, DEFAULT_TEXT),
            heading_tag: text_attr(AttributeName::HeadingTag, DEFAULT_HEADING_TAG),
            fill_color: text_attr(AttributeName::FillColor, DEFAULT_FILL_COLOR).into(),
            outline_color: text_attr(AttributeName::OutlineColor, DEFAULT_OUTLINE_COLOR).into(),
            background_color: text_attr(AttributeName::BackgroundColor, DEFAULT_BACKGROUND_COLOR)
                .into(),
            background_opacity,
            font_size_vw,
            font_family: text_attr(AttributeName::FontFamily, DEFAULT_FONT_FAMILY),
            animation_duration_seconds,
        }
    }

    /// Background alpha on the 0–255 scale, rounded to the nearest level.
    pub fn background_alpha(&self) -> u8 {
        // Opacity is clamped on resolve; the clamp here covers hand-built configs.
        (self.background_opacity.clamp(0.0, 100.0) / 100.0 * 255.0).round() as u8
    }

    /// Background color with the alpha appended as two hex digits.
    pub fn background_with_alpha(&self) -> String {
        self.background_color.with_alpha_hex(self.background_alpha())
    }
}

fn number_attr(attributes: &Attributes, name: AttributeName, default: f64) -> f64 {
    let Some(raw) = attributes.get(&name) else {
        return default;
    };
    match parse_leading_number(raw) {
        Some(value) => value,
        None => {
            debug!(attribute = %name, value = %raw, default, "unparsable number, using default");
            default
        }
    }
}

fn non_negative(value: f64) -> Option<f64> {
    if value < 0.0 {
        debug!(value, "negative value, using default");
        None
    } else {
        Some(value)
    }
}

/// Read the longest decimal literal at the start of `input`.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `" 50%"`
/// reads as 50 and `"2.5s"` as 2.5. Returns `None` when there is no number
/// or the number is not finite.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first().copied(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // An exponent only counts if at least one digit follows it.
    if matches!(bytes.get(end).copied(), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end).copied(), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(AttributeName, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(name, value)| (*name, value.to_string()))
            .collect()
    }

    #[test]
    fn empty_attributes_resolve_to_defaults() {
        let config = WidgetConfig::resolve(&Attributes::new());
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.text, "Creative Spark");
        assert_eq!(config.heading_tag, "p");
        assert_eq!(config.fill_color.as_str(), "#00CED1");
        assert_eq!(config.outline_color.as_str(), "#FFFFFF");
        assert_eq!(config.background_color.as_str(), "#1E1E1E");
        assert_eq!(config.background_opacity, 100.0);
        assert_eq!(config.font_size_vw, 10.0);
        assert_eq!(config.font_family, "Lobster");
        assert_eq!(config.animation_duration_seconds, 3.0);
    }

    #[test]
    fn every_attribute_overrides_its_default() {
        let config = WidgetConfig::resolve(&attrs(&[
            (AttributeName::Text, "Hello"),
            (AttributeName::HeadingTag, "h1"),
            (AttributeName::FillColor, "#FF0000"),
            (AttributeName::OutlineColor, "#000000"),
            (AttributeName::BackgroundColor, "#123456"),
            (AttributeName::BackgroundOpacity, "40"),
            (AttributeName::FontSize, "7.5"),
            (AttributeName::FontFamily, "Pacifico"),
            (AttributeName::AnimationDuration, "5"),
        ]));
        assert_eq!(config.text, "Hello");
        assert_eq!(config.heading_tag, "h1");
        assert_eq!(config.fill_color.as_str(), "#FF0000");
        assert_eq!(config.outline_color.as_str(), "#000000");
        assert_eq!(config.background_color.as_str(), "#123456");
        assert_eq!(config.background_opacity, 40.0);
        assert_eq!(config.font_size_vw, 7.5);
        assert_eq!(config.font_family, "Pacifico");
        assert_eq!(config.animation_duration_seconds, 5.0);
    }

    #[test]
    fn empty_strings_fall_back() {
        let config = WidgetConfig::resolve(&attrs(&[
            (AttributeName::Text, ""),
            (AttributeName::FontFamily, ""),
            (AttributeName::FontSize, ""),
        ]));
        assert_eq!(config.text, DEFAULT_TEXT);
        assert_eq!(config.font_family, DEFAULT_FONT_FAMILY);
        assert_eq!(config.font_size_vw, DEFAULT_FONT_SIZE_VW);
    }

    #[test]
    fn unparsable_numbers_fall_back() {
        let config = WidgetConfig::resolve(&attrs(&[
            (AttributeName::BackgroundOpacity, "half"),
            (AttributeName::FontSize, "big"),
            (AttributeName::AnimationDuration, "slow"),
        ]));
        assert_eq!(config.background_opacity, DEFAULT_BACKGROUND_OPACITY);
        assert_eq!(config.font_size_vw, DEFAULT_FONT_SIZE_VW);
        assert_eq!(config.animation_duration_seconds, DEFAULT_ANIMATION_DURATION_SECONDS);
    }

    #[test]
    fn numbers_with_units_keep_their_prefix() {
        let config = WidgetConfig::resolve(&attrs(&[
            (AttributeName::BackgroundOpacity, " 50%"),
            (AttributeName::FontSize, "12vw"),
            (AttributeName::AnimationDuration, "2.5s"),
        ]));
        assert_eq!(config.background_opacity, 50.0);
        assert_eq!(config.font_size_vw, 12.0);
        assert_eq!(config.animation_duration_seconds, 2.5);
    }

    #[test]
    fn opacity_is_clamped() {
        let high = WidgetConfig::resolve(&attrs(&[(AttributeName::BackgroundOpacity, "150")]));
        assert_eq!(high.background_opacity, 100.0);
        let low = WidgetConfig::resolve(&attrs(&[(AttributeName::BackgroundOpacity, "-20")]));
        assert_eq!(low.background_opacity, 0.0);
    }

    #[test]
    fn negative_size_and_duration_fall_back() {
        let config = WidgetConfig::resolve(&attrs(&[
            (AttributeName::FontSize, "-4"),
            (AttributeName::AnimationDuration, "-1"),
        ]));
        assert_eq!(config.font_size_vw, DEFAULT_FONT_SIZE_VW);
        assert_eq!(config.animation_duration_seconds, DEFAULT_ANIMATION_DURATION_SECONDS);
    }

    #[test]
    fn zero_is_a_valid_number() {
        let config = WidgetConfig::resolve(&attrs(&[
            (AttributeName::BackgroundOpacity, "0"),
            (AttributeName::AnimationDuration, "0"),
        ]));
        assert_eq!(config.background_opacity, 0.0);
        assert_eq!(config.animation_duration_seconds, 0.0);
    }

    #[test]
    fn background_alpha_maps_linearly() {
        let alpha = |opacity: &str| {
            WidgetConfig::resolve(&attrs(&[(AttributeName::BackgroundOpacity, opacity)]))
                .background_with_alpha()
        };
        assert_eq!(alpha("100"), "#1E1E1Eff");
        assert_eq!(alpha("0"), "#1E1E1E00");
        assert_eq!(alpha("50"), "#1E1E1E80");
        assert_eq!(alpha("25"), "#1E1E1E40");
        assert_eq!(alpha("1"), "#1E1E1E03");
    }

    #[test]
    fn config_serializes_with_plain_color_strings() {
        let config = WidgetConfig::resolve(&attrs(&[(AttributeName::BackgroundOpacity, "50")]));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["text"], "Creative Spark");
        assert_eq!(json["fill_color"], "#00CED1");
        assert_eq!(json["background_opacity"], 50.0);
        assert_eq!(json["animation_duration_seconds"], 3.0);

        let back: WidgetConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn leading_number_parsing() {
        assert_eq!(parse_leading_number("42"), Some(42.0));
        assert_eq!(parse_leading_number("  -3.5abc"), Some(-3.5));
        assert_eq!(parse_leading_number("+7"), Some(7.0));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("5."), Some(5.0));
        assert_eq!(parse_leading_number("1e1"), Some(10.0));
        assert_eq!(parse_leading_number("2e"), Some(2.0));
        assert_eq!(parse_leading_number("3E-1x"), Some(0.3));
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("1e999"), None);
    }
}
