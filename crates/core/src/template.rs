//! Template renderer: turns a [`WidgetConfig`] into the stylesheet and markup
//! that fill the widget's isolated scope.

use svg_reveal_protocol::{CubicBezier, Declaration, FillMode, Keyframe, RevealAnimation};

use crate::config::WidgetConfig;

/// Class carried by the text element.
pub const TEXT_CLASS: &str = "animated-text";
/// Class added to the text element to start the reveal.
pub const ANIMATE_CLASS: &str = "animate";
pub const ANIMATION_NAME: &str = "revealText";
/// Dash length of the outline once drawn. Tuned to the fixed viewBox rather
/// than measured from the glyph outlines.
pub const STROKE_DASHARRAY: u32 = 1360;
pub const VIEW_BOX: &str = "0 0 1300 399";
pub const TEXT_TRANSFORM: &str = "translate(6 271)";
pub const REVEAL_TIMING: CubicBezier = CubicBezier::new(0.0, 0.23, 1.0, 0.1);
pub const FONT_IMPORT_URL: &str = "https://fonts.googleapis.com/css2?family=Lobster&display=swap";
const STROKE_WIDTH: &str = "2px";

/// Stylesheet and markup for one render, swapped into the scope as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowDocument {
    pub stylesheet: String,
    pub markup: String,
}

impl ShadowDocument {
    /// Serialize as the scope's inner HTML: a `<style>` element followed by
    /// the markup.
    pub fn to_html(&self) -> String {
        format!("<style>\n{}</style>\n{}", self.stylesheet, self.markup)
    }
}

/// Render the widget with the text still hidden. The reveal starts once the
/// host adds [`ANIMATE_CLASS`] to the text element.
pub fn render(config: &WidgetConfig) -> ShadowDocument {
    ShadowDocument {
        stylesheet: render_stylesheet(config),
        markup: render_markup(config),
    }
}

/// The reveal keyframes: the outline is drawn in, then the fill takes over.
///
/// The 80% stop fills with the target color at zero alpha.
pub fn reveal_animation(config: &WidgetConfig) -> RevealAnimation {
    let outline = config.outline_color.as_str();
    let dash = STROKE_DASHARRAY.to_string();
    let stroke = |opacity: Option<&str>, fill: &str, dash: &str| {
        let mut declarations = vec![
            Declaration::new("stroke", outline),
            Declaration::new("stroke-width", STROKE_WIDTH),
        ];
        if let Some(opacity) = opacity {
            declarations.push(Declaration::new("opacity", opacity));
        }
        declarations.push(Declaration::new("fill", fill));
        declarations.push(Declaration::new("stroke-dasharray", dash));
        declarations
    };

    let keyframes = vec![
        Keyframe {
            offset: 0,
            declarations: stroke(Some("0"), "none", "0"),
        },
        Keyframe {
            offset: 30,
            declarations: stroke(Some("1"), "none", dash.as_str()),
        },
        Keyframe {
            offset: 80,
            declarations: vec![
                Declaration::new("stroke", outline),
                Declaration::new("stroke-width", STROKE_WIDTH),
                Declaration::new("fill", config.fill_color.to_rgba(0.0)),
            ],
        },
        Keyframe {
            offset: 100,
            declarations: vec![
                Declaration::new("opacity", "1"),
                Declaration::new("fill", config.fill_color.as_str()),
                Declaration::new("stroke", "none"),
                Declaration::new("stroke-dasharray", dash.as_str()),
            ],
        },
    ];

    RevealAnimation {
        name: ANIMATION_NAME.to_string(),
        duration_seconds: config.animation_duration_seconds,
        timing: REVEAL_TIMING,
        fill_mode: FillMode::Forwards,
        keyframes,
    }
}

/// Scoped stylesheet. Selectors only match inside the widget's own scope.
pub fn render_stylesheet(config: &WidgetConfig) -> String {
    let background = config.background_with_alpha();
    let outline = &config.outline_color;
    let font_size = config.font_size_vw;
    let font_family = &config.font_family;
    let animation = reveal_animation(config);
    let shorthand = animation.shorthand();

    let mut css = String::with_capacity(1600);
    css.push_str(&format!("  @import url('{FONT_IMPORT_URL}');\n\n"));
    css.push_str(&format!(
        r#"  :host {{
    width: 100vw;
    height: 100vh;
    display: flex;
    justify-content: center;
    align-items: center;
    background-color: {background};
    overflow: hidden;
  }}

  .wrapper {{
    position: relative;
    display: flex;
    justify-content: center;
    align-items: center;
    width: 100%;
  }}

  svg {{
    width: 100%;
    max-width: 600px;
    height: auto;
  }}

  .{TEXT_CLASS} {{
    fill: none;
    stroke: {outline};
    stroke-width: {STROKE_WIDTH};
    font-size: {font_size}vw;
    font-family: {font_family}, cursive;
    stroke-dasharray: 0;
    opacity: 0;
  }}

  .{TEXT_CLASS}.{ANIMATE_CLASS} {{
    animation: {shorthand};
  }}

"#
    ));
    css.push_str(&animation.keyframes_css(2));
    css
}

fn render_markup(config: &WidgetConfig) -> String {
    let tag = &config.heading_tag;
    let text = escape_xml(&config.text);
    format!(
        r#"<div class="wrapper">
  <svg xmlns="http://www.w3.org/2000/svg" viewBox="{VIEW_BOX}">
    <{tag} class="{TEXT_CLASS}" transform="{TEXT_TRANSFORM}">
      <tspan x="0" y="0">{text}</tspan>
    </{tag}>
  </svg>
</div>
"#
    )
}

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use svg_reveal_protocol::Color;

    #[test]
    fn default_document_shape() {
        let doc = render(&WidgetConfig::default());
        assert!(doc.markup.starts_with(r#"<div class="wrapper">"#));
        assert!(doc.markup.contains(r#"viewBox="0 0 1300 399""#));
        assert!(doc.markup.contains(r#"<p class="animated-text" transform="translate(6 271)">"#));
        assert!(doc.markup.contains(r#"<tspan x="0" y="0">Creative Spark</tspan>"#));
        assert!(doc.markup.contains("</p>"));
        assert!(!doc.markup.contains("animated-text animate"));

        assert!(doc.stylesheet.contains("background-color: #1E1E1Eff;"));
        assert!(doc.stylesheet.contains("font-family: Lobster, cursive;"));
        assert!(doc.stylesheet.contains("font-size: 10vw;"));
        assert!(doc.stylesheet.contains("stroke: #FFFFFF;"));
        assert!(
            doc.stylesheet
                .contains("animation: revealText 3s cubic-bezier(0, 0.23, 1, 0.1) forwards;")
        );
        assert!(doc.stylesheet.contains("@keyframes revealText {"));
        assert!(doc.stylesheet.contains(FONT_IMPORT_URL));
    }

    #[test]
    fn html_wraps_stylesheet_in_style_element() {
        let html = render(&WidgetConfig::default()).to_html();
        assert!(html.starts_with("<style>\n  @import url("));
        let style_end = html.find("</style>").unwrap();
        let wrapper = html.find(r#"<div class="wrapper">"#).unwrap();
        assert!(style_end < wrapper);
    }

    #[test]
    fn heading_tag_wraps_text() {
        let config = WidgetConfig {
            heading_tag: "h2".into(),
            ..WidgetConfig::default()
        };
        let doc = render(&config);
        assert!(doc.markup.contains("<h2 class=\"animated-text\""));
        assert!(doc.markup.contains("</h2>"));
    }

    #[test]
    fn text_is_escaped() {
        let config = WidgetConfig {
            text: "Fish & <Chips>".into(),
            ..WidgetConfig::default()
        };
        let doc = render(&config);
        assert!(doc.markup.contains("Fish &amp; &lt;Chips&gt;"));
    }

    #[test]
    fn keyframe_stops() {
        let animation = reveal_animation(&WidgetConfig::default());
        let offsets: Vec<u8> = animation.keyframes.iter().map(|k| k.offset).collect();
        assert_eq!(offsets, [0, 30, 80, 100]);

        let start = animation.keyframe(0).unwrap();
        assert_eq!(start.get("stroke"), Some("#FFFFFF"));
        assert_eq!(start.get("stroke-width"), Some("2px"));
        assert_eq!(start.get("opacity"), Some("0"));
        assert_eq!(start.get("fill"), Some("none"));
        assert_eq!(start.get("stroke-dasharray"), Some("0"));

        let drawn = animation.keyframe(30).unwrap();
        assert_eq!(drawn.get("opacity"), Some("1"));
        assert_eq!(drawn.get("stroke-dasharray"), Some("1360"));

        let fading = animation.keyframe(80).unwrap();
        assert_eq!(fading.get("fill"), Some("rgba(0, 206, 209, 0)"));
        assert_eq!(fading.get("opacity"), None);

        let end = animation.keyframe(100).unwrap();
        assert_eq!(end.get("opacity"), Some("1"));
        assert_eq!(end.get("fill"), Some("#00CED1"));
        assert_eq!(end.get("stroke"), Some("none"));
        assert_eq!(end.get("stroke-dasharray"), Some("1360"));
    }

    #[test]
    fn malformed_fill_fails_open() {
        let config = WidgetConfig {
            fill_color: Color::from("teal"),
            ..WidgetConfig::default()
        };
        let animation = reveal_animation(&config);
        assert_eq!(
            animation.keyframe(80).and_then(|k| k.get("fill")),
            Some("rgba(234, NaN, NaN, 0)")
        );
        assert_eq!(animation.keyframe(100).and_then(|k| k.get("fill")), Some("teal"));
    }

    #[test]
    fn duration_and_font_follow_config() {
        let config = WidgetConfig {
            animation_duration_seconds: 1.5,
            font_size_vw: 6.0,
            font_family: "Pacifico".into(),
            ..WidgetConfig::default()
        };
        let css = render_stylesheet(&config);
        assert!(css.contains("animation: revealText 1.5s "));
        assert!(css.contains("font-size: 6vw;"));
        assert!(css.contains("font-family: Pacifico, cursive;"));
    }
}
