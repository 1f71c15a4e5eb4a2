use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

/// A single CSS `property: value` pair inside a keyframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// One stop of a keyframe animation, at `offset` percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub offset: u8,
    pub declarations: Vec<Declaration>,
}

impl Keyframe {
    /// Value of `property` at this stop, if the stop sets it.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// CSS `animation-fill-mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    None,
    Forwards,
    Backwards,
    Both,
}

impl FillMode {
    pub fn as_str(self) -> &'static str {
        match self {
            FillMode::None => "none",
            FillMode::Forwards => "forwards",
            FillMode::Backwards => "backwards",
            FillMode::Both => "both",
        }
    }
}

/// A named keyframe animation together with how it is played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealAnimation {
    pub name: String,
    pub duration_seconds: f64,
    pub timing: CubicBezier,
    pub fill_mode: FillMode,
    pub keyframes: Vec<Keyframe>,
}

impl RevealAnimation {
    /// The `animation` shorthand value, e.g.
    /// `revealText 3s cubic-bezier(0, 0.23, 1, 0.1) forwards`.
    pub fn shorthand(&self) -> String {
        format!(
            "{} {}s {} {}",
            self.name,
            self.duration_seconds,
            self.timing,
            self.fill_mode.as_str()
        )
    }

    /// Keyframe stop at exactly `offset` percent.
    pub fn keyframe(&self, offset: u8) -> Option<&Keyframe> {
        self.keyframes.iter().find(|k| k.offset == offset)
    }

    /// The `@keyframes` rule, indented by `indent` spaces.
    pub fn keyframes_css(&self, indent: usize) -> String {
        let pad = " ".repeat(indent);
        let mut css = String::with_capacity(self.keyframes.len() * 160);
        // Writing to a String cannot fail.
        let _ = writeln!(css, "{pad}@keyframes {} {{", self.name);
        for keyframe in &self.keyframes {
            let _ = writeln!(css, "{pad}  {}% {{", keyframe.offset);
            for decl in &keyframe.declarations {
                let _ = writeln!(css, "{pad}    {}: {};", decl.property, decl.value);
            }
            let _ = writeln!(css, "{pad}  }}");
        }
        let _ = writeln!(css, "{pad}}}");
        css
    }
}
