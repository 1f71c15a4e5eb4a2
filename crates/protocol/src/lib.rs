pub mod animation;
pub mod attribute;
pub mod color;
pub mod visibility;

pub use animation::{CubicBezier, Declaration, FillMode, Keyframe, RevealAnimation};
pub use attribute::{AttributeName, UnknownAttribute};
pub use color::Color;
pub use visibility::IntersectionEntry;

/// Tag name the widget is registered under in host markup.
pub const ELEMENT_NAME: &str = "svg-text-reveal";
