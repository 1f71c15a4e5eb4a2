//! Core of the `svg-text-reveal` widget: attribute resolution, template
//! rendering and the visibility-gated reveal lifecycle.

pub mod config;
pub mod host;
pub mod template;
pub mod widget;

pub use config::{Attributes, WidgetConfig};
pub use host::{HostError, WidgetHost};
pub use template::ShadowDocument;
pub use widget::{Lifecycle, RevealingLabel, VISIBILITY_THRESHOLD, WidgetError};
