//! The embedding environment, as seen by the widget.
//!
//! A browser shell implements [`WidgetHost`] over a shadow root, an
//! `IntersectionObserver` and a window `resize` listener. Tests and the CLI
//! implement it in memory.

use thiserror::Error;

use crate::template::ShadowDocument;

/// A host collaborator failed to carry out a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("host: {0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

pub trait WidgetHost {
    /// Swap the isolated scope's entire content for `document`. Whatever was
    /// rendered before, including a running animation, is discarded.
    fn replace_content(&mut self, document: &ShadowDocument) -> Result<(), HostError>;

    /// Add `class` to the rendered text element.
    fn add_class(&mut self, class: &str) -> Result<(), HostError>;

    /// Start delivering visibility entries for the element whenever it
    /// crosses `threshold`.
    fn observe_visibility(&mut self, threshold: f64) -> Result<(), HostError>;

    /// Stop delivering visibility entries for the element. The observer
    /// itself stays alive and may observe again.
    fn unobserve_visibility(&mut self) -> Result<(), HostError>;

    /// Tear down the visibility observer.
    fn disconnect_visibility(&mut self) -> Result<(), HostError>;

    fn listen_resize(&mut self) -> Result<(), HostError>;

    fn release_resize(&mut self) -> Result<(), HostError>;
}

impl<H: WidgetHost + ?Sized> WidgetHost for &mut H {
    fn replace_content(&mut self, document: &ShadowDocument) -> Result<(), HostError> {
        (**self).replace_content(document)
    }

    fn add_class(&mut self, class: &str) -> Result<(), HostError> {
        (**self).add_class(class)
    }

    fn observe_visibility(&mut self, threshold: f64) -> Result<(), HostError> {
        (**self).observe_visibility(threshold)
    }

    fn unobserve_visibility(&mut self) -> Result<(), HostError> {
        (**self).unobserve_visibility()
    }

    fn disconnect_visibility(&mut self) -> Result<(), HostError> {
        (**self).disconnect_visibility()
    }

    fn listen_resize(&mut self) -> Result<(), HostError> {
        (**self).listen_resize()
    }

    fn release_resize(&mut self) -> Result<(), HostError> {
        (**self).release_resize()
    }
}
