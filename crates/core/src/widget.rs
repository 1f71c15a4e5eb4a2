//! The reveal widget's lifecycle.
//!
//! [`RevealingLabel`] holds the element's attributes and visibility state and
//! reacts to the host's callbacks: mount, unmount, attribute change, resize
//! and visibility entries. Every callback runs to completion synchronously;
//! the host delivers them one at a time, in order.

use svg_reveal_protocol::{AttributeName, IntersectionEntry};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::config::{Attributes, WidgetConfig};
use crate::host::{HostError, WidgetHost};
use crate::template::{self, ANIMATE_CLASS};

/// Fraction of the element that must be in view before the reveal starts.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Host(#[from] HostError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Constructed but never mounted.
    Detached,
    Mounted,
    Unmounted,
}

pub struct RevealingLabel<H: WidgetHost> {
    host: H,
    attributes: Attributes,
    lifecycle: Lifecycle,
    config: WidgetConfig,
    has_animated: bool,
    /// Whether the host is currently delivering visibility entries.
    observing: bool,
    render_count: u64,
}

impl<H: WidgetHost> RevealingLabel<H> {
    pub fn new(host: H) -> Self {
        Self::with_attributes(host, Attributes::new())
    }

    /// A widget whose element already carries `attributes` before mounting.
    pub fn with_attributes(host: H, attributes: Attributes) -> Self {
        let config = WidgetConfig::resolve(&attributes);
        Self {
            host,
            attributes,
            lifecycle: Lifecycle::Detached,
            config,
            has_animated: false,
            observing: false,
            render_count: 0,
        }
    }

    /// Names the host should report changes for.
    pub fn observed_attributes() -> [AttributeName; 9] {
        AttributeName::OBSERVED
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Config of the most recent render (or of the initial attributes, before
    /// the first render).
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, name: AttributeName) -> Option<&str> {
        self.attributes.get(&name).map(String::as_str)
    }

    /// Whether the reveal has fired since the last render.
    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// The element was attached: render, then listen for resizes and start
    /// observing visibility. Mounting an already mounted widget does nothing.
    pub fn mount(&mut self) -> Result<(), WidgetError> {
        if self.lifecycle == Lifecycle::Mounted {
            debug!("mount ignored, already mounted");
            return Ok(());
        }
        self.render()?;
        self.host.listen_resize()?;
        if let Err(err) = self.host.observe_visibility(VISIBILITY_THRESHOLD) {
            // Stay unmounted with nothing left subscribed.
            if let Err(release_err) = self.host.release_resize() {
                warn!(error = %release_err, "failed to release resize listener");
            }
            return Err(err.into());
        }
        self.observing = true;
        self.lifecycle = Lifecycle::Mounted;
        info!(renders = self.render_count, "mounted");
        Ok(())
    }

    /// The element was detached: release the resize listener and the
    /// visibility observer. Nothing renders or animates afterwards until the
    /// next mount.
    pub fn unmount(&mut self) -> Result<(), WidgetError> {
        if self.lifecycle != Lifecycle::Mounted {
            debug!(lifecycle = ?self.lifecycle, "unmount ignored, not mounted");
            return Ok(());
        }
        self.lifecycle = Lifecycle::Unmounted;
        self.observing = false;
        self.host.release_resize()?;
        self.host.disconnect_visibility()?;
        info!("unmounted");
        Ok(())
    }

    /// An attribute changed from `old` to `new` (`None` meaning absent).
    ///
    /// Unrecognized names and unchanged values are ignored. While mounted, a
    /// recognized change re-renders. Returns whether a render happened.
    pub fn attribute_changed(
        &mut self,
        name: &str,
        old: Option<&str>,
        new: Option<&str>,
    ) -> Result<bool, WidgetError> {
        let Ok(name) = name.parse::<AttributeName>() else {
            trace!(name, "ignoring unobserved attribute");
            return Ok(false);
        };
        match new {
            Some(value) => {
                self.attributes.insert(name, value.to_string());
            }
            None => {
                self.attributes.remove(&name);
            }
        }
        if old == new {
            return Ok(false);
        }
        debug!(attribute = %name, ?old, ?new, "attribute changed");
        self.rerender()
    }

    /// Set an attribute, reporting the change against the current value.
    pub fn set_attribute(
        &mut self,
        name: AttributeName,
        value: impl Into<String>,
    ) -> Result<bool, WidgetError> {
        let value = value.into();
        let old = self.attributes.get(&name).cloned();
        self.attribute_changed(name.as_str(), old.as_deref(), Some(value.as_str()))
    }

    pub fn remove_attribute(&mut self, name: AttributeName) -> Result<bool, WidgetError> {
        let old = self.attributes.get(&name).cloned();
        self.attribute_changed(name.as_str(), old.as_deref(), None)
    }

    /// The viewport was resized. Re-renders while mounted.
    pub fn resized(&mut self) -> Result<bool, WidgetError> {
        self.rerender()
    }

    /// Visibility entries from the host's observer.
    ///
    /// The first entry at or above [`VISIBILITY_THRESHOLD`] since the last
    /// render starts the reveal and stops observation. Returns whether the
    /// reveal started during this call.
    pub fn intersected(&mut self, entries: &[IntersectionEntry]) -> Result<bool, WidgetError> {
        if self.lifecycle != Lifecycle::Mounted || !self.observing {
            trace!(lifecycle = ?self.lifecycle, "visibility entries ignored");
            return Ok(false);
        }
        let Some(entry) = entries
            .iter()
            .find(|entry| entry.is_visible_at(VISIBILITY_THRESHOLD))
        else {
            return Ok(false);
        };
        if self.has_animated {
            return Ok(false);
        }

        self.has_animated = true;
        self.host.add_class(ANIMATE_CLASS)?;
        self.host.unobserve_visibility()?;
        self.observing = false;
        info!(ratio = entry.intersection_ratio, "reveal started");
        Ok(true)
    }

    fn rerender(&mut self) -> Result<bool, WidgetError> {
        if self.lifecycle != Lifecycle::Mounted {
            trace!(lifecycle = ?self.lifecycle, "render deferred until mount");
            return Ok(false);
        }
        self.render()?;
        // The reveal unobserves the element; a fresh render must be able to
        // reveal again, so observation resumes on the existing observer.
        if !self.observing {
            self.host.observe_visibility(VISIBILITY_THRESHOLD)?;
            self.observing = true;
        }
        Ok(true)
    }

    fn render(&mut self) -> Result<(), WidgetError> {
        let config = WidgetConfig::resolve(&self.attributes);
        self.has_animated = false;
        let document = template::render(&config);
        self.host.replace_content(&document)?;
        self.config = config;
        self.render_count += 1;
        debug!(render = self.render_count, text = %self.config.text, "rendered");
        Ok(())
    }
}
