//! In-memory host for one-shot rendering, and the standalone preview page.

use svg_reveal_core::template::{TEXT_CLASS, escape_xml};
use svg_reveal_core::{HostError, ShadowDocument, WidgetConfig, WidgetHost};
use svg_reveal_protocol::ELEMENT_NAME;

/// Holds the shadow root's content as a string. Visibility and resize
/// subscriptions are accepted and never fire.
#[derive(Debug, Default)]
pub struct CaptureHost {
    shadow_html: String,
}

impl CaptureHost {
    pub fn shadow_html(&self) -> &str {
        &self.shadow_html
    }
}

impl WidgetHost for CaptureHost {
    fn replace_content(&mut self, document: &ShadowDocument) -> Result<(), HostError> {
        self.shadow_html = document.to_html();
        Ok(())
    }

    fn add_class(&mut self, class: &str) -> Result<(), HostError> {
        let from = format!(r#"class="{TEXT_CLASS}""#);
        if !self.shadow_html.contains(&from) {
            return Err(HostError::new("no text element to add a class to"));
        }
        let to = format!(r#"class="{TEXT_CLASS} {class}""#);
        self.shadow_html = self.shadow_html.replacen(&from, &to, 1);
        Ok(())
    }

    fn observe_visibility(&mut self, _threshold: f64) -> Result<(), HostError> {
        Ok(())
    }

    fn unobserve_visibility(&mut self) -> Result<(), HostError> {
        Ok(())
    }

    fn disconnect_visibility(&mut self) -> Result<(), HostError> {
        Ok(())
    }

    fn listen_resize(&mut self) -> Result<(), HostError> {
        Ok(())
    }

    fn release_resize(&mut self) -> Result<(), HostError> {
        Ok(())
    }
}

/// A standalone HTML page embedding the element with a declarative shadow
/// root, so the scoped styles apply without any script.
pub fn page(config: &WidgetConfig, shadow_html: &str) -> String {
    let title = escape_xml(&config.text);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>body {{ margin: 0; }}</style>
</head>
<body>
<{ELEMENT_NAME}>
<template shadowrootmode="open">
{shadow_html}</template>
</{ELEMENT_NAME}>
</body>
</html>
"#
    )
}
