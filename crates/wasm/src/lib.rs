//! WASM bridge for the `svg-text-reveal` element.
//!
//! The page registers a thin custom element class that forwards its lifecycle
//! callbacks to a [`RevealElement`]. The element hands over a host object that
//! owns the shadow root, the `IntersectionObserver` and the window `resize`
//! listener; the widget drives them through it.

use js_sys::{Array, Function, Object, Reflect};
use svg_reveal_core::template::reveal_animation;
use svg_reveal_core::{
    HostError, RevealingLabel, ShadowDocument, WidgetError, WidgetHost, VISIBILITY_THRESHOLD,
};
use svg_reveal_protocol::{ELEMENT_NAME, IntersectionEntry};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Adapts the JS host object handed to [`RevealElement::new`] to the widget's
/// host trait.
///
/// The object exposes `replaceContent(html)`, `addClass(name)`,
/// `observe(threshold)`, `unobserve()`, `disconnect()`, `listenResize()` and
/// `releaseResize()`. A missing method or a thrown exception becomes a
/// [`HostError`].
struct JsHost {
    inner: Object,
}

impl JsHost {
    fn call(&self, method: &str, args: &[JsValue]) -> Result<(), HostError> {
        let function = Reflect::get(&self.inner, &JsValue::from_str(method))
            .map_err(|e| host_error(&e))?
            .dyn_into::<Function>()
            .map_err(|_| HostError::new(format!("host has no `{method}` method")))?;
        let this: &JsValue = self.inner.as_ref();
        let result = match args {
            [] => function.call0(this),
            [arg] => function.call1(this, arg),
            _ => function.apply(this, &args.iter().collect::<Array>()),
        };
        result.map(drop).map_err(|e| host_error(&e))
    }
}

fn host_error(err: &JsValue) -> HostError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"));
    HostError::new(message)
}

impl WidgetHost for JsHost {
    fn replace_content(&mut self, document: &ShadowDocument) -> Result<(), HostError> {
        self.call("replaceContent", &[JsValue::from_str(&document.to_html())])
    }

    fn add_class(&mut self, class: &str) -> Result<(), HostError> {
        self.call("addClass", &[JsValue::from_str(class)])
    }

    fn observe_visibility(&mut self, threshold: f64) -> Result<(), HostError> {
        self.call("observe", &[JsValue::from_f64(threshold)])
    }

    fn unobserve_visibility(&mut self) -> Result<(), HostError> {
        self.call("unobserve", &[])
    }

    fn disconnect_visibility(&mut self) -> Result<(), HostError> {
        self.call("disconnect", &[])
    }

    fn listen_resize(&mut self) -> Result<(), HostError> {
        self.call("listenResize", &[])
    }

    fn release_resize(&mut self) -> Result<(), HostError> {
        self.call("releaseResize", &[])
    }
}

fn js_error(err: WidgetError) -> JsError {
    tracing::warn!(error = %err, "widget callback failed");
    JsError::new(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Tag name to register the element under.
#[wasm_bindgen(js_name = elementName)]
pub fn element_name() -> String {
    ELEMENT_NAME.to_string()
}

/// Visibility threshold to construct the `IntersectionObserver` with.
#[wasm_bindgen(js_name = visibilityThreshold)]
pub fn visibility_threshold() -> f64 {
    VISIBILITY_THRESHOLD
}

/// One `svg-text-reveal` element.
#[wasm_bindgen]
pub struct RevealElement {
    widget: RevealingLabel<JsHost>,
}

#[wasm_bindgen]
impl RevealElement {
    #[wasm_bindgen(constructor)]
    pub fn new(host: Object) -> RevealElement {
        RevealElement {
            widget: RevealingLabel::new(JsHost { inner: host }),
        }
    }

    /// Attribute names for the element class's `observedAttributes`.
    #[wasm_bindgen(js_name = observedAttributes)]
    pub fn observed_attributes() -> Vec<String> {
        RevealingLabel::<JsHost>::observed_attributes()
            .iter()
            .map(|name| name.as_str().to_string())
            .collect()
    }

    /// `connectedCallback`.
    pub fn connected(&mut self) -> Result<(), JsError> {
        self.widget.mount().map_err(js_error)
    }

    /// `disconnectedCallback`.
    pub fn disconnected(&mut self) -> Result<(), JsError> {
        self.widget.unmount().map_err(js_error)
    }

    /// `attributeChangedCallback`. Returns whether the element re-rendered.
    #[wasm_bindgen(js_name = attributeChanged)]
    #[allow(clippy::needless_pass_by_value)]
    pub fn attribute_changed(
        &mut self,
        name: &str,
        old_value: Option<String>,
        new_value: Option<String>,
    ) -> Result<bool, JsError> {
        self.widget
            .attribute_changed(name, old_value.as_deref(), new_value.as_deref())
            .map_err(js_error)
    }

    /// Window `resize` handler. Returns whether the element re-rendered.
    pub fn resized(&mut self) -> Result<bool, JsError> {
        self.widget.resized().map_err(js_error)
    }

    /// One `IntersectionObserverEntry`. Returns whether the reveal started.
    pub fn intersected(&mut self, is_intersecting: bool, ratio: f64) -> Result<bool, JsError> {
        self.widget
            .intersected(&[IntersectionEntry::new(is_intersecting, ratio)])
            .map_err(js_error)
    }

    #[wasm_bindgen(getter, js_name = hasAnimated)]
    pub fn has_animated(&self) -> bool {
        self.widget.has_animated()
    }

    /// Resolved config of the last render, as JSON.
    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> Result<String, JsError> {
        serde_json::to_string(self.widget.config()).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Reveal keyframes of the last render, as JSON.
    #[wasm_bindgen(js_name = animationJson)]
    pub fn animation_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&reveal_animation(self.widget.config()))
            .map_err(|e| JsError::new(&e.to_string()))
    }
}
