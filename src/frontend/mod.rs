mod back_to_top;
mod backdrop;
mod dom;
mod images;
mod navigation;
mod overlay;
mod pointer;
mod resources;
mod reveal;
mod styles;
mod theme;
mod typing;

use crate::config::{EffectsConfig, LogLevel};
use crate::telemetry::log_event;
use js_sys::Reflect;
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Document, HtmlElement, Window};

const CONFIG_ELEMENT_ID: &str = "effects-config";

/// Everything a feature needs from the page, built once and shared.
pub(crate) struct EffectsContext {
    pub(crate) config: EffectsConfig,
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) body: HtmlElement,
}

impl EffectsContext {
    fn from_page() -> Option<Self> {
        let window = window()?;
        let document = window.document()?;
        let body = document.body()?;
        let config = read_config(&document);

        Some(Self {
            config,
            window,
            document,
            body,
        })
    }
}

type Setup = fn(&Rc<EffectsContext>) -> Result<(), JsValue>;

const FEATURES: &[(&str, Setup)] = &[
    ("styles", styles::inject),
    ("loading_overlay", overlay::mount),
    ("smooth_anchors", navigation::setup_smooth_anchors),
    ("tooltips", pointer::setup_tooltips),
    ("back_to_top", back_to_top::mount),
    ("nav_scroll", navigation::setup_nav_marker),
    ("viewport_unit", navigation::setup_viewport_unit),
    ("shortcuts", navigation::setup_shortcuts),
    ("mouse_trail", pointer::setup_mouse_trail),
    ("ripple", pointer::setup_ripple),
    ("scroll_reveal", reveal::setup),
    ("theme", theme::setup),
    ("particles", backdrop::setup),
    ("typing", typing::setup),
    ("progress_bars", images::setup_progress_bars),
    ("parallax", navigation::setup_parallax),
    ("hover", pointer::setup_hover),
    ("lazy_images", images::setup_lazy_loading),
    ("resources", resources::setup),
];

pub fn run() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    let still_parsing = Reflect::get(&document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "loading");

    if !still_parsing {
        start();
        return;
    }

    let on_ready = Closure::once_into_js(start);
    if document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .is_err()
    {
        start();
    }
}

fn start() {
    let Some(context) = EffectsContext::from_page() else {
        return;
    };
    let context = Rc::new(context);
    let mut failed = 0;

    for (feature, setup) in FEATURES {
        if let Err(error) = setup(&context) {
            failed += 1;
            log_event(
                &context.config,
                LogLevel::Info,
                "feature_init_failed",
                json!({ "feature": feature, "error": dom::describe(&error) }),
            );
        }
    }

    log_event(
        &context.config,
        LogLevel::Info,
        "effects_initialized",
        json!({ "features": FEATURES.len(), "failed": failed }),
    );
}

fn read_config(document: &Document) -> EffectsConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return EffectsConfig::default();
    };

    EffectsConfig::from_json(&raw).unwrap_or_else(|error| {
        let config = EffectsConfig::default();
        log_event(
            &config,
            LogLevel::Info,
            "config_rejected",
            json!({ "error": error.to_string() }),
        );
        config
    })
}
