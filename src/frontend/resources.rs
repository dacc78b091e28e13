use super::{dom, EffectsContext};
use crate::config::LogLevel;
use crate::telemetry::log_event;
use js_sys::Reflect;
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

pub(crate) fn setup(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    if let Some(href) = context.config.preload_stylesheet.as_deref() {
        preload_stylesheet(context, href)?;
    }

    if let Some(url) = context.config.service_worker_url.clone() {
        register_service_worker(context, url);
    }

    Ok(())
}

fn preload_stylesheet(context: &EffectsContext, href: &str) -> Result<(), JsValue> {
    let Some(head) = context.document.head() else {
        return Ok(());
    };

    let link = context.document.create_element("link")?;
    link.set_attribute("rel", "preload")?;
    link.set_attribute("href", href)?;
    link.set_attribute("as", "style")?;
    head.append_child(&link)?;
    Ok(())
}

/// Registration runs in the background; browsers without service workers
/// are skipped quietly.
fn register_service_worker(context: &Rc<EffectsContext>, url: String) {
    let navigator = context.window.navigator();
    let supported = Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        log_event(
            &context.config,
            LogLevel::Debug,
            "service_worker_unsupported",
            json!({}),
        );
        return;
    }

    let registration = navigator.service_worker().register(&url);
    let context = context.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(registration).await {
            Ok(_) => log_event(
                &context.config,
                LogLevel::Debug,
                "service_worker_registered",
                json!({ "url": url }),
            ),
            Err(error) => log_event(
                &context.config,
                LogLevel::Info,
                "service_worker_register_failed",
                json!({ "url": url, "error": dom::describe(&error) }),
            ),
        }
    });
}
