use crate::interactions::Bounds;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, convert::FromWasmAbi, JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;

    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Attaches a listener for the rest of the page's life.
pub(crate) fn listen<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub(crate) fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub(crate) fn scroll_offset(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub(crate) fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

/// Non-HTML elements (SVG and friends) are left alone.
pub(crate) fn set_style(element: &Element, property: &str, value: &str) -> Result<(), JsValue> {
    match element.dyn_ref::<HtmlElement>() {
        Some(element) => element.style().set_property(property, value),
        None => Ok(()),
    }
}

pub(crate) fn bounds_of(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();

    Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Creates a `div` with inline styles, ready to be appended.
pub(crate) fn styled_div(document: &Document, css: &str) -> Result<HtmlElement, JsValue> {
    let element: HtmlElement = document.create_element("div")?.dyn_into()?;
    element.style().set_css_text(css);
    Ok(element)
}

pub(crate) fn remove_after(element: Element, delay_ms: u32) {
    Timeout::new(delay_ms, move || element.remove()).forget();
}

pub(crate) fn describe(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            error
                .dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{error:?}"))
}
