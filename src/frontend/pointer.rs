use super::{dom, EffectsContext};
use crate::interactions::{
    ripple_geometry, tooltip_anchor, trail_dot_origin, CARD_HOVER_TRANSFORM, CARD_REST_TRANSFORM,
    LINK_HOVER_TRANSFORM, LINK_REST_TRANSFORM,
};
use crate::rate_limit::Throttle;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement, MouseEvent};

const RIPPLE_CSS: &str = "position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.6); \
    transform: scale(0); animation: ripple 0.6s linear; pointer-events: none;";
const TRAIL_CSS: &str = "position: fixed; width: 6px; height: 6px; background: rgba(99, 102, 241, 0.6); \
    border-radius: 50%; pointer-events: none; z-index: 9999; animation: fadeOut 0.5s ease-out forwards;";

pub(crate) fn setup_ripple(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    let context = context.clone();
    let document = context.document.clone();

    dom::listen(&document, "click", move |event: MouseEvent| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        // Clipping <body> or <html> would freeze page scrolling.
        let target_element: &Element = &target;
        let is_root = context
            .document
            .document_element()
            .is_some_and(|root| &root == target_element);
        if target == context.body || is_root {
            return;
        }

        let _ = spawn_ripple(&context, &target, &event);
    })
}

fn spawn_ripple(context: &EffectsContext, target: &HtmlElement, event: &MouseEvent) -> Result<(), JsValue> {
    let geometry = ripple_geometry(
        dom::bounds_of(target),
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    );

    let ripple = dom::styled_div(&context.document, &format!("{RIPPLE_CSS} {}", geometry.style()))?;

    let target_style = target.style();
    target_style.set_property("position", "relative")?;
    target_style.set_property("overflow", "hidden")?;
    target.append_child(&ripple)?;

    dom::remove_after(ripple.into(), context.config.ripple_duration_ms);
    Ok(())
}

pub(crate) fn setup_mouse_trail(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    let mut throttle = Throttle::new(context.config.mouse_throttle_ms);
    let context = context.clone();
    let document = context.document.clone();

    dom::listen(&document, "mousemove", move |event: MouseEvent| {
        if !throttle.ready(dom::now_ms(&context.window)) {
            return;
        }
        let _ = spawn_trail_dot(&context, &event);
    })
}

fn spawn_trail_dot(context: &EffectsContext, event: &MouseEvent) -> Result<(), JsValue> {
    let (left, top) = trail_dot_origin(f64::from(event.client_x()), f64::from(event.client_y()));
    let dot = dom::styled_div(&context.document, TRAIL_CSS)?;
    dot.style().set_property("left", &format!("{left}px"))?;
    dot.style().set_property("top", &format!("{top}px"))?;
    context.body.append_child(&dot)?;

    dom::remove_after(dot.into(), context.config.trail_duration_ms);
    Ok(())
}

/// Swaps native `title` hints for a styled `.tooltip` shown while hovered.
pub(crate) fn setup_tooltips(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    for element in dom::query_all(&context.document, "[title]")? {
        let Some(text) = element.get_attribute("title") else {
            continue;
        };

        let tooltip = context.document.create_element("div")?;
        tooltip.set_class_name("tooltip");
        tooltip.set_text_content(Some(&text));
        element.remove_attribute("title")?;

        {
            let context = context.clone();
            let tooltip = tooltip.clone();
            let anchor = element.clone();
            dom::listen(&element, "mouseenter", move |_: Event| {
                if context.body.append_child(&tooltip).is_err() {
                    return;
                }
                let (left, top) = tooltip_anchor(dom::bounds_of(&anchor));
                let scroll_x = context.window.scroll_x().unwrap_or(0.0);
                let scroll_y = dom::scroll_offset(&context.window);
                let _ = dom::set_style(&tooltip, "left", &format!("{}px", left + scroll_x));
                let _ = dom::set_style(&tooltip, "top", &format!("{}px", top + scroll_y));
            })?;
        }

        dom::listen(&element, "mouseleave", move |_: Event| tooltip.remove())?;
    }

    Ok(())
}

pub(crate) fn setup_hover(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    for card in dom::query_all(&context.document, ".card")? {
        hover_transform(&card, CARD_HOVER_TRANSFORM, CARD_REST_TRANSFORM)?;
    }

    for link in dom::query_all(&context.document, "a")? {
        hover_transform(&link, LINK_HOVER_TRANSFORM, LINK_REST_TRANSFORM)?;
    }

    Ok(())
}

fn hover_transform(element: &Element, hover: &'static str, rest: &'static str) -> Result<(), JsValue> {
    let target = element.clone();
    dom::listen(element, "mouseenter", move |_: Event| {
        let _ = dom::set_style(&target, "transform", hover);
    })?;

    let target = element.clone();
    dom::listen(element, "mouseleave", move |_: Event| {
        let _ = dom::set_style(&target, "transform", rest);
    })
}
