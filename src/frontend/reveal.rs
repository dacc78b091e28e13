use super::{dom, EffectsContext};
use crate::scroll::{
    Reveal, RevealKind, RevealTracker, ANIMATED_CLASS, ENTRANCE_ANIMATION, OBSERVED_CLASS,
    REVEAL_SELECTOR,
};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub(crate) fn setup(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    let elements = dom::query_all(&context.document, REVEAL_SELECTOR)?;
    if elements.is_empty() {
        return Ok(());
    }

    let observed = elements.clone();
    let mut tracker = RevealTracker::new();
    let entrance_duration_ms = context.config.entrance_duration_ms;

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                let Some(id) = observed
                    .iter()
                    .position(|element| *element == target)
                    .and_then(|index| u32::try_from(index).ok())
                else {
                    continue;
                };

                let classes = target.class_list();
                let kind = RevealKind::from_classes(classes.contains("section"), classes.contains("card"));
                if let Some(reveal) = tracker.reveal(id, kind) {
                    let _ = apply_reveal(&target, reveal, entrance_duration_ms);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(context.config.reveal_threshold));
    options.set_root_margin(&context.config.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in &elements {
        element.class_list().add_1(OBSERVED_CLASS)?;
        observer.observe(element);
    }

    Ok(())
}

// Table containers only get the marker class; their row animation stays off.
fn apply_reveal(target: &Element, reveal: Reveal, entrance_duration_ms: u32) -> Result<(), JsValue> {
    if reveal.mark_animated {
        target.class_list().add_1(ANIMATED_CLASS)?;
    }

    if reveal.entrance {
        dom::set_style(target, "animation", ENTRANCE_ANIMATION)?;
        let target = target.clone();
        Timeout::new(entrance_duration_ms, move || {
            let _ = dom::set_style(&target, "animation", "");
        })
        .forget();
    }

    Ok(())
}
