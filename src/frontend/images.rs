use super::{dom, EffectsContext};
use crate::interactions::parse_percentage;
use crate::lazy::{LazyImages, LAZY_CLASS, LAZY_SELECTOR};
use gloo_timers::callback::Timeout;
use js_sys::Array;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

const PROGRESS_BAR_SELECTOR: &str = ".progress-bar";
const PROGRESS_FILL_SELECTOR: &str = ".progress-fill";
const LOADING_SCREEN_SELECTOR: &str = "#loading-screen";

/// Fills page progress bars to their `data-percentage` after a short pause.
/// The loading overlay drives its own bar and is skipped here.
pub(crate) fn setup_progress_bars(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    for bar in dom::query_all(&context.document, PROGRESS_BAR_SELECTOR)? {
        if bar.closest(LOADING_SCREEN_SELECTOR)?.is_some() {
            continue;
        }
        let Some(fill) = bar.query_selector(PROGRESS_FILL_SELECTOR)? else {
            continue;
        };

        let width = format!("{}%", parse_percentage(bar.get_attribute("data-percentage")));
        Timeout::new(context.config.progress_bar_delay_ms, move || {
            let _ = dom::set_style(&fill, "width", &width);
        })
        .forget();
    }

    Ok(())
}

pub(crate) fn setup_lazy_loading(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    let images = dom::query_all(&context.document, LAZY_SELECTOR)?;
    if images.is_empty() {
        return Ok(());
    }

    let mut pending = LazyImages::new();
    for image in &images {
        pending.register(image.get_attribute("data-src").unwrap_or_default());
    }

    let observed = images.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                let Some(src) = observed
                    .iter()
                    .position(|image| *image == target)
                    .and_then(|index| u32::try_from(index).ok())
                    .and_then(|id| pending.on_intersect(id))
                else {
                    continue;
                };

                let _ = target.set_attribute("src", &src);
                let _ = target.class_list().remove_1(LAZY_CLASS);
                observer.unobserve(&target);
            }
        },
    );

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    for image in &images {
        observer.observe(image);
    }

    Ok(())
}
