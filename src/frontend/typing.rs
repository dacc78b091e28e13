use super::{dom, EffectsContext};
use crate::typing::{Typewriter, CURSOR_BORDER};
use gloo_timers::callback::{Interval, Timeout};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsValue;
use web_sys::Element;

const TYPING_SELECTOR: &str = "[data-typing]";

pub(crate) fn setup(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    for element in dom::query_all(&context.document, TYPING_SELECTOR)? {
        let text = element.text_content().unwrap_or_default();
        element.set_text_content(Some(""));
        dom::set_style(&element, "border-right", CURSOR_BORDER)?;

        let interval_ms = context.config.typing_interval_ms;
        Timeout::new(context.config.typing_start_delay_ms, move || {
            start_typing(element, Typewriter::new(text), interval_ms);
        })
        .forget();
    }

    Ok(())
}

fn start_typing(element: Element, mut writer: Typewriter, interval_ms: u32) {
    if advance(&element, &mut writer) {
        return;
    }

    let ticker: Rc<RefCell<Option<Interval>>> = Rc::default();
    let slot = ticker.clone();
    let interval = Interval::new(interval_ms, move || {
        if advance(&element, &mut writer) {
            // An interval cannot be dropped from inside its own tick.
            let slot = slot.clone();
            Timeout::new(0, move || drop(slot.borrow_mut().take())).forget();
        }
    });
    *ticker.borrow_mut() = Some(interval);
}

/// Writes the next prefix; once the text is out the cursor is dropped and
/// `true` is returned.
fn advance(element: &Element, writer: &mut Typewriter) -> bool {
    match writer.tick() {
        Some(visible) => {
            element.set_text_content(Some(visible));
            false
        }
        None => {
            let _ = dom::set_style(element, "border-right", "none");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{window, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn heading_finishes_and_cursor_is_removed() {
        let document = window().and_then(|w| w.document()).expect("document");
        let heading = document.create_element("h1").expect("h1");
        dom::set_style(&heading, "border-right", CURSOR_BORDER).expect("cursor");

        start_typing(heading.clone(), Typewriter::new("Hi!"), 10);
        assert_eq!(heading.text_content().as_deref(), Some("H"));

        TimeoutFuture::new(150).await;
        assert_eq!(heading.text_content().as_deref(), Some("Hi!"));

        let style = heading.dyn_ref::<HtmlElement>().expect("html element").style();
        assert_eq!(
            style.get_property_value("border-right-style").expect("style").as_str(),
            "none"
        );
    }
}
