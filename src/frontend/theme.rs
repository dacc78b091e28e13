use super::{dom, EffectsContext};
use crate::config::LogLevel;
use crate::telemetry::log_event;
use crate::theme::{Theme, ThemeStore, ThemeToggle, DARK_THEME_CLASS, THEME_KEY};
use serde_json::json;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsValue;
use web_sys::{window, Element, Event, HtmlElement, Storage};

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// `localStorage` under the `theme` key. Unavailable storage reads as
/// nothing and swallows writes.
pub(crate) struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(THEME_KEY).ok().flatten()
    }

    fn save(&self, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(THEME_KEY, value);
        }
    }
}

fn apply_theme(body: &HtmlElement, control: &Element, theme: Theme) -> Result<(), JsValue> {
    body.class_list()
        .toggle_with_force(DARK_THEME_CLASS, theme.is_dark())?;
    control.set_text_content(Some(theme.icon()));
    Ok(())
}

pub(crate) fn setup(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    let Some(control) = context.document.query_selector(".theme-toggle")? else {
        return Ok(());
    };

    let toggle = ThemeToggle::restore(&LocalThemeStore);
    apply_theme(&context.body, &control, toggle.current())?;
    let toggle = RefCell::new(toggle);

    let context = context.clone();
    let target = control.clone();
    dom::listen(&control, "click", move |_: Event| {
        let next = toggle.borrow_mut().toggle(&LocalThemeStore);

        if let Err(error) = apply_theme(&context.body, &target, next) {
            log_event(
                &context.config,
                LogLevel::Info,
                "theme_apply_failed",
                json!({ "error": dom::describe(&error) }),
            );
            return;
        }

        log_event(
            &context.config,
            LogLevel::Debug,
            "theme_toggled",
            json!({ "theme": next.as_str() }),
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_store_round_trips_preference() {
        let store = LocalThemeStore;

        store.save("dark");
        assert_eq!(store.load().as_deref(), Some("dark"));
        assert_eq!(ThemeToggle::restore(&store).current(), Theme::Dark);

        store.save("light");
        assert_eq!(ThemeToggle::restore(&store).current(), Theme::Light);
    }

    #[wasm_bindgen_test]
    fn double_toggle_restores_body_class_and_stored_value() {
        let document = window().and_then(|w| w.document()).expect("document");
        let body = document.body().expect("body");
        let control = document.create_element("button").expect("button");
        let store = LocalThemeStore;
        store.save("light");

        let mut toggle = ThemeToggle::restore(&store);
        apply_theme(&body, &control, toggle.toggle(&store)).expect("apply dark");
        assert!(body.class_list().contains(DARK_THEME_CLASS));
        assert_eq!(control.text_content().as_deref(), Some("☀️"));

        apply_theme(&body, &control, toggle.toggle(&store)).expect("apply light");
        assert!(!body.class_list().contains(DARK_THEME_CLASS));
        assert_eq!(store.load().as_deref(), Some("light"));
    }
}
