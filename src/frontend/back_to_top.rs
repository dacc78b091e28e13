use super::{dom, EffectsContext};
use crate::rate_limit::Throttle;
use crate::scroll::BackToTop;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Event, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BackToTopProps {
    threshold: f64,
    throttle_ms: u32,
    hide_delay_ms: u32,
}

#[function_component(BackToTopButton)]
fn back_to_top_button(props: &BackToTopProps) -> Html {
    let visible = use_state(|| false);
    let displayed = use_state(|| false);

    {
        let visible = visible.clone();
        let displayed = displayed.clone();
        let rule = BackToTop::new(props.threshold);
        let throttle_ms = props.throttle_ms;
        let hide_delay_ms = props.hide_delay_ms;

        use_effect_with((), move |_| {
            let mut throttle = Throttle::new(throttle_ms);
            let on_scroll = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                let Some(win) = window() else {
                    return;
                };
                if !throttle.ready(dom::now_ms(&win)) {
                    return;
                }

                if rule.visible_at(dom::scroll_offset(&win)) {
                    displayed.set(true);
                    visible.set(true);
                    return;
                }

                visible.set(false);
                let displayed = displayed.clone();
                Timeout::new(hide_delay_ms, move || {
                    let still_hidden = window()
                        .map(|win| !rule.visible_at(dom::scroll_offset(&win)))
                        .unwrap_or(true);
                    if still_hidden {
                        displayed.set(false);
                    }
                })
                .forget();
            });

            let win = window();
            if let Some(win) = &win {
                let _ = win.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
            }

            move || {
                if let Some(win) = win {
                    let _ = win
                        .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                }
            }
        });
    }

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(win) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        }
    });

    let style = format!(
        "display: {}; opacity: {};",
        if *displayed { "flex" } else { "none" },
        if *visible { "1" } else { "0" }
    );

    html! {
        <div
            class="fab"
            role="button"
            title="Back to top"
            aria-label="Back to top"
            style={style}
            onclick={onclick}
        >
            {"↑"}
        </div>
    }
}

pub(crate) fn mount(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    let host = context.document.create_element("div")?;
    context.body.append_child(&host)?;

    let props = BackToTopProps {
        threshold: context.config.back_to_top_offset,
        throttle_ms: context.config.scroll_throttle_ms,
        hide_delay_ms: context.config.back_to_top_hide_delay_ms,
    };

    yew::Renderer::<BackToTopButton>::with_root_and_props(host, props).render();
    Ok(())
}
