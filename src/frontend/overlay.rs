use super::EffectsContext;
use crate::loading::{width_style, LoadingProgress};
use gloo_timers::callback::{Interval, Timeout};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use yew::prelude::*;

const LOADING_TEXT: &str = "Loading CS6.302 SSD Course...";

#[derive(Clone, Copy, PartialEq)]
enum OverlayPhase {
    Loading,
    Loaded,
    Fading,
}

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingOverlayProps {
    tick_ms: u32,
    max_increment: f64,
    fade_delay_ms: u32,
    fade_duration_ms: u32,
    on_finished: Callback<()>,
}

#[function_component(LoadingOverlay)]
fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    let percent = use_state(|| 0.0_f64);
    let phase = use_state(|| OverlayPhase::Loading);

    {
        let percent = percent.clone();
        let phase = phase.clone();
        let tick_ms = props.tick_ms;
        let max_increment = props.max_increment;
        let fade_delay_ms = props.fade_delay_ms;
        let fade_duration_ms = props.fade_duration_ms;
        let on_finished = props.on_finished.clone();

        // Each phase owns one timer; leaving the phase drops (cancels) it.
        use_effect_with(*phase, move |current| {
            let mut ticker = None;
            let mut timer = None;

            match current {
                OverlayPhase::Loading => {
                    let mut progress = LoadingProgress::new();
                    ticker = Some(Interval::new(tick_ms, move || {
                        let step = progress.advance(js_sys::Math::random() * max_increment);
                        percent.set(step.percent);
                        if step.completed {
                            phase.set(OverlayPhase::Loaded);
                        }
                    }));
                }
                OverlayPhase::Loaded => {
                    timer = Some(Timeout::new(fade_delay_ms, move || {
                        phase.set(OverlayPhase::Fading)
                    }));
                }
                OverlayPhase::Fading => {
                    timer = Some(Timeout::new(fade_duration_ms, move || on_finished.emit(())));
                }
            }

            move || {
                drop(ticker);
                drop(timer);
            }
        });
    }

    let opacity = match *phase {
        OverlayPhase::Loading | OverlayPhase::Loaded => "1",
        OverlayPhase::Fading => "0",
    };

    html! {
        <div id="loading-screen" style={format!("opacity: {opacity};")}>
            <div class="loader-container">
                <div class="loader-spinner">
                    <div class="spinner-ring"></div>
                    <div class="spinner-ring"></div>
                    <div class="spinner-ring"></div>
                </div>
                <div class="loader-text">{LOADING_TEXT}</div>
                <div class="loader-progress">
                    <div class="progress-bar">
                        <div class="progress-fill" style={width_style(*percent)}></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

pub(crate) fn mount(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    let host = context.document.create_element("div")?;
    context.body.append_child(&host)?;

    let on_finished = {
        let host = host.clone();
        Callback::from(move |_| host.remove())
    };
    let config = &context.config;
    let props = LoadingOverlayProps {
        tick_ms: config.loading_tick_ms,
        max_increment: config.loading_max_increment,
        fade_delay_ms: config.loading_fade_delay_ms,
        fade_duration_ms: config.loading_fade_duration_ms,
        on_finished,
    };

    yew::Renderer::<LoadingOverlay>::with_root_and_props(host, props).render();
    Ok(())
}
