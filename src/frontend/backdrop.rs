use super::{dom, EffectsContext};
use crate::particles::{ParticleField, RandomSource, FULL_TURN};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement};

const CANVAS_ID: &str = "particle-canvas";
const CANVAS_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
    pointer-events: none; z-index: -1; opacity: 0.6;";

struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub(crate) fn setup(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    let canvas: HtmlCanvasElement = context.document.create_element("canvas")?.dyn_into()?;
    canvas.set_id(CANVAS_ID);
    canvas.style().set_css_text(CANVAS_CSS);
    context.body.append_child(&canvas)?;

    let Some(pen) = canvas
        .get_context("2d")?
        .and_then(|object| object.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        canvas.remove();
        return Ok(());
    };

    let (width, height) = dom::viewport_size(&context.window);
    fit_canvas(&canvas, width, height);

    let field = Rc::new(RefCell::new(ParticleField::new(width, height)));
    field
        .borrow_mut()
        .populate(context.config.particle_count, &mut JsRandom);

    {
        let field = field.clone();
        let window = context.window.clone();
        dom::listen(&context.window, "resize", move |_: Event| {
            let (width, height) = dom::viewport_size(&window);
            fit_canvas(&canvas, width, height);
            field.borrow_mut().resize(width, height);
        })?;
    }

    let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let frame: FrameCallback = Rc::new(RefCell::new(None));

    {
        let next = frame.clone();
        let frame_id = frame_id.clone();
        let window = context.window.clone();
        let link_distance = context.config.link_distance;
        let link_alpha = context.config.link_alpha;

        *frame.borrow_mut() = Some(Closure::new(move || {
            {
                let mut field = field.borrow_mut();
                field.step();
                if draw(&pen, &field, link_distance, link_alpha).is_err() {
                    return;
                }
            }

            if let Some(callback) = next.borrow().as_ref() {
                frame_id.set(
                    window
                        .request_animation_frame(callback.as_ref().unchecked_ref())
                        .ok(),
                );
            }
        }));
    }

    if let Some(callback) = frame.borrow().as_ref() {
        frame_id.set(Some(
            context
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())?,
        ));
    }

    let window = context.window.clone();
    dom::listen(&context.window, "beforeunload", move |_: Event| {
        if let Some(id) = frame_id.take() {
            let _ = window.cancel_animation_frame(id);
        }
        frame.borrow_mut().take();
    })
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

fn draw(
    pen: &CanvasRenderingContext2d,
    field: &ParticleField,
    link_distance: f64,
    link_alpha: f64,
) -> Result<(), JsValue> {
    let (width, height) = field.bounds();
    pen.clear_rect(0.0, 0.0, width, height);

    for particle in field.particles() {
        pen.begin_path();
        pen.arc(particle.x, particle.y, particle.size, 0.0, FULL_TURN)?;
        pen.set_fill_style_str(&particle.fill_style());
        pen.set_global_alpha(particle.opacity);
        pen.fill();
    }

    pen.set_global_alpha(1.0);
    pen.set_line_width(1.0);

    let particles = field.particles();
    for link in field.links(link_distance) {
        let (from, to) = (&particles[link.from], &particles[link.to]);
        pen.begin_path();
        pen.move_to(from.x, from.y);
        pen.line_to(to.x, to.y);
        pen.set_stroke_style_str(&format!(
            "rgba(255, 255, 255, {})",
            link_alpha * link.strength
        ));
        pen.stroke();
    }

    Ok(())
}
