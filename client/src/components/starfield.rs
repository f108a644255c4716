//! Animated starfield canvas used behind every page.
//!
//! On hydration the component sizes its canvas to the window, runs a
//! `requestAnimationFrame` loop over [`Starfield`], and follows window
//! resizes. Cleanup flips an alive flag; the next frame then removes the
//! resize listener and drops the loop closure.

use leptos::prelude::*;

use crate::util::starfield::StarfieldConfig;
#[cfg(feature = "hydrate")]
use crate::util::starfield::Starfield;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use std::sync::Arc;
#[cfg(feature = "hydrate")]
use std::sync::atomic::{AtomicBool, Ordering};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
fn viewport(window: &web_sys::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn size_canvas(canvas: &web_sys::HtmlCanvasElement, w: f64, h: f64) {
    canvas.set_width(w.max(0.0) as u32);
    canvas.set_height(h.max(0.0) as u32);
}

#[cfg(feature = "hydrate")]
fn draw(ctx: &web_sys::CanvasRenderingContext2d, field: &Starfield) {
    let (w, h) = field.size();
    ctx.clear_rect(0.0, 0.0, w, h);
    let motion = field.motion();
    for star in field.stars() {
        ctx.begin_path();
        if ctx.arc(star.x, star.y, star.radius, 0.0, std::f64::consts::TAU).is_err() {
            continue;
        }
        ctx.set_fill_style_str(&star.fill_style(motion));
        ctx.fill();
    }
}

#[cfg(feature = "hydrate")]
fn start_loop(canvas: web_sys::HtmlCanvasElement, config: StarfieldConfig, alive: Arc<AtomicBool>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
    else {
        log::warn!("starfield: 2d context unavailable");
        return;
    };

    let (w, h) = viewport(&window);
    size_canvas(&canvas, w, h);
    let field = Rc::new(RefCell::new(Starfield::new(config, w, h, js_sys::Date::now().to_bits())));

    let resize_cb = {
        let field = Rc::clone(&field);
        let window = window.clone();
        Closure::<dyn FnMut()>::new(move || {
            let (w, h) = viewport(&window);
            size_canvas(&canvas, w, h);
            field.borrow_mut().resize(w, h);
        })
    };
    if window
        .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("starfield: resize listener not installed");
    }

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let frame_for_cb = Rc::clone(&frame);
    let window_for_cb = window.clone();
    *frame.borrow_mut() = Some(Closure::new(move |_ts: f64| {
        if !alive.load(Ordering::Relaxed) {
            let _ = window_for_cb.remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            frame_for_cb.borrow_mut().take();
            return;
        }
        {
            let mut field = field.borrow_mut();
            draw(&ctx, &field);
            field.step();
        }
        if let Some(cb) = frame_for_cb.borrow().as_ref() {
            let _ = window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }));

    if let Some(cb) = frame.borrow().as_ref() {
        if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_err() {
            log::warn!("starfield: requestAnimationFrame unavailable");
        }
    }
}

/// Full-viewport decorative canvas. `contained` positions it inside its
/// parent (the intro splash) instead of fixed to the window.
#[component]
pub fn StarField(config: StarfieldConfig, #[prop(optional)] contained: bool) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        let alive = Arc::new(AtomicBool::new(true));
        let started = Arc::new(AtomicBool::new(false));
        let alive_for_loop = Arc::clone(&alive);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if started.swap(true, Ordering::Relaxed) {
                return;
            }
            start_loop(canvas, config, Arc::clone(&alive_for_loop));
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }

    view! {
        <canvas
            node_ref=canvas_ref
            class="starfield"
            class:starfield--contained=contained
            aria-hidden="true"
        ></canvas>
    }
}
