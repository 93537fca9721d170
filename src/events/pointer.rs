use super::Listener;
use crate::constants::{EVENT_CLICK, EVENT_POINTER_MOVE, EVENT_RESIZE};
use crate::dom;
use crate::SharedAnimator;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// The three window subscriptions. Dropping this unsubscribes all of them.
pub struct Subscriptions {
    _resize: Listener<dyn FnMut()>,
    _pointer_move: Listener<dyn FnMut(web::MouseEvent)>,
    _click: Listener<dyn FnMut(web::MouseEvent)>,
}

pub fn wire_input_handlers(
    window: &web::Window,
    animator: &SharedAnimator,
) -> anyhow::Result<Subscriptions> {
    Ok(Subscriptions {
        _resize: wire_resize(window, animator)?,
        _pointer_move: wire_pointer_move(window, animator)?,
        _click: wire_click(window, animator)?,
    })
}

fn wire_resize(
    window: &web::Window,
    animator: &SharedAnimator,
) -> anyhow::Result<Listener<dyn FnMut()>> {
    let animator = animator.clone();
    let window_for_size = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::viewport_size(&window_for_size);
        animator.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    Listener::attach(window, EVENT_RESIZE, closure)
}

fn wire_pointer_move(
    window: &web::Window,
    animator: &SharedAnimator,
) -> anyhow::Result<Listener<dyn FnMut(web::MouseEvent)>> {
    let animator = animator.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        animator
            .borrow_mut()
            .pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    Listener::attach(window, EVENT_POINTER_MOVE, closure)
}

fn wire_click(
    window: &web::Window,
    animator: &SharedAnimator,
) -> anyhow::Result<Listener<dyn FnMut(web::MouseEvent)>> {
    let animator = animator.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        log::debug!("[click] blast at ({}, {})", x, y);
        animator.borrow_mut().click(x, y);
    }) as Box<dyn FnMut(_)>);
    Listener::attach(window, EVENT_CLICK, closure)
}
