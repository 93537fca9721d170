use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

mod pointer;

pub use pointer::{wire_input_handlers, Subscriptions};

/// An event listener that is removed again when dropped.
///
/// Owns the closure, so the callback cannot outlive its registration.
pub struct Listener<T: ?Sized> {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<T>,
}

impl<T: ?Sized> Listener<T> {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        closure: Closure<T>,
    ) -> anyhow::Result<Self> {
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("addEventListener({}): {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl<T: ?Sized> Drop for Listener<T> {
    fn drop(&mut self) {
        let callback: &js_sys::Function = self.closure.as_ref().unchecked_ref();
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, callback)
        {
            log::warn!("[events] removeEventListener({}) failed: {:?}", self.event, e);
        }
    }
}
