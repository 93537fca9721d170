#![cfg(target_arch = "wasm32")]
use crate::core::{Animator, FieldConfig, ParticleField, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

pub(crate) type SharedAnimator = Rc<RefCell<Animator<render::CanvasSurface>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("magic-cursor loaded");
    Ok(())
}

/// Change the console log level at runtime ("error" .. "trace", or "off").
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = level
        .parse::<log::LevelFilter>()
        .map_err(|_| JsValue::from_str(&format!("unknown log level: {level}")))?;
    log::set_max_level(filter);
    Ok(())
}

/// Handle to a mounted cursor-trail overlay.
///
/// `mount` creates the overlay canvas, subscribes to window input, and starts
/// the frame loop; `unmount` (or freeing the handle) releases all of it.
#[wasm_bindgen]
pub struct MagicCursor {
    animator: SharedAnimator,
    canvas: web::HtmlCanvasElement,
    subscriptions: Option<events::Subscriptions>,
    frame_loop: Option<frame::FrameLoop>,
}

#[wasm_bindgen]
impl MagicCursor {
    /// Mount the overlay. Pass a seed for a reproducible trail.
    pub fn mount(seed: Option<u64>) -> Result<MagicCursor, JsValue> {
        mount_overlay(seed).map_err(|e| {
            log::error!("mount error: {:?}", e);
            JsValue::from_str(&format!("{e:#}"))
        })
    }

    /// Stop the loop, unsubscribe input, and remove the canvas. Idempotent.
    pub fn unmount(&mut self) {
        // Listeners first so no callback can run against a stopped animator.
        self.subscriptions.take();
        if let Some(mut frame_loop) = self.frame_loop.take() {
            frame_loop.stop();
        }
        if self.animator.borrow_mut().unmount() {
            overlay::remove(&self.canvas);
        }
    }

    #[wasm_bindgen(getter = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.animator.borrow().is_mounted()
    }

    #[wasm_bindgen(getter = blobCount)]
    pub fn blob_count(&self) -> usize {
        self.animator.borrow().field().live_count()
    }
}

impl Drop for MagicCursor {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn mount_overlay(seed: Option<u64>) -> anyhow::Result<MagicCursor> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    let canvas = overlay::create(&document)?;
    let surface = match render::CanvasSurface::new(canvas.clone()) {
        Ok(s) => s,
        Err(e) => {
            overlay::remove(&canvas);
            return Err(e);
        }
    };

    let (width, height) = dom::viewport_size(&window);
    let viewport = Viewport::new(width, height);
    let config = FieldConfig::default();
    let field = match seed {
        Some(seed) => ParticleField::with_seed(config, viewport, seed),
        None => ParticleField::from_entropy(config, viewport),
    };
    let animator: SharedAnimator = Rc::new(RefCell::new(Animator::new(field, surface)));
    animator.borrow_mut().mount(width, height);

    // Build the handle early so a failure below still tears down via Drop.
    let mut handle = MagicCursor {
        animator: animator.clone(),
        canvas,
        subscriptions: None,
        frame_loop: None,
    };
    handle.subscriptions = Some(events::wire_input_handlers(&window, &animator)?);

    let animator_tick = animator.clone();
    handle.frame_loop = Some(frame::FrameLoop::start(&window, move || {
        animator_tick.borrow_mut().tick();
    })?);

    Ok(handle)
}
