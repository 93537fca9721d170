use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Closure<dyn FnMut()>;

/// A `requestAnimationFrame` loop that can be stopped.
///
/// The callback re-requests itself each frame. `stop` (or dropping the loop)
/// cancels the pending request and breaks the closure's self-reference; a
/// frame that was already queued by the browser sees `running == false` and
/// does nothing.
pub struct FrameLoop {
    window: web::Window,
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<TickClosure>>>,
}

impl FrameLoop {
    pub fn start(
        window: &web::Window,
        mut on_frame: impl FnMut() + 'static,
    ) -> anyhow::Result<Self> {
        let running = Rc::new(Cell::new(true));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));

        let running_tick = running.clone();
        let pending_tick = pending.clone();
        let tick_clone = tick.clone();
        let window_tick = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            on_frame();
            if let Some(cb) = tick_clone.borrow().as_ref() {
                match window_tick.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => pending_tick.set(Some(id)),
                    Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
                }
            }
        }) as Box<dyn FnMut()>));

        let first = match tick.borrow().as_ref() {
            Some(cb) => window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?,
            None => anyhow::bail!("frame closure missing"),
        };
        pending.set(Some(first));

        Ok(Self {
            window: window.clone(),
            running,
            pending,
            tick,
        })
    }

    /// Must not be called from inside the frame callback itself.
    pub fn stop(&mut self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("[frame] cancelAnimationFrame failed: {:?}", e);
            }
        }
        self.tick.borrow_mut().take();
        log::debug!("[frame] loop stopped");
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
