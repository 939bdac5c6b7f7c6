// requestAnimationFrame driver with an explicit stop handle.
// The handle is plain Rc/Cell state so the tick logic runs on the host too.

use crate::error::{Result, SiteError};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

#[derive(Clone, Debug)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    frames: Rc<Cell<u64>>,
}

impl Default for LoopHandle {
    fn default() -> Self {
        LoopHandle::new()
    }
}

impl LoopHandle {
    pub fn new() -> Self {
        LoopHandle {
            running: Rc::new(Cell::new(true)),
            frames: Rc::new(Cell::new(0)),
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn frames(&self) -> u64 {
        self.frames.get()
    }

    // Runs `step` unless stopped. Returns whether another frame should be requested.
    pub fn tick<F: FnMut(f64)>(&self, timestamp: f64, step: &mut F) -> bool {
        if !self.running.get() {
            return false;
        }
        step(timestamp);
        self.frames.set(self.frames.get() + 1);
        self.running.get()
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> Result<i32> {
    let win = window().ok_or(SiteError::NoWindow)?;
    Ok(win.request_animation_frame(callback.as_ref().unchecked_ref())?)
}

// Calls `step` once per display refresh until `handle` is stopped
pub fn start<F>(handle: LoopHandle, mut step: F) -> Result<()>
where
    F: FnMut(f64) + 'static,
{
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if handle.tick(ts, &mut step) {
            if let Some(callback) = f.borrow().as_ref() {
                let _ = request_frame(callback);
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(callback) = g.borrow().as_ref() {
        request_frame(callback)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_until_stopped() {
        let handle = LoopHandle::new();
        let mut seen = Vec::new();
        let mut step = |ts: f64| seen.push(ts);
        let mut ts = 0.0;
        while handle.tick(ts, &mut step) {
            ts += 16.0;
            if handle.frames() == 3 {
                handle.stop();
            }
        }
        assert_eq!(seen, vec![0.0, 16.0, 32.0]);
        assert_eq!(handle.frames(), 3);
    }

    #[test]
    fn step_can_stop_its_own_loop() {
        let handle = LoopHandle::new();
        let inner = handle.clone();
        let mut step = move |_ts: f64| inner.stop();
        assert!(!handle.tick(0.0, &mut step));
        assert_eq!(handle.frames(), 1);
        assert!(!handle.is_running());
    }

    #[test]
    fn stopped_handle_skips_step() {
        let handle = LoopHandle::new();
        handle.stop();
        let mut calls = 0;
        assert!(!handle.tick(0.0, &mut |_ts: f64| calls += 1));
        assert_eq!(calls, 0);
        assert_eq!(handle.frames(), 0);
    }
}
