// Soft glow that trails the mouse pointer

use crate::animation::{self, LoopHandle};
use crate::dom;
use crate::error::Result;
use crate::nav::is_mobile_width;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub const CURSOR_EASE: f64 = 0.15;
// Below this distance the glow snaps onto the pointer
const SNAP_DISTANCE: f64 = 0.01;
const GLOW_SIZE: f64 = 300.0;
const GLOW_STYLE: &str = "position: fixed; top: 0; left: 0; width: 300px; height: 300px; \
    border-radius: 50%; pointer-events: none; z-index: 0; \
    background: radial-gradient(circle, rgba(100, 180, 255, 0.12) 0%, rgba(100, 180, 255, 0) 70%); \
    will-change: transform;";

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CursorGlow {
    pub pos: [f64; 2],
    pub target: [f64; 2],
    pub ease: f64,
}

impl CursorGlow {
    pub fn new(pos: [f64; 2]) -> Self {
        CursorGlow {
            pos,
            target: pos,
            ease: CURSOR_EASE,
        }
    }

    pub fn set_target(&mut self, target: [f64; 2]) {
        self.target = target;
    }

    // Moves `ease` of the remaining way toward the target
    pub fn step(&mut self) -> [f64; 2] {
        for axis in 0..2 {
            let remaining = self.target[axis] - self.pos[axis];
            if remaining.abs() < SNAP_DISTANCE {
                self.pos[axis] = self.target[axis];
            } else {
                self.pos[axis] += remaining * self.ease;
            }
        }
        self.pos
    }

    // Resting on the pointer; nothing to redraw
    pub fn is_settled(&self) -> bool {
        self.pos == self.target
    }

    // CSS transform centering the glow on its position
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px)",
            self.pos[0] - GLOW_SIZE / 2.0,
            self.pos[1] - GLOW_SIZE / 2.0
        )
    }
}

pub fn install(window: &Window, document: &Document) -> Result<Option<LoopHandle>> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    if is_mobile_width(width) {
        return Ok(None);
    }

    let glow_el: HtmlElement = document.create_element("div")?.unchecked_into();
    glow_el.set_class_name("cursor-glow");
    glow_el.set_attribute("style", GLOW_STYLE)?;
    dom::body(document)?.append_child(&glow_el)?;

    let glow = Rc::new(RefCell::new(CursorGlow::new([width / 2.0, 0.0])));
    dom::set_style(&glow_el, "transform", &glow.borrow().transform());
    {
        let glow = glow.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let target = [evt.client_x() as f64, evt.client_y() as f64];
            glow.borrow_mut().set_target(target);
        }) as Box<dyn FnMut(_)>);
        document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let handle = LoopHandle::new();
    animation::start(handle.clone(), move |_ts| {
        let mut glow = glow.borrow_mut();
        if glow.is_settled() {
            return;
        }
        glow.step();
        dom::set_style(&glow_el, "transform", &glow.transform());
    })?;
    Ok(Some(handle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eases_toward_target() {
        let mut glow = CursorGlow::new([0.0, 0.0]);
        glow.set_target([100.0, -100.0]);
        assert_eq!(glow.step(), [15.0, -15.0]);
    }

    #[test]
    fn converges_without_overshoot() {
        let mut glow = CursorGlow::new([0.0, 0.0]);
        glow.set_target([240.0, 80.0]);
        let mut last = glow.pos;
        for _ in 0..200 {
            let pos = glow.step();
            assert!(pos[0] >= last[0] && pos[0] <= 240.0);
            assert!(pos[1] >= last[1] && pos[1] <= 80.0);
            last = pos;
        }
        assert_eq!(glow.pos, [240.0, 80.0]);
    }

    #[test]
    fn settles_once_target_is_reached() {
        let mut glow = CursorGlow::new([10.0, 10.0]);
        assert!(glow.is_settled());
        glow.set_target([60.0, 10.0]);
        assert!(!glow.is_settled());
        let mut steps = 0;
        while !glow.is_settled() {
            glow.step();
            steps += 1;
            assert!(steps < 200, "glow never settled at {:?}", glow.pos);
        }
        assert_eq!(glow.pos, [60.0, 10.0]);
        // a settled glow stays put
        assert_eq!(glow.step(), [60.0, 10.0]);
        assert!(glow.is_settled());
    }

    #[test]
    fn transform_centers_glow() {
        let glow = CursorGlow::new([400.0, 300.0]);
        assert_eq!(glow.transform(), "translate(250px, 150px)");
    }
}
