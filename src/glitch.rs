// Periodic glitch flicker on .glitch headings

use crate::dom;
use crate::error::Result;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

pub const GLITCH_SELECTOR: &str = ".glitch";
pub const GLITCH_CLASS: &str = "glitching";
pub const GLITCH_INTERVAL_MS: i32 = 3000;
pub const GLITCH_DURATION_MS: i32 = 200;

// Adds the glitch class now and clears it after GLITCH_DURATION_MS
pub fn flicker(window: &Window, targets: &[Element]) {
    for el in targets {
        let _ = el.class_list().add_1(GLITCH_CLASS);
    }
    let targets = targets.to_vec();
    let clear = Closure::once_into_js(move || {
        for el in &targets {
            let _ = el.class_list().remove_1(GLITCH_CLASS);
        }
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        clear.unchecked_ref(),
        GLITCH_DURATION_MS,
    );
}

pub fn install(window: &Window, document: &Document) -> Result<()> {
    let targets = dom::query_all(document, GLITCH_SELECTOR)?;
    if targets.is_empty() {
        return Ok(());
    }
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || flicker(&win, &targets)) as Box<dyn FnMut()>);
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        GLITCH_INTERVAL_MS,
    )?;
    closure.forget();
    Ok(())
}
