// Fade cards in as they scroll into view

use crate::dom;
use crate::error::Result;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

pub const REVEAL_SELECTOR: &str =
    ".research-card, .publication-item, .conference-card, .award-card";
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// (property, hidden value, revealed value)
pub const REVEAL_STYLES: [(&str, &str, &str); 2] = [
    ("opacity", "0", "1"),
    ("transform", "translateY(20px)", "translateY(0)"),
];
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

fn reveal(el: &HtmlElement) {
    for (property, _, shown) in REVEAL_STYLES.iter() {
        dom::set_style(el, property, shown);
    }
}

fn hide(el: &HtmlElement) {
    for (property, hidden, _) in REVEAL_STYLES.iter() {
        dom::set_style(el, property, hidden);
    }
    dom::set_style(el, "transition", REVEAL_TRANSITION);
}

pub fn install(document: &Document) -> Result<()> {
    let targets = dom::query_all_html(document, REVEAL_SELECTOR)?;
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = match entry.dyn_into() {
                Ok(entry) => entry,
                Err(_) => continue,
            };
            if entry.is_intersecting() {
                if let Ok(el) = entry.target().dyn_into::<HtmlElement>() {
                    reveal(&el);
                }
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for el in &targets {
        hide(el);
        observer.observe(el);
    }
    crate::log!("watching {} cards for reveal", targets.len());
    Ok(())
}
