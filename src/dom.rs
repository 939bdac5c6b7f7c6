// Thin lookups over web_sys used by the page effects

use crate::error::{Result, SiteError};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(SiteError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(SiteError::NoBody)
}

// All elements matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_all_html(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    Ok(query_all(document, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    // only fails for read-only declarations
    let _ = el.style().set_property(property, value);
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
