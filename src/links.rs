// External link targets, the skip link and the page fade-in on load

use crate::dom;
use crate::error::Result;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub const SKIP_LINK_TARGET: &str = "#home";
pub const SKIP_LINK_TEXT: &str = "Skip to main content";
const SKIP_LINK_HIDDEN_TOP: &str = "-40px";
const SKIP_LINK_STYLE: &str = "position: absolute; top: -40px; left: 0; \
    background: var(--accent-color); color: white; padding: 8px; \
    text-decoration: none; z-index: 9999;";

pub const FADE_IN_DELAY_MS: i32 = 100;
const FADE_IN_TRANSITION: &str = "opacity 0.5s ease";

// Attributes an external link should gain, given whether it already has a target
pub fn external_link_attributes(has_target: bool) -> &'static [(&'static str, &'static str)] {
    if has_target {
        &[]
    } else {
        &[("target", "_blank"), ("rel", "noopener noreferrer")]
    }
}

pub fn open_external_in_new_tab(document: &Document) -> Result<usize> {
    let mut changed = 0;
    for link in dom::query_all(document, "a[href^=\"http\"]")? {
        let attrs = external_link_attributes(link.has_attribute("target"));
        for (name, value) in attrs {
            link.set_attribute(name, value)?;
        }
        if !attrs.is_empty() {
            changed += 1;
        }
    }
    Ok(changed)
}

fn on_event<F>(el: &HtmlElement, event: &str, mut handler: F) -> Result<()>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| handler()) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn insert_skip_link(document: &Document) -> Result<()> {
    let body = dom::body(document)?;
    let link: HtmlElement = document.create_element("a")?.unchecked_into();
    link.set_attribute("href", SKIP_LINK_TARGET)?;
    link.set_class_name("skip-link");
    link.set_text_content(Some(SKIP_LINK_TEXT));
    link.set_attribute("style", SKIP_LINK_STYLE)?;

    let focused = link.clone();
    on_event(&link, "focus", move || dom::set_style(&focused, "top", "0"))?;
    let blurred = link.clone();
    on_event(&link, "blur", move || {
        dom::set_style(&blurred, "top", SKIP_LINK_HIDDEN_TOP)
    })?;

    body.insert_before(&link, body.first_child().as_ref())?;
    Ok(())
}

// Body starts transparent at load and eases in shortly after
pub fn fade_in_on_load(window: &Window, document: &Document) -> Result<()> {
    let win = window.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        let body = match doc.body() {
            Some(body) => body,
            None => return,
        };
        dom::set_style(&body, "opacity", "0");
        let show = Closure::once_into_js(move || {
            dom::set_style(&body, "transition", FADE_IN_TRANSITION);
            dom::set_style(&body, "opacity", "1");
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            show.unchecked_ref(),
            FADE_IN_DELAY_MS,
        );
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn install(window: &Window, document: &Document) -> Result<()> {
    let changed = open_external_in_new_tab(document)?;
    if changed > 0 {
        crate::log!("{} external links open in a new tab", changed);
    }
    insert_skip_link(document)?;
    fade_in_on_load(window, document)
}
