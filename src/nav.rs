// Smooth scrolling, navbar shadow, active link and the mobile check
// Position math is kept in plain functions; `install` wires them to the DOM

use crate::dom;
use crate::error::Result;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

// Gap left between the navbar and a section after scrolling to it
pub const NAV_SCROLL_MARGIN: f64 = 20.0;
// Lead, in pixels, with which a section becomes active before reaching the navbar
pub const ACTIVE_SECTION_LEAD: f64 = 100.0;
// Scroll offset after which the navbar gets its raised shadow
pub const SHADOW_SCROLL_THRESHOLD: f64 = 50.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub const RAISED_SHADOW: &str = "0 4px 12px rgba(0, 0, 0, 0.1)";
pub const RESTING_SHADOW: &str = "0 2px 8px rgba(0, 0, 0, 0.05)";

const NAV_BAR: &str = ".nav-bar";
const NAV_LINKS: &str = ".nav-link";
const HERO_BUTTONS: &str = ".hero-buttons .btn";
const SECTIONS: &str = ".section, .hero";

// Scroll offset that puts a section just below the navbar
pub fn scroll_target(section_top: f64, nav_height: f64) -> f64 {
    section_top - nav_height - NAV_SCROLL_MARGIN
}

pub fn navbar_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > SHADOW_SCROLL_THRESHOLD {
        RAISED_SHADOW
    } else {
        RESTING_SHADOW
    }
}

// Last section (document order) whose top is within the lead distance of the navbar
pub fn active_section<'a>(
    scroll_y: f64,
    sections: &'a [(String, f64)],
    nav_height: f64,
) -> Option<&'a str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - nav_height - ACTIVE_SECTION_LEAD)
        .last()
        .map(|(id, _)| id.as_str())
}

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

// Only same-page anchors are smooth scrolled
pub fn in_page_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

fn nav_height(document: &Document) -> f64 {
    document
        .query_selector(NAV_BAR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0)
}

fn scroll_to_section(window: &Window, document: &Document, href: &str) {
    let section = document
        .query_selector(href)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(section) = section {
        let options = ScrollToOptions::new();
        options.set_top(scroll_target(section.offset_top() as f64, nav_height(document)));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn attach_smooth_scroll(window: &Window, document: &Document, link: &Element) -> Result<()> {
    let href = match link.get_attribute("href") {
        Some(href) if in_page_target(&href).is_some() => href,
        _ => return Ok(()),
    };
    let win = window.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
        evt.prevent_default();
        scroll_to_section(&win, &doc, &href);
    }) as Box<dyn FnMut(_)>);
    link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn section_tops(document: &Document) -> Vec<(String, f64)> {
    dom::query_all_html(document, SECTIONS)
        .unwrap_or_default()
        .into_iter()
        .map(|section| (section.id(), section.offset_top() as f64))
        .collect()
}

fn on_scroll(window: &Window, document: &Document) {
    let scroll_y = dom::scroll_y(window);
    let navbar = document
        .query_selector(NAV_BAR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(navbar) = &navbar {
        dom::set_style(navbar, "box-shadow", navbar_shadow(scroll_y));
    }

    let sections = section_tops(document);
    let current = active_section(scroll_y, &sections, nav_height(document)).unwrap_or("");
    let wanted = format!("#{}", current);
    for link in dom::query_all(document, NAV_LINKS).unwrap_or_default() {
        let classes = link.class_list();
        let _ = classes.remove_1("active");
        if link.get_attribute("href").as_deref() == Some(wanted.as_str()) {
            let _ = classes.add_1("active");
        }
    }
}

fn report_layout(window: &Window) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    if is_mobile_width(width) {
        crate::log!("mobile layout ({}px)", width);
    }
}

pub fn install(window: &Window, document: &Document) -> Result<()> {
    for link in dom::query_all(document, NAV_LINKS)? {
        attach_smooth_scroll(window, document, &link)?;
    }
    for button in dom::query_all(document, HERO_BUTTONS)? {
        attach_smooth_scroll(window, document, &button)?;
    }

    {
        let win = window.clone();
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            on_scroll(&win, &doc);
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let win = window.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            report_layout(&win);
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    report_layout(window);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<(String, f64)> {
        vec![
            ("home".to_owned(), 0.0),
            ("research".to_owned(), 800.0),
            ("publications".to_owned(), 1600.0),
        ]
    }

    #[test]
    fn scroll_target_leaves_room_for_navbar() {
        assert_eq!(scroll_target(800.0, 60.0), 720.0);
    }

    #[test]
    fn shadow_switches_after_fifty_pixels() {
        assert_eq!(navbar_shadow(0.0), RESTING_SHADOW);
        assert_eq!(navbar_shadow(50.0), RESTING_SHADOW);
        assert_eq!(navbar_shadow(50.5), RAISED_SHADOW);
    }

    #[test]
    fn active_section_is_last_one_reached() {
        let s = sections();
        assert_eq!(active_section(0.0, &s, 60.0), Some("home"));
        assert_eq!(active_section(639.0, &s, 60.0), Some("home"));
        assert_eq!(active_section(640.0, &s, 60.0), Some("research"));
        assert_eq!(active_section(5000.0, &s, 60.0), Some("publications"));
    }

    #[test]
    fn no_active_section_above_first() {
        let s = vec![("about".to_owned(), 1000.0)];
        assert_eq!(active_section(0.0, &s, 60.0), None);
    }

    #[test]
    fn only_hash_links_scroll() {
        assert_eq!(in_page_target("#research"), Some("#research"));
        assert_eq!(in_page_target("#"), None);
        assert_eq!(in_page_target("https://example.org/#x"), None);
        assert_eq!(in_page_target("cv.pdf"), None);
    }

    #[test]
    fn mobile_breakpoint() {
        assert!(is_mobile_width(767.0));
        assert!(!is_mobile_width(768.0));
    }
}
