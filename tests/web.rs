//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use portfolio_site_effects::config::CANVAS_ID;
use portfolio_site_effects::surface::CanvasSurface;
use portfolio_site_effects::{dom, glitch, links, renderer, reveal, FieldConfig, FieldRenderer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        dom::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn style_of(el: &HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap()
}

fn canvas_context() -> CanvasRenderingContext2d {
    let document = dom::document(&dom::window().unwrap()).unwrap();
    let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().unchecked_into();
    canvas.set_width(200);
    canvas.set_height(100);
    canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .unchecked_into()
}

#[wasm_bindgen_test]
fn frames_draw_onto_a_real_canvas() {
    let mut r = FieldRenderer::new(
        CanvasSurface::new(canvas_context()),
        200.0,
        100.0,
        FieldConfig::default(),
        &mut StdRng::seed_from_u64(1),
    );
    for _ in 0..10 {
        r.frame();
    }
    assert_eq!(r.field.len(), 100);
}

#[wasm_bindgen_test]
fn missing_canvas_is_a_no_op() {
    let window = dom::window().unwrap();
    let document = dom::document(&window).unwrap();
    if let Some(existing) = document.get_element_by_id(CANVAS_ID) {
        existing.remove();
    }
    assert!(renderer::install(&window, &document).unwrap().is_none());
}

#[wasm_bindgen_test]
fn installed_canvas_animates_until_stopped() {
    let window = dom::window().unwrap();
    let document = dom::document(&window).unwrap();
    let canvas = document.create_element("canvas").unwrap();
    canvas.set_id(CANVAS_ID);
    dom::body(&document).unwrap().append_child(&canvas).unwrap();

    let handle = renderer::install(&window, &document)
        .unwrap()
        .expect("canvas present");
    assert!(handle.is_running());
    handle.stop();
    assert!(!handle.is_running());
    canvas.remove();
}

#[wasm_bindgen_test]
fn skip_link_becomes_first_child() {
    let document = dom::document(&dom::window().unwrap()).unwrap();
    links::insert_skip_link(&document).unwrap();
    let first = dom::body(&document).unwrap().first_element_child().unwrap();
    assert_eq!(first.class_name(), "skip-link");
    assert_eq!(first.get_attribute("href").as_deref(), Some(links::SKIP_LINK_TARGET));
}

#[wasm_bindgen_test]
fn skip_link_shows_on_focus_and_hides_on_blur() {
    let document = dom::document(&dom::window().unwrap()).unwrap();
    links::insert_skip_link(&document).unwrap();
    let link: HtmlElement = dom::body(&document)
        .unwrap()
        .first_element_child()
        .unwrap()
        .unchecked_into();

    link.dispatch_event(&Event::new("focus").unwrap()).unwrap();
    assert_eq!(style_of(&link, "top"), "0px");
    link.dispatch_event(&Event::new("blur").unwrap()).unwrap();
    assert_eq!(style_of(&link, "top"), "-40px");
    link.remove();
}

#[wasm_bindgen_test]
fn cards_start_hidden_with_a_transition() {
    let document = dom::document(&dom::window().unwrap()).unwrap();
    let card: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    card.set_class_name("research-card");
    dom::body(&document).unwrap().append_child(&card).unwrap();

    reveal::install(&document).unwrap();
    assert_eq!(style_of(&card, "opacity"), "0");
    assert_eq!(style_of(&card, "transform"), "translateY(20px)");
    let transition = style_of(&card, "transition");
    assert!(transition.contains("opacity 0.6s"), "transition was {:?}", transition);
    assert!(transition.contains("transform 0.6s"), "transition was {:?}", transition);
    card.remove();
}

#[wasm_bindgen_test]
async fn body_fades_in_after_load() {
    let window = dom::window().unwrap();
    let document = dom::document(&window).unwrap();
    let body = dom::body(&document).unwrap();
    links::fade_in_on_load(&window, &document).unwrap();

    window.dispatch_event(&Event::new("load").unwrap()).unwrap();
    assert_eq!(style_of(&body, "opacity"), "0");
    sleep(links::FADE_IN_DELAY_MS + 100).await;
    assert_eq!(style_of(&body, "opacity"), "1");
}

#[wasm_bindgen_test]
async fn glitch_class_clears_after_its_duration() {
    let window = dom::window().unwrap();
    let document = dom::document(&window).unwrap();
    let heading = document.create_element("h1").unwrap();
    heading.set_class_name("glitch");
    dom::body(&document).unwrap().append_child(&heading).unwrap();

    glitch::flicker(&window, &[heading.clone()]);
    assert!(heading.class_list().contains(glitch::GLITCH_CLASS));
    sleep(glitch::GLITCH_DURATION_MS + 100).await;
    assert!(!heading.class_list().contains(glitch::GLITCH_CLASS));
    heading.remove();
}
