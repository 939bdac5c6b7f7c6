// Renderer struct that owns the particle field and the surface it paints on.
// `install` wires it to the #particles-canvas element, window resizes and the
// animation loop.

use crate::animation::{self, LoopHandle};
use crate::config::{FieldConfig, CANVAS_ID};
use crate::error::{Result, SiteError};
use crate::field::ParticleField;
use crate::surface::{CanvasSurface, Surface};
use crate::utils::Timer;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

pub struct FieldRenderer<S: Surface> {
    pub field: ParticleField,
    pub surface: S,
}

impl<S: Surface> FieldRenderer<S> {
    pub fn new<R: Rng + ?Sized>(
        surface: S,
        width: f64,
        height: f64,
        config: FieldConfig,
        rng: &mut R,
    ) -> Self {
        FieldRenderer {
            field: ParticleField::new(width, height, config, rng),
            surface,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
    }

    // One frame tick: clear, move and draw every particle, then draw connections
    pub fn frame(&mut self) {
        let width = self.field.width();
        let height = self.field.height();
        let config = *self.field.config();
        self.surface.clear(width, height);
        for particle in self.field.particles_mut() {
            particle.step(width, height);
            self.surface.fill_circle(
                particle.pos,
                particle.radius,
                config.particle_color,
                config.glow_blur,
            );
        }
        for line in self.field.connections() {
            self.surface.stroke_line(
                line.from,
                line.to,
                config.line_color,
                line.opacity,
                config.line_width,
            );
        }
    }
}

fn viewport_size(window: &Window) -> Result<(f64, f64)> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

// Starts the particle animation if the page has a canvas for it.
// Returns the loop handle so callers can stop it.
pub fn install(window: &Window, document: &Document) -> Result<Option<LoopHandle>> {
    let _timer = Timer::new("particle field init");
    let canvas: HtmlCanvasElement = match document.get_element_by_id(CANVAS_ID) {
        Some(el) => el
            .dyn_into()
            .map_err(|_| SiteError::WrongType(CANVAS_ID.to_owned(), "canvas"))?,
        None => {
            crate::log!("#{} not found, particle field disabled", CANVAS_ID);
            return Ok(None);
        }
    };
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .and_then(|ctx| ctx.dyn_into().ok())
        .ok_or_else(|| SiteError::NoContext(CANVAS_ID.to_owned()))?;

    let (width, height) = viewport_size(window)?;
    size_canvas(&canvas, width, height);
    let renderer = Rc::new(RefCell::new(FieldRenderer::new(
        CanvasSurface::new(context),
        width,
        height,
        FieldConfig::default(),
        &mut rand::thread_rng(),
    )));

    {
        let renderer = renderer.clone();
        let resize_window = window.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            if let Ok((width, height)) = viewport_size(&resize_window) {
                size_canvas(&canvas, width, height);
                renderer.borrow_mut().resize(width, height);
            }
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    let handle = LoopHandle::new();
    animation::start(handle.clone(), move |_ts| renderer.borrow_mut().frame())?;
    Ok(Some(handle))
}
