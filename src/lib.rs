//! Presentation effects for a static academic / portfolio website, compiled
//! to WebAssembly.
//!
//! The centerpiece is the particle field behind the hero section: a fixed
//! pool of drifting points joined by lines that fade with distance
//! ([`field`], [`renderer`]). The remaining modules are small page
//! flourishes installed once at start-up; each one skips itself quietly when
//! the page lacks the elements it decorates.

#[macro_use]
mod utils;

pub mod animation;
pub mod banner;
pub mod color;
pub mod config;
pub mod cursor;
pub mod dom;
pub mod error;
pub mod field;
pub mod glitch;
pub mod keys;
pub mod links;
pub mod nav;
pub mod particle;
pub mod renderer;
pub mod reveal;
pub mod surface;
pub mod typewriter;

pub use animation::LoopHandle;
pub use color::Color;
pub use config::FieldConfig;
pub use error::SiteError;
pub use field::{connection_opacity, Connection, ParticleField};
pub use particle::Particle;
pub use renderer::FieldRenderer;
pub use surface::Surface;

use std::cell::RefCell;
use std::thread::LocalKey;
use utils::Timer;
use wasm_bindgen::prelude::*;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

thread_local! {
    static PARTICLE_LOOP: RefCell<Option<LoopHandle>> = RefCell::new(None);
    static CURSOR_LOOP: RefCell<Option<LoopHandle>> = RefCell::new(None);
}

type LoopSlot = LocalKey<RefCell<Option<LoopHandle>>>;

// Stops and forgets the loop held in `slot`; false if there was none
fn stop_loop(slot: &'static LoopSlot) -> bool {
    slot.with(|slot| match slot.borrow_mut().take() {
        Some(handle) => {
            handle.stop();
            true
        }
        None => false,
    })
}

#[wasm_bindgen(start)]
pub fn initialize() -> Result<(), JsValue> {
    utils::set_panic_hook();
    start_site()?;
    Ok(())
}

fn start_site() -> error::Result<()> {
    let _timer = Timer::new("site init");
    let window = dom::window()?;
    let document = dom::document(&window)?;

    nav::install(&window, &document)?;
    reveal::install(&document)?;
    links::install(&window, &document)?;
    typewriter::install(&window, &document)?;
    glitch::install(&window, &document)?;
    keys::install(&document)?;
    let glow = cursor::install(&window, &document)?;
    CURSOR_LOOP.with(|slot| *slot.borrow_mut() = glow);

    let handle = renderer::install(&window, &document)?;
    PARTICLE_LOOP.with(|slot| *slot.borrow_mut() = handle);

    let profile = banner::Profile::from_body(&dom::body(&document)?);
    for line in banner::banner_lines(&profile) {
        banner::print(&line);
    }
    banner::print(&banner::ready_line());
    Ok(())
}

// Stops the particle animation; the canvas keeps its last frame
#[wasm_bindgen]
pub fn stop_particles() -> bool {
    stop_loop(&PARTICLE_LOOP)
}

// Stops the cursor glow where it is
#[wasm_bindgen]
pub fn stop_cursor_glow() -> bool {
    stop_loop(&CURSOR_LOOP)
}
