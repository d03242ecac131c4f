use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::config::PARTICLE_COUNT;
use crate::particle::ParticleSet;

pub mod bindings;
pub mod render;
pub mod surface;

pub use surface::Surface;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    // The module may load before the body is parsed.
    if document.ready_state() == "loading" {
        let ready = {
            let (window, document) = (window.clone(), document.clone());
            Closure::<dyn FnMut()>::new(move || {
                if let Err(e) = init(&window, &document) {
                    log::error!("backdrop init failed: {:?}", e);
                }
            })
        };
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            ready.as_ref().unchecked_ref(),
        )?;
        ready.forget();
        return Ok(());
    }

    init(&window, &document)
}

fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let surface = Surface::create(document)?;
    surface.resize(window)?;
    surface.follow_viewport(window)?;

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let particles = ParticleSet::spawn_initial(SmallRng::seed_from_u64(seed), surface.bounds());
    let bounds = surface.bounds();
    log::info!(
        "backdrop: {} particles on {}x{}",
        PARTICLE_COUNT,
        bounds.width,
        bounds.height
    );

    render::start(surface, particles)?;
    bindings::install(window, document)?;
    Ok(())
}
