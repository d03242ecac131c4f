use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Window};

use super::Surface;
use crate::particle::ParticleSet;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Start the render loop: clear, tick, draw, reschedule, for the lifetime of
/// the page. The first frame is drawn before returning.
pub fn start<R: Rng + 'static>(
    surface: Surface,
    mut particles: ParticleSet<R>,
) -> Result<(), JsValue> {
    let win = window().ok_or("no window")?;
    let mut ctx = surface.context().clone();

    let mut frame = move || {
        surface.clear();
        particles.tick(surface.bounds());
        particles.render(&mut ctx);
    };
    frame();

    // `f` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` with itself. Storing it inside an `Option`
    // allows us to create the `Closure` first and then reach it from within.
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    let next_win = win.clone();
    *g.borrow_mut() = Some(Closure::new(move || {
        frame();

        // schedule next
        if let Err(e) = request_frame(&next_win, &f) {
            log::error!("animation stopped: {:?}", e);
        }
    }));

    request_frame(&win, &g)
}

fn request_frame(win: &Window, f: &FrameCallback) -> Result<(), JsValue> {
    let cb = f.borrow();
    let cb = cb.as_ref().ok_or("frame callback missing")?;
    win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    Ok(())
}
