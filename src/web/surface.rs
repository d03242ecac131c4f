use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::config::CANVAS_ID;
use crate::paint::Painter;
use crate::particle::Bounds;

/// Full-window 2D canvas inserted as the first child of `<body>`.
#[derive(Clone)]
pub struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Surface {
    pub fn create(document: &Document) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_id(CANVAS_ID);
        document
            .body()
            .ok_or("no body")?
            .prepend_with_node_1(&canvas)?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2D canvas not supported")?
            .dyn_into()?;

        Ok(Self { canvas, ctx })
    }

    /// Match the canvas to the current viewport. Particles are left where
    /// they are.
    pub fn resize(&self, window: &Window) -> Result<(), JsValue> {
        let w = window.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
        let h = window.inner_height()?.as_f64().ok_or("innerHeight is not a number")?;
        self.set_size(w as u32, h as u32);
        Ok(())
    }

    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Re-run [`Surface::resize`] on every window `resize` event.
    pub fn follow_viewport(&self, window: &Window) -> Result<(), JsValue> {
        let resize_closure = {
            let surface = self.clone();
            let win = window.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Err(e) = surface.resize(&win) {
                    log::warn!("surface resize failed: {:?}", e);
                }
            })
        };
        window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
        resize_closure.forget();
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    pub fn clear(&self) {
        let b = self.bounds();
        self.ctx.clear_rect(0.0, 0.0, b.width, b.height);
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

// Calls are spelled out as `Ctx::method` so they resolve to the inherent
// web-sys methods rather than back into this impl.
type Ctx = CanvasRenderingContext2d;

impl Painter for CanvasRenderingContext2d {
    fn save(&mut self) {
        Ctx::save(self)
    }

    fn restore(&mut self) {
        Ctx::restore(self)
    }

    fn translate(&mut self, x: f64, y: f64) {
        if let Err(e) = Ctx::translate(self, x, y) {
            log::warn!("translate({}, {}) failed: {:?}", x, y, e);
        }
    }

    fn rotate(&mut self, angle: f64) {
        if let Err(e) = Ctx::rotate(self, angle) {
            log::warn!("rotate({}) failed: {:?}", angle, e);
        }
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        Ctx::set_global_alpha(self, alpha)
    }

    fn set_fill_style(&mut self, css: &str) {
        Ctx::set_fill_style_str(self, css)
    }

    fn set_stroke_style(&mut self, css: &str) {
        Ctx::set_stroke_style_str(self, css)
    }

    fn set_line_width(&mut self, width: f64) {
        Ctx::set_line_width(self, width)
    }

    fn begin_path(&mut self) {
        Ctx::begin_path(self)
    }

    fn close_path(&mut self) {
        Ctx::close_path(self)
    }

    fn move_to(&mut self, x: f64, y: f64) {
        Ctx::move_to(self, x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) {
        Ctx::line_to(self, x, y)
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        if let Err(e) = Ctx::arc(self, x, y, radius, start, end) {
            log::warn!("arc radius {} failed: {:?}", radius, e);
        }
    }

    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        Ctx::bezier_curve_to(self, cp1x, cp1y, cp2x, cp2y, x, y)
    }

    fn fill(&mut self) {
        Ctx::fill(self)
    }

    fn stroke(&mut self) {
        Ctx::stroke(self)
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        Ctx::fill_rect(self, x, y, w, h)
    }
}
