use crate::core::{BlobSprite, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`Surface`] backed by a canvas 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }

    fn fill_blob(&self, s: &BlobSprite) -> Result<(), JsValue> {
        let (cx, cy) = (s.center.x as f64, s.center.y as f64);
        let gradient = self.ctx.create_radial_gradient(
            cx,
            cy,
            s.gradient_inner as f64,
            cx,
            cy,
            s.gradient_outer as f64,
        )?;
        gradient.add_color_stop(0.0, &s.color.css_rgba(s.center_alpha))?;
        gradient.add_color_stop(1.0, &s.color.css_rgba(0.0))?;

        self.ctx.save();
        self.ctx.set_global_alpha(s.layer_alpha as f64);
        #[allow(deprecated)]
        self.ctx.set_fill_style(&gradient);
        self.ctx.begin_path();
        let traced = self.ctx.ellipse(
            cx,
            cy,
            s.radii.x as f64,
            s.radii.y as f64,
            s.rotation as f64,
            0.0,
            TAU,
        );
        if traced.is_ok() {
            self.ctx.fill();
        }
        self.ctx.restore();
        traced
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self, width: u32, height: u32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn draw_blob(&mut self, sprite: &BlobSprite) {
        if let Err(e) = self.fill_blob(sprite) {
            log::error!("[render] blob draw error: {:?}", e);
        }
    }
}
