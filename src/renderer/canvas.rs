//! Browser canvas 2D render sink
//!
//! Owns the 2D context of the page canvas. Built once at startup and handed
//! to the simulation driver; there is no global display state.

use std::f64::consts::TAU;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, DrawCircle, RenderSink};

pub struct CanvasSink {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSink {
    /// Size the canvas for an arena of `width`x`height` units shown at
    /// `scale` CSS pixels per unit, and grab its 2D context.
    pub fn new(
        canvas: &HtmlCanvasElement,
        width: u32,
        height: u32,
        scale: f32,
    ) -> Result<Self, JsValue> {
        let dpr = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let css_scale = scale as f64;
        let pixel_scale = css_scale * dpr;

        canvas.set_width((width as f64 * pixel_scale) as u32);
        canvas.set_height((height as f64 * pixel_scale) as u32);
        let style = canvas.style();
        style.set_property("width", &format!("{}px", width as f64 * css_scale))?;
        style.set_property("height", &format!("{}px", height as f64 * css_scale))?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        ctx.scale(pixel_scale, pixel_scale)?;

        log::info!(
            "Canvas {}x{} (scale {}, dpr {})",
            canvas.width(),
            canvas.height(),
            css_scale,
            dpr
        );

        Ok(Self {
            ctx,
            width: width as f64,
            height: height as f64,
        })
    }
}

impl RenderSink for CanvasSink {
    fn clear(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_circle(&mut self, circle: DrawCircle) {
        self.ctx.set_fill_style_str(&circle.color.css());
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            circle.center.x as f64,
            circle.center.y as f64,
            circle.radius as f64,
            0.0,
            TAU,
        ) {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }
}
