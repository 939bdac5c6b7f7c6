// Drawing seam between the particle field and whatever it is painted on.
// The browser build paints onto a CanvasRenderingContext2d.

use crate::color::Color;
use std::f64::consts::PI;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);

    // Filled disc with a soft shadow of `glow` pixels in the same color
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color, glow: f64);

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64, width: f64);
}

pub struct CanvasSurface {
    pub context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        CanvasSurface { context }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color, glow: f64) {
        let style = color.to_css();
        self.context.begin_path();
        // arc only throws for a negative radius
        let _ = self.context.arc(center[0], center[1], radius, 0.0, 2.0 * PI);
        self.context.set_fill_style(&JsValue::from_str(&style));
        self.context.set_shadow_blur(glow);
        self.context.set_shadow_color(&style);
        self.context.fill();
        self.context.set_shadow_blur(0.0);
    }

    #[allow(deprecated)]
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], color: Color, alpha: f64, width: f64) {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_css_with_alpha(alpha)));
        self.context.set_line_width(width);
        self.context.stroke();
    }
}
