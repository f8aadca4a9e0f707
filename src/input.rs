use deck_core::{pixel_to_ndc, PickOrigin};
use glam::Vec2;
use web_sys as web;

/// Latest pointer position in CSS pixels and NDC.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub ndc: Vec2,
    pub down: bool,
    /// Accumulated pointer-locked movement not yet consumed by the frame.
    pub look_delta: Vec2,
}

impl MouseState {
    pub fn set_position(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.x = x;
        self.y = y;
        self.ndc = pixel_to_ndc(x, y, width, height);
    }

    pub fn take_look_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.look_delta)
    }
}

/// NDC the picking ray passes through: the pointer, or the screen centre
/// (crosshair) in first-person mode.
#[inline]
pub fn pick_ndc(origin: PickOrigin, pointer_ndc: Vec2) -> Vec2 {
    match origin {
        PickOrigin::Pointer => pointer_ndc,
        PickOrigin::ScreenCenter => Vec2::ZERO,
    }
}

/// Key codes that leave a focused slide.
#[inline]
pub fn is_return_key(code: &str) -> bool {
    matches!(code, "Escape" | "Backspace")
}

/// -1, 0 or 1 for a wheel delta.
#[inline]
pub fn wheel_direction(delta_y: f64) -> f32 {
    if delta_y > 0.0 {
        1.0
    } else if delta_y < 0.0 {
        -1.0
    } else {
        0.0
    }
}

// ---------------- DOM helpers ----------------
#[inline]
pub fn window_css_size() -> Vec2 {
    web::window()
        .map(|w| {
            let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
            };
            Vec2::new(px(w.inner_width()), px(w.inner_height()))
        })
        .unwrap_or(Vec2::ONE)
}

#[inline]
pub fn pointer_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}
