use crate::app::App;
use crate::input;
use deck_core::Variant;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub app: Rc<RefCell<App>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_click(&w);
    wire_wheel(&w);
    wire_pointer_lock(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_client(&ev);
        let size = input::window_css_size();
        let mut app = w.app.borrow_mut();
        let (dx, dy) = (pos.x - app.mouse.x, pos.y - app.mouse.y);
        app.mouse.set_position(pos.x, pos.y, size.x, size.y);
        if app.orbit.is_dragging() && app.machine.controls_enabled() {
            app.orbit.drag(dx, dy, size.y);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut app = w.app.borrow_mut();
        app.mouse.down = true;
        if app.variant == Variant::Space && app.machine.controls_enabled() {
            app.orbit.begin_drag();
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut app = w.app.borrow_mut();
        app.mouse.down = false;
        app.orbit.end_drag();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        let mut app = w.app.borrow_mut();
        // First click on the path only captures the pointer.
        if app.variant == Variant::Corridor
            && !app.walk.is_locked()
            && app.machine.controls_enabled()
        {
            w.canvas.request_pointer_lock();
            return;
        }
        app.click(Instant::now());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let mut app = w.app.borrow_mut();
        if app.variant == Variant::Space && app.machine.controls_enabled() {
            app.orbit.dolly(input::wheel_direction(ev.delta_y()));
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Pointer-lock state and raw mouse movement for first-person look.
fn wire_pointer_lock(w: &InputWiring) {
    let wm = w.clone();
    let look = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let mut app = wm.app.borrow_mut();
        if app.walk.is_locked() {
            app.mouse.look_delta.x += ev.movement_x() as f32;
            app.mouse.look_delta.y += ev.movement_y() as f32;
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("mousemove", look.as_ref().unchecked_ref());
    look.forget();

    let wl = w.clone();
    let change = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let locked = wl.document.pointer_lock_element().is_some();
        wl.app.borrow_mut().set_pointer_locked(locked);
    }) as Box<dyn FnMut()>);
    _ = w
        .document
        .add_event_listener_with_callback("pointerlockchange", change.as_ref().unchecked_ref());
    change.forget();
}
