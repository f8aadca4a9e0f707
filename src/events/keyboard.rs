use crate::app::App;
use crate::input;
use deck_core::key_code_to_move;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, app: &Rc<RefCell<App>>) {
    let code = ev.code();
    if input::is_return_key(&code) {
        app.borrow_mut().request_return(Instant::now());
        return;
    }
    if let Some(key) = key_code_to_move(&code) {
        app.borrow_mut().walk.set_key(key, true);
    }
}

pub fn handle_keyup(ev: &web::KeyboardEvent, app: &Rc<RefCell<App>>) {
    if let Some(key) = key_code_to_move(&ev.code()) {
        app.borrow_mut().walk.set_key(key, false);
    }
}

pub fn wire_global_keys(app: Rc<RefCell<App>>) {
    if let Some(window) = web::window() {
        let app_down = app.clone();
        let down = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keydown(&ev, &app_down);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", down.as_ref().unchecked_ref());
        down.forget();

        let up = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_keyup(&ev, &app);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keyup", up.as_ref().unchecked_ref());
        up.forget();
    }
}

/// The slide overlay's back button leaves the focused slide.
pub fn wire_back_button(document: &web::Document, app: Rc<RefCell<App>>) {
    crate::dom::add_click_listener(document, crate::constants::BACK_BUTTON_ID, move || {
        app.borrow_mut().request_return(Instant::now());
    });
}
