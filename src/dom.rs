use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(
            Box::new(move || handler()) as Box<dyn FnMut()>
        );
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Create an element with an optional id and class.
pub fn create(
    document: &web::Document,
    tag: &str,
    id: Option<&str>,
    class: Option<&str>,
) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    if let Some(id) = id {
        el.set_id(id);
    }
    if let Some(class) = class {
        el.set_class_name(class);
    }
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

pub fn append(parent: &web::Node, child: &web::Node) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}

pub fn body(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document.body().ok_or_else(|| anyhow::anyhow!("no <body>"))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// `display: <shown>` when visible, `display: none` otherwise.
#[inline]
pub fn set_displayed(el: &web::HtmlElement, visible: bool, shown: &str) {
    set_style(el, "display", if visible { shown } else { "none" });
}

pub fn set_body_cursor(document: &web::Document, css: &str) {
    if let Some(b) = document.body() {
        set_style(&b, "cursor", css);
    }
}

/// Append `<link rel="icon">` pointing at `href` to `<head>`.
pub fn install_favicon(document: &web::Document, href: &str) -> anyhow::Result<()> {
    let head = document
        .query_selector("head")
        .ok()
        .flatten()
        .ok_or_else(|| anyhow::anyhow!("no <head>"))?;
    let link = document
        .create_element("link")
        .map_err(|e| anyhow::anyhow!("create <link>: {:?}", e))?;
    for (name, value) in [("rel", "icon"), ("type", "image/svg+xml"), ("href", href)] {
        link.set_attribute(name, value)
            .map_err(|e| anyhow::anyhow!("set {}: {:?}", name, e))?;
    }
    append(&head, &link)
}
