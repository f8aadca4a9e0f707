use crate::constants::*;
use crate::dom;
use deck_core::{placeholder_css, ContentTable, PanelView};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slide overlay elements: the container, one panel per topic and the
/// return button. All start hidden.
pub struct DomPanels {
    container: web::HtmlElement,
    back: web::HtmlElement,
    panels: Vec<web::HtmlElement>,
}

impl DomPanels {
    pub fn build(
        document: &web::Document,
        table: &ContentTable,
        back_label: &str,
    ) -> anyhow::Result<Self> {
        let body = dom::body(document)?;

        let container = dom::create(document, "div", Some(SLIDE_CONTAINER_ID), None)?;
        dom::append(&body, &container)?;

        let back = dom::create(document, "button", Some(BACK_BUTTON_ID), None)?;
        back.set_text_content(Some(back_label));
        dom::append(&body, &back)?;

        let mut panels = Vec::with_capacity(table.len());
        for i in 0..table.len() {
            let panel = build_panel(document, table, i)?;
            dom::append(&container, &panel)?;
            panels.push(panel);
        }
        log::info!("[slides] built {} panels", panels.len());
        Ok(Self {
            container,
            back,
            panels,
        })
    }
}

fn build_panel(
    document: &web::Document,
    table: &ContentTable,
    index: usize,
) -> anyhow::Result<web::HtmlElement> {
    let slide = table
        .slide(index)
        .ok_or_else(|| anyhow::anyhow!("no slide {}", index))?;
    let id = format!("{}{}", SLIDE_ID_PREFIX, index);
    let panel = dom::create(document, "div", Some(&id), Some(SLIDE_CLASS))?;

    let title = dom::create(document, "h2", None, None)?;
    title.set_text_content(Some(slide.title));
    dom::append(&panel, &title)?;

    let content = dom::create(document, "div", None, None)?;
    content.set_inner_html(slide.body);
    dom::append(&panel, &content)?;

    if !slide.images.is_empty() {
        let gallery = dom::create(document, "div", None, Some(IMAGE_CONTAINER_CLASS))?;
        for (j, image) in slide.images.iter().enumerate() {
            let wrapper = dom::create(document, "div", None, Some(IMAGE_WRAPPER_CLASS))?;
            let visual = match image.source {
                Some(src) => {
                    let img = dom::create(document, "img", None, Some(REAL_IMAGE_CLASS))?
                        .dyn_into::<web::HtmlImageElement>()
                        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
                    img.set_src(src);
                    img.set_alt(image.description);
                    img.unchecked_into::<web::HtmlElement>()
                }
                None => {
                    let placeholder = dom::create(document, "div", None, Some(PLACEHOLDER_CLASS))?;
                    dom::set_style(&placeholder, "background-color", &placeholder_css(index, j));
                    let caption = dom::create(document, "span", None, None)?;
                    caption.set_text_content(Some(&format!("Image {}", j + 1)));
                    dom::append(&placeholder, &caption)?;
                    placeholder
                }
            };
            dom::append(&wrapper, &visual)?;

            let description = dom::create(document, "div", None, Some(IMAGE_DESCRIPTION_CLASS))?;
            description.set_text_content(Some(image.description));
            dom::append(&wrapper, &description)?;
            dom::append(&gallery, &wrapper)?;
        }
        dom::append(&panel, &gallery)?;
    }

    dom::set_displayed(&panel, false, PANEL_DISPLAY);
    Ok(panel)
}

impl PanelView for DomPanels {
    fn set_panel_visible(&mut self, index: usize, visible: bool) {
        if let Some(panel) = self.panels.get(index) {
            dom::set_displayed(panel, visible, PANEL_DISPLAY);
        }
    }

    fn set_container_visible(&mut self, visible: bool) {
        dom::set_displayed(&self.container, visible, CONTAINER_DISPLAY);
    }

    fn set_back_visible(&mut self, visible: bool) {
        dom::set_displayed(&self.back, visible, PANEL_DISPLAY);
    }
}
