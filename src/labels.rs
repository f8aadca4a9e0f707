use crate::constants::*;
use crate::dom;
use deck_core::{ndc_to_pixel, Camera, Label, LabelStyle};
use glam::Vec3;
use web_sys as web;

// Labels this far outside the viewport (in NDC) are hidden.
const NDC_MARGIN: f32 = 1.1;

struct PlacedLabel {
    el: web::HtmlElement,
    anchor: Vec3,
    shown: bool,
}

/// Screen-space labels that follow world anchors, drawn as DOM elements over
/// the canvas.
pub struct LabelLayer {
    labels: Vec<PlacedLabel>,
}

impl LabelLayer {
    pub fn build(document: &web::Document, labels: &[Label]) -> anyhow::Result<Self> {
        let layer = dom::create(document, "div", Some(LABEL_LAYER_ID), None)?;
        dom::set_style(&layer, "position", "fixed");
        dom::set_style(&layer, "inset", "0");
        dom::set_style(&layer, "pointer-events", "none");
        dom::set_style(&layer, "overflow", "hidden");
        dom::append(&dom::body(document)?, &layer)?;

        let mut placed = Vec::with_capacity(labels.len());
        for label in labels {
            let el = match label.style {
                LabelStyle::Badge => badge(document, &label.text)?,
                LabelStyle::Plate => {
                    let el = dom::create(document, "div", None, Some(PLATE_LABEL_CLASS))?;
                    el.set_text_content(Some(&label.text));
                    el
                }
            };
            dom::set_style(&el, "position", "absolute");
            dom::set_style(&el, "transform", "translate(-50%, -50%)");
            dom::set_displayed(&el, false, "block");
            dom::append(&layer, &el)?;
            placed.push(PlacedLabel {
                el,
                anchor: label.anchor,
                shown: false,
            });
        }
        Ok(Self { labels: placed })
    }

    /// Reposition every label for `camera` in a `width` x `height` CSS-pixel viewport.
    pub fn project(&mut self, camera: &Camera, width: f32, height: f32) {
        for label in &mut self.labels {
            let ndc = camera
                .project(label.anchor)
                .filter(|p| p.x.abs() <= NDC_MARGIN && p.y.abs() <= NDC_MARGIN);
            match ndc {
                Some(p) => {
                    let px = ndc_to_pixel(p, width, height);
                    dom::set_style(&label.el, "left", &format!("{:.1}px", px.x));
                    dom::set_style(&label.el, "top", &format!("{:.1}px", px.y));
                    if !label.shown {
                        dom::set_displayed(&label.el, true, "block");
                        label.shown = true;
                    }
                }
                None if label.shown => {
                    dom::set_displayed(&label.el, false, "block");
                    label.shown = false;
                }
                None => {}
            }
        }
    }
}

fn badge(document: &web::Document, text: &str) -> anyhow::Result<web::HtmlElement> {
    let root = dom::create(document, "div", None, Some(BADGE_LABEL_CLASS))?;
    let circle = dom::create(document, "div", None, Some("planet-label-circle"))?;
    let number = dom::create(document, "span", None, Some("planet-label-number"))?;
    number.set_text_content(Some(text));
    dom::append(&circle, &number)?;
    dom::append(&root, &circle)?;
    let arrow = dom::create(document, "div", None, Some("planet-label-arrow"))?;
    dom::append(&root, &arrow)?;
    Ok(root)
}
