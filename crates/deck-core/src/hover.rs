use crate::constants::HOVER_EMISSIVE;
use crate::interaction::InteractionMode;
use crate::picking::{pick_nearest, Ray};
use crate::scene::FocusableObject;

/// Pointer cursor shown over the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

/// Outcome of one hover pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverFrame {
    /// Hover is suspended in the current mode; previous state was kept.
    Unchanged,
    Updated { hit: Option<usize> },
}

/// Per-frame highlight and cursor state driven by the picking ray.
#[derive(Clone, Debug)]
pub struct HoverResolver {
    highlighted: Vec<bool>,
    hit: Option<usize>,
    cursor: Cursor,
}

impl HoverResolver {
    pub fn new(object_count: usize) -> Self {
        Self {
            highlighted: vec![false; object_count],
            hit: None,
            cursor: Cursor::Default,
        }
    }

    pub fn update(
        &mut self,
        mode: &InteractionMode,
        ray: &Ray,
        objects: &[FocusableObject],
    ) -> HoverFrame {
        if !mode.accepts_hover() {
            return HoverFrame::Unchanged;
        }
        self.highlighted.iter_mut().for_each(|h| *h = false);
        self.hit = pick_nearest(ray, objects).map(|h| h.index);
        if let Some(flag) = self.hit.and_then(|i| self.highlighted.get_mut(i)) {
            *flag = true;
        }
        self.cursor = if self.hit.is_some() {
            Cursor::Pointer
        } else {
            Cursor::Default
        };
        HoverFrame::Updated { hit: self.hit }
    }

    pub fn hit(&self) -> Option<usize> {
        self.hit
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn highlighted(&self, index: usize) -> bool {
        self.highlighted.get(index).copied().unwrap_or(false)
    }

    /// Emissive boost for object `index` this frame.
    #[inline]
    pub fn emissive(&self, index: usize) -> f32 {
        if self.highlighted(index) {
            HOVER_EMISSIVE
        } else {
            0.0
        }
    }
}
