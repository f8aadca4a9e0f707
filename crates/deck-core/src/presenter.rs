use crate::interaction::SlideSurface;

/// Visibility switches for the slide overlay. Implemented over DOM elements
/// in the browser and by recording doubles in tests.
pub trait PanelView {
    fn set_panel_visible(&mut self, index: usize, visible: bool);
    fn set_container_visible(&mut self, visible: bool);
    fn set_back_visible(&mut self, visible: bool);
}

/// Keeps at most one slide panel on screen.
pub struct SlidePresenter<V: PanelView> {
    view: V,
    panel_count: usize,
    current: Option<usize>,
}

impl<V: PanelView> SlidePresenter<V> {
    /// Wrap `view` and start with everything hidden.
    pub fn new(view: V, panel_count: usize) -> Self {
        let mut presenter = Self {
            view,
            panel_count,
            current: None,
        };
        for i in 0..panel_count {
            presenter.view.set_panel_visible(i, false);
        }
        presenter.view.set_container_visible(false);
        presenter.view.set_back_visible(false);
        presenter
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Show panel `index` and hide its siblings. Returns false (and changes
    /// nothing) when `index` has no panel.
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.panel_count {
            log::warn!(
                "[slides] no panel {} (have {})",
                index,
                self.panel_count
            );
            return false;
        }
        for i in 0..self.panel_count {
            self.view.set_panel_visible(i, i == index);
        }
        self.view.set_container_visible(true);
        self.view.set_back_visible(true);
        self.current = Some(index);
        log::info!("[slides] showing {}", index);
        true
    }

    pub fn hide(&mut self) {
        self.view.set_container_visible(false);
        self.view.set_back_visible(false);
        if let Some(i) = self.current.take() {
            self.view.set_panel_visible(i, false);
            log::info!("[slides] hid {}", i);
        }
    }
}

impl<V: PanelView> SlideSurface for SlidePresenter<V> {
    fn show(&mut self, index: usize) {
        SlidePresenter::show(self, index);
    }

    fn hide(&mut self) {
        SlidePresenter::hide(self);
    }
}
