// Host-side tests for slide panel visibility.

use deck_core::{PanelView, SlidePresenter, SlideSurface};

#[derive(Default)]
struct Recording {
    panels: Vec<bool>,
    container: bool,
    back: bool,
    calls: usize,
}

impl PanelView for Recording {
    fn set_panel_visible(&mut self, index: usize, visible: bool) {
        if self.panels.len() <= index {
            self.panels.resize(index + 1, true);
        }
        self.panels[index] = visible;
        self.calls += 1;
    }
    fn set_container_visible(&mut self, visible: bool) {
        self.container = visible;
    }
    fn set_back_visible(&mut self, visible: bool) {
        self.back = visible;
    }
}

fn visible(p: &SlidePresenter<Recording>) -> Vec<usize> {
    p.view()
        .panels
        .iter()
        .enumerate()
        .filter(|(_, v)| **v)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn starts_with_everything_hidden() {
    let p = SlidePresenter::new(Recording::default(), 8);
    assert!(visible(&p).is_empty());
    assert!(!p.view().container);
    assert!(!p.view().back);
    assert_eq!(p.current(), None);
    assert_eq!(p.panel_count(), 8);
}

#[test]
fn show_then_show_leaves_only_the_latest() {
    let mut p = SlidePresenter::new(Recording::default(), 8);
    assert!(p.show(2));
    assert_eq!(visible(&p), vec![2]);
    assert!(p.show(6));
    assert_eq!(visible(&p), vec![6]);
    assert_eq!(p.current(), Some(6));
    assert!(p.view().container);
    assert!(p.view().back);
}

#[test]
fn hide_clears_panel_container_and_button() {
    let mut p = SlidePresenter::new(Recording::default(), 4);
    p.show(1);
    p.hide();
    assert!(visible(&p).is_empty());
    assert!(!p.view().container);
    assert!(!p.view().back);
    assert_eq!(p.current(), None);
    // hiding twice is harmless
    p.hide();
    assert_eq!(p.current(), None);
}

#[test]
fn out_of_range_show_changes_nothing() {
    let mut p = SlidePresenter::new(Recording::default(), 3);
    p.show(0);
    let before = p.view().calls;
    assert!(!p.show(3));
    assert_eq!(p.view().calls, before);
    assert_eq!(visible(&p), vec![0]);
    assert_eq!(p.current(), Some(0));
}

#[test]
fn slide_surface_delegates_to_presenter() {
    let mut p = SlidePresenter::new(Recording::default(), 3);
    SlideSurface::show(&mut p, 1);
    assert_eq!(p.current(), Some(1));
    SlideSurface::hide(&mut p);
    assert_eq!(p.current(), None);
}
