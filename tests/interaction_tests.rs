// Host-side tests for the overview/focus state machine and its wiring to the
// slide presenter.

use deck_core::*;
use glam::Vec3;
use instant::Instant;
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

#[derive(Default)]
struct Panels {
    visible: Vec<bool>,
    container: bool,
    back: bool,
}

impl Panels {
    fn new(n: usize) -> Self {
        Self {
            visible: vec![true; n],
            container: true,
            back: true,
        }
    }
}

impl PanelView for Panels {
    fn set_panel_visible(&mut self, index: usize, visible: bool) {
        self.visible[index] = visible;
    }
    fn set_container_visible(&mut self, visible: bool) {
        self.container = visible;
    }
    fn set_back_visible(&mut self, visible: bool) {
        self.back = visible;
    }
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn approx(a: Vec3, b: Vec3) -> bool {
    a.distance(b) < 1e-4
}

fn space() -> (SceneLayout, InteractionMachine, SlidePresenter<Panels>) {
    let layout = build_space_scene(&mut StdRng::seed_from_u64(7));
    let machine = InteractionMachine::new(DeckConfig::default(), layout.start_pose);
    let presenter = SlidePresenter::new(Panels::new(SPACE_DECK.len()), SPACE_DECK.len());
    (layout, machine, presenter)
}

#[test]
fn transition_samples_start_midpoint_and_end() {
    let from = CameraPose::new(Vec3::ZERO, Vec3::NEG_Z);
    let to = CameraPose::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(10.0, 0.0, -5.0));
    let t0 = Instant::now();
    let tr = Transition::new(from, to, t0, ms(2000));

    let (p, done) = tr.sample(t0);
    assert!(!done);
    assert!(approx(p.position, from.position));
    assert!(approx(p.target, from.target));

    let (p, done) = tr.sample(t0 + ms(1000));
    assert!(!done);
    let e = 1.0 - std::f32::consts::FRAC_PI_4.cos();
    assert!((p.position.x - 10.0 * e).abs() < 1e-4);

    let (p, done) = tr.sample(t0 + ms(2000));
    assert!(done);
    assert_eq!(p, to);
}

#[test]
fn transition_before_start_is_at_origin_pose() {
    let from = CameraPose::new(Vec3::ONE, Vec3::ZERO);
    let to = CameraPose::new(Vec3::splat(5.0), Vec3::ZERO);
    let later = Instant::now() + ms(500);
    let tr = Transition::new(from, to, later, ms(1000));
    assert_eq!(tr.progress(later - ms(100)), 0.0);
}

#[test]
fn end_to_end_focus_and_return_on_object_three() {
    let (layout, mut machine, mut presenter) = space();
    let object = &layout.objects[3];
    let t0 = Instant::now();

    assert!(machine.click(Some(object), t0));
    let expected_eye = object.position + object.position.normalize() * (3.0 * object.size);
    match machine.mode() {
        InteractionMode::TransitioningIn {
            selection,
            transition,
        } => {
            assert_eq!(selection.index, 3);
            assert!(approx(transition.end_pose().position, expected_eye));
            assert!(approx(transition.end_pose().target, object.position));
            assert_eq!(transition.duration(), ms(2000));
        }
        other => panic!("unexpected mode {}", other.name()),
    }

    assert_eq!(machine.tick(t0 + ms(1000), &mut presenter), None);
    assert_eq!(presenter.current(), None);
    assert!(machine.is_transitioning());

    assert_eq!(
        machine.tick(t0 + ms(2000), &mut presenter),
        Some(Settled::Focused(3))
    );
    assert!(matches!(machine.mode(), InteractionMode::Focused { .. }));
    assert_eq!(presenter.current(), Some(3));
    assert!(presenter.view().visible[3]);
    assert!(approx(machine.pose().position, expected_eye));

    let t1 = t0 + ms(5000);
    assert!(machine.request_return(t1, &mut presenter));
    assert_eq!(presenter.current(), None);
    assert!(!presenter.view().container);
    match machine.mode() {
        InteractionMode::TransitioningOut { transition, .. } => {
            assert_eq!(transition.duration(), ms(1500));
        }
        other => panic!("unexpected mode {}", other.name()),
    }

    assert_eq!(machine.tick(t1 + ms(700), &mut presenter), None);
    assert_eq!(
        machine.tick(t1 + ms(1500), &mut presenter),
        Some(Settled::Overview)
    );
    assert_eq!(machine.mode(), &InteractionMode::Overview);
    assert_eq!(machine.selection(), None);
    assert_eq!(machine.pose(), DeckConfig::default().overview_pose);
}

#[test]
fn clicks_outside_overview_are_dropped() {
    let (layout, mut machine, mut presenter) = space();
    let t0 = Instant::now();
    assert!(machine.click(Some(&layout.objects[1]), t0));

    // mid-flight
    assert!(!machine.click(Some(&layout.objects[5]), t0 + ms(10)));
    assert_eq!(machine.selection(), Some(1));
    assert!(!machine.request_return(t0 + ms(20), &mut presenter));

    machine.tick(t0 + ms(2000), &mut presenter);
    // focused
    assert!(!machine.click(Some(&layout.objects[5]), t0 + ms(2100)));
    assert_eq!(machine.selection(), Some(1));

    machine.request_return(t0 + ms(2200), &mut presenter);
    // returning
    assert!(!machine.click(Some(&layout.objects[5]), t0 + ms(2300)));
    assert!(matches!(
        machine.mode(),
        InteractionMode::TransitioningOut { .. }
    ));
}

#[test]
fn click_on_empty_space_stays_in_overview() {
    let (_, mut machine, _) = space();
    assert!(!machine.click(None, Instant::now()));
    assert_eq!(machine.mode(), &InteractionMode::Overview);
}

#[test]
fn return_is_ignored_in_overview() {
    let (_, mut machine, mut presenter) = space();
    assert!(!machine.request_return(Instant::now(), &mut presenter));
    assert_eq!(machine.mode(), &InteractionMode::Overview);
}

#[test]
fn controls_only_get_the_pose_in_overview() {
    let (layout, mut machine, mut presenter) = space();
    assert!(machine.controls_enabled());
    if let Some(pose) = machine.pose_mut_for_controls() {
        pose.position.y += 1.0;
    }
    assert_eq!(machine.pose().position.y, OVERVIEW_EYE.y + 1.0);

    let t0 = Instant::now();
    machine.click(Some(&layout.objects[0]), t0);
    assert!(machine.pose_mut_for_controls().is_none());
    assert!(!machine.accepts_hover());
    machine.tick(t0 + ms(2000), &mut presenter);
    assert!(machine.pose_mut_for_controls().is_none());
}

#[test]
fn corridor_returns_to_the_click_origin() {
    let layout = build_corridor_scene();
    let config = DeckConfig::for_variant(Variant::Corridor);
    let mut machine = InteractionMachine::new(config, layout.start_pose);
    let mut presenter = SlidePresenter::new(Panels::new(8), 8);

    let walked = CameraPose::new(Vec3::new(0.0, WALK_EYE_HEIGHT, -4.0), Vec3::new(0.0, WALK_EYE_HEIGHT, -5.0));
    if let Some(pose) = machine.pose_mut_for_controls() {
        *pose = walked;
    }
    let door = &layout.objects[2];
    let t0 = Instant::now();
    machine.click(Some(door), t0);
    machine.tick(t0 + ms(2000), &mut presenter);
    // doors frame from inside the corridor
    let eye = machine.pose().position;
    assert!(eye.x.abs() < door.position.x.abs());
    assert!((eye.z - door.position.z).abs() < 1e-4);

    machine.request_return(t0 + ms(3000), &mut presenter);
    machine.tick(t0 + ms(4500), &mut presenter);
    assert_eq!(machine.pose(), walked);
}

#[test]
fn object_at_origin_backs_off_along_z() {
    let object = FocusableObject {
        index: 0,
        name: "origin",
        position: Vec3::ZERO,
        size: 2.0,
        shape: PickShape::Sphere { radius: 2.0 },
        standoff_axis: None,
    };
    let pose = object.focus_pose(3.0);
    assert!(approx(pose.position, Vec3::new(0.0, 0.0, 6.0)));
    assert_eq!(pose.target, Vec3::ZERO);
}

#[derive(Default)]
struct CountingSlides {
    shown: Vec<usize>,
    hides: usize,
}

impl SlideSurface for CountingSlides {
    fn show(&mut self, index: usize) {
        self.shown.push(index);
    }
    fn hide(&mut self) {
        self.hides += 1;
    }
}

#[test]
fn each_transition_completes_exactly_once() {
    let (layout, mut machine, _) = space();
    let mut slides = CountingSlides::default();
    let t0 = Instant::now();

    assert!(machine.click(Some(&layout.objects[3]), t0));
    let settled: Vec<_> = [2000, 2010, 2500]
        .iter()
        .filter_map(|&n| machine.tick(t0 + ms(n), &mut slides))
        .collect();
    assert_eq!(settled, vec![Settled::Focused(3)]);
    assert_eq!(slides.shown, vec![3]);

    let t1 = t0 + ms(4000);
    assert!(machine.request_return(t1, &mut slides));
    let settled: Vec<_> = [1500, 1510, 2000]
        .iter()
        .filter_map(|&n| machine.tick(t1 + ms(n), &mut slides))
        .collect();
    assert_eq!(settled, vec![Settled::Overview]);
    assert_eq!(slides.shown, vec![3]);
    assert_eq!(slides.hides, 1);
}

#[test]
fn orbit_motion_does_not_survive_a_focus_round_trip() {
    let (layout, mut machine, mut presenter) = space();
    let mut orbit = OrbitControls::default();
    let t0 = Instant::now();

    orbit.begin_drag();
    orbit.drag(300.0, 0.0, 800.0);
    orbit.end_drag();
    for _ in 0..30 {
        if let Some(pose) = machine.pose_mut_for_controls() {
            orbit.update(pose);
        }
    }
    assert!(!orbit.is_settled());

    assert!(machine.click(Some(&layout.objects[3]), t0));
    orbit.reset();
    machine.tick(t0 + ms(2000), &mut presenter);
    let t1 = t0 + ms(3000);
    assert!(machine.request_return(t1, &mut presenter));
    assert_eq!(
        machine.tick(t1 + ms(1500), &mut presenter),
        Some(Settled::Overview)
    );

    let overview = DeckConfig::default().overview_pose;
    for _ in 0..10 {
        if let Some(pose) = machine.pose_mut_for_controls() {
            orbit.update(pose);
        }
    }
    assert_eq!(machine.pose(), overview);
}
