// Host-side tests for the content tables, scene builders and deck configuration.

use deck_core::*;
use glam::{Vec2, Vec3};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

fn space() -> SceneLayout {
    build_space_scene(&mut StdRng::seed_from_u64(42))
}

#[test]
fn content_tables_cover_eight_topics() {
    for table in [&SPACE_DECK, &CORRIDOR_DECK] {
        assert_eq!(table.len(), 8);
        assert!(!table.is_empty());
        for i in 0..8 {
            assert!(!table.title(i).unwrap().is_empty());
            assert!(!table.body(i).unwrap().is_empty());
            let descriptions = table.image_descriptions(i).unwrap();
            assert_eq!(descriptions.len(), table.image_sources(i).unwrap().len());
        }
        assert!(table.slide(8).is_none());
        assert!(table.title(8).is_none());
    }
}

#[test]
fn first_space_slide_has_a_real_image() {
    let sources = SPACE_DECK.image_sources(0).unwrap();
    assert!(sources[0].is_some());
    assert!(sources[1..].iter().all(Option::is_none));
}

#[test]
fn placeholder_colours_vary_by_slot() {
    assert_eq!(placeholder_hue(0, 0), 0);
    assert_eq!(placeholder_hue(1, 1), 80);
    assert_eq!(placeholder_hue(7, 3), (7 * 50 + 3 * 30) % 360);
    assert_eq!(placeholder_css(1, 0), "hsl(50, 70%, 50%)");
}

#[test]
fn both_scenes_validate_against_their_content() {
    assert_eq!(validate(&space(), &SPACE_DECK), Ok(()));
    assert_eq!(validate(&build_corridor_scene(), &CORRIDOR_DECK), Ok(()));
}

#[test]
fn validation_reports_mismatches() {
    let mut layout = space();
    layout.objects.pop();
    assert_eq!(
        validate(&layout, &SPACE_DECK),
        Err(DeckError::ContentMismatch {
            objects: 7,
            slides: 8
        })
    );

    let mut layout = space();
    layout.objects.swap(2, 4);
    assert_eq!(
        validate(&layout, &SPACE_DECK),
        Err(DeckError::IndexMismatch {
            position: 2,
            index: 4
        })
    );

    let mut layout = space();
    layout.objects.clear();
    assert_eq!(validate(&layout, &SPACE_DECK), Err(DeckError::EmptyScene));
}

#[test]
fn space_scene_layout() {
    let layout = space();
    assert_eq!(layout.objects.len(), 8);
    assert_eq!(layout.visuals.len(), 8);
    assert_eq!(layout.rings.len(), 8);
    assert_eq!(layout.labels.len(), 8);
    assert_eq!(layout.starfield.points.len(), STAR_COUNT);
    assert!(layout.props.is_empty());

    let o = &layout.objects[3];
    assert_eq!(o.position, Vec3::new(-8.0, -7.0, 2.0));
    assert_eq!(o.size, 2.8);
    assert_eq!(o.shape, PickShape::Sphere { radius: 2.8 });

    for (ring, object) in layout.rings.iter().zip(&layout.objects) {
        assert_eq!(ring.center, object.position);
        assert!((ring.inner_radius - (object.size + RING_GAP)).abs() < 1e-6);
        assert!(ring.outer_radius > ring.inner_radius);
    }
    assert_eq!(layout.labels[0].text, "1");
    assert_eq!(layout.labels[7].text, "8");
    assert_eq!(layout.start_pose, CameraPose::new(OVERVIEW_EYE, OVERVIEW_TARGET));
}

#[test]
fn space_scene_positions_do_not_depend_on_the_seed() {
    let a = build_space_scene(&mut StdRng::seed_from_u64(1));
    let b = build_space_scene(&mut StdRng::seed_from_u64(2));
    assert_eq!(a.objects, b.objects);
    assert_ne!(a.starfield.points[0], b.starfield.points[0]);
}

#[test]
fn corridor_doors_face_the_path() {
    let layout = build_corridor_scene();
    assert_eq!(layout.objects.len(), 8);
    assert!(layout.rings.is_empty());
    assert!(layout.starfield.points.is_empty());
    for door in &layout.objects {
        let axis = door.standoff_axis.unwrap();
        // facing inward: opposite sign to the wall the door sits on
        assert!(axis.x * door.position.x < 0.0);
        assert!(matches!(door.shape, PickShape::Box { .. }));
        assert!(door.position.x.abs() < PATH_WIDTH / 2.0);
    }
    assert_eq!(layout.labels[0].text, CORRIDOR_DECK.title(0).unwrap());
    assert!(matches!(layout.fog, Fog::Linear { .. }));
}

#[test]
fn variant_from_query() {
    assert_eq!(Variant::from_query(""), Variant::Space);
    assert_eq!(Variant::from_query("?deck=corridor"), Variant::Corridor);
    assert_eq!(Variant::from_query("?x=1&deck=Doors"), Variant::Corridor);
    assert_eq!(Variant::from_query("?deck=planets"), Variant::Space);
    assert_eq!(Variant::from_query("?deckcorridor"), Variant::Space);
}

#[test]
fn variants_pick_their_own_content_and_input() {
    assert_eq!(Variant::Space.content().title(0), SPACE_DECK.title(0));
    assert_eq!(Variant::Corridor.content().title(0), CORRIDOR_DECK.title(0));
    assert_eq!(Variant::Space.pick_origin(), PickOrigin::Pointer);
    assert_eq!(Variant::Corridor.pick_origin(), PickOrigin::ScreenCenter);
    assert_eq!(Variant::Space.back_label(), "Back to Space");
}

#[test]
fn default_config_matches_presentation_timings() {
    let c = DeckConfig::default();
    assert_eq!(c.transition_in, Duration::from_millis(2000));
    assert_eq!(c.transition_out, Duration::from_millis(1500));
    assert_eq!(c.standoff_factor, 3.0);
    assert_eq!(c.return_policy, ReturnPolicy::Overview);
    assert_eq!(c.body_spin, Vec2::new(0.002, 0.005));

    let corridor = DeckConfig::for_variant(Variant::Corridor);
    assert_eq!(corridor.return_policy, ReturnPolicy::Origin);
    assert_eq!(corridor.body_spin, Vec2::ZERO);
    assert_eq!(corridor.overview_pose, corridor_start_pose());
    assert_eq!(corridor.transition_in, c.transition_in);
}

#[test]
fn hex_colours_unpack_channels() {
    assert_eq!(hex(0xff0000), [1.0, 0.0, 0.0]);
    assert_eq!(hex(0x000000), [0.0, 0.0, 0.0]);
    let c = hex(0x3498db);
    assert!((c[2] - 219.0 / 255.0).abs() < 1e-6);
}
