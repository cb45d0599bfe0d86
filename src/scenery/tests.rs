use super::{ElementProperty, RingKind, SceneryMover, ScrollElement, ScrollRing};
use crate::config::SceneryConfig;
use crate::util::Vec2D;

fn property() -> ElementProperty {
    ElementProperty {
        interval: 1.0,
        duration: 3.0,
        start_position: Vec2D::new(10.0, -1.0),
        start_scale: 1.0,
        start_velocity: Vec2D::new(2.0, 0.0),
        velocity_coefficient: 1.0,
        scale_coefficient: 0.5,
    }
}

fn active_flags(ring: &ScrollRing) -> Vec<bool> { ring.elements().iter().map(ScrollElement::is_active).collect() }

#[test]
fn test_staggered_cascade() {
    let mut ring = ScrollRing::new("lines", property(), 5).unwrap();
    assert!(!ring.is_started());

    ring.tick(1.0);
    assert!(ring.is_started());
    assert_eq!(active_flags(&ring), vec![true, false, false, false, false]);

    ring.tick(1.0);
    assert_eq!(active_flags(&ring), vec![true, true, false, false, false]);
    assert!((ring.elements()[0].t() - 1.0).abs() < f32::EPSILON);
    assert!(ring.elements()[1].t().abs() < f32::EPSILON);

    ring.tick(1.0);
    assert_eq!(active_flags(&ring), vec![true, true, true, false, false]);

    ring.tick(1.0);
    let first = &ring.elements()[0];
    assert!(!first.is_active());
    assert!(first.t().abs() < f32::EPSILON);
    assert_eq!(first.position(), property().start_position);
    assert!((first.scale() - property().start_scale).abs() < f32::EPSILON);
    assert_eq!(active_flags(&ring), vec![false, true, true, true, false]);

    ring.tick(1.0);
    assert_eq!(active_flags(&ring), vec![false, false, true, true, true]);

    // index wraps around to the first element again
    ring.tick(1.0);
    assert_eq!(active_flags(&ring), vec![true, false, false, true, true]);
}

#[test]
fn test_element_motion() {
    let p = property();
    let mut element = ScrollElement::new(p);
    element.update(1.0);
    assert!(!element.is_visible());
    assert_eq!(element.position(), p.start_position);

    assert!(element.activate());
    assert!(!element.activate());

    element.update(1.0);
    assert!(element.is_visible());
    assert_eq!(element.position(), Vec2D::new(12.0, -1.0));
    assert!((element.scale() - 1.0).abs() < f32::EPSILON);

    element.update(1.0);
    // velocity(1) = (1, 0) * 1 + (2, 0)
    assert_eq!(element.position(), Vec2D::new(15.0, -1.0));
    assert!((element.scale() - 1.5).abs() < f32::EPSILON);
    assert_eq!(element.local_scale(), [1.5, 1.5, 1.0]);

    element.update(1.0);
    assert!(!element.is_active());
    assert!(!element.is_visible());
    assert_eq!(element.position(), p.start_position);
}

#[test]
fn test_large_tick_catches_up_activations() {
    let mut ring = ScrollRing::new("buildings", property(), 5).unwrap();
    ring.tick(2.5);
    assert_eq!(active_flags(&ring), vec![true, true, false, false, false]);
    ring.tick(0.5);
    assert_eq!(active_flags(&ring), vec![true, true, true, false, false]);
}

#[test]
fn test_missed_activations_keep_ring_phase() {
    let mut ring = ScrollRing::new("buildings", property(), 5).unwrap();
    ring.tick(0.0);
    ring.tick(6.5);
    assert_eq!(active_flags(&ring), vec![true; 5]);
    ring.tick(0.5);
    ring.tick(3.0);
    assert_eq!(active_flags(&ring), vec![false, false, true, true, true]);
}

#[test]
fn test_long_stall_with_short_interval() {
    let fast = ElementProperty { interval: 0.001, duration: 0.5, ..property() };
    let mut ring = ScrollRing::new("lines", fast, 5).unwrap();
    ring.tick(10_000.0);
    assert_eq!(active_flags(&ring), vec![true; 5]);
    ring.tick(1.0);
    assert_eq!(active_flags(&ring), vec![true; 5]);
}

#[test]
fn test_degenerate_rings() {
    let mut zero_interval = property();
    zero_interval.interval = 0.0;
    assert!(ScrollRing::new("broken", zero_interval, 5).is_none());

    let mut empty = ScrollRing::new("empty", property(), 0).unwrap();
    empty.tick(10.0);
    assert!(empty.elements().is_empty());
}

#[test]
fn test_ring_teardown_is_idempotent() {
    let mut ring = ScrollRing::new("lines", property(), 5).unwrap();
    ring.tick(1.0);
    ring.teardown();
    ring.teardown();
    assert!(ring.is_torn_down());
    assert!(ring.elements().is_empty());
    ring.tick(5.0);
    assert!(ring.elements().is_empty());
}

#[test]
fn test_mover_skips_missing_rings() {
    let config = SceneryConfig { white_line: Some(property()), ..SceneryConfig::default() };
    let mut mover = SceneryMover::from_config(&config);
    assert_eq!(mover.active_rings(), 1);
    assert!(mover.ring(RingKind::BuildingsLeft).is_none());
    assert_eq!(mover.ring(RingKind::WhiteLine).unwrap().elements().len(), 5);

    mover.tick(1.0);
    assert!(mover.ring(RingKind::WhiteLine).unwrap().elements()[0].is_active());

    mover.teardown();
    mover.teardown();
    assert_eq!(mover.active_rings(), 0);
    mover.tick(1.0);
}

#[test]
fn test_mover_all_rings_independent() {
    let mut slow = property();
    slow.interval = 2.0;
    let config = SceneryConfig {
        ring_size: 3,
        white_line: Some(property()),
        buildings_left: Some(slow),
        buildings_right: Some(property()),
    };
    let mut mover = SceneryMover::from_config(&config);
    assert_eq!(mover.active_rings(), 3);
    mover.tick(1.0);
    let lines = mover.ring(RingKind::WhiteLine).unwrap();
    let left = mover.ring(RingKind::BuildingsLeft).unwrap();
    assert!(lines.elements()[0].is_active());
    assert!(!left.elements()[0].is_active());
    assert_eq!(left.elements().len(), 3);
}
