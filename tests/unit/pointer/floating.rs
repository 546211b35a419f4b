use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn mount() -> (Stage, Scheduler, FloatingIcons) {
    let mut stage = Stage::new();
    let mut sched = Scheduler::new();
    let icons = FloatingIcons::mount(&FloatingConfig::default(), &mut stage, &mut sched).unwrap();
    (stage, sched, icons)
}

#[test]
fn constellation_has_six_icons_with_rising_sensitivity() {
    let (_, _, icons) = mount();
    let icons = icons.icons();
    assert_eq!(icons.len(), 6);
    assert_eq!(icons[0].name, "code");
    assert!(approx(icons[0].speed, 0.02));
    assert!(approx(icons[5].speed, 0.045));
    assert!(approx(icons[5].delay, 1.0));
    assert_eq!(icons[3].base, Vec2::new(80.0, 80.0));
}

#[test]
fn oscillation_parameters_stay_in_range() {
    let (_, _, icons) = mount();
    for icon in icons.icons() {
        let o = icon.oscillation;
        assert!((10.0..40.0).contains(&o.dy));
        assert!((-10.0..10.0).contains(&o.dx));
        assert!((-10.0..10.0).contains(&o.rotation));
        assert!((3.0..5.0).contains(&o.duration));
    }
}

#[test]
fn same_seed_same_drift() {
    let (_, _, a) = mount();
    let (_, _, b) = mount();
    let oa: Vec<Oscillation> = a.icons().iter().map(|i| i.oscillation).collect();
    let ob: Vec<Oscillation> = b.icons().iter().map(|i| i.oscillation).collect();
    assert_eq!(oa, ob);
}

#[test]
fn pointer_offset_is_proportional_and_independent_of_drift() {
    let (mut stage, mut sched, mut icons) = mount();
    let viewport = Viewport::new(1000.0, 800.0).unwrap();
    icons
        .on_pointer_move(Point::new(700.0, 400.0), viewport, &mut stage, &mut sched)
        .unwrap();
    sched.tick(1.0, &mut stage);

    let first = &icons.icons()[0];
    let last = &icons.icons()[5];
    assert!(approx(stage.value(first.node, Prop::OffsetX).unwrap(), 200.0 * 0.02));
    assert!(approx(stage.value(last.node, Prop::OffsetX).unwrap(), 200.0 * 0.045));
    assert!(approx(stage.value(last.node, Prop::OffsetY).unwrap(), 0.0));
    // Drift keeps running alongside the pointer lean.
    assert!(stage.value(first.node, Prop::Y).unwrap() > 0.0);
    assert_eq!(sched.active_count(), 6);
}

#[test]
fn repeated_moves_do_not_accumulate() {
    let (mut stage, mut sched, mut icons) = mount();
    let viewport = Viewport::new(1000.0, 800.0).unwrap();
    for _ in 0..5 {
        icons
            .on_pointer_move(Point::new(600.0, 500.0), viewport, &mut stage, &mut sched)
            .unwrap();
        sched.tick(1.0, &mut stage);
    }
    let node = icons.icons()[0].node;
    assert!(approx(stage.value(node, Prop::OffsetX).unwrap(), 100.0 * 0.02));
    assert!(approx(stage.value(node, Prop::OffsetY).unwrap(), 100.0 * 0.02));
}

#[test]
fn unmount_stops_everything() {
    let (mut stage, mut sched, mut icons) = mount();
    let mut listeners = Listeners::new();
    icons.attach(&mut listeners);
    icons.detach(&mut listeners);
    icons.unmount(&mut stage, &mut sched);
    assert_eq!(listeners.total(), 0);
    assert_eq!(sched.active_count(), 0);
    assert!(stage.is_empty());
}
