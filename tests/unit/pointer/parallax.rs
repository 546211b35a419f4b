use super::*;

#[test]
fn block_settles_on_scaled_displacement() {
    let mut stage = Stage::new();
    let mut sched = Scheduler::new();
    let mut block = MouseParallax::mount(&ParallaxConfig::default(), &mut stage);
    let viewport = Viewport::new(800.0, 600.0).unwrap();

    block
        .on_pointer_move(Point::new(0.0, 0.0), viewport, &mut stage, &mut sched)
        .unwrap();
    sched.tick(0.5, &mut stage);
    let halfway = stage.value(block.node(), Prop::OffsetX).unwrap();
    assert!(halfway < 0.0 && halfway > -20.0);

    sched.tick(0.5, &mut stage);
    let props = stage.get(block.node()).unwrap();
    assert!((props.offset_x - -20.0).abs() < 1e-9);
    assert!((props.offset_y - -15.0).abs() < 1e-9);
}

#[test]
fn custom_speed_is_validated() {
    let mut stage = Stage::new();
    let cfg = ParallaxConfig::default();
    assert!(MouseParallax::with_speed(&cfg, -1.0, &mut stage).is_err());
    let block = MouseParallax::with_speed(&cfg, 0.1, &mut stage).unwrap();
    assert_eq!(block.speed(), 0.1);
}

#[test]
fn detach_and_unmount_leave_nothing_behind() {
    let mut stage = Stage::new();
    let mut sched = Scheduler::new();
    let mut listeners = Listeners::new();
    let mut block = MouseParallax::mount(&ParallaxConfig::default(), &mut stage);
    block.attach(&mut listeners);
    assert_eq!(listeners.count(EventKind::PointerMove), 1);
    block
        .on_pointer_move(
            Point::new(10.0, 10.0),
            Viewport::new(100.0, 100.0).unwrap(),
            &mut stage,
            &mut sched,
        )
        .unwrap();
    block.detach(&mut listeners);
    block.unmount(&mut stage, &mut sched);
    assert_eq!(listeners.total(), 0);
    assert_eq!(sched.active_count(), 0);
    assert!(stage.is_empty());
}
