use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn interactive_elements_are_links_buttons_and_button_roles() {
    assert!(is_interactive("a", None));
    assert!(is_interactive("BUTTON", None));
    assert!(is_interactive("div", Some("button")));
    assert!(!is_interactive("div", Some("link")));
    assert!(!is_interactive("span", None));
}

#[test]
fn dot_settles_before_ring() {
    let mut stage = Stage::new();
    let mut sched = Scheduler::new();
    let mut cursor = CustomCursor::mount(&CursorConfig::default(), &mut stage);
    cursor
        .on_pointer_move(Point::new(200.0, 100.0), &mut stage, &mut sched)
        .unwrap();

    sched.tick(0.1, &mut stage);
    assert!(approx(stage.value(cursor.dot(), Prop::X).unwrap(), 200.0));
    let ring_x = stage.value(cursor.ring(), Prop::X).unwrap();
    assert!(ring_x > 0.0 && ring_x < 200.0);

    sched.tick(0.5, &mut stage);
    assert!(approx(stage.value(cursor.ring(), Prop::X).unwrap(), 200.0));
    assert!(approx(stage.value(cursor.ring(), Prop::Y).unwrap(), 100.0));
}

#[test]
fn newer_move_overrides_older_target() {
    let mut stage = Stage::new();
    let mut sched = Scheduler::new();
    let mut cursor = CustomCursor::mount(&CursorConfig::default(), &mut stage);
    cursor
        .on_pointer_move(Point::new(500.0, 0.0), &mut stage, &mut sched)
        .unwrap();
    sched.tick(0.05, &mut stage);
    cursor
        .on_pointer_move(Point::new(10.0, 0.0), &mut stage, &mut sched)
        .unwrap();
    assert_eq!(sched.active_count(), 2);
    sched.tick(1.0, &mut stage);
    assert!(approx(stage.value(cursor.ring(), Prop::X).unwrap(), 10.0));
}

#[test]
fn hover_only_reacts_to_elements_present_at_attach() {
    let mut stage = Stage::new();
    let mut sched = Scheduler::new();
    let mut listeners = Listeners::new();
    let mut cursor = CustomCursor::mount(&CursorConfig::default(), &mut stage);
    cursor.attach(&mut listeners, [ElementId(1), ElementId(2)]);
    assert_eq!(listeners.total(), 5);

    assert!(
        !cursor
            .on_pointer_enter(ElementId(9), &mut stage, &mut sched)
            .unwrap()
    );
    assert!(
        cursor
            .on_pointer_enter(ElementId(1), &mut stage, &mut sched)
            .unwrap()
    );
    assert!(cursor.is_hovering());
    sched.tick(1.0, &mut stage);
    assert!(approx(stage.value(cursor.ring(), Prop::Scale).unwrap(), 1.5));
    assert!(approx(stage.value(cursor.dot(), Prop::Scale).unwrap(), 0.0));

    cursor
        .on_pointer_leave(ElementId(1), &mut stage, &mut sched)
        .unwrap();
    sched.tick(1.0, &mut stage);
    assert!(approx(stage.value(cursor.ring(), Prop::Scale).unwrap(), 1.0));

    cursor.detach(&mut listeners);
    assert_eq!(listeners.total(), 0);
}
