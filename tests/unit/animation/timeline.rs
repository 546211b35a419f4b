use super::*;
use crate::animation::stage::{NodeId, Prop};

fn tw(to: f64, duration: f64) -> Tween {
    Tween::to(NodeId(0), Prop::X, to, duration)
}

#[test]
fn then_appends_at_current_end() {
    let tl = Timeline::new().push(tw(1.0, 2.0)).then(tw(0.0, 0.5));
    assert_eq!(tl.tweens[1].offset, 2.0);
    assert_eq!(tl.duration(), 2.5);
    assert_eq!(tl.total_duration(), Some(2.5));
}

#[test]
fn total_duration_counts_delay_and_repeats() {
    let tl = Timeline::new()
        .push(tw(1.0, 0.5))
        .delay(1.0)
        .repeat(Repeat::Times(2));
    assert_eq!(tl.total_duration(), Some(2.5));
    assert_eq!(tl.clone().repeat(Repeat::Forever).total_duration(), None);
}

#[test]
fn cursor_waits_runs_and_finishes() {
    let tl = Timeline::new().push(tw(1.0, 1.0)).delay(0.5);
    assert_eq!(tl.cursor(0.25), Cursor::Waiting);
    assert_eq!(tl.cursor(1.0), Cursor::Running(0.5));
    assert_eq!(tl.cursor(1.5), Cursor::Finished(1.0));
}

#[test]
fn yoyo_reverses_odd_cycles() {
    let tl = Timeline::new()
        .push(tw(1.0, 1.0))
        .repeat(Repeat::Forever)
        .yoyo(true);
    assert_eq!(tl.cursor(0.25), Cursor::Running(0.25));
    assert_eq!(tl.cursor(1.25), Cursor::Running(0.75));
    assert_eq!(tl.cursor(2.25), Cursor::Running(0.25));
}

#[test]
fn yoyo_with_even_cycle_count_settles_at_start() {
    let tl = Timeline::new()
        .push(tw(1.0, 1.0))
        .repeat(Repeat::Times(1))
        .yoyo(true);
    assert_eq!(tl.cursor(5.0), Cursor::Finished(0.0));
    let tl = tl.repeat(Repeat::Times(2));
    assert_eq!(tl.cursor(5.0), Cursor::Finished(1.0));
}

#[test]
fn validate_rejects_bad_descriptors() {
    assert!(Timeline::new().push(tw(1.0, -1.0)).validate().is_err());
    assert!(Timeline::new().push(tw(1.0, 1.0)).delay(-0.1).validate().is_err());
    assert!(Timeline::new().repeat(Repeat::Forever).validate().is_err());
    assert!(Timeline::new().push(tw(f64::NAN, 1.0)).validate().is_err());
    assert!(Timeline::new().push(tw(1.0, 1.0)).validate().is_ok());
}
