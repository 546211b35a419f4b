use super::*;

#[test]
fn counts_follow_adds_and_removes() {
    let mut l = Listeners::new();
    let scroll = l.add(EventKind::Scroll);
    let enter = l.add_on(EventKind::PointerEnter, ElementId(7));
    l.add_on(EventKind::PointerLeave, ElementId(7));
    assert_eq!(l.count(EventKind::Scroll), 1);
    assert_eq!(l.count_on(ElementId(7)), 2);
    assert_eq!(l.total(), 3);

    assert!(l.remove(scroll));
    assert!(!l.remove(scroll));
    let mut rest = vec![enter];
    l.remove_all(&mut rest);
    assert!(rest.is_empty());
    assert_eq!(l.total(), 1);
}
