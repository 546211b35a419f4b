use super::*;

fn three_bands() -> PageLayout {
    PageLayout::new()
        .with(SectionId::Hero, Band::new(0.0, 500.0).unwrap())
        .with(SectionId::About, Band::new(500.0, 700.0).unwrap())
        .with(SectionId::Skills, Band::new(1200.0, 800.0).unwrap())
}

#[test]
fn lookahead_selects_the_upcoming_section() {
    let layout = three_bands();
    let mut t = ScrollTracker::new(&ScrollConfig::default());
    assert_eq!(t.sample(450.0, &layout), SectionId::About);
    assert_eq!(t.sample(0.0, &layout), SectionId::Hero);
    assert_eq!(t.sample(1100.0, &layout), SectionId::Skills);
}

#[test]
fn no_match_keeps_previous_section() {
    let layout = three_bands();
    let mut t = ScrollTracker::new(&ScrollConfig::default());
    t.sample(600.0, &layout);
    assert_eq!(t.sample(5000.0, &layout), SectionId::About);
}

#[test]
fn missing_anchor_is_skipped() {
    let layout = PageLayout::new()
        .with(SectionId::Hero, Band::new(0.0, 500.0).unwrap())
        .with(SectionId::Skills, Band::new(500.0, 500.0).unwrap());
    let mut t = ScrollTracker::new(&ScrollConfig::default());
    assert_eq!(t.sample(450.0, &layout), SectionId::Skills);
}

#[test]
fn scroll_to_targets_top_edge_and_closes_menu() {
    let layout = three_bands();
    let t = ScrollTracker::new(&ScrollConfig::default());
    let mut nav = Navigation::new();
    nav.toggle_menu();

    let req = t.scroll_to(SectionId::About, &layout, &mut nav).unwrap();
    assert_eq!(req.target_y, 500.0);
    assert_eq!(req.behavior, ScrollBehavior::Smooth);
    assert!(!nav.is_menu_open());

    nav.toggle_menu();
    assert!(t.scroll_to(SectionId::Contact, &layout, &mut nav).is_none());
    assert!(!nav.is_menu_open());
}

#[test]
fn attach_detach_balances_listeners() {
    let mut listeners = Listeners::new();
    let mut t = ScrollTracker::new(&ScrollConfig::default());
    t.attach(&mut listeners);
    t.attach(&mut listeners);
    assert_eq!(listeners.count(EventKind::Scroll), 1);
    t.detach(&mut listeners);
    t.detach(&mut listeners);
    assert_eq!(listeners.total(), 0);
}

#[test]
fn layout_parses_from_json() {
    let json = r#"{ "hero": { "top": 0, "bottom": 500 }, "contact": { "top": 500, "bottom": 900 } }"#;
    let layout = PageLayout::from_reader(json.as_bytes()).unwrap();
    assert_eq!(layout.band(SectionId::Contact).unwrap().top, 500.0);
    assert!(layout.band(SectionId::About).is_none());
}
