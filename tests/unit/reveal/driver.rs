use super::*;
use crate::{animation::stage::NodeProps, config::GateConfig};

struct Rig {
    stage: Stage,
    sched: Scheduler,
    driver: RevealDriver,
}

impl Rig {
    fn new() -> Self {
        Self {
            stage: Stage::new(),
            sched: Scheduler::new(),
            driver: RevealDriver::new(&RevealConfig::default()),
        }
    }

    fn scroll(&mut self, tops: &[(RevealKey, f64)]) {
        let tops = tops.to_vec();
        self.driver
            .on_scroll(
                1000.0,
                move |k| tops.iter().find(|(key, _)| *key == k).map(|(_, t)| *t),
                &mut self.stage,
                &mut self.sched,
            )
            .unwrap();
    }

    fn advance(&mut self, secs: f64) {
        let events = self.sched.tick(secs, &mut self.stage);
        self.driver.observe(&events);
    }
}

const ABOUT: RevealKey = RevealKey::Section(SectionId::About);

#[test]
fn registration_applies_hidden_state() {
    let mut rig = Rig::new();
    let node = rig.stage.mount(NodeProps::default());
    rig.driver
        .register_section(SectionId::About, node, &mut rig.stage);
    assert_eq!(rig.stage.value(node, Prop::Opacity), Some(0.0));
    assert_eq!(rig.stage.value(node, Prop::Y), Some(50.0));
}

#[test]
fn entrance_replays_once_per_entry() {
    let mut rig = Rig::new();
    let node = rig.stage.mount(NodeProps::default());
    rig.driver
        .register_section(SectionId::About, node, &mut rig.stage);

    rig.scroll(&[(ABOUT, 700.0)]);
    rig.scroll(&[(ABOUT, 600.0)]);
    assert_eq!(rig.driver.play_count(ABOUT), 1);
    rig.advance(2.0);
    assert_eq!(rig.stage.value(node, Prop::Opacity), Some(1.0));
    assert_eq!(rig.stage.value(node, Prop::Y), Some(0.0));

    rig.scroll(&[(ABOUT, 900.0)]);
    assert_eq!(rig.stage.value(node, Prop::Opacity), Some(0.0));
    assert_eq!(rig.stage.value(node, Prop::Y), Some(50.0));
    assert_eq!(rig.driver.play_count(ABOUT), 1);

    rig.scroll(&[(ABOUT, 500.0)]);
    rig.scroll(&[(ABOUT, 400.0)]);
    assert_eq!(rig.driver.play_count(ABOUT), 2);
}

#[test]
fn leaving_mid_flight_aborts_the_entrance() {
    let mut rig = Rig::new();
    let node = rig.stage.mount(NodeProps::default());
    rig.driver
        .register_section(SectionId::About, node, &mut rig.stage);
    rig.scroll(&[(ABOUT, 100.0)]);
    rig.advance(0.3);
    rig.scroll(&[(ABOUT, 950.0)]);
    assert_eq!(rig.sched.active_count(), 0);
    rig.advance(1.0);
    assert_eq!(rig.stage.value(node, Prop::Opacity), Some(0.0));
}

#[test]
fn cards_cascade_by_index() {
    let mut rig = Rig::new();
    let nodes: Vec<NodeId> = (0..3)
        .map(|_| rig.stage.mount(NodeProps::default()))
        .collect();
    for (i, n) in nodes.iter().enumerate() {
        rig.driver
            .register_card(SectionId::Skills, i, *n, &mut rig.stage);
    }
    let tops: Vec<(RevealKey, f64)> = (0..3)
        .map(|i| (RevealKey::Card(SectionId::Skills, i), 650.0))
        .collect();
    rig.scroll(&tops);

    rig.advance(0.15);
    assert!(rig.stage.value(nodes[0], Prop::Opacity).unwrap() > 0.0);
    assert!(rig.stage.value(nodes[1], Prop::Opacity).unwrap() > 0.0);
    assert_eq!(rig.stage.value(nodes[2], Prop::Opacity), Some(0.0));
}

#[test]
fn card_threshold_is_tighter_than_section() {
    let mut rig = Rig::new();
    let section = rig.stage.mount(NodeProps::default());
    let card = rig.stage.mount(NodeProps::default());
    rig.driver
        .register_section(SectionId::Projects, section, &mut rig.stage);
    rig.driver
        .register_card(SectionId::Projects, 0, card, &mut rig.stage);
    let card_key = RevealKey::Card(SectionId::Projects, 0);
    rig.scroll(&[(RevealKey::Section(SectionId::Projects), 750.0), (card_key, 750.0)]);
    assert_eq!(rig.driver.play_count(RevealKey::Section(SectionId::Projects)), 1);
    assert_eq!(rig.driver.play_count(card_key), 0);
}

#[test]
fn unregistering_a_card_kills_its_timeline() {
    let mut rig = Rig::new();
    let card = rig.stage.mount(NodeProps::default());
    rig.driver
        .register_card(SectionId::Projects, 0, card, &mut rig.stage);
    rig.scroll(&[(RevealKey::Card(SectionId::Projects, 0), 0.0)]);
    assert_eq!(rig.sched.active_count(), 1);
    let removed = rig.driver.clear_cards(SectionId::Projects, &mut rig.sched);
    assert_eq!(removed, vec![card]);
    assert_eq!(rig.sched.active_count(), 0);
}

#[test]
fn page_load_waits_for_gate_and_plays_once() {
    let mut rig = Rig::new();
    let hero = rig.stage.mount(NodeProps::default());
    let mut gate = LoadingGate::start(&GateConfig::default(), &mut rig.stage, &mut rig.sched)
        .unwrap();

    assert!(
        rig.driver
            .play_page_load(&gate, hero, &mut rig.stage, &mut rig.sched)
            .is_err()
    );
    assert!(!rig.driver.page_load_played());

    for _ in 0..60 {
        let events = rig.sched.tick(0.05, &mut rig.stage);
        gate.observe(&events, &mut rig.stage, &mut rig.sched);
    }
    assert!(gate.is_complete());

    rig.driver
        .play_page_load(&gate, hero, &mut rig.stage, &mut rig.sched)
        .unwrap();
    assert_eq!(rig.stage.value(hero, Prop::Opacity), Some(0.0));
    assert!(
        rig.driver
            .play_page_load(&gate, hero, &mut rig.stage, &mut rig.sched)
            .is_err()
    );
    rig.advance(1.5);
    assert_eq!(rig.stage.value(hero, Prop::Opacity), Some(1.0));
}
