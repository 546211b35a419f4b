use std::collections::BTreeMap;

use crate::{
    animation::{
        scheduler::{Scheduler, TimelineEvent, TimelineId},
        stage::{NodeId, Prop, Stage},
        timeline::Timeline,
        tween::Tween,
    },
    config::RevealConfig,
    foundation::error::{FolioError, FolioResult},
    page::section::SectionId,
    reveal::{
        gate::LoadingGate,
        trigger::{ScrollTrigger, TriggerEvent},
    },
};

/// Element watched by the [`RevealDriver`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum RevealKey {
    /// A whole section.
    Section(SectionId),
    /// The `index`-th card inside a section.
    Card(SectionId, usize),
}

#[derive(Debug)]
struct Entry {
    node: NodeId,
    trigger: ScrollTrigger,
    hidden_y: f64,
    duration: f64,
    delay: f64,
    playing: Option<TimelineId>,
    plays: u32,
}

/// Scroll-triggered entrances for sections and cards, plus the hero page-load entrance.
///
/// Entrances are toggle-reversible: scrolling an element back out resets it to its hidden
/// state so it plays again on the next entry.
#[derive(Debug)]
pub struct RevealDriver {
    cfg: RevealConfig,
    entries: BTreeMap<RevealKey, Entry>,
    page_load: Option<TimelineId>,
    page_load_played: bool,
}

impl RevealDriver {
    /// Empty driver.
    pub fn new(cfg: &RevealConfig) -> Self {
        Self {
            cfg: cfg.clone(),
            entries: BTreeMap::new(),
            page_load: None,
            page_load_played: false,
        }
    }

    /// Watch a section node. Its hidden state is applied immediately.
    pub fn register_section(&mut self, section: SectionId, node: NodeId, stage: &mut Stage) {
        let entry = Entry {
            node,
            trigger: ScrollTrigger::new(self.cfg.section_start),
            hidden_y: self.cfg.section_offset_y,
            duration: self.cfg.section_duration,
            delay: 0.0,
            playing: None,
            plays: 0,
        };
        self.insert(RevealKey::Section(section), entry, stage);
    }

    /// Watch the `index`-th card of `section`. Its hidden state is applied immediately.
    pub fn register_card(
        &mut self,
        section: SectionId,
        index: usize,
        node: NodeId,
        stage: &mut Stage,
    ) {
        let entry = Entry {
            node,
            trigger: ScrollTrigger::new(self.cfg.card_start),
            hidden_y: self.cfg.card_offset_y,
            duration: self.cfg.card_duration,
            delay: self.cfg.card_stagger * index as f64,
            playing: None,
            plays: 0,
        };
        self.insert(RevealKey::Card(section, index), entry, stage);
    }

    fn insert(&mut self, key: RevealKey, entry: Entry, stage: &mut Stage) {
        hide(&entry, stage);
        self.entries.insert(key, entry);
    }

    /// Stop watching `key`, aborting its entrance if one is in flight.
    pub fn unregister(&mut self, key: RevealKey, scheduler: &mut Scheduler) -> Option<NodeId> {
        let entry = self.entries.remove(&key)?;
        if let Some(id) = entry.playing {
            scheduler.kill(id);
        }
        Some(entry.node)
    }

    /// Unregister every card of `section` (the project grid re-renders after a filter change).
    pub fn clear_cards(&mut self, section: SectionId, scheduler: &mut Scheduler) -> Vec<NodeId> {
        let keys: Vec<RevealKey> = self
            .entries
            .keys()
            .copied()
            .filter(|k| matches!(k, RevealKey::Card(s, _) if *s == section))
            .collect();
        keys.into_iter()
            .filter_map(|k| self.unregister(k, scheduler))
            .collect()
    }

    /// Node registered under `key`.
    pub fn node(&self, key: RevealKey) -> Option<NodeId> {
        self.entries.get(&key).map(|e| e.node)
    }

    /// Number of entrances started for `key` since it was registered.
    pub fn play_count(&self, key: RevealKey) -> u32 {
        self.entries.get(&key).map_or(0, |e| e.plays)
    }

    /// Feed the current element positions.
    ///
    /// `top_of` returns an element's top edge relative to the viewport top, or `None` when it is
    /// not laid out; such elements are left untouched.
    pub fn on_scroll(
        &mut self,
        viewport_height: f64,
        top_of: impl Fn(RevealKey) -> Option<f64>,
        stage: &mut Stage,
        scheduler: &mut Scheduler,
    ) -> FolioResult<()> {
        for (key, entry) in &mut self.entries {
            let Some(top) = top_of(*key) else {
                continue;
            };
            match entry.trigger.update(top, viewport_height) {
                Some(TriggerEvent::Enter) => {
                    if let Some(id) = entry.playing.take() {
                        scheduler.kill(id);
                    }
                    let tl = Timeline::new()
                        .push(
                            Tween::from_to(entry.node, Prop::Opacity, 0.0, 1.0, entry.duration)
                                .ease(self.cfg.ease),
                        )
                        .push(
                            Tween::from_to(entry.node, Prop::Y, entry.hidden_y, 0.0, entry.duration)
                                .ease(self.cfg.ease),
                        )
                        .delay(entry.delay)
                        .overwrite(true);
                    entry.playing = Some(scheduler.play(tl, stage)?);
                    entry.plays += 1;
                    tracing::trace!(?key, plays = entry.plays, "reveal entered");
                }
                Some(TriggerEvent::LeaveBack) => {
                    if let Some(id) = entry.playing.take() {
                        scheduler.kill(id);
                    }
                    hide(entry, stage);
                }
                None => {}
            }
        }
        Ok(())
    }

    /// Forget finished timelines.
    pub fn observe(&mut self, events: &[TimelineEvent]) {
        for TimelineEvent::Completed(done) in events {
            for entry in self.entries.values_mut() {
                if entry.playing == Some(*done) {
                    entry.playing = None;
                }
            }
            if self.page_load == Some(*done) {
                self.page_load = None;
            }
        }
    }

    /// Play the hero entrance. Only allowed once the loading gate has completed, and only once.
    pub fn play_page_load(
        &mut self,
        gate: &LoadingGate,
        hero: NodeId,
        stage: &mut Stage,
        scheduler: &mut Scheduler,
    ) -> FolioResult<TimelineId> {
        if !gate.is_complete() {
            return Err(FolioError::animation(
                "page-load entrance requested before the loading screen finished",
            ));
        }
        if self.page_load_played {
            return Err(FolioError::animation("page-load entrance already played"));
        }
        let tl = Timeline::new()
            .push(
                Tween::from_to(hero, Prop::Opacity, 0.0, 1.0, self.cfg.hero_duration)
                    .ease(self.cfg.ease),
            )
            .push(
                Tween::from_to(hero, Prop::Y, self.cfg.hero_offset_y, 0.0, self.cfg.hero_duration)
                    .ease(self.cfg.ease),
            );
        let id = scheduler.play(tl, stage)?;
        self.page_load = Some(id);
        self.page_load_played = true;
        Ok(id)
    }

    /// Return `true` once the hero entrance has been started.
    pub fn page_load_played(&self) -> bool {
        self.page_load_played
    }

    /// Abort everything and forget all registrations.
    pub fn reset(&mut self, scheduler: &mut Scheduler) {
        for entry in self.entries.values() {
            if let Some(id) = entry.playing {
                scheduler.kill(id);
            }
        }
        if let Some(id) = self.page_load.take() {
            scheduler.kill(id);
        }
        self.entries.clear();
        self.page_load_played = false;
    }
}

fn hide(entry: &Entry, stage: &mut Stage) {
    stage.set(entry.node, Prop::Opacity, 0.0);
    stage.set(entry.node, Prop::Y, entry.hidden_y);
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/driver.rs"]
mod tests;
