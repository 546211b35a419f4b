use std::collections::BTreeSet;

use crate::{
    animation::{
        scheduler::Scheduler,
        stage::{NodeId, NodeProps, Prop, Stage},
        timeline::Timeline,
        tween::Tween,
    },
    config::CursorConfig,
    foundation::{core::Point, error::FolioResult},
    page::listeners::{ElementId, EventKind, ListenerId, Listeners},
};

/// Return `true` for elements the cursor reacts to: links, buttons and `role="button"`.
pub fn is_interactive(tag: &str, role: Option<&str>) -> bool {
    tag.eq_ignore_ascii_case("a")
        || tag.eq_ignore_ascii_case("button")
        || role.is_some_and(|r| r.trim().eq_ignore_ascii_case("button"))
}

/// Ring-and-dot cursor indicator.
///
/// The ring settles slowly on the pointer, the dot almost immediately. Hover coverage is the
/// set of interactive elements handed to [`CustomCursor::attach`]; elements added afterwards are
/// not tracked.
#[derive(Debug)]
pub struct CustomCursor {
    cfg: CursorConfig,
    ring: NodeId,
    dot: NodeId,
    covered: BTreeSet<ElementId>,
    hovering: bool,
    listeners: Vec<ListenerId>,
}

impl CustomCursor {
    /// Mount the ring and dot nodes.
    pub fn mount(cfg: &CursorConfig, stage: &mut Stage) -> Self {
        Self {
            cfg: cfg.clone(),
            ring: stage.mount(NodeProps::default()),
            dot: stage.mount(NodeProps::default()),
            covered: BTreeSet::new(),
            hovering: false,
            listeners: Vec::new(),
        }
    }

    /// Ring node.
    pub fn ring(&self) -> NodeId {
        self.ring
    }

    /// Dot node.
    pub fn dot(&self) -> NodeId {
        self.dot
    }

    /// Return `true` while the pointer is over a covered element.
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Listen to pointer moves and to enter/leave on each of `interactive`.
    pub fn attach(
        &mut self,
        listeners: &mut Listeners,
        interactive: impl IntoIterator<Item = ElementId>,
    ) {
        if !self.listeners.is_empty() {
            return;
        }
        self.listeners.push(listeners.add(EventKind::PointerMove));
        for el in interactive {
            if self.covered.insert(el) {
                self.listeners
                    .push(listeners.add_on(EventKind::PointerEnter, el));
                self.listeners
                    .push(listeners.add_on(EventKind::PointerLeave, el));
            }
        }
    }

    /// Remove every listener and forget the covered elements.
    pub fn detach(&mut self, listeners: &mut Listeners) {
        listeners.remove_all(&mut self.listeners);
        self.covered.clear();
        self.hovering = false;
    }

    /// Move both nodes toward `p`.
    pub fn on_pointer_move(
        &mut self,
        p: Point,
        stage: &mut Stage,
        scheduler: &mut Scheduler,
    ) -> FolioResult<()> {
        let (duration, ease) = (self.cfg.ring_duration, self.cfg.ring_ease);
        let ring = Timeline::new()
            .push(Tween::to(self.ring, Prop::X, p.x, duration).ease(ease))
            .push(Tween::to(self.ring, Prop::Y, p.y, duration).ease(ease))
            .overwrite(true);
        let dot = Timeline::new()
            .push(Tween::to(self.dot, Prop::X, p.x, self.cfg.dot_duration))
            .push(Tween::to(self.dot, Prop::Y, p.y, self.cfg.dot_duration))
            .overwrite(true);
        scheduler.play(ring, stage)?;
        scheduler.play(dot, stage)?;
        Ok(())
    }

    /// Pointer entered `el`. Returns `true` when the cursor reacted.
    pub fn on_pointer_enter(
        &mut self,
        el: ElementId,
        stage: &mut Stage,
        scheduler: &mut Scheduler,
    ) -> FolioResult<bool> {
        if !self.covered.contains(&el) {
            return Ok(false);
        }
        self.hovering = true;
        self.scale_to(self.cfg.ring_hover_scale, self.cfg.dot_hover_scale, stage, scheduler)?;
        Ok(true)
    }

    /// Pointer left `el`. Returns `true` when the cursor reacted.
    pub fn on_pointer_leave(
        &mut self,
        el: ElementId,
        stage: &mut Stage,
        scheduler: &mut Scheduler,
    ) -> FolioResult<bool> {
        if !self.covered.contains(&el) {
            return Ok(false);
        }
        self.hovering = false;
        self.scale_to(1.0, 1.0, stage, scheduler)?;
        Ok(true)
    }

    fn scale_to(
        &self,
        ring: f64,
        dot: f64,
        stage: &mut Stage,
        scheduler: &mut Scheduler,
    ) -> FolioResult<()> {
        let tl = Timeline::new()
            .push(Tween::to(self.ring, Prop::Scale, ring, self.cfg.hover_duration))
            .push(Tween::to(self.dot, Prop::Scale, dot, self.cfg.hover_duration))
            .overwrite(true);
        scheduler.play(tl, stage)?;
        Ok(())
    }

    /// Drop the nodes and any tween still targeting them.
    pub fn unmount(&mut self, stage: &mut Stage, scheduler: &mut Scheduler) {
        for node in [self.ring, self.dot] {
            scheduler.kill_target(node);
            stage.unmount(node);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pointer/cursor.rs"]
mod tests;
