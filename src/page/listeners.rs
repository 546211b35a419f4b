use std::collections::BTreeMap;

/// Kind of global event a listener is registered for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    /// Window scroll.
    Scroll,
    /// Pointer move anywhere on the page.
    PointerMove,
    /// Pointer entering an element.
    PointerEnter,
    /// Pointer leaving an element.
    PointerLeave,
    /// Click.
    Click,
}

/// Handle returned by [`Listeners::add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

/// Opaque handle of a DOM element known to the page.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u32);

/// Registry of attached listeners.
///
/// Effects register what they listen to on `attach` and remove it again on `detach`; the
/// browser adapter mirrors the registry onto real DOM listeners. After a page unmount the
/// registry must be empty.
#[derive(Debug, Default)]
pub struct Listeners {
    active: BTreeMap<ListenerId, (EventKind, Option<ElementId>)>,
    next: u64,
}

impl Listeners {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a global listener.
    pub fn add(&mut self, kind: EventKind) -> ListenerId {
        self.insert(kind, None)
    }

    /// Register a listener on one element.
    pub fn add_on(&mut self, kind: EventKind, element: ElementId) -> ListenerId {
        self.insert(kind, Some(element))
    }

    fn insert(&mut self, kind: EventKind, element: Option<ElementId>) -> ListenerId {
        let id = ListenerId(self.next);
        self.next += 1;
        self.active.insert(id, (kind, element));
        id
    }

    /// Remove a listener. Returns `false` when it was already gone.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.active.remove(&id).is_some()
    }

    /// Remove every listener in `ids`, leaving `ids` empty.
    pub fn remove_all(&mut self, ids: &mut Vec<ListenerId>) {
        for id in ids.drain(..) {
            self.active.remove(&id);
        }
    }

    /// Number of listeners of `kind`.
    pub fn count(&self, kind: EventKind) -> usize {
        self.active.values().filter(|(k, _)| *k == kind).count()
    }

    /// Number of listeners attached to `element`.
    pub fn count_on(&self, element: ElementId) -> usize {
        self.active
            .values()
            .filter(|(_, e)| *e == Some(element))
            .count()
    }

    /// Number of listeners of any kind.
    pub fn total(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/listeners.rs"]
mod tests;
