/// Edge reported by [`ScrollTrigger::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    /// The element's top edge crossed above the start line.
    Enter,
    /// The element's top edge moved back below the start line.
    LeaveBack,
}

/// Toggle-reversible viewport trigger.
///
/// Fires `Enter` when an element's top edge reaches `start × viewport height` and `LeaveBack`
/// when it drops below that line again. Repeated samples on the same side report nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    start: f64,
    inside: bool,
}

impl ScrollTrigger {
    /// Trigger at viewport fraction `start` (clamped to `[0, 1]`).
    pub fn new(start: f64) -> Self {
        Self {
            start: start.clamp(0.0, 1.0),
            inside: false,
        }
    }

    /// Start line as a viewport fraction.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Return `true` after `Enter` until the next `LeaveBack`.
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Feed the element's top edge relative to the viewport top.
    pub fn update(&mut self, top_in_viewport: f64, viewport_height: f64) -> Option<TriggerEvent> {
        let crossed = top_in_viewport <= self.start * viewport_height;
        match (crossed, self.inside) {
            (true, false) => {
                self.inside = true;
                Some(TriggerEvent::Enter)
            }
            (false, true) => {
                self.inside = false;
                Some(TriggerEvent::LeaveBack)
            }
            _ => None,
        }
    }

    /// Forget the current side.
    pub fn reset(&mut self) {
        self.inside = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/trigger.rs"]
mod tests;
