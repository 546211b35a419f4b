use crate::{
    animation::stage::{NodeId, Prop, Stage},
    animation::timeline::{Cursor, Timeline},
    foundation::error::FolioResult,
};

/// Handle to a timeline started with [`Scheduler::play`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimelineId(pub u64);

/// Notification produced by [`Scheduler::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineEvent {
    /// A finite timeline reached its end and was removed.
    Completed(TimelineId),
}

#[derive(Debug)]
struct Running {
    id: TimelineId,
    timeline: Timeline,
    elapsed: f64,
    // Start values captured for `to` tweens, indexed like `timeline.tweens`.
    captured: Vec<Option<f64>>,
}

/// Minimal cooperative tween scheduler.
///
/// Timelines are fire-and-forget: `play` returns a handle and `tick` advances everything by the
/// elapsed frame time, writing property values into the [`Stage`]. There are no callbacks; the
/// caller learns about completion from the returned events, so nothing can fire against a view
/// that has already been torn down. Killing a timeline (or every track of a node) is the only
/// cancellation mechanism.
#[derive(Debug, Default)]
pub struct Scheduler {
    running: Vec<Running>,
    next_id: u64,
}

impl Scheduler {
    /// Create an idle scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a timeline.
    ///
    /// Tweens with an explicit start value that open their `(target, prop)` track are rendered
    /// immediately so the element never flashes its final state before the timeline begins.
    pub fn play(&mut self, timeline: Timeline, stage: &mut Stage) -> FolioResult<TimelineId> {
        timeline.validate()?;

        if timeline.overwrite {
            let tracks: Vec<(NodeId, Prop)> =
                timeline.tweens.iter().map(|t| (t.target, t.prop)).collect();
            for r in &mut self.running {
                r.remove_tracks(|target, prop| tracks.contains(&(target, prop)));
            }
            self.running.retain(|r| !r.timeline.tweens.is_empty());
        }

        for (i, tw) in timeline.tweens.iter().enumerate() {
            let Some(from) = tw.from else {
                continue;
            };
            let opens_track = !timeline.tweens.iter().enumerate().any(|(j, other)| {
                j != i
                    && other.target == tw.target
                    && other.prop == tw.prop
                    && (other.offset < tw.offset || (other.offset == tw.offset && j < i))
            });
            if opens_track {
                stage.set(tw.target, tw.prop, from);
            }
        }

        let id = TimelineId(self.next_id);
        self.next_id += 1;
        let captured = vec![None; timeline.tweens.len()];
        tracing::trace!(id = id.0, tweens = timeline.tweens.len(), "timeline started");
        self.running.push(Running {
            id,
            timeline,
            elapsed: 0.0,
            captured,
        });
        Ok(id)
    }

    /// Advance every running timeline by `dt` seconds.
    pub fn tick(&mut self, dt: f64, stage: &mut Stage) -> Vec<TimelineEvent> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut done = Vec::new();

        for r in &mut self.running {
            r.elapsed += dt;
            match r.timeline.cursor(r.elapsed) {
                Cursor::Waiting => {}
                Cursor::Running(t) => r.render(t, stage),
                Cursor::Finished(t) => {
                    r.render(t, stage);
                    done.push(r.id);
                }
            }
        }

        if !done.is_empty() {
            self.running.retain(|r| !done.contains(&r.id));
        }
        done.into_iter().map(TimelineEvent::Completed).collect()
    }

    /// Stop a timeline where it is. Returns `false` when it was not running.
    pub fn kill(&mut self, id: TimelineId) -> bool {
        let before = self.running.len();
        self.running.retain(|r| r.id != id);
        before != self.running.len()
    }

    /// Remove every track targeting `node`, dropping timelines left empty.
    pub fn kill_target(&mut self, node: NodeId) {
        for r in &mut self.running {
            r.remove_tracks(|target, _| target == node);
        }
        self.running.retain(|r| !r.timeline.tweens.is_empty());
    }

    /// Return `true` while the timeline is running.
    pub fn is_active(&self, id: TimelineId) -> bool {
        self.running.iter().any(|r| r.id == id)
    }

    /// Number of running timelines.
    pub fn active_count(&self) -> usize {
        self.running.len()
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.running.clear();
    }
}

impl Running {
    fn render(&mut self, t: f64, stage: &mut Stage) {
        for (i, tw) in self.timeline.tweens.iter().enumerate() {
            let Some(p) = tw.progress_at(t) else {
                continue;
            };
            let from = match tw.from {
                Some(f) => f,
                None => match self.captured[i] {
                    Some(f) => f,
                    None => {
                        let Some(current) = stage.value(tw.target, tw.prop) else {
                            continue;
                        };
                        self.captured[i] = Some(current);
                        current
                    }
                },
            };
            stage.set(tw.target, tw.prop, from + (tw.to - from) * p);
        }
    }

    fn remove_tracks(&mut self, mut doomed: impl FnMut(NodeId, Prop) -> bool) {
        let mut i = 0;
        while i < self.timeline.tweens.len() {
            let tw = &self.timeline.tweens[i];
            if doomed(tw.target, tw.prop) {
                self.timeline.tweens.remove(i);
                self.captured.remove(i);
            } else {
                i += 1;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scheduler.rs"]
mod tests;
