use crate::{
    animation::ease::Ease,
    animation::stage::{NodeId, Prop},
    foundation::error::{FolioError, FolioResult},
};

/// One timed interpolation of a single node property.
///
/// A tween is a plain descriptor: `(target, prop, from, to, duration, ease, offset)`. It does
/// nothing on its own; a [`crate::Scheduler`] samples it as part of a [`crate::Timeline`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween {
    /// Node being animated.
    pub target: NodeId,
    /// Property channel being animated.
    pub prop: Prop,
    /// Start value. `None` captures the node's current value when the tween starts.
    pub from: Option<f64>,
    /// End value.
    pub to: f64,
    /// Duration in seconds (`>= 0`).
    pub duration: f64,
    /// Easing applied to progress.
    pub ease: Ease,
    /// Start offset in seconds, relative to the owning timeline.
    pub offset: f64,
}

impl Tween {
    /// Tween from the current value to `to`.
    pub fn to(target: NodeId, prop: Prop, to: f64, duration: f64) -> Self {
        Self {
            target,
            prop,
            from: None,
            to,
            duration,
            ease: Ease::Linear,
            offset: 0.0,
        }
    }

    /// Tween between explicit values.
    pub fn from_to(target: NodeId, prop: Prop, from: f64, to: f64, duration: f64) -> Self {
        Self {
            from: Some(from),
            ..Self::to(target, prop, to, duration)
        }
    }

    /// Set the easing function.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Set the start offset within the timeline.
    pub fn at(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Timeline-relative end time.
    pub fn end(&self) -> f64 {
        self.offset + self.duration
    }

    /// Eased progress at timeline-local time `t`, or `None` before the tween starts.
    pub fn progress_at(&self, t: f64) -> Option<f64> {
        if t < self.offset {
            return None;
        }
        if self.duration <= 0.0 {
            return Some(1.0);
        }
        Some(self.ease.apply((t - self.offset) / self.duration))
    }

    /// Validate numeric invariants.
    pub fn validate(&self) -> FolioResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(FolioError::animation(format!(
                "tween duration must be finite and >= 0, got {}",
                self.duration
            )));
        }
        if !self.offset.is_finite() || self.offset < 0.0 {
            return Err(FolioError::animation(format!(
                "tween offset must be finite and >= 0, got {}",
                self.offset
            )));
        }
        if !self.to.is_finite() || self.from.is_some_and(|f| !f.is_finite()) {
            return Err(FolioError::animation("tween endpoints must be finite"));
        }
        Ok(())
    }
}
