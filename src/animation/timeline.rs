use crate::{
    animation::tween::Tween,
    foundation::error::{FolioError, FolioResult},
};

/// How many times a timeline plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Repeat {
    /// Play once.
    #[default]
    Once,
    /// Play once, then repeat `n` more times.
    Times(u32),
    /// Repeat until killed.
    Forever,
}

/// Where a timeline is at a given elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Cursor {
    /// Still inside the start delay.
    Waiting,
    /// Running at cycle-local time `t`.
    Running(f64),
    /// Past its last cycle; settled at cycle-local time `t`.
    Finished(f64),
}

/// Ordered set of tweens played together.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    /// Tweens in insertion order. Later tweens win when two write the same channel.
    pub tweens: Vec<Tween>,
    /// Seconds to wait after `play` before the first cycle starts.
    pub delay: f64,
    /// Repeat policy.
    pub repeat: Repeat,
    /// Play every odd cycle backwards.
    pub yoyo: bool,
    /// Remove conflicting `(target, prop)` tracks from running timelines when played.
    pub overwrite: bool,
}

impl Timeline {
    /// Empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween at its own offset.
    pub fn push(mut self, tween: Tween) -> Self {
        self.tweens.push(tween);
        self
    }

    /// Add a tween starting where the timeline currently ends.
    pub fn then(mut self, tween: Tween) -> Self {
        let end = self.duration();
        self.tweens.push(tween.at(end));
        self
    }

    /// Set the start delay.
    pub fn delay(mut self, secs: f64) -> Self {
        self.delay = secs;
        self
    }

    /// Set the repeat policy.
    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Enable or disable yoyo playback.
    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Enable or disable overwrite of conflicting tracks.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Length of one cycle in seconds.
    pub fn duration(&self) -> f64 {
        self.tweens.iter().map(Tween::end).fold(0.0, f64::max)
    }

    /// Delay plus every cycle, or `None` for infinite timelines.
    pub fn total_duration(&self) -> Option<f64> {
        let cycles = match self.repeat {
            Repeat::Once => 1.0,
            Repeat::Times(n) => f64::from(n) + 1.0,
            Repeat::Forever => return None,
        };
        Some(self.delay + self.duration() * cycles)
    }

    /// Validate the timeline and every tween in it.
    pub fn validate(&self) -> FolioResult<()> {
        if !self.delay.is_finite() || self.delay < 0.0 {
            return Err(FolioError::animation(format!(
                "timeline delay must be finite and >= 0, got {}",
                self.delay
            )));
        }
        for t in &self.tweens {
            t.validate()?;
        }
        if self.repeat == Repeat::Forever && self.duration() <= 0.0 {
            return Err(FolioError::animation(
                "infinitely repeating timeline must have a positive duration",
            ));
        }
        Ok(())
    }

    pub(crate) fn cursor(&self, elapsed: f64) -> Cursor {
        let local = elapsed - self.delay;
        if local < 0.0 {
            return Cursor::Waiting;
        }

        let dur = self.duration();
        let cycles = match self.repeat {
            Repeat::Once => Some(1u64),
            Repeat::Times(n) => Some(u64::from(n) + 1),
            Repeat::Forever => None,
        };

        if let Some(cycles) = cycles {
            if local >= dur * cycles as f64 {
                let last_reversed = self.yoyo && (cycles - 1) % 2 == 1;
                return Cursor::Finished(if last_reversed { 0.0 } else { dur });
            }
        }
        if dur <= 0.0 {
            return Cursor::Finished(dur);
        }

        let iter = (local / dur).floor();
        let mut t = local - iter * dur;
        if self.yoyo && (iter as u64) % 2 == 1 {
            t = dur - t;
        }
        Cursor::Running(t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
