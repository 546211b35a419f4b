use crate::{
    animation::{
        ease::Ease,
        scheduler::Scheduler,
        stage::{NodeId, NodeProps, Prop, Stage},
        timeline::Timeline,
        tween::Tween,
    },
    config::ParallaxConfig,
    foundation::{
        core::{Point, Viewport},
        error::{FolioError, FolioResult},
    },
    page::listeners::{EventKind, ListenerId, Listeners},
};

/// Content block that leans toward the pointer.
#[derive(Debug)]
pub struct MouseParallax {
    node: NodeId,
    speed: f64,
    duration: f64,
    listener: Option<ListenerId>,
}

impl MouseParallax {
    /// Wrap a new block using the configured default sensitivity.
    pub fn mount(cfg: &ParallaxConfig, stage: &mut Stage) -> Self {
        Self {
            node: stage.mount(NodeProps::default()),
            speed: cfg.speed,
            duration: cfg.duration,
            listener: None,
        }
    }

    /// Wrap a new block with sensitivity `speed`.
    pub fn with_speed(cfg: &ParallaxConfig, speed: f64, stage: &mut Stage) -> FolioResult<Self> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(FolioError::validation(format!(
                "parallax speed must be finite and >= 0, got {speed}"
            )));
        }
        Ok(Self {
            speed,
            ..Self::mount(cfg, stage)
        })
    }

    /// Wrapped node.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Sensitivity factor.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Listen to pointer moves. Idempotent.
    pub fn attach(&mut self, listeners: &mut Listeners) {
        if self.listener.is_none() {
            self.listener = Some(listeners.add(EventKind::PointerMove));
        }
    }

    /// Stop listening. Idempotent.
    pub fn detach(&mut self, listeners: &mut Listeners) {
        if let Some(id) = self.listener.take() {
            listeners.remove(id);
        }
    }

    /// Ease the block toward `(p - center) × speed`.
    pub fn on_pointer_move(
        &mut self,
        p: Point,
        viewport: Viewport,
        stage: &mut Stage,
        scheduler: &mut Scheduler,
    ) -> FolioResult<()> {
        let target = viewport.offset_from_center(p) * self.speed;
        let tl = Timeline::new()
            .push(Tween::to(self.node, Prop::OffsetX, target.x, self.duration).ease(Ease::OutCubic))
            .push(Tween::to(self.node, Prop::OffsetY, target.y, self.duration).ease(Ease::OutCubic))
            .overwrite(true);
        scheduler.play(tl, stage)?;
        Ok(())
    }

    /// Stop any lean in flight and drop the node.
    pub fn unmount(&mut self, stage: &mut Stage, scheduler: &mut Scheduler) {
        scheduler.kill_target(self.node);
        stage.unmount(self.node);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pointer/parallax.rs"]
mod tests;
