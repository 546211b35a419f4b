use crate::{
    animation::{
        ease::Ease,
        scheduler::{Scheduler, TimelineId},
        stage::{NodeId, NodeProps, Prop, Stage},
        timeline::{Repeat, Timeline},
        tween::Tween,
    },
    config::FloatingConfig,
    foundation::{
        core::{Point, Vec2, Viewport},
        error::FolioResult,
        math::Rng64,
    },
    page::listeners::{EventKind, ListenerId, Listeners},
};

/// Icon name, base offset from the container center, start delay.
const CONSTELLATION: [(&str, (f64, f64), f64); 6] = [
    ("code", (-100.0, -50.0), 0.0),
    ("palette", (100.0, -80.0), 0.2),
    ("trending-up", (-120.0, 50.0), 0.4),
    ("megaphone", (80.0, 80.0), 0.6),
    ("globe", (0.0, -100.0), 0.8),
    ("sparkles", (0.0, 100.0), 1.0),
];

/// Randomized drift of one icon.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Oscillation {
    /// Horizontal drift in pixels, `[-10, 10)`.
    pub dx: f64,
    /// Vertical drift in pixels, `[10, 40)`.
    pub dy: f64,
    /// Rotation in degrees, `[-10, 10)`.
    pub rotation: f64,
    /// Seconds per half-cycle, `[3, 5)`.
    pub duration: f64,
}

impl Oscillation {
    fn sample(rng: &mut Rng64) -> Self {
        Self {
            dy: rng.range(10.0, 40.0),
            dx: rng.range(-10.0, 10.0),
            rotation: rng.range(-10.0, 10.0),
            duration: 3.0 + rng.range(0.0, 2.0),
        }
    }
}

/// One decorative icon.
#[derive(Clone, Debug)]
pub struct FloatingIcon {
    /// Icon name.
    pub name: &'static str,
    /// Animated node.
    pub node: NodeId,
    /// Resting offset from the container center.
    pub base: Vec2,
    /// Delay before the drift starts.
    pub delay: f64,
    /// Pointer sensitivity.
    pub speed: f64,
    /// Drift parameters.
    pub oscillation: Oscillation,
    drift: TimelineId,
}

/// Constellation of drifting icons that also lean toward the pointer.
///
/// Drift animates the `X`/`Y`/`Rotation` channels forever; pointer lean animates the separate
/// `OffsetX`/`OffsetY` channels, so the two never fight over a property.
#[derive(Debug)]
pub struct FloatingIcons {
    cfg: FloatingConfig,
    icons: Vec<FloatingIcon>,
    listener: Option<ListenerId>,
}

impl FloatingIcons {
    /// Mount the icons and start their drift.
    pub fn mount(
        cfg: &FloatingConfig,
        stage: &mut Stage,
        scheduler: &mut Scheduler,
    ) -> FolioResult<Self> {
        let mut rng = Rng64::new(cfg.seed);
        let mut icons = Vec::with_capacity(CONSTELLATION.len());
        for (i, (name, (bx, by), delay)) in CONSTELLATION.into_iter().enumerate() {
            let node = stage.mount(NodeProps::default());
            let oscillation = Oscillation::sample(&mut rng);
            let drift = Timeline::new()
                .push(
                    Tween::to(node, Prop::Y, oscillation.dy, oscillation.duration)
                        .ease(Ease::InOutSine)
                        .at(delay),
                )
                .push(
                    Tween::to(node, Prop::X, oscillation.dx, oscillation.duration)
                        .ease(Ease::InOutSine)
                        .at(delay),
                )
                .push(
                    Tween::to(node, Prop::Rotation, oscillation.rotation, oscillation.duration)
                        .ease(Ease::InOutSine)
                        .at(delay),
                )
                .repeat(Repeat::Forever)
                .yoyo(true);
            let drift = scheduler.play(drift, stage)?;
            icons.push(FloatingIcon {
                name,
                node,
                base: Vec2::new(bx, by),
                delay,
                speed: cfg.base_speed + i as f64 * cfg.speed_step,
                oscillation,
                drift,
            });
        }
        Ok(Self {
            cfg: cfg.clone(),
            icons,
            listener: None,
        })
    }

    /// Icons in constellation order.
    pub fn icons(&self) -> &[FloatingIcon] {
        &self.icons
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

    /// Lean every icon toward `p`, proportionally to its sensitivity.
    pub fn on_pointer_move(
        &mut self,
        p: Point,
        viewport: Viewport,
        stage: &mut Stage,
        scheduler: &mut Scheduler,
    ) -> FolioResult<()> {
        let d = viewport.offset_from_center(p);
        for icon in &self.icons {
            let target = d * icon.speed;
            let tl = Timeline::new()
                .push(
                    Tween::to(icon.node, Prop::OffsetX, target.x, self.cfg.follow_duration)
                        .ease(Ease::OutCubic),
                )
                .push(
                    Tween::to(icon.node, Prop::OffsetY, target.y, self.cfg.follow_duration)
                        .ease(Ease::OutCubic),
                )
                .overwrite(true);
            scheduler.play(tl, stage)?;
        }
        Ok(())
    }

    /// Rendered position of `icon` relative to the container center.
    pub fn position(&self, icon: usize, stage: &Stage) -> Option<Point> {
        let icon = self.icons.get(icon)?;
        let props = stage.get(icon.node)?;
        Some(Point::new(
            icon.base.x + props.translate_x(),
            icon.base.y + props.translate_y(),
        ))
    }

    /// Stop every animation and drop the icon nodes.
    pub fn unmount(&mut self, stage: &mut Stage, scheduler: &mut Scheduler) {
        for icon in self.icons.drain(..) {
            scheduler.kill(icon.drift);
            scheduler.kill_target(icon.node);
            stage.unmount(icon.node);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pointer/floating.rs"]
mod tests;
