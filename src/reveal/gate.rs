use crate::{
    animation::{
        ease::Ease,
        scheduler::{Scheduler, TimelineEvent, TimelineId},
        stage::{NodeId, NodeProps, Prop, Stage},
        timeline::{Repeat, Timeline},
        tween::Tween,
    },
    config::GateConfig,
    foundation::error::FolioResult,
};

/// Callback run once the loading screen has faded out.
pub type GateCallback = Box<dyn FnOnce()>;

/// Full-page loading screen played once per mount.
///
/// The sequence fills the progress bar, brings the text in, pulses it and finally fades the
/// loader out. Completion is reported exactly once, after which the gate's nodes are unmounted.
pub struct LoadingGate {
    loader: NodeId,
    text: NodeId,
    progress: NodeId,
    main: TimelineId,
    pulse: TimelineId,
    complete: bool,
    on_complete: Option<GateCallback>,
}

impl std::fmt::Debug for LoadingGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingGate")
            .field("loader", &self.loader)
            .field("text", &self.text)
            .field("progress", &self.progress)
            .field("main", &self.main)
            .field("complete", &self.complete)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}

impl LoadingGate {
    /// Mount the loader nodes and start the sequence.
    pub fn start(
        cfg: &GateConfig,
        stage: &mut Stage,
        scheduler: &mut Scheduler,
    ) -> FolioResult<Self> {
        let loader = stage.mount(NodeProps::default());
        let text = stage.mount(NodeProps::default());
        let progress = stage.mount(NodeProps::default());

        let main = Timeline::new()
            .push(
                Tween::from_to(progress, Prop::Width, 0.0, 100.0, cfg.fill_duration)
                    .ease(Ease::InOutCubic),
            )
            .push(Tween::from_to(text, Prop::Y, 20.0, 0.0, cfg.text_duration).ease(Ease::OutCubic))
            .push(
                Tween::from_to(text, Prop::Opacity, 0.0, 1.0, cfg.text_duration)
                    .ease(Ease::OutCubic),
            )
            .then(Tween::to(loader, Prop::Opacity, 0.0, cfg.fade_duration));
        let pulse = Timeline::new()
            .push(
                Tween::to(text, Prop::Scale, cfg.pulse_scale, cfg.pulse_duration)
                    .ease(Ease::InOutQuad),
            )
            .delay(cfg.text_duration)
            .repeat(Repeat::Times(cfg.pulse_repeats))
            .yoyo(true);

        let main = scheduler.play(main, stage)?;
        let pulse = scheduler.play(pulse, stage)?;
        Ok(Self {
            loader,
            text,
            progress,
            main,
            pulse,
            complete: false,
            on_complete: None,
        })
    }

    /// Register the completion callback, replacing any earlier one.
    pub fn on_complete(&mut self, f: impl FnOnce() + 'static) {
        self.on_complete = Some(Box::new(f));
    }

    /// Return `true` once the sequence has finished.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Loader, text and progress bar nodes.
    pub fn nodes(&self) -> [NodeId; 3] {
        [self.loader, self.text, self.progress]
    }

    /// Consume scheduler events. Returns `true` on the tick that completes the gate.
    pub fn observe(
        &mut self,
        events: &[TimelineEvent],
        stage: &mut Stage,
        scheduler: &mut Scheduler,
    ) -> bool {
        if self.complete || !events.contains(&TimelineEvent::Completed(self.main)) {
            return false;
        }
        self.complete = true;
        scheduler.kill(self.pulse);
        for node in self.nodes() {
            stage.unmount(node);
        }
        tracing::debug!("loading gate complete");
        if let Some(f) = self.on_complete.take() {
            f();
        }
        true
    }

    /// Abort the sequence and drop the loader nodes without firing completion.
    pub fn teardown(&mut self, stage: &mut Stage, scheduler: &mut Scheduler) {
        scheduler.kill(self.main);
        scheduler.kill(self.pulse);
        for node in self.nodes() {
            stage.unmount(node);
        }
        self.on_complete = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/gate.rs"]
mod tests;
