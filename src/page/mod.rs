//! Page sections, navigation, listener bookkeeping and the [`Page`] that wires every effect
//! together.

pub(crate) mod listeners;
pub(crate) mod nav;
pub(crate) mod scroll;
pub(crate) mod section;

use std::collections::BTreeMap;

use crate::{
    animation::{
        scheduler::Scheduler,
        stage::{NodeId, NodeProps, Stage},
    },
    catalog::{
        filter::{CategoryFilter, GalleryView, ProjectGallery, SubcategoryFilter},
        model::Catalog,
    },
    config::SiteConfig,
    contact::{
        form::ContactForm,
        relay::{ContactFunction, ContactRelay},
    },
    foundation::{
        core::{Band, Point, Viewport},
        error::FolioResult,
    },
    page::{
        listeners::{ElementId, Listeners},
        nav::Navigation,
        scroll::{ScrollRequest, ScrollTracker, SectionLayout},
        section::SectionId,
    },
    pointer::{cursor::CustomCursor, floating::FloatingIcons, parallax::MouseParallax},
    reveal::{
        driver::{RevealDriver, RevealKey},
        gate::LoadingGate,
    },
    scene::renderer::{GraphicsDevice, SceneRenderer},
};

#[derive(Debug)]
struct Effects {
    gate: LoadingGate,
    cursor: CustomCursor,
    floating: FloatingIcons,
    parallax: Vec<MouseParallax>,
    sections: BTreeMap<SectionId, NodeId>,
    skill_cards: Vec<NodeId>,
    project_cards: Vec<NodeId>,
}

/// Project grid geometry seen by the last scroll sample.
#[derive(Clone, Debug)]
struct ScrollSample {
    y: f64,
    grid: Option<Band>,
    cards: Vec<Option<f64>>,
}

impl ScrollSample {
    /// Top edge of project card `index`; unmeasured cards sit at the top of the grid.
    fn card_top(&self, index: usize) -> Option<f64> {
        self.cards
            .get(index)
            .copied()
            .flatten()
            .or(self.grid.map(|b| b.top))
    }
}

/// The whole single-page site as a headless state machine.
///
/// Hosts feed it scroll, pointer and frame events and read node properties back from the
/// [`Stage`]. Everything attached in [`Page::mount`] is detached again in [`Page::unmount`].
#[derive(Debug)]
pub struct Page<D: GraphicsDevice> {
    cfg: SiteConfig,
    catalog: Catalog,
    viewport: Viewport,
    device: D,
    stage: Stage,
    scheduler: Scheduler,
    listeners: Listeners,
    nav: Navigation,
    tracker: ScrollTracker,
    gallery: ProjectGallery,
    reveal: RevealDriver,
    scene: SceneRenderer,
    form: ContactForm,
    last_scroll: Option<ScrollSample>,
    effects: Option<Effects>,
}

impl<D: GraphicsDevice> Page<D> {
    /// Build an unmounted page. Configuration and catalog are validated here.
    pub fn new(
        cfg: SiteConfig,
        catalog: Catalog,
        viewport: Viewport,
        device: D,
    ) -> FolioResult<Self> {
        cfg.validate()?;
        catalog.validate()?;
        Ok(Self {
            tracker: ScrollTracker::new(&cfg.scroll),
            reveal: RevealDriver::new(&cfg.reveal),
            scene: SceneRenderer::background(&cfg.scene),
            form: ContactForm::new(&cfg.contact),
            cfg,
            catalog,
            viewport,
            device,
            stage: Stage::new(),
            scheduler: Scheduler::new(),
            listeners: Listeners::new(),
            nav: Navigation::new(),
            gallery: ProjectGallery::new(),
            last_scroll: None,
            effects: None,
        })
    }

    /// Return `true` between `mount` and `unmount`.
    pub fn is_mounted(&self) -> bool {
        self.effects.is_some()
    }

    /// Mount every effect and start the loading screen.
    ///
    /// `interactive` are the elements the cursor reacts to; the set is fixed until the next
    /// mount. Mounting twice is a no-op.
    #[tracing::instrument(skip_all)]
    pub fn mount(&mut self, interactive: impl IntoIterator<Item = ElementId>) -> FolioResult<()> {
        if self.effects.is_some() {
            return Ok(());
        }

        let gate = LoadingGate::start(&self.cfg.gate, &mut self.stage, &mut self.scheduler)?;

        let mut sections = BTreeMap::new();
        for id in SectionId::ALL {
            let props = if id == SectionId::Hero {
                // Held in its pre-entrance state until the gate completes.
                NodeProps {
                    opacity: 0.0,
                    y: self.cfg.reveal.hero_offset_y,
                    ..NodeProps::default()
                }
            } else {
                NodeProps::default()
            };
            let node = self.stage.mount(props);
            if id.revealed_on_scroll() {
                self.reveal.register_section(id, node, &mut self.stage);
            }
            sections.insert(id, node);
        }

        let mut skill_cards = Vec::with_capacity(self.catalog.skills.len());
        for i in 0..self.catalog.skills.len() {
            let node = self.stage.mount(NodeProps::default());
            self.reveal
                .register_card(SectionId::Skills, i, node, &mut self.stage);
            skill_cards.push(node);
        }

        let mut cursor = CustomCursor::mount(&self.cfg.cursor, &mut self.stage);
        cursor.attach(&mut self.listeners, interactive);
        let mut floating =
            FloatingIcons::mount(&self.cfg.floating, &mut self.stage, &mut self.scheduler)?;
        floating.attach(&mut self.listeners);
        let mut hero_parallax = MouseParallax::mount(&self.cfg.parallax, &mut self.stage);
        hero_parallax.attach(&mut self.listeners);
        self.tracker.attach(&mut self.listeners);

        self.scene.mount(&mut self.device)?;

        self.effects = Some(Effects {
            gate,
            cursor,
            floating,
            parallax: vec![hero_parallax],
            sections,
            skill_cards,
            project_cards: Vec::new(),
        });
        self.rebuild_project_cards()?;
        tracing::debug!(
            nodes = self.stage.len(),
            listeners = self.listeners.total(),
            "page mounted"
        );
        Ok(())
    }

    /// Detach every listener, abort every animation and release the scene context.
    #[tracing::instrument(skip_all)]
    pub fn unmount(&mut self) {
        let Some(mut fx) = self.effects.take() else {
            return;
        };
        self.tracker.detach(&mut self.listeners);
        fx.cursor.detach(&mut self.listeners);
        fx.floating.detach(&mut self.listeners);
        for block in &mut fx.parallax {
            block.detach(&mut self.listeners);
            block.unmount(&mut self.stage, &mut self.scheduler);
        }
        fx.cursor.unmount(&mut self.stage, &mut self.scheduler);
        fx.floating.unmount(&mut self.stage, &mut self.scheduler);
        fx.gate.teardown(&mut self.stage, &mut self.scheduler);
        self.reveal.reset(&mut self.scheduler);
        for node in fx
            .sections
            .into_values()
            .chain(fx.skill_cards)
            .chain(fx.project_cards)
        {
            self.stage.unmount(node);
        }
        self.scheduler.clear();
        self.scene.unmount(&mut self.device);
        tracing::debug!(listeners = self.listeners.total(), "page unmounted");
    }

    /// Advance animations by `dt` seconds and render one scene frame.
    ///
    /// When the loading screen finishes during this frame the hero entrance starts.
    pub fn frame(&mut self, dt: f64) -> FolioResult<()> {
        let events = self.scheduler.tick(dt, &mut self.stage);
        self.reveal.observe(&events);
        if let Some(fx) = &mut self.effects {
            let completed = fx.gate.observe(&events, &mut self.stage, &mut self.scheduler);
            if let (true, Some(&hero)) = (completed, fx.sections.get(&SectionId::Hero)) {
                self.reveal
                    .play_page_load(&fx.gate, hero, &mut self.stage, &mut self.scheduler)?;
            }
        }
        self.scene.frame();
        self.form.tick(dt);
        Ok(())
    }

    /// Scroll sample at document offset `y`. Returns the active section.
    pub fn on_scroll(&mut self, y: f64, layout: &impl SectionLayout) -> FolioResult<SectionId> {
        let active = self.tracker.sample(y, layout);
        self.last_scroll = Some(ScrollSample {
            y,
            grid: layout.band(SectionId::Projects),
            cards: (0..self.catalog.projects.len())
                .map(|i| layout.card_top(SectionId::Projects, i))
                .collect(),
        });
        if self.effects.is_some() {
            self.reveal.on_scroll(
                self.viewport.height,
                |key| match key {
                    RevealKey::Section(s) => layout.band(s).map(|b| b.top - y),
                    RevealKey::Card(s, i) => layout.card_top(s, i).map(|t| t - y),
                },
                &mut self.stage,
                &mut self.scheduler,
            )?;
        }
        Ok(active)
    }

    /// Programmatic navigation to `section`; closes the mobile menu.
    pub fn scroll_to(
        &mut self,
        section: SectionId,
        layout: &impl SectionLayout,
    ) -> Option<ScrollRequest> {
        self.tracker.scroll_to(section, layout, &mut self.nav)
    }

    /// Pointer moved to `p` (viewport coordinates).
    pub fn on_pointer_move(&mut self, p: Point) -> FolioResult<()> {
        let Some(fx) = &mut self.effects else {
            return Ok(());
        };
        fx.cursor
            .on_pointer_move(p, &mut self.stage, &mut self.scheduler)?;
        fx.floating
            .on_pointer_move(p, self.viewport, &mut self.stage, &mut self.scheduler)?;
        for block in &mut fx.parallax {
            block.on_pointer_move(p, self.viewport, &mut self.stage, &mut self.scheduler)?;
        }
        Ok(())
    }

    /// Pointer entered element `el`.
    pub fn on_pointer_enter(&mut self, el: ElementId) -> FolioResult<bool> {
        match &mut self.effects {
            Some(fx) => fx
                .cursor
                .on_pointer_enter(el, &mut self.stage, &mut self.scheduler),
            None => Ok(false),
        }
    }

    /// Pointer left element `el`.
    pub fn on_pointer_leave(&mut self, el: ElementId) -> FolioResult<bool> {
        match &mut self.effects {
            Some(fx) => fx
                .cursor
                .on_pointer_leave(el, &mut self.stage, &mut self.scheduler),
            None => Ok(false),
        }
    }

    /// Window resized.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Switch the gallery category (resets the subcategory).
    ///
    /// The rebuilt cards are checked against the last scroll sample right away, so a grid that
    /// is already on screen reveals without waiting for the next scroll event.
    pub fn select_category(&mut self, category: CategoryFilter) -> FolioResult<()> {
        self.gallery.select_category(category);
        self.rebuild_project_cards()
    }

    /// Switch the gallery subcategory.
    pub fn select_subcategory(&mut self, subcategory: SubcategoryFilter) -> FolioResult<()> {
        self.gallery.select_subcategory(subcategory)?;
        self.rebuild_project_cards()
    }

    /// Current gallery contents.
    pub fn gallery_view(&self) -> GalleryView<'_> {
        self.gallery.view(&self.catalog)
    }

    fn rebuild_project_cards(&mut self) -> FolioResult<()> {
        let Some(fx) = &mut self.effects else {
            return Ok(());
        };
        for node in self.reveal.clear_cards(SectionId::Projects, &mut self.scheduler) {
            self.stage.unmount(node);
        }
        fx.project_cards.clear();
        let count = self.gallery.view(&self.catalog).len();
        for i in 0..count {
            let node = self.stage.mount(NodeProps::default());
            self.reveal
                .register_card(SectionId::Projects, i, node, &mut self.stage);
            fx.project_cards.push(node);
        }

        let Some(sample) = &self.last_scroll else {
            return Ok(());
        };
        self.reveal.on_scroll(
            self.viewport.height,
            |key| match key {
                RevealKey::Card(SectionId::Projects, i) => {
                    sample.card_top(i).map(|t| t - sample.y)
                }
                _ => None,
            },
            &mut self.stage,
            &mut self.scheduler,
        )
    }

    /// Submit the contact form through `relay`.
    pub fn submit_contact<F: ContactFunction>(
        &mut self,
        relay: &ContactRelay<F>,
    ) -> FolioResult<()> {
        relay.submit(&mut self.form)
    }

    /// Site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.cfg
    }

    /// Page content.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Animated node values.
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Running timelines.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Attached listeners.
    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Navigation bar.
    pub fn nav(&self) -> &Navigation {
        &self.nav
    }

    /// Navigation bar, mutably (menu and theme toggles).
    pub fn nav_mut(&mut self) -> &mut Navigation {
        &mut self.nav
    }

    /// Currently highlighted section.
    pub fn active_section(&self) -> SectionId {
        self.tracker.active()
    }

    /// Reveal bookkeeping.
    pub fn reveal(&self) -> &RevealDriver {
        &self.reveal
    }

    /// Return `true` once the loading screen has finished in this mount.
    pub fn is_gate_complete(&self) -> bool {
        self.effects.as_ref().is_some_and(|fx| fx.gate.is_complete())
    }

    /// Node of `section`, while mounted.
    pub fn section_node(&self, section: SectionId) -> Option<NodeId> {
        self.effects.as_ref()?.sections.get(&section).copied()
    }

    /// Loader, text and progress nodes of the loading screen, while mounted.
    pub fn gate_nodes(&self) -> Option<[NodeId; 3]> {
        self.effects.as_ref().map(|fx| fx.gate.nodes())
    }

    /// Nodes of the parallax blocks, while mounted.
    pub fn parallax_nodes(&self) -> Vec<NodeId> {
        self.effects
            .as_ref()
            .map(|fx| fx.parallax.iter().map(MouseParallax::node).collect())
            .unwrap_or_default()
    }

    /// Cursor indicator, while mounted.
    pub fn cursor(&self) -> Option<&CustomCursor> {
        self.effects.as_ref().map(|fx| &fx.cursor)
    }

    /// Floating icons, while mounted.
    pub fn floating(&self) -> Option<&FloatingIcons> {
        self.effects.as_ref().map(|fx| &fx.floating)
    }

    /// Background scene.
    pub fn scene(&self) -> &SceneRenderer {
        &self.scene
    }

    /// Graphics device.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Contact form.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Contact form, mutably (field input).
    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/page.rs"]
mod tests;
