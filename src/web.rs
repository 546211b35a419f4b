//! Browser adapter.
//!
//! Binds a [`Page`] to the live document: section anchors are measured with
//! `getBoundingClientRect`, DOM events are forwarded to the page and every animation frame writes
//! the stage back to element styles. Element lookups follow these conventions:
//!
//! - sections by id (`#hero`, `#about`, ...)
//! - reveal cards by `[data-reveal-card]` inside their section
//! - `#cursor-ring`, `#cursor-dot`, `.floating-icon` and `[data-parallax]` for pointer effects
//! - `#loader`, `#loader-text` and `#loader-progress` for the loading screen
//! - `#contact-form` with `name`, `email` and `message` fields and a submit button that is
//!   disabled while a message is in flight
//! - `#contact-notice`, shown with a `data-kind` of `success` or `failure` while a notice is up
//! - `#mobile-menu`, carrying the `open` class while the mobile menu is open
//!
//! Site configuration is read from a `FOLIO_CONFIG` JSON string on `window` when present.

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{JsCast, closure::Closure, prelude::*};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement, MouseEvent, Request, RequestInit, RequestMode, Response,
    ScrollToOptions, Window,
};

use crate::{
    Band, Catalog, ContactConfig, ContactPayload, ElementId, FolioError, FolioResult,
    HeadlessDevice, NodeId, Notice, NoticeKind, Page, PageLayout, Point, Prop, RevealKey,
    SEND_CONTACT_EMAIL, ScrollBehavior, SectionId, SiteConfig, Theme, Viewport, is_interactive,
};

const CONFIG_GLOBAL: &str = "FOLIO_CONFIG";
const SUBMIT_SELECTOR: &str = "#contact-form [type=\"submit\"]";
const CARD_SECTIONS: [SectionId; 2] = [SectionId::Skills, SectionId::Projects];

type Shared = Rc<RefCell<App>>;

thread_local! {
    static APP: RefCell<Option<Shared>> = const { RefCell::new(None) };
}

struct Handler {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

struct App {
    window: Window,
    document: Document,
    page: Page<HeadlessDevice>,
    layout: PageLayout,
    interactive: Vec<Element>,
    bindings: Vec<Binding>,
    handlers: Vec<Handler>,
    last_frame: Option<f64>,
    running: bool,
    painted: Chrome,
}

/// Page state mirrored outside the stage: menu, submit control and notice.
#[derive(Clone, Debug, Default, PartialEq)]
struct Chrome {
    menu_open: bool,
    submitting: bool,
    notice: Option<Notice>,
}

struct Binding {
    node: NodeId,
    element: HtmlElement,
    width: bool,
}

fn js_err(e: FolioError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn viewport(window: &Window) -> Result<Viewport, JsValue> {
    let w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0);
    Viewport::new(w, h).map_err(js_err)
}

fn load_config(window: &Window) -> Result<SiteConfig, JsValue> {
    let raw = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL))?;
    let cfg = match raw.as_string() {
        Some(json) => SiteConfig::from_reader(json.as_bytes()).map_err(js_err)?,
        None => SiteConfig::default(),
    };
    cfg.validate().map_err(js_err)?;
    Ok(cfg)
}

fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

fn html(element: Element) -> Option<HtmlElement> {
    element.dyn_into::<HtmlElement>().ok()
}

fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id).and_then(html)
}

fn card_selector(section: SectionId) -> String {
    format!("#{} [data-reveal-card]", section.as_str())
}

/// Document-space layout of every section and reveal card.
fn measure(window: &Window, document: &Document) -> PageLayout {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let mut layout = PageLayout::new();
    for section in SectionId::ALL {
        let Some(el) = document.get_element_by_id(section.as_str()) else {
            continue;
        };
        let rect = el.get_bounding_client_rect();
        match Band::new(rect.top() + scroll_y, rect.height()) {
            Ok(band) => layout.insert(section, band),
            Err(e) => tracing::warn!(section = %section, "skipping section: {e}"),
        }
    }
    for section in CARD_SECTIONS {
        for (i, card) in elements(document, &card_selector(section)).iter().enumerate() {
            let top = card.get_bounding_client_rect().top() + scroll_y;
            layout = layout.with_card(section, i, top);
        }
    }
    layout
}

fn interactive_elements(document: &Document) -> Vec<Element> {
    elements(document, "a, button, [role]")
        .into_iter()
        .filter(|el| {
            let tag = el.tag_name().to_ascii_lowercase();
            is_interactive(&tag, el.get_attribute("role").as_deref())
        })
        .collect()
}

impl App {
    /// Pair every mounted stage node with the element that displays it.
    fn bind(&mut self) {
        let doc = &self.document;
        let page = &self.page;
        let mut out = Vec::new();
        let mut push = |node: Option<NodeId>, element: Option<HtmlElement>, width: bool| {
            if let (Some(node), Some(element)) = (node, element) {
                out.push(Binding {
                    node,
                    element,
                    width,
                });
            }
        };

        for section in SectionId::ALL {
            push(page.section_node(section), by_id(doc, section.as_str()), false);
        }
        for section in CARD_SECTIONS {
            for (i, el) in elements(doc, &card_selector(section)).into_iter().enumerate() {
                push(page.reveal().node(RevealKey::Card(section, i)), html(el), false);
            }
        }
        if let Some(cursor) = page.cursor() {
            push(Some(cursor.ring()), by_id(doc, "cursor-ring"), false);
            push(Some(cursor.dot()), by_id(doc, "cursor-dot"), false);
        }
        if let Some(floating) = page.floating() {
            let els = elements(doc, ".floating-icon");
            for (icon, el) in floating.icons().iter().zip(els) {
                push(Some(icon.node), html(el), false);
            }
        }
        for (node, el) in page.parallax_nodes().into_iter().zip(elements(doc, "[data-parallax]")) {
            push(Some(node), html(el), false);
        }
        if let Some([loader, text, progress]) = page.gate_nodes() {
            push(Some(loader), by_id(doc, "loader"), false);
            push(Some(text), by_id(doc, "loader-text"), false);
            push(Some(progress), by_id(doc, "loader-progress"), true);
        }
        self.bindings = out;
        tracing::debug!(bindings = self.bindings.len(), "bound stage nodes");
    }

    fn paint(&self) {
        let stage = self.page.stage();
        for b in &self.bindings {
            let Some(props) = stage.get(b.node) else {
                continue;
            };
            let style = b.element.style();
            let _ = style.set_property("opacity", &format!("{:.3}", props.get(Prop::Opacity)));
            if b.width {
                let _ = style.set_property("width", &format!("{:.2}%", props.get(Prop::Width)));
            } else {
                let _ = style.set_property("transform", &props.css_transform());
            }
        }
        if let Some(root) = self.document.document_element() {
            let _ = root
                .class_list()
                .toggle_with_force("dark", self.page.nav().theme() == Theme::Dark);
        }
    }

    /// Write the menu and contact state to the DOM when it changed since the last frame.
    fn paint_chrome(&mut self) {
        let form = self.page.form();
        let now = Chrome {
            menu_open: self.page.nav().is_menu_open(),
            submitting: !form.is_submit_enabled(),
            notice: form.notice().cloned(),
        };
        if now == self.painted {
            return;
        }
        let doc = &self.document;

        if let Some(menu) = doc.get_element_by_id("mobile-menu") {
            let _ = menu.class_list().toggle_with_force("open", now.menu_open);
        }
        if let Some(toggle) = doc.get_element_by_id("menu-toggle") {
            let expanded = if now.menu_open { "true" } else { "false" };
            let _ = toggle.set_attribute("aria-expanded", expanded);
        }

        let submit = doc
            .query_selector(SUBMIT_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        if let Some(button) = submit {
            button.set_disabled(now.submitting);
        }

        if let Some(el) = by_id(doc, "contact-notice") {
            match &now.notice {
                Some(notice) => {
                    let kind = match notice.kind {
                        NoticeKind::Success => "success",
                        NoticeKind::Failure => "failure",
                    };
                    let _ = el.set_attribute("data-kind", kind);
                    el.set_text_content(Some(&format!("{} {}", notice.title, notice.description)));
                    el.set_hidden(false);
                }
                None => {
                    let _ = el.remove_attribute("data-kind");
                    el.set_text_content(None);
                    el.set_hidden(true);
                }
            }
        }
        self.painted = now;
    }

    fn on_frame(&mut self, now_ms: f64) {
        let dt = self
            .last_frame
            .map(|prev| ((now_ms - prev) / 1000.0).max(0.0))
            .unwrap_or(0.0);
        self.last_frame = Some(now_ms);
        let had_gate = self.page.gate_nodes().is_some() && !self.page.is_gate_complete();
        if let Err(e) = self.page.frame(dt) {
            tracing::warn!("frame failed: {e}");
        }
        self.paint();
        self.paint_chrome();
        if had_gate && self.page.is_gate_complete() {
            // The loader nodes are gone; the hero is already bound.
            self.bindings.retain(|b| self.page.stage().is_mounted(b.node));
        }
    }

    fn on_scroll(&mut self) {
        let y = self.window.scroll_y().unwrap_or(0.0);
        if let Err(e) = self.page.on_scroll(y, &self.layout) {
            tracing::warn!("scroll failed: {e}");
        }
    }

    fn on_resize(&mut self) {
        let Ok(v) = viewport(&self.window) else {
            return;
        };
        self.page.resize(v);
        self.layout = measure(&self.window, &self.document);
        self.on_scroll();
    }

    fn scroll_to(&mut self, section: SectionId) {
        let Some(req) = self.page.scroll_to(section, &self.layout) else {
            return;
        };
        let opts = ScrollToOptions::new();
        opts.set_top(req.target_y);
        opts.set_behavior(match req.behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
        });
        self.window.scroll_to_with_scroll_to_options(&opts);
    }

    fn detach_all(&mut self) {
        for h in self.handlers.drain(..) {
            let _ = h
                .target
                .remove_event_listener_with_callback(h.kind, h.closure.as_ref().unchecked_ref());
        }
    }
}

fn listen(
    app: &Shared,
    target: &EventTarget,
    kind: &'static str,
    mut f: impl FnMut(&mut App, Event) + 'static,
) -> Result<(), JsValue> {
    let weak = Rc::downgrade(app);
    let closure = Closure::wrap(Box::new(move |ev: Event| {
        if let Some(app) = weak.upgrade() {
            if let Ok(mut app) = app.try_borrow_mut() {
                f(&mut app, ev);
            }
        }
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    app.borrow_mut().handlers.push(Handler {
        target: target.clone(),
        kind,
        closure,
    });
    Ok(())
}

fn install(app: &Shared) -> Result<(), JsValue> {
    let (window, document, interactive) = {
        let a = app.borrow();
        (a.window.clone(), a.document.clone(), a.interactive.clone())
    };

    listen(app, &window, "scroll", |app, _| app.on_scroll())?;
    listen(app, &window, "resize", |app, _| app.on_resize())?;
    listen(app, &window, "mousemove", |app, ev| {
        let Some(m) = ev.dyn_ref::<MouseEvent>() else {
            return;
        };
        let p = Point::new(f64::from(m.client_x()), f64::from(m.client_y()));
        if let Err(e) = app.page.on_pointer_move(p) {
            tracing::warn!("pointer move failed: {e}");
        }
    })?;
    for (i, el) in interactive.iter().enumerate() {
        let id = ElementId(i as u32);
        listen(app, el, "mouseenter", move |app, _| {
            let _ = app.page.on_pointer_enter(id);
        })?;
        listen(app, el, "mouseleave", move |app, _| {
            let _ = app.page.on_pointer_leave(id);
        })?;
    }
    for link in elements(&document, "[data-nav]") {
        let section = link
            .get_attribute("data-nav")
            .and_then(|s| s.parse::<SectionId>().ok());
        let Some(section) = section else {
            continue;
        };
        listen(app, &link, "click", move |app, ev| {
            ev.prevent_default();
            app.scroll_to(section);
            app.paint_chrome();
        })?;
    }
    if let Some(toggle) = document.get_element_by_id("theme-toggle") {
        listen(app, &toggle, "click", |app, _| {
            app.page.nav_mut().toggle_theme();
        })?;
    }
    if let Some(toggle) = document.get_element_by_id("menu-toggle") {
        listen(app, &toggle, "click", |app, _| {
            app.page.nav_mut().toggle_menu();
            app.paint_chrome();
        })?;
    }
    if let Some(form) = document.get_element_by_id("contact-form") {
        let weak = Rc::downgrade(app);
        listen(app, &form, "submit", move |app, ev| {
            ev.prevent_default();
            if let Some(shared) = weak.upgrade() {
                submit_contact(app, shared);
            }
        })?;
    }
    Ok(())
}

fn field_value(document: &Document, name: &str) -> String {
    let selector = format!("#contact-form [name=\"{name}\"]");
    let Ok(Some(el)) = document.query_selector(&selector) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    el.dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
        .unwrap_or_default()
}

fn submit_contact(app: &mut App, shared: Shared) {
    {
        let form = app.page.form_mut();
        form.name = field_value(&app.document, "name");
        form.email = field_value(&app.document, "email");
        form.message = field_value(&app.document, "message");
    }
    let payload = match app.page.form_mut().begin_submit() {
        Ok(p) => p,
        Err(e) => {
            tracing::debug!("submit refused: {e}");
            return;
        }
    };
    let window = app.window.clone();
    let contact = app.page.config().contact.clone();
    app.paint_chrome();
    spawn_local(async move {
        let outcome = post(&window, &contact, &payload).await;
        let mut app = shared.borrow_mut();
        app.page.form_mut().complete(&outcome);
        if outcome.is_ok() {
            reset_form(&app.document);
        }
        app.paint_chrome();
    });
}

fn reset_form(document: &Document) {
    if let Some(form) = document
        .get_element_by_id("contact-form")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    {
        form.reset();
    }
}

async fn post(window: &Window, cfg: &ContactConfig, payload: &ContactPayload) -> FolioResult<()> {
    let endpoint = cfg
        .endpoint
        .as_deref()
        .ok_or_else(|| FolioError::validation("contact.endpoint is not configured"))?;
    let url = format!(
        "{}/functions/v1/{SEND_CONTACT_EMAIL}",
        endpoint.trim_end_matches('/')
    );
    let body = serde_json::to_string(payload).map_err(|e| FolioError::serde(e.to_string()))?;
    let relay = |e: JsValue| FolioError::relay(format!("{e:?}"));

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_body(&JsValue::from_str(&body));
    let req = Request::new_with_str_and_init(&url, &init).map_err(relay)?;
    let headers = req.headers();
    headers.set("content-type", "application/json").map_err(relay)?;
    if let Some(key) = &cfg.api_key {
        headers.set("authorization", &format!("Bearer {key}")).map_err(relay)?;
        headers.set("apikey", key).map_err(relay)?;
    }

    let resp: Response = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(relay)?
        .dyn_into()
        .map_err(relay)?;
    let text = match resp.text() {
        Ok(p) => JsFuture::from(p).await.ok().and_then(|v| v.as_string()),
        Err(_) => None,
    }
    .unwrap_or_default();
    if !resp.ok() {
        return Err(FolioError::relay(format!(
            "'{SEND_CONTACT_EMAIL}' returned {}: {}",
            resp.status(),
            text.trim()
        )));
    }
    let reported = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| v.get("error").filter(|e| !e.is_null()).map(ToString::to_string));
    match reported {
        Some(msg) => Err(FolioError::relay(format!("'{SEND_CONTACT_EMAIL}' failed: {msg}"))),
        None => Ok(()),
    }
}

fn run_frames(app: &Shared) -> Result<(), JsValue> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let weak = Rc::downgrade(app);
    let window = app.borrow().window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let Some(app) = weak.upgrade() else {
            return;
        };
        let running = {
            let mut app = app.borrow_mut();
            if app.running {
                app.on_frame(now);
            }
            app.running
        };
        if !running {
            return;
        }
        if let Some(cb) = f.borrow().as_ref() {
            let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    let window = app.borrow().window.clone();
    if let Some(cb) = g.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

/// Mount the page on the current document and start the frame loop.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let cfg = load_config(&window)?;
    let mut page = Page::new(cfg, Catalog::builtin(), viewport(&window)?, HeadlessDevice::new())
        .map_err(js_err)?;

    let interactive = interactive_elements(&document);
    page.mount((0..interactive.len()).map(|i| ElementId(i as u32)))
        .map_err(js_err)?;
    let layout = measure(&window, &document);

    let app = Rc::new(RefCell::new(App {
        window,
        document,
        page,
        layout,
        interactive,
        bindings: Vec::new(),
        handlers: Vec::new(),
        last_frame: None,
        running: true,
        painted: Chrome::default(),
    }));
    {
        let mut a = app.borrow_mut();
        a.bind();
        a.on_scroll();
        a.paint_chrome();
    }
    install(&app)?;
    run_frames(&app)?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

/// Detach every listener, stop the frame loop and unmount the page.
#[wasm_bindgen]
pub fn stop() {
    let Some(app) = APP.with(|slot| slot.borrow_mut().take()) else {
        return;
    };
    let mut app = app.borrow_mut();
    app.running = false;
    app.detach_all();
    app.page.unmount();
    app.bindings.clear();
}

/// Current decorative scene as JSON, for a WebGL host to draw.
#[wasm_bindgen]
pub fn scene_snapshot() -> Result<String, JsValue> {
    APP.with(|slot| {
        let slot = slot.borrow();
        let app = slot.as_ref().ok_or("page is not running")?;
        let snap = app.borrow().page.scene().snapshot();
        serde_json::to_string(&snap).map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

/// Change the project filter; `"all"` or a category id.
#[wasm_bindgen]
pub fn select_category(id: &str) -> Result<(), JsValue> {
    with_app(|app| {
        let filter = id.parse().map_err(js_err)?;
        app.page.select_category(filter).map_err(js_err)?;
        app.layout = measure(&app.window, &app.document);
        app.bind();
        app.on_scroll();
        Ok(())
    })
}

/// Change the subcategory filter; `"all"` or a subcategory id.
#[wasm_bindgen]
pub fn select_subcategory(id: &str) -> Result<(), JsValue> {
    with_app(|app| {
        let filter = id.parse().map_err(js_err)?;
        app.page.select_subcategory(filter).map_err(js_err)?;
        app.layout = measure(&app.window, &app.document);
        app.bind();
        app.on_scroll();
        Ok(())
    })
}

fn with_app(f: impl FnOnce(&mut App) -> Result<(), JsValue>) -> Result<(), JsValue> {
    APP.with(|slot| {
        let slot = slot.borrow();
        let app = slot.as_ref().ok_or("page is not running")?;
        let mut app = app.borrow_mut();
        f(&mut app)
    })
}
