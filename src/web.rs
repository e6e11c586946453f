//! Browser binding
//!
//! Entry point of the WASM module. Materialises [`Node`] trees into the
//! DOM, wires listeners to dashboard [`Action`]s and applies the resulting
//! [`Effect`]s. All decisions live in [`Dashboard`]; this module only
//! touches the page.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::app::{self, Dashboard, Effect};
use crate::config::Config;
use crate::dashboard;
use crate::error::{DashboardError, Result};
use crate::loader::{self, HttpStatsSource};
use crate::modal::{ModalView, ids};
use crate::navigation::{HighlightTracker, PlotKind};
use crate::overlay::{Dismissal, OverlayId, OverlayManager, OverlayResource, OverlayView};
use crate::tiles;
use crate::view::{Action, Node};

const TILES_CONTAINER: &str = "company-tiles";
const HIGHLIGHT_CLASS: &str = "highlight";

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

/// An event listener that is removed when dropped
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new<F>(target: &EventTarget, kind: &'static str, handler: F) -> Result<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), kind, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// DOM side of one open image overlay
struct DomOverlay {
    root: Element,
    /// Click listeners inside the overlay plus its own Escape listener,
    /// removed when the overlay is dropped
    _listeners: Vec<Listener>,
}

impl OverlayResource for DomOverlay {
    fn release(&mut self) {
        self.root.remove();
    }
}

struct App {
    window: Window,
    document: Document,
    dashboard: RefCell<Dashboard>,
    overlays: RefCell<OverlayManager<DomOverlay>>,
    highlights: RefCell<HighlightTracker<Timeout>>,
    /// Listeners of the currently rendered tiles
    tile_listeners: RefCell<Vec<Listener>>,
    /// Listeners that live as long as the page
    page_listeners: RefCell<Vec<Listener>>,
    main_plots_wired: Cell<bool>,
    this: Weak<App>,
}

/// Module entry point, run once by the bootstrap script
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let body = document.body();
    let config = Config::from_lookup(|key| body.as_ref().and_then(|b| b.dataset().get(key)));
    let _ = console_log::init_with_level(config.level().unwrap_or(log::Level::Info));
    let config = match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("{e}; using defaults");
            Config::default()
        }
    };

    let app = Rc::new_cyclic(|this| App {
        window,
        document,
        dashboard: RefCell::new(Dashboard::new(config)),
        overlays: RefCell::new(OverlayManager::new()),
        highlights: RefCell::new(HighlightTracker::new()),
        tile_listeners: RefCell::new(Vec::new()),
        page_listeners: RefCell::new(Vec::new()),
        main_plots_wired: Cell::new(false),
        this: this.clone(),
    });
    APP.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&app)));

    if app.document.ready_state() == "loading" {
        let weak = Rc::downgrade(&app);
        let listener = Listener::new(app.document.as_ref(), "DOMContentLoaded", move |_| {
            if let Some(app) = weak.upgrade() {
                app.boot();
            }
        })?;
        app.page_listeners.borrow_mut().push(listener);
    } else {
        app.boot();
    }
    Ok(())
}

/// Switch the main plot by name (`stock-trends`, `stock-trends-ma`, `fortnightly-ma`)
#[wasm_bindgen(js_name = showPlot)]
pub fn show_plot(name: &str) {
    with_app(|app| {
        let effects = app.dashboard.borrow_mut().show_plot_named(name);
        app.apply(effects);
    });
}

/// Smooth-scroll to a section and highlight it briefly
#[wasm_bindgen(js_name = scrollToSection)]
pub fn scroll_to_section(id: &str) {
    with_app(|app| app.dispatch(Action::ScrollTo(id.to_string())));
}

/// Advance to the next main plot and scroll to it
#[wasm_bindgen(js_name = togglePlotMode)]
pub fn toggle_plot_mode() {
    with_app(|app| app.dispatch(Action::TogglePlotMode));
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal() {
    with_app(|app| app.dispatch(Action::CloseModal));
}

fn with_app(f: impl FnOnce(&App)) {
    let app = APP.with(|slot| slot.borrow().clone());
    match app {
        Some(app) => f(&app),
        None => log::warn!("Dashboard not started"),
    }
}

impl App {
    fn boot(&self) {
        if let Err(e) = self.ensure_shell().and_then(|()| self.wire_page()) {
            log::error!("Dashboard setup failed: {e}");
        }
        self.load();
    }

    /// Mount the bundled page if the host page lacks the tile container
    fn ensure_shell(&self) -> Result<()> {
        if self.document.get_element_by_id(TILES_CONTAINER).is_some() {
            return Ok(());
        }
        log::info!("Host page has no #{TILES_CONTAINER}, mounting bundled page");

        let style = self.document.create_element("style")?;
        style.set_text_content(Some(dashboard::STYLES));
        let head = self.document.head().ok_or_else(|| dom_error("no <head>"))?;
        head.append_child(&style)?;

        let body = self.document.body().ok_or_else(|| dom_error("no <body>"))?;
        body.insert_adjacent_html("afterbegin", dashboard::body_html())?;
        Ok(())
    }

    fn load(&self) {
        let Some(app) = self.this.upgrade() else {
            return;
        };
        self.apply(vec![Effect::RenderTiles(vec![tiles::render_loading()])]);
        spawn_local(async move {
            let stats_path = app.dashboard.borrow().config().stats_path.clone();
            let fetched = match app.window.location().href() {
                Ok(base) => match HttpStatsSource::new(&base, &stats_path) {
                    Ok(source) => loader::fetch_stats(&source).await,
                    Err(e) => Err(e),
                },
                Err(e) => Err(e.into()),
            };
            let effects = app.dashboard.borrow_mut().on_loaded(fetched);
            app.apply(effects);
        });
    }

    fn wire_page(&self) -> Result<()> {
        let mut listeners = Vec::new();

        let features = self.query_all(".feature-item.clickable")?;
        log::debug!("Found {} feature cards", features.len());
        for card in features {
            let name = card.get_attribute("data-action").unwrap_or_default();
            let app = self.this.clone();
            listeners.push(Listener::new(card.as_ref(), "click", move |event| {
                event.prevent_default();
                if let Some(app) = app.upgrade() {
                    let effects = app.dashboard.borrow_mut().feature_named(&name);
                    app.apply(effects);
                }
            })?);
        }

        for button in self.query_all(".plot-btn[data-plot]")? {
            let name = button.get_attribute("data-plot").unwrap_or_default();
            let app = self.this.clone();
            listeners.push(Listener::new(button.as_ref(), "click", move |_| {
                if let Some(app) = app.upgrade() {
                    let effects = app.dashboard.borrow_mut().show_plot_named(&name);
                    app.apply(effects);
                }
            })?);
        }

        for link in self.query_all("[data-section]")? {
            let section = link.get_attribute("data-section").unwrap_or_default();
            listeners.push(self.action_listener(&link, Action::ScrollTo(section))?);
        }

        if let Some(cycle) = self.document.get_element_by_id("plot-cycle") {
            listeners.push(self.action_listener(&cycle, Action::TogglePlotMode)?);
        }
        if let Some(close) = self.document.get_element_by_id(ids::CLOSE) {
            listeners.push(self.action_listener(&close, Action::CloseModal)?);
        }

        if let Some(plot) = self.document.get_element_by_id(ids::PLOT) {
            let app = self.this.clone();
            listeners.push(Listener::new(plot.as_ref(), "click", move |_| {
                let Some(app) = app.upgrade() else { return };
                let action = app.dashboard.borrow().modal().view().map(ModalView::expand_action);
                if let Some(action) = action {
                    app.dispatch(action);
                }
            })?);
        }

        // Clicks on the modal backdrop itself (not its content) close it
        if let Some(modal) = self.document.get_element_by_id(ids::MODAL) {
            let app = self.this.clone();
            let backdrop: EventTarget = modal.into();
            listeners.push(Listener::new(self.window.as_ref(), "click", move |event| {
                if event.target().is_some_and(|t| t == backdrop) {
                    if let Some(app) = app.upgrade() {
                        app.dispatch(Action::CloseModal);
                    }
                }
            })?);
        }

        let app = self.this.clone();
        listeners.push(Listener::new(self.document.as_ref(), "keydown", move |event| {
            if is_escape(&event) {
                if let Some(app) = app.upgrade() {
                    let effects = app.dashboard.borrow_mut().on_escape();
                    app.apply(effects);
                }
            }
        })?);

        log::debug!("Wired {} page listeners", listeners.len());
        self.page_listeners.borrow_mut().extend(listeners);
        Ok(())
    }

    fn dispatch(&self, action: Action) {
        let effects = self.dashboard.borrow_mut().handle(action);
        self.apply(effects);
    }

    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            if let Err(e) = self.apply_one(effect) {
                log::error!("{e}");
            }
        }
    }

    fn apply_one(&self, effect: Effect) -> Result<()> {
        match effect {
            Effect::RenderTiles(nodes) => self.render_tiles(&nodes),
            Effect::WireMainPlots => self.wire_main_plots(),
            Effect::ShowModal(view) => self.show_modal(&view),
            Effect::HideModal => self.set_modal_display("none"),
            Effect::ExpandImage { src, title } => {
                self.overlays
                    .borrow_mut()
                    .expand(&src, &title, |view| self.mount_overlay(view))?;
                Ok(())
            }
            Effect::DismissOverlay { id, via } => {
                // Dropped after the borrow ends; this may be running inside
                // one of the overlay's own listeners
                let released = self.overlays.borrow_mut().dismiss(id, via);
                drop(released);
                Ok(())
            }
            Effect::ActivatePlot(kind) => self.activate_plot(kind),
            Effect::ScrollTo(section) => self.scroll_to(&section),
            Effect::Alert(text) => Ok(self.window.alert_with_message(&text)?),
        }
    }

    fn render_tiles(&self, nodes: &[Node]) -> Result<()> {
        let container = self.element(TILES_CONTAINER)?;
        let mut listeners = Vec::new();
        let built = nodes
            .iter()
            .map(|node| self.build(node, &mut listeners))
            .collect::<Result<Vec<_>>>()?;

        container.set_inner_html("");
        for node in &built {
            container.append_child(node)?;
        }
        let previous = std::mem::replace(&mut *self.tile_listeners.borrow_mut(), listeners);
        drop(previous);
        Ok(())
    }

    fn wire_main_plots(&self) -> Result<()> {
        if self.main_plots_wired.replace(true) {
            return Ok(());
        }
        let src_of = |kind: PlotKind| {
            self.image(kind.element_id())
                .map(|img| img.src())
                .unwrap_or_else(|_| format!("plots/{}", kind.file_name()))
        };

        let mut listeners = Vec::new();
        for (kind, action) in app::main_plot_actions(src_of) {
            let Ok(img) = self.image(kind.element_id()) else {
                continue;
            };
            img.set_title("Click to view full size");
            listeners.push(self.action_listener(&img, action)?);
        }
        self.page_listeners.borrow_mut().extend(listeners);
        Ok(())
    }

    fn show_modal(&self, view: &ModalView) -> Result<()> {
        for (id, text) in view.text_fields() {
            self.element(id)?.set_text_content(Some(text));
        }

        let plot = self.image(ids::PLOT)?;
        plot.set_src(&view.image_src);
        plot.set_alt(&view.image_alt);
        plot.set_title("Click to view full size");

        let performance = self.element(ids::PERFORMANCE)?;
        performance.set_text_content(Some(&view.performance));
        performance.set_class_name(&view.performance_class());

        self.set_modal_display("block")
    }

    fn set_modal_display(&self, display: &str) -> Result<()> {
        let modal = self
            .element(ids::MODAL)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| dom_error("modal is not an HTML element"))?;
        modal.style().set_property("display", display)?;
        Ok(())
    }

    fn mount_overlay(&self, view: &OverlayView) -> Result<DomOverlay> {
        let mut listeners = Vec::new();
        let root = self
            .build(&view.render(), &mut listeners)?
            .dyn_into::<Element>()
            .map_err(|_| dom_error("overlay root is not an element"))?;
        let body = self.document.body().ok_or_else(|| dom_error("no <body>"))?;
        body.append_child(&root)?;

        listeners.push(self.overlay_escape_listener(view.id)?);
        Ok(DomOverlay { root, _listeners: listeners })
    }

    /// Escape listener owned by exactly one overlay instance
    fn overlay_escape_listener(&self, id: OverlayId) -> Result<Listener> {
        let app = self.this.clone();
        Listener::new(self.document.as_ref(), "keydown", move |event| {
            if is_escape(&event) {
                if let Some(app) = app.upgrade() {
                    app.dispatch(Action::DismissOverlay { id, via: Dismissal::Escape });
                }
            }
        })
    }

    fn activate_plot(&self, active: PlotKind) -> Result<()> {
        log::debug!("Showing plot: {active}");
        let states: Vec<_> = self.dashboard.borrow().plots().states().collect();
        for (kind, on) in states {
            self.element(kind.element_id())?
                .class_list()
                .toggle_with_force("active", on)?;
            let selector = format!(r#".plot-btn[data-plot="{}"]"#, kind.key());
            if let Some(button) = self.document.query_selector(&selector)? {
                button.class_list().toggle_with_force("active", on)?;
            }
        }
        Ok(())
    }

    fn scroll_to(&self, section: &str) -> Result<()> {
        log::debug!("Scrolling to section: {section}");
        let Some(element) = self.document.get_element_by_id(section) else {
            log::error!("Section not found: {section}");
            return Ok(());
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        element.class_list().add_1(HIGHLIGHT_CLASS)?;

        let app = self.this.clone();
        let name = section.to_string();
        let ms = self.dashboard.borrow().config().highlight_ms;
        let timer = Timeout::new(ms, move || {
            if let Some(app) = app.upgrade() {
                app.clear_highlight(&name);
            }
        });
        let displaced = self.highlights.borrow_mut().begin(section, timer);
        drop(displaced);
        Ok(())
    }

    fn clear_highlight(&self, section: &str) {
        let finished = self.highlights.borrow_mut().finish(section);
        drop(finished);
        if let Some(element) = self.document.get_element_by_id(section) {
            let _ = element.class_list().remove_1(HIGHLIGHT_CLASS);
        }
    }

    /// Build DOM for `node`, collecting the click listeners it needs
    fn build(&self, node: &Node, listeners: &mut Vec<Listener>) -> Result<web_sys::Node> {
        let el = match node {
            Node::Text(text) => return Ok(self.document.create_text_node(text).into()),
            Node::Element(el) => el,
        };

        let element = self.document.create_element(el.tag)?;
        if let Some(id) = &el.id {
            element.set_id(id);
        }
        if !el.classes.is_empty() {
            element.set_class_name(&el.classes.join(" "));
        }
        for (name, value) in &el.attrs {
            element.set_attribute(name, value)?;
        }
        for child in &el.children {
            element.append_child(&self.build(child, listeners)?)?;
        }

        if el.on_click.is_some() || el.contain_clicks {
            let app = self.this.clone();
            let action = el.on_click.clone();
            let contain = el.contain_clicks;
            listeners.push(Listener::new(element.as_ref(), "click", move |event| {
                if contain {
                    event.stop_propagation();
                }
                if let (Some(action), Some(app)) = (action.clone(), app.upgrade()) {
                    app.dispatch(action);
                }
            })?);
        }
        Ok(element.into())
    }

    fn action_listener(&self, element: &Element, action: Action) -> Result<Listener> {
        let app = self.this.clone();
        Listener::new(element.as_ref(), "click", move |_| {
            if let Some(app) = app.upgrade() {
                app.dispatch(action.clone());
            }
        })
    }

    fn element(&self, id: &str) -> Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| dom_error(&format!("missing #{id}")))
    }

    fn image(&self, id: &str) -> Result<HtmlImageElement> {
        self.element(id)?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| dom_error(&format!("#{id} is not an image")))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        let list = self.document.query_selector_all(selector)?;
        Ok((0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }
}

fn is_escape(event: &Event) -> bool {
    event
        .dyn_ref::<KeyboardEvent>()
        .is_some_and(|e| e.key() == "Escape")
}

fn dom_error(message: &str) -> DashboardError {
    DashboardError::Dom(message.to_string())
}
