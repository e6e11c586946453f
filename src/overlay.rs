//! Full-screen image overlay
//!
//! Every `expand` builds a fresh overlay with its own id and acquires the
//! page resources it needs (DOM node, Escape listener) as one
//! [`OverlayResource`]. All three dismissal paths funnel into
//! [`OverlayManager::dismiss`], which detaches exactly that instance and
//! hands its resource back; dropping the resource deregisters the
//! instance's listeners. Dismissing an id that is already gone is a no-op, so a late
//! or duplicate event can never tear down a newer overlay.

use crate::error::Result;
use crate::view::{Action, Node};

pub type OverlayId = u64;

/// Caption under the expanded image
pub const INSTRUCTION: &str = "Click outside image or × button to close";

/// How an overlay was dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    Background,
    CloseControl,
    Escape,
}

/// Page resources held by one open overlay
pub trait OverlayResource {
    /// Detach the node from the page. Called exactly once per instance.
    /// Listeners are owned by the resource and go away when it is dropped.
    fn release(&mut self);
}

/// Static description of one overlay instance
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub id: OverlayId,
    pub src: String,
    pub title: String,
}

impl OverlayView {
    /// Value of the root element's `data-overlay-id`
    pub fn dom_id(&self) -> String {
        format!("image-overlay-{}", self.id)
    }

    pub fn render(&self) -> Node {
        let dismiss = |via| Action::DismissOverlay { id: self.id, via };

        Node::el("div")
            .id(self.dom_id())
            .class("image-overlay")
            .on_click(dismiss(Dismissal::Background))
            .child(
                Node::el("button")
                    .class("overlay-close")
                    .attr("aria-label", "Close")
                    .on_click(dismiss(Dismissal::CloseControl))
                    .contain_clicks()
                    .text("×"),
            )
            .child(
                Node::el("div")
                    .class("overlay-content")
                    .contain_clicks()
                    .child(Node::el("h3").class("overlay-title").text(self.title.clone()))
                    .child(
                        Node::el("img")
                            .class("overlay-image")
                            .attr("src", self.src.clone())
                            .attr("alt", self.title.clone()),
                    )
                    .child(Node::el("p").class("overlay-instruction").text(INSTRUCTION)),
            )
            .into()
    }
}

/// Open overlays, oldest first
pub struct OverlayManager<R: OverlayResource> {
    next_id: OverlayId,
    open: Vec<(OverlayView, R)>,
}

impl<R: OverlayResource> Default for OverlayManager<R> {
    fn default() -> Self {
        Self { next_id: 1, open: Vec::new() }
    }
}

impl<R: OverlayResource> OverlayManager<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new overlay. `acquire` attaches it to the page; if it fails
    /// nothing is recorded.
    pub fn expand<F>(&mut self, src: &str, title: &str, acquire: F) -> Result<OverlayId>
    where
        F: FnOnce(&OverlayView) -> Result<R>,
    {
        let view = OverlayView {
            id: self.next_id,
            src: src.to_string(),
            title: title.to_string(),
        };
        let resource = acquire(&view)?;
        self.next_id += 1;

        log::debug!("Expanded overlay {} ({})", view.id, view.title);
        let id = view.id;
        self.open.push((view, resource));
        Ok(id)
    }

    /// Tear down one overlay. The node is detached here; the instance's
    /// listeners stay registered until the returned resource is dropped, so
    /// the caller can drop it after the dispatching handler returns.
    pub fn dismiss(&mut self, id: OverlayId, via: Dismissal) -> Option<R> {
        let index = self.open.iter().position(|(view, _)| view.id == id)?;
        let (_, mut resource) = self.open.remove(index);
        resource.release();
        log::debug!("Dismissed overlay {id} via {via:?}");
        Some(resource)
    }

    #[cfg(test)]
    pub fn is_open(&self, id: OverlayId) -> bool {
        self.open.iter().any(|(view, _)| view.id == id)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

impl<R: OverlayResource> Drop for OverlayManager<R> {
    fn drop(&mut self) {
        for (_, resource) in &mut self.open {
            resource.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Stand-in page: counts attached overlay nodes and key listeners
    #[derive(Default)]
    struct Page {
        nodes: Vec<OverlayId>,
        key_listeners: Vec<OverlayId>,
    }

    struct FakeResource {
        id: OverlayId,
        page: Rc<RefCell<Page>>,
        released: bool,
    }

    impl OverlayResource for FakeResource {
        fn release(&mut self) {
            assert!(!self.released, "released twice");
            self.released = true;
            self.page.borrow_mut().nodes.retain(|id| *id != self.id);
        }
    }

    impl Drop for FakeResource {
        fn drop(&mut self) {
            self.page.borrow_mut().key_listeners.retain(|id| *id != self.id);
        }
    }

    fn attach(page: &Rc<RefCell<Page>>) -> impl FnOnce(&OverlayView) -> Result<FakeResource> {
        let page = Rc::clone(page);
        move |view| {
            page.borrow_mut().nodes.push(view.id);
            page.borrow_mut().key_listeners.push(view.id);
            Ok(FakeResource { id: view.id, page, released: false })
        }
    }

    #[test]
    fn test_every_dismissal_path_cleans_up() {
        for (first, second) in [
            (Dismissal::Background, Dismissal::CloseControl),
            (Dismissal::CloseControl, Dismissal::Escape),
            (Dismissal::Escape, Dismissal::Background),
            (Dismissal::Escape, Dismissal::Escape),
        ] {
            let page = Rc::new(RefCell::new(Page::default()));
            let mut overlays = OverlayManager::new();

            let a = overlays.expand("a.png", "A", attach(&page)).unwrap();
            assert!(overlays.dismiss(a, first).is_some());
            let b = overlays.expand("b.png", "B", attach(&page)).unwrap();
            assert!(overlays.dismiss(b, second).is_some());

            assert_eq!(overlays.open_count(), 0);
            assert!(page.borrow().nodes.is_empty());
            assert!(page.borrow().key_listeners.is_empty());
        }
    }

    #[test]
    fn test_nested_overlays_do_not_cross_wire() {
        let page = Rc::new(RefCell::new(Page::default()));
        let mut overlays = OverlayManager::new();

        let outer = overlays.expand("outer.png", "Outer", attach(&page)).unwrap();
        let inner = overlays.expand("inner.png", "Inner", attach(&page)).unwrap();
        assert_ne!(outer, inner);

        overlays.dismiss(outer, Dismissal::CloseControl);
        assert!(overlays.is_open(inner));
        assert_eq!(page.borrow().nodes, [inner]);
        assert_eq!(page.borrow().key_listeners, [inner]);

        // A stale handler for the first overlay firing again changes nothing
        assert!(overlays.dismiss(outer, Dismissal::Escape).is_none());
        assert!(overlays.is_open(inner));

        overlays.dismiss(inner, Dismissal::Background);
        assert!(page.borrow().key_listeners.is_empty());
    }

    #[test]
    fn test_listener_lives_until_resource_is_dropped() {
        let page = Rc::new(RefCell::new(Page::default()));
        let mut overlays = OverlayManager::new();

        let id = overlays.expand("a.png", "A", attach(&page)).unwrap();
        let released = overlays.dismiss(id, Dismissal::Escape).unwrap();
        assert!(released.released);
        assert!(page.borrow().nodes.is_empty());
        assert_eq!(page.borrow().key_listeners, [id]);

        drop(released);
        assert!(page.borrow().key_listeners.is_empty());
    }

    #[test]
    fn test_failed_acquire_records_nothing() {
        let mut overlays: OverlayManager<FakeResource> = OverlayManager::new();
        let result = overlays.expand("x.png", "X", |_| Err(DashboardError::Dom("no body".into())));
        assert!(result.is_err());
        assert_eq!(overlays.open_count(), 0);
    }

    #[test]
    fn test_drop_releases_open_overlays() {
        let page = Rc::new(RefCell::new(Page::default()));
        {
            let mut overlays = OverlayManager::new();
            overlays.expand("a.png", "A", attach(&page)).unwrap();
            overlays.expand("b.png", "B", attach(&page)).unwrap();
        }
        assert!(page.borrow().nodes.is_empty());
        assert!(page.borrow().key_listeners.is_empty());
    }

    #[test]
    fn test_render_structure() {
        let view = OverlayView { id: 7, src: "plots/stock_trends.png".into(), title: "Trends".into() };
        let node = view.render();
        let root = node.as_element().unwrap();

        assert_eq!(root.id.as_deref(), Some("image-overlay-7"));
        assert_eq!(root.on_click, Some(Action::DismissOverlay { id: 7, via: Dismissal::Background }));

        let close = node.find_class("overlay-close").unwrap();
        assert!(close.contain_clicks);
        assert_eq!(close.on_click, Some(Action::DismissOverlay { id: 7, via: Dismissal::CloseControl }));

        let content = node.find_class("overlay-content").unwrap();
        assert!(content.contain_clicks);
        assert_eq!(content.on_click, None);
        assert_eq!(node.find_class("overlay-image").unwrap().get_attr("src"), Some("plots/stock_trends.png"));
        assert_eq!(node.find_class("overlay-instruction").unwrap().children[0], Node::text(INSTRUCTION));
    }
}
