//! Declarative display tree
//!
//! Render functions build a [`Node`] tree from view-models. The tree is
//! plain data: it can be serialised to HTML (tests, static shell) or
//! materialised into the DOM by the web layer, which wires each node's
//! click [`Action`].

use std::fmt::Write as _;

use crate::navigation::FeatureAction;
use crate::overlay::{Dismissal, OverlayId};

/// What a click on a node asks the dashboard to do
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    OpenModal(String),
    CloseModal,
    ExpandImage { src: String, title: String },
    DismissOverlay { id: OverlayId, via: Dismissal },
    TogglePlotMode,
    ScrollTo(String),
    Feature(FeatureAction),
}

/// Element attributes and children
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
    pub on_click: Option<Action>,
    /// Clicks on this element do not reach its ancestors
    pub contain_clicks: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn el(tag: &'static str) -> Element {
        Element { tag, ..Element::default() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text content of the subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Depth-first search for the first element carrying `class`
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        self.find(&|el: &Element| el.has_class(class))
    }

    pub fn find_id(&self, id: &str) -> Option<&Element> {
        self.find(&|el: &Element| el.id.as_deref() == Some(id))
    }

    fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        let el = self.as_element()?;
        if pred(el) {
            return Some(el);
        }
        el.children.iter().find_map(|c| c.find(pred))
    }

    /// Serialise to HTML; text and attribute values are escaped
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&escape(t)),
            Node::Element(el) => {
                out.push('<');
                out.push_str(el.tag);
                if let Some(id) = &el.id {
                    let _ = write!(out, r#" id="{}""#, escape(id));
                }
                if !el.classes.is_empty() {
                    let _ = write!(out, r#" class="{}""#, escape(&el.classes.join(" ")));
                }
                for (name, value) in &el.attrs {
                    let _ = write!(out, r#" {name}="{}""#, escape(value));
                }
                out.push('>');
                if is_void(el.tag) {
                    return;
                }
                for child in &el.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", el.tag);
            }
        }
    }
}

impl Element {
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    #[must_use]
    pub fn on_click(mut self, action: Action) -> Self {
        self.on_click = Some(action);
        self
    }

    #[must_use]
    pub fn contain_clicks(mut self) -> Self {
        self.contain_clicks = true;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "hr" | "input" | "meta" | "link")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
