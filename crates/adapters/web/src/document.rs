//! Live DOM document.

use duskswitch_app::ports::{Document, Node};
use web_sys::Element;

/// [`Document`] over a `web_sys::Document`.
///
/// Nodes are resolved on every call since `<body>` does not exist yet when
/// the eager pass runs.
pub struct BrowserDocument {
    inner: web_sys::Document,
}

impl BrowserDocument {
    #[must_use]
    pub fn new(inner: web_sys::Document) -> Self {
        Self { inner }
    }

    fn node(&self, node: Node) -> Option<Element> {
        match node {
            Node::Root => self.inner.document_element(),
            Node::Body => self.inner.body().map(Element::from),
        }
    }
}

impl Document for BrowserDocument {
    fn has_body(&self) -> bool {
        self.inner.body().is_some()
    }

    fn has_class(&self, node: Node, class: &str) -> bool {
        self.node(node)
            .is_some_and(|el| el.class_list().contains(class))
    }

    fn set_class(&self, node: Node, class: &str, present: bool) {
        let Some(el) = self.node(node) else {
            return;
        };
        let list = el.class_list();
        let result = if present {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
        if let Err(err) = result {
            tracing::debug!(?node, error = ?err, "class update rejected");
        }
    }

    fn toggle_class(&self, node: Node, class: &str) {
        if let Some(el) = self.node(node) {
            if let Err(err) = el.class_list().toggle(class) {
                tracing::debug!(?node, error = ?err, "class toggle rejected");
            }
        }
    }

    fn set_icon_class(&self, toggle_id: &str, icon_selector: &str, class: &str) -> bool {
        let icon = self
            .inner
            .get_element_by_id(toggle_id)
            .and_then(|toggle| toggle.query_selector(icon_selector).ok().flatten());
        match icon {
            Some(icon) => {
                icon.set_class_name(class);
                true
            }
            None => false,
        }
    }
}
