//! Document port — the handful of DOM operations the controller needs.

use std::rc::Rc;

/// The two nodes carrying the marker class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    /// The root element (`<html>`), present from the first script run.
    Root,
    /// The `<body>` element, absent until the parser reaches it.
    Body,
}

/// A live document the theme is reflected onto.
///
/// Operations on a node that does not exist are no-ops, and
/// [`has_class`](Self::has_class) reports `false` for it.
pub trait Document {
    /// Whether the body element has been parsed yet.
    fn has_body(&self) -> bool;

    fn has_class(&self, node: Node, class: &str) -> bool;

    /// Add `class` to `node` when `present`, remove it otherwise.
    fn set_class(&self, node: Node, class: &str, present: bool);

    fn toggle_class(&self, node: Node, class: &str);

    /// Replace the whole class attribute of the first element matching
    /// `icon_selector` inside the element with id `toggle_id`.
    ///
    /// Returns `false` when either element is missing.
    fn set_icon_class(&self, toggle_id: &str, icon_selector: &str, class: &str) -> bool;
}

impl<T: Document + ?Sized> Document for Rc<T> {
    fn has_body(&self) -> bool {
        (**self).has_body()
    }

    fn has_class(&self, node: Node, class: &str) -> bool {
        (**self).has_class(node, class)
    }

    fn set_class(&self, node: Node, class: &str, present: bool) {
        (**self).set_class(node, class, present);
    }

    fn toggle_class(&self, node: Node, class: &str) {
        (**self).toggle_class(node, class);
    }

    fn set_icon_class(&self, toggle_id: &str, icon_selector: &str, class: &str) -> bool {
        (**self).set_icon_class(toggle_id, icon_selector, class)
    }
}
