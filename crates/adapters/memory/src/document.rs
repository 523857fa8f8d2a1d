//! In-memory document — just enough of a DOM to host the toggler.

use std::cell::RefCell;

use duskswitch_app::ports::{Document, Node};

/// Ordered class list without duplicates, like `Element.classList`.
#[derive(Debug, Default, Clone)]
struct ClassList(Vec<String>);

impl ClassList {
    fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    fn set(&mut self, class: &str, present: bool) {
        if present {
            if !self.contains(class) {
                self.0.push(class.to_string());
            }
        } else {
            self.0.retain(|c| c != class);
        }
    }
}

#[derive(Debug, Clone)]
struct Icon {
    tag: String,
    class_name: String,
}

#[derive(Debug, Clone)]
struct ToggleControl {
    id: String,
    icon: Option<Icon>,
}

/// A [`Document`] held in memory.
///
/// The body and the toggle control are optional so a test can reproduce a
/// document that is still being parsed, or a page without a toggle.
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    root: RefCell<ClassList>,
    body: RefCell<Option<ClassList>>,
    toggle: RefCell<Option<ToggleControl>>,
}

impl InMemoryDocument {
    /// Create a builder for constructing an [`InMemoryDocument`].
    #[must_use]
    pub fn builder() -> InMemoryDocumentBuilder {
        InMemoryDocumentBuilder::default()
    }

    /// Simulate the parser reaching `<body>`. No-op if it already exists.
    pub fn attach_body(&self) {
        let mut body = self.body.borrow_mut();
        if body.is_none() {
            *body = Some(ClassList::default());
        }
    }

    /// Classes of `node`, `None` when it does not exist.
    #[must_use]
    pub fn classes(&self, node: Node) -> Option<Vec<String>> {
        match node {
            Node::Root => Some(self.root.borrow().0.clone()),
            Node::Body => self.body.borrow().as_ref().map(|list| list.0.clone()),
        }
    }

    /// Current class attribute of the toggle icon, if there is one.
    #[must_use]
    pub fn icon_class(&self) -> Option<String> {
        self.toggle
            .borrow()
            .as_ref()
            .and_then(|toggle| toggle.icon.as_ref())
            .map(|icon| icon.class_name.clone())
    }
}

impl Document for InMemoryDocument {
    fn has_body(&self) -> bool {
        self.body.borrow().is_some()
    }

    fn has_class(&self, node: Node, class: &str) -> bool {
        match node {
            Node::Root => self.root.borrow().contains(class),
            Node::Body => self
                .body
                .borrow()
                .as_ref()
                .is_some_and(|list| list.contains(class)),
        }
    }

    fn set_class(&self, node: Node, class: &str, present: bool) {
        match node {
            Node::Root => self.root.borrow_mut().set(class, present),
            Node::Body => {
                if let Some(list) = self.body.borrow_mut().as_mut() {
                    list.set(class, present);
                }
            }
        }
    }

    fn toggle_class(&self, node: Node, class: &str) {
        let present = self.has_class(node, class);
        self.set_class(node, class, !present);
    }

    fn set_icon_class(&self, toggle_id: &str, icon_selector: &str, class: &str) -> bool {
        let mut toggle = self.toggle.borrow_mut();
        let icon = toggle
            .as_mut()
            .filter(|toggle| toggle.id == toggle_id)
            .and_then(|toggle| toggle.icon.as_mut())
            .filter(|icon| icon.tag.eq_ignore_ascii_case(icon_selector));
        match icon {
            Some(icon) => {
                icon.class_name = class.to_string();
                true
            }
            None => false,
        }
    }
}

/// Step-by-step builder for [`InMemoryDocument`].
#[derive(Debug, Default)]
pub struct InMemoryDocumentBuilder {
    root_classes: Vec<String>,
    body_classes: Option<Vec<String>>,
    toggle: Option<ToggleControl>,
}

impl InMemoryDocumentBuilder {
    #[must_use]
    pub fn root_class(mut self, class: impl Into<String>) -> Self {
        self.root_classes.push(class.into());
        self
    }

    /// Include a parsed `<body>`.
    #[must_use]
    pub fn body(mut self) -> Self {
        self.body_classes.get_or_insert_with(Vec::new);
        self
    }

    /// Include a parsed `<body>` carrying `class`.
    #[must_use]
    pub fn body_class(mut self, class: impl Into<String>) -> Self {
        self.body_classes
            .get_or_insert_with(Vec::new)
            .push(class.into());
        self
    }

    /// Add a toggle control with the given id and no icon.
    #[must_use]
    pub fn toggle(mut self, id: impl Into<String>) -> Self {
        self.toggle = Some(ToggleControl {
            id: id.into(),
            icon: None,
        });
        self
    }

    /// Give the toggle control an icon element with the given tag and class.
    ///
    /// Has no effect unless [`toggle`](Self::toggle) was called first.
    #[must_use]
    pub fn icon(mut self, tag: impl Into<String>, class_name: impl Into<String>) -> Self {
        if let Some(toggle) = self.toggle.as_mut() {
            toggle.icon = Some(Icon {
                tag: tag.into(),
                class_name: class_name.into(),
            });
        }
        self
    }

    #[must_use]
    pub fn build(self) -> InMemoryDocument {
        let mut root = ClassList::default();
        for class in &self.root_classes {
            root.set(class, true);
        }
        let body = self.body_classes.map(|classes| {
            let mut list = ClassList::default();
            for class in &classes {
                list.set(class, true);
            }
            list
        });
        InMemoryDocument {
            root: RefCell::new(root),
            body: RefCell::new(body),
            toggle: RefCell::new(self.toggle),
        }
    }
}
