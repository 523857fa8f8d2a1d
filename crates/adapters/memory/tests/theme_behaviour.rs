//! End-to-end behaviour of the theme controller over the in-memory adapters.

use std::rc::Rc;

use duskswitch_adapter_memory::{InMemoryDocument, InMemoryPreferenceStore};
use duskswitch_app::config::ThemeConfig;
use duskswitch_app::controller::{Phase, ThemeController};
use duskswitch_app::ports::{Document, Node};
use duskswitch_domain::theme::Theme;

const MARKER: &str = "light-mode";

type Controller = ThemeController<Rc<InMemoryPreferenceStore>, Rc<InMemoryDocument>>;

struct Page {
    controller: Controller,
    store: Rc<InMemoryPreferenceStore>,
    doc: Rc<InMemoryDocument>,
}

impl Page {
    fn new(store: InMemoryPreferenceStore, doc: InMemoryDocument) -> Self {
        let store = Rc::new(store);
        let doc = Rc::new(doc);
        let controller =
            ThemeController::new(ThemeConfig::default(), Rc::clone(&store), Rc::clone(&doc));
        Self {
            controller,
            store,
            doc,
        }
    }

    /// Both passes, the way a page that finished parsing sees them.
    fn loaded(store: InMemoryPreferenceStore) -> Self {
        let page = Self::new(store, full_document());
        page.controller.init();
        page.controller.on_ready();
        page
    }

    fn marker_on_root(&self) -> bool {
        self.doc.has_class(Node::Root, MARKER)
    }

    fn marker_on_body(&self) -> bool {
        self.doc.has_class(Node::Body, MARKER)
    }

    fn assert_in_sync(&self) {
        assert_eq!(self.marker_on_root(), self.marker_on_body());
    }
}

fn full_document() -> InMemoryDocument {
    InMemoryDocument::builder()
        .body()
        .toggle("themeToggle")
        .icon("i", "")
        .build()
}

#[test]
fn should_default_to_dark_when_nothing_is_stored() {
    let page = Page::loaded(InMemoryPreferenceStore::new());

    assert!(page.marker_on_root());
    assert!(page.marker_on_body());
    assert_eq!(page.doc.icon_class().as_deref(), Some("ri-sun-line"));
    assert_eq!(page.controller.current(), Theme::Dark);
    assert_eq!(page.controller.phase(), Phase::Ready);
}

#[test]
fn should_produce_identical_document_when_applied_twice() {
    let page = Page::loaded(InMemoryPreferenceStore::with_value("theme", "light"));
    let root = page.doc.classes(Node::Root);
    let body = page.doc.classes(Node::Body);
    let icon = page.doc.icon_class();

    page.controller.apply_theme();

    assert_eq!(page.doc.classes(Node::Root), root);
    assert_eq!(page.doc.classes(Node::Body), body);
    assert_eq!(page.doc.icon_class(), icon);
}

#[test]
fn should_apply_light_when_light_is_stored() {
    let page = Page::loaded(InMemoryPreferenceStore::with_value("theme", "light"));

    assert!(!page.marker_on_root());
    assert!(!page.marker_on_body());
    assert_eq!(page.doc.icon_class().as_deref(), Some("ri-moon-line"));
}

#[test]
fn should_apply_dark_when_dark_is_stored() {
    let page = Page::loaded(InMemoryPreferenceStore::with_value("theme", "dark"));

    assert!(page.marker_on_root());
    assert!(page.marker_on_body());
    assert_eq!(page.doc.icon_class().as_deref(), Some("ri-sun-line"));
}

#[test]
fn should_apply_light_when_stored_value_is_unrecognised() {
    let page = Page::loaded(InMemoryPreferenceStore::with_value("theme", "solarized"));

    assert!(!page.marker_on_body());
    assert_eq!(page.controller.current(), Theme::Light);
}

#[test]
fn should_clear_stale_marker_when_light_is_stored() {
    let doc = InMemoryDocument::builder()
        .root_class(MARKER)
        .body_class(MARKER)
        .toggle("themeToggle")
        .icon("i", "ri-sun-line")
        .build();
    let page = Page::new(InMemoryPreferenceStore::with_value("theme", "light"), doc);
    page.controller.on_ready();

    assert!(!page.marker_on_root());
    assert!(!page.marker_on_body());
    assert_eq!(page.doc.icon_class().as_deref(), Some("ri-moon-line"));
}

#[test]
fn should_toggle_and_persist_in_both_directions() {
    let page = Page::loaded(InMemoryPreferenceStore::new());

    assert_eq!(page.controller.toggle(), Theme::Light);
    assert!(!page.marker_on_root());
    assert!(!page.marker_on_body());
    assert_eq!(page.store.get("theme").as_deref(), Some("light"));
    assert_eq!(page.doc.icon_class().as_deref(), Some("ri-moon-line"));

    assert_eq!(page.controller.toggle(), Theme::Dark);
    assert!(page.marker_on_root());
    assert!(page.marker_on_body());
    assert_eq!(page.store.get("theme").as_deref(), Some("dark"));
    assert_eq!(page.doc.icon_class().as_deref(), Some("ri-sun-line"));
}

#[test]
fn should_restore_toggled_preference_on_next_page_load() {
    let first = Page::loaded(InMemoryPreferenceStore::new());
    first.controller.toggle();
    let stored = first.store.get("theme").unwrap();

    let second = Page::loaded(InMemoryPreferenceStore::with_value("theme", &stored));
    assert!(!second.marker_on_body());
    assert_eq!(second.doc.icon_class().as_deref(), Some("ri-moon-line"));
}

#[test]
fn should_initialise_when_page_has_no_toggle_control() {
    let doc = InMemoryDocument::builder().body().build();
    let page = Page::new(InMemoryPreferenceStore::new(), doc);
    page.controller.init();
    page.controller.on_ready();

    assert!(page.marker_on_root());
    assert!(page.marker_on_body());
    assert_eq!(page.doc.icon_class(), None);
}

#[test]
fn should_initialise_when_toggle_control_has_no_icon() {
    let doc = InMemoryDocument::builder().body().toggle("themeToggle").build();
    let page = Page::new(InMemoryPreferenceStore::with_value("theme", "light"), doc);
    page.controller.on_ready();

    assert!(!page.marker_on_body());
    assert_eq!(page.doc.icon_class(), None);
}

#[test]
fn should_keep_root_and_body_in_sync_across_operations() {
    let page = Page::loaded(InMemoryPreferenceStore::new());
    page.assert_in_sync();

    for _ in 0..3 {
        page.controller.toggle();
        page.assert_in_sync();
    }

    page.controller.apply_theme();
    page.assert_in_sync();
}

#[test]
fn should_mark_root_only_during_eager_pass_and_fix_body_when_ready() {
    let page = Page::new(InMemoryPreferenceStore::new(), InMemoryDocument::default());
    page.controller.init();

    assert!(page.marker_on_root());
    assert!(!page.doc.has_body());
    assert_eq!(page.controller.phase(), Phase::Loading);

    page.doc.attach_body();
    page.controller.on_ready();

    assert!(page.marker_on_body());
    page.assert_in_sync();
    assert_eq!(page.controller.phase(), Phase::Ready);
}

#[test]
fn should_fall_back_to_dark_when_store_is_unavailable() {
    let store = InMemoryPreferenceStore::with_value("theme", "light");
    store.set_available(false);
    let page = Page::loaded(store);

    assert!(page.marker_on_root());
    assert!(page.marker_on_body());
    assert_eq!(page.doc.icon_class().as_deref(), Some("ri-sun-line"));
}

#[test]
fn should_flip_document_when_store_rejects_write() {
    let page = Page::loaded(InMemoryPreferenceStore::new());
    page.store.set_available(false);

    assert_eq!(page.controller.toggle(), Theme::Light);
    assert!(!page.marker_on_body());
    page.assert_in_sync();
    assert_eq!(page.store.get("theme"), None);
}
