//! Wiring — builds the controller over the live page and hooks it to the
//! document lifecycle.

use std::rc::Rc;

use duskswitch_app::controller::{Phase, ThemeController};
use duskswitch_app::ports::{Document, PreferenceStore};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event};

use crate::config;
use crate::document::BrowserDocument;
use crate::error::WebError;
use crate::storage::LocalStorage;

type PageController = ThemeController<LocalStorage, BrowserDocument>;

/// When the correction pass runs relative to module load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReadyPass {
    /// The document is already parsed.
    Now,
    /// Wait for `DOMContentLoaded`.
    OnContentLoaded,
}

impl ReadyPass {
    /// Decide from `document.readyState`.
    ///
    /// Only `"loading"` defers: a listener added after `DOMContentLoaded`
    /// fired never runs.
    pub(crate) fn for_ready_state(state: &str) -> Self {
        if state == "loading" {
            Self::OnContentLoaded
        } else {
            Self::Now
        }
    }
}

/// Eager pass, then when to run the correction pass.
pub(crate) fn begin<S: PreferenceStore, D: Document>(
    controller: &ThemeController<S, D>,
    ready_state: &str,
) -> ReadyPass {
    controller.init();
    ReadyPass::for_ready_state(ready_state)
}

/// Correction pass. Returns whether the toggle control must be bound now:
/// only on the first ready pass and only when the page has one.
pub(crate) fn complete<S: PreferenceStore, D: Document>(
    controller: &ThemeController<S, D>,
    has_toggle: bool,
) -> bool {
    let first = controller.phase() == Phase::Loading;
    controller.on_ready();
    first && has_toggle
}

/// Start the toggler on the current page.
///
/// Runs the eager pass immediately. The correction pass and the click
/// binding run on `DOMContentLoaded`, or right away when the document has
/// already been parsed.
///
/// # Errors
///
/// Returns [`WebError`] when there is no window or document, or the
/// `DOMContentLoaded` listener cannot be registered.
pub fn run() -> Result<(), WebError> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    let controller = Rc::new(ThemeController::new(
        config::read(&document),
        LocalStorage::new(window),
        BrowserDocument::new(document.clone()),
    ));

    match begin(&controller, &document.ready_state()) {
        ReadyPass::Now => ready(&controller, &document),
        ReadyPass::OnContentLoaded => {
            let ctrl = Rc::clone(&controller);
            let doc = document.clone();
            let on_ready = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                ready(&ctrl, &doc);
            });
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                on_ready.as_ref().unchecked_ref(),
            )?;
            // lives for the page
            on_ready.forget();
        }
    }

    Ok(())
}

fn ready(controller: &Rc<PageController>, document: &web_sys::Document) {
    let toggle = document.get_element_by_id(&controller.config().toggle_id);
    if !complete(controller, toggle.is_some()) {
        tracing::debug!(toggle_id = %controller.config().toggle_id, "no theme toggle to bind");
        return;
    }
    if let Some(toggle) = toggle {
        if let Err(err) = bind_toggle(controller, &toggle) {
            tracing::warn!(error = %err, "unable to bind theme toggle");
        }
    }
}

fn bind_toggle(controller: &Rc<PageController>, toggle: &Element) -> Result<(), WebError> {
    let ctrl = Rc::clone(controller);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        ctrl.toggle();
    });
    toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    tracing::debug!(toggle_id = %controller.config().toggle_id, "theme toggle bound");
    Ok(())
}
