//! Theme controller — applies the persisted preference to the document and
//! flips it on user request.
//!
//! The controller runs in two phases. [`ThemeController::init`] is the eager
//! pass executed as soon as the script loads, before the body may exist, so
//! the page never paints in the wrong theme. [`ThemeController::on_ready`] is
//! the correction pass once the document structure is parsed.

use std::cell::Cell;

use duskswitch_domain::theme::Theme;

use crate::config::ThemeConfig;
use crate::ports::{Document, Node, PreferenceStore};

/// Where the controller is in the page lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The document is still being parsed; the body may be missing.
    Loading,
    /// The correction pass has run.
    Ready,
}

/// Reflects the theme preference onto a [`Document`] and keeps it persisted
/// in a [`PreferenceStore`].
pub struct ThemeController<S, D> {
    config: ThemeConfig,
    store: S,
    document: D,
    phase: Cell<Phase>,
}

impl<S: PreferenceStore, D: Document> ThemeController<S, D> {
    /// Create a controller over the given store and document.
    pub fn new(config: ThemeConfig, store: S, document: D) -> Self {
        Self {
            config,
            store,
            document,
            phase: Cell::new(Phase::Loading),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    /// Eager pass: apply whatever is stored, touching the body only if it
    /// already exists.
    pub fn init(&self) {
        tracing::debug!(phase = ?self.phase(), "eager theme pass");
        self.apply_theme();
    }

    /// Correction pass once the document structure is parsed.
    ///
    /// Safe to call more than once.
    pub fn on_ready(&self) {
        tracing::debug!(phase = ?self.phase(), "correction theme pass");
        self.apply_theme();
        self.phase.set(Phase::Ready);
    }

    /// Read the stored preference and mirror it onto root and body.
    pub fn apply_theme(&self) {
        let theme = self.stored_theme();
        let marker = self.config.marker_class.as_str();

        self.document.set_class(Node::Root, marker, theme.is_dark());
        if self.document.has_body() {
            self.document.set_class(Node::Body, marker, theme.is_dark());
        }

        self.update_icon();
    }

    /// Show the glyph matching the applied theme on the toggle control.
    ///
    /// Does nothing when the page has no toggle control or it has no icon.
    pub fn update_icon(&self) {
        let glyph = self.config.glyph_for(self.current());
        let updated =
            self.document
                .set_icon_class(&self.config.toggle_id, &self.config.icon_selector, glyph);
        if !updated {
            tracing::trace!(toggle_id = %self.config.toggle_id, "no toggle icon to update");
        }
    }

    /// Flip the applied theme, persist it and refresh the icon.
    ///
    /// Returns the theme now applied. A failed write is logged and leaves the
    /// document flipped.
    pub fn toggle(&self) -> Theme {
        let marker = self.config.marker_class.as_str();
        self.document.toggle_class(Node::Body, marker);
        self.document.toggle_class(Node::Root, marker);

        let theme = self.current();
        if let Err(err) = self.store.save(&self.config.storage_key, theme.as_str()) {
            tracing::warn!(error = %err, %theme, "unable to persist theme preference");
        }
        self.update_icon();

        tracing::debug!(%theme, "theme toggled");
        theme
    }

    /// The theme currently applied to the document.
    ///
    /// Read from the body, or from the root while the body is missing.
    #[must_use]
    pub fn current(&self) -> Theme {
        let node = if self.document.has_body() {
            Node::Body
        } else {
            Node::Root
        };
        Theme::from_marker(self.document.has_class(node, &self.config.marker_class))
    }

    fn stored_theme(&self) -> Theme {
        match self.store.load(&self.config.storage_key) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(err) => {
                tracing::warn!(error = %err, "unable to read theme preference, using default");
                Theme::default()
            }
        }
    }
}
