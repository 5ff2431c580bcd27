// SPDX-License-Identifier: MPL-2.0
//! Named page storage with a single current selection.
//!
//! A [`PageStack`] maps unique names to pages (opaque content handles) and
//! tracks which page is current. It is the state machine behind a
//! [`MenuSurface`](crate::menu_surface::MenuSurface): the surface forwards
//! structural mutations here and re-raises the selection-changed callback as
//! its `visible-submenu` property change.

use crate::error::{Error, Result};
use std::fmt;

/// Callback invoked synchronously whenever the current selection changes.
///
/// Carries the new current page name, or `None` when the selection became
/// undefined (the current page was removed).
pub type SelectionChanged = Box<dyn Fn(Option<&str>)>;

/// A named, selectable content unit within a [`PageStack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    name: String,
    content: T,
}

impl<T> Page<T> {
    /// Returns the unique name of this page.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the content handle held by this page.
    pub fn content(&self) -> &T {
        &self.content
    }
}

/// A name-to-page mapping with at most one page marked current.
///
/// Invariants:
/// - page names are unique; adding a duplicate name fails,
/// - at most one page is current, and the current name (if set) always
///   refers to a page present in the mapping.
///
/// Selection changes are reported through a single callback slot, registered
/// once by the owning surface at construction. The callback fires
/// synchronously inside the call that caused the change, and only when the
/// selection actually changed (selecting the already-current page is a
/// no-op).
pub struct PageStack<T> {
    pages: Vec<Page<T>>,
    current: Option<String>,
    selection_changed: Option<SelectionChanged>,
}

impl<T> PageStack<T> {
    /// Creates a new stack with an empty mapping and no selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: None,
            selection_changed: None,
        }
    }

    /// Registers the selection-changed callback.
    ///
    /// There is a single slot; a later registration replaces the earlier one.
    /// The owning surface registers its bridge here at construction.
    pub fn set_selection_changed(&mut self, callback: impl Fn(Option<&str>) + 'static) {
        self.selection_changed = Some(Box::new(callback));
    }

    /// Adds a page under `name`.
    ///
    /// Adding never switches an existing selection; switching is a separate,
    /// explicit operation. The one exception: when the mapping was previously
    /// empty, the new page becomes the initial selection and the
    /// selection-changed callback fires.
    ///
    /// Fails with [`Error::DuplicateName`] if `name` is already present.
    pub fn add(&mut self, name: &str, content: T) -> Result<()> {
        if self.contains(name) {
            return Err(Error::DuplicateName(name.to_string()));
        }

        let was_empty = self.pages.is_empty();
        self.pages.push(Page {
            name: name.to_string(),
            content,
        });

        if was_empty {
            self.current = Some(name.to_string());
            self.emit_selection_changed();
        }

        Ok(())
    }

    /// Removes the page holding `content` and returns the content handle.
    ///
    /// If the removed page was current, the selection becomes undefined and
    /// the selection-changed callback fires with `None`. No fallback page is
    /// chosen here; the surface's reset-to-root policy is the fallback
    /// actually used in practice.
    ///
    /// Fails with [`Error::NotFound`] if no page holds `content`.
    pub fn remove(&mut self, content: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let Some(position) = self.pages.iter().position(|page| page.content == *content) else {
            return Err(Error::NotFound("no page holds the given content".to_string()));
        };

        let removed = self.pages.remove(position);
        if self.current.as_deref() == Some(removed.name.as_str()) {
            self.current = None;
            self.emit_selection_changed();
        }

        Ok(removed.content)
    }

    /// Makes the page named `name` current.
    ///
    /// Fires the selection-changed callback exactly once when the selection
    /// actually changed; selecting the already-current page is silent.
    ///
    /// Fails with [`Error::NotFound`] if `name` does not resolve to a page,
    /// leaving the selection unchanged. The failure is reported rather than
    /// ignored so that the reset-to-root path can detect a missing root page.
    pub fn select(&mut self, name: &str) -> Result<()> {
        if !self.contains(name) {
            return Err(Error::NotFound(name.to_string()));
        }

        if self.current.as_deref() != Some(name) {
            self.current = Some(name.to_string());
            self.emit_selection_changed();
        }

        Ok(())
    }

    /// Returns the name of the current page, or `None` if no page is
    /// selected. Pure query, no side effects.
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns the content of the page named `name`, if present.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.pages
            .iter()
            .find(|page| page.name == name)
            .map(Page::content)
    }

    /// Checks whether a page named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.pages.iter().any(|page| page.name == name)
    }

    /// Returns the names of all registered pages.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(Page::name)
    }

    /// Returns all registered pages. Presentation code uses this to lay out
    /// the outgoing and incoming pages of a transition.
    pub fn pages(&self) -> impl Iterator<Item = &Page<T>> {
        self.pages.iter()
    }

    /// Returns the number of registered pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Checks whether no pages are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn emit_selection_changed(&self) {
        if let Some(callback) = &self.selection_changed {
            callback(self.current.as_deref());
        }
    }
}

impl<T> Default for PageStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for PageStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageStack")
            .field("pages", &self.pages)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
