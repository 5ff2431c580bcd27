// SPDX-License-Identifier: MPL-2.0
//! The popover menu surface: submenu navigation over a single page stack.
//!
//! A [`MenuSurface`] owns exactly one [`PageStack`] and presents its current
//! selection as the readable, writable, change-notifying `visible-submenu`
//! property. Hosts attach children (explicitly named, or through the
//! implicit-naming convention used by declarative loaders), switch pages with
//! [`MenuSurface::open_submenu`], and rely on the show/hide lifecycle to
//! reset the menu to its root page between sessions.
//!
//! The surface never holds more than one direct structural child; all
//! host-provided content lives inside pages of the stack.

use crate::error::{Error, Result};
use crate::page_stack::PageStack;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Reserved name of the root page, the target of the show/hide reset.
pub const ROOT_PAGE_NAME: &str = "main";

/// Implicit name assigned to an unnamed child once the root page exists.
pub const FALLBACK_SUBMENU_NAME: &str = "submenu";

type Observers = Rc<RefCell<Vec<Box<dyn Fn(Option<&str>)>>>>;

/// A transient overlay container that treats its children like menus and
/// allows switching between them by name.
///
/// The generic parameter `T` is the host's opaque page content handle; the
/// surface only stores and compares it, it never interprets it.
///
/// All operations are synchronous and assume exclusive access from the
/// single owning (UI) thread. Property-change observers fire inside the call
/// that caused the change and must not call back into mutating surface
/// operations.
pub struct MenuSurface<T> {
    stack: PageStack<T>,
    root_content: Option<T>,
    shown: bool,
    observers: Observers,
}

impl<T> MenuSurface<T> {
    /// Creates a new surface with an empty page stack and no selection.
    ///
    /// The stack's selection-changed callback is wired here, once, so that
    /// every selection change is re-raised as a `visible-submenu` property
    /// change. External observers never need to know the stack exists.
    #[must_use]
    pub fn new() -> Self {
        let observers: Observers = Rc::new(RefCell::new(Vec::new()));
        let mut stack = PageStack::new();

        let subscribers = Rc::clone(&observers);
        stack.set_selection_changed(move |name| {
            for observer in subscribers.borrow().iter() {
                observer(name);
            }
        });

        Self {
            stack,
            root_content: None,
            shown: false,
            observers,
        }
    }

    /// Registers an observer for `visible-submenu` property changes.
    ///
    /// Observers fire synchronously, in registration order, carrying the new
    /// current page name (or `None` when the selection became undefined).
    pub fn on_visible_submenu_change(&mut self, observer: impl Fn(Option<&str>) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    /// Installs `content` as the surface's single structural child.
    ///
    /// The structural child is the node that visually hosts the pages; it is
    /// not a page itself and never participates in navigation. It can be
    /// established at most once.
    ///
    /// Fails with [`Error::RootAlreadyInstalled`] on a second call.
    pub fn install_root_content(&mut self, content: T) -> Result<()> {
        if self.root_content.is_some() {
            return Err(Error::RootAlreadyInstalled);
        }
        self.root_content = Some(content);
        Ok(())
    }

    /// Adds `content` as a submenu page under `name`.
    ///
    /// Fails with [`Error::DuplicateName`] if a page named `name` already
    /// exists.
    pub fn add_submenu(&mut self, content: T, name: &str) -> Result<()> {
        self.stack.add(name, content)
    }

    /// Attaches a child, resolving its page name by convention.
    ///
    /// This is the entry point used by declarative loaders, where a child's
    /// own assigned identifier doubles as its page name:
    ///
    /// - the first unnamed child establishes the structural container and is
    ///   not added as a page;
    /// - otherwise, an explicit `name` wins;
    /// - otherwise, the child is named `"submenu"` if a page named `"main"`
    ///   already exists, and `"main"` if not.
    ///
    /// The explicit-name-first, then "is main taken?" ordering guarantees a
    /// freshly constructed surface acquires a page literally named `"main"`
    /// before any other implicit name is assigned, which the reset-on-hide
    /// policy depends on.
    pub fn attach_child(&mut self, content: T, name: Option<&str>) -> Result<()> {
        match name {
            Some(name) => self.add_submenu(content, name),
            None if self.root_content.is_none() => self.install_root_content(content),
            None => {
                let name = if self.stack.contains(ROOT_PAGE_NAME) {
                    FALLBACK_SUBMENU_NAME
                } else {
                    ROOT_PAGE_NAME
                };
                self.add_submenu(content, name)
            }
        }
    }

    /// Detaches a child by content identity and returns its content handle.
    ///
    /// If `content` identifies the structural child, that child is removed
    /// from the surface entirely; the page stack itself survives until the
    /// surface is dropped. Any other content is forwarded to the stack's
    /// page removal.
    ///
    /// Fails with [`Error::NotFound`] if `content` is neither the structural
    /// child nor a page.
    pub fn detach_child(&mut self, content: &T) -> Result<T>
    where
        T: PartialEq,
    {
        match self.root_content.take_if(|root| *root == *content) {
            Some(root) => Ok(root),
            None => self.stack.remove(content),
        }
    }

    /// Opens the submenu named `name`.
    ///
    /// `name` must be one of the names given to this surface's submenus, or
    /// `"main"` to switch back to the main menu. Trigger controls provided by
    /// the host call this; it is equivalent to writing the `visible-submenu`
    /// property.
    ///
    /// Fails with [`Error::NotFound`] if no page has that name, leaving the
    /// visible submenu unchanged.
    pub fn open_submenu(&mut self, name: &str) -> Result<()> {
        self.stack.select(name)
    }

    /// Returns the name of the visible submenu, or `None` if no page is
    /// selected yet.
    #[must_use]
    pub fn visible_submenu(&self) -> Option<&str> {
        self.stack.current_name()
    }

    /// Writes the `visible-submenu` property. Same contract as
    /// [`MenuSurface::open_submenu`].
    pub fn set_visible_submenu(&mut self, name: &str) -> Result<()> {
        self.open_submenu(name)
    }

    /// Makes the surface visible and resets navigation to the root page.
    ///
    /// The reset also runs on [`MenuSurface::hide`], so a newly presented
    /// menu always starts at `"main"` regardless of where the previous
    /// session left off.
    ///
    /// Fails with [`Error::MisconfiguredRoot`] if no `"main"` page exists;
    /// the host registered no root page, which is fatal misuse rather than a
    /// recoverable condition.
    pub fn show(&mut self) -> Result<()> {
        self.shown = true;
        self.reset_to_root()
    }

    /// Hides the surface and resets navigation to the root page.
    ///
    /// Same error contract as [`MenuSurface::show`].
    pub fn hide(&mut self) -> Result<()> {
        self.shown = false;
        self.reset_to_root()
    }

    /// Checks whether the surface is currently shown.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Returns the content of the page named `name`, if present.
    pub fn page_content(&self, name: &str) -> Option<&T> {
        self.stack.get(name)
    }

    /// Checks whether a page named `name` exists.
    #[must_use]
    pub fn contains_page(&self, name: &str) -> bool {
        self.stack.contains(name)
    }

    /// Returns the names of all registered pages.
    pub fn page_names(&self) -> impl Iterator<Item = &str> {
        self.stack.names()
    }

    /// Returns the number of registered pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.stack.len()
    }

    /// Returns the structural child's content handle, if one is installed.
    pub fn root_content(&self) -> Option<&T> {
        self.root_content.as_ref()
    }

    fn reset_to_root(&mut self) -> Result<()> {
        match self.stack.select(ROOT_PAGE_NAME) {
            Err(Error::NotFound(_)) => Err(Error::MisconfiguredRoot),
            other => other,
        }
    }
}

impl<T> Default for MenuSurface<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MenuSurface<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuSurface")
            .field("stack", &self.stack)
            .field("root_content", &self.root_content)
            .field("shown", &self.shown)
            .finish_non_exhaustive()
    }
}
