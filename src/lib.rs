// SPDX-License-Identifier: MPL-2.0
//! `popover_menu` is a single-selection, named-child navigation container
//! for presenting hierarchical menus inside a transient overlay surface,
//! built for the Iced GUI toolkit.
//!
//! A host registers logical pages — a main menu and zero or more submenus —
//! each under a stable name, switches the visible page on demand, and
//! observes the current page through the change-notifying `visible-submenu`
//! property. Hiding or showing the surface always resets navigation to the
//! root page named `"main"`, so a menu never reopens mid-navigation in a
//! stale submenu.
//!
//! The navigation core ([`PageStack`], [`MenuSurface`]) is renderer-agnostic
//! and generic over the host's page content; the [`ui`] module bridges it
//! into Iced views.

#![doc(html_root_url = "https://docs.rs/popover_menu/0.1.0")]

pub mod config;
pub mod error;
pub mod menu_surface;
pub mod page_stack;
pub mod transition;
pub mod ui;

pub use error::{Error, Result};
pub use menu_surface::{MenuSurface, FALLBACK_SUBMENU_NAME, ROOT_PAGE_NAME};
pub use page_stack::PageStack;
