// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios exercising the surface the way a host would: build
//! the menu declaratively, navigate, and run the show/hide lifecycle.

use popover_menu::{Error, MenuSurface, FALLBACK_SUBMENU_NAME, ROOT_PAGE_NAME};
use std::cell::RefCell;
use std::rc::Rc;

/// Host-side content handle standing in for a widget subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MenuBox {
    label: &'static str,
}

impl MenuBox {
    fn new(label: &'static str) -> Self {
        Self { label }
    }
}

#[test]
fn declarative_construction_yields_main_then_submenu() {
    let mut surface = MenuSurface::new();

    // First child establishes the structural container, never a page.
    surface
        .attach_child(MenuBox::new("container"), None)
        .expect("attach failed");
    assert_eq!(surface.page_count(), 0);
    assert_eq!(surface.visible_submenu(), None);

    // Unnamed children after that: "main" first, then "submenu".
    surface
        .attach_child(MenuBox::new("root items"), None)
        .expect("attach failed");
    surface
        .attach_child(MenuBox::new("more items"), None)
        .expect("attach failed");

    assert_eq!(
        surface.page_content(ROOT_PAGE_NAME),
        Some(&MenuBox::new("root items"))
    );
    assert_eq!(
        surface.page_content(FALLBACK_SUBMENU_NAME),
        Some(&MenuBox::new("more items"))
    );
}

#[test]
fn full_menu_session_resets_to_main_between_presentations() {
    let mut surface = MenuSurface::new();
    surface
        .add_submenu(MenuBox::new("root items"), "main")
        .expect("add failed");
    surface
        .add_submenu(MenuBox::new("more items"), "submenu")
        .expect("add failed");

    // Session one: present, navigate into the submenu, dismiss.
    surface.show().expect("show failed");
    surface.open_submenu("submenu").expect("open failed");
    assert_eq!(surface.visible_submenu(), Some("submenu"));
    surface.hide().expect("hide failed");
    assert_eq!(surface.visible_submenu(), Some("main"));

    // Session two: the menu starts at the root page again.
    surface.show().expect("show failed");
    assert_eq!(surface.visible_submenu(), Some("main"));
}

#[test]
fn observers_track_every_navigation_of_a_session() {
    let mut surface = MenuSurface::new();
    let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    surface.on_visible_submenu_change(move |name| {
        sink.borrow_mut().push(name.map(str::to_string));
    });

    surface
        .add_submenu(MenuBox::new("root items"), "main")
        .expect("add failed"); // first page becomes current
    surface
        .add_submenu(MenuBox::new("more items"), "submenu")
        .expect("add failed"); // no selection change
    surface.open_submenu("submenu").expect("open failed");
    surface.open_submenu("submenu").expect("open failed"); // idempotent, silent
    surface.hide().expect("hide failed"); // reset to main

    assert_eq!(
        *seen.borrow(),
        vec![
            Some("main".to_string()),
            Some("submenu".to_string()),
            Some("main".to_string()),
        ]
    );
}

#[test]
fn removing_the_visible_page_leaves_selection_undefined_until_next_show() {
    let mut surface = MenuSurface::new();
    let more = MenuBox::new("more items");
    surface
        .add_submenu(MenuBox::new("root items"), "main")
        .expect("add failed");
    surface.add_submenu(more.clone(), "submenu").expect("add failed");
    surface.open_submenu("submenu").expect("open failed");

    surface.detach_child(&more).expect("detach failed");
    assert_eq!(surface.visible_submenu(), None);

    surface.show().expect("show failed");
    assert_eq!(surface.visible_submenu(), Some("main"));
}

#[test]
fn lifecycle_without_root_page_is_fatal_misuse() {
    let mut surface = MenuSurface::new();
    surface
        .add_submenu(MenuBox::new("orphan"), "orphan")
        .expect("add failed");

    assert_eq!(surface.show().unwrap_err(), Error::MisconfiguredRoot);
    assert_eq!(surface.hide().unwrap_err(), Error::MisconfiguredRoot);
}

#[test]
fn failed_navigation_never_disturbs_the_visible_page() {
    let mut surface = MenuSurface::new();
    surface
        .add_submenu(MenuBox::new("root items"), "main")
        .expect("add failed");

    assert!(matches!(
        surface.open_submenu("missing"),
        Err(Error::NotFound(_))
    ));
    assert!(matches!(
        surface.add_submenu(MenuBox::new("again"), "main"),
        Err(Error::DuplicateName(_))
    ));
    assert_eq!(surface.visible_submenu(), Some("main"));
    assert_eq!(surface.page_count(), 1);
}
