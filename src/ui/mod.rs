// SPDX-License-Identifier: MPL-2.0
//! Iced view layer for the menu surface.
//!
//! The core components are renderer-agnostic; this module is the thin bridge
//! that puts the current page's content on screen. The host supplies a
//! closure mapping its opaque page content to an [`Element`], and [`view`]
//! wraps the result in the menu-styled container.

pub mod styles;

use crate::menu_surface::MenuSurface;
use iced::widget::{Column, Container};
use iced::{Element, Length};

/// Inner padding of the menu container.
const MENU_PADDING: f32 = 6.0;

/// Renders the visible submenu of `surface`.
///
/// `render_page` turns the current page's content handle into the page body.
/// A surface with no selection (no pages yet, or the current page was just
/// removed) renders an empty body; the menu styling is applied either way.
pub fn view<'a, T, Message: 'a>(
    surface: &'a MenuSurface<T>,
    render_page: impl Fn(&'a T) -> Element<'a, Message>,
) -> Element<'a, Message> {
    let body: Element<'a, Message> = match surface
        .visible_submenu()
        .and_then(|name| surface.page_content(name))
    {
        Some(content) => render_page(content),
        None => Column::new().into(),
    };

    Container::new(body)
        .padding(MENU_PADDING)
        .width(Length::Shrink)
        .style(styles::menu)
        .into()
}
