// SPDX-License-Identifier: MPL-2.0
//! Menu container styling.

use iced::widget::container;
use iced::{Border, Theme};

/// Corner radius of the menu container.
const MENU_RADIUS: f32 = 6.0;

/// Style applied once to the surface's content node, tagging it as a menu.
///
/// The colors derive from the active Iced `Theme` palette so the menu stays
/// readable in both light and dark modes without hard-coding colors.
pub fn menu(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: MENU_RADIUS.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}
