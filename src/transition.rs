// SPDX-License-Identifier: MPL-2.0
//! Page-swap presentation settings.
//!
//! The surface itself never animates anything; it only updates the current
//! selection and notifies. Whatever presents the swap (the host's transition
//! provider) consumes these settings together with the `visible-submenu`
//! change notification.

use serde::{Deserialize, Serialize};

/// Default duration of a page transition, in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 200;

/// How the transition provider should present a page swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    /// Swap instantly, no animation.
    None,
    /// Cross-fade between the outgoing and incoming pages.
    Crossfade,
    /// Slide horizontally, direction chosen by the relative page order.
    #[default]
    SlideLeftRight,
}

/// Presentation settings handed to the transition provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// The animation to present between pages.
    pub kind: Kind,
    /// Animation duration in milliseconds.
    pub duration_ms: u64,
    /// Whether the surface size animates along with the page swap.
    pub interpolate_size: bool,
    /// Whether all pages are forced to the height of the tallest one.
    /// Menus keep this off so short submenus do not leave dead space.
    pub vertically_homogeneous: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            kind: Kind::default(),
            duration_ms: DEFAULT_DURATION_MS,
            interpolate_size: true,
            vertically_homogeneous: false,
        }
    }
}
