//! Responsive navbar placement.
//!
//! Below the small breakpoint the navbar either covers the whole content
//! area or disappears. Above it, the navbar docks at the width configured for
//! the active breakpoint.

use crate::widgets::chrome::NavbarWidth;

/// Window widths at which the navbar switches presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Breakpoints {
    pub(crate) sm: f32,
    pub(crate) lg: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            sm: 768.0,
            lg: 1200.0,
        }
    }
}

/// How the navbar is presented for the current window width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum NavbarPlacement {
    /// Not rendered.
    Hidden,
    /// Covers the full content area; main content is not offset.
    Overlay,
    /// Docked to the left with a fixed width.
    Docked { width: f32 },
}

impl NavbarPlacement {
    /// Horizontal space the main area must leave to the navbar.
    pub(crate) fn main_offset(self) -> f32 {
        match self {
            NavbarPlacement::Docked { width } => width,
            NavbarPlacement::Hidden | NavbarPlacement::Overlay => 0.0,
        }
    }
}

/// Resolve navbar placement from the window width and chrome state.
pub(crate) fn navbar_placement(
    window_width: f32,
    panel_open: bool,
    width: NavbarWidth,
    breakpoints: Breakpoints,
) -> NavbarPlacement {
    if window_width < breakpoints.sm {
        if panel_open {
            NavbarPlacement::Overlay
        } else {
            NavbarPlacement::Hidden
        }
    } else if window_width < breakpoints.lg {
        NavbarPlacement::Docked { width: width.sm }
    } else {
        NavbarPlacement::Docked { width: width.lg }
    }
}
