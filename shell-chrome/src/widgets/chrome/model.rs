/// Navbar width per breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NavbarWidth {
    pub(crate) sm: f32,
    pub(crate) lg: f32,
}

/// Configured navbar widths the panel toggle switches between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PanelSizing {
    pub(crate) narrow: f32,
    pub(crate) wide: f32,
    pub(crate) large: f32,
}

impl Default for PanelSizing {
    fn default() -> Self {
        Self {
            narrow: 100.0,
            wide: 200.0,
            large: 300.0,
        }
    }
}

impl PanelSizing {
    /// Navbar width when the panel is open or closed.
    pub(crate) fn width_for(&self, open: bool, lg: f32) -> NavbarWidth {
        let sm = if open { self.wide } else { self.narrow };
        NavbarWidth { sm, lg }
    }
}

/// Sequence number attached to each maximized-state query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct QueryTicket(pub(crate) u64);

/// Affordance shown by the maximize/restore control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MaximizeControl {
    Maximize,
    Restore,
}

/// View model for the chrome widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChromeViewModel {
    pub(crate) panel_open: bool,
    pub(crate) panel_width: NavbarWidth,
    pub(crate) maximized: bool,
}

impl ChromeViewModel {
    /// Pick the maximize/restore affordance from the cached maximized flag.
    pub(crate) fn control(&self) -> MaximizeControl {
        if self.maximized {
            MaximizeControl::Restore
        } else {
            MaximizeControl::Maximize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ChromeViewModel, MaximizeControl, NavbarWidth};

    fn vm(maximized: bool) -> ChromeViewModel {
        ChromeViewModel {
            panel_open: true,
            panel_width: NavbarWidth { sm: 200.0, lg: 300.0 },
            maximized,
        }
    }

    #[test]
    fn given_maximized_cache_when_rendering_then_restore_control_is_used() {
        assert_eq!(vm(true).control(), MaximizeControl::Restore);
    }

    #[test]
    fn given_restored_cache_when_rendering_then_maximize_control_is_used() {
        assert_eq!(vm(false).control(), MaximizeControl::Maximize);
    }

    #[test]
    fn given_panel_state_when_rendering_then_control_ignores_it() {
        let mut closed = vm(true);
        closed.panel_open = false;
        closed.panel_width = NavbarWidth { sm: 100.0, lg: 300.0 };

        assert_eq!(closed.control(), MaximizeControl::Restore);
    }
}
