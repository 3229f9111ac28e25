use super::model::{NavbarWidth, PanelSizing, QueryTicket};

/// Chrome state: navbar visibility and the cached host maximized flag.
#[derive(Debug)]
pub(super) struct ChromeState {
    sizing: PanelSizing,
    panel_open: bool,
    panel_width: NavbarWidth,
    maximized: bool,
    last_issued: u64,
    last_applied: Option<QueryTicket>,
}

impl ChromeState {
    pub(super) fn new(sizing: PanelSizing) -> Self {
        Self {
            sizing,
            panel_open: true,
            panel_width: sizing.width_for(true, sizing.large),
            maximized: false,
            last_issued: 0,
            last_applied: None,
        }
    }

    pub(super) fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub(super) fn panel_width(&self) -> NavbarWidth {
        self.panel_width
    }

    pub(super) fn maximized(&self) -> bool {
        self.maximized
    }

    /// Flip the panel and recompute the small-breakpoint width.
    ///
    /// The large-breakpoint width is carried forward unchanged.
    pub(super) fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        self.panel_width = self
            .sizing
            .width_for(self.panel_open, self.panel_width.lg);
        self.panel_open
    }

    /// Allocate the ticket for a query that is about to be issued.
    pub(super) fn issue_query(&mut self) -> QueryTicket {
        self.last_issued += 1;
        QueryTicket(self.last_issued)
    }

    /// Store an observed maximized flag unless a newer query already landed.
    ///
    /// Returns `false` when the observation is stale and was dropped.
    pub(super) fn observe_maximized(
        &mut self,
        ticket: QueryTicket,
        maximized: bool,
    ) -> bool {
        if self.last_applied.is_some_and(|applied| ticket <= applied) {
            return false;
        }

        self.last_applied = Some(ticket);
        self.maximized = maximized;
        true
    }
}
