use super::model::QueryTicket;
use crate::host::{HostCall, HostResult};

/// Intent events emitted by chrome views.
#[derive(Debug, Clone)]
pub(crate) enum ChromeIntent {
    TogglePanel,
    MinimizeWindow,
    ToggleMaximize,
    CloseWindow,
    StartWindowDrag,
}

/// Notifications coming back from the host window.
#[derive(Debug, Clone)]
pub(crate) enum ChromeHostEvent {
    /// The window was resized; its maximized state may have changed.
    Resized,
    ToggleMaximizeSettled(HostResult<()>),
    MaximizedObserved {
        ticket: QueryTicket,
        result: HostResult<bool>,
    },
    RequestSettled {
        call: HostCall,
        result: HostResult<()>,
    },
}

/// Effect events produced by the chrome reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ChromeEffect {
    Minimize,
    ToggleMaximize,
    Close,
    StartDrag,
    QueryMaximized { ticket: QueryTicket },
}

/// Chrome event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEvent {
    /// User intent raised by the action bar.
    Intent(ChromeIntent),
    /// Host feedback for an earlier request or a window notification.
    Host(ChromeHostEvent),
}
