use super::model::QueryTicket;
use crate::host::{HostCall, HostResult};

/// Commands processed by the chrome widget reducer.
#[derive(Debug, Clone)]
pub(crate) enum ChromeCommand {
    TogglePanel,
    RequestMinimize,
    RequestToggleMaximize,
    RequestClose,
    StartWindowDrag,
    ResizeNotified,
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
