use iced::Task;
use iced::window::{self, Direction};

use super::{HostCall, HostError, HostResult, WindowHost};

/// Window host backed by the iced runtime, targeting the latest window.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct IcedWindowHost;

impl IcedWindowHost {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl WindowHost for IcedWindowHost {
    fn minimize(&self) -> Task<HostResult<()>> {
        settle(HostCall::Minimize, |id| window::minimize(id, true))
    }

    fn toggle_maximize(&self) -> Task<HostResult<()>> {
        settle(HostCall::ToggleMaximize, window::toggle_maximize)
    }

    fn close(&self) -> Task<HostResult<()>> {
        settle(HostCall::Close, window::close)
    }

    fn is_maximized(&self) -> Task<HostResult<bool>> {
        window::latest().then(|id| match id {
            Some(id) => window::is_maximized(id).map(Ok),
            None => Task::done(Err(HostError::WindowUnavailable {
                call: HostCall::IsMaximized,
            })),
        })
    }

    fn drag(&self) -> Task<HostResult<()>> {
        settle(HostCall::Drag, window::drag)
    }

    fn drag_resize(&self, direction: Direction) -> Task<HostResult<()>> {
        window::latest().then(move |id| match id {
            Some(id) => window::drag_resize(id, direction)
                .chain(Task::done(Ok(()))),
            None => Task::done(Err(HostError::WindowUnavailable {
                call: HostCall::DragResize,
            })),
        })
    }
}

/// Run an action-only window call and report when the host has processed it.
///
/// Window actions produce no output of their own, so completion is signalled
/// by chaining a marker after the action.
fn settle(
    call: HostCall,
    action: fn(window::Id) -> Task<HostResult<()>>,
) -> Task<HostResult<()>> {
    window::latest().then(move |id| match id {
        Some(id) => action(id).chain(Task::done(Ok(()))),
        None => Task::done(Err(HostError::WindowUnavailable { call })),
    })
}
