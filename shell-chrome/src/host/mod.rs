//! Host-window capability consumed by the chrome controller.
//!
//! Every call *issues* a request and returns a task that resolves once the
//! host has processed it. Callers decide whether the outcome matters.

mod errors;
mod iced_host;

use iced::Task;
use iced::window::Direction;

pub(crate) use errors::{HostCall, HostError, HostResult};
pub(crate) use iced_host::IcedWindowHost;

/// Asynchronous operations on the window hosting the shell.
pub(crate) trait WindowHost {
    /// Minimize the window.
    fn minimize(&self) -> Task<HostResult<()>>;

    /// Toggle between maximized and restored.
    fn toggle_maximize(&self) -> Task<HostResult<()>>;

    /// Close the window.
    fn close(&self) -> Task<HostResult<()>>;

    /// Query whether the window is currently maximized.
    fn is_maximized(&self) -> Task<HostResult<bool>>;

    /// Start an OS-driven window move from the drag region.
    fn drag(&self) -> Task<HostResult<()>>;

    /// Start an OS-driven window resize in the given direction.
    fn drag_resize(&self, direction: Direction) -> Task<HostResult<()>>;
}
