use iced::{Size, Task, window};

use super::chrome::{request_settled, resize_notified};
use crate::app::{App, AppEvent};
use crate::host::{HostCall, WindowHost};

/// Store the new window size and let the chrome resync its maximized flag.
///
/// Also used for the window-opened event, which carries the initial size.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    Task::done(apply_window_size(app, size))
}

fn apply_window_size(app: &mut App, size: Size) -> AppEvent {
    app.window_size = size;
    resize_notified()
}

/// Handle window drag-resize from resize grips.
pub(crate) fn handle_drag_resize(
    host: &dyn WindowHost,
    dir: window::Direction,
) -> Task<AppEvent> {
    host.drag_resize(dir)
        .map(|result| request_settled(HostCall::DragResize, result))
}
