use iced::{Task, window};

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Chrome widget
        AppEvent::Chrome(event) => routers::chrome::route_event(app, event),
        AppEvent::ChromeEffect(effect) => {
            routers::chrome::route_effect(app, effect)
        },
        // Direct operations
        AppEvent::Window(
            window::Event::Opened { size, .. } | window::Event::Resized(size),
        ) => routers::window::handle_resize(app, size),
        AppEvent::Window(_) => Task::none(),
        AppEvent::ResizeWindow(dir) => {
            routers::window::handle_drag_resize(app.host.as_ref(), dir)
        },
    }
}
