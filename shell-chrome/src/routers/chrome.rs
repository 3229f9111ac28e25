use iced::Task;

use crate::app::{App, AppEvent};
use crate::host::{HostCall, HostResult, WindowHost};
use crate::widgets::chrome::model::QueryTicket;
use crate::widgets::chrome::{
    ChromeCommand, ChromeEffect, ChromeEvent, ChromeHostEvent, ChromeIntent,
};

/// Route a chrome event through the widget reducer and map effects.
pub(crate) fn route_event(app: &mut App, event: ChromeEvent) -> Task<AppEvent> {
    let command = map_chrome_event_to_command(event);
    app.widgets
        .chrome
        .reduce(command)
        .map(AppEvent::ChromeEffect)
}

/// Route a chrome effect event to an app-level task.
pub(crate) fn route_effect(app: &App, effect: ChromeEffect) -> Task<AppEvent> {
    effect_task(app.host.as_ref(), effect)
}

/// Issue the host call for an effect and feed its outcome back to the chrome.
fn effect_task(host: &dyn WindowHost, effect: ChromeEffect) -> Task<AppEvent> {
    match effect {
        ChromeEffect::Minimize => settled(HostCall::Minimize, host.minimize()),
        ChromeEffect::ToggleMaximize => {
            host.toggle_maximize().map(toggle_settled)
        },
        ChromeEffect::Close => settled(HostCall::Close, host.close()),
        ChromeEffect::StartDrag => settled(HostCall::Drag, host.drag()),
        ChromeEffect::QueryMaximized { ticket } => host
            .is_maximized()
            .map(move |result| maximized_observed(ticket, result)),
    }
}

fn settled(call: HostCall, task: Task<HostResult<()>>) -> Task<AppEvent> {
    task.map(move |result| request_settled(call, result))
}

/// Outcome of a toggle-maximize call, fed back to the chrome.
pub(crate) fn toggle_settled(result: HostResult<()>) -> AppEvent {
    host_event(ChromeHostEvent::ToggleMaximizeSettled(result))
}

/// Answer to the maximized query identified by `ticket`.
pub(crate) fn maximized_observed(
    ticket: QueryTicket,
    result: HostResult<bool>,
) -> AppEvent {
    host_event(ChromeHostEvent::MaximizedObserved { ticket, result })
}

/// Outcome of a host call whose result is only logged.
pub(crate) fn request_settled(
    call: HostCall,
    result: HostResult<()>,
) -> AppEvent {
    host_event(ChromeHostEvent::RequestSettled { call, result })
}

/// Tell the chrome the window was resized so it resyncs its maximized flag.
pub(crate) fn resize_notified() -> AppEvent {
    host_event(ChromeHostEvent::Resized)
}

fn host_event(event: ChromeHostEvent) -> AppEvent {
    AppEvent::Chrome(ChromeEvent::Host(event))
}

fn map_chrome_event_to_command(event: ChromeEvent) -> ChromeCommand {
    match event {
        ChromeEvent::Intent(intent) => match intent {
            ChromeIntent::TogglePanel => ChromeCommand::TogglePanel,
            ChromeIntent::MinimizeWindow => ChromeCommand::RequestMinimize,
            ChromeIntent::ToggleMaximize => {
                ChromeCommand::RequestToggleMaximize
            },
            ChromeIntent::CloseWindow => ChromeCommand::RequestClose,
            ChromeIntent::StartWindowDrag => ChromeCommand::StartWindowDrag,
        },
        ChromeEvent::Host(event) => match event {
            ChromeHostEvent::Resized => ChromeCommand::ResizeNotified,
            ChromeHostEvent::ToggleMaximizeSettled(result) => {
                ChromeCommand::ToggleMaximizeSettled(result)
            },
            ChromeHostEvent::MaximizedObserved { ticket, result } => {
                ChromeCommand::MaximizedObserved { ticket, result }
            },
            ChromeHostEvent::RequestSettled { call, result } => {
                ChromeCommand::RequestSettled { call, result }
            },
        },
    }
}
