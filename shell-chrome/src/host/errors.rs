use std::fmt;

use thiserror::Error;

/// Host-window calls that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HostCall {
    Minimize,
    ToggleMaximize,
    Close,
    IsMaximized,
    Drag,
    DragResize,
}

impl fmt::Display for HostCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostCall::Minimize => "minimize",
            HostCall::ToggleMaximize => "toggle-maximize",
            HostCall::Close => "close",
            HostCall::IsMaximized => "is-maximized",
            HostCall::Drag => "drag",
            HostCall::DragResize => "drag-resize",
        };
        f.write_str(name)
    }
}

/// Errors raised by asynchronous host-window calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum HostError {
    #[error("no host window available for `{call}`")]
    WindowUnavailable { call: HostCall },
}

pub(crate) type HostResult<T> = Result<T, HostError>;

#[cfg(test)]
mod tests {
    use super::{HostCall, HostError};

    #[test]
    fn given_unavailable_window_when_formatted_then_message_names_the_call() {
        let err = HostError::WindowUnavailable {
            call: HostCall::ToggleMaximize,
        };

        assert_eq!(
            err.to_string(),
            "no host window available for `toggle-maximize`"
        );
    }
}
