mod command;
pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::command::ChromeCommand;
pub(crate) use self::event::{
    ChromeEffect, ChromeEvent, ChromeHostEvent, ChromeIntent,
};
pub(crate) use self::model::{ChromeViewModel, NavbarWidth, PanelSizing};
use self::state::ChromeState;

/// Chrome widget: custom titlebar controls, navbar toggle and the cached
/// maximized state of the host window.
pub(crate) struct ChromeWidget {
    state: ChromeState,
}

impl ChromeWidget {
    /// Create the chrome widget with the panel open and the window restored.
    pub(crate) fn new(sizing: PanelSizing) -> Self {
        Self {
            state: ChromeState::new(sizing),
        }
    }

    /// Reduce a chrome command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: ChromeCommand,
    ) -> Task<ChromeEffect> {
        match reducer::reduce(&mut self.state, command) {
            Some(effect) => Task::done(effect),
            None => Task::none(),
        }
    }

    /// Produce the chrome view model for rendering.
    pub(crate) fn vm(&self) -> ChromeViewModel {
        ChromeViewModel {
            panel_open: self.state.panel_open(),
            panel_width: self.state.panel_width(),
            maximized: self.state.maximized(),
        }
    }
}
