#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::window::Direction;
use iced::{Element, Size, Subscription, Task, Theme, window};

use crate::host::{IcedWindowHost, WindowHost};
use crate::settings::{self, ShellSettings};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::AppTheme;
use crate::widgets::chrome::{
    ChromeEffect, ChromeEvent, ChromeHostEvent, ChromeWidget,
};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 480.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 320.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Chrome widget
    Chrome(ChromeEvent),
    ChromeEffect(ChromeEffect),
    // Direct operations
    Window(window::Event),
    ResizeWindow(Direction),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) chrome: ChromeWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) window_size: Size,
    pub(crate) settings: ShellSettings,
    pub(crate) theme: AppTheme,
    pub(crate) fonts: FontsConfig,
    pub(crate) host: Box<dyn WindowHost>,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = settings::load_initial_settings();
        let theme = AppTheme::new(settings.color_scheme());
        log::info!("using {:?} color scheme", theme.scheme());

        let app = App {
            window_size: Size {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            },
            theme,
            fonts: FontsConfig::default(),
            host: Box::new(IcedWindowHost::new()),
            widgets: Widgets {
                chrome: ChromeWidget::new(settings.panel()),
            },
            settings,
        };

        // Resync the cached maximized flag in case the window opens maximized.
        let startup = Task::done(AppEvent::Chrome(ChromeEvent::Host(
            ChromeHostEvent::Resized,
        )));

        (app, startup)
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        self.settings.title().to_string()
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        Theme::from(&self.theme)
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
