use iced::widget::{Space, Stack, column, container, text};
use iced::{Element, Length, Padding, Theme};

use super::{App, AppEvent};
use crate::components::primitive::resize_grips;
use crate::layout::{self, NavbarPlacement};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::chrome::view::action_bar;
use crate::widgets::chrome::view::navbar;

const HEADER_SEPARATOR_HEIGHT: f32 = 1.0;
const MAIN_PADDING: f32 = 16.0;
const MAIN_LABEL: &str = "Resize app to see responsive navbar in action";

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(&app.theme);
    let vm = app.widgets.chrome.vm();

    let placement = layout::navbar_placement(
        app.window_size.width,
        vm.panel_open,
        vm.panel_width,
        app.settings.breakpoints(),
    );

    let header = view_header(app, theme_props);
    let body = view_body(app, placement, theme_props);

    let resize_grips_layer = resize_grips::view().map(|event| match event {
        resize_grips::ResizeGripEvent::Resize(dir) => {
            AppEvent::ResizeWindow(dir)
        },
    });

    let root_layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> = vec![
        column![header, body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        resize_grips_layer,
    ];

    Stack::with_children(root_layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the header: action bar + separator.
fn view_header<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = *theme_props.theme.iced_palette();

    let action_bar = action_bar::view(action_bar::ActionBarProps {
        title: app.settings.title(),
        vm: app.widgets.chrome.vm(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::Chrome);

    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_SEPARATOR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.border.into()),
            ..Default::default()
        });

    column![action_bar, separator]
        .width(Length::Fill)
        .height(Length::Shrink)
        .into()
}

/// Render the main area with the navbar layered on its left edge.
fn view_body<'a>(
    app: &'a App,
    placement: NavbarPlacement,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = *theme_props.theme.iced_palette();

    let label = text(MAIN_LABEL)
        .size(app.fonts.ui.size)
        .font(app.fonts.ui.font_type);

    let main = container(label)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            left: placement.main_offset() + MAIN_PADDING,
            ..Padding::new(MAIN_PADDING)
        })
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.main_background.into()),
            text_color: Some(palette.foreground),
            ..Default::default()
        });

    let mut layers: Vec<Element<'a, AppEvent, Theme, iced::Renderer>> =
        vec![main.into()];

    if let Some(navbar) = navbar::view(navbar::NavbarProps {
        placement,
        theme: theme_props,
        fonts: &app.fonts,
    }) {
        layers.push(navbar.map(AppEvent::Chrome));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
