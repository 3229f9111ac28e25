use iced::widget::{MouseArea, Space, Stack, container, row, text};
use iced::{Element, Length, alignment};

use super::super::event::{ChromeEvent, ChromeIntent};
use super::super::model::{ChromeViewModel, MaximizeControl};
use crate::components::primitive::icon_button::{
    IconButtonEvent, IconButtonProps, IconButtonVariant,
    view as icon_button_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{
    NAVBAR_MENU, WINDOW_CLOSE, WINDOW_MAXIMIZE, WINDOW_MINIMIZE,
    WINDOW_RESTORE,
};
use crate::shared::ui::theme::{StyleOverrides, ThemeProps};

pub(crate) const ACTION_BAR_HEIGHT: f32 = 60.0;
const ACTION_BAR_CONTROL_BUTTON_SIZE: f32 = 32.0;
const ACTION_BAR_CONTROL_ICON_SIZE: f32 = 24.0;
const ACTION_BAR_HORIZONTAL_PADDING: f32 = 16.0;
const ACTION_BAR_CONTROLS_SPACING: f32 = 10.0;

/// Props for rendering the action bar.
#[derive(Debug, Clone)]
pub(crate) struct ActionBarProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) vm: ChromeViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the header: navbar toggle, drag region and window controls.
pub(crate) fn view<'a>(props: ActionBarProps<'a>) -> Element<'a, ChromeEvent> {
    let palette = *props.theme.theme.iced_palette();
    let overrides = props.theme.overrides;

    let menu_button =
        icon_button(NAVBAR_MENU, IconButtonVariant::Standard, props.theme)
            .map(|_| intent(ChromeIntent::TogglePanel));

    let left_controls = container(menu_button)
        .width(Length::Shrink)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, ACTION_BAR_HORIZONTAL_PADDING]);

    let title = text(props.title)
        .size(props.fonts.ui.size)
        .font(props.fonts.ui.font_type);

    let center_zone = container(title)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            text_color: Some(resolve_text_color(palette.foreground, overrides)),
            ..Default::default()
        });

    let maximize_icon = match props.vm.control() {
        MaximizeControl::Maximize => WINDOW_MAXIMIZE,
        MaximizeControl::Restore => WINDOW_RESTORE,
    };

    let controls_row = row![
        icon_button(WINDOW_MINIMIZE, IconButtonVariant::Standard, props.theme)
            .map(|_| intent(ChromeIntent::MinimizeWindow)),
        icon_button(maximize_icon, IconButtonVariant::Standard, props.theme)
            .map(|_| intent(ChromeIntent::ToggleMaximize)),
        icon_button(WINDOW_CLOSE, IconButtonVariant::Danger, props.theme)
            .map(|_| intent(ChromeIntent::CloseWindow)),
    ]
    .spacing(ACTION_BAR_CONTROLS_SPACING)
    .align_y(alignment::Vertical::Center);

    let controls_container = container(controls_row)
        .width(Length::Shrink)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, ACTION_BAR_HORIZONTAL_PADDING]);

    // The whole header is the drag region; buttons sit above it.
    let drag_surface = MouseArea::new(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(intent(ChromeIntent::StartWindowDrag))
    .on_double_click(intent(ChromeIntent::ToggleMaximize));

    let base_row = row![
        left_controls,
        Space::new().width(Length::Fill),
        controls_container
    ]
    .align_y(alignment::Vertical::Center)
    .width(Length::Fill)
    .height(Length::Fill);

    let content = Stack::new()
        .push(drag_surface)
        .push(center_zone)
        .push(base_row);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ACTION_BAR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(
                resolve_background(palette.surface, overrides).into(),
            ),
            ..Default::default()
        })
        .into()
}

fn intent(intent: ChromeIntent) -> ChromeEvent {
    ChromeEvent::Intent(intent)
}

fn icon_button<'a>(
    icon: &'static [u8],
    variant: IconButtonVariant,
    theme: ThemeProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let props = IconButtonProps {
        icon,
        theme,
        size: ACTION_BAR_CONTROL_BUTTON_SIZE,
        icon_size: ACTION_BAR_CONTROL_ICON_SIZE,
        variant,
    };
    icon_button_view(props)
}

fn resolve_background(
    default_color: iced::Color,
    overrides: Option<StyleOverrides>,
) -> iced::Color {
    overrides
        .and_then(|o| o.background)
        .unwrap_or(default_color)
}

fn resolve_text_color(
    default_color: iced::Color,
    overrides: Option<StyleOverrides>,
) -> iced::Color {
    overrides
        .and_then(|o| o.foreground)
        .unwrap_or(default_color)
}
