use iced::widget::{container, text};
use iced::{Element, Length};

use super::super::event::ChromeEvent;
use crate::layout::NavbarPlacement;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

const NAVBAR_PADDING: f32 = 16.0;
const NAVBAR_BORDER_WIDTH: f32 = 1.0;
const NAVBAR_LABEL: &str = "Application navbar";

/// Props for rendering the side navigation panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavbarProps<'a> {
    pub(crate) placement: NavbarPlacement,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the navbar, or `None` when the current placement hides it.
pub(crate) fn view<'a>(
    props: NavbarProps<'a>,
) -> Option<Element<'a, ChromeEvent>> {
    let width = match props.placement {
        NavbarPlacement::Hidden => return None,
        NavbarPlacement::Overlay => Length::Fill,
        NavbarPlacement::Docked { width } => Length::Fixed(width),
    };

    let palette = *props.theme.theme.iced_palette();
    let label = text(NAVBAR_LABEL)
        .size(props.fonts.ui.size)
        .font(props.fonts.ui.font_type);

    Some(
        container(label)
            .width(width)
            .height(Length::Fill)
            .padding(NAVBAR_PADDING)
            .style(move |_| iced::widget::container::Style {
                background: Some(palette.surface.into()),
                text_color: Some(palette.foreground),
                border: iced::Border {
                    width: NAVBAR_BORDER_WIDTH,
                    color: palette.border,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into(),
    )
}
