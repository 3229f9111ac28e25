use iced::theme::Palette;
use iced::{Color, Theme};

/// Light or dark rendering of the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    /// Parse a scheme name as written in the settings file.
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    fn id(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Hex color palette for one color scheme.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) main_background: String,
    pub(crate) surface: String,
    pub(crate) border: String,
    pub(crate) icon: String,
    pub(crate) accent: String,
    pub(crate) danger: String,
}

impl ColorPalette {
    /// Return the palette used for the given scheme.
    pub(crate) fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self {
                foreground: String::from("#C1C2C5"),
                background: String::from("#1A1B1E"),
                main_background: String::from("#141517"),
                surface: String::from("#1A1B1E"),
                border: String::from("#2C2E33"),
                icon: String::from("#ADB5BD"),
                accent: String::from("#339AF0"),
                danger: String::from("#FA5252"),
            },
            ColorScheme::Light => Self {
                foreground: String::from("#000000"),
                background: String::from("#FFFFFF"),
                main_background: String::from("#F8F9FA"),
                surface: String::from("#FFFFFF"),
                border: String::from("#E9ECEF"),
                icon: String::from("#ADB5BD"),
                accent: String::from("#228BE6"),
                danger: String::from("#FA5252"),
            },
        }
    }
}

/// Parsed palette ready for iced styling.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) main_background: Color,
    pub(crate) surface: Color,
    pub(crate) border: Color,
    pub(crate) icon: Color,
    pub(crate) accent: Color,
    pub(crate) danger: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: hex_or_black(&p.foreground),
            background: hex_or_black(&p.background),
            main_background: hex_or_black(&p.main_background),
            surface: hex_or_black(&p.surface),
            border: hex_or_black(&p.border),
            icon: hex_or_black(&p.icon),
            accent: hex_or_black(&p.accent),
            danger: hex_or_black(&p.danger),
        }
    }
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StyleOverrides {
    pub(crate) background: Option<Color>,
    pub(crate) foreground: Option<Color>,
}

/// Application theme for one color scheme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    scheme: ColorScheme,
    iced_palette: IcedColorPalette,
}

impl AppTheme {
    /// Build the theme for a color scheme.
    pub(crate) fn new(scheme: ColorScheme) -> Self {
        let raw_palette = ColorPalette::for_scheme(scheme);
        Self {
            scheme,
            iced_palette: IcedColorPalette::from(&raw_palette),
        }
    }

    pub(crate) fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.accent,
            danger: palette.danger,
            warning: palette.danger,
        };

        Theme::custom(value.scheme.id().to_string(), palette)
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into a color.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    let channel = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16);

    match hex.len() {
        6 => Some(Color::from_rgb8(
            channel(0).ok()?,
            channel(2).ok()?,
            channel(4).ok()?,
        )),
        8 => Some(Color::from_rgba8(
            channel(0).ok()?,
            channel(2).ok()?,
            channel(4).ok()?,
            f32::from(channel(6).ok()?) / 255.0,
        )),
        _ => None,
    }
}

fn hex_or_black(value: &str) -> Color {
    parse_hex_color(value).unwrap_or_else(|| {
        log::warn!("invalid palette color {value:?}, using black");
        Color::BLACK
    })
}
