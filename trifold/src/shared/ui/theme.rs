use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Which built-in color scheme the app renders with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// Resolved application colors consumed by the view layer.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    pub(crate) background: Color,
    pub(crate) surface: Color,
    pub(crate) panel: Color,
    pub(crate) foreground: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) accent: Color,
    green: Color,
    yellow: Color,
    red: Color,
}

impl AppTheme {
    /// Build the theme matching a configured choice.
    pub(crate) fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            id: String::from("trifold-dark"),
            background: Color::from_rgb8(0x16, 0x18, 0x1d),
            surface: Color::from_rgb8(0x1e, 0x21, 0x28),
            panel: Color::from_rgb8(0x24, 0x28, 0x31),
            foreground: Color::from_rgb8(0xd8, 0xdb, 0xe2),
            dim_foreground: Color::from_rgb8(0x8a, 0x90, 0x9c),
            accent: Color::from_rgb8(0x61, 0xaf, 0xef),
            green: Color::from_rgb8(0x98, 0xc3, 0x79),
            yellow: Color::from_rgb8(0xe5, 0xc0, 0x7b),
            red: Color::from_rgb8(0xe0, 0x6c, 0x75),
        }
    }

    fn light() -> Self {
        Self {
            id: String::from("trifold-light"),
            background: Color::from_rgb8(0xfa, 0xfa, 0xfa),
            surface: Color::from_rgb8(0xee, 0xef, 0xf1),
            panel: Color::from_rgb8(0xe4, 0xe6, 0xe9),
            foreground: Color::from_rgb8(0x2a, 0x2c, 0x33),
            dim_foreground: Color::from_rgb8(0x6b, 0x70, 0x7a),
            accent: Color::from_rgb8(0x40, 0x78, 0xf2),
            green: Color::from_rgb8(0x50, 0xa1, 0x4f),
            yellow: Color::from_rgb8(0xc1, 0x84, 0x01),
            red: Color::from_rgb8(0xe4, 0x56, 0x49),
        }
    }

    /// Build the iced theme backing widget defaults.
    pub(crate) fn iced_theme(&self) -> Theme {
        let palette = Palette {
            background: self.background,
            text: self.foreground,
            primary: self.accent,
            success: self.green,
            warning: self.yellow,
            danger: self.red,
        };

        Theme::custom(self.id.clone(), palette)
    }
}

/// Theme handle passed down through view props.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    /// Wrap a theme reference for view composition.
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppTheme, ThemeChoice};

    #[test]
    fn given_dark_choice_when_resolved_then_dark_palette_is_used() {
        let theme = AppTheme::from_choice(ThemeChoice::Dark);

        assert_eq!(theme.id, "trifold-dark");
    }

    #[test]
    fn given_light_choice_when_resolved_then_light_palette_is_used() {
        let theme = AppTheme::from_choice(ThemeChoice::Light);

        assert_eq!(theme.id, "trifold-light");
    }
}
