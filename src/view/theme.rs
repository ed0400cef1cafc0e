//! Light and dark color palettes

use ratatui::style::Color;

use crate::model::Theme;

pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub favorite: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    fn light() -> Self {
        Self {
            background: Color::Rgb(246, 247, 251),
            text: Color::Rgb(17, 24, 39),
            muted: Color::Rgb(100, 116, 139),
            dim: Color::Rgb(148, 163, 184),
            accent: Color::Rgb(37, 99, 235),
            border: Color::Rgb(203, 213, 225),
            favorite: Color::Rgb(225, 29, 72),
        }
    }

    fn dark() -> Self {
        Self {
            background: Color::Rgb(11, 18, 32),
            text: Color::Rgb(230, 238, 248),
            muted: Color::Rgb(154, 164, 178),
            dim: Color::Rgb(88, 98, 115),
            accent: Color::Rgb(96, 165, 250),
            border: Color::Rgb(51, 65, 85),
            favorite: Color::Rgb(251, 113, 133),
        }
    }
}
