//! Board colours: palette variants and `#RRGGBB` parsing for the CLI overrides.

use crate::{Args, Palette};
use ratatui::style::Color;
use thiserror::Error;

/// Colours for the four drawable roles plus UI text.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Board background.
    pub bg: Color,
    /// Board border.
    pub border: Color,
    /// Apple cell.
    pub apple: Color,
    /// Snake cells.
    pub snake: Color,
    /// Text (length readout).
    pub main_fg: Color,
    /// Block title.
    pub title: Color,
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// The arcade original: black board, cyan border, red apple, green snake.
    pub fn classic() -> Self {
        Self {
            bg: Color::Rgb(0, 0, 0),
            border: Color::Rgb(93, 216, 228),
            apple: Color::Rgb(255, 0, 0),
            snake: Color::Rgb(0, 255, 0),
            main_fg: Color::Rgb(171, 178, 191),
            title: Color::Rgb(93, 216, 228),
        }
    }

    /// Build the theme from CLI flags: palette variant first, then any
    /// per-colour hex overrides on top.
    pub fn from_args(args: &Args) -> Result<Self, ThemeError> {
        let mut theme = Self::classic();
        theme.apply_palette(args.palette);
        if let Some(hex) = args.background_color.as_deref() {
            theme.bg = parse_hex(hex)?;
        }
        if let Some(hex) = args.border_color.as_deref() {
            theme.border = parse_hex(hex)?;
        }
        if let Some(hex) = args.apple_color.as_deref() {
            theme.apple = parse_hex(hex)?;
        }
        if let Some(hex) = args.snake_color.as_deref() {
            theme.snake = parse_hex(hex)?;
        }
        Ok(theme)
    }

    /// Override colours for high-contrast or colorblind rendering.
    pub fn apply_palette(&mut self, palette: Palette) {
        match palette {
            Palette::Normal => {}
            Palette::HighContrast => {
                self.border = Color::Rgb(255, 255, 255);
                self.apple = Color::Rgb(255, 0, 0);
                self.snake = Color::Rgb(0, 255, 0);
                self.main_fg = Color::Rgb(255, 255, 255);
                self.title = Color::Rgb(255, 255, 255);
            }
            Palette::Colorblind => {
                // Avoid red/green as the only distinction; orange apple, blue snake
                self.apple = Color::Rgb(238, 119, 51);
                self.snake = Color::Rgb(0, 119, 187);
                self.border = Color::Rgb(187, 187, 187);
                self.title = Color::Rgb(187, 187, 187);
            }
        }
    }
}

/// Parse hex colour "#RRGGBB" or "#RGB" into ratatui Color.
pub fn parse_hex(s: &str) -> Result<Color, ThemeError> {
    let s = s.trim().trim_start_matches('#');
    let (r, g, b) = if s.len() == 6 {
        let r =
            u8::from_str_radix(&s[0..2], 16).map_err(|_| ThemeError::InvalidHex(s.to_string()))?;
        let g =
            u8::from_str_radix(&s[2..4], 16).map_err(|_| ThemeError::InvalidHex(s.to_string()))?;
        let b =
            u8::from_str_radix(&s[4..6], 16).map_err(|_| ThemeError::InvalidHex(s.to_string()))?;
        (r, g, b)
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1], 16)
            .map_err(|_| ThemeError::InvalidHex(s.to_string()))?
            * 17;
        let g = u8::from_str_radix(&s[1..2], 16)
            .map_err(|_| ThemeError::InvalidHex(s.to_string()))?
            * 17;
        let b = u8::from_str_radix(&s[2..3], 16)
            .map_err(|_| ThemeError::InvalidHex(s.to_string()))?
            * 17;
        (r, g, b)
    } else {
        return Err(ThemeError::InvalidHex(s.to_string()));
    };
    Ok(Color::Rgb(r, g, b))
}
