//! Snaketui — classic wraparound snake game in the terminal.

mod app;
mod game;
mod input;
mod theme;
mod ui;

use anyhow::Result;
use app::App;
use clap::{Parser, ValueEnum};

/// Options derived from CLI that affect game behaviour (board size, tick rate).
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub tick_rate: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let theme = theme::Theme::from_args(&args)?;
    let config = GameConfig {
        grid_width: args.width,
        grid_height: args.height,
        tick_rate: args.tick_rate,
    };
    let mut app = App::new(config, theme);
    app.run()?;
    Ok(())
}

/// Classic wraparound snake in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "snaketui",
    version,
    about = "Classic snake in the terminal. Eat apples to grow; the board wraps at the edges; running into yourself starts you over.",
    long_about = "Snaketui is a terminal rendition of the classic arcade snake.\n\n\
        The snake advances one cell per tick. Apples grow it by one; board edges wrap \
        to the opposite side; colliding with your own body resets you to the center at \
        length one, heading in a random direction.\n\n\
        CONTROLS:\n  Arrow keys  Steer (reversing straight into your body is ignored)\n  Q / Esc / Ctrl-C  Quit\n\n\
        Use --palette or the per-colour flags to change how the board is drawn."
)]
pub struct Args {
    /// Board width in cells.
    #[arg(long, default_value = "32", value_name = "COLS", value_parser = clap::value_parser!(u16).range(4..=512))]
    pub width: u16,

    /// Board height in cells.
    #[arg(long, default_value = "24", value_name = "ROWS", value_parser = clap::value_parser!(u16).range(4..=512))]
    pub height: u16,

    /// Game ticks per second (snake speed).
    #[arg(long, default_value = "8.0", value_name = "RATE")]
    pub tick_rate: f64,

    /// Colour palette: normal, high-contrast, or colorblind.
    #[arg(long, default_value = "normal")]
    pub palette: Palette,

    /// Board background colour ("#RRGGBB" or "#RGB").
    #[arg(long, value_name = "HEX")]
    pub background_color: Option<String>,

    /// Board border colour.
    #[arg(long, value_name = "HEX")]
    pub border_color: Option<String>,

    /// Apple colour.
    #[arg(long, value_name = "HEX")]
    pub apple_color: Option<String>,

    /// Snake colour.
    #[arg(long, value_name = "HEX")]
    pub snake_color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Palette {
    #[default]
    Normal,

    #[value(alias = "highcontrast", alias = "contrast")]
    HighContrast,

    #[value(alias = "colourblind")]
    Colorblind,
}
