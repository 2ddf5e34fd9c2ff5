//! App: terminal init, main loop, tick and key handling.

use crate::game::GameState;
use crate::input::{Action, key_to_action};
use crate::theme::Theme;
use crate::{GameConfig, ui};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

pub struct App {
    config: GameConfig,
    theme: Theme,
    state: GameState,
    last_tick: Instant,
}

impl App {
    pub fn new(config: GameConfig, theme: Theme) -> Self {
        Self {
            state: GameState::new(&config),
            config,
            theme,
            last_tick: Instant::now(),
        }
    }

    /// Enter raw mode and the alternate screen, run the game, and restore
    /// the terminal on every exit path.
    pub fn run(&mut self) -> Result<()> {
        use crossterm::{
            execute,
            terminal::{
                EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
            },
        };

        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut terminal =
            ratatui::DefaultTerminal::new(ratatui::backend::CrosstermBackend::new(stdout))?;

        let result = self.run_loop(&mut terminal);

        execute!(std::io::stdout(), LeaveAlternateScreen)?;
        disable_raw_mode()?;

        result
    }

    /// One iteration per frame: draw, drain input, and advance the game
    /// whenever a full tick interval has elapsed.
    fn run_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let tick_interval = Duration::from_secs_f64(1.0 / self.config.tick_rate.max(0.5));
        loop {
            terminal.draw(|f| ui::draw(f, &self.state, &self.theme, f.area()))?;

            // Wait out the rest of the tick on the event queue; drain every
            // pending event without blocking once something arrives.
            let timeout = tick_interval.saturating_sub(self.last_tick.elapsed());
            if event::poll(timeout)? {
                while event::poll(Duration::ZERO)? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key_to_action(key) {
                            Action::Quit => return Ok(()),
                            Action::Turn(direction) => self.state.snake.steer(direction),
                            Action::None => {}
                        }
                    }
                }
            }

            if self.last_tick.elapsed() >= tick_interval {
                self.last_tick = Instant::now();
                self.state.tick();
            }
        }
    }
}
