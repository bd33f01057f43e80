use std::env;
use std::error::Error;
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use rand::thread_rng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::ui::draw_frame;
use crate::{Dimension, Direction, Game, DRIFT_TICK_MS, HEIGHT_MARGIN, INPUT_POLL_MS, MIN_BOARD_DIM};

type Term = Terminal<CrosstermBackend<Stdout>>;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Walk,
    Drift,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Walk => "WALK",
            Mode::Drift => "DRIFT",
        }
    }

    fn from_arg(arg: Option<&str>) -> Result<Self, String> {
        match arg {
            None | Some("walk") => Ok(Mode::Walk),
            Some("drift") => Ok(Mode::Drift),
            Some(other) => Err(format!("unknown mode {other:?} (expected \"walk\" or \"drift\")")),
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mode = Mode::from_arg(env::args().nth(1).as_deref())?;
    let bounds = probe_dimensions()?;
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), bounds, mode)
}

/// One-shot size probe. The board keeps this shape for the whole run even if
/// the window changes later.
fn probe_dimensions() -> Result<Dimension, Box<dyn Error>> {
    let (cols, rows) = terminal::size()?;
    let rows = rows.saturating_sub(HEIGHT_MARGIN);
    if cols < MIN_BOARD_DIM || rows < MIN_BOARD_DIM {
        return Err(format!(
            "terminal too small: the board needs at least {0}x{0} cells",
            MIN_BOARD_DIM
        )
        .into());
    }
    Ok(Dimension::new(cols as usize, rows as usize))
}

fn run_loop(terminal: &mut Term, bounds: Dimension, mode: Mode) -> Result<(), Box<dyn Error>> {
    let mut rng = thread_rng();
    let mut game = match mode {
        Mode::Walk => Game::new(bounds)?,
        Mode::Drift => Game::with_random_spot(bounds, &mut rng)?,
    };
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_frame(frame, &game, mode))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.code, KeyCode::Char('q')) {
                    break;
                }
                if mode == Mode::Walk {
                    if let Some(dir) = key_direction(key.code) {
                        game.step(dir)?;
                    }
                }
            }
        }

        if mode == Mode::Drift && last_tick.elapsed() >= Duration::from_millis(DRIFT_TICK_MS) {
            game.drift(&mut rng)?;
            last_tick = Instant::now();
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Arrow keys move; every other key is "no move".
fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Left => Some(Direction::Left),
        _ => None,
    }
}
