//! Interactive terminal viewer for replaying a trace
//!
//! Presentation-layer consumer of the core: it requests one trace, wraps it in
//! a [`retrace::TraceCursor`], and replays it step by step. The event loop
//! polls with a short timeout so auto-play can tick without a timer thread.
//!
//! Keys: n/right/space next, p/left previous, a auto-play, r reset, q quit.

mod app;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;

use self::app::App;

/// How often auto-play advances
const AUTO_PLAY_INTERVAL: Duration = Duration::from_millis(250);

/// Poll granularity for the event loop
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Open the viewer for a pattern/subject pair
pub fn run_viewer(pattern: &str, subject: &str) -> io::Result<()> {
    let mut app = App::new(pattern, subject);

    enable_raw_mode()?;
    let stdout = io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    terminal.clear()?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|frame| ui::render(frame, app))?;
            dirty = false;
        }

        if event::poll(POLL_TIMEOUT)? {
            if let Event::Key(key) = event::read()? {
                dirty = app.handle_key(key);
            }
        }

        if app.auto_play && last_tick.elapsed() >= AUTO_PLAY_INTERVAL {
            dirty |= app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
