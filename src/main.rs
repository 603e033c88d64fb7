// Entry point.
// Sets up the terminal, runs the event loop, and restores the terminal on exit.

mod app;
mod cache;
mod error;
mod fetch;
mod github;
mod projects;
mod state;
mod ui;

use std::io::stdout;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use crate::app::App;
use crate::error::Result;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("folio: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let mut app = App::new()?;

    let mut terminal = setup_terminal()?;
    let result = app.run(&mut terminal);
    restore_terminal()?;

    Ok(result?)
}

/// Put the terminal into raw mode on the alternate screen.
fn setup_terminal() -> Result<Terminal<impl Backend>> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Undo `setup_terminal`, leaving the shell usable again.
fn restore_terminal() -> Result<()> {
    execute!(stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}
