//! devref - Web Development Reference
//!
//! A terminal reference browser for web development setup snippets. Ships a
//! compiled-in catalog of Next.js and Express.js snippets that can be
//! searched, filtered by topic, folded by section and copied to the
//! clipboard, either from the full-screen TUI or from one-shot CLI commands.

use crate::app::App;
use crate::config::Config;
use colored::Colorize;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::error::Error;
use std::io;
use std::time::Instant;

mod app;
mod catalog;
mod cli;
mod config;
mod handlers;
mod logging;
mod models;
mod search;
mod state;
mod ui;

fn main() -> Result<(), Box<dyn Error>> {
    color_eyre::install()?;

    let args: Vec<String> = std::env::args().skip(1).collect();

    if !args.is_empty() {
        // The CLI reports a broken config instead of silently ignoring it
        let config = Config::load()?;
        if let Err(e) = logging::init(&config.log_level) {
            eprintln!("{}  logging disabled: {:#}", "┃".bright_magenta(), e);
        }

        if let Err(e) = cli::execute_cli(&args) {
            log::error!("{:#}", e);
            eprintln!("{}  {} {:#}", "┃".bright_magenta(), "error:".bright_red(), e);
            std::process::exit(1);
        }
        return Ok(());
    }

    let config = Config::load();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    let log_file = logging::init(&log_level).ok();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Using default configuration: {:#}", e);
        Config::default()
    });
    if !ui::highlight::has_theme(&config.theme) {
        log::warn!("Unknown theme {}, falling back to the default", config.theme);
    }

    run_tui(config)?;

    if let Some(path) = log_file {
        println!("Log written to {}", path.display());
    }
    Ok(())
}

/// Runs the full-screen interface until the user quits. The terminal is
/// restored even when the loop fails.
fn run_tui(config: Config) -> Result<(), Box<dyn Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = config.tick_rate();
    let mut app = App::new(config);
    log::info!("devref {} started", env!("CARGO_PKG_VERSION"));

    let result = event_loop(&mut terminal, &mut app, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("devref stopped");
    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: std::time::Duration,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if handlers::keys::handle_key_events(key, app) {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
