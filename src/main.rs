use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{info, warn};

use hrdash::app::{App, StatusLevel};
use hrdash::config;
use hrdash::domain::Datasets;
use hrdash::registry::ViewRegistry;
use hrdash::shell::DashboardShell;
use hrdash::{input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "hrdash",
    version,
    about = "hrdash: a terminal HR analytics dashboard for fulfillment teams"
)]
struct Args {
    /// Seed for the generated datasets (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a config.toml (defaults to ~/.config/hrdash/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable mouse capture
    #[arg(long)]
    no_mouse: bool,

    /// Write logs to this file instead of the data directory
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (config, config_error) = match config::load(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => (config::Config::default(), Some(err)),
    };

    let log_path = logging::init(&config.log, args.log_file.clone());
    if let Some(err) = config_error.as_ref() {
        warn!(%err, "using default config");
    }

    let seed = args.seed.or(config.seed);
    let datasets = match seed {
        Some(seed) => Datasets::from_seed(seed),
        None => Datasets::from_entropy(),
    };
    let shell = DashboardShell::new(ViewRegistry::standard(), datasets)
        .context("failed to mount the default view")?;
    info!(
        seed = ?seed,
        log = ?log_path,
        view = %shell.active_view(),
        "starting dashboard"
    );

    let mut app = App::new(shell);
    app.mouse_enabled = config.mouse && !args.no_mouse;
    if let Some(err) = config_error {
        app.set_status(format!("Config ignored: {err}"), StatusLevel::Warn);
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    if app.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, config.tick_rate());

    disable_raw_mode()?;
    if app.mouse_enabled {
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    info!(transitions = app.transitions(), "dashboard closed");
    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => {
                    if let Some(size) = terminal_rect() {
                        input::handle_mouse(app, mouse, size);
                    }
                }
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect::new(0, 0, width, height))
}
