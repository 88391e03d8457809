use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use swsearch::app::App;
use swsearch::config::load_config;
use swsearch::logging::init_logging;
use swsearch::lookup::SwapiClient;

/// Search Star Wars characters as you type
#[derive(Parser, Debug)]
#[command(name = "swsearch", version, long_about = None)]
struct Args {
    /// Config file (defaults to ~/.config/swsearch/config.toml)
    #[arg(long, value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Base URL of the SWAPI service
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Quiet period after the last keystroke before a lookup is sent
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    init_logging(args.log_file.as_deref())?;

    let loaded = load_config(args.config.as_deref());
    let mut config = loaded.config;
    if let Some(base_url) = args.base_url {
        config.lookup.base_url = base_url;
    }
    if let Some(debounce_ms) = args.debounce_ms {
        config.search.debounce_ms = debounce_ms;
    }

    let client =
        SwapiClient::from_config(&config.lookup).wrap_err("Failed to create lookup client")?;
    log::info!("Looking up characters at {}", client.people_url());

    let mut app = App::new(&config, Arc::new(client), loaded.warning);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;

    let result = run(terminal, &mut app);

    app.shutdown();
    if let Err(e) = execute!(stdout(), DisableBracketedPaste, DisableMouseCapture) {
        log::warn!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            app.handle_event(event::read()?, Instant::now());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
