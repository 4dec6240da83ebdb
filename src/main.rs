//! Ang Pao Counter
//!
//! A terminal tally for red packets. Tap a denomination to add one packet,
//! keep an eye on the running distribution, and undo mis-taps.

use std::fs::OpenOptions;
use std::io;

use angpao::application::{App, AppMode};
use angpao::infrastructure::{ConfigOverrides, CounterConfig};
use angpao::presentation::{render_ui, InputHandler};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

#[derive(Parser, Debug)]
#[clap(name = "angpao", version, about = "Count your red packets")]
struct Cli {
    #[clap(long, short, help = "JSON config file with denominations and history limit")]
    config: Option<String>,

    #[clap(long, value_delimiter = ',', help = "Denominations in display order, e.g. 100,50,10")]
    denominations: Option<Vec<u32>>,

    #[clap(long, help = "Number of taps kept for undo")]
    history_limit: Option<usize>,

    #[clap(long, help = "Prefix shown before amounts")]
    currency_symbol: Option<String>,

    #[clap(long, help = "Start in dark theme")]
    dark: bool,

    #[clap(long, default_value = "angpao.log")]
    log_file: String,

    #[clap(long, short, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            denominations: self.denominations.clone(),
            history_limit: self.history_limit,
            currency_symbol: self.currency_symbol.clone(),
            dark: self.dark,
        }
    }
}

fn init_logging(cli: &Cli) -> io::Result<()> {
    // The terminal belongs to the UI, so logs go to a file.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log_file)?;

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}

/// Entry point for the ang pao counter.
///
/// Resolves configuration before touching the terminal so that invalid
/// settings are reported on a normal screen.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = CounterConfig::resolve(cli.config.as_deref(), cli.overrides())?;
    let engine = config.build_engine()?;
    log::info!(
        "Starting with denominations {:?}, history limit {}",
        config.denominations,
        config.history_limit
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine, config.currency_symbol, config.dark);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("Terminal loop failed: {:?}", err);
        println!("{err:?}");
    }

    log::info!(
        "Session ended: {} packets, total {}",
        app.engine.total_packets(),
        app.engine.total()
    );
    Ok(())
}

/// Draws a frame, then blocks for the next key until the user quits with
/// 'q' (normal mode) or Ctrl+C.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
