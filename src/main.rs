use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

use leadline::App;
use leadline::api::{ApiClient, spawn_worker};
use leadline::config::{self, ConfigResult};
use leadline::error::{LeadlineError, validate_base_url};
use leadline::router::Route;

/// Property pages for a real-estate CRM
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Browse real-estate property pages from a CRM backend in the terminal"
)]
struct Args {
    /// Property whose pages the home menu opens
    #[arg(long, default_value_t = 1)]
    property: u64,

    /// Backend address, overriding [api] base_url from the config file
    #[arg(long)]
    base_url: Option<String>,

    /// Page to open on start, e.g. /ratings/12
    #[arg(long, default_value = "/")]
    route: String,
}

fn main() -> Result<()> {
    // Writes to /tmp/leadline-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/leadline-debug.log")
            .expect("Failed to open /tmp/leadline-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== LEADLINE DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    // Reject bad input before the terminal switches to the alternate screen
    let base_url = validate_base_url(
        args.base_url
            .as_deref()
            .unwrap_or(&config_result.config.api.base_url),
    )?;
    let start = Route::parse(&args.route).map_err(LeadlineError::from)?;

    let client = ApiClient::new(&base_url, config_result.config.api.timeout())?;

    let terminal = init_terminal()?;

    let app = App::new(args.property, start, &config_result.config);
    let result = run(terminal, app, client, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== LEADLINE DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    client: ApiClient,
    config_result: ConfigResult,
) -> Result<()> {
    setup_fetch_worker(&mut app, client);

    app.sync_route()?;

    if let Some(warning) = config_result.warning {
        app.notification.show_warning("Config", &warning);
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the fetch worker thread and channels
fn setup_fetch_worker(app: &mut App, client: ApiClient) {
    #[cfg(debug_assertions)]
    log::debug!("Starting fetch worker for {}", client.base_url());

    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.set_fetch_channels(request_tx, response_rx);

    spawn_worker(client, request_rx, response_tx);
}
