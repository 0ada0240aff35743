use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use memoir::app::App;
use memoir::avatar::loader::HttpImageLoader;
use memoir::config;
use memoir::suggestion::catalog;
use memoir::suggestion::provider::CatalogProvider;

/// Input poll timeout; doubles as the spinner/animation tick
const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(
    name = "memoir",
    version,
    about = "Interactive journaling-suggestion picker with contact and location cards"
)]
struct Cli {
    /// Path to a JSON suggestion catalog (overrides the config file;
    /// built-in samples are used when neither is set)
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging stays off in release builds; stderr output would corrupt
    // the terminal UI
    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();
    let config = config::load();

    // Resolve the catalog before touching the terminal so load errors
    // print normally
    let catalog_path = cli.catalog.or_else(|| config.picker.catalog.clone());
    let payloads = match &catalog_path {
        Some(path) => catalog::load_file(path)?,
        None => catalog::builtin(),
    };

    let provider = Box::new(CatalogProvider::new(payloads));
    let loader = Box::new(HttpImageLoader::new()?);
    let app = App::new(&config, provider, loader);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events(TICK_INTERVAL)?;
    }
    Ok(())
}
