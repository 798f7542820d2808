use clap::Parser;
use log::{info, warn};
use milk_island::core::config::{self, CliOverrides, ConfigError, IslandConfig, ResolvedConfig};
use milk_island::core::route::Route;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "milk-island", about = "Terminal front-end for the Milk Island agent society")]
struct Args {
    /// Page to open at startup: /, /login or /chat
    #[arg(short, long)]
    route: Option<Route>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<LevelFilter>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The logger needs the resolved config, so config problems are held until it exists
    let config_path = config::config_path();
    let config_existed = config_path.as_ref().is_some_and(|p| p.exists());
    let (file_config, load_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (IslandConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        route: args.route,
        log_level: args.log_level,
    };
    let config = config::resolve(&file_config, &cli);

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    info!("Milk Island starting up (start route: {})", config.start_route);
    report_config(config_path, config_existed, load_error.as_ref(), &config);

    let result = milk_island::tui::run(config);

    // Printed after the terminal is restored so it isn't lost behind the alternate screen
    if let Some(e) = load_error {
        eprintln!("milk-island: ignored config file: {e}");
    }
    result
}

fn report_config(
    path: Option<PathBuf>,
    existed: bool,
    load_error: Option<&ConfigError>,
    config: &ResolvedConfig,
) {
    match (path, load_error) {
        (_, Some(e)) => warn!("Ignoring config file, using defaults: {e}"),
        (None, None) => warn!("Could not determine home directory, using default config"),
        (Some(path), None) if existed => info!("Loaded config from {}", path.display()),
        (Some(path), None) => info!("Generated default config at {}", path.display()),
    }
    for warning in &config.warnings {
        warn!("{warning}");
    }
}
