use clap::Parser;
use premium_calc::app::{apply_log_level, handle_fatal_error, init_logging, AppConfig};
use premium_calc::cli::{execute_command, Cli};
use premium_calc::config::load_config;
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli) {
        handle_fatal_error(e, verbose);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let app_config = AppConfig::new(cli.verbose);
    let log_filter = init_logging(&app_config);

    let config = load_config(cli.config.as_deref(), &app_config.working_dir)?;
    apply_log_level(
        &log_filter,
        &app_config.with_configured_level(config.log_level.clone()),
    );
    debug!("Effective configuration: {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(cli.command, &config, &mut out)
}
