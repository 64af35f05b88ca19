use anyhow::Context;
use clap::Parser;
use menucard::cli::Cli;
use menucard::config::Config;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    let log_path = config.logging.log_path();
    menucard::logging::init_tracing(&config.logging.level, &log_path)
        .with_context(|| format!("failed to open log file '{}'", log_path.display()))?;
    tracing::info!(url = %config.menu.url, "Starting menucard");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let result = menucard::ui::run(&config, runtime.handle());

    // An unfinished fetch is abandoned, not awaited.
    runtime.shutdown_background();
    result.context("terminal UI failed")
}
