// `pana` entry point
use clap::Parser;
use panasystem_cli::{emit, run, Args, CliSettings};
use panasystem_shared::utils::SystemClock;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    // Settings come first so their log filter can be applied; a broken config
    // file is reported on stderr before logging exists.
    let settings = match CliSettings::load(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("pana: {:#}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Loaded configuration version {}", settings.version);

    let result = run(&args.command, &settings, &SystemClock)
        .and_then(|output| emit(&output, &mut std::io::stdout().lock()));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
