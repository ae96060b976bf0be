use clap::Parser;
use celebrity_manager::cli::commands::Cli;
use celebrity_manager::cli::handlers;
use celebrity_manager::logging::{LogConfig, init_logging};

fn main() {
    let cli = Cli::parse();

    let log_config = LogConfig::new(cli.verbose, cli.log_file.clone(), cli.command.is_none());
    if let Err(e) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
