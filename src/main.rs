use std::{error::Error as _, process::ExitCode};

use clap::Parser;
use log::LevelFilter;

use lunch::config::{Cli, Config};

fn init_logging(debug: bool) {
    pretty_env_logger::formatted_builder()
        .filter_level(if debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = Config::from(Cli::parse());
    init_logging(config.debug);
    log::debug!("{config:?}");

    match lunch::run(&config).await {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            if let Some(hint) = e.hint() {
                eprintln!("{hint}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}
