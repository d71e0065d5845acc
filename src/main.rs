use std::process::ExitCode;

use clap::Parser;

use porter::config::LaunchConfig;
use porter::consts::EXIT_FAILURE;
use porter::error::LaunchError;
use porter::launcher::Launcher;

#[derive(Parser)]
#[command(
    name = "porter",
    version,
    about = "Run ./run.py with the interpreter from ./.venv, from the project root."
)]
struct Cli {}

#[tokio::main]
async fn main() -> ExitCode {
    let _cli = Cli::parse();
    porter::logging::init();

    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            let code = e
                .downcast_ref::<LaunchError>()
                .map_or(EXIT_FAILURE, LaunchError::exit_code);
            ExitCode::from(code)
        }
    }
}

async fn run() -> anyhow::Result<u8> {
    let config = LaunchConfig::from_current_dir()?;
    Launcher::new(config).run().await
}
