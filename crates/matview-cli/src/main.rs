use anyhow::Result;
use log::LevelFilter;

use matview_cli::cli::build_cli;
use matview_cli::demo::{run_demo, DemoConfig};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("MATVIEW_LOG", "error,matview=info"))
        .init();

    let matches = build_cli().get_matches();
    let config = DemoConfig::from_arguments(&matches)?;
    log::info!(
        "[matview] {} -> {} (subtract {})",
        config.input.display(),
        config.output.display(),
        config.subtract
    );

    let stdout = std::io::stdout();
    match run_demo(&config, &mut stdout.lock()) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Demo failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
