use clap::Parser;
use nid_exportgen::utils::logger;
use nid_exportgen::{CliConfig, ExportEngine};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let mut engine = ExportEngine::new(config.output_target());
    if let Err(e) = engine.run(&config.to_request()) {
        tracing::debug!("Export failed (category {:?})", e.category());
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}
