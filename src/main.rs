mod cli;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use bridgeprims::config::CliConfig;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report_error(e, cli.json),
    };
    let json_output = cli.json || config.json_output;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    debug!("Loaded config {:?}", config);

    match cli::execute(cli.command, &config, json_output) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => report_error(e, json_output),
    }
}

fn report_error(e: anyhow::Error, json_output: bool) -> anyhow::Result<()> {
    if json_output {
        println!("{}", serde_json::json!({"error": e.to_string()}));
        std::process::exit(1);
    }
    Err(e)
}
