use std::path::PathBuf;

use clap::Parser;
use time_api::{config::Config, server, time_service::TimeService};

#[derive(Parser)]
#[command(version, about = "Serves the current time in JST and UTC")]
struct Opts {
    /// TOML file with `host` and `port`
    #[arg(long)]
    config_path: Option<PathBuf>,
    /// Overrides `host` of the config file [default: 0.0.0.0]
    #[arg(long)]
    host: Option<String>,
    /// Overrides `port` of the config file [default: 8000]
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opts = Opts::parse();
    let config = match opts.config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    }
    .with_overrides(opts.host, opts.port);

    server::run(&config, TimeService::default()).await
}
