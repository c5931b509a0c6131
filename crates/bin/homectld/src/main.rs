use std::sync::Arc;

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

use homectl_adapter_file_log::FileActivityLog;
use homectl_adapter_tcp::TcpEndpoint;
use homectl_adapter_virtual::FixedWeather;
use homectl_app::ports::SharedSink;
use homectld::config::Config;
use homectld::console::{ConsoleSink, StdinPrompt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();
    tracing::info!(bind = %config.bind_addr(), "homectld starting");

    // Adapters
    let sink: SharedSink = Arc::new(ConsoleSink::stdio());
    let mut endpoint = TcpEndpoint::new(config.server.endpoint.clone());
    let weather = FixedWeather::new(config.weather.outdoor_temperature);
    let log = FileActivityLog::open(&config.activity_log.path);
    let mut prompt = StdinPrompt::new();

    let report = homectld::run::run(&config, sink, &mut endpoint, &weather, log, &mut prompt).await?;
    tracing::info!(
        authenticated = report.authenticated,
        monitor_reports = report.monitor_reports,
        "homectld finished"
    );

    Ok(())
}
