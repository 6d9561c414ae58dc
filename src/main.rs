use tracing::info;

use dashboard_probe::{logging, Config, Error, Runner, VERSION};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env().map_err(Error::from)?;

    logging::init(&config.logging);
    info!(version = VERSION, "Starting dashboard_probe");
    config.log_summary();

    // Probes are sequential, a single-threaded runtime is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(config))
}

async fn async_main(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let runner = Runner::new(config.probe)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner.run(&mut out).await?;

    Ok(())
}
