use anyhow::Context;
use clap::Parser;
use cli::Args;
use pktlog::{capture, config, PacketLogger};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?
            .logger,
        None => Default::default(),
    };
    let config = args.apply(config);

    let packets = capture::load(&args.capture)
        .with_context(|| format!("loading capture {}", args.capture.display()))?;

    let logger = PacketLogger::with_config(config)?;
    for packet in &packets {
        logger.log_packet(packet, packet.direction)?;
    }
    info!(
        count = packets.len(),
        log = %logger.sink().path().display(),
        "replayed capture"
    );

    Ok(())
}
