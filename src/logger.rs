use tracing::debug;

use crate::{
    config::LoggerConfig,
    direction::Direction,
    dump::build_dump,
    error::Result,
    packet::Packet,
    sink::LogSink,
};

/// Writes a human-readable dump of every packet it is handed.
///
/// The configuration is fixed at construction. A logger can be shared
/// between connection threads; records are written whole, one at a time.
pub struct PacketLogger {
    config: LoggerConfig,
    sink: LogSink,
}

impl PacketLogger {
    /// Logs to `packets.log` (appending) with console echo on and
    /// non-public fields off.
    pub fn new() -> Result<Self> {
        Self::with_config(LoggerConfig::default())
    }

    pub fn with_config(config: LoggerConfig) -> Result<Self> {
        let sink = LogSink::open(&config.target)?;
        Ok(Self::with_sink(config, sink))
    }

    pub fn with_sink(config: LoggerConfig, sink: LogSink) -> Self {
        Self { config, sink }
    }

    pub fn sink(&self) -> &LogSink {
        &self.sink
    }

    pub fn log_packet(&self, packet: &dyn Packet, direction: Direction) -> Result<()> {
        let record = build_dump(packet, direction, &self.config);
        debug!(
            id = packet.id(),
            name = packet.type_name(),
            ?direction,
            bytes = record.len(),
            "logging packet"
        );
        self.sink.emit(&record, self.config.log_console)
    }
}
