//! Human-readable packet dumps for protocol proxies.
//!
//! A [`PacketLogger`] takes a decoded packet and the direction it travelled,
//! renders its id, name and fields as an indented text block, and appends
//! that block to a log file (and optionally stdout).
//!
//! ```no_run
//! use pktlog::{packet, Direction, PacketLogger};
//!
//! packet! {
//!     pub struct KeepAlivePacket: 0x1E {}
//! }
//!
//! let logger = PacketLogger::new()?;
//! logger.log_packet(&KeepAlivePacket {}, Direction::ToServer)?;
//! // [~12:30:05.042] [CLIENT > SERVER] Keep Alive 0x1E { }
//! # Ok::<(), pktlog::Error>(())
//! ```

pub mod capture;
pub mod config;
pub mod direction;
pub mod dump;
pub mod error;
pub mod hex;
pub mod logger;
pub mod name;
pub mod packet;
pub mod render;
pub mod sink;
pub mod unknown;

pub use config::LoggerConfig;
pub use direction::Direction;
pub use error::{Error, Result};
pub use logger::PacketLogger;
pub use packet::{AsFieldValue, Field, FieldValue, Packet, PacketKind, Visibility};
pub use unknown::UnknownPacket;
