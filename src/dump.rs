use std::fmt::Write;

use chrono::{Local, NaiveTime};

use crate::{
    config::LoggerConfig,
    direction::Direction,
    hex::INDENT,
    name::format_packet_name,
    packet::{Packet, PacketKind},
    render::{render_value, Rendered},
};

/// Builds the dump record for one packet, stamped with the local time.
pub fn build_dump(packet: &dyn Packet, direction: Direction, config: &LoggerConfig) -> String {
    build_dump_at(packet, direction, config, Local::now().time())
}

/// Builds the dump record for one packet, stamped with `time`.
///
/// The record is newline terminated:
///
/// ```text
/// [~12:30:05.042] [CLIENT > SERVER] Login Ok 0x14
/// {
///     user_id: 42
///     user_token: "abc"
///     session_key:
///     [
///         0A 0B
///     ]
/// }
/// ```
///
/// A packet without fields ends its header line with ` { }` instead. Non-public
/// fields are skipped unless `config.log_private_fields` is set; a packet whose
/// fields are all skipped still gets an (empty) braced block.
pub fn build_dump_at(
    packet: &dyn Packet,
    direction: Direction,
    config: &LoggerConfig,
    time: NaiveTime,
) -> String {
    let mut out = String::new();

    // writing into a String cannot fail
    let _ = write!(out, "[~{}] ", time.format("%H:%M:%S%.3f"));
    out.push_str(direction.marker());
    out.push_str(&format_packet_name(packet.type_name()));
    let _ = write!(out, " 0x{:02X}", packet.id());

    if let PacketKind::Unknown { length, version } = packet.kind() {
        let _ = write!(out, " Length {length} Version {version}");
    }

    let fields = packet.fields();
    if fields.is_empty() {
        out.push_str(" { }\n");
        return out;
    }

    out.push_str("\n{\n");
    for field in fields
        .iter()
        .filter(|f| f.is_public() || config.log_private_fields)
    {
        out.push_str(INDENT);
        out.push_str(field.name);
        out.push_str(": ");

        match render_value(&field.value) {
            Rendered::Inline(value) => out.push_str(&value),
            Rendered::Block(block) => {
                for line in block.lines() {
                    out.push('\n');
                    out.push_str(INDENT);
                    out.push_str(line);
                }
            }
        }
        out.push('\n');
    }
    out.push_str("}\n");

    out
}
