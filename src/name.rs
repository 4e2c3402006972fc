const PACKET_SUFFIX: &str = "Packet";

/// Turns a packet type name into a display label.
///
/// The trailing `Packet` is dropped and a space goes in front of every
/// uppercase character after the first, so `LoginOkPacket` becomes
/// `Login Ok`. Runs of capitals are not grouped: `HTTPPacket` becomes
/// `H T T P`.
pub fn format_packet_name(type_name: &str) -> String {
    let name = type_name.strip_suffix(PACKET_SUFFIX).unwrap_or(type_name);

    let mut formatted = String::with_capacity(name.len() + name.len() / 2);
    for (i, c) in name.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            formatted.push(' ');
        }
        formatted.push(c);
    }
    formatted
}
