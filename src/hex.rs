use std::fmt::Write;

/// One indentation level in a packet dump.
pub const INDENT: &str = "    ";

const WIDTH: usize = 32;

/// Renders a byte sequence as a bracketed hex block.
///
/// Bytes are written as two uppercase hex digits followed by a space, 32 to
/// a line, each line indented one level. The brackets sit at column zero;
/// callers that nest the block indent every line themselves.
///
/// # Arguments
///
/// * `data` - A slice of bytes to be dumped.
///
/// # Example
///
/// ```
/// use pktlog::hex::dump_bytes;
///
/// assert_eq!(dump_bytes(&[]), "[]");
/// assert_eq!(dump_bytes(&[0x48, 0x65]), "[\n    48 65 \n]");
/// ```
pub fn dump_bytes(data: &[u8]) -> String {
    if data.is_empty() {
        return "[]".to_string();
    }

    let lines = data.len().div_ceil(WIDTH);
    let mut out = String::with_capacity(data.len() * 3 + lines * (INDENT.len() + 1) + 3);
    out.push('[');
    for chunk in data.chunks(WIDTH) {
        out.push('\n');
        out.push_str(INDENT);
        for b in chunk {
            // writing into a String cannot fail
            let _ = write!(out, "{:02X} ", b);
        }
    }
    out.push_str("\n]");
    out
}
