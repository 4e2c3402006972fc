use crate::packet::{AsFieldValue, Field, Packet, PacketKind};

/// A packet the decoder recognised by header only.
///
/// `length` and `version` come from the wire header and are shown inline in
/// the dump header; the undecoded body is the single `payload` field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnknownPacket {
    pub id: u8,
    pub length: u32,
    pub version: u16,
    pub payload: Vec<u8>,
}

impl UnknownPacket {
    /// Builds an unknown packet whose declared length is the payload length,
    /// saturating at `u32::MAX` for payloads of 4 GiB or more.
    pub fn new(id: u8, version: u16, payload: Vec<u8>) -> Self {
        Self {
            id,
            length: declared_length(payload.len()),
            version,
            payload,
        }
    }
}

fn declared_length(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl Packet for UnknownPacket {
    fn id(&self) -> u8 {
        self.id
    }

    fn type_name(&self) -> &str {
        "UnknownPacket"
    }

    fn kind(&self) -> PacketKind {
        PacketKind::Unknown {
            length: self.length,
            version: self.version,
        }
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::public("payload", self.payload.as_field_value())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::FieldValue;

    #[test]
    fn length_tracks_payload() {
        let packet = UnknownPacket::new(0xFF, 1, vec![1, 2, 3]);

        assert_eq!(packet.kind(), PacketKind::Unknown { length: 3, version: 1 });
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_length_saturates() {
        assert_eq!(declared_length(u32::MAX as usize), u32::MAX);
        assert_eq!(declared_length(u32::MAX as usize + 1), u32::MAX);
        assert_eq!(declared_length(1 << 40), u32::MAX);
    }

    #[test]
    fn payload_is_the_only_field() {
        let packet = UnknownPacket::new(0xFF, 1, vec![0xAA]);
        let fields = packet.fields();

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "payload");
        assert!(fields[0].is_public());
        assert!(matches!(fields[0].value, FieldValue::Bytes(&[0xAA])));
    }
}
