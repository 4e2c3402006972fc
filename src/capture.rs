//! Packets described in a TOML capture file.
//!
//! ```toml
//! [[packet]]
//! name = "LoginOkPacket"
//! id = 0x14
//! direction = "to_client"
//!
//! [packet.fields]
//! user_id = 42
//! user_token = "abc"
//! session_key = [0x0A, 0x0B]
//! region = {}
//!
//! [packet.private]
//! server_build = 7
//! ```
//!
//! An entry with both `length` and `version` is an unknown packet.

use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    direction::Direction,
    packet::{Field, FieldValue, Packet, PacketKind, Visibility},
};

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("packet {packet}: field {field} is an array but not a byte sequence")]
    NotBytes { packet: String, field: String },

    #[error("packet {packet}: field {field} is a non-empty table")]
    NestedTable { packet: String, field: String },

    #[error("packet {packet}: length and version must be given together")]
    PartialUnknown { packet: String },
}

#[derive(Debug, Deserialize)]
struct CaptureFile {
    #[serde(default, rename = "packet")]
    packets: Vec<CaptureEntry>,
}

#[derive(Debug, Deserialize)]
struct CaptureEntry {
    name: String,
    id: u8,
    #[serde(default)]
    direction: Direction,
    length: Option<u32>,
    version: Option<u16>,
    #[serde(default)]
    fields: IndexMap<String, toml::Value>,
    #[serde(default)]
    private: IndexMap<String, toml::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CapturedValue {
    Null,
    Text(String),
    Bytes(Vec<u8>),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Datetime(toml::value::Datetime),
}

impl CapturedValue {
    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Self::Null => FieldValue::Null,
            Self::Text(s) => FieldValue::Text(s),
            Self::Bytes(b) => FieldValue::Bytes(b),
            Self::Integer(v) => FieldValue::Scalar(v),
            Self::Float(v) => FieldValue::Scalar(v),
            Self::Boolean(v) => FieldValue::Scalar(v),
            Self::Datetime(v) => FieldValue::Scalar(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CapturedField {
    pub name: String,
    pub value: CapturedValue,
    pub visibility: Visibility,
}

/// A packet replayed from a capture file, along with the direction it was
/// seen travelling.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedPacket {
    pub name: String,
    pub id: u8,
    pub direction: Direction,
    pub kind: PacketKind,
    pub fields: Vec<CapturedField>,
}

impl Packet for CapturedPacket {
    fn id(&self) -> u8 {
        self.id
    }

    fn type_name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PacketKind {
        self.kind
    }

    fn fields(&self) -> Vec<Field<'_>> {
        self.fields
            .iter()
            .map(|f| Field::new(&f.name, f.value.as_field_value(), f.visibility))
            .collect()
    }
}

pub fn load(capture_file: &Path) -> anyhow::Result<Vec<CapturedPacket>> {
    let capture = fs::read_to_string(capture_file)?;
    parse(&capture)
}

pub fn parse(capture: &str) -> anyhow::Result<Vec<CapturedPacket>> {
    let file = toml::from_str::<CaptureFile>(capture)?;
    let packets = file
        .packets
        .into_iter()
        .map(CapturedPacket::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(packets)
}

impl TryFrom<CaptureEntry> for CapturedPacket {
    type Error = CaptureError;

    fn try_from(entry: CaptureEntry) -> Result<Self, Self::Error> {
        let kind = match (entry.length, entry.version) {
            (Some(length), Some(version)) => PacketKind::Unknown { length, version },
            (None, None) => PacketKind::Standard,
            _ => return Err(CaptureError::PartialUnknown { packet: entry.name }),
        };

        let public = entry.fields.into_iter().map(|f| (f, Visibility::Public));
        let private = entry.private.into_iter().map(|f| (f, Visibility::NonPublic));
        let fields = public
            .chain(private)
            .map(|((name, value), visibility)| {
                captured_value(&entry.name, &name, value).map(|value| CapturedField {
                    name,
                    value,
                    visibility,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: entry.name,
            id: entry.id,
            direction: entry.direction,
            kind,
            fields,
        })
    }
}

fn captured_value(
    packet: &str,
    field: &str,
    value: toml::Value,
) -> Result<CapturedValue, CaptureError> {
    use toml::Value;

    Ok(match value {
        Value::String(s) => CapturedValue::Text(s),
        Value::Integer(v) => CapturedValue::Integer(v),
        Value::Float(v) => CapturedValue::Float(v),
        Value::Boolean(v) => CapturedValue::Boolean(v),
        Value::Datetime(v) => CapturedValue::Datetime(v),
        Value::Array(items) => {
            let bytes = items
                .iter()
                .map(|item| item.as_integer().and_then(|b| u8::try_from(b).ok()))
                .collect::<Option<Vec<u8>>>()
                .ok_or_else(|| CaptureError::NotBytes {
                    packet: packet.to_string(),
                    field: field.to_string(),
                })?;
            CapturedValue::Bytes(bytes)
        }
        Value::Table(table) if table.is_empty() => CapturedValue::Null,
        Value::Table(_) => {
            return Err(CaptureError::NestedTable {
                packet: packet.to_string(),
                field: field.to_string(),
            })
        }
    })
}
