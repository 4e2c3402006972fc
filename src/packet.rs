use std::fmt;

/// A decoded protocol message that can describe its own fields.
///
/// Implementations report their fields in declaration order, every time, so
/// two dumps of the same packet type line up field for field. Most packet
/// types get this impl from the [`packet!`](crate::packet!) macro.
pub trait Packet {
    fn id(&self) -> u8;

    /// Name of the concrete packet type, e.g. `LoginOkPacket`.
    fn type_name(&self) -> &str;

    fn kind(&self) -> PacketKind {
        PacketKind::Standard
    }

    fn fields(&self) -> Vec<Field<'_>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketKind {
    Standard,
    /// A packet the decoder could not parse; its header values are shown
    /// inline rather than as fields.
    Unknown { length: u32, version: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    NonPublic,
}

impl Visibility {
    /// Maps a stringified Rust visibility to a field visibility. Only a bare
    /// `pub` counts as public.
    pub fn of(vis: &str) -> Self {
        if vis == "pub" {
            Self::Public
        } else {
            Self::NonPublic
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub name: &'a str,
    pub value: FieldValue<'a>,
    pub visibility: Visibility,
}

impl<'a> Field<'a> {
    pub fn new(name: &'a str, value: FieldValue<'a>, visibility: Visibility) -> Self {
        Self {
            name,
            value,
            visibility,
        }
    }

    pub fn public(name: &'a str, value: FieldValue<'a>) -> Self {
        Self::new(name, value, Visibility::Public)
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// A field value borrowed from the packet being dumped.
#[derive(Clone, Copy)]
pub enum FieldValue<'a> {
    Null,
    Text(&'a str),
    Bytes(&'a [u8]),
    Scalar(&'a dyn fmt::Display),
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            Self::Scalar(v) => f.debug_tuple("Scalar").field(&v.to_string()).finish(),
        }
    }
}

/// Conversion from a packet's field type to a [`FieldValue`].
pub trait AsFieldValue {
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for [u8] {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bytes(self)
    }
}

impl AsFieldValue for Vec<u8> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bytes(self)
    }
}

impl AsFieldValue for Box<[u8]> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bytes(self)
    }
}

impl<const N: usize> AsFieldValue for [u8; N] {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bytes(self)
    }
}

impl<T: AsFieldValue> AsFieldValue for Option<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(value) => value.as_field_value(),
            None => FieldValue::Null,
        }
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

macro_rules! scalar_field_values {
    ($($ty:ty),*) => {
        $(
            impl AsFieldValue for $ty {
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::Scalar(self)
                }
            }
        )*
    };
}

scalar_field_values!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char
);

/// Declares a packet struct and implements [`Packet`] for it.
///
/// Fields are reported in the order they are written. A field declared `pub`
/// is public; any other visibility is non-public.
///
/// ```
/// use pktlog::{packet, Packet};
///
/// packet! {
///     #[derive(Debug, Default)]
///     pub struct LoginOkPacket: 0x14 {
///         pub user_id: i64,
///         pub user_token: String,
///         server_build: u32,
///     }
/// }
///
/// let packet = LoginOkPacket::default();
/// assert_eq!(packet.id(), 0x14);
/// assert_eq!(packet.fields().len(), 3);
/// assert!(!packet.fields()[2].is_public());
/// ```
#[macro_export]
macro_rules! packet {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $id:literal {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Packet for $name {
            fn id(&self) -> u8 {
                $id
            }

            fn type_name(&self) -> &str {
                stringify!($name)
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $(
                        $crate::Field::new(
                            stringify!($field),
                            $crate::AsFieldValue::as_field_value(&self.$field),
                            $crate::Visibility::of(stringify!($field_vis)),
                        ),
                    )*
                ]
            }
        }
    };
}
