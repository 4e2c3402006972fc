use crate::{hex::dump_bytes, packet::FieldValue};

/// A rendered field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Goes on the same line as the field name.
    Inline(String),
    /// A multi-line hex block that goes below the field name.
    Block(String),
}

pub fn render_value(value: &FieldValue<'_>) -> Rendered {
    match value {
        FieldValue::Null => Rendered::Inline("null".to_string()),
        // no escaping, embedded quotes go through as-is
        FieldValue::Text(s) => Rendered::Inline(format!("\"{s}\"")),
        FieldValue::Bytes(bytes) => Rendered::Block(dump_bytes(bytes)),
        FieldValue::Scalar(v) => Rendered::Inline(v.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline(s: &str) -> Rendered {
        Rendered::Inline(s.to_string())
    }

    #[test]
    fn null() {
        assert_eq!(render_value(&FieldValue::Null), inline("null"));
    }

    #[test]
    fn text_is_quoted_verbatim() {
        assert_eq!(
            render_value(&FieldValue::Text("abc")),
            Rendered::Inline("\"abc\"".to_string())
        );
        assert_eq!(
            render_value(&FieldValue::Text("say \"hi\"")),
            inline("\"say \"hi\"\"")
        );
    }

    #[test]
    fn scalars_use_display() {
        assert_eq!(render_value(&FieldValue::Scalar(&42)), inline("42"));
        assert_eq!(render_value(&FieldValue::Scalar(&-7i64)), inline("-7"));
        assert_eq!(render_value(&FieldValue::Scalar(&true)), inline("true"));
    }

    #[test]
    fn bytes_delegate_to_hex_block() {
        let bytes = [0x01, 0x02, 0xFE];
        assert_eq!(
            render_value(&FieldValue::Bytes(&bytes)),
            Rendered::Block(dump_bytes(&bytes))
        );
        assert_eq!(
            render_value(&FieldValue::Bytes(&[])),
            Rendered::Block("[]".to_string())
        );
    }
}
