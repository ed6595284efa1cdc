// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! An ordered sequence of fields.
//!
//! Messages carry no count prefix on the wire: decoding consumes fields
//! until the supplied slice is exhausted, so the caller (normally
//! [`crate::Envelope`]) must frame the slice exactly. A message is itself
//! a wire type (`FieldType::SubMessage`), which is what makes nesting
//! unbounded.

use crate::error::FudgeResult;
use crate::field::Field;
use crate::ser::CursorMut;
use crate::taxonomy::Taxonomy;
use crate::types::FieldType;
use crate::value::Value;

/// An insertion-ordered list of fields. Duplicate names and ordinals are
/// legal and common (repeated fields stand in for arrays).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    pub fields: Vec<Field>,
}

impl Message {
    pub fn new() -> Message {
        Message { fields: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Add an anonymous value.
    pub fn add(&mut self, value: impl Into<Value>) {
        self.add_field(value, None, None, None);
    }

    /// Add a named value.
    pub fn add_named(&mut self, name: &str, value: impl Into<Value>) {
        self.add_field(value, None, Some(name), None);
    }

    /// Add a value with an ordinal.
    pub fn add_ordinal(&mut self, ordinal: i16, value: impl Into<Value>) {
        self.add_field(value, Some(ordinal), None, None);
    }

    /// Add a value with any combination of ordinal, name and explicit wire
    /// type. Without an explicit type the registry infers a default from
    /// the value and narrows it to the smallest lossless representation.
    pub fn add_field(
        &mut self,
        value: impl Into<Value>,
        ordinal: Option<i16>,
        name: Option<&str>,
        type_: Option<FieldType>,
    ) {
        let value = value.into();
        let field_type = FieldType::for_value(&value, type_).narrowed(&value);
        self.fields.push(Field::new(
            field_type,
            ordinal,
            name.map(str::to_string),
            value,
        ));
    }

    /// Encoded size of all fields, in insertion order.
    pub fn size(&self, taxonomy: Option<&dyn Taxonomy>) -> FudgeResult<usize> {
        let mut size = 0;
        for field in &self.fields {
            size += field.size(taxonomy)?;
        }
        Ok(size)
    }

    /// Encode each field in insertion order.
    pub fn encode(
        &self,
        cursor: &mut CursorMut<'_>,
        taxonomy: Option<&dyn Taxonomy>,
    ) -> FudgeResult<()> {
        for field in &self.fields {
            field.encode(cursor, taxonomy)?;
        }
        Ok(())
    }

    /// Decode fields until `encoded` is exhausted.
    pub fn decode(encoded: &[u8], taxonomy: Option<&dyn Taxonomy>) -> FudgeResult<Message> {
        let mut message = Message::new();
        let mut pos = 0;
        while pos < encoded.len() {
            let (field, consumed) = Field::decode(&encoded[pos..], taxonomy)?;
            message.fields.push(field);
            pos += consumed;
        }
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_to_vec(message: &Message) -> Vec<u8> {
        let size = message.size(None).expect("size should be computable");
        let mut buffer = vec![0u8; size];
        let mut cursor = CursorMut::new(&mut buffer);
        message.encode(&mut cursor, None).expect("encode should succeed");
        assert_eq!(cursor.offset(), size);
        buffer
    }

    #[test]
    fn test_empty_message_encodes_to_nothing() {
        let message = Message::new();
        assert!(encode_to_vec(&message).is_empty());
        assert!(message.is_empty());
    }

    #[test]
    fn test_single_indicator_message() {
        let mut message = Message::new();
        message.add(Value::Indicator);
        assert_eq!(encode_to_vec(&message), vec![0x80, 0x00]);

        let decoded = Message::decode(&[0x80, 0x00], None).expect("decode should succeed");
        assert_eq!(decoded.len(), 1);
        assert!(decoded.fields[0].value.is_indicator());
    }

    #[test]
    fn test_multi_field_message_wire_bytes() {
        // indicator, indicator with ordinal 2, boolean true
        let expected = [0x80, 0x00, 0x90, 0x00, 0x00, 0x02, 0x80, 0x01, 0x01];

        let mut message = Message::new();
        message.add(Value::Indicator);
        message.add_ordinal(2, Value::Indicator);
        message.add(true);
        assert_eq!(encode_to_vec(&message), expected);

        let decoded = Message::decode(&expected, None).expect("decode should succeed");
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded.fields[1].ordinal, Some(2));
        assert_eq!(decoded.fields[2].value.as_bool(), Some(true));
    }

    #[test]
    fn test_add_narrows_integers() {
        let mut message = Message::new();
        message.add(255i64);
        message.add(256i64);
        message.add(19801231i64);
        message.add(i64::from(i32::MAX) + 1);
        let types: Vec<FieldType> = message.fields.iter().map(|f| f.type_).collect();
        assert_eq!(
            types,
            vec![FieldType::Byte, FieldType::Short, FieldType::Int, FieldType::Long]
        );
    }

    #[test]
    fn test_add_narrows_byte_strings() {
        let mut message = Message::new();
        message.add(vec![0u8; 20]);
        message.add(vec![0u8; 21]);
        assert_eq!(message.fields[0].type_, FieldType::ByteArray20);
        assert_eq!(message.fields[1].type_, FieldType::ByteArray);
    }

    #[test]
    fn test_explicit_type_wins_over_inference() {
        let mut message = Message::new();
        message.add_field(1.2345678f64, None, Some("Double"), Some(FieldType::Double));
        assert_eq!(message.fields[0].type_, FieldType::Double);
    }

    #[test]
    fn test_duplicate_names_are_preserved_in_order() {
        let mut message = Message::new();
        message.add_named("line", "first");
        message.add_named("line", "second");
        let bytes = encode_to_vec(&message);
        let decoded = Message::decode(&bytes, None).expect("decode should succeed");
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded.fields[0].value.as_str(), Some("first"));
        assert_eq!(decoded.fields[1].value.as_str(), Some("second"));
    }

    #[test]
    fn test_corrupt_field_aborts_whole_message() {
        // valid indicator followed by an unknown type id
        let encoded = [0x80, 0x00, 0x80, 0xFF];
        let err = Message::decode(&encoded, None).unwrap_err();
        assert!(matches!(err, crate::error::FudgeError::UnknownType { type_id: 0xFF }));
    }
}
