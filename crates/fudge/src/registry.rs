// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type resolution, narrowing and the per-type payload codec.
//!
//! The two-step protocol is: infer a default wire type for a value
//! ([`FieldType::for_value`]), then narrow it to the smallest type that
//! still holds the value exactly ([`FieldType::narrowed`]). Callers never
//! pick the compact representation by hand; the registry guarantees the
//! smallest legal encoding deterministically.
//!
//! Payload encode/decode/size dispatch is a pattern match over the closed
//! [`FieldType`] enum, one arm per wire type.

use crate::error::{FudgeError, FudgeResult};
use crate::message::Message;
use crate::ser::{Cursor, CursorMut};
use crate::taxonomy::Taxonomy;
use crate::types::FieldType;
use crate::value::Value;

/// Fudge bytes are unsigned on the wire.
pub const MIN_BYTE: i64 = 0;
pub const MAX_BYTE: i64 = 255;
pub const MIN_SHORT: i64 = i16::MIN as i64;
pub const MAX_SHORT: i64 = i16::MAX as i64;
pub const MIN_INT: i64 = i32::MIN as i64;
pub const MAX_INT: i64 = i32::MAX as i64;

/// Byte-string lengths that have a dedicated fixed-size wire type.
const FIXED_BYTES_TYPES: [(usize, FieldType); 9] = [
    (4, FieldType::ByteArray4),
    (8, FieldType::ByteArray8),
    (16, FieldType::ByteArray16),
    (20, FieldType::ByteArray20),
    (32, FieldType::ByteArray32),
    (64, FieldType::ByteArray64),
    (128, FieldType::ByteArray128),
    (256, FieldType::ByteArray256),
    (512, FieldType::ByteArray512),
];

impl FieldType {
    /// Resolve the default wire type for a value. An explicit type always
    /// wins; otherwise the value's variant picks the widest member of its
    /// family and [`FieldType::narrowed`] shrinks it afterwards.
    pub fn for_value(value: &Value, explicit: Option<FieldType>) -> FieldType {
        if let Some(field_type) = explicit {
            return field_type;
        }
        match value {
            Value::Indicator => FieldType::Indicator,
            Value::Bool(_) => FieldType::Boolean,
            Value::Int(_) => FieldType::Long,
            Value::Float(_) => FieldType::Float,
            Value::Double(_) => FieldType::Double,
            Value::Bytes(_) => FieldType::ByteArray,
            Value::ShortArray(_) => FieldType::ShortArray,
            Value::IntArray(_) => FieldType::IntArray,
            Value::LongArray(_) => FieldType::LongArray,
            Value::FloatArray(_) => FieldType::FloatArray,
            Value::DoubleArray(_) => FieldType::DoubleArray,
            Value::String(_) => FieldType::String,
            Value::Message(_) => FieldType::SubMessage,
        }
    }

    /// Narrow to the smallest type that losslessly holds `value`. Types
    /// without a narrowing rule pass through unchanged.
    pub fn narrowed(self, value: &Value) -> FieldType {
        match self {
            FieldType::Byte | FieldType::Short | FieldType::Int | FieldType::Long => {
                match value.as_i64() {
                    Some(v) => narrow_int(v),
                    None => self,
                }
            }
            FieldType::ByteArray
            | FieldType::ByteArray4
            | FieldType::ByteArray8
            | FieldType::ByteArray16
            | FieldType::ByteArray20
            | FieldType::ByteArray32
            | FieldType::ByteArray64
            | FieldType::ByteArray128
            | FieldType::ByteArray256
            | FieldType::ByteArray512 => match value.as_bytes() {
                Some(v) => narrow_bytes(v.len()),
                None => self,
            },
            _ => self,
        }
    }

    /// Payload size in bytes for a concrete value. Fixed-width types report
    /// their fixed size; variable-sized types compute it from the value,
    /// recursing taxonomy-aware for sub-messages.
    pub fn value_size(
        self,
        value: &Value,
        taxonomy: Option<&dyn Taxonomy>,
    ) -> FudgeResult<usize> {
        if !self.is_variable_sized() {
            return Ok(self.fixed_size());
        }
        match (self, value) {
            (FieldType::ByteArray, Value::Bytes(v)) => Ok(v.len()),
            (FieldType::ShortArray, Value::ShortArray(v)) => Ok(2 * v.len()),
            (FieldType::IntArray, Value::IntArray(v)) => Ok(4 * v.len()),
            (FieldType::LongArray, Value::LongArray(v)) => Ok(8 * v.len()),
            (FieldType::FloatArray, Value::FloatArray(v)) => Ok(4 * v.len()),
            (FieldType::DoubleArray, Value::DoubleArray(v)) => Ok(8 * v.len()),
            (FieldType::String, Value::String(v)) => Ok(v.len()),
            (FieldType::SubMessage, Value::Message(v)) => v.size(taxonomy),
            _ => Err(self.mismatch(value)),
        }
    }

    /// Encode a value's payload. The value must match the wire type; a
    /// mismatch is reported before any bytes are written.
    pub fn encode_value(
        self,
        value: &Value,
        cursor: &mut CursorMut<'_>,
        taxonomy: Option<&dyn Taxonomy>,
    ) -> FudgeResult<()> {
        match (self, value) {
            (FieldType::Indicator, Value::Indicator) => Ok(()),
            (FieldType::Boolean, Value::Bool(v)) => cursor.write_u8(u8::from(*v)),
            (FieldType::Byte, Value::Int(v)) => {
                let byte = in_range(self, *v, MIN_BYTE, MAX_BYTE)?;
                cursor.write_u8(byte as u8)
            }
            (FieldType::Short, Value::Int(v)) => {
                let short = in_range(self, *v, MIN_SHORT, MAX_SHORT)?;
                cursor.write_i16_be(short as i16)
            }
            (FieldType::Int, Value::Int(v)) => {
                let int = in_range(self, *v, MIN_INT, MAX_INT)?;
                cursor.write_i32_be(int as i32)
            }
            (FieldType::Long, Value::Int(v)) => cursor.write_i64_be(*v),
            (FieldType::Float, Value::Float(v)) => cursor.write_f32_be(*v),
            (FieldType::Double, Value::Double(v)) => cursor.write_f64_be(*v),
            (FieldType::String, Value::String(v)) => cursor.write_bytes(v.as_bytes()),
            (FieldType::ByteArray, Value::Bytes(v)) => cursor.write_bytes(v),
            (FieldType::ShortArray, Value::ShortArray(v)) => {
                for element in v {
                    cursor.write_i16_be(*element)?;
                }
                Ok(())
            }
            (FieldType::IntArray, Value::IntArray(v)) => {
                for element in v {
                    cursor.write_i32_be(*element)?;
                }
                Ok(())
            }
            (FieldType::LongArray, Value::LongArray(v)) => {
                for element in v {
                    cursor.write_i64_be(*element)?;
                }
                Ok(())
            }
            (FieldType::FloatArray, Value::FloatArray(v)) => {
                for element in v {
                    cursor.write_f32_be(*element)?;
                }
                Ok(())
            }
            (FieldType::DoubleArray, Value::DoubleArray(v)) => {
                for element in v {
                    cursor.write_f64_be(*element)?;
                }
                Ok(())
            }
            (FieldType::SubMessage, Value::Message(v)) => v.encode(cursor, taxonomy),
            (
                FieldType::ByteArray4
                | FieldType::ByteArray8
                | FieldType::ByteArray16
                | FieldType::ByteArray20
                | FieldType::ByteArray32
                | FieldType::ByteArray64
                | FieldType::ByteArray128
                | FieldType::ByteArray256
                | FieldType::ByteArray512,
                Value::Bytes(v),
            ) => {
                if v.len() != self.fixed_size() {
                    return Err(FudgeError::TypeMismatch {
                        type_name: self.name(),
                        reason: format!("byte string has length {}", v.len()),
                    });
                }
                cursor.write_bytes(v)
            }
            _ => Err(self.mismatch(value)),
        }
    }

    /// Decode a payload from exactly `encoded` into a value. For fixed
    /// types the slice must hold at least `fixed_size` bytes; for variable
    /// types the slice *is* the payload, as framed by the field decoder.
    pub fn decode_value(
        self,
        encoded: &[u8],
        taxonomy: Option<&dyn Taxonomy>,
    ) -> FudgeResult<Value> {
        let mut cursor = Cursor::new(encoded);
        match self {
            FieldType::Indicator => Ok(Value::Indicator),
            FieldType::Boolean => Ok(Value::Bool(cursor.read_u8()? != 0)),
            FieldType::Byte => Ok(Value::Int(i64::from(cursor.read_u8()?))),
            FieldType::Short => Ok(Value::Int(i64::from(cursor.read_i16_be()?))),
            FieldType::Int => Ok(Value::Int(i64::from(cursor.read_i32_be()?))),
            FieldType::Long => Ok(Value::Int(cursor.read_i64_be()?)),
            FieldType::Float => Ok(Value::Float(cursor.read_f32_be()?)),
            FieldType::Double => Ok(Value::Double(cursor.read_f64_be()?)),
            FieldType::String => match std::str::from_utf8(encoded) {
                Ok(text) => Ok(Value::String(text.to_string())),
                Err(err) => Err(FudgeError::InvalidData {
                    reason: format!("string payload is not UTF-8: {err}"),
                }),
            },
            FieldType::ByteArray => Ok(Value::Bytes(encoded.to_vec())),
            FieldType::ShortArray => {
                Ok(Value::ShortArray(decode_array(self, encoded, 2, |cursor| {
                    cursor.read_i16_be()
                })?))
            }
            FieldType::IntArray => {
                Ok(Value::IntArray(decode_array(self, encoded, 4, |cursor| {
                    cursor.read_i32_be()
                })?))
            }
            FieldType::LongArray => {
                Ok(Value::LongArray(decode_array(self, encoded, 8, |cursor| {
                    cursor.read_i64_be()
                })?))
            }
            FieldType::FloatArray => {
                Ok(Value::FloatArray(decode_array(self, encoded, 4, |cursor| {
                    cursor.read_f32_be()
                })?))
            }
            FieldType::DoubleArray => Ok(Value::DoubleArray(decode_array(
                self,
                encoded,
                8,
                |cursor| cursor.read_f64_be(),
            )?)),
            FieldType::SubMessage => Ok(Value::Message(Message::decode(encoded, taxonomy)?)),
            FieldType::ByteArray4
            | FieldType::ByteArray8
            | FieldType::ByteArray16
            | FieldType::ByteArray20
            | FieldType::ByteArray32
            | FieldType::ByteArray64
            | FieldType::ByteArray128
            | FieldType::ByteArray256
            | FieldType::ByteArray512 => {
                Ok(Value::Bytes(cursor.read_bytes(self.fixed_size())?.to_vec()))
            }
        }
    }

    fn mismatch(self, value: &Value) -> FudgeError {
        FudgeError::TypeMismatch {
            type_name: self.name(),
            reason: format!("got a {} value", value.kind()),
        }
    }
}

/// Check that `value` fits the inclusive range of the wire type; reported
/// as a type mismatch before any bytes are written.
fn in_range(field_type: FieldType, value: i64, min: i64, max: i64) -> FudgeResult<i64> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(FudgeError::TypeMismatch {
            type_name: field_type.name(),
            reason: format!("value {} out of range {}..={}", value, min, max),
        })
    }
}

/// Smallest integer wire type whose inclusive range holds `value`.
fn narrow_int(value: i64) -> FieldType {
    if (MIN_BYTE..=MAX_BYTE).contains(&value) {
        FieldType::Byte
    } else if (MIN_SHORT..=MAX_SHORT).contains(&value) {
        FieldType::Short
    } else if (MIN_INT..=MAX_INT).contains(&value) {
        FieldType::Int
    } else {
        FieldType::Long
    }
}

/// Fixed byte-array type for the exact lengths that have one; the general
/// variable-length type otherwise.
fn narrow_bytes(length: usize) -> FieldType {
    for (fixed_length, field_type) in FIXED_BYTES_TYPES {
        if length == fixed_length {
            return field_type;
        }
    }
    FieldType::ByteArray
}

fn decode_array<T>(
    field_type: FieldType,
    encoded: &[u8],
    width: usize,
    read: impl Fn(&mut Cursor<'_>) -> FudgeResult<T>,
) -> FudgeResult<Vec<T>> {
    if encoded.len() % width != 0 {
        return Err(FudgeError::InvalidData {
            reason: format!(
                "{} payload of {} bytes is not a multiple of {}",
                field_type.name(),
                encoded.len(),
                width
            ),
        });
    }
    let mut cursor = Cursor::new(encoded);
    let mut out = Vec::with_capacity(encoded.len() / width);
    while !cursor.is_eof() {
        out.push(read(&mut cursor)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_int_boundaries() {
        assert_eq!(FieldType::narrowed(FieldType::Long, &Value::Int(0)), FieldType::Byte);
        assert_eq!(
            FieldType::narrowed(FieldType::Long, &Value::Int(255)),
            FieldType::Byte
        );
        assert_eq!(
            FieldType::narrowed(FieldType::Long, &Value::Int(256)),
            FieldType::Short
        );
        assert_eq!(
            FieldType::narrowed(FieldType::Long, &Value::Int(-1)),
            FieldType::Short
        );
        assert_eq!(
            FieldType::narrowed(FieldType::Long, &Value::Int(-32768)),
            FieldType::Short
        );
        assert_eq!(
            FieldType::narrowed(FieldType::Long, &Value::Int(32768)),
            FieldType::Int
        );
        assert_eq!(
            FieldType::narrowed(FieldType::Long, &Value::Int(i64::from(i32::MAX))),
            FieldType::Int
        );
        assert_eq!(
            FieldType::narrowed(FieldType::Long, &Value::Int(i64::from(i32::MAX) + 1)),
            FieldType::Long
        );
        assert_eq!(
            FieldType::narrowed(FieldType::Long, &Value::Int(i64::MIN)),
            FieldType::Long
        );
    }

    #[test]
    fn test_narrow_bytes_fixed_lengths() {
        for (length, expected) in FIXED_BYTES_TYPES {
            let value = Value::Bytes(vec![0u8; length]);
            assert_eq!(FieldType::ByteArray.narrowed(&value), expected);
        }
        let value = Value::Bytes(vec![0u8; 21]);
        assert_eq!(FieldType::ByteArray.narrowed(&value), FieldType::ByteArray);
        let value = Value::Bytes(vec![0u8; 0]);
        assert_eq!(FieldType::ByteArray.narrowed(&value), FieldType::ByteArray);
    }

    #[test]
    fn test_narrowing_leaves_unrelated_types_alone() {
        assert_eq!(
            FieldType::String.narrowed(&Value::String("x".into())),
            FieldType::String
        );
        assert_eq!(
            FieldType::Double.narrowed(&Value::Double(1.0)),
            FieldType::Double
        );
    }

    #[test]
    fn test_for_value_defaults() {
        assert_eq!(
            FieldType::for_value(&Value::Int(12), None),
            FieldType::Long
        );
        assert_eq!(
            FieldType::for_value(&Value::String("x".into()), None),
            FieldType::String
        );
        assert_eq!(
            FieldType::for_value(&Value::Message(Message::new()), None),
            FieldType::SubMessage
        );
        // Explicit type always wins.
        assert_eq!(
            FieldType::for_value(&Value::Int(12), Some(FieldType::Int)),
            FieldType::Int
        );
    }

    #[test]
    fn test_scalar_payload_roundtrip() {
        let cases: Vec<(FieldType, Value)> = vec![
            (FieldType::Indicator, Value::Indicator),
            (FieldType::Boolean, Value::Bool(true)),
            (FieldType::Byte, Value::Int(200)),
            (FieldType::Short, Value::Int(-1234)),
            (FieldType::Int, Value::Int(1_000_000)),
            (FieldType::Long, Value::Int(-9_000_000_000)),
            (FieldType::Float, Value::Float(1.5)),
            (FieldType::Double, Value::Double(-6.25)),
        ];
        for (field_type, value) in cases {
            let size = field_type
                .value_size(&value, None)
                .expect("fixed size is known");
            let mut buffer = vec![0u8; size];
            let mut cursor = CursorMut::new(&mut buffer);
            field_type
                .encode_value(&value, &mut cursor, None)
                .expect("encode should succeed");
            assert_eq!(cursor.offset(), size);
            let decoded = field_type
                .decode_value(&buffer, None)
                .expect("decode should succeed");
            assert_eq!(decoded, value);
        }
    }

    #[test]
    fn test_array_payload_roundtrip() {
        let value = Value::ShortArray(vec![-1, 0, 32767]);
        let size = FieldType::ShortArray
            .value_size(&value, None)
            .expect("array size");
        assert_eq!(size, 6);
        let mut buffer = vec![0u8; size];
        let mut cursor = CursorMut::new(&mut buffer);
        FieldType::ShortArray
            .encode_value(&value, &mut cursor, None)
            .expect("encode should succeed");
        let decoded = FieldType::ShortArray
            .decode_value(&buffer, None)
            .expect("decode should succeed");
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_array_payload_rejects_ragged_length() {
        let err = FieldType::IntArray.decode_value(&[0, 1, 2], None).unwrap_err();
        assert!(matches!(err, FudgeError::InvalidData { .. }));
    }

    #[test]
    fn test_byte_range_enforced_on_encode() {
        let mut buffer = [0u8; 1];
        let mut cursor = CursorMut::new(&mut buffer);
        let err = FieldType::Byte
            .encode_value(&Value::Int(256), &mut cursor, None)
            .unwrap_err();
        assert!(matches!(err, FudgeError::TypeMismatch { .. }));
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_fixed_bytes_length_enforced() {
        let mut buffer = [0u8; 8];
        let mut cursor = CursorMut::new(&mut buffer);
        let err = FieldType::ByteArray8
            .encode_value(&Value::Bytes(vec![1, 2, 3]), &mut cursor, None)
            .unwrap_err();
        assert!(matches!(err, FudgeError::TypeMismatch { .. }));
    }

    #[test]
    fn test_value_type_mismatch_is_rejected() {
        let mut buffer = [0u8; 8];
        let mut cursor = CursorMut::new(&mut buffer);
        let err = FieldType::Boolean
            .encode_value(&Value::Int(1), &mut cursor, None)
            .unwrap_err();
        assert!(matches!(err, FudgeError::TypeMismatch { .. }));
    }

    #[test]
    fn test_string_decode_rejects_bad_utf8() {
        let err = FieldType::String.decode_value(&[0xFF, 0xFE], None).unwrap_err();
        assert!(matches!(err, FudgeError::InvalidData { .. }));
    }
}
