// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! One tagged unit of data: prefix + type id + optional ordinal + optional
//! name + payload.
//!
//! Encoding layout (big-endian):
//!
//! ```text
//! prefix:u8  type_id:u8  [ordinal:i16]  [name_len:u8 name:utf8]
//! [value_len:u8|u16|u32]  payload
//! ```
//!
//! When a taxonomy is in effect and it maps the field's name, the name is
//! replaced by the taxonomy ordinal on the wire and recovered on decode.
//! `size` applies the same substitution so that computed and written sizes
//! always agree.

use crate::error::{FudgeError, FudgeResult};
use crate::prefix::FieldPrefix;
use crate::ser::{Cursor, CursorMut};
use crate::taxonomy::Taxonomy;
use crate::types::FieldType;
use crate::value::Value;

/// Longest permitted UTF-8 encoding of a field name.
pub const MAX_NAME_BYTES: usize = 255;

/// A concrete field held by a [`crate::Message`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub type_: FieldType,
    pub ordinal: Option<i16>,
    pub name: Option<String>,
    pub value: Value,
}

impl Field {
    pub fn new(
        type_: FieldType,
        ordinal: Option<i16>,
        name: Option<String>,
        value: Value,
    ) -> Field {
        Field {
            type_,
            ordinal,
            name,
            value,
        }
    }

    /// Whether this field carries the given wire type id.
    pub fn is_type(&self, type_id: u8) -> bool {
        self.type_.id() == type_id
    }

    /// Encoded size of this field in bytes, taxonomy substitution included.
    pub fn size(&self, taxonomy: Option<&dyn Taxonomy>) -> FudgeResult<usize> {
        let mut has_ordinal = self.ordinal.is_some();
        let mut has_name = self.name.is_some();
        if let (Some(name), Some(taxonomy)) = (&self.name, taxonomy) {
            if taxonomy.get_ordinal(name).is_some() {
                has_ordinal = true;
                has_name = false;
            }
        }

        let mut size = 2; // prefix + type id
        if has_ordinal {
            size += 2;
        }
        if has_name {
            // one byte for the length prefix
            size += 1 + self.name.as_ref().map_or(0, |name| name.len());
        }

        if self.type_.is_variable_sized() {
            let value_length = self.type_.value_size(&self.value, taxonomy)?;
            size += usize::from(bytes_for_value_length(value_length)) + value_length;
        } else {
            size += self.type_.fixed_size();
        }
        Ok(size)
    }

    /// Encode prefix, type id, ordinal, name, value length and payload.
    ///
    /// Misuse (oversize name, value/type mismatch) is reported before any
    /// byte of this field is written.
    pub fn encode(
        &self,
        cursor: &mut CursorMut<'_>,
        taxonomy: Option<&dyn Taxonomy>,
    ) -> FudgeResult<()> {
        let mut ordinal = self.ordinal;
        let mut name = self.name.as_deref();
        if let (Some(field_name), Some(taxonomy)) = (name, taxonomy) {
            if let Some(substituted) = taxonomy.get_ordinal(field_name) {
                ordinal = Some(substituted);
                name = None;
            }
        }

        if let Some(field_name) = name {
            if field_name.len() > MAX_NAME_BYTES {
                return Err(FudgeError::NameTooLong {
                    length: field_name.len(),
                });
            }
        }

        let (fixed_width, variable_width, value_length) = if self.type_.is_variable_sized() {
            let value_length = self.type_.value_size(&self.value, taxonomy)?;
            (false, bytes_for_value_length(value_length), value_length)
        } else {
            (true, 0, 0)
        };

        let prefix = FieldPrefix {
            fixed_width,
            variable_width,
            has_ordinal: ordinal.is_some(),
            has_name: name.is_some(),
        };
        cursor.write_u8(prefix.encode())?;
        cursor.write_u8(self.type_.id())?;
        if let Some(ordinal) = ordinal {
            cursor.write_i16_be(ordinal)?;
        }
        if let Some(field_name) = name {
            cursor.write_u8(field_name.len() as u8)?;
            cursor.write_bytes(field_name.as_bytes())?;
        }
        if !fixed_width {
            encode_value_length(cursor, value_length, variable_width)?;
        }
        self.type_.encode_value(&self.value, cursor, taxonomy)
    }

    /// Decode one field from the front of `encoded`.
    ///
    /// Returns the field and the number of bytes consumed; the caller
    /// advances by that amount to reach the next field.
    pub fn decode(
        encoded: &[u8],
        taxonomy: Option<&dyn Taxonomy>,
    ) -> FudgeResult<(Field, usize)> {
        if encoded.len() < 2 {
            return Err(FudgeError::ReadFailed {
                offset: 0,
                reason: format!("field header needs 2 bytes, {} available", encoded.len()),
            });
        }
        let mut cursor = Cursor::new(encoded);
        let prefix = FieldPrefix::decode(cursor.read_u8()?);
        let field_type = FieldType::by_id(cursor.read_u8()?)?;

        let ordinal = if prefix.has_ordinal {
            Some(cursor.read_i16_be()?)
        } else {
            None
        };

        let name = if prefix.has_name {
            let name_length = usize::from(cursor.read_u8()?);
            let name_bytes = cursor.read_bytes(name_length)?;
            match std::str::from_utf8(name_bytes) {
                Ok(text) => Some(text.to_string()),
                Err(err) => {
                    return Err(FudgeError::InvalidData {
                        reason: format!("field name is not UTF-8: {err}"),
                    })
                }
            }
        } else if let (Some(ordinal), Some(taxonomy)) = (ordinal, taxonomy) {
            // Recover the name the encoder substituted away.
            taxonomy.get_name(ordinal).map(str::to_string)
        } else {
            None
        };

        let value_length = if prefix.fixed_width {
            field_type.fixed_size()
        } else {
            decode_value_length(&mut cursor, prefix.variable_width)?
        };

        let payload_start = cursor.offset();
        let available = encoded.len() - payload_start;
        if value_length > available {
            return Err(FudgeError::TruncatedPayload {
                offset: payload_start,
                declared: value_length,
                available,
            });
        }
        let payload = &encoded[payload_start..payload_start + value_length];
        let value = field_type.decode_value(payload, taxonomy)?;

        let field = Field::new(field_type, ordinal, name, value);
        Ok((field, payload_start + value_length))
    }
}

/// Minimum number of bytes needed to encode a value length.
pub fn bytes_for_value_length(value_length: usize) -> u8 {
    if value_length <= 255 {
        1
    } else if value_length <= 65535 {
        2
    } else {
        4
    }
}

fn encode_value_length(
    cursor: &mut CursorMut<'_>,
    value_length: usize,
    width: u8,
) -> FudgeResult<()> {
    match width {
        1 => cursor.write_u8(value_length as u8),
        2 => cursor.write_u16_be(value_length as u16),
        _ => cursor.write_u32_be(value_length as u32),
    }
}

/// Read a value length of exactly `width` bytes. A buffer shortfall is a
/// decode error, never a short read.
fn decode_value_length(cursor: &mut Cursor<'_>, width: u8) -> FudgeResult<usize> {
    match width {
        0 => Ok(0),
        1 => Ok(usize::from(cursor.read_u8()?)),
        2 => Ok(usize::from(cursor.read_u16_be()?)),
        _ => Ok(cursor.read_u32_be()? as usize),
    }
}
