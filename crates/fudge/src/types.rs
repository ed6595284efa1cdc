// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The closed catalogue of Fudge wire types.
//!
//! Type ids 0-15 and 17-25 are defined by the encoding specification; id 16
//! is unassigned. Each id maps to exactly one [`FieldType`] variant, so
//! dispatch is a pattern match rather than a runtime lookup table.

use crate::error::{FudgeError, FudgeResult};

pub const INDICATOR_TYPE_ID: u8 = 0;
pub const BOOLEAN_TYPE_ID: u8 = 1;
pub const BYTE_TYPE_ID: u8 = 2;
pub const SHORT_TYPE_ID: u8 = 3;
pub const INT_TYPE_ID: u8 = 4;
pub const LONG_TYPE_ID: u8 = 5;
pub const BYTEARRAY_TYPE_ID: u8 = 6;
pub const SHORTARRAY_TYPE_ID: u8 = 7;
pub const INTARRAY_TYPE_ID: u8 = 8;
pub const LONGARRAY_TYPE_ID: u8 = 9;
pub const FLOAT_TYPE_ID: u8 = 10;
pub const DOUBLE_TYPE_ID: u8 = 11;
pub const FLOATARRAY_TYPE_ID: u8 = 12;
pub const DOUBLEARRAY_TYPE_ID: u8 = 13;
pub const STRING_TYPE_ID: u8 = 14;
pub const MESSAGE_TYPE_ID: u8 = 15;
pub const BYTEARRAY4_TYPE_ID: u8 = 17;
pub const BYTEARRAY8_TYPE_ID: u8 = 18;
pub const BYTEARRAY16_TYPE_ID: u8 = 19;
pub const BYTEARRAY20_TYPE_ID: u8 = 20;
pub const BYTEARRAY32_TYPE_ID: u8 = 21;
pub const BYTEARRAY64_TYPE_ID: u8 = 22;
pub const BYTEARRAY128_TYPE_ID: u8 = 23;
pub const BYTEARRAY256_TYPE_ID: u8 = 24;
pub const BYTEARRAY512_TYPE_ID: u8 = 25;

/// A registered Fudge wire type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Indicator,
    Boolean,
    Byte,
    Short,
    Int,
    Long,
    ByteArray,
    ShortArray,
    IntArray,
    LongArray,
    Float,
    Double,
    FloatArray,
    DoubleArray,
    String,
    SubMessage,
    ByteArray4,
    ByteArray8,
    ByteArray16,
    ByteArray20,
    ByteArray32,
    ByteArray64,
    ByteArray128,
    ByteArray256,
    ByteArray512,
}

impl FieldType {
    /// Every registered type, in wire-id order.
    pub const ALL: [FieldType; 25] = [
        FieldType::Indicator,
        FieldType::Boolean,
        FieldType::Byte,
        FieldType::Short,
        FieldType::Int,
        FieldType::Long,
        FieldType::ByteArray,
        FieldType::ShortArray,
        FieldType::IntArray,
        FieldType::LongArray,
        FieldType::Float,
        FieldType::Double,
        FieldType::FloatArray,
        FieldType::DoubleArray,
        FieldType::String,
        FieldType::SubMessage,
        FieldType::ByteArray4,
        FieldType::ByteArray8,
        FieldType::ByteArray16,
        FieldType::ByteArray20,
        FieldType::ByteArray32,
        FieldType::ByteArray64,
        FieldType::ByteArray128,
        FieldType::ByteArray256,
        FieldType::ByteArray512,
    ];

    /// Wire type id.
    pub fn id(self) -> u8 {
        match self {
            FieldType::Indicator => INDICATOR_TYPE_ID,
            FieldType::Boolean => BOOLEAN_TYPE_ID,
            FieldType::Byte => BYTE_TYPE_ID,
            FieldType::Short => SHORT_TYPE_ID,
            FieldType::Int => INT_TYPE_ID,
            FieldType::Long => LONG_TYPE_ID,
            FieldType::ByteArray => BYTEARRAY_TYPE_ID,
            FieldType::ShortArray => SHORTARRAY_TYPE_ID,
            FieldType::IntArray => INTARRAY_TYPE_ID,
            FieldType::LongArray => LONGARRAY_TYPE_ID,
            FieldType::Float => FLOAT_TYPE_ID,
            FieldType::Double => DOUBLE_TYPE_ID,
            FieldType::FloatArray => FLOATARRAY_TYPE_ID,
            FieldType::DoubleArray => DOUBLEARRAY_TYPE_ID,
            FieldType::String => STRING_TYPE_ID,
            FieldType::SubMessage => MESSAGE_TYPE_ID,
            FieldType::ByteArray4 => BYTEARRAY4_TYPE_ID,
            FieldType::ByteArray8 => BYTEARRAY8_TYPE_ID,
            FieldType::ByteArray16 => BYTEARRAY16_TYPE_ID,
            FieldType::ByteArray20 => BYTEARRAY20_TYPE_ID,
            FieldType::ByteArray32 => BYTEARRAY32_TYPE_ID,
            FieldType::ByteArray64 => BYTEARRAY64_TYPE_ID,
            FieldType::ByteArray128 => BYTEARRAY128_TYPE_ID,
            FieldType::ByteArray256 => BYTEARRAY256_TYPE_ID,
            FieldType::ByteArray512 => BYTEARRAY512_TYPE_ID,
        }
    }

    /// Exact lookup by wire id. Unknown ids (including the unassigned 16)
    /// are an error, never a silent substitution.
    pub fn by_id(type_id: u8) -> FudgeResult<FieldType> {
        let field_type = match type_id {
            INDICATOR_TYPE_ID => FieldType::Indicator,
            BOOLEAN_TYPE_ID => FieldType::Boolean,
            BYTE_TYPE_ID => FieldType::Byte,
            SHORT_TYPE_ID => FieldType::Short,
            INT_TYPE_ID => FieldType::Int,
            LONG_TYPE_ID => FieldType::Long,
            BYTEARRAY_TYPE_ID => FieldType::ByteArray,
            SHORTARRAY_TYPE_ID => FieldType::ShortArray,
            INTARRAY_TYPE_ID => FieldType::IntArray,
            LONGARRAY_TYPE_ID => FieldType::LongArray,
            FLOAT_TYPE_ID => FieldType::Float,
            DOUBLE_TYPE_ID => FieldType::Double,
            FLOATARRAY_TYPE_ID => FieldType::FloatArray,
            DOUBLEARRAY_TYPE_ID => FieldType::DoubleArray,
            STRING_TYPE_ID => FieldType::String,
            MESSAGE_TYPE_ID => FieldType::SubMessage,
            BYTEARRAY4_TYPE_ID => FieldType::ByteArray4,
            BYTEARRAY8_TYPE_ID => FieldType::ByteArray8,
            BYTEARRAY16_TYPE_ID => FieldType::ByteArray16,
            BYTEARRAY20_TYPE_ID => FieldType::ByteArray20,
            BYTEARRAY32_TYPE_ID => FieldType::ByteArray32,
            BYTEARRAY64_TYPE_ID => FieldType::ByteArray64,
            BYTEARRAY128_TYPE_ID => FieldType::ByteArray128,
            BYTEARRAY256_TYPE_ID => FieldType::ByteArray256,
            BYTEARRAY512_TYPE_ID => FieldType::ByteArray512,
            other => return Err(FudgeError::UnknownType { type_id: other }),
        };
        Ok(field_type)
    }

    /// Whether the payload is preceded by a variable-width length.
    pub fn is_variable_sized(self) -> bool {
        matches!(
            self,
            FieldType::ByteArray
                | FieldType::ShortArray
                | FieldType::IntArray
                | FieldType::LongArray
                | FieldType::FloatArray
                | FieldType::DoubleArray
                | FieldType::String
                | FieldType::SubMessage
        )
    }

    /// Payload size in bytes for fixed-width types; 0 for variable-sized
    /// types (their size is computed from the value).
    pub fn fixed_size(self) -> usize {
        match self {
            FieldType::Indicator => 0,
            FieldType::Boolean | FieldType::Byte => 1,
            FieldType::Short => 2,
            FieldType::Int | FieldType::Float => 4,
            FieldType::Long | FieldType::Double => 8,
            FieldType::ByteArray4 => 4,
            FieldType::ByteArray8 => 8,
            FieldType::ByteArray16 => 16,
            FieldType::ByteArray20 => 20,
            FieldType::ByteArray32 => 32,
            FieldType::ByteArray64 => 64,
            FieldType::ByteArray128 => 128,
            FieldType::ByteArray256 => 256,
            FieldType::ByteArray512 => 512,
            _ => 0,
        }
    }

    /// Human friendly type name, used by the pretty printer.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Indicator => "indicator",
            FieldType::Boolean => "boolean",
            FieldType::Byte => "byte",
            FieldType::Short => "short",
            FieldType::Int => "int",
            FieldType::Long => "long",
            FieldType::ByteArray => "byte[]",
            FieldType::ShortArray => "short[]",
            FieldType::IntArray => "int[]",
            FieldType::LongArray => "long[]",
            FieldType::Float => "float",
            FieldType::Double => "double",
            FieldType::FloatArray => "float[]",
            FieldType::DoubleArray => "double[]",
            FieldType::String => "string",
            FieldType::SubMessage => "message",
            FieldType::ByteArray4 => "byte[4]",
            FieldType::ByteArray8 => "byte[8]",
            FieldType::ByteArray16 => "byte[16]",
            FieldType::ByteArray20 => "byte[20]",
            FieldType::ByteArray32 => "byte[32]",
            FieldType::ByteArray64 => "byte[64]",
            FieldType::ByteArray128 => "byte[128]",
            FieldType::ByteArray256 => "byte[256]",
            FieldType::ByteArray512 => "byte[512]",
        }
    }
}
