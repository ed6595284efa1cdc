// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types shared by the Fudge encoding engine.
//!
//! Variants fall into two groups: malformed wire input (`ReadFailed`,
//! `UnknownType`, `TruncatedPayload`, `BadHeader`, `InvalidData`) and caller
//! misuse detected before any bytes are written (`WriteFailed`,
//! `NameTooLong`, `TypeMismatch`, `UnknownTaxonomy`).

use std::fmt;

/// Error raised while encoding or decoding Fudge data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FudgeError {
    /// Writing past the end of the output buffer.
    WriteFailed { offset: usize, reason: String },
    /// Reading past the end of the input buffer.
    ReadFailed { offset: usize, reason: String },
    /// A type id with no entry in the wire-type catalogue.
    UnknownType { type_id: u8 },
    /// A variable-length payload whose declared length exceeds the buffer.
    TruncatedPayload {
        offset: usize,
        declared: usize,
        available: usize,
    },
    /// An envelope header that cannot frame a message.
    BadHeader { reason: String },
    /// Payload bytes that do not decode under the declared type.
    InvalidData { reason: String },
    /// A field name whose UTF-8 encoding exceeds 255 bytes.
    NameTooLong { length: usize },
    /// A value that does not match the wire type chosen for it.
    TypeMismatch {
        type_name: &'static str,
        reason: String,
    },
    /// A nonzero taxonomy id the resolver has no taxonomy for.
    UnknownTaxonomy { taxonomy_id: i16 },
}

impl fmt::Display for FudgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FudgeError::WriteFailed { offset, reason } => {
                write!(f, "write failed at offset {}: {}", offset, reason)
            }
            FudgeError::ReadFailed { offset, reason } => {
                write!(f, "read failed at offset {}: {}", offset, reason)
            }
            FudgeError::UnknownType { type_id } => {
                write!(f, "unknown field type id {}", type_id)
            }
            FudgeError::TruncatedPayload {
                offset,
                declared,
                available,
            } => write!(
                f,
                "truncated payload at offset {}: declared {} bytes, {} available",
                offset, declared, available
            ),
            FudgeError::BadHeader { reason } => write!(f, "bad envelope header: {}", reason),
            FudgeError::InvalidData { reason } => write!(f, "invalid data: {}", reason),
            FudgeError::NameTooLong { length } => {
                write!(f, "field name is {} bytes, limit is 255", length)
            }
            FudgeError::TypeMismatch { type_name, reason } => {
                write!(f, "value does not fit wire type {}: {}", type_name, reason)
            }
            FudgeError::UnknownTaxonomy { taxonomy_id } => {
                write!(f, "no taxonomy registered for id {}", taxonomy_id)
            }
        }
    }
}

impl std::error::Error for FudgeError {}

pub type FudgeResult<T> = core::result::Result<T, FudgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_variants() {
        let err = FudgeError::ReadFailed {
            offset: 4,
            reason: "unexpected end of buffer".into(),
        };
        assert_eq!(
            err.to_string(),
            "read failed at offset 4: unexpected end of buffer"
        );

        let err = FudgeError::UnknownType { type_id: 16 };
        assert_eq!(err.to_string(), "unknown field type id 16");

        let err = FudgeError::TruncatedPayload {
            offset: 10,
            declared: 300,
            available: 12,
        };
        assert_eq!(
            err.to_string(),
            "truncated payload at offset 10: declared 300 bytes, 12 available"
        );

        let err = FudgeError::NameTooLong { length: 300 };
        assert_eq!(err.to_string(), "field name is 300 bytes, limit is 255");

        let err = FudgeError::UnknownTaxonomy { taxonomy_id: 7 };
        assert_eq!(err.to_string(), "no taxonomy registered for id 7");
    }
}
