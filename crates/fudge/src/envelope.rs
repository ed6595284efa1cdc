// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The outermost frame of an encoded unit.
//!
//! Fixed 8-byte big-endian header:
//!
//! ```text
//! directives:u8  schema_version:u8  taxonomy_id:i16  total_size:i32
//! ```
//!
//! `total_size` counts the header itself and is recomputed from the
//! message on every encode, never stored. On decode it frames the message
//! slice; trailing bytes beyond it are left for the caller (stream
//! framing), a declared size the buffer cannot satisfy is an error.

use log::{debug, trace};

use crate::error::{FudgeError, FudgeResult};
use crate::message::Message;
use crate::ser::{Cursor, CursorMut};
use crate::taxonomy::{Taxonomy, TaxonomyResolver};

/// Size of the envelope header in bytes.
pub const HEADER_SIZE: usize = 8;

/// A message plus its framing metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Envelope {
    pub message: Message,
    /// Reserved/user flag byte.
    pub directives: u8,
    pub schema_version: u8,
    /// 0 means "no taxonomy".
    pub taxonomy_id: i16,
}

impl Envelope {
    pub fn new(message: Message) -> Envelope {
        Envelope {
            message,
            directives: 0,
            schema_version: 0,
            taxonomy_id: 0,
        }
    }

    pub fn with_taxonomy(message: Message, taxonomy_id: i16) -> Envelope {
        Envelope {
            message,
            directives: 0,
            schema_version: 0,
            taxonomy_id,
        }
    }

    /// Total encoded size, header included.
    pub fn size(&self, resolver: Option<&dyn TaxonomyResolver>) -> FudgeResult<usize> {
        let taxonomy = self.taxonomy(resolver)?;
        Ok(HEADER_SIZE + self.message.size(taxonomy)?)
    }

    /// Encode header and message into `cursor`.
    pub fn encode(
        &self,
        cursor: &mut CursorMut<'_>,
        resolver: Option<&dyn TaxonomyResolver>,
    ) -> FudgeResult<()> {
        let taxonomy = self.taxonomy(resolver)?;
        let total_size = HEADER_SIZE + self.message.size(taxonomy)?;
        let total_size = i32::try_from(total_size).map_err(|_| FudgeError::WriteFailed {
            offset: 0,
            reason: format!("message of {total_size} bytes exceeds the 32-bit envelope limit"),
        })?;
        trace!(
            "encoding envelope: {} fields, taxonomy id {}, {} bytes",
            self.message.len(),
            self.taxonomy_id,
            total_size
        );

        cursor.write_u8(self.directives)?;
        cursor.write_u8(self.schema_version)?;
        cursor.write_i16_be(self.taxonomy_id)?;
        cursor.write_i32_be(total_size)?;
        self.message.encode(cursor, taxonomy)
    }

    /// Encode into a freshly allocated, exactly sized buffer.
    pub fn to_bytes(&self, resolver: Option<&dyn TaxonomyResolver>) -> FudgeResult<Vec<u8>> {
        let mut buffer = vec![0u8; self.size(resolver)?];
        let mut cursor = CursorMut::new(&mut buffer);
        self.encode(&mut cursor, resolver)?;
        Ok(buffer)
    }

    /// Decode an envelope from the front of `encoded`.
    pub fn decode(
        encoded: &[u8],
        resolver: Option<&dyn TaxonomyResolver>,
    ) -> FudgeResult<Envelope> {
        if encoded.len() < HEADER_SIZE {
            debug!("envelope rejected: {} bytes, header needs 8", encoded.len());
            return Err(FudgeError::BadHeader {
                reason: format!("{} bytes, header needs {}", encoded.len(), HEADER_SIZE),
            });
        }
        let mut cursor = Cursor::new(encoded);
        let directives = cursor.read_u8()?;
        let schema_version = cursor.read_u8()?;
        let taxonomy_id = cursor.read_i16_be()?;
        let total_size = cursor.read_i32_be()?;

        if total_size < HEADER_SIZE as i32 {
            debug!("envelope rejected: declared total size {total_size}");
            return Err(FudgeError::BadHeader {
                reason: format!("declared total size {total_size} is below the header size"),
            });
        }
        let total_size = total_size as usize;
        if total_size > encoded.len() {
            debug!(
                "envelope rejected: declared {} bytes, {} available",
                total_size,
                encoded.len()
            );
            return Err(FudgeError::TruncatedPayload {
                offset: HEADER_SIZE,
                declared: total_size - HEADER_SIZE,
                available: encoded.len() - HEADER_SIZE,
            });
        }

        let taxonomy = resolve_taxonomy(taxonomy_id, resolver)?;
        let message = Message::decode(&encoded[HEADER_SIZE..total_size], taxonomy)?;
        trace!(
            "decoded envelope: {} fields, taxonomy id {}, {} bytes",
            message.len(),
            taxonomy_id,
            total_size
        );
        Ok(Envelope {
            message,
            directives,
            schema_version,
            taxonomy_id,
        })
    }

    fn taxonomy<'a>(
        &self,
        resolver: Option<&'a dyn TaxonomyResolver>,
    ) -> FudgeResult<Option<&'a dyn Taxonomy>> {
        resolve_taxonomy(self.taxonomy_id, resolver)
    }
}

/// Resolve a header taxonomy id. Id 0 (or no resolver) means encode and
/// decode without substitution; a resolver that does not know a nonzero id
/// is an error.
fn resolve_taxonomy(
    taxonomy_id: i16,
    resolver: Option<&dyn TaxonomyResolver>,
) -> FudgeResult<Option<&dyn Taxonomy>> {
    match resolver {
        Some(resolver) if taxonomy_id != 0 => resolver
            .resolve(taxonomy_id)
            .map(Some)
            .ok_or(FudgeError::UnknownTaxonomy { taxonomy_id }),
        _ => Ok(None),
    }
}
