// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # Fudge - self-describing binary message encoding
//!
//! A pure Rust implementation of the Fudge wire format: hierarchical,
//! type-safe binary messages where every field carries its own type id and
//! optional name/ordinal metadata, so a message decodes without an external
//! schema. Name/ordinal *taxonomies* give schema-like compression on top.
//!
//! ## Quick Start
//!
//! ```rust
//! use fudge::{Envelope, Message};
//!
//! let mut address = Message::new();
//! address.add_ordinal(0, "123 Fake Street");
//! address.add_ordinal(1, "Some City");
//!
//! let mut message = Message::new();
//! message.add_named("name", "Random Person");
//! message.add_field(19801231i64, Some(4), Some("dob"), None);
//! message.add_named("address", address);
//!
//! let bytes = Envelope::new(message).to_bytes(None).unwrap();
//! let decoded = Envelope::decode(&bytes, None).unwrap();
//! assert_eq!(decoded.message.len(), 3);
//! ```
//!
//! ## Wire layout
//!
//! ```text
//! +---------------------------------------------------------------+
//! | Envelope header (8 bytes, big-endian)                         |
//! |   directives:u8 schema_version:u8 taxonomy_id:i16 size:i32    |
//! +---------------------------------------------------------------+
//! | Field*                                                        |
//! |   prefix:u8 type_id:u8 [ordinal:i16] [len:u8 name:utf8]       |
//! |   [value_len:u8|u16|u32] payload                              |
//! +---------------------------------------------------------------+
//! ```
//!
//! A sub-message is an ordinary field payload (type id 15), which is what
//! makes nesting unbounded.
//!
//! ## Modules Overview
//!
//! - [`message`] / [`envelope`] - build, encode and decode messages
//! - [`field`] - the per-field codec
//! - [`types`] / [`registry`] - the wire-type catalogue and narrowing
//! - [`taxonomy`] - name/ordinal dictionaries
//! - [`render`] - pretty printer and hex dump for decoded messages

/// The outer frame: header plus one message.
pub mod envelope;
/// Error types shared across the engine.
pub mod error;
/// One tagged unit of data and its codec.
pub mod field;
/// Ordered field sequences and the nesting structure.
pub mod message;
/// The one-byte field descriptor codec.
pub mod prefix;
/// Type inference, narrowing and payload dispatch.
pub mod registry;
/// Human-readable rendering of decoded messages.
pub mod render;
/// Bounds-checked big-endian cursors.
pub mod ser;
/// Name/ordinal taxonomies and their resolver seam.
pub mod taxonomy;
/// The closed catalogue of wire types.
pub mod types;
/// Tagged field values.
pub mod value;

pub use envelope::{Envelope, HEADER_SIZE};
pub use error::{FudgeError, FudgeResult};
pub use field::Field;
pub use message::Message;
pub use prefix::FieldPrefix;
pub use render::{HexPrinter, PrettyPrinter};
pub use ser::{Cursor, CursorMut};
pub use taxonomy::{MapResolver, MapTaxonomy, Taxonomy, TaxonomyResolver};
pub use types::FieldType;
pub use value::Value;
