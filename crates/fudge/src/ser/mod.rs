// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Primitive serialization layer: bounds-checked big-endian cursors.
//!
//! Fudge is big-endian on the wire throughout (header, ordinals, lengths,
//! numeric payloads). Nothing in this module knows about fields or
//! messages.

pub mod cursor;

pub use cursor::{Cursor, CursorMut};
