// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Human-readable rendering of decoded messages.
//!
//! Read-only consumers of the field tree: a column-aligned pretty printer
//! and a plain hex dump. Neither participates in encoding.

mod hexdump;
mod pretty;

pub use hexdump::HexPrinter;
pub use pretty::PrettyPrinter;
