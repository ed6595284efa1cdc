// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Taxonomies: out-of-band name/ordinal dictionaries.
//!
//! A taxonomy is a bijection between field names and 16-bit ordinals.
//! During encoding a named field whose name the taxonomy knows is written
//! with the ordinal instead of the name; decoding with the same taxonomy
//! recovers the name. Storage is the caller's concern; the engine only
//! consumes these two traits.

mod map;

pub use map::{MapResolver, MapTaxonomy};

/// A name/ordinal bijection, immutable once constructed.
pub trait Taxonomy {
    /// Ordinal for a name, if the taxonomy maps it.
    fn get_ordinal(&self, name: &str) -> Option<i16>;

    /// Name for an ordinal, if the taxonomy maps it.
    fn get_name(&self, ordinal: i16) -> Option<&str>;
}

/// Maps a taxonomy id from an envelope header to a taxonomy.
pub trait TaxonomyResolver {
    /// The taxonomy registered for `taxonomy_id`, if any. Id 0 means
    /// "no taxonomy" and is never passed here.
    fn resolve(&self, taxonomy_id: i16) -> Option<&dyn Taxonomy>;
}
