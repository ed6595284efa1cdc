// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Map-backed taxonomy and resolver.

use std::collections::HashMap;

use super::{Taxonomy, TaxonomyResolver};

/// A taxonomy backed by a pair of hash maps.
///
/// Useful when taxonomies are generated dynamically or loaded from
/// storage.
#[derive(Debug, Clone, Default)]
pub struct MapTaxonomy {
    by_ordinal: HashMap<i16, String>,
    by_name: HashMap<String, i16>,
}

impl MapTaxonomy {
    /// Build a taxonomy from ordinal/name pairs.
    pub fn new(entries: impl IntoIterator<Item = (i16, impl Into<String>)>) -> Self {
        let mut by_ordinal = HashMap::new();
        let mut by_name = HashMap::new();
        for (ordinal, name) in entries {
            let name = name.into();
            by_name.insert(name.clone(), ordinal);
            by_ordinal.insert(ordinal, name);
        }
        MapTaxonomy {
            by_ordinal,
            by_name,
        }
    }

    pub fn len(&self) -> usize {
        self.by_ordinal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ordinal.is_empty()
    }
}

impl Taxonomy for MapTaxonomy {
    fn get_ordinal(&self, name: &str) -> Option<i16> {
        self.by_name.get(name).copied()
    }

    fn get_name(&self, ordinal: i16) -> Option<&str> {
        self.by_ordinal.get(&ordinal).map(String::as_str)
    }
}

/// A resolver holding all its taxonomies in memory, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    taxonomies: HashMap<i16, MapTaxonomy>,
}

impl MapResolver {
    pub fn new(taxonomies: impl IntoIterator<Item = (i16, MapTaxonomy)>) -> Self {
        MapResolver {
            taxonomies: taxonomies.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.taxonomies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taxonomies.is_empty()
    }
}

impl TaxonomyResolver for MapResolver {
    fn resolve(&self, taxonomy_id: i16) -> Option<&dyn Taxonomy> {
        self.taxonomies
            .get(&taxonomy_id)
            .map(|taxonomy| taxonomy as &dyn Taxonomy)
    }
}
