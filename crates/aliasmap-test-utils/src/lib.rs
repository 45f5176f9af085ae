//! Testing utilities for aliasmap workspace
//!
//! Shared test helpers and fixtures.

#![allow(missing_docs)]

use aliasmap_path::{AliasPair, DiscoveredPair, OriginalKey};

pub fn keys(keys: &[&str]) -> Vec<OriginalKey> {
    keys.iter().map(|key| OriginalKey::new(*key)).collect()
}

/// Panics on an empty pattern; fixtures are expected to be valid.
pub fn aliases(pairs: &[(&str, &str)]) -> Vec<AliasPair> {
    pairs
        .iter()
        .map(|(pattern, replacement)| AliasPair::new(*pattern, *replacement).unwrap())
        .collect()
}

pub fn pairs_of(pairs: &[DiscoveredPair]) -> Vec<(&str, &str)> {
    pairs
        .iter()
        .map(|pair| (pair.expanded_key(), pair.original_value()))
        .collect()
}

pub fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}

/// Keys of the form `ns{i}.mod{j}.fn{k}`, `width` values per level
pub fn synthetic_keys(width: usize) -> Vec<OriginalKey> {
    let mut keys = Vec::with_capacity(width * width * width);
    for i in 0..width {
        for j in 0..width {
            for k in 0..width {
                keys.push(OriginalKey::new(format!("ns{i}.mod{j}.fn{k}")));
            }
        }
    }
    keys
}

/// Aliases renaming each `ns{i}` and `mod{j}` segment of [`synthetic_keys`]
pub fn synthetic_aliases(width: usize) -> Vec<AliasPair> {
    let namespaces = (0..width).map(|i| (format!("ns{i}"), format!("alias_ns{i}")));
    let modules = (0..width).map(|j| (format!(".mod{j}."), format!(".alias_mod{j}.")));
    namespaces
        .chain(modules)
        .map(|(pattern, replacement)| AliasPair::new(pattern, replacement).unwrap())
        .collect()
}
