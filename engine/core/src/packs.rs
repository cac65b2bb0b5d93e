//! Bundled Pack Data
//!
//! A representative slice of the icon packs the browser ships with, embedded
//! as JSON at compile time and parsed once into a [`Catalog`]. The host can
//! supply its own catalog instead; nothing in the engine depends on this
//! particular data set.

use crate::catalog::{Catalog, CatalogError, IconEntry};

const PACK_DATA: &str = include_str!("../data/packs.json");

/// Parse the bundled pack data into icon entries, in declaration order.
///
/// # Errors
///
/// Returns [`CatalogError::Data`] when the embedded JSON is malformed.
pub fn builtin_entries() -> Result<Vec<IconEntry>, CatalogError> {
    let entries: Vec<IconEntry> = serde_json::from_str(PACK_DATA)?;
    Ok(entries)
}

/// Build the catalog over the bundled pack data.
///
/// # Errors
///
/// Returns a [`CatalogError`] when the embedded data is malformed or would
/// produce an empty catalog.
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(builtin_entries()?)
}
