//! `privman catalog`: list the known identifier catalogs.

use crate::catalog::{API_CATEGORIES, CollectionCategory, PURPOSES, short_key};
use anyhow::Result;
use colored::Colorize;

/// Lists all known collected-data-type keys, grouped by category.
///
/// # Errors
///
/// Infallible; returns `Result` for dispatch uniformity.
pub fn data_types() -> Result<()> {
    for category in CollectionCategory::ALL {
        println!("{}", category.display_name().bold());
        for &key in category.members() {
            println!("  {} ({key})", short_key(key));
        }
    }
    Ok(())
}

/// Lists the known collection-purpose keys.
///
/// # Errors
///
/// Infallible; returns `Result` for dispatch uniformity.
pub fn purposes() -> Result<()> {
    for &key in PURPOSES {
        println!("{} ({key})", short_key(key));
    }
    Ok(())
}

/// Lists the required-reason API categories with their valid reason codes.
///
/// # Errors
///
/// Infallible; returns `Result` for dispatch uniformity.
pub fn api_types() -> Result<()> {
    for category in API_CATEGORIES {
        println!("{} ({})", category.name.bold(), category.key);
        println!("  reasons: {}", category.reasons.join(", "));
    }
    Ok(())
}
