//! CLI command implementations.
//!
//! Every mutating command follows the same shape: load the store from the
//! manifest file, apply the mutation, save, then print whatever advisory
//! warnings the new state produces. Warnings never block a save.

pub mod api;
pub mod catalog;
pub mod check;
pub mod config;
pub mod data;
pub mod domain;
pub mod export;
pub mod import;
pub mod init;
pub mod show;
pub mod summary;
pub mod tracking;

use crate::PrivmanContext;
use crate::output;
use crate::store::ManifestStore;
use anyhow::Result;

/// Saves the store back to the manifest file and prints advisory warnings
/// for the resulting state.
///
/// # Errors
///
/// Returns an error if the manifest cannot be written.
pub(crate) fn save_and_report(ctx: &PrivmanContext, store: &ManifestStore) -> Result<()> {
    ctx.save_store(store)?;
    report_warnings(store);
    Ok(())
}

/// Prints the advisory warnings for the store's current state, if any.
pub(crate) fn report_warnings(store: &ManifestStore) {
    for message in store.warnings().messages() {
        output::warning(&message);
    }
}

/// Resolves a user-supplied data-type key against the catalog. Known
/// shorthand is canonicalized; unknown keys pass through with a warning, or
/// are rejected when `catalog.allow_unknown` is off.
pub(crate) fn resolve_data_type_key(ctx: &PrivmanContext, input: &str) -> Result<String> {
    if let Some(key) = crate::catalog::resolve_data_type(input) {
        return Ok(key.to_string());
    }
    unknown_key(ctx, "data type", input)?;
    Ok(input.to_string())
}

/// Resolves a user-supplied purpose key against the catalog.
pub(crate) fn resolve_purpose_key(ctx: &PrivmanContext, input: &str) -> Result<String> {
    if let Some(key) = crate::catalog::resolve_purpose(input) {
        return Ok(key.to_string());
    }
    unknown_key(ctx, "purpose", input)?;
    Ok(input.to_string())
}

/// Resolves a user-supplied accessed-API key against the catalog.
pub(crate) fn resolve_api_key(ctx: &PrivmanContext, input: &str) -> Result<String> {
    if let Some(category) = crate::catalog::resolve_api_type(input) {
        return Ok(category.key.to_string());
    }
    unknown_key(ctx, "API category", input)?;
    Ok(input.to_string())
}

/// Warns about or rejects a key missing from the catalog, per configuration.
fn unknown_key(ctx: &PrivmanContext, kind: &str, input: &str) -> Result<()> {
    if !ctx.config.catalog.allow_unknown {
        return Err(anyhow::anyhow!(
            "Unknown {kind} '{input}' (catalog.allow_unknown is off)"
        ));
    }
    output::warning(&format!("'{input}' is not a known {kind}; keeping it as-is"));
    Ok(())
}
