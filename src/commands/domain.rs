//! `privman domain`: manage the tracking-domain list.

use crate::{PrivmanContext, output};
use anyhow::Result;
use colored::Colorize;

/// Adds tracking domains, skipping duplicates.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or saved.
pub fn add(ctx: &PrivmanContext, domains: &[String]) -> Result<()> {
    let mut store = ctx.load_store()?;
    let mut added = 0usize;
    for domain in domains {
        if store.add_tracking_domain(domain) {
            added += 1;
        } else {
            output::info(&format!("Tracking domain already present: {domain}"));
        }
    }
    super::save_and_report(ctx, &store)?;
    output::success(&format!(
        "Added {added} tracking domain{}",
        if added == 1 { "" } else { "s" }
    ));
    Ok(())
}

/// Removes tracking domains.
///
/// # Errors
///
/// Returns an error if a domain is not present, or on load/save failure.
pub fn remove(ctx: &PrivmanContext, domains: &[String]) -> Result<()> {
    let mut store = ctx.load_store()?;
    for domain in domains {
        if !store.remove_tracking_domain(domain) {
            return Err(anyhow::anyhow!("No such tracking domain: {domain}"));
        }
    }
    super::save_and_report(ctx, &store)?;
    output::success(&format!(
        "Removed {} tracking domain{}",
        domains.len(),
        if domains.len() == 1 { "" } else { "s" }
    ));
    Ok(())
}

/// Lists tracking domains.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded.
pub fn list(ctx: &PrivmanContext) -> Result<()> {
    let store = ctx.load_store()?;
    let domains = store.tracking_domains();
    if domains.is_empty() {
        output::info("No tracking domains declared");
        return Ok(());
    }
    println!("{}", "Tracking domains:".bold());
    for domain in domains {
        println!("  {domain}");
    }
    Ok(())
}
