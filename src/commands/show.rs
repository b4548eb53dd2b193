//! `privman show`: dump the full manifest state.

use crate::{PrivmanContext, catalog, output};
use anyhow::Result;
use colored::Colorize;

/// Prints the complete working state of the manifest.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded.
pub fn execute(ctx: &PrivmanContext) -> Result<()> {
    let store = ctx.load_store()?;

    println!(
        "{} {}",
        "Manifest:".bold(),
        ctx.manifest_path.display()
    );
    println!(
        "{} {}",
        "Tracking:".bold(),
        if store.tracking() { "yes" } else { "no" }
    );

    println!("{}", "Tracking domains:".bold());
    if store.tracking_domains().is_empty() {
        println!("  (none)");
    }
    for domain in store.tracking_domains() {
        println!("  {domain}");
    }

    println!("{}", "Collected data types:".bold());
    if store.data_types().is_empty() {
        println!("  (none)");
    }
    for (key, entry) in store.data_types() {
        println!(
            "  {} linked={} tracking={}",
            catalog::short_key(key),
            entry.is_linked,
            entry.is_tracking
        );
        for purpose in &entry.purposes {
            println!("    {}", catalog::short_key(purpose));
        }
    }

    println!("{}", "Required-reason APIs:".bold());
    if store.api_reasons().is_empty() {
        println!("  (none)");
    }
    for (key, reasons) in store.api_reasons() {
        println!("  {}: {}", catalog::short_key(key), reasons.join(", "));
    }

    super::report_warnings(&store);
    let warnings = store.warnings();
    if !warnings.any() {
        output::info("No warnings");
    }

    Ok(())
}
