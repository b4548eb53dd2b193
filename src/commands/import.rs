//! `privman import`: replace the working manifest with another plist file.

use crate::store::ManifestStore;
use crate::{PrivmanContext, document, output};
use anyhow::Result;
use std::path::Path;

/// Parses the given plist file and replaces all working state with it.
///
/// # Errors
///
/// Returns an error if the source cannot be parsed or the manifest cannot be
/// written.
pub fn execute(ctx: &PrivmanContext, source: &Path) -> Result<()> {
    let manifest = document::load(source)?;
    let store = ManifestStore::from_manifest(manifest);

    super::save_and_report(ctx, &store)?;

    output::success(&format!(
        "Imported {} ({} data type{}, {} API declaration{}, {} tracking domain{})",
        source.display(),
        store.data_types().len(),
        plural(store.data_types().len()),
        store.api_reasons().len(),
        plural(store.api_reasons().len()),
        store.tracking_domains().len(),
        plural(store.tracking_domains().len()),
    ));
    Ok(())
}

/// Plural suffix helper for count messages.
fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
