//! `privman export`: emit the manifest as XML plist text.

use crate::{PrivmanContext, document, output};
use anyhow::Result;
use std::path::Path;

/// Serializes the manifest to XML plist, writing to the given path or to
/// stdout when none is given. Stdout output carries no styling so it can be
/// piped straight into a file or the system clipboard tool.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded, encoding fails, or the
/// output file cannot be written.
pub fn execute(ctx: &PrivmanContext, path: Option<&Path>) -> Result<()> {
    let store = ctx.load_store()?;

    match path {
        Some(path) => {
            document::save(path, store.manifest())?;
            output::success(&format!("Exported manifest to {}", path.display()));
        }
        None => {
            let text = document::to_xml_string(store.manifest())?;
            print!("{text}");
        }
    }
    Ok(())
}
