//! `privman init`: create an empty privacy manifest file.

use crate::store::ManifestStore;
use crate::{PrivmanContext, output};
use anyhow::Result;
use colored::Colorize;

/// Creates a new, empty manifest at the context's manifest path.
///
/// # Errors
///
/// Returns an error if a manifest already exists (without `--force`) or the
/// file cannot be written.
pub fn execute(ctx: &PrivmanContext, force: bool) -> Result<()> {
    if ctx.manifest_exists() && !force {
        return Err(anyhow::anyhow!(
            "Privacy manifest already exists at {} (use --force to overwrite)",
            ctx.manifest_path.display()
        ));
    }

    ctx.save_store(&ManifestStore::new())?;

    output::success(&format!(
        "Created privacy manifest at {}",
        ctx.manifest_path.display()
    ));
    if output::get_verbosity() != output::Verbosity::Quiet {
        eprintln!("\n{}", "Quick start:".bold());
        eprintln!("  privman tracking on                        # Declare tracking");
        eprintln!("  privman data add UserID --linked --purpose Analytics");
        eprintln!("  privman api add UserDefaults --reason CA92.1");
        eprintln!("  privman summary                            # Privacy-label preview");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_ctx() -> (tempfile::TempDir, PrivmanContext) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = PrivmanContext::new_with_explicit_paths(
            dir.path().join("PrivacyInfo.xcprivacy"),
            dir.path().join("config"),
        )
        .unwrap();
        (dir, ctx)
    }

    #[test]
    fn test_init_creates_empty_manifest() {
        let (_dir, ctx) = test_ctx();
        execute(&ctx, false).unwrap();

        let store = ctx.load_store().unwrap();
        assert!(!store.tracking());
        assert!(store.data_types().is_empty());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let (_dir, ctx) = test_ctx();
        execute(&ctx, false).unwrap();
        assert!(execute(&ctx, false).is_err());
        assert!(execute(&ctx, true).is_ok());
    }
}
