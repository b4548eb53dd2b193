//! `privman check`: run the consistency rules and report warnings.

use crate::{PrivmanContext, output};
use anyhow::Result;

/// Validates the manifest and prints advisory warnings.
///
/// With `--strict` (or `check.strict` in config) the command fails when any
/// warning fires, for use in CI. The manifest itself is never rejected.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded, or in strict mode when
/// warnings are present.
pub fn execute(ctx: &PrivmanContext, strict: bool) -> Result<()> {
    let store = ctx.load_store()?;
    let warnings = store.warnings();

    if !warnings.any() {
        output::success("No issues found");
        return Ok(());
    }

    for message in warnings.messages() {
        output::warning(&message);
    }

    if strict || ctx.config.check.strict {
        return Err(anyhow::anyhow!(
            "{} warning{} found",
            warnings.count(),
            if warnings.count() == 1 { "" } else { "s" }
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands;

    fn test_ctx() -> (tempfile::TempDir, PrivmanContext) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = PrivmanContext::new_with_explicit_paths(
            dir.path().join("PrivacyInfo.xcprivacy"),
            dir.path().join("config"),
        )
        .unwrap();
        commands::init::execute(&ctx, false).unwrap();
        (dir, ctx)
    }

    #[test]
    fn test_clean_manifest_passes_strict() {
        let (_dir, ctx) = test_ctx();
        assert!(execute(&ctx, true).is_ok());
    }

    #[test]
    fn test_warnings_fail_only_in_strict_mode() {
        let (_dir, ctx) = test_ctx();
        commands::tracking::execute(&ctx, true).unwrap();

        assert!(execute(&ctx, false).is_ok());
        assert!(execute(&ctx, true).is_err());
    }

    #[test]
    fn test_config_strict_applies_without_flag() {
        let (_dir, mut ctx) = test_ctx();
        commands::tracking::execute(&ctx, true).unwrap();

        ctx.config.check.strict = true;
        assert!(execute(&ctx, false).is_err());
    }
}
