//! `privman tracking`: set the App Tracking Transparency declaration.

use crate::{PrivmanContext, output};
use anyhow::Result;

/// Sets the tracking flag on the manifest.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or saved.
pub fn execute(ctx: &PrivmanContext, enabled: bool) -> Result<()> {
    let mut store = ctx.load_store()?;
    store.set_tracking(enabled);
    super::save_and_report(ctx, &store)?;

    if enabled {
        output::success("Tracking declared: data is used for tracking");
    } else {
        output::success("Tracking declaration removed: data is not used for tracking");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands;

    #[test]
    fn test_tracking_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = PrivmanContext::new_with_explicit_paths(
            dir.path().join("PrivacyInfo.xcprivacy"),
            dir.path().join("config"),
        )
        .unwrap();
        commands::init::execute(&ctx, false).unwrap();

        execute(&ctx, true).unwrap();
        assert!(ctx.load_store().unwrap().tracking());

        execute(&ctx, false).unwrap();
        assert!(!ctx.load_store().unwrap().tracking());
    }
}
