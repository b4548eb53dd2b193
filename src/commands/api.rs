//! `privman api`: manage required-reason API declarations.

use crate::{PrivmanContext, catalog, output};
use anyhow::Result;
use colored::Colorize;

/// Declares an accessed-API category with its reason codes, replacing any
/// previous declaration for the same category.
///
/// # Errors
///
/// Returns an error on load/save failure, or for unknown keys when
/// `catalog.allow_unknown` is off.
pub fn add(ctx: &PrivmanContext, api_type: &str, reasons: &[String]) -> Result<()> {
    let key = super::resolve_api_key(ctx, api_type)?;

    if let Some(category) = catalog::api_category(&key) {
        for reason in reasons {
            if !category.reasons.contains(&reason.as_str()) {
                if !ctx.config.catalog.allow_unknown {
                    return Err(anyhow::anyhow!(
                        "'{reason}' is not a valid reason for {} (expected one of: {})",
                        category.name,
                        category.reasons.join(", ")
                    ));
                }
                output::warning(&format!(
                    "'{reason}' is not a documented reason for {}",
                    category.name
                ));
            }
        }
    }

    let mut store = ctx.load_store()?;
    let created = store.set_api_reasons(&key, reasons.to_vec());
    super::save_and_report(ctx, &store)?;

    if created {
        output::success(&format!("Declared required-reason API {key}"));
    } else {
        output::success(&format!("Updated required-reason API {key}"));
    }
    Ok(())
}

/// Removes an accessed-API declaration.
///
/// # Errors
///
/// Returns an error if the declaration does not exist, or on load/save
/// failure.
pub fn remove(ctx: &PrivmanContext, api_type: &str) -> Result<()> {
    let key = super::resolve_api_key(ctx, api_type)?;

    let mut store = ctx.load_store()?;
    if store.remove_api_type(&key).is_none() {
        return Err(anyhow::anyhow!("No required-reason API {key} declared"));
    }
    super::save_and_report(ctx, &store)?;
    output::success(&format!("Removed required-reason API {key}"));
    Ok(())
}

/// Lists declared accessed-API categories with their reasons.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded.
pub fn list(ctx: &PrivmanContext) -> Result<()> {
    let store = ctx.load_store()?;
    if store.api_reasons().is_empty() {
        output::info("No required-reason APIs declared");
        return Ok(());
    }

    println!("{}", "Required-reason APIs:".bold());
    for (key, reasons) in store.api_reasons() {
        let name = catalog::api_category(key).map_or_else(|| catalog::short_key(key), |c| c.name);
        println!("  {}", name.bold());
        if reasons.is_empty() {
            println!("    {}", "no reasons".yellow());
        } else {
            println!("    reasons: {}", reasons.join(", "));
        }
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
    fn test_add_resolves_shorthand_and_persists() {
        let (_dir, ctx) = test_ctx();
        add(&ctx, "UserDefaults", &["CA92.1".to_string()]).unwrap();

        let store = ctx.load_store().unwrap();
        assert_eq!(
            store.api_reasons()["NSPrivacyAccessedAPICategoryUserDefaults"],
            vec!["CA92.1".to_string()]
        );
    }

    #[test]
    fn test_add_replaces_reasons() {
        let (_dir, ctx) = test_ctx();
        add(&ctx, "UserDefaults", &["CA92.1".to_string()]).unwrap();
        add(&ctx, "UserDefaults", &["1C8F.1".to_string()]).unwrap();

        let store = ctx.load_store().unwrap();
        assert_eq!(
            store.api_reasons()["NSPrivacyAccessedAPICategoryUserDefaults"],
            vec!["1C8F.1".to_string()]
        );
    }

    #[test]
    fn test_invalid_reason_rejected_in_strict_catalog_mode() {
        let (_dir, mut ctx) = test_ctx();
        ctx.config.catalog.allow_unknown = false;
        assert!(add(&ctx, "UserDefaults", &["ZZZZ.9".to_string()]).is_err());
    }

    #[test]
    fn test_remove() {
        let (_dir, ctx) = test_ctx();
        add(&ctx, "DiskSpace", &["85F4.1".to_string()]).unwrap();
        remove(&ctx, "DiskSpace").unwrap();
        assert!(ctx.load_store().unwrap().api_reasons().is_empty());
        assert!(remove(&ctx, "DiskSpace").is_err());
    }
}
