use anyhow::Result;
use privman::{DEFAULT_MANIFEST_FILE, PrivmanContext};
use tempfile::TempDir;

#[test]
fn test_context_new_with_explicit_paths() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let manifest_path = temp_dir.path().join("PrivacyInfo.xcprivacy");
    let config_path = temp_dir.path().join("config");

    let ctx = PrivmanContext::new_with_explicit_paths(manifest_path.clone(), config_path.clone())?;

    assert_eq!(ctx.manifest_path, manifest_path);
    assert_eq!(ctx.config_path, config_path);
    assert!(config_path.exists());

    Ok(())
}

#[test]
fn test_manifest_existence_check() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let ctx = PrivmanContext::new_with_explicit_paths(
        temp_dir.path().join(DEFAULT_MANIFEST_FILE),
        temp_dir.path().join("config"),
    )?;

    assert!(!ctx.manifest_exists());
    assert!(ctx.check_manifest_exists().is_err());
    assert!(ctx.load_store().is_err());

    privman::commands::init::execute(&ctx, false)?;
    assert!(ctx.manifest_exists());
    assert!(ctx.check_manifest_exists().is_ok());

    Ok(())
}

#[test]
fn test_store_save_load_cycle() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let ctx = PrivmanContext::new_with_explicit_paths(
        temp_dir.path().join(DEFAULT_MANIFEST_FILE),
        temp_dir.path().join("config"),
    )?;

    let mut store = privman::store::ManifestStore::new();
    store.set_tracking(true);
    store.add_tracking_domain("tracker.example.com");
    ctx.save_store(&store)?;

    let loaded = ctx.load_store()?;
    assert_eq!(loaded.manifest(), store.manifest());

    Ok(())
}
