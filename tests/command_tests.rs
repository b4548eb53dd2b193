//! Workflow tests over the command layer, exercising the same code paths the
//! binary dispatches to.

mod common;

use anyhow::Result;
use common::TestSession;
use privman::{commands, document, summary};

#[test]
fn test_full_editing_workflow() -> Result<()> {
    let session = TestSession::new()?;
    let ctx = &session.ctx;

    commands::tracking::execute(ctx, true)?;
    commands::domain::add(ctx, &["tracker.example.com".to_string()])?;
    commands::data::add(ctx, "UserID", true, true, &["Analytics".to_string()])?;
    commands::data::add(ctx, "CrashData", false, false, &["AppFunctionality".to_string()])?;
    commands::api::add(ctx, "UserDefaults", &["CA92.1".to_string()])?;

    let store = ctx.load_store()?;
    let manifest = store.manifest();

    assert!(manifest.privacy_tracking);
    assert_eq!(manifest.tracking_domains, vec!["tracker.example.com"]);
    assert_eq!(manifest.collected_data_types.len(), 2);
    assert_eq!(manifest.accessed_api_types.len(), 1);
    assert!(!store.warnings().any());

    let categories = summary::summarize_categories(manifest);
    let tracking_names: Vec<_> = categories.tracking.iter().map(|c| c.display_name()).collect();
    assert_eq!(tracking_names, vec!["Identifiers"]);
    let linked_names: Vec<_> = categories.linked.iter().map(|c| c.display_name()).collect();
    assert_eq!(linked_names, vec!["Identifiers"]);
    let not_linked_names: Vec<_> = categories
        .not_linked
        .iter()
        .map(|c| c.display_name())
        .collect();
    assert_eq!(not_linked_names, vec!["Diagnostics"]);

    Ok(())
}

#[test]
fn test_mutations_rederive_warnings() -> Result<()> {
    let session = TestSession::new()?;
    let ctx = &session.ctx;

    // Tracking enabled with no tracking data types.
    commands::tracking::execute(ctx, true)?;
    let store = ctx.load_store()?;
    assert!(store.warnings().tracking_but_no_tracking_data_types);

    // Adding a tracking data type resolves it, but the empty purpose set
    // raises the purpose warning instead.
    commands::data::add(ctx, "DeviceID", true, true, &[])?;
    let store = ctx.load_store()?;
    let warnings = store.warnings();
    assert!(!warnings.tracking_but_no_tracking_data_types);
    assert!(warnings.data_type_purpose_required);
    assert_eq!(warnings.missing_purpose_count, 1);

    // Supplying a purpose clears the last warning.
    commands::data::set(
        ctx,
        "DeviceID",
        None,
        None,
        &["ThirdPartyAdvertising".to_string()],
        &[],
        false,
    )?;
    assert!(!ctx.load_store()?.warnings().any());

    Ok(())
}

#[test]
fn test_export_import_round_trip() -> Result<()> {
    let session = TestSession::new()?;
    let ctx = &session.ctx;

    commands::tracking::execute(ctx, true)?;
    commands::domain::add(
        ctx,
        &["a.example.com".to_string(), "b.example.com".to_string()],
    )?;
    commands::data::add(ctx, "Health", true, true, &["Analytics".to_string()])?;
    commands::data::add(ctx, "PreciseLocation", false, false, &["AppFunctionality".to_string()])?;
    commands::api::add(ctx, "FileTimestamp", &["C617.1".to_string(), "DDA9.1".to_string()])?;

    let exported = session.temp_dir.path().join("exported.xcprivacy");
    commands::export::execute(ctx, Some(&exported))?;

    let before = ctx.load_store()?.manifest().clone();
    commands::import::execute(ctx, &exported)?;
    let after = ctx.load_store()?.manifest().clone();

    assert_eq!(before, after);
    Ok(())
}

#[test]
fn test_import_then_export_preserves_foreign_manifest() -> Result<()> {
    // A manifest written by another tool, with keys in a different order and
    // a custom data type.
    let text = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>NSPrivacyCollectedDataTypes</key>
    <array>
        <dict>
            <key>NSPrivacyCollectedDataTypePurposes</key>
            <array>
                <string>NSPrivacyCollectedDataTypePurposeAppFunctionality</string>
            </array>
            <key>NSPrivacyCollectedDataType</key>
            <string>com.example.custom</string>
            <key>NSPrivacyCollectedDataTypeLinked</key>
            <true/>
        </dict>
    </array>
    <key>NSPrivacyTracking</key>
    <false/>
</dict>
</plist>
"#;
    let session = TestSession::new()?;
    let ctx = &session.ctx;

    let foreign = session.temp_dir.path().join("foreign.xcprivacy");
    std::fs::write(&foreign, text)?;
    commands::import::execute(ctx, &foreign)?;

    let store = ctx.load_store()?;
    let entry = store.data_type("com.example.custom").expect("custom type kept");
    assert!(entry.is_linked);
    assert!(!entry.is_tracking);
    assert_eq!(entry.purposes.len(), 1);

    let manifest = document::load(&ctx.manifest_path)?;
    assert_eq!(&manifest, store.manifest());
    Ok(())
}

#[test]
fn test_check_strict_reflects_state() -> Result<()> {
    let session = TestSession::new()?;
    let ctx = &session.ctx;

    assert!(commands::check::execute(ctx, true).is_ok());

    commands::domain::add(ctx, &["tracker.example.com".to_string()])?;
    assert!(commands::check::execute(ctx, false).is_ok());
    assert!(commands::check::execute(ctx, true).is_err());

    commands::tracking::execute(ctx, true)?;
    commands::data::add(ctx, "UserID", true, true, &["Analytics".to_string()])?;
    assert!(commands::check::execute(ctx, true).is_ok());
    Ok(())
}

#[test]
fn test_commands_require_manifest() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let ctx = privman::PrivmanContext::new_with_explicit_paths(
        temp_dir.path().join("PrivacyInfo.xcprivacy"),
        temp_dir.path().join("config"),
    )
    .unwrap();

    // No init: everything that loads the store must fail with a hint.
    let err = commands::check::execute(&ctx, false).unwrap_err();
    assert!(err.to_string().contains("privman init"));
    assert!(commands::tracking::execute(&ctx, true).is_err());
    assert!(commands::domain::list(&ctx).is_err());
}
