//! Reading and writing privacy manifest documents as XML property lists.
//!
//! This is the only place where hard failures happen: file I/O and plist
//! encode/decode errors propagate with context. Saves go through a temporary
//! file in the target directory so a failed write never truncates an
//! existing manifest.

use crate::manifest::PrivacyManifest;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Parses a manifest from a plist file (XML or binary).
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid privacy
/// manifest property list.
pub fn load(path: &Path) -> Result<PrivacyManifest> {
    debug!(path = %path.display(), "load manifest");
    plist::from_file(path)
        .with_context(|| format!("Failed to read privacy manifest: {}", path.display()))
}

/// Serializes a manifest to XML plist text.
///
/// # Errors
///
/// Returns an error if plist encoding fails.
pub fn to_xml_string(manifest: &PrivacyManifest) -> Result<String> {
    let mut buffer = Vec::new();
    plist::to_writer_xml(&mut buffer, manifest).context("Failed to encode property list")?;
    let mut text = String::from_utf8(buffer).context("Property list output was not UTF-8")?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// Writes a manifest to the given path as XML plist, atomically.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn save(path: &Path, manifest: &PrivacyManifest) -> Result<()> {
    debug!(path = %path.display(), "save manifest");
    let text = to_xml_string(manifest)?;

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut temp = match dir {
        Some(dir) => tempfile::NamedTempFile::new_in(dir),
        None => tempfile::NamedTempFile::new_in("."),
    }
    .context("Failed to create temporary file for manifest")?;

    temp.write_all(text.as_bytes())
        .context("Failed to write manifest")?;
    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to save privacy manifest: {}", path.display()))?;
    Ok(())
}

/// Parses a manifest from XML plist text.
///
/// # Errors
///
/// Returns an error if the text is not a valid privacy manifest plist.
pub fn from_xml_str(text: &str) -> Result<PrivacyManifest> {
    plist::from_bytes(text.as_bytes()).context("Failed to parse property list")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{AccessedApiType, CollectedDataType};

    fn sample_manifest() -> PrivacyManifest {
        let mut health = CollectedDataType::new("NSPrivacyCollectedDataTypeHealth");
        health.is_linked = true;
        health.is_tracking = true;
        health
            .purposes
            .insert("NSPrivacyCollectedDataTypePurposeAnalytics".to_string());

        PrivacyManifest {
            privacy_tracking: true,
            tracking_domains: vec!["tracker.example.com".to_string()],
            collected_data_types: vec![health],
            accessed_api_types: vec![AccessedApiType::new(
                "NSPrivacyAccessedAPICategoryUserDefaults",
                vec!["CA92.1".to_string()],
            )],
        }
    }

    #[test]
    fn test_xml_round_trip() {
        let manifest = sample_manifest();
        let text = to_xml_string(&manifest).unwrap();
        assert!(text.contains("NSPrivacyTracking"));
        assert!(text.contains("tracker.example.com"));

        let parsed = from_xml_str(&text).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PrivacyInfo.xcprivacy");

        let manifest = sample_manifest();
        save(&path, &manifest).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PrivacyInfo.xcprivacy");

        save(&path, &sample_manifest()).unwrap();
        save(&path, &PrivacyManifest::default()).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, PrivacyManifest::default());
    }

    #[test]
    fn test_missing_keys_default_on_load() {
        let text = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>NSPrivacyTracking</key>
    <false/>
</dict>
</plist>
"#;
        let parsed = from_xml_str(text).unwrap();
        assert!(!parsed.privacy_tracking);
        assert!(parsed.collected_data_types.is_empty());
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xcprivacy");
        std::fs::write(&path, "not a plist").unwrap();
        assert!(load(&path).is_err());
    }
}
