use anyhow::Result;
use privman::{PrivmanContext, commands};
use tempfile::TempDir;

/// Test fixture: a temp directory holding a manifest and a config file.
pub struct TestSession {
    pub temp_dir: TempDir,
    pub ctx: PrivmanContext,
}

impl TestSession {
    /// Create a session with an initialized, empty manifest.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let ctx = PrivmanContext::new_with_explicit_paths(
            temp_dir.path().join("PrivacyInfo.xcprivacy"),
            temp_dir.path().join("config"),
        )?;
        commands::init::execute(&ctx, false)?;
        Ok(Self { temp_dir, ctx })
    }
}
