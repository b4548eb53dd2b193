#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # Privman - Privacy Manifest Editor
//!
//! Privman is a command-line editor for Apple privacy manifest files
//! (`PrivacyInfo.xcprivacy`). It toggles the tracking declaration, edits
//! tracking domains, collected data types and required-reason API
//! justifications, derives the App Store privacy-label summary, and flags
//! inconsistencies as advisory warnings.
//!
//! ## Architecture
//!
//! - [`manifest`]: the privacy manifest data model, mapped onto plist keys
//! - [`store`]: working-state store; keyed maps that reassemble the derived
//!   manifest on every mutation
//! - [`validate`]: advisory consistency rules over the current manifest
//! - [`summary`]: projection into tracking / linked / not-linked category
//!   groups and the required-reason API roll-up
//! - [`catalog`]: static tables of Apple's fixed identifiers
//! - [`document`]: plist import and export
//! - [`commands`]: CLI command implementations
//! - [`config`]: tool configuration
//! - [`output`]: output styling and verbosity
//!
//! ## Example Usage
//!
//! ```no_run
//! use privman::PrivmanContext;
//! use privman::manifest::CollectedDataType;
//!
//! # fn main() -> anyhow::Result<()> {
//! let ctx = PrivmanContext::new(None)?;
//! let mut store = ctx.load_store()?;
//! store.set_tracking(true);
//! store.upsert_data_type(CollectedDataType::new("NSPrivacyCollectedDataTypeUserID"));
//! ctx.save_store(&store)?;
//! # Ok(())
//! # }
//! ```

/// Static catalogs of Apple's fixed privacy identifiers.
pub mod catalog;

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// Commands module containing all CLI command implementations.
pub mod commands;

/// Configuration parsing and management.
pub mod config;

/// Plist import and export for manifest documents.
pub mod document;

/// The privacy manifest data model.
pub mod manifest;

/// Output formatting and verbosity control.
pub mod output;

/// Working-state store for edit sessions.
pub mod store;

/// Summary projection into privacy-label category groups.
pub mod summary;

/// Advisory consistency checks.
pub mod validate;

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Current version of the privman binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default privacy manifest file name, as Xcode expects it.
pub const DEFAULT_MANIFEST_FILE: &str = "PrivacyInfo.xcprivacy";

/// Default configuration file path relative to the home directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/privman/config";

/// Central context for all privman operations: which manifest file is being
/// edited and which configuration applies.
#[derive(Debug, Clone)]
pub struct PrivmanContext {
    /// Path to the privacy manifest file being edited.
    pub manifest_path: PathBuf,

    /// Path to the configuration file.
    pub config_path: PathBuf,

    /// Loaded configuration settings.
    pub config: config::Config,
}

impl PrivmanContext {
    /// Creates a context for the given manifest path (or the default
    /// `PrivacyInfo.xcprivacy` in the current directory), loading
    /// configuration from `PRIVMAN_CONFIG_PATH` or the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or the
    /// configuration cannot be read or created.
    pub fn new(manifest_path: Option<PathBuf>) -> Result<Self> {
        let config_path = if let Ok(path) = std::env::var("PRIVMAN_CONFIG_PATH") {
            PathBuf::from(path)
        } else {
            let home = dirs::home_dir().context("Could not find home directory")?;
            home.join(DEFAULT_CONFIG_PATH)
        };

        let config = config::Config::load(&config_path)?;

        Ok(Self {
            manifest_path: manifest_path.unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST_FILE)),
            config_path,
            config,
        })
    }

    /// Creates a context with explicit paths, for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or created.
    pub fn new_with_explicit_paths(manifest_path: PathBuf, config_path: PathBuf) -> Result<Self> {
        let config = config::Config::load(&config_path)?;
        Ok(Self {
            manifest_path,
            config_path,
            config,
        })
    }

    /// Whether the manifest file exists.
    #[must_use]
    pub fn manifest_exists(&self) -> bool {
        self.manifest_path.exists()
    }

    /// Checks that the manifest file exists, returning an error if not.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest file does not exist.
    pub fn check_manifest_exists(&self) -> Result<()> {
        if !self.manifest_exists() {
            return Err(anyhow::anyhow!(
                "No privacy manifest found at {}. Did you run 'privman init'?",
                self.manifest_path.display()
            ));
        }
        Ok(())
    }

    /// Loads the manifest file into a working-state store.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest file is missing or unreadable.
    pub fn load_store(&self) -> Result<store::ManifestStore> {
        self.check_manifest_exists()?;
        let manifest = document::load(&self.manifest_path)?;
        Ok(store::ManifestStore::from_manifest(manifest))
    }

    /// Writes the store's derived manifest back to the manifest file.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn save_store(&self, store: &store::ManifestStore) -> Result<()> {
        document::save(&self.manifest_path, store.manifest())
    }
}
