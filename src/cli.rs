//! Command-line interface definitions for privman.
//!
//! This module contains all CLI argument parsing structures using clap's
//! derive macros. The definitions are shared between the main binary and
//! build tools (like xtask) for man page generation.
//!
//! Note: Field-level documentation is provided via clap attributes, so we
//! allow missing_docs for this module to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for privman.
#[derive(Parser)]
#[command(
    name = "privman",
    version = crate::VERSION,
    about = "Editor for Apple privacy manifest files",
    long_about = "Edit PrivacyInfo.xcprivacy files from the command line: tracking \
                  declarations, collected data types, required-reason API justifications, \
                  privacy-label summaries and consistency checks"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Privacy manifest file to edit
    #[arg(
        short,
        long,
        global = true,
        env = "PRIVMAN_MANIFEST",
        help = "Path to the manifest file (default: PrivacyInfo.xcprivacy)"
    )]
    pub file: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// On/off switch for the tracking declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TrackingToggle {
    /// The app or SDK uses data for tracking.
    On,
    /// The app or SDK does not use data for tracking.
    Off,
}

/// All available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new, empty privacy manifest file
    Init {
        /// Overwrite an existing manifest
        #[arg(long)]
        force: bool,
    },

    /// Declare whether data is used for tracking
    Tracking {
        /// Tracking state
        #[arg(value_enum)]
        state: TrackingToggle,
    },

    /// Manage tracking domains
    Domain {
        #[command(subcommand)]
        action: DomainAction,
    },

    /// Manage collected data types
    Data {
        #[command(subcommand)]
        action: DataAction,
    },

    /// Manage required-reason API declarations
    Api {
        #[command(subcommand)]
        action: ApiAction,
    },

    /// Run consistency checks and print advisory warnings
    Check {
        /// Exit nonzero when any warning fires
        #[arg(long)]
        strict: bool,
    },

    /// Show the privacy-label style summary
    Summary,

    /// Show the full manifest state
    Show,

    /// Replace the manifest with the contents of another plist file
    Import {
        /// Plist file to import
        path: PathBuf,
    },

    /// Write the manifest as XML plist text
    Export {
        /// Output file (stdout when omitted)
        path: Option<PathBuf>,
    },

    /// List the known identifier catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Get and set tool options
    Config {
        /// Configuration key
        key: Option<String>,

        /// Configuration value to set
        value: Option<String>,

        /// Unset the configuration key
        #[arg(long)]
        unset: bool,

        /// List all configuration values
        #[arg(short, long)]
        list: bool,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum DomainAction {
    /// Add tracking domains
    Add {
        /// Domains to add
        #[arg(required = true)]
        domains: Vec<String>,
    },

    /// Remove tracking domains
    Remove {
        /// Domains to remove
        #[arg(required = true)]
        domains: Vec<String>,
    },

    /// List tracking domains
    List,
}

#[derive(Subcommand)]
pub enum DataAction {
    /// Add or replace a collected data type
    Add {
        /// Data type key or shorthand (e.g. Health)
        data_type: String,

        /// Data is linked to the user's identity
        #[arg(long)]
        linked: bool,

        /// Data is used for tracking
        #[arg(long)]
        tracking: bool,

        /// Collection purposes (e.g. Analytics, AppFunctionality)
        #[arg(short, long = "purpose")]
        purposes: Vec<String>,
    },

    /// Edit an existing collected data type
    Set {
        /// Data type key or shorthand
        data_type: String,

        /// Set the linked flag
        #[arg(long)]
        linked: Option<bool>,

        /// Set the tracking flag
        #[arg(long)]
        tracking: Option<bool>,

        /// Purposes to add
        #[arg(long = "add-purpose")]
        add_purposes: Vec<String>,

        /// Purposes to remove
        #[arg(long = "remove-purpose")]
        remove_purposes: Vec<String>,

        /// Remove all purposes
        #[arg(long, conflicts_with_all = ["add_purposes", "remove_purposes"])]
        clear_purposes: bool,
    },

    /// Remove a collected data type
    Remove {
        /// Data type key or shorthand
        data_type: String,
    },

    /// List declared collected data types
    List,
}

#[derive(Subcommand)]
pub enum ApiAction {
    /// Declare a required-reason API category with its reason codes
    Add {
        /// API category key or shorthand (e.g. UserDefaults)
        api_type: String,

        /// Reason codes (e.g. CA92.1)
        #[arg(short, long = "reason", required = true)]
        reasons: Vec<String>,
    },

    /// Remove a required-reason API declaration
    Remove {
        /// API category key or shorthand
        api_type: String,
    },

    /// List declared required-reason APIs
    List,
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List the known collected-data-type keys, grouped by category
    DataTypes,

    /// List the known collection-purpose keys
    Purposes,

    /// List the required-reason API categories and their reason codes
    ApiTypes,
}
