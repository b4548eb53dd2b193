//! The privacy manifest data model.
//!
//! Field names map one-to-one onto the plist keys Apple expects in a
//! `PrivacyInfo.xcprivacy` document, so the structs serialize directly with
//! the `plist` crate. All entities are transient: they live for the duration
//! of a command invocation and are re-read from the manifest file each time.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A complete privacy manifest document.
///
/// The manifest is derived state: the working-state store reassembles it from
/// its keyed maps after every mutation, and it is what gets serialized on
/// export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivacyManifest {
    /// Whether the app or SDK uses data for tracking as defined under the
    /// App Tracking Transparency framework.
    #[serde(rename = "NSPrivacyTracking", default)]
    pub privacy_tracking: bool,

    /// Internet domains engaged in tracking.
    #[serde(rename = "NSPrivacyTrackingDomains", default)]
    pub tracking_domains: Vec<String>,

    /// Declared collected data types.
    #[serde(rename = "NSPrivacyCollectedDataTypes", default)]
    pub collected_data_types: Vec<CollectedDataType>,

    /// Declared required-reason API usage.
    #[serde(rename = "NSPrivacyAccessedAPITypes", default)]
    pub accessed_api_types: Vec<AccessedApiType>,
}

/// One declared collected data type with its linkage/tracking flags and
/// collection purposes.
///
/// An empty purpose set is legal but flagged by the validator; it is never
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedDataType {
    /// The `NSPrivacyCollectedDataType…` key identifying the data type.
    #[serde(rename = "NSPrivacyCollectedDataType")]
    pub type_key: String,

    /// Whether the data is linked to the user's identity.
    #[serde(rename = "NSPrivacyCollectedDataTypeLinked", default)]
    pub is_linked: bool,

    /// Whether the data is used for tracking.
    #[serde(rename = "NSPrivacyCollectedDataTypeTracking", default)]
    pub is_tracking: bool,

    /// Declared collection purposes (`NSPrivacyCollectedDataTypePurpose…`
    /// keys). Kept as a set: purposes are unordered and duplicates are
    /// meaningless.
    #[serde(rename = "NSPrivacyCollectedDataTypePurposes", default)]
    pub purposes: BTreeSet<String>,
}

impl CollectedDataType {
    /// Creates an entry for the given data-type key with no flags and no
    /// purposes.
    #[must_use]
    pub fn new(type_key: impl Into<String>) -> Self {
        Self {
            type_key: type_key.into(),
            ..Self::default()
        }
    }
}

/// One declared required-reason API category with its justification codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessedApiType {
    /// The `NSPrivacyAccessedAPICategory…` key.
    #[serde(rename = "NSPrivacyAccessedAPIType")]
    pub type_key: String,

    /// Declared reason codes (e.g. `CA92.1`).
    #[serde(rename = "NSPrivacyAccessedAPITypeReasons", default)]
    pub reasons: Vec<String>,
}

impl AccessedApiType {
    /// Creates an entry for the given API category key.
    #[must_use]
    pub fn new(type_key: impl Into<String>, reasons: Vec<String>) -> Self {
        Self {
            type_key: type_key.into(),
            reasons,
        }
    }
}
