//! Advisory consistency checks over a privacy manifest.
//!
//! Every rule produces a warning, never a hard error: a manifest with
//! inconsistent tracking declarations is still a manifest the user can save
//! and export. The snapshot is recomputed from scratch on every call; there
//! is no incremental state.

use crate::manifest::PrivacyManifest;

/// Result of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warnings {
    /// Tracking is enabled but no data type is marked for tracking.
    pub tracking_but_no_tracking_data_types: bool,
    /// Tracking is disabled but at least one data type is marked for
    /// tracking. Mutually exclusive with the previous flag.
    pub not_tracking_but_tracking_data_types: bool,
    /// Tracking is disabled but tracking domains have been declared.
    pub not_tracking_but_tracking_domains: bool,
    /// At least one data type has no collection purpose.
    pub data_type_purpose_required: bool,
    /// Exact number of data types with an empty purpose set.
    pub missing_purpose_count: usize,
}

impl Warnings {
    /// Whether any warning fired.
    #[must_use]
    pub fn any(&self) -> bool {
        self.tracking_but_no_tracking_data_types
            || self.not_tracking_but_tracking_data_types
            || self.not_tracking_but_tracking_domains
            || self.data_type_purpose_required
    }

    /// Number of warnings that fired.
    #[must_use]
    pub fn count(&self) -> usize {
        usize::from(self.tracking_but_no_tracking_data_types)
            + usize::from(self.not_tracking_but_tracking_data_types)
            + usize::from(self.not_tracking_but_tracking_domains)
            + usize::from(self.data_type_purpose_required)
    }

    /// User-facing messages for the warnings that fired.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if self.tracking_but_no_tracking_data_types {
            messages.push(
                "No collected data types have been marked for use with tracking yet.".to_string(),
            );
        }
        if self.not_tracking_but_tracking_data_types {
            messages.push(
                "Some collected data types have been marked for use with tracking.".to_string(),
            );
        }
        if self.not_tracking_but_tracking_domains {
            messages
                .push("Tracking domains have been added, without tracking enabled.".to_string());
        }
        if self.data_type_purpose_required {
            if self.missing_purpose_count > 1 {
                messages.push(format!(
                    "No collection purpose selected for {} collected data types.",
                    self.missing_purpose_count
                ));
            } else {
                messages.push(
                    "No collection purpose selected for a collected data type.".to_string(),
                );
            }
        }
        messages
    }
}

/// Runs all consistency rules over the manifest and returns a fresh warning
/// snapshot. Pure: no side effects, deterministic for a given manifest.
#[must_use]
pub fn validate(manifest: &PrivacyManifest) -> Warnings {
    let mut warnings = Warnings::default();

    let has_tracking_data_types = manifest
        .collected_data_types
        .iter()
        .any(|dt| dt.is_tracking);

    if manifest.privacy_tracking && !has_tracking_data_types {
        warnings.tracking_but_no_tracking_data_types = true;
    } else if !manifest.privacy_tracking && has_tracking_data_types {
        warnings.not_tracking_but_tracking_data_types = true;
    }

    if !manifest.privacy_tracking && !manifest.tracking_domains.is_empty() {
        warnings.not_tracking_but_tracking_domains = true;
    }

    for data_type in &manifest.collected_data_types {
        if data_type.purposes.is_empty() {
            warnings.data_type_purpose_required = true;
            warnings.missing_purpose_count += 1;
        }
    }

    warnings
}
