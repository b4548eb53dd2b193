//! Projection of the flat collected-data-type list into the three category
//! groups shown on App Store privacy labels, plus the required-reason API
//! roll-up.
//!
//! Both projections are pure functions over the manifest and are safe to
//! recompute on every invocation.

use crate::catalog::{self, ApiCategory, CollectionCategory};
use crate::manifest::PrivacyManifest;
use std::collections::BTreeSet;

/// The three category groups of a data-collection summary. Each list is
/// deduplicated and sorted by category display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummarizedCategories {
    /// Categories with at least one member data type used for tracking.
    pub tracking: Vec<CollectionCategory>,
    /// Categories with at least one member data type linked to identity.
    pub linked: Vec<CollectionCategory>,
    /// Categories with at least one member data type not linked to identity.
    pub not_linked: Vec<CollectionCategory>,
}

impl SummarizedCategories {
    /// Whether any data collection is declared at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracking.is_empty() && self.linked.is_empty() && self.not_linked.is_empty()
    }
}

/// Projects the manifest's collected data types onto the sixteen fixed
/// categories.
///
/// A data type used for tracking puts its categories in `tracking` and,
/// independently, in `linked` or `not_linked` per its linkage flag, so a
/// category can appear in two groups at once. Unknown data-type keys belong
/// to no category and are silently skipped.
#[must_use]
pub fn summarize_categories(manifest: &PrivacyManifest) -> SummarizedCategories {
    let mut tracking = BTreeSet::new();
    let mut linked = BTreeSet::new();
    let mut not_linked = BTreeSet::new();

    for data_type in &manifest.collected_data_types {
        for category in CollectionCategory::ALL {
            if !category.contains(&data_type.type_key) {
                continue;
            }
            if data_type.is_tracking {
                tracking.insert(category);
            }
            if data_type.is_linked {
                linked.insert(category);
            } else {
                not_linked.insert(category);
            }
        }
    }

    SummarizedCategories {
        tracking: sorted_by_display_name(tracking),
        linked: sorted_by_display_name(linked),
        not_linked: sorted_by_display_name(not_linked),
    }
}

/// Set-to-list conversion with the display ordering the summary uses.
fn sorted_by_display_name(set: BTreeSet<CollectionCategory>) -> Vec<CollectionCategory> {
    let mut list: Vec<_> = set.into_iter().collect();
    list.sort_by_key(|c| c.display_name());
    list
}

/// The recognized required-reason API categories declared in the manifest,
/// sorted by display name. Unrecognized API keys are skipped.
#[must_use]
pub fn summarize_api_types(manifest: &PrivacyManifest) -> Vec<&'static ApiCategory> {
    let mut categories: Vec<_> = manifest
        .accessed_api_types
        .iter()
        .filter_map(|api| catalog::api_category(&api.type_key))
        .collect();
    categories.sort_by_key(|c| c.name);
    categories.dedup_by_key(|c| c.key);
    categories
}
