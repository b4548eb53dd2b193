//! Working-state store for an edit session.
//!
//! The store keeps the collected data types and API reasons in keyed maps so
//! that edits address entries by key, and reassembles the derived
//! [`PrivacyManifest`] after every mutation. The original tool did this
//! reactively; here reassembly is an explicit call at the end of each
//! mutating method, which keeps the derived manifest consistent by
//! construction.

use crate::manifest::{AccessedApiType, CollectedDataType, PrivacyManifest};
use crate::validate::{self, Warnings};
use std::collections::BTreeMap;
use tracing::debug;

/// In-memory editing state, kept in sync with its derived manifest.
///
/// `BTreeMap`s give deterministic entry order in the assembled manifest, so
/// exports are stable across runs.
#[derive(Debug, Clone, Default)]
pub struct ManifestStore {
    privacy_tracking: bool,
    tracking_domains: Vec<String>,
    data_types: BTreeMap<String, CollectedDataType>,
    api_reasons: BTreeMap<String, Vec<String>>,
    manifest: PrivacyManifest,
}

impl ManifestStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an imported manifest, replacing all state.
    /// Duplicate data-type or API keys in the input collapse to the last
    /// occurrence, mirroring the keyed-map semantics of editing.
    #[must_use]
    pub fn from_manifest(manifest: PrivacyManifest) -> Self {
        let mut store = Self {
            privacy_tracking: manifest.privacy_tracking,
            tracking_domains: manifest.tracking_domains,
            ..Self::default()
        };
        for data_type in manifest.collected_data_types {
            store
                .data_types
                .insert(data_type.type_key.clone(), data_type);
        }
        for api in manifest.accessed_api_types {
            store.api_reasons.insert(api.type_key, api.reasons);
        }
        store.reassemble();
        store
    }

    /// The derived manifest, current as of the last mutation.
    #[must_use]
    pub fn manifest(&self) -> &PrivacyManifest {
        &self.manifest
    }

    /// Runs the validator over the current manifest. Always recomputed from
    /// scratch.
    #[must_use]
    pub fn warnings(&self) -> Warnings {
        validate::validate(&self.manifest)
    }

    /// Sets the tracking flag.
    pub fn set_tracking(&mut self, enabled: bool) {
        debug!(enabled, "set tracking flag");
        self.privacy_tracking = enabled;
        self.reassemble();
    }

    /// The current tracking flag.
    #[must_use]
    pub fn tracking(&self) -> bool {
        self.privacy_tracking
    }

    /// Adds a tracking domain. Returns false if the domain was already
    /// present.
    pub fn add_tracking_domain(&mut self, domain: &str) -> bool {
        if self.tracking_domains.iter().any(|d| d == domain) {
            return false;
        }
        debug!(domain, "add tracking domain");
        self.tracking_domains.push(domain.to_string());
        self.reassemble();
        true
    }

    /// Removes a tracking domain. Returns false if it was not present.
    pub fn remove_tracking_domain(&mut self, domain: &str) -> bool {
        let before = self.tracking_domains.len();
        self.tracking_domains.retain(|d| d != domain);
        if self.tracking_domains.len() == before {
            return false;
        }
        debug!(domain, "remove tracking domain");
        self.reassemble();
        true
    }

    /// Declared tracking domains, in insertion order.
    #[must_use]
    pub fn tracking_domains(&self) -> &[String] {
        &self.tracking_domains
    }

    /// Inserts or replaces a collected data type. Returns true if the entry
    /// was new.
    pub fn upsert_data_type(&mut self, entry: CollectedDataType) -> bool {
        debug!(key = %entry.type_key, "upsert data type");
        let inserted = self
            .data_types
            .insert(entry.type_key.clone(), entry)
            .is_none();
        self.reassemble();
        inserted
    }

    /// Edits a collected data type in place. Returns false if no entry with
    /// that key exists.
    pub fn update_data_type(
        &mut self,
        type_key: &str,
        edit: impl FnOnce(&mut CollectedDataType),
    ) -> bool {
        let Some(entry) = self.data_types.get_mut(type_key) else {
            return false;
        };
        edit(entry);
        // Editing must not be able to detach the entry from its map key.
        entry.type_key = type_key.to_string();
        debug!(key = %type_key, "update data type");
        self.reassemble();
        true
    }

    /// Removes a collected data type, returning it if present.
    pub fn remove_data_type(&mut self, type_key: &str) -> Option<CollectedDataType> {
        let removed = self.data_types.remove(type_key);
        if removed.is_some() {
            debug!(key = %type_key, "remove data type");
            self.reassemble();
        }
        removed
    }

    /// Looks up a collected data type by key.
    #[must_use]
    pub fn data_type(&self, type_key: &str) -> Option<&CollectedDataType> {
        self.data_types.get(type_key)
    }

    /// All collected data types, keyed.
    #[must_use]
    pub fn data_types(&self) -> &BTreeMap<String, CollectedDataType> {
        &self.data_types
    }

    /// Sets the reason list for an accessed-API category, replacing any
    /// previous list. Returns true if the entry was new.
    pub fn set_api_reasons(&mut self, type_key: &str, reasons: Vec<String>) -> bool {
        debug!(key = %type_key, count = reasons.len(), "set API reasons");
        let inserted = self
            .api_reasons
            .insert(type_key.to_string(), reasons)
            .is_none();
        self.reassemble();
        inserted
    }

    /// Removes an accessed-API category, returning its reasons if present.
    pub fn remove_api_type(&mut self, type_key: &str) -> Option<Vec<String>> {
        let removed = self.api_reasons.remove(type_key);
        if removed.is_some() {
            debug!(key = %type_key, "remove API type");
            self.reassemble();
        }
        removed
    }

    /// All accessed-API categories with their reasons, keyed.
    #[must_use]
    pub fn api_reasons(&self) -> &BTreeMap<String, Vec<String>> {
        &self.api_reasons
    }

    /// Clears all state back to an empty manifest.
    pub fn clear(&mut self) {
        debug!("clear manifest");
        self.privacy_tracking = false;
        self.tracking_domains.clear();
        self.data_types.clear();
        self.api_reasons.clear();
        self.reassemble();
    }

    /// Rebuilds the derived manifest from the keyed maps. Called after every
    /// mutation.
    fn reassemble(&mut self) {
        self.manifest = PrivacyManifest {
            privacy_tracking: self.privacy_tracking,
            tracking_domains: self.tracking_domains.clone(),
            collected_data_types: self.data_types.values().cloned().collect(),
            accessed_api_types: self
                .api_reasons
                .iter()
                .map(|(type_key, reasons)| AccessedApiType::new(type_key.clone(), reasons.clone()))
                .collect(),
        };
    }
}
