//! Static catalogs of the fixed identifiers used in Apple privacy manifests.
//!
//! Apple defines a closed set of collected-data-type keys (grouped into
//! sixteen display categories), six collection-purpose keys, and five
//! required-reason API categories with their valid justification codes.
//! Everything here is compile-time data; the summarizer and the CLI input
//! resolution are built on these tables.

/// Common prefix of all collected-data-type keys.
pub const DATA_TYPE_KEY_PREFIX: &str = "NSPrivacyCollectedDataType";

/// Common prefix of all collection-purpose keys.
pub const PURPOSE_KEY_PREFIX: &str = "NSPrivacyCollectedDataTypePurpose";

/// Common prefix of all accessed-API category keys.
pub const API_TYPE_KEY_PREFIX: &str = "NSPrivacyAccessedAPICategory";

/// The sixteen fixed data-collection categories shown in App Store privacy
/// labels. Each category owns a static membership table of data-type keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CollectionCategory {
    /// Hands, head and other body-related data.
    Body,
    /// Web browsing history.
    BrowsingHistory,
    /// Name, email address, phone number and similar.
    ContactInfo,
    /// The user's address book contacts.
    ContactsInfo,
    /// Crash and performance data.
    Diagnostics,
    /// Payment and credit information.
    FinancialInfo,
    /// Health and fitness data.
    HealthAndFitness,
    /// User or device identifiers.
    Identifiers,
    /// Precise or coarse location.
    LocationInfo,
    /// Any other data types.
    OtherDataTypes,
    /// Purchase history.
    Purchases,
    /// Search history.
    SearchHistory,
    /// Sensitive personal information.
    SensitiveInfo,
    /// Environment scanning of the user's surroundings.
    Surroundings,
    /// Product interaction and advertising data.
    UsageData,
    /// Emails, photos, audio and other user-generated content.
    UserContent,
}

impl CollectionCategory {
    /// All categories, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Body,
        Self::BrowsingHistory,
        Self::ContactInfo,
        Self::ContactsInfo,
        Self::Diagnostics,
        Self::FinancialInfo,
        Self::HealthAndFitness,
        Self::Identifiers,
        Self::LocationInfo,
        Self::OtherDataTypes,
        Self::Purchases,
        Self::SearchHistory,
        Self::SensitiveInfo,
        Self::Surroundings,
        Self::UsageData,
        Self::UserContent,
    ];

    /// Human-readable category name as it appears on privacy labels.
    /// Summaries are sorted by this name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Body => "Body",
            Self::BrowsingHistory => "Browsing History",
            Self::ContactInfo => "Contact Info",
            Self::ContactsInfo => "Contacts",
            Self::Diagnostics => "Diagnostics",
            Self::FinancialInfo => "Financial Info",
            Self::HealthAndFitness => "Health & Fitness",
            Self::Identifiers => "Identifiers",
            Self::LocationInfo => "Location",
            Self::OtherDataTypes => "Other Data Types",
            Self::Purchases => "Purchases",
            Self::SearchHistory => "Search History",
            Self::SensitiveInfo => "Sensitive Info",
            Self::Surroundings => "Surroundings",
            Self::UsageData => "Usage Data",
            Self::UserContent => "User Content",
        }
    }

    /// Static membership table: the data-type keys belonging to this
    /// category. Note the lowercase "or" in `PhotosorVideos`; that is the
    /// spelling Apple ships.
    #[must_use]
    pub fn members(self) -> &'static [&'static str] {
        match self {
            Self::Body => &[
                "NSPrivacyCollectedDataTypeHands",
                "NSPrivacyCollectedDataTypeHead",
            ],
            Self::BrowsingHistory => &["NSPrivacyCollectedDataTypeBrowsingHistory"],
            Self::ContactInfo => &[
                "NSPrivacyCollectedDataTypeName",
                "NSPrivacyCollectedDataTypeEmailAddress",
                "NSPrivacyCollectedDataTypePhoneNumber",
                "NSPrivacyCollectedDataTypePhysicalAddress",
                "NSPrivacyCollectedDataTypeOtherUserContactInfo",
            ],
            Self::ContactsInfo => &["NSPrivacyCollectedDataTypeContacts"],
            Self::Diagnostics => &[
                "NSPrivacyCollectedDataTypeCrashData",
                "NSPrivacyCollectedDataTypePerformanceData",
                "NSPrivacyCollectedDataTypeOtherDiagnosticData",
            ],
            Self::FinancialInfo => &[
                "NSPrivacyCollectedDataTypePaymentInfo",
                "NSPrivacyCollectedDataTypeCreditInfo",
                "NSPrivacyCollectedDataTypeOtherFinancialInfo",
            ],
            Self::HealthAndFitness => &[
                "NSPrivacyCollectedDataTypeHealth",
                "NSPrivacyCollectedDataTypeFitness",
            ],
            Self::Identifiers => &[
                "NSPrivacyCollectedDataTypeUserID",
                "NSPrivacyCollectedDataTypeDeviceID",
            ],
            Self::LocationInfo => &[
                "NSPrivacyCollectedDataTypePreciseLocation",
                "NSPrivacyCollectedDataTypeCoarseLocation",
            ],
            Self::OtherDataTypes => &["NSPrivacyCollectedDataTypeOtherDataTypes"],
            Self::Purchases => &["NSPrivacyCollectedDataTypePurchaseHistory"],
            Self::SearchHistory => &["NSPrivacyCollectedDataTypeSearchHistory"],
            Self::SensitiveInfo => &["NSPrivacyCollectedDataTypeSensitiveInfo"],
            Self::Surroundings => &["NSPrivacyCollectedDataTypeEnvironmentScanning"],
            Self::UsageData => &[
                "NSPrivacyCollectedDataTypeProductInteraction",
                "NSPrivacyCollectedDataTypeAdvertisingData",
                "NSPrivacyCollectedDataTypeOtherUsageData",
            ],
            Self::UserContent => &[
                "NSPrivacyCollectedDataTypeEmailsOrTextMessages",
                "NSPrivacyCollectedDataTypePhotosorVideos",
                "NSPrivacyCollectedDataTypeAudioData",
                "NSPrivacyCollectedDataTypeGameplayContent",
                "NSPrivacyCollectedDataTypeCustomerSupport",
                "NSPrivacyCollectedDataTypeOtherUserContent",
            ],
        }
    }

    /// Whether a data-type key belongs to this category.
    #[must_use]
    pub fn contains(self, data_type_key: &str) -> bool {
        self.members().contains(&data_type_key)
    }
}

/// The six collection-purpose keys.
pub const PURPOSES: &[&str] = &[
    "NSPrivacyCollectedDataTypePurposeThirdPartyAdvertising",
    "NSPrivacyCollectedDataTypePurposeDeveloperAdvertising",
    "NSPrivacyCollectedDataTypePurposeAnalytics",
    "NSPrivacyCollectedDataTypePurposeProductPersonalization",
    "NSPrivacyCollectedDataTypePurposeAppFunctionality",
    "NSPrivacyCollectedDataTypePurposeOther",
];

/// A required-reason API category with its valid justification codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiCategory {
    /// The `NSPrivacyAccessedAPICategory…` key.
    pub key: &'static str,
    /// Human-readable name, used for sorted summary output.
    pub name: &'static str,
    /// Reason codes Apple accepts for this category.
    pub reasons: &'static [&'static str],
}

/// The five required-reason API categories.
pub const API_CATEGORIES: &[ApiCategory] = &[
    ApiCategory {
        key: "NSPrivacyAccessedAPICategoryActiveKeyboards",
        name: "Active keyboard APIs",
        reasons: &["3EC4.1", "54BD.1"],
    },
    ApiCategory {
        key: "NSPrivacyAccessedAPICategoryDiskSpace",
        name: "Disk space APIs",
        reasons: &["85F4.1", "E174.1", "7D9E.1", "B728.1"],
    },
    ApiCategory {
        key: "NSPrivacyAccessedAPICategoryFileTimestamp",
        name: "File timestamp APIs",
        reasons: &["DDA9.1", "C617.1", "3B52.1", "0A2A.1"],
    },
    ApiCategory {
        key: "NSPrivacyAccessedAPICategorySystemBootTime",
        name: "System boot time APIs",
        reasons: &["35F9.1", "8FFB.1", "3D61.1"],
    },
    ApiCategory {
        key: "NSPrivacyAccessedAPICategoryUserDefaults",
        name: "User defaults APIs",
        reasons: &["CA92.1", "1C8F.1", "C56D.1", "AC6B.1"],
    },
];

/// All known data-type keys, in category order.
#[must_use]
pub fn all_data_type_keys() -> Vec<&'static str> {
    CollectionCategory::ALL
        .iter()
        .flat_map(|c| c.members().iter().copied())
        .collect()
}

/// Looks up the catalog entry for an accessed-API key.
#[must_use]
pub fn api_category(key: &str) -> Option<&'static ApiCategory> {
    API_CATEGORIES.iter().find(|c| c.key == key)
}

/// Strips the catalog prefix from a key for compact display
/// ("NSPrivacyCollectedDataTypeHealth" -> "Health").
#[must_use]
pub fn short_key(key: &str) -> &str {
    key.strip_prefix(PURPOSE_KEY_PREFIX)
        .or_else(|| key.strip_prefix(DATA_TYPE_KEY_PREFIX))
        .or_else(|| key.strip_prefix(API_TYPE_KEY_PREFIX))
        .unwrap_or(key)
}

/// Resolves user input against a set of known keys: exact match first, then
/// case-insensitive full key, then case-insensitive suffix after the prefix.
fn resolve(input: &str, known: &[&'static str]) -> Option<&'static str> {
    if let Some(&key) = known.iter().find(|&&k| k == input) {
        return Some(key);
    }
    known
        .iter()
        .find(|&&k| k.eq_ignore_ascii_case(input) || short_key(k).eq_ignore_ascii_case(input))
        .copied()
}

/// Resolves a data-type key from user input ("Health", "health",
/// "NSPrivacyCollectedDataTypeHealth" all map to the canonical key).
#[must_use]
pub fn resolve_data_type(input: &str) -> Option<&'static str> {
    resolve(input, &all_data_type_keys())
}

/// Resolves a purpose key from user input.
#[must_use]
pub fn resolve_purpose(input: &str) -> Option<&'static str> {
    resolve(input, PURPOSES)
}

/// Resolves an accessed-API category from user input.
#[must_use]
pub fn resolve_api_type(input: &str) -> Option<&'static ApiCategory> {
    API_CATEGORIES.iter().find(|c| {
        c.key == input
            || c.key.eq_ignore_ascii_case(input)
            || short_key(c.key).eq_ignore_ascii_case(input)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_data_type_keys_are_prefixed_and_unique() {
        let keys = all_data_type_keys();
        for key in &keys {
            assert!(key.starts_with(DATA_TYPE_KEY_PREFIX), "bad key: {key}");
        }
        let mut deduped = keys.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len());
    }

    #[test]
    fn test_every_category_has_members() {
        for category in CollectionCategory::ALL {
            assert!(!category.members().is_empty());
        }
    }

    #[test]
    fn test_display_names_are_unique() {
        let mut names: Vec<_> = CollectionCategory::ALL
            .iter()
            .map(|c| c.display_name())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn test_contains_health() {
        assert!(CollectionCategory::HealthAndFitness
            .contains("NSPrivacyCollectedDataTypeHealth"));
        assert!(!CollectionCategory::HealthAndFitness
            .contains("NSPrivacyCollectedDataTypeName"));
    }

    #[test]
    fn test_resolve_data_type_by_suffix() {
        assert_eq!(
            resolve_data_type("Health"),
            Some("NSPrivacyCollectedDataTypeHealth")
        );
        assert_eq!(
            resolve_data_type("health"),
            Some("NSPrivacyCollectedDataTypeHealth")
        );
        assert_eq!(
            resolve_data_type("NSPrivacyCollectedDataTypeHealth"),
            Some("NSPrivacyCollectedDataTypeHealth")
        );
        assert_eq!(resolve_data_type("NotAThing"), None);
    }

    #[test]
    fn test_resolve_purpose() {
        assert_eq!(
            resolve_purpose("Analytics"),
            Some("NSPrivacyCollectedDataTypePurposeAnalytics")
        );
    }

    #[test]
    fn test_resolve_api_type() {
        let cat = resolve_api_type("UserDefaults").unwrap();
        assert_eq!(cat.key, "NSPrivacyAccessedAPICategoryUserDefaults");
        assert!(cat.reasons.contains(&"CA92.1"));
    }

    #[test]
    fn test_short_key() {
        assert_eq!(short_key("NSPrivacyCollectedDataTypeHealth"), "Health");
        assert_eq!(
            short_key("NSPrivacyCollectedDataTypePurposeAnalytics"),
            "Analytics"
        );
        assert_eq!(
            short_key("NSPrivacyAccessedAPICategoryDiskSpace"),
            "DiskSpace"
        );
        assert_eq!(short_key("com.example.custom"), "com.example.custom");
    }
}
