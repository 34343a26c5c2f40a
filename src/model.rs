use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single node's full configuration at one point in time.
///
/// Snapshots are read-only inputs to the diff engines: nothing in this crate
/// mutates a snapshot after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Opaque identifier of the node this snapshot was taken from.
    pub node_id: String,
    /// Filtering groups, in node order.
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Top-level scalar server settings.
    #[serde(default)]
    pub settings: ServerSettings,
    /// Local host-name overrides, key -> address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_mapping: Option<BTreeMap<String, String>>,
    /// Network-wide overrides, key -> address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_mapping: Option<BTreeMap<String, String>>,
}

/// Named scalar server settings compared by [`crate::diff::diff_config`].
///
/// The declared comparison set is [`ServerSettings::named_fields`]; adding a
/// field here and there is all that is needed to include it in config diffs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_blocking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocking_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_list_update_interval_hours: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_queries: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serve_stale: Option<bool>,
}

impl ServerSettings {
    /// The declared set of named scalar fields, in a fixed order.
    pub fn named_fields(&self) -> Vec<(&'static str, Value)> {
        fn val<T: Serialize>(v: &Option<T>) -> Value {
            v.as_ref()
                .map(|x| serde_json::to_value(x).unwrap_or(Value::Null))
                .unwrap_or(Value::Null)
        }
        vec![
            ("enableBlocking", val(&self.enable_blocking)),
            ("blockingType", val(&self.blocking_type)),
            (
                "blockListUpdateIntervalHours",
                val(&self.block_list_update_interval_hours),
            ),
            ("logQueries", val(&self.log_queries)),
            ("serveStale", val(&self.serve_stale)),
        ]
    }
}

/// One filtering group within a snapshot.
///
/// Group names are unique within a snapshot (case-sensitive) and are the key
/// used to match groups across snapshots. List fields are optional because
/// absence is distinct from emptiness for set comparison purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocked_regex: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_regex: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_list_urls: Option<Vec<UrlEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_list_urls: Option<Vec<UrlEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex_block_list_urls: Option<Vec<UrlEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex_allow_list_urls: Option<Vec<UrlEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adblock_list_urls: Option<Vec<String>>,
    #[serde(default)]
    pub enable_blocking: bool,
    #[serde(default)]
    pub block_as_nx_domain: bool,
    #[serde(default)]
    pub allow_txt_blocking_report: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocking_addresses: Option<Vec<String>>,
}

impl Group {
    /// Create an empty group with the given name and default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blocked: None,
            allowed: None,
            blocked_regex: None,
            allowed_regex: None,
            block_list_urls: None,
            allow_list_urls: None,
            regex_block_list_urls: None,
            regex_allow_list_urls: None,
            adblock_list_urls: None,
            enable_blocking: false,
            block_as_nx_domain: false,
            allow_txt_blocking_report: false,
            blocking_addresses: None,
        }
    }

    /// The values of one list category, with URL entries reduced to their
    /// canonical strings. `None` means the field is absent on this group.
    pub fn category_values(&self, category: ListCategory) -> Option<Vec<String>> {
        fn canon(entries: &Option<Vec<UrlEntry>>) -> Option<Vec<String>> {
            entries
                .as_ref()
                .map(|v| v.iter().map(UrlEntry::canonical).collect())
        }
        match category {
            ListCategory::Blocked => self.blocked.clone(),
            ListCategory::Allowed => self.allowed.clone(),
            ListCategory::BlockedRegex => self.blocked_regex.clone(),
            ListCategory::AllowedRegex => self.allowed_regex.clone(),
            ListCategory::BlockListUrls => canon(&self.block_list_urls),
            ListCategory::AllowListUrls => canon(&self.allow_list_urls),
            ListCategory::RegexBlockListUrls => canon(&self.regex_block_list_urls),
            ListCategory::RegexAllowListUrls => canon(&self.regex_allow_list_urls),
            ListCategory::AdblockListUrls => self.adblock_list_urls.clone(),
        }
    }

    /// Per-category entry counts, treating absent lists as empty.
    pub fn category_sizes(&self) -> BTreeMap<ListCategory, usize> {
        ListCategory::ALL
            .iter()
            .map(|&c| (c, self.category_values(c).map_or(0, |v| v.len())))
            .collect()
    }

    /// Total entry count across all list categories.
    pub fn total_entries(&self) -> usize {
        self.category_sizes().values().sum()
    }
}

/// The nine list categories carried by a [`Group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ListCategory {
    Blocked,
    Allowed,
    BlockedRegex,
    AllowedRegex,
    BlockListUrls,
    AllowListUrls,
    RegexBlockListUrls,
    RegexAllowListUrls,
    AdblockListUrls,
}

impl ListCategory {
    /// All categories, in diff and display order.
    pub const ALL: [ListCategory; 9] = [
        ListCategory::Blocked,
        ListCategory::Allowed,
        ListCategory::BlockedRegex,
        ListCategory::AllowedRegex,
        ListCategory::BlockListUrls,
        ListCategory::AllowListUrls,
        ListCategory::RegexBlockListUrls,
        ListCategory::RegexAllowListUrls,
        ListCategory::AdblockListUrls,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ListCategory::Blocked => "blocked",
            ListCategory::Allowed => "allowed",
            ListCategory::BlockedRegex => "blockedRegex",
            ListCategory::AllowedRegex => "allowedRegex",
            ListCategory::BlockListUrls => "blockListUrls",
            ListCategory::AllowListUrls => "allowListUrls",
            ListCategory::RegexBlockListUrls => "regexBlockListUrls",
            ListCategory::RegexAllowListUrls => "regexAllowListUrls",
            ListCategory::AdblockListUrls => "adblockListUrls",
        }
    }
}

impl Display for ListCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A subscription URL entry: either a bare URL string or a structured record
/// with per-list overrides.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UrlEntry {
    Bare(String),
    Detailed(DetailedUrl),
}

/// Structured form of a [`UrlEntry`]. `url` is required; the remaining fields
/// are per-list overrides of group-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedUrl {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_as_nx_domain: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocking_addresses: Option<Vec<String>>,
}

impl UrlEntry {
    /// Reduce the entry to its canonical comparison string.
    ///
    /// The canonical form serializes a fixed, ordered subset of fields (url,
    /// blockAsNxDomain, blockingAddresses). Structurally equal records always
    /// canonicalize identically; a bare entry canonicalizes to its URL, which
    /// equals a detailed entry carrying no overrides.
    pub fn canonical(&self) -> String {
        match self {
            UrlEntry::Bare(url) => url.clone(),
            UrlEntry::Detailed(detail) => {
                let mut out = detail.url.clone();
                if let Some(nx) = detail.block_as_nx_domain {
                    out.push_str("|nxDomain=");
                    out.push_str(if nx { "true" } else { "false" });
                }
                if let Some(addrs) = &detail.blocking_addresses {
                    out.push_str("|addresses=");
                    out.push_str(&addrs.join(","));
                }
                out
            }
        }
    }

    /// The entry's URL, regardless of form.
    pub fn url(&self) -> &str {
        match self {
            UrlEntry::Bare(url) => url,
            UrlEntry::Detailed(detail) => &detail.url,
        }
    }
}

// Accepts a JSON string or an object. An object without a `url` field is
// rejected outright rather than silently canonicalized to an empty URL.
impl<'de> Deserialize<'de> for UrlEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::String(url) => Ok(UrlEntry::Bare(url)),
            Value::Object(map) => {
                if !map.contains_key("url") {
                    return Err(de::Error::custom(
                        "url entry object is missing required field `url`",
                    ));
                }
                let detail: DetailedUrl =
                    serde_json::from_value(Value::Object(map)).map_err(de::Error::custom)?;
                Ok(UrlEntry::Detailed(detail))
            }
            other => Err(de::Error::custom(format!(
                "url entry must be a string or an object, got: {other}"
            ))),
        }
    }
}
