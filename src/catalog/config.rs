use std::env;

/// Shape of the catalog source document. Picked by configuration, never by
/// sniffing the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceMode {
    /// A JSON array of plain name strings, already reduced to offerable
    /// items. No filtering applies.
    PlainNames,
    /// A JSON array of `{name, tradable}` records that still needs the
    /// offerable-item filter.
    Records,
}

/// Names must carry this substring to count as part of the item family the
/// bot trades in.
pub const DEFAULT_FAMILY_MARKER: &str = "Prime";

/// Substrings marking a name as a sub-component or bundle rather than a
/// standalone offerable item. Case-sensitive, overridable via
/// `CATALOG_PART_KEYWORDS`.
pub const DEFAULT_PART_KEYWORDS: &[&str] = &[
    "Neuroptics",
    "Chassis",
    "Systems",
    "Harness",
    "Wings",
    "Barrel",
    "Receiver",
    "Stock",
    "Blueprint",
    "Blade",
    "Handle",
    "Hilt",
    "Grip",
    "Link",
    "Head",
    "Guard",
    "Pouch",
    "Stars",
    "Lower Limb",
    "Upper Limb",
    "String",
];

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub url: String,
    pub mode: SourceMode,
    pub family_marker: String,
    pub part_keywords: Vec<String>,
}

impl CatalogConfig {
    /// Build the catalog configuration from the environment. Returns `None`
    /// when `CATALOG_URL` is unset, which disables suggestions entirely.
    pub fn from_env() -> Option<Self> {
        let url = env::var("CATALOG_URL").ok()?;
        let mode = match env::var("CATALOG_SOURCE_MODE").as_deref() {
            Ok("records") => SourceMode::Records,
            _ => SourceMode::PlainNames,
        };
        let family_marker = env::var("CATALOG_FAMILY_MARKER")
            .unwrap_or_else(|_| DEFAULT_FAMILY_MARKER.to_string());
        let part_keywords = match env::var("CATALOG_PART_KEYWORDS") {
            Ok(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|kw| !kw.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => DEFAULT_PART_KEYWORDS.iter().map(|kw| kw.to_string()).collect(),
        };
        Some(Self {
            url,
            mode,
            family_marker,
            part_keywords,
        })
    }
}
