use serde::Deserialize;

/// One raw record of the attributed catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogRecord {
    pub name: String,
    pub tradable: bool,
}

/// Reduce raw catalog records to the names a user can actually offer as
/// standalone items.
///
/// A record survives when it is tradable, its name carries the family
/// marker, and its name contains none of the part keywords. Matching is
/// case-sensitive. Input order is preserved and duplicates are left alone;
/// the source owns uniqueness.
pub fn offerable_names(
    records: Vec<CatalogRecord>,
    family_marker: &str,
    part_keywords: &[String],
) -> Vec<String> {
    let total = records.len();
    let names: Vec<String> = records
        .into_iter()
        .filter(|record| record.tradable)
        .filter(|record| record.name.contains(family_marker))
        .filter(|record| !part_keywords.iter().any(|kw| record.name.contains(kw.as_str())))
        .map(|record| record.name)
        .collect();
    tracing::debug!(total, kept = names.len(), "Filtered catalog records");
    names
}
