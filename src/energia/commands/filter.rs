use crate::model::Record;

/// True when `term` occurs in any searchable field of the record.
///
/// The tag is matched case-insensitively. Dates are matched against their ISO text and
/// the factor against its shortest decimal text, both case-sensitive.
pub fn matches(record: &Record, term: &str) -> bool {
    record.tag.to_lowercase().contains(&term.to_lowercase())
        || record.start_text().contains(term)
        || record.end_text().contains(term)
        || record.factor_text().contains(term)
}

/// Keeps the records matching `term`, preserving their order. An empty term keeps all.
pub fn run(records: &[Record], term: &str) -> Vec<Record> {
    if term.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| matches(r, term))
        .cloned()
        .collect()
}
