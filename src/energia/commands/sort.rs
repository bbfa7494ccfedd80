use crate::model::Record;
use crate::view_state::{SortConfig, SortDirection, SortKey};
use std::cmp::Ordering;

/// Natural order of a single column.
///
/// Dates compare chronologically, which matches the lexicographic order of their ISO
/// text. Tags compare byte-wise. Factors use `total_cmp`, so NaN sorts after every number.
pub fn compare(a: &Record, b: &Record, key: SortKey) -> Ordering {
    match key {
        SortKey::PeriodStart => a.period_start.cmp(&b.period_start),
        SortKey::PeriodEnd => a.period_end.cmp(&b.period_end),
        SortKey::Tag => a.tag.cmp(&b.tag),
        SortKey::Factor => a.factor.total_cmp(&b.factor),
    }
}

/// Returns the records ordered by `config`. Without a key the input order is kept.
///
/// The sort is stable and descending reverses the comparator rather than the output,
/// so records with equal keys keep their input order in both directions.
pub fn run(records: &[Record], config: &SortConfig) -> Vec<Record> {
    let mut sorted = records.to_vec();
    let Some(key) = config.key else {
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match config.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn factors(records: &[Record]) -> Vec<f64> {
        records.iter().map(|r| r.factor).collect()
    }

    fn ids(records: &[Record]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn sorts_factor_then_toggles_to_descending() {
        let records = StoreFixture::new()
            .with_record("SP-01", 0.85)
            .with_record("RJ-02", 0.92)
            .with_record("MG-03", 0.78)
            .records();

        let asc = SortConfig::default().toggle(SortKey::Factor);
        assert_eq!(factors(&run(&records, &asc)), vec![0.78, 0.85, 0.92]);

        let desc = asc.toggle(SortKey::Factor);
        assert_eq!(factors(&run(&records, &desc)), vec![0.92, 0.85, 0.78]);
    }

    #[test]
    fn no_key_keeps_input_order() {
        let records = StoreFixture::sample().records();
        let sorted = run(&records, &SortConfig::default());
        assert_eq!(ids(&sorted), ids(&records));
    }

    #[test]
    fn toggled_sort_is_the_reverse_for_every_key() {
        let records = StoreFixture::sample().records();
        for key in SortKey::all() {
            let asc = SortConfig::default().toggle(*key);
            let desc = asc.toggle(*key);

            let mut forward = ids(&run(&records, &asc));
            forward.reverse();
            assert_eq!(forward, ids(&run(&records, &desc)), "key {}", key);
        }
    }

    #[test]
    fn sorts_dates_chronologically() {
        let records = StoreFixture::sample().records();
        let sorted = run(
            &records,
            &SortConfig::by(SortKey::PeriodStart, SortDirection::Ascending),
        );
        let starts: Vec<String> = sorted.iter().map(|r| r.start_text()).collect();
        let mut expected = starts.clone();
        expected.sort();
        assert_eq!(starts, expected);
        assert_eq!(sorted[0].tag, "SC-06");
        assert_eq!(sorted[9].tag, "BA-07");
    }

    #[test]
    fn sorts_tags_lexicographically() {
        let records = StoreFixture::sample().records();
        let sorted = run(&records, &SortConfig::by(SortKey::Tag, SortDirection::Ascending));
        let tags: Vec<&str> = sorted.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(
            tags,
            vec!["BA-07", "CE-08", "GO-09", "MG-03", "PE-10", "PR-05", "RJ-02", "RS-04", "SC-06", "SP-01"]
        );
    }

    #[test]
    fn ties_keep_insertion_order_in_both_directions() {
        let records = StoreFixture::new()
            .with_record("A", 0.8)
            .with_record("B", 0.9)
            .with_record("C", 0.8)
            .with_record("D", 0.9)
            .records();

        let asc = run(&records, &SortConfig::by(SortKey::Factor, SortDirection::Ascending));
        assert_eq!(ids(&asc), vec![1, 3, 2, 4]);

        let desc = run(&records, &SortConfig::by(SortKey::Factor, SortDirection::Descending));
        assert_eq!(ids(&desc), vec![2, 4, 1, 3]);
    }

    #[test]
    fn input_is_not_modified() {
        let records = StoreFixture::sample().records();
        let before = records.clone();
        let _ = run(&records, &SortConfig::by(SortKey::Factor, SortDirection::Descending));
        assert_eq!(records, before);
    }
}
