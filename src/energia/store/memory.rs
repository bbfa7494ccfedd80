use super::DataStore;
use crate::error::Result;
use crate::model::Record;
use chrono::NaiveDate;

/// Records held in memory, in insertion order.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    records: Vec<Record>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Store seeded with the built-in sample data.
    pub fn sample() -> Self {
        Self::with_records(sample_records())
    }
}

impl DataStore for InMemoryStore {
    fn list_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The ten regional efficiency records shipped with the application.
pub fn sample_records() -> Vec<Record> {
    const SAMPLE: [(u32, (u32, u32), (u32, u32), &str, f64); 10] = [
        (1, (1, 15), (3, 15), "SP-01", 0.85),
        (2, (2, 1), (4, 1), "RJ-02", 0.92),
        (3, (1, 20), (3, 20), "MG-03", 0.78),
        (4, (3, 10), (5, 10), "RS-04", 0.88),
        (5, (2, 15), (4, 15), "PR-05", 0.91),
        (6, (1, 5), (3, 5), "SC-06", 0.83),
        (7, (3, 20), (5, 20), "BA-07", 0.95),
        (8, (2, 28), (4, 28), "CE-08", 0.89),
        (9, (1, 12), (3, 12), "GO-09", 0.76),
        (10, (3, 1), (5, 1), "PE-10", 0.94),
    ];

    SAMPLE
        .iter()
        .map(|&(id, (sm, sd), (em, ed), tag, factor)| {
            Record::new(id, ymd(2024, sm, sd), ymd(2024, em, ed), tag, factor)
        })
        .collect()
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: u32,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_id: 1,
            }
        }

        pub fn sample() -> Self {
            let store = InMemoryStore::sample();
            let next_id = store.len() as u32 + 1;
            Self { store, next_id }
        }

        /// Adds a record with the given tag and factor over a fixed Q1 2024 period.
        pub fn with_record(self, tag: &str, factor: f64) -> Self {
            self.with_period(tag, factor, "2024-01-01", "2024-03-31")
        }

        pub fn with_period(mut self, tag: &str, factor: f64, start: &str, end: &str) -> Self {
            let start = NaiveDate::parse_from_str(start, crate::model::ISO_DATE).unwrap();
            let end = NaiveDate::parse_from_str(end, crate::model::ISO_DATE).unwrap();
            self.store
                .records
                .push(Record::new(self.next_id, start, end, tag, factor));
            self.next_id += 1;
            self
        }

        pub fn records(&self) -> Vec<Record> {
            self.store.list_records().unwrap()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_ten_records_in_id_order() {
        let store = InMemoryStore::sample();
        let records = store.list_records().unwrap();
        assert_eq!(records.len(), 10);
        let ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
        assert!(records.iter().all(|r| r.period_start <= r.period_end));
    }

    #[test]
    fn sample_record_fields() {
        let records = InMemoryStore::sample().list_records().unwrap();
        let rj = &records[1];
        assert_eq!(rj.tag, "RJ-02");
        assert_eq!(rj.factor, 0.92);
        assert_eq!(rj.start_text(), "2024-02-01");
        assert_eq!(rj.end_text(), "2024-04-01");
    }

    #[test]
    fn empty_store() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert!(store.list_records().unwrap().is_empty());
    }
}
