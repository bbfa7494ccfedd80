//! # Storage Layer
//!
//! Records come from a [`DataStore`]. The only implementation is
//! [`memory::InMemoryStore`], seeded at startup with the sample data in
//! [`memory::sample_records`]. Nothing is written back: records are immutable for the
//! lifetime of the process.
//!
//! The trait keeps the command layer independent of where records come from, and lets
//! tests build stores with exactly the records a case needs.

use crate::error::Result;
use crate::model::Record;

pub mod memory;

/// Read-only access to records, in store order.
pub trait DataStore {
    /// All records, in insertion order.
    fn list_records(&self) -> Result<Vec<Record>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
