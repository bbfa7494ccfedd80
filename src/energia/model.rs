use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date layout used for searching and comparing periods.
pub const ISO_DATE: &str = "%Y-%m-%d";

pub const HIGH_TIER_MIN: f64 = 0.90;
pub const MEDIUM_TIER_MIN: f64 = 0.80;

/// One energy-efficiency measurement over a period for a region.
///
/// Records are built once from the sample data and never mutated.
/// `period_start <= period_end` and `factor` in `[0, 1]` are expected but not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub tag: String,
    pub factor: f64,
}

impl Record {
    pub fn new(
        id: u32,
        period_start: NaiveDate,
        period_end: NaiveDate,
        tag: impl Into<String>,
        factor: f64,
    ) -> Self {
        Self {
            id,
            period_start,
            period_end,
            tag: tag.into(),
            factor,
        }
    }

    pub fn start_text(&self) -> String {
        self.period_start.format(ISO_DATE).to_string()
    }

    pub fn end_text(&self) -> String {
        self.period_end.format(ISO_DATE).to_string()
    }

    /// Shortest decimal text of the factor (`0.85`, `0.9`).
    pub fn factor_text(&self) -> String {
        self.factor.to_string()
    }

    pub fn tier(&self) -> FactorTier {
        FactorTier::of(self.factor)
    }
}

/// Display classification of a factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FactorTier {
    High,
    Medium,
    Low,
}

impl FactorTier {
    /// Lower bounds are inclusive: exactly 0.90 is `High`, exactly 0.80 is `Medium`.
    /// NaN fails both comparisons and lands in `Low`.
    pub fn of(factor: f64) -> Self {
        if factor >= HIGH_TIER_MIN {
            FactorTier::High
        } else if factor >= MEDIUM_TIER_MIN {
            FactorTier::Medium
        } else {
            FactorTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FactorTier::High => "high",
            FactorTier::Medium => "medium",
            FactorTier::Low => "low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, ISO_DATE).unwrap()
    }

    #[test]
    fn tiers_follow_inclusive_lower_bounds() {
        assert_eq!(FactorTier::of(0.95), FactorTier::High);
        assert_eq!(FactorTier::of(0.90), FactorTier::High);
        assert_eq!(FactorTier::of(0.85), FactorTier::Medium);
        assert_eq!(FactorTier::of(0.80), FactorTier::Medium);
        assert_eq!(FactorTier::of(0.76), FactorTier::Low);
    }

    #[test]
    fn out_of_range_factors_still_get_a_tier() {
        assert_eq!(FactorTier::of(1.7), FactorTier::High);
        assert_eq!(FactorTier::of(-0.2), FactorTier::Low);
        assert_eq!(FactorTier::of(f64::NAN), FactorTier::Low);
    }

    #[test]
    fn searchable_texts() {
        let r = Record::new(1, date("2024-01-15"), date("2024-03-15"), "SP-01", 0.9);
        assert_eq!(r.start_text(), "2024-01-15");
        assert_eq!(r.end_text(), "2024-03-15");
        assert_eq!(r.factor_text(), "0.9");
        assert_eq!(r.tier().as_str(), "high");
    }
}
