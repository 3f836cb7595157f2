//! Age filtering and ordering of inspected branches

use chrono::{Months, NaiveDate};

use crate::error::SweepError;
use crate::types::BranchRecord;

/// The date `max_age_months` calendar months before `today`
///
/// Month ends clamp, so 2024-03-31 minus one month is 2024-02-29.
pub fn age_cutoff(today: NaiveDate, max_age_months: u32) -> Result<NaiveDate, SweepError> {
    today
        .checked_sub_months(Months::new(max_age_months))
        .ok_or_else(|| {
            SweepError::Config(format!(
                "max_age_months {} is out of range for {}",
                max_age_months, today
            ))
        })
}

/// Keep records dated strictly before `cutoff`, oldest first
///
/// Records with equal dates keep their relative order.
pub fn filter_stale(records: Vec<BranchRecord>, cutoff: NaiveDate) -> Vec<BranchRecord> {
    let mut stale: Vec<BranchRecord> = records
        .into_iter()
        .filter(|record| record.date < cutoff)
        .collect();
    stale.sort_by_key(|record| record.date);
    stale
}
