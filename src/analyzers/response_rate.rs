//! Response-rate metrics.

use crate::analyzers::types::ResponseRate;
use crate::analyzers::utility::round1;
use crate::parser::ResponseTable;

/// Counts valid responses and computes the rate against the expected
/// learner count supplied by the caller.
///
/// Rows that are empty across all columns are dropped, then one row is
/// subtracted for the header echo (floored at zero so an empty export never
/// goes negative). With no expected count the rate is 0; all three fields
/// are always present either way.
pub fn response_rate(table: &ResponseTable, total_learners: u32) -> ResponseRate {
    let non_empty = (0..table.row_count())
        .filter(|&row| !table.is_row_empty(row))
        .count();

    let total_responses = non_empty.saturating_sub(1);

    let rate = if total_learners > 0 {
        round1(total_responses as f64 / total_learners as f64 * 100.0)
    } else {
        0.0
    };

    ResponseRate {
        response_rate: rate,
        total_responses,
        total_learners,
    }
}
