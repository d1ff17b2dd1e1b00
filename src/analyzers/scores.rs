//! Composite score aggregation.

use crate::analyzers::utility::{mean, round2};
use crate::parser::ResponseTable;
use crate::ratings::rating_value;

/// Pools every recognized rating across the listed columns and returns the
/// mean rounded to two decimals, or `None` when nothing contributed.
///
/// Columns missing from the export are skipped. Every row participates,
/// including a header-echo row at index 0: its question text fails rating
/// normalization and drops out of the pool, which is the intended behavior.
pub fn pooled_mean<S: AsRef<str>>(table: &ResponseTable, columns: &[S]) -> Option<f64> {
    let mut pool = Vec::new();

    for column in columns {
        if let Some(cells) = table.column(column.as_ref()) {
            pool.extend(cells.filter_map(rating_value).map(f64::from));
        }
    }

    if pool.is_empty() {
        None
    } else {
        Some(round2(mean(&pool)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_table;

    #[test]
    fn test_pools_across_columns() {
        let csv = "QID127,QID128,QID129\nAgree,Strongly Agree,Neutral\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        let score = pooled_mean(&table, &["QID127", "QID128", "QID129"]);
        assert_eq!(score, Some(4.0));
    }

    #[test]
    fn test_missing_columns_are_skipped() {
        let csv = "QID1\nAgree\nSatisfied\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        let score = pooled_mean(&table, &["QID1", "QID2"]);
        assert_eq!(score, Some(4.0));
    }

    #[test]
    fn test_no_contributing_values_is_none() {
        let csv = "QID1,QID2\nnot a rating,\n,\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        assert_eq!(pooled_mean(&table, &["QID1", "QID2"]), None);
        assert_eq!(pooled_mean(&table, &["QID99"]), None);
    }

    #[test]
    fn test_header_echo_row_drops_out_of_pool() {
        let csv = "QID1\nHow satisfied were you overall?\nSatisfied\nDissatisfied\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        // (4 + 2) / 2; the echoed question text contributes nothing
        assert_eq!(pooled_mean(&table, &["QID1"]), Some(3.0));
    }

    #[test]
    fn test_mean_rounds_half_to_even() {
        // 8 values summing to 33 -> 4.125 -> 4.12
        let csv = "QID1\nStrongly Agree\nStrongly Agree\nStrongly Agree\nStrongly Agree\nStrongly Agree\nAgree\nNeutral\nStrongly Disagree\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        assert_eq!(pooled_mean(&table, &["QID1"]), Some(4.12));
    }
}
