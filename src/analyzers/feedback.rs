//! Free-text feedback extraction.

use crate::analyzers::types::FeedbackBundle;
use crate::config::SurveyConfig;
use crate::parser::ResponseTable;

/// Pulls the improvement-suggestion and highlight comments from the export.
///
/// Row index 0 is always skipped (header-echo artifact, even when it looks
/// like real text). Remaining cells are trimmed and kept in row order with
/// empties dropped. No deduplication.
pub fn extract_feedback(table: &ResponseTable, config: &SurveyConfig) -> FeedbackBundle {
    FeedbackBundle {
        recommendations: column_texts(table, &config.recommendations_column),
        highlights: column_texts(table, &config.highlights_column),
    }
}

fn column_texts(table: &ResponseTable, column: &str) -> Vec<String> {
    let Some(cells) = table.column(column) else {
        return Vec::new();
    };

    cells
        .skip(1)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_table;

    #[test]
    fn test_row_zero_is_always_skipped() {
        let csv = "QID138_TEXT,QID142_TEXT\n\
                   What could we improve?,What stood out?\n\
                   More labs,Great pacing\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        let bundle = extract_feedback(&table, &SurveyConfig::default());
        assert_eq!(bundle.recommendations, vec!["More labs"]);
        assert_eq!(bundle.highlights, vec!["Great pacing"]);
    }

    #[test]
    fn test_empty_and_whitespace_entries_are_dropped() {
        let csv = "QID142_TEXT\necho\n  \n\nLoved the demos\n   trimmed   \n";
        let table = parse_table(csv.as_bytes()).unwrap();

        let bundle = extract_feedback(&table, &SurveyConfig::default());
        assert_eq!(bundle.highlights, vec!["Loved the demos", "trimmed"]);
        assert!(bundle.recommendations.is_empty());
    }

    #[test]
    fn test_order_preserved_no_dedup() {
        let csv = "QID138_TEXT\necho\nsame\nother\nsame\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        let bundle = extract_feedback(&table, &SurveyConfig::default());
        assert_eq!(bundle.recommendations, vec!["same", "other", "same"]);
    }

    #[test]
    fn test_missing_columns_yield_empty_bundle() {
        let csv = "QID1\nAgree\n";
        let table = parse_table(csv.as_bytes()).unwrap();

        let bundle = extract_feedback(&table, &SurveyConfig::default());
        assert!(bundle.is_empty());
    }
}
