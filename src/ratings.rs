//! The Likert rating vocabulary.
//!
//! Survey exports carry ratings as text on two parallel 5-point scales
//! (agreement and satisfaction). Both map onto the same 1–5 range.

/// The fixed rating vocabulary. Matching is exact and case-sensitive.
static RATING_SCALE: &[(&str, u8)] = &[
    ("Strongly Agree", 5),
    ("Agree", 4),
    ("Neutral", 3),
    ("Disagree", 2),
    ("Strongly Disagree", 1),
    ("Extremely Satisfied", 5),
    ("Satisfied", 4),
    ("Neither Satisfied nor Dissatisfied", 3),
    ("Dissatisfied", 2),
    ("Extremely Dissatisfied", 1),
];

/// Converts a raw rating cell into its numeric value (1–5).
///
/// The cell is trimmed and matched exactly against the vocabulary; anything
/// else (unrecognized text, case variants, empty cells) is `None`. A cell
/// that drops here is excluded from averages, never an error.
pub fn rating_value(cell: &str) -> Option<u8> {
    let trimmed = cell.trim();
    RATING_SCALE
        .iter()
        .find(|(label, _)| *label == trimmed)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agreement_scale() {
        assert_eq!(rating_value("Strongly Agree"), Some(5));
        assert_eq!(rating_value("Agree"), Some(4));
        assert_eq!(rating_value("Neutral"), Some(3));
        assert_eq!(rating_value("Disagree"), Some(2));
        assert_eq!(rating_value("Strongly Disagree"), Some(1));
    }

    #[test]
    fn test_satisfaction_scale() {
        assert_eq!(rating_value("Extremely Satisfied"), Some(5));
        assert_eq!(rating_value("Satisfied"), Some(4));
        assert_eq!(rating_value("Neither Satisfied nor Dissatisfied"), Some(3));
        assert_eq!(rating_value("Dissatisfied"), Some(2));
        assert_eq!(rating_value("Extremely Dissatisfied"), Some(1));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(rating_value("  Agree  "), Some(4));
        assert_eq!(rating_value("\tSatisfied\n"), Some(4));
    }

    #[test]
    fn test_unrecognized_text_is_none() {
        assert_eq!(rating_value(""), None);
        assert_eq!(rating_value("   "), None);
        assert_eq!(rating_value("agree"), None);
        assert_eq!(rating_value("AGREE"), None);
        assert_eq!(rating_value("Agree."), None);
        assert_eq!(rating_value("Strongly  Agree"), None);
        assert_eq!(rating_value("4"), None);
    }
}
