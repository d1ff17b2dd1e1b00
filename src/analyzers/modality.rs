//! Delivery-format classification.

use crate::analyzers::types::DeliveryFormat;
use crate::config::SurveyConfig;
use crate::parser::ResponseTable;
use crate::ratings::rating_value;

/// Decides the delivery format for the whole table.
///
/// Virtual iff the virtual-indicator column is in the export and at least one
/// row carries a recognized rating there. The decision is table-global; row
/// order never matters.
pub fn classify(table: &ResponseTable, config: &SurveyConfig) -> DeliveryFormat {
    let is_virtual = table
        .column(&config.virtual_indicator)
        .is_some_and(|mut cells| cells.any(|cell| rating_value(cell).is_some()));

    if is_virtual {
        DeliveryFormat::Virtual
    } else {
        DeliveryFormat::InPerson
    }
}

/// The two columns feeding the Classroom score for the given format.
pub fn classroom_columns(format: DeliveryFormat, config: &SurveyConfig) -> [&str; 2] {
    match format {
        DeliveryFormat::Virtual => [&config.virtual_indicator, &config.shared_classroom],
        DeliveryFormat::InPerson => [&config.in_person_indicator, &config.shared_classroom],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_table;

    #[test]
    fn test_missing_indicator_column_is_in_person() {
        let csv = "QID58,QID59\nSatisfied,Agree\n";
        let table = parse_table(csv.as_bytes()).unwrap();
        let config = SurveyConfig::default();

        assert_eq!(classify(&table, &config), DeliveryFormat::InPerson);
    }

    #[test]
    fn test_empty_indicator_column_is_in_person() {
        let csv = "QID130,QID59\n,Agree\nquestion text echo,Neutral\n";
        let table = parse_table(csv.as_bytes()).unwrap();
        let config = SurveyConfig::default();

        assert_eq!(classify(&table, &config), DeliveryFormat::InPerson);
    }

    #[test]
    fn test_any_rated_indicator_response_is_virtual() {
        let csv = "QID130,QID59\n,\n,\nExtremely Satisfied,\n";
        let table = parse_table(csv.as_bytes()).unwrap();
        let config = SurveyConfig::default();

        assert_eq!(classify(&table, &config), DeliveryFormat::Virtual);
    }

    #[test]
    fn test_classroom_columns_follow_format() {
        let config = SurveyConfig::default();
        assert_eq!(
            classroom_columns(DeliveryFormat::Virtual, &config),
            ["QID130", "QID59"]
        );
        assert_eq!(
            classroom_columns(DeliveryFormat::InPerson, &config),
            ["QID58", "QID59"]
        );
    }
}
