//! State name to abbreviation lookup parser.

use crate::errors::AppError;
use crate::models::state::StateLookup;
use crate::parsers::{reader_with_normalized_headers, Parser};

/// Parser for the `{state, abbreviation}` lookup table.
#[derive(Debug, Default)]
pub struct StatesParser;

impl StatesParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for StatesParser {
    type Record = StateLookup;

    fn parse(&self, data: &[u8]) -> Result<Vec<StateLookup>, AppError> {
        let mut reader =
            reader_with_normalized_headers(data, self.table(), self.required_columns())?;
        let mut states = Vec::new();

        for (i, result) in reader.deserialize::<StateLookup>().enumerate() {
            let record = result
                .map_err(|e| AppError::Load(format!("{} line {}: {e}", self.table(), i + 2)))?;
            states.push(record);
        }

        Ok(states)
    }

    fn table(&self) -> &str {
        "states"
    }

    fn required_columns(&self) -> &'static [&'static [&'static str]] {
        &[&["state"], &["abbreviation"]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fixture() {
        let data = include_bytes!("../../tests/fixtures/states_sample.csv");
        let states = StatesParser::new().parse(data).unwrap();
        assert_eq!(states.len(), 7);
        assert_eq!(
            states[0],
            StateLookup {
                state: "California".to_string(),
                abbreviation: "CA".to_string(),
            }
        );
    }

    #[test]
    fn extra_columns_are_ignored() {
        let data = b"Rank,State,Abbreviation,Code\n1,Texas,TX,Tex.\n";
        let states = StatesParser::new().parse(data).unwrap();
        assert_eq!(states[0].abbreviation, "TX");
    }

    #[test]
    fn missing_abbreviation_column_fails() {
        let data = b"State,Code\nTexas,Tex.\n";
        let err = StatesParser::new().parse(data).unwrap_err();
        assert!(err.is_load_failure());
        assert!(err
            .to_string()
            .contains("states: missing required columns: abbreviation"));
    }

    #[test]
    fn header_only_with_unknown_columns_fails() {
        let err = StatesParser::new().parse(b"name,code\n").unwrap_err();
        assert!(err.is_load_failure());
        assert_eq!(
            err.to_string(),
            "Load error: states: missing required columns: state, abbreviation"
        );
    }

    #[test]
    fn header_only_yields_empty_table() {
        let states = StatesParser::new().parse(b"State,Abbreviation\n").unwrap();
        assert!(states.is_empty());
    }
}
