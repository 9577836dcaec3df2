//! Table parsers for the dashboard's CSV sources.
//!
//! Each parser implements the `Parser` trait, producing typed records from
//! a delimited export with a header row. Headers are normalized before
//! deserialization so the raw source's header spelling does not matter.

pub mod orders;
pub mod states;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::errors::AppError;

/// Date layouts accepted for order and ship dates.
const DATE_FORMATS: [&str; 4] = ["%m/%d/%Y", "%Y-%m-%d", "%m-%d-%Y", "%Y/%m/%d"];

/// Trait for the table parsers.
pub trait Parser: Send + Sync {
    type Record;

    /// Parse a whole table. Any bad row fails the table.
    fn parse(&self, data: &[u8]) -> Result<Vec<Self::Record>, AppError>;

    /// Table name used in log lines and error messages.
    fn table(&self) -> &str;

    /// Columns the header must carry, each with its accepted spellings.
    fn required_columns(&self) -> &'static [&'static [&'static str]];
}

/// Lower-case a header and replace spaces with underscores.
pub fn normalize_header(header: &str) -> String {
    header.trim().replace(' ', "_").to_lowercase()
}

/// Build a CSV reader over `data` whose headers are already normalized.
///
/// Each entry of `required` lists the accepted spellings of one column. A
/// header missing any of them fails the table before a row is read, so an
/// empty body or a header-only file with drifted columns is rejected too.
pub(crate) fn reader_with_normalized_headers<'a>(
    data: &'a [u8],
    table: &str,
    required: &[&[&str]],
) -> Result<csv::Reader<&'a [u8]>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Fields)
        .from_reader(data);

    let headers: StringRecord = reader
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();

    let missing: Vec<&str> = required
        .iter()
        .filter(|spellings| !spellings.iter().any(|s| headers.iter().any(|h| h == *s)))
        .filter_map(|spellings| spellings.first().copied())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Load(format!(
            "{table}: missing required columns: {}",
            missing.join(", ")
        )));
    }

    reader.set_headers(headers);
    Ok(reader)
}

/// Parse a calendar date, ignoring any trailing time component.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let date_part = value
        .trim()
        .split(|c: char| c.is_whitespace() || c == 'T')
        .next()
        .filter(|part| !part.is_empty())?;
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}
