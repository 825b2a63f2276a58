use std::io::Read;

use tracing::warn;

// Column positions in the upstream registered-auditors export. The file has
// no stable header names across revisions, so rows are read positionally.
const NAME_COLUMN: usize = 1;
const COMPANY_COLUMN: usize = 2;
const REGISTRATION_DATE_COLUMN: usize = 5;
const MIN_COLUMNS: usize = 6;

/// One well-formed data row of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RegistryRow {
    pub(crate) name: String,
    pub(crate) company: String,
    pub(crate) registration_date: String,
}

/// Rows that survived a parse pass, plus skip accounting.
#[derive(Debug)]
pub(crate) struct ParsedExport {
    pub(crate) rows: Vec<RegistryRow>,
    pub(crate) seen: usize,
    pub(crate) skipped: usize,
}

/// Reads the export, skipping the header row and any data row too short to
/// carry the columns we need. Short rows are counted, never fatal.
pub(crate) fn parse_export<R: Read>(reader: R) -> Result<ParsedExport, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    let mut seen = 0usize;
    let mut skipped = 0usize;

    for record in csv_reader.records() {
        let record = record?;
        seen += 1;

        if record.len() < MIN_COLUMNS {
            // +1 so the number matches the raw file, header included
            warn!(
                row = seen + 1,
                columns = record.len(),
                "skipping malformed registry row"
            );
            skipped += 1;
            continue;
        }

        rows.push(RegistryRow {
            name: record.get(NAME_COLUMN).unwrap_or("").to_string(),
            company: record.get(COMPANY_COLUMN).unwrap_or("").to_string(),
            registration_date: record
                .get(REGISTRATION_DATE_COLUMN)
                .unwrap_or("")
                .to_string(),
        });
    }

    Ok(ParsedExport { rows, seen, skipped })
}
