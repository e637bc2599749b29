//! Staff-list import.
//!
//! The header row is matched case- and whitespace-insensitively
//! against a fixed alias table; columns the file doesn't carry fall
//! back to declared defaults. Rows shorter than the header read as
//! empty strings for the missing cells — a malformed row never fails
//! the import. Ids are assigned fresh by the catalog, so repeated
//! imports within one session can't collide.
//!
//! | Aliases                         | Field          | Default if column absent |
//! |---------------------------------|----------------|--------------------------|
//! | `staffname`, `name`             | name           | (column required)        |
//! | `rank`                          | rank           | `RN`                     |
//! | `primaryskillset`, `primary`    | primary skill  | `General`                |
//! | `secondaryskillset`, `secondary`| secondary skill| `General`                |

use csv::ReaderBuilder;
use std::io::Read;
use thiserror::Error;

use crate::models::{Rank, StaffCatalog};

/// Why an import failed outright.
///
/// Only an unreadable stream or a header with no recognizable name
/// column is fatal; everything else degrades to defaults.
#[derive(Debug, Error)]
pub enum CsvImportError {
    #[error("No staff name column found in header")]
    MissingNameColumn,

    #[error("Failed to read CSV: {0}")]
    Read(#[from] csv::Error),
}

/// Canonical columns the importer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    Rank,
    Primary,
    Secondary,
}

fn canonical_column(header: &str) -> Option<Column> {
    let key: String = header
        .to_ascii_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    match key.as_str() {
        "staffname" | "name" => Some(Column::Name),
        "rank" => Some(Column::Rank),
        "primaryskillset" | "primary" => Some(Column::Primary),
        "secondaryskillset" | "secondary" => Some(Column::Secondary),
        _ => None,
    }
}

/// Positions of the recognized columns in this file's header.
struct Schema {
    name: usize,
    rank: Option<usize>,
    primary: Option<usize>,
    secondary: Option<usize>,
}

impl Schema {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, CsvImportError> {
        let mut name = None;
        let mut rank = None;
        let mut primary = None;
        let mut secondary = None;
        for (i, h) in headers.iter().enumerate() {
            match canonical_column(h) {
                Some(Column::Name) => name.get_or_insert(i),
                Some(Column::Rank) => rank.get_or_insert(i),
                Some(Column::Primary) => primary.get_or_insert(i),
                Some(Column::Secondary) => secondary.get_or_insert(i),
                None => continue,
            };
        }
        Ok(Self {
            name: name.ok_or(CsvImportError::MissingNameColumn)?,
            rank,
            primary,
            secondary,
        })
    }
}

/// Parsed member fields: (name, rank, primary skill, secondary skill).
type StaffRow = (String, Rank, String, String);

fn read_rows<R: Read>(reader: R) -> Result<Vec<StaffRow>, CsvImportError> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        // Empty input: an empty roster, not a failure.
        return Ok(Vec::new());
    }
    let schema = Schema::from_headers(&headers)?;

    // A short row reads as empty strings for its missing cells; an
    // absent column falls back to the declared default.
    let cell = |record: &csv::StringRecord, idx: usize| -> String {
        record.get(idx).unwrap_or("").to_string()
    };
    let cell_or = |record: &csv::StringRecord, idx: Option<usize>, default: &str| -> String {
        match idx {
            Some(i) => cell(record, i),
            None => default.to_string(),
        }
    };

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push((
            cell(&record, schema.name),
            Rank::parse_lenient(&cell_or(&record, schema.rank, "RN")),
            cell_or(&record, schema.primary, "General"),
            cell_or(&record, schema.secondary, "General"),
        ));
    }
    Ok(rows)
}

/// Imports a staff list into a fresh catalog.
pub fn import_staff<R: Read>(reader: R) -> Result<StaffCatalog, CsvImportError> {
    let mut catalog = StaffCatalog::new();
    replace_catalog(&mut catalog, reader)?;
    Ok(catalog)
}

/// Replaces the catalog's roster wholesale from a staff list.
///
/// The whole file is parsed before the catalog is touched, so a read
/// failure leaves the existing roster intact and no reader ever sees
/// a half-replaced catalog. The id counter keeps running across
/// replacements.
pub fn replace_catalog<R: Read>(
    catalog: &mut StaffCatalog,
    reader: R,
) -> Result<(), CsvImportError> {
    let rows = read_rows(reader)?;
    catalog.replace(rows);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_header_import() {
        let data = "\
StaffName,Rank,PrimarySkillset,SecondarySkillset
Alice Ang,APN,PACU,General
Ben Ong,RN,Day Ward,Pre-Anaesthetic
";
        let catalog = import_staff(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        let alice = catalog.get(0).unwrap();
        assert_eq!(alice.name, "Alice Ang");
        assert_eq!(alice.rank, Rank::Apn);
        assert_eq!(alice.primary_skill, "PACU");
        let ben = catalog.get(1).unwrap();
        assert_eq!(ben.secondary_skill, "Pre-Anaesthetic");
    }

    #[test]
    fn test_header_aliases_case_and_whitespace_insensitive() {
        let data = "\
 Name , RANK , Primary , Secondary
Carol Lim,en,OT,General
";
        let catalog = import_staff(data.as_bytes()).unwrap();
        let carol = catalog.get(0).unwrap();
        assert_eq!(carol.name, "Carol Lim");
        assert_eq!(carol.rank, Rank::En);
        assert_eq!(carol.primary_skill, "OT");
    }

    #[test]
    fn test_absent_columns_use_defaults() {
        // Name-only file: rank RN, both skills General.
        let data = "name\nDana Teo\n";
        let catalog = import_staff(data.as_bytes()).unwrap();
        let dana = catalog.get(0).unwrap();
        assert_eq!(dana.rank, Rank::Rn);
        assert_eq!(dana.primary_skill, "General");
        assert_eq!(dana.secondary_skill, "General");
    }

    #[test]
    fn test_short_rows_read_as_empty_cells() {
        let data = "\
StaffName,Rank,PrimarySkillset,SecondarySkillset
Evan Goh,APN
";
        let catalog = import_staff(data.as_bytes()).unwrap();
        let evan = catalog.get(0).unwrap();
        assert_eq!(evan.rank, Rank::Apn);
        assert_eq!(evan.primary_skill, "");
        assert_eq!(evan.secondary_skill, "");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let data = "name,rank\nFiona Tan,RN\n\n\nGopal Nair,EN\n";
        let catalog = import_staff(data.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_empty_catalog() {
        let catalog = import_staff(&b""[..]).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_header_only_input_yields_empty_catalog() {
        let catalog = import_staff(&b"name,rank\n"[..]).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_missing_name_column_is_an_error() {
        let err = import_staff(&b"rank,shoe size\nRN,42\n"[..]).unwrap_err();
        assert!(matches!(err, CsvImportError::MissingNameColumn));
    }

    #[test]
    fn test_reimport_never_reuses_ids() {
        let mut catalog = import_staff(&b"name\nAlice\nBen\n"[..]).unwrap();
        replace_catalog(&mut catalog, &b"name\nCarol\n"[..]).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.iter().next().unwrap().id, 2);
        assert!(!catalog.contains(0));
    }

    #[test]
    fn test_unrecognized_rank_defaults_to_rn() {
        let data = "name,rank\nHana Lee,Matron\n";
        let catalog = import_staff(data.as_bytes()).unwrap();
        assert_eq!(catalog.get(0).unwrap().rank, Rank::Rn);
    }
}
