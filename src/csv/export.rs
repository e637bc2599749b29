//! Roster export.
//!
//! Produces the fixed-header dump the download/print flow consumes:
//! one row per (day, area, assignment), walking days in week order
//! and areas in catalog order, lists in placement order. Fields are
//! written unquoted — embedded commas are not escaped, matching the
//! file format the department's spreadsheets already expect.

use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;
use thiserror::Error;

use crate::models::{AreaCatalog, Day, StaffCatalog};
use crate::store::AssignmentStore;

/// Why an export failed.
#[derive(Debug, Error)]
pub enum CsvExportError {
    #[error("Failed to write CSV: {0}")]
    Write(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const HEADER: [&str; 5] = ["Day", "Area", "Staff Name", "Rank", "Primary Skillset"];

/// Writes the current roster as CSV.
///
/// Dangling staff ids (members removed after being placed) are
/// skipped, consistent with their exclusion from validation.
pub fn export_roster<W: Write>(
    writer: W,
    store: &AssignmentStore,
    areas: &AreaCatalog,
    staff: &StaffCatalog,
) -> Result<(), CsvExportError> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    wtr.write_record(HEADER)?;
    for day in Day::ALL {
        for area in areas.iter() {
            for &id in store.assigned(day, &area.id).unwrap_or(&[]) {
                if let Some(member) = staff.get(id) {
                    wtr.write_record([
                        day.label(),
                        area.name.as_str(),
                        member.name.as_str(),
                        member.rank.label(),
                        member.primary_skill.as_str(),
                    ])?;
                }
            }
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Renders the roster CSV to a string.
pub fn export_to_string(
    store: &AssignmentStore,
    areas: &AreaCatalog,
    staff: &StaffCatalog,
) -> Result<String, CsvExportError> {
    let mut buf = Vec::new();
    export_roster(&mut buf, store, areas, staff)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
