//! CSV import and export.
//!
//! The file-reading and file-writing collaborators hand this module
//! raw byte streams; it never touches the filesystem itself.
//!
//! - **`import`**: staff lists with a declared header-alias schema
//!   and per-column defaults; malformed rows degrade, they don't fail
//! - **`export`**: the fixed-header roster dump consumed by the
//!   print/download flow

mod export;
mod import;

pub use export::{export_roster, export_to_string, CsvExportError};
pub use import::{import_staff, replace_catalog, CsvImportError};
