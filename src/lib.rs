//! Duty-roster engine for a five-day clinical week.
//!
//! Assigns staff members to work areas and verifies each assignment
//! against staffing rules (headcount, senior-specialist presence,
//! skill match) and fairness rules (no double-booking). Built for a
//! department coordinator's roster board; rendering, drag-and-drop,
//! and file dialogs are external collaborators that call into this
//! crate and display its results.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `StaffMember`, `Rank`, `StaffCatalog`,
//!   `Area`, `AreaCatalog`, `Day`
//! - **`store`**: `AssignmentStore`, the (day, area) → staff mapping
//! - **`engine`**: assign/remove/query commands over the store
//! - **`validation`**: per-(day, area) staffing findings
//! - **`rotation`**: one-shift-per-person weekly rotation builder
//! - **`csv`**: staff import and roster export
//!
//! # Architecture
//!
//! The store is plain owned state; every mutation goes through the
//! `engine` commands, which enforce the no-double-booking invariant
//! and reject bad preconditions without touching the store.
//! `validation::evaluate` is a pure function of catalogs plus store
//! contents — it is queried on demand, never maintained reactively.
//! The rotation builder is a standalone batch routine that neither
//! reads nor writes the store.

pub mod csv;
pub mod engine;
pub mod models;
pub mod rotation;
pub mod store;
pub mod validation;

pub use models::{Area, AreaCatalog, Day, Rank, StaffCatalog, StaffId, StaffMember};
pub use store::AssignmentStore;
