//! Roster domain models.
//!
//! Core data types for the duty-roster problem: who can work
//! (`StaffMember`, `StaffCatalog`), where work happens (`Area`,
//! `AreaCatalog`), and when (`Day`). Catalogs are read-mostly;
//! the mutable scheduling state lives in [`crate::store`].

mod area;
mod staff;
mod week;

pub use area::{Area, AreaCatalog};
pub use staff::{Rank, StaffCatalog, StaffId, StaffMember};
pub use week::Day;
