//! Assignment commands.
//!
//! The only mutation path into the [`AssignmentStore`]. Each external
//! interaction (a drop onto an area, a manual removal) maps to one
//! command here; the presentation layer calls the command and renders
//! the result. A rejected command leaves the store untouched.
//!
//! Callers are expected to check [`is_assigned_on_day`] before
//! offering a drop target, so the `AlreadyAssignedThisDay` rejection
//! is a backstop rather than a primary flow.

use thiserror::Error;

use crate::models::{Day, StaffId};
use crate::store::AssignmentStore;

/// Why an `assign` command was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    /// The area id is not a key of the store.
    #[error("Unknown area '{area_id}'")]
    UnknownArea { area_id: String },

    /// The staff member already holds a slot somewhere on that day.
    #[error("Staff #{staff_id} is already assigned on {day}")]
    AlreadyAssignedThisDay { staff_id: StaffId, day: Day },
}

/// Appends the staff id to the area's list for the day.
///
/// Rejects unknown area ids and double-booking: a staff id already
/// present in any area's list for `day` (including this one) is not
/// placed again. On rejection the store is unchanged.
pub fn assign(
    store: &mut AssignmentStore,
    day: Day,
    area_id: &str,
    staff_id: StaffId,
) -> Result<(), AssignError> {
    if store.assigned(day, area_id).is_none() {
        return Err(AssignError::UnknownArea {
            area_id: area_id.to_string(),
        });
    }
    if store.is_assigned_on_day(staff_id, day) {
        return Err(AssignError::AlreadyAssignedThisDay { staff_id, day });
    }
    // Key existence checked above.
    if let Some(list) = store.list_mut(day, area_id) {
        list.push(staff_id);
    }
    Ok(())
}

/// Removes the first occurrence of the staff id from the area's list.
///
/// Idempotent: an absent id, or an unknown area, is a no-op.
pub fn remove(store: &mut AssignmentStore, day: Day, area_id: &str, staff_id: StaffId) {
    if let Some(list) = store.list_mut(day, area_id) {
        if let Some(pos) = list.iter().position(|&id| id == staff_id) {
            list.remove(pos);
        }
    }
}

/// Whether the staff member already holds a slot on the day.
///
/// The presentation layer uses this to disable re-dragging an
/// already-placed member.
pub fn is_assigned_on_day(store: &AssignmentStore, staff_id: StaffId, day: Day) -> bool {
    store.is_assigned_on_day(staff_id, day)
}
