//! Assignment store.
//!
//! The single source of truth for "who is where": for each day of the
//! week and each area, an ordered list of staff ids (insertion order
//! is display order, nothing more). The store is created empty from
//! an area catalog and discarded at session end; every mutation goes
//! through [`crate::engine`], which upholds the invariants:
//!
//! - a staff id appears in at most one area per day
//! - a staff id appears at most once within a list
//! - ids left dangling by a catalog replacement never crash a lookup

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{AreaCatalog, Day, StaffId};

/// Per-(day, area) assignment lists for one roster week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentStore {
    /// One board per day, indexed by `Day::index()`.
    days: [HashMap<String, Vec<StaffId>>; 5],
}

impl AssignmentStore {
    /// Creates an empty store covering every (day, area) pair of the
    /// catalog. Area ids outside the catalog stay unknown to the
    /// store for its whole lifetime.
    pub fn for_catalog(catalog: &AreaCatalog) -> Self {
        let board: HashMap<String, Vec<StaffId>> = catalog
            .iter()
            .map(|a| (a.id.clone(), Vec::new()))
            .collect();
        Self {
            days: std::array::from_fn(|_| board.clone()),
        }
    }

    /// The assignment list for (day, area), or `None` for an unknown
    /// area id.
    pub fn assigned(&self, day: Day, area_id: &str) -> Option<&[StaffId]> {
        self.days[day.index()].get(area_id).map(Vec::as_slice)
    }

    pub(crate) fn list_mut(&mut self, day: Day, area_id: &str) -> Option<&mut Vec<StaffId>> {
        self.days[day.index()].get_mut(area_id)
    }

    /// Whether the staff id appears in any area's list for the day.
    pub fn is_assigned_on_day(&self, staff_id: StaffId, day: Day) -> bool {
        self.days[day.index()]
            .values()
            .any(|list| list.contains(&staff_id))
    }

    /// The area holding the staff id on the day, if any.
    pub fn area_of(&self, staff_id: StaffId, day: Day) -> Option<&str> {
        self.days[day.index()]
            .iter()
            .find(|(_, list)| list.contains(&staff_id))
            .map(|(id, _)| id.as_str())
    }

    /// All (area id, list) pairs for a day. Iteration order is
    /// unspecified; callers wanting display order walk the area
    /// catalog instead.
    pub fn iter_day(&self, day: Day) -> impl Iterator<Item = (&str, &[StaffId])> {
        self.days[day.index()]
            .iter()
            .map(|(id, list)| (id.as_str(), list.as_slice()))
    }

    /// Total assignments across the day.
    pub fn day_total(&self, day: Day) -> usize {
        self.days[day.index()].values().map(Vec::len).sum()
    }

    /// Total assignments across the week.
    pub fn week_total(&self) -> usize {
        Day::ALL.iter().map(|&d| self.day_total(d)).sum()
    }

    /// Empties every list, keeping the (day, area) keys.
    pub fn clear(&mut self) {
        for board in &mut self.days {
            for list in board.values_mut() {
                list.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> AssignmentStore {
        AssignmentStore::for_catalog(&AreaCatalog::standard())
    }

    #[test]
    fn test_starts_empty_with_all_keys() {
        let store = sample_store();
        for day in Day::ALL {
            assert_eq!(store.assigned(day, "ot9"), Some(&[][..]));
            assert_eq!(store.assigned(day, "pacu"), Some(&[][..]));
        }
        assert_eq!(store.week_total(), 0);
    }

    #[test]
    fn test_unknown_area_is_none() {
        let store = sample_store();
        assert_eq!(store.assigned(Day::Monday, "icu"), None);
    }

    #[test]
    fn test_day_queries() {
        let mut store = sample_store();
        store.list_mut(Day::Monday, "ot9").unwrap().push(7);
        store.list_mut(Day::Monday, "pacu").unwrap().push(8);

        assert!(store.is_assigned_on_day(7, Day::Monday));
        assert!(!store.is_assigned_on_day(7, Day::Tuesday));
        assert_eq!(store.area_of(7, Day::Monday), Some("ot9"));
        assert_eq!(store.area_of(9, Day::Monday), None);
        assert_eq!(store.day_total(Day::Monday), 2);
        assert_eq!(store.day_total(Day::Tuesday), 0);
    }

    #[test]
    fn test_clear_keeps_keys() {
        let mut store = sample_store();
        store.list_mut(Day::Friday, "daysurg").unwrap().push(3);
        store.clear();
        assert_eq!(store.week_total(), 0);
        assert_eq!(store.assigned(Day::Friday, "daysurg"), Some(&[][..]));
    }
}
