//! Weekly evening-rotation builder.
//!
//! A standalone batch routine, independent of the assignment store:
//! given three disjoint staff pools (specialists, operating-room
//! nurses, day-surgery nurses), it fills the week's ten evening
//! slots — two per day, starting 10:12 and 12:12 — with one member
//! of each pool per slot.
//!
//! Fairness rule: a single used-set spans the whole week, so nobody
//! works more than one shift across all ten slots. Selection is
//! deterministic — the first not-yet-used member in pool order. When
//! a pool runs dry the role is reported as exhausted and the fill
//! continues; no id is ever fabricated.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{Day, StaffId};

/// The two evening shifts of each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    /// 10:12 – 19:00.
    Early,
    /// 12:12 – 21:00.
    Late,
}

impl Shift {
    /// Both shifts in fill order.
    pub const ALL: [Shift; 2] = [Shift::Early, Shift::Late];

    /// Shift start, as displayed on the board.
    pub fn start_label(&self) -> &'static str {
        match self {
            Shift::Early => "10:12",
            Shift::Late => "12:12",
        }
    }

    /// Shift end, as displayed on the board.
    pub fn end_label(&self) -> &'static str {
        match self {
            Shift::Early => "19:00",
            Shift::Late => "21:00",
        }
    }
}

/// The three roles staffed in every rotation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Specialist,
    OrNurse,
    DsNurse,
}

/// Outcome of filling one role in one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleAssignment {
    /// The member holding the role.
    Staffed(StaffId),
    /// The pool had no unused member left; the role stays open.
    PoolExhausted,
}

impl RoleAssignment {
    /// The assigned id, if the role was filled.
    pub fn staff_id(&self) -> Option<StaffId> {
        match self {
            RoleAssignment::Staffed(id) => Some(*id),
            RoleAssignment::PoolExhausted => None,
        }
    }
}

/// One of the ten (day, shift) slots of the rotation week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationSlot {
    pub day: Day,
    pub shift: Shift,
    pub specialist: RoleAssignment,
    pub or_nurse: RoleAssignment,
    pub ds_nurse: RoleAssignment,
}

impl RotationSlot {
    /// The role outcomes in fixed order.
    pub fn roles(&self) -> [(Role, RoleAssignment); 3] {
        [
            (Role::Specialist, self.specialist),
            (Role::OrNurse, self.or_nurse),
            (Role::DsNurse, self.ds_nurse),
        ]
    }
}

/// A full week of rotation slots, in fill order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationWeek {
    pub slots: Vec<RotationSlot>,
}

impl RotationWeek {
    /// Whether every role of every slot was filled.
    pub fn is_fully_staffed(&self) -> bool {
        self.slots.iter().all(|s| {
            s.roles()
                .iter()
                .all(|(_, a)| *a != RoleAssignment::PoolExhausted)
        })
    }

    /// Every (day, shift, role) left open by pool exhaustion.
    pub fn exhausted_roles(&self) -> Vec<(Day, Shift, Role)> {
        self.slots
            .iter()
            .flat_map(|s| {
                s.roles()
                    .into_iter()
                    .filter(|(_, a)| *a == RoleAssignment::PoolExhausted)
                    .map(move |(role, _)| (s.day, s.shift, role))
            })
            .collect()
    }
}

/// Builds the week's rotation from three disjoint pools.
///
/// Slots are filled in fixed order (Monday early, Monday late,
/// Tuesday early, …); within a pool the first not-yet-used member is
/// taken, so the result is deterministic for a given pool order.
pub fn build_rotation(
    specialists: &[StaffId],
    or_nurses: &[StaffId],
    ds_nurses: &[StaffId],
) -> RotationWeek {
    let mut used: HashSet<StaffId> = HashSet::new();
    let mut slots = Vec::with_capacity(Day::ALL.len() * Shift::ALL.len());

    for day in Day::ALL {
        for shift in Shift::ALL {
            slots.push(RotationSlot {
                day,
                shift,
                specialist: take_unused(specialists, &mut used),
                or_nurse: take_unused(or_nurses, &mut used),
                ds_nurse: take_unused(ds_nurses, &mut used),
            });
        }
    }

    RotationWeek { slots }
}

fn take_unused(pool: &[StaffId], used: &mut HashSet<StaffId>) -> RoleAssignment {
    for &id in pool {
        if used.insert(id) {
            return RoleAssignment::Staffed(id);
        }
    }
    RoleAssignment::PoolExhausted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(start: StaffId, len: usize) -> Vec<StaffId> {
        (start..start + len as StaffId).collect()
    }

    #[test]
    fn test_ten_slots_in_fixed_order() {
        let week = build_rotation(&pool(0, 10), &pool(100, 10), &pool(200, 10));
        assert_eq!(week.slots.len(), 10);
        assert_eq!(week.slots[0].day, Day::Monday);
        assert_eq!(week.slots[0].shift, Shift::Early);
        assert_eq!(week.slots[1].day, Day::Monday);
        assert_eq!(week.slots[1].shift, Shift::Late);
        assert_eq!(week.slots[2].day, Day::Tuesday);
        assert_eq!(week.slots[9].day, Day::Friday);
        assert_eq!(week.slots[9].shift, Shift::Late);
    }

    #[test]
    fn test_nobody_works_twice_in_a_week() {
        let week = build_rotation(&pool(0, 10), &pool(100, 10), &pool(200, 10));
        let mut seen = HashSet::new();
        for slot in &week.slots {
            for (_, assignment) in slot.roles() {
                if let Some(id) = assignment.staff_id() {
                    assert!(seen.insert(id), "staff {id} used twice");
                }
            }
        }
        assert!(week.is_fully_staffed());
        assert_eq!(seen.len(), 30);
    }

    #[test]
    fn test_first_available_in_pool_order() {
        let week = build_rotation(&[7, 3, 9], &pool(100, 10), &pool(200, 10));
        assert_eq!(week.slots[0].specialist, RoleAssignment::Staffed(7));
        assert_eq!(week.slots[1].specialist, RoleAssignment::Staffed(3));
        assert_eq!(week.slots[2].specialist, RoleAssignment::Staffed(9));
    }

    #[test]
    fn test_specialist_pool_exhaustion() {
        // Two specialists for ten slots: slots 3..10 report the
        // specialist role exhausted while the larger pools keep
        // filling normally.
        let week = build_rotation(&pool(0, 2), &pool(100, 10), &pool(200, 10));

        for (i, slot) in week.slots.iter().enumerate() {
            if i < 2 {
                assert!(matches!(slot.specialist, RoleAssignment::Staffed(_)));
            } else {
                assert_eq!(slot.specialist, RoleAssignment::PoolExhausted);
            }
            assert!(matches!(slot.or_nurse, RoleAssignment::Staffed(_)));
            assert!(matches!(slot.ds_nurse, RoleAssignment::Staffed(_)));
        }

        assert!(!week.is_fully_staffed());
        let open = week.exhausted_roles();
        assert_eq!(open.len(), 8);
        assert!(open.iter().all(|(_, _, role)| *role == Role::Specialist));
        assert_eq!(open[0], (Day::Tuesday, Shift::Early, Role::Specialist));
    }

    #[test]
    fn test_empty_pools_never_panic() {
        let week = build_rotation(&[], &[], &[]);
        assert_eq!(week.slots.len(), 10);
        assert!(!week.is_fully_staffed());
        assert_eq!(week.exhausted_roles().len(), 30);
    }

    #[test]
    fn test_determinism() {
        let a = build_rotation(&pool(0, 5), &pool(100, 5), &pool(200, 5));
        let b = build_rotation(&pool(0, 5), &pool(100, 5), &pool(200, 5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shift_labels() {
        assert_eq!(Shift::Early.start_label(), "10:12");
        assert_eq!(Shift::Early.end_label(), "19:00");
        assert_eq!(Shift::Late.start_label(), "12:12");
        assert_eq!(Shift::Late.end_label(), "21:00");
    }

    #[test]
    fn test_week_serde_roundtrip() {
        let week = build_rotation(&pool(0, 2), &pool(100, 3), &pool(200, 3));
        let json = serde_json::to_string(&week).unwrap();
        let back: RotationWeek = serde_json::from_str(&json).unwrap();
        assert_eq!(back, week);
    }
}
