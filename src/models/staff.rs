//! Staff model.
//!
//! Staff members are the people the coordinator places on the board:
//! each carries a rank and two skill sets. The catalog owns the
//! roster and hands out ids; members are immutable once created —
//! a new import replaces the catalog wholesale rather than mutating
//! individual fields.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier for a staff member, unique within a session.
///
/// Ids are allocated by [`StaffCatalog`] and never reused, even
/// across repeated imports.
pub type StaffId = u32;

/// A staff member employable on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Catalog-assigned identifier.
    pub id: StaffId,
    /// Display name.
    pub name: String,
    /// Professional rank.
    pub rank: Rank,
    /// Main skill set (e.g., "PACU", "Day Ward").
    pub primary_skill: String,
    /// Fallback skill set.
    pub secondary_skill: String,
}

/// Professional rank.
///
/// `Apn` is the senior specialist rank; some areas require at least
/// one APN on duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Advanced Practice Nurse (senior specialist).
    Apn,
    /// Registered Nurse.
    Rn,
    /// Enrolled Nurse.
    En,
}

impl Rank {
    /// Parses rank text as it appears in import files.
    ///
    /// Case- and whitespace-insensitive. Unrecognized text falls back
    /// to `Rn` rather than failing the row.
    pub fn parse_lenient(text: &str) -> Rank {
        match text.trim().to_ascii_uppercase().as_str() {
            "APN" => Rank::Apn,
            "EN" => Rank::En,
            _ => Rank::Rn,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Apn => "APN",
            Rank::Rn => "RN",
            Rank::En => "EN",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl StaffMember {
    /// Whether either skill set covers the given requirement.
    pub fn covers_skill(&self, skill: &str) -> bool {
        self.primary_skill == skill || self.secondary_skill == skill
    }
}

/// The roster of employable staff.
///
/// Insertion order is preserved for display; lookups by id go through
/// an index. The id counter survives [`StaffCatalog::replace`], so a
/// re-import never collides with ids already placed on the board.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "StaffCatalogRows")]
pub struct StaffCatalog {
    members: Vec<StaffMember>,
    #[serde(skip)]
    index: HashMap<StaffId, usize>,
    next_id: StaffId,
}

/// Wire form of [`StaffCatalog`]: the id index is derived state and
/// is rebuilt on deserialization, so a catalog loaded from JSON
/// resolves lookups like a freshly built one.
#[derive(Deserialize)]
struct StaffCatalogRows {
    members: Vec<StaffMember>,
    #[serde(default)]
    next_id: StaffId,
}

impl From<StaffCatalogRows> for StaffCatalog {
    fn from(rows: StaffCatalogRows) -> Self {
        let index = rows
            .members
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id, i))
            .collect();
        // Hand-written JSON may omit the counter; never reissue an
        // id already present in the roster.
        let past_members = rows.members.iter().map(|m| m.id + 1).max().unwrap_or(0);
        Self {
            next_id: rows.next_id.max(past_members),
            members: rows.members,
            index,
        }
    }
}

impl StaffCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member, assigning a fresh id. Returns the id.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        rank: Rank,
        primary_skill: impl Into<String>,
        secondary_skill: impl Into<String>,
    ) -> StaffId {
        let id = self.next_id;
        self.next_id += 1;
        self.index.insert(id, self.members.len());
        self.members.push(StaffMember {
            id,
            name: name.into(),
            rank,
            primary_skill: primary_skill.into(),
            secondary_skill: secondary_skill.into(),
        });
        id
    }

    /// Replaces the whole roster, keeping the id counter running.
    ///
    /// This is the import path: the old members are discarded in one
    /// step, so a validation read never observes a half-replaced
    /// catalog.
    pub fn replace(&mut self, members: Vec<(String, Rank, String, String)>) {
        self.members.clear();
        self.index.clear();
        for (name, rank, primary, secondary) in members {
            self.add(name, rank, primary, secondary);
        }
    }

    /// Looks up a member by id.
    pub fn get(&self, id: StaffId) -> Option<&StaffMember> {
        self.index.get(&id).map(|&i| &self.members[i])
    }

    /// Whether the id exists in the catalog.
    pub fn contains(&self, id: StaffId) -> bool {
        self.index.contains_key(&id)
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StaffMember> {
        self.members.iter()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
