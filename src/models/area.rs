//! Work-area model.
//!
//! Areas are the physical or functional units staffed each day: an
//! operating theatre, the recovery bay, the day-surgery ward. Each
//! declares named slots (the slot count is the required headcount;
//! the labels are display-only), a required skill, and whether a
//! senior specialist must be present. Areas are configuration — they
//! are not mutated at runtime.

use serde::{Deserialize, Serialize};

/// A work area requiring staffed slots each day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    /// Unique area identifier (e.g., "ot9", "pacu").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Named positions; the length defines the required headcount.
    pub slot_labels: Vec<String>,
    /// Skill expected of assigned staff.
    pub required_skill: String,
    /// Whether at least one APN must be assigned.
    pub requires_specialist: bool,
}

impl Area {
    /// Creates an area with no slots and no specialist requirement.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slot_labels: Vec::new(),
            required_skill: String::from("General"),
            requires_specialist: false,
        }
    }

    /// Sets the named slots.
    pub fn with_slots(mut self, labels: &[&str]) -> Self {
        self.slot_labels = labels.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Sets the required skill.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skill = skill.into();
        self
    }

    /// Marks the area as requiring a senior specialist.
    pub fn with_specialist_required(mut self) -> Self {
        self.requires_specialist = true;
        self
    }

    /// Required headcount (number of slots).
    #[inline]
    pub fn required_headcount(&self) -> usize {
        self.slot_labels.len()
    }
}

/// The static set of work areas, in display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AreaCatalog {
    areas: Vec<Area>,
}

impl AreaCatalog {
    /// Creates a catalog from a list of areas.
    pub fn new(areas: Vec<Area>) -> Self {
        Self { areas }
    }

    /// The standard ward layout used by the department.
    pub fn standard() -> Self {
        Self::new(vec![
            Area::new("ot8", "Operating Theatre 8")
                .with_slots(&["Scrub", "Circulating"])
                .with_skill("OT"),
            Area::new("ot9", "Operating Theatre 9")
                .with_slots(&["Scrub", "Circulating", "In-Charge"])
                .with_skill("OT"),
            Area::new("pacu", "Post-Anaesthesia Care Unit")
                .with_slots(&["In-Charge", "Bedside"])
                .with_skill("PACU")
                .with_specialist_required(),
            Area::new("preanaes", "Pre-Anaesthetic Clinic")
                .with_slots(&["Assessor"])
                .with_skill("Pre-Anaesthetic"),
            Area::new("daysurg", "Day Surgery Ward")
                .with_slots(&["In-Charge", "Bedside", "Discharge"])
                .with_skill("Day Ward"),
        ])
    }

    /// Looks up an area by id.
    pub fn get(&self, id: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    /// Whether the id names a known area.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Areas in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Area> {
        self.areas.iter()
    }

    /// Number of areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
