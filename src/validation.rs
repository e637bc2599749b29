//! Staffing validation.
//!
//! Computes, per (day, area), the findings a coordinator sees inline
//! on the board:
//! - Understaffing (headcount below the area's slot count)
//! - Missing senior specialist (APN) where one is required
//! - Assigned staff whose skills don't match the area
//! - Dangling staff ids left behind by a catalog replacement
//!
//! Findings are data, never control-flow errors: `evaluate` always
//! returns a report, and only error-severity findings make an area
//! invalid. An understaffed or skill-mismatched roster must remain
//! saveable, so those are warnings; an area with zero specialist
//! coverage is a hard error.

use serde::{Deserialize, Serialize};

use crate::models::{Area, AreaCatalog, Day, Rank, StaffCatalog, StaffId};
use crate::store::AssignmentStore;

/// How a finding affects validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Blocks validity.
    Error,
    /// Informational; never blocks validity.
    Warning,
}

/// Categories of staffing findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingKind {
    /// Fewer resolvable staff than the area has slots.
    Understaffed,
    /// No APN assigned to an area that requires one.
    MissingSpecialist,
    /// An assigned member covers neither skill the area asks for.
    SkillMismatch,
    /// An assigned id no longer exists in the staff catalog.
    DanglingReference,
}

/// A single staffing finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Finding category.
    pub kind: FindingKind,
    /// Whether this blocks validity.
    pub severity: Severity,
    /// Display text, rendered inline per area.
    pub message: String,
}

impl Finding {
    fn error(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// The outcome of evaluating one (day, area) cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaReport {
    /// All findings, rule order preserved.
    pub findings: Vec<Finding>,
}

impl AreaReport {
    /// Error messages only.
    pub fn errors(&self) -> Vec<&str> {
        self.by_severity(Severity::Error)
    }

    /// Warning messages only.
    pub fn warnings(&self) -> Vec<&str> {
        self.by_severity(Severity::Warning)
    }

    fn by_severity(&self, severity: Severity) -> Vec<&str> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .map(|f| f.message.as_str())
            .collect()
    }

    /// Valid iff there are no error-severity findings. Warnings never
    /// affect validity.
    pub fn is_valid(&self) -> bool {
        self.findings.iter().all(|f| f.severity != Severity::Error)
    }
}

/// Evaluates one area against its assigned staff for a day.
///
/// Pure function of the area definition, the assignment list, and the
/// staff catalog: identical inputs always yield an identical report.
/// Dangling ids are excluded from the headcount, specialist, and
/// skill rules and flagged separately.
pub fn evaluate(area: &Area, assigned: &[StaffId], staff: &StaffCatalog) -> AreaReport {
    let mut findings = Vec::new();

    let resolved: Vec<_> = assigned.iter().filter_map(|&id| staff.get(id)).collect();

    let required = area.required_headcount();
    if resolved.len() < required {
        findings.push(Finding::warning(
            FindingKind::Understaffed,
            format!("Needs {} staff (Current: {})", required, resolved.len()),
        ));
    }

    if area.requires_specialist && !resolved.iter().any(|m| m.rank == Rank::Apn) {
        findings.push(Finding::error(FindingKind::MissingSpecialist, "Missing APN"));
    }

    for member in &resolved {
        if !member.covers_skill(&area.required_skill) {
            findings.push(Finding::warning(
                FindingKind::SkillMismatch,
                format!("{}: Missing {} skill", member.name, area.required_skill),
            ));
        }
    }

    for &id in assigned {
        if !staff.contains(id) {
            findings.push(Finding::warning(
                FindingKind::DanglingReference,
                format!("Unknown staff #{id} assigned"),
            ));
        }
    }

    AreaReport { findings }
}

/// Evaluates every area of the catalog for one day, in display order.
pub fn evaluate_day<'a>(
    store: &AssignmentStore,
    areas: &'a AreaCatalog,
    staff: &StaffCatalog,
    day: Day,
) -> Vec<(&'a str, AreaReport)> {
    areas
        .iter()
        .map(|area| {
            let assigned = store.assigned(day, &area.id).unwrap_or(&[]);
            (area.id.as_str(), evaluate(area, assigned, staff))
        })
        .collect()
}
