//! The working week.
//!
//! The roster covers a fixed Monday-to-Friday week. Weekends and
//! calendar dates are out of scope; a `Day` is a position in the
//! week, not a date.

use serde::{Deserialize, Serialize};

/// A weekday in the five-day roster week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All days in roster order.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// Zero-based position within the week (Monday = 0).
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_order() {
        assert_eq!(Day::ALL.len(), 5);
        assert_eq!(Day::ALL[0], Day::Monday);
        assert_eq!(Day::ALL[4], Day::Friday);
        assert!(Day::Monday < Day::Friday);
    }

    #[test]
    fn test_day_index() {
        for (i, day) in Day::ALL.iter().enumerate() {
            assert_eq!(day.index(), i);
        }
    }

    #[test]
    fn test_day_label() {
        assert_eq!(Day::Wednesday.label(), "Wednesday");
        assert_eq!(Day::Friday.to_string(), "Friday");
    }

    #[test]
    fn test_day_serde_roundtrip() {
        let json = serde_json::to_string(&Day::Tuesday).unwrap();
        let back: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Day::Tuesday);
    }
}
