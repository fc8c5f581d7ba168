//! Transfer record and dataset types.

use std::fmt;

/// One booking's transfer entry.
///
/// All fields are pre-formatted display strings; `booking_ref` doubles as
/// the case-insensitive lookup key for search. Booking references are NOT
/// guaranteed unique within or across datasets, so search must collect
/// every match rather than stopping at the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    /// Booking reference (lookup key, case-insensitive).
    pub booking_ref: String,
    /// Flight number, display-only.
    pub flight: String,
    /// Hotel name, display-only.
    pub hotel: String,
    /// Pick-up time, pre-formatted upstream; no parsing or time zones here.
    pub pickup_time: String,
}

impl TransferRecord {
    /// Case-insensitive match against a query that has already been
    /// trimmed and lowercased by the caller.
    pub fn matches_key(&self, query_lower: &str) -> bool {
        self.booking_ref.to_lowercase() == query_lower
    }
}

/// Which of the two schedule collections is meant.
///
/// Each dataset is an ordered, immutable sequence of [`TransferRecord`]
/// frozen at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Today's pick-up schedule.
    Today,
    /// Tomorrow's pick-up schedule.
    Tomorrow,
}

impl Dataset {
    /// The other dataset. Auto-advance wraps through this.
    pub fn flip(self) -> Self {
        match self {
            Dataset::Today => Dataset::Tomorrow,
            Dataset::Tomorrow => Dataset::Today,
        }
    }

    /// Fixed board title for this dataset.
    pub fn title(self) -> &'static str {
        match self {
            Dataset::Today => "TODAY\u{2019}S PICK-UP AIRPORT TRANSFERS",
            Dataset::Tomorrow => "TOMORROW\u{2019}S PICK-UP AIRPORT TRANSFERS",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dataset::Today => write!(f, "today"),
            Dataset::Tomorrow => write!(f, "tomorrow"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_is_an_involution() {
        assert_eq!(Dataset::Today.flip(), Dataset::Tomorrow);
        assert_eq!(Dataset::Tomorrow.flip(), Dataset::Today);
        assert_eq!(Dataset::Today.flip().flip(), Dataset::Today);
    }

    #[test]
    fn titles_are_distinct_and_dataset_specific() {
        assert!(Dataset::Today.title().starts_with("TODAY"));
        assert!(Dataset::Tomorrow.title().starts_with("TOMORROW"));
        assert_ne!(Dataset::Today.title(), Dataset::Tomorrow.title());
    }

    #[test]
    fn matches_key_is_case_insensitive() {
        let record = TransferRecord {
            booking_ref: "ABC123".to_string(),
            flight: "BA123".to_string(),
            hotel: "Grand Hotel".to_string(),
            pickup_time: "08:30".to_string(),
        };
        assert!(record.matches_key("abc123"));
        assert!(!record.matches_key("abc124"));
    }
}
