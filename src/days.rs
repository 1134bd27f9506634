//! Day-name lookup used to canonicalize the short labels in course blocks.

use std::collections::HashMap;

/// The fixed set of canonical day names, in week order. Every course's
/// `day` field is one of these.
pub const CANONICAL_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Labels observed in the timetable markup: English abbreviations and full
/// names, plus the Irish short forms the bilingual pages use.
const STANDARD_LABELS: &[(&str, &str)] = &[
    ("Mon", "Monday"),
    ("Tue", "Tuesday"),
    ("Tues", "Tuesday"),
    ("Wed", "Wednesday"),
    ("Thu", "Thursday"),
    ("Thur", "Thursday"),
    ("Thurs", "Thursday"),
    ("Fri", "Friday"),
    ("Sat", "Saturday"),
    ("Sun", "Sunday"),
    ("Monday", "Monday"),
    ("Tuesday", "Tuesday"),
    ("Wednesday", "Wednesday"),
    ("Thursday", "Thursday"),
    ("Friday", "Friday"),
    ("Saturday", "Saturday"),
    ("Sunday", "Sunday"),
    ("Luan", "Monday"),
    ("Máirt", "Tuesday"),
    ("Céad", "Wednesday"),
    ("Déar", "Thursday"),
    ("Aoine", "Friday"),
    ("Sath", "Saturday"),
    ("Domh", "Sunday"),
];

/// Lookup table from raw day labels to canonical day names.
///
/// Constructed explicitly and passed into the parser, so alternate locale
/// tables can be injected without any global state.
#[derive(Debug, Clone)]
pub struct DayNames {
    table: HashMap<String, String>,
}

impl DayNames {
    /// The table for the labels the timetable pages are known to use.
    pub fn standard() -> Self {
        Self::from_labels(STANDARD_LABELS.iter().copied())
    }

    /// Builds a table from `(label, canonical name)` pairs.
    pub fn from_labels<L, C, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = (L, C)>,
        L: Into<String>,
        C: Into<String>,
    {
        let table = labels
            .into_iter()
            .map(|(label, canonical)| (label.into(), canonical.into()))
            .collect();
        Self { table }
    }

    /// Resolves a raw label (already stripped of parentheses) to its
    /// canonical day name. Matching is exact after trimming.
    pub fn canonicalize(&self, raw: &str) -> Option<&str> {
        self.table.get(raw.trim()).map(String::as_str)
    }
}

impl Default for DayNames {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_abbreviations() {
        let days = DayNames::standard();
        assert_eq!(days.canonicalize("Mon"), Some("Monday"));
        assert_eq!(days.canonicalize("Thurs"), Some("Thursday"));
        assert_eq!(days.canonicalize("Sun"), Some("Sunday"));
    }

    #[test]
    fn test_full_names_and_irish_forms() {
        let days = DayNames::standard();
        assert_eq!(days.canonicalize("Wednesday"), Some("Wednesday"));
        assert_eq!(days.canonicalize("Luan"), Some("Monday"));
        assert_eq!(days.canonicalize("Aoine"), Some("Friday"));
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let days = DayNames::standard();
        assert_eq!(days.canonicalize("  Tue "), Some("Tuesday"));
    }

    #[test]
    fn test_unknown_label_is_none() {
        let days = DayNames::standard();
        assert_eq!(days.canonicalize("Xyz"), None);
        assert_eq!(days.canonicalize(""), None);
    }

    #[test]
    fn test_custom_tables_are_injectable() {
        let days = DayNames::from_labels([("Lu", "Lundi"), ("Ma", "Mardi")]);
        assert_eq!(days.canonicalize("Lu"), Some("Lundi"));
        assert_eq!(days.canonicalize("Mon"), None);
    }
}
