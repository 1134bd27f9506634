//! Value types for the parsed weekly schedule.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One scheduled class occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Canonical day name ("Monday"), never a raw abbreviation.
    pub day: String,
    /// Free-text slot as printed on the page, e.g. "09:00 - 10:00".
    pub time_slot: String,
    /// Lecturer name; empty when the page lists none.
    pub lecturer: String,
    /// Module/location text. The page nests the lecturer element inside it,
    /// so this usually contains the lecturer substring again.
    pub detail: String,
}

impl Course {
    pub fn new(
        day: impl Into<String>,
        time_slot: impl Into<String>,
        lecturer: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            time_slot: time_slot.into(),
            lecturer: lecturer.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Course {
    /// Tab-separated report line: day, time slot, lecturer, detail.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.day, self.time_slot, self.lecturer, self.detail
        )
    }
}

/// The ordered courses of a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCourses {
    pub day: String,
    pub courses: Vec<Course>,
}

/// Day-to-courses mapping with deterministic iteration order: days appear
/// in the order they were first seen in the document, courses within a day
/// in document order.
///
/// Backed by a `Vec` rather than a map because the iteration order is part
/// of the contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    days: Vec<DayCourses>,
}

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a course under its day, creating the day's sequence on first
    /// use. Day sequences are therefore never empty.
    pub fn push(&mut self, course: Course) {
        match self.days.iter_mut().find(|d| d.day == course.day) {
            Some(existing) => existing.courses.push(course),
            None => self.days.push(DayCourses {
                day: course.day.clone(),
                courses: vec![course],
            }),
        }
    }

    /// Day names in first-seen order.
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|d| d.day.as_str())
    }

    /// The courses for one day, in document order. Unknown or class-free
    /// days yield an empty slice, never an error.
    pub fn courses_for(&self, day: &str) -> &[Course] {
        self.days
            .iter()
            .find(|d| d.day == day)
            .map(|d| d.courses.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayCourses> {
        self.days.iter()
    }

    /// Total number of courses across all days.
    pub fn len(&self) -> usize {
        self.days.iter().map(|d| d.courses.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl<'a> IntoIterator for &'a WeeklySchedule {
    type Item = &'a DayCourses;
    type IntoIter = std::slice::Iter<'a, DayCourses>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The optional "view this timetable online" hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewLink {
    /// Visible anchor text.
    pub title: String,
    /// Raw href attribute; empty when the anchor carries none.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(day: &str, slot: &str) -> Course {
        Course::new(day, slot, "Dr Smith", "COMP101 Lecture")
    }

    #[test]
    fn test_days_keep_first_seen_order() {
        let mut schedule = WeeklySchedule::new();
        schedule.push(course("Wednesday", "09:00 - 10:00"));
        schedule.push(course("Monday", "10:00 - 11:00"));
        schedule.push(course("Wednesday", "11:00 - 12:00"));

        let days: Vec<_> = schedule.days().collect();
        assert_eq!(days, ["Wednesday", "Monday"]);
    }

    #[test]
    fn test_courses_keep_document_order_within_a_day() {
        let mut schedule = WeeklySchedule::new();
        schedule.push(course("Monday", "15:00 - 16:00"));
        schedule.push(course("Monday", "09:00 - 10:00"));

        let slots: Vec<_> = schedule
            .courses_for("Monday")
            .iter()
            .map(|c| c.time_slot.as_str())
            .collect();
        assert_eq!(slots, ["15:00 - 16:00", "09:00 - 10:00"]);
    }

    #[test]
    fn test_unknown_day_yields_empty_slice() {
        let schedule = WeeklySchedule::new();
        assert!(schedule.courses_for("Friday").is_empty());
    }

    #[test]
    fn test_len_counts_all_courses() {
        let mut schedule = WeeklySchedule::new();
        assert!(schedule.is_empty());
        schedule.push(course("Monday", "09:00 - 10:00"));
        schedule.push(course("Monday", "10:00 - 11:00"));
        schedule.push(course("Friday", "12:00 - 13:00"));
        assert_eq!(schedule.len(), 3);
        assert!(!schedule.is_empty());
    }

    #[test]
    fn test_course_line_is_tab_separated() {
        let c = Course::new("Monday", "09:00 - 10:00", "Dr Smith", "COMP101 Lab");
        assert_eq!(c.to_string(), "Monday\t09:00 - 10:00\tDr Smith\tCOMP101 Lab");
    }
}
