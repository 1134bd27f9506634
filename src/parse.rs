//! Course-block discovery and schedule assembly for fetched timetable pages.

use crate::days::DayNames;
use crate::error::TimetableError;
use crate::types::{Course, WeeklySchedule};
use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;
use tracing::{debug, warn};

// Static selectors for parsing - compiled once
static COURSE_BLOCKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.tt_details").unwrap());
static HEADER_MARKERS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.tt_day, a").unwrap());
static TIME_SLOT: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".tt_timeslot").unwrap());
static DAY_MARKER: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".tt_day_small").unwrap());
static DETAIL: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".tt_detail").unwrap());
static LECTURER: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".tt_lecturer").unwrap());
static MAIN_FORM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section.entry-content > form").unwrap());

/// Everything recovered from one fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSchedule {
    /// Day-ordered schedule; empty when `is_valid` is false.
    pub schedule: WeeklySchedule,
    /// Raw status text; empty when a timetable was found.
    pub status: String,
    pub is_valid: bool,
}

/// Typed view over one course block.
///
/// Wraps a raw `div.tt_details` fragment so the schedule assembly never
/// navigates the tree itself; each query either yields its field or names
/// the missing piece.
#[derive(Debug, Clone, Copy)]
pub struct CourseBlockView<'a> {
    root: ElementRef<'a>,
}

impl<'a> CourseBlockView<'a> {
    /// Accepts an element only if it is a real course block. Header and
    /// navigation fragments share the block class but carry a nested day
    /// header or an anchor; those are rejected here.
    pub fn wrap(root: ElementRef<'a>) -> Option<Self> {
        if root.select(&HEADER_MARKERS).next().is_some() {
            return None;
        }
        Some(Self { root })
    }

    /// Own (non-nested) text of the time-slot element, which excludes the
    /// day marker nested inside it.
    pub fn time_slot_text(&self) -> Result<String, TimetableError> {
        Ok(own_text(self.time_slot()?))
    }

    /// Raw day label from the marker nested in the time slot, stripped of
    /// parentheses and whitespace: "(Mon)" becomes "Mon". Markers sitting
    /// elsewhere in the block do not count.
    pub fn day_label(&self) -> Result<String, TimetableError> {
        let slot = self.time_slot()?;
        let marker = Self::first_in(slot, &DAY_MARKER, "day marker (.tt_day_small)")?;
        Ok(element_text(marker)
            .replace(['(', ')'], "")
            .trim()
            .to_string())
    }

    /// Full text of the detail element. The lecturer element is nested in
    /// it, so the lecturer substring shows up here as well.
    pub fn detail_text(&self) -> Result<String, TimetableError> {
        let detail = self.first(&DETAIL, "detail (.tt_detail)")?;
        Ok(element_text(detail))
    }

    /// Text of the lecturer element; may be empty.
    pub fn lecturer_text(&self) -> Result<String, TimetableError> {
        let lecturer = self.first(&LECTURER, "lecturer (.tt_lecturer)")?;
        Ok(element_text(lecturer))
    }

    /// The time-slot element; the day marker is read from inside it.
    fn time_slot(&self) -> Result<ElementRef<'a>, TimetableError> {
        self.first(&TIME_SLOT, "time slot (.tt_timeslot)")
    }

    fn first(
        &self,
        selector: &Selector,
        element: &'static str,
    ) -> Result<ElementRef<'a>, TimetableError> {
        Self::first_in(self.root, selector, element)
    }

    fn first_in(
        scope: ElementRef<'a>,
        selector: &Selector,
        element: &'static str,
    ) -> Result<ElementRef<'a>, TimetableError> {
        scope
            .select(selector)
            .next()
            .ok_or(TimetableError::MissingElement { element })
    }
}

/// Walks a fetched page and assembles the weekly schedule.
#[derive(Debug, Clone, Default)]
pub struct ScheduleParser {
    day_names: DayNames,
}

impl ScheduleParser {
    pub fn new(day_names: DayNames) -> Self {
        Self { day_names }
    }

    /// Parses one fetched page.
    ///
    /// A non-empty status region means the site found no timetable: the
    /// result then carries the status text and an empty schedule, and no
    /// course blocks are read at all.
    pub fn parse(&self, document: &Html) -> Result<ParsedSchedule, TimetableError> {
        let status = status_text(document)?;
        if !status.is_empty() {
            warn!(status = %status, "page reports no timetable");
            return Ok(ParsedSchedule {
                schedule: WeeklySchedule::new(),
                status,
                is_valid: false,
            });
        }

        let mut schedule = WeeklySchedule::new();
        for block in document.select(&COURSE_BLOCKS) {
            let Some(view) = CourseBlockView::wrap(block) else {
                continue;
            };
            schedule.push(self.parse_block(&view)?);
        }
        debug!(
            days = schedule.days().count(),
            courses = schedule.len(),
            "assembled schedule"
        );
        Ok(ParsedSchedule {
            schedule,
            status,
            is_valid: true,
        })
    }

    /// One block to one record; any missing piece fails the whole parse.
    fn parse_block(&self, view: &CourseBlockView<'_>) -> Result<Course, TimetableError> {
        let time_slot = view.time_slot_text()?;
        let label = view.day_label()?;
        let day = self
            .day_names
            .canonicalize(&label)
            .ok_or_else(|| TimetableError::UnknownDayLabel {
                label: label.clone(),
            })?;
        let detail = view.detail_text()?;
        let lecturer = view.lecturer_text()?;
        Ok(Course::new(day, time_slot, lecturer, detail))
    }
}

/// Trimmed text of the first sibling node after the page's main form.
///
/// The site leaves this region as bare whitespace when a timetable was
/// found and writes the failure message into it otherwise.
fn status_text(document: &Html) -> Result<String, TimetableError> {
    let form = document
        .select(&MAIN_FORM)
        .next()
        .ok_or(TimetableError::MissingElement {
            element: "main form (section.entry-content > form)",
        })?;
    let node = form
        .next_sibling()
        .ok_or(TimetableError::MissingElement {
            element: "status region after the main form",
        })?;
    let text = match node.value() {
        Node::Text(text) => text.text.trim().to_string(),
        Node::Element(_) => ElementRef::wrap(node).map(element_text).unwrap_or_default(),
        _ => String::new(),
    };
    Ok(text)
}

/// Whitespace-normalized text of an element and all its descendants.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    normalize_whitespace(&el.text().collect::<String>())
}

/// Whitespace-normalized text of the element's direct text children only,
/// skipping anything inside nested elements.
fn own_text(el: ElementRef<'_>) -> String {
    let text = el
        .children()
        .filter_map(|child| child.value().as_text())
        .map(|t| &*t.text)
        .collect::<String>();
    normalize_whitespace(&text)
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
