//! The timetable aggregate: request identity, fetch, process, report.

use crate::client::TimetableClient;
use crate::days::DayNames;
use crate::error::TimetableError;
use crate::page::{selected_option, view_link};
use crate::parse::ScheduleParser;
use crate::types::{Course, ViewLink, WeeklySchedule};
use chrono::{DateTime, Utc};
use scraper::Html;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Constant `view` field every form submission carries.
const VIEW_FIELD: &str = "View Timetable";

/// Dropdown controls the department/group metadata is read from.
const DEPT_CONTROL: &str = "#dept";
const GROUP_CONTROL: &str = "#studentgroup";

/// Separator line under each day header in the rendered report (50 chars).
const DAY_SEPARATOR: &str = "==================================================";

/// Identity of one timetable lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimetableRequest {
    /// A personal timetable, looked up by student ID.
    Student { student_id: String },
    /// A group timetable, looked up by department and student group.
    Group { department: String, group: String },
}

impl TimetableRequest {
    pub fn student(student_id: impl Into<String>) -> Self {
        Self::Student {
            student_id: student_id.into(),
        }
    }

    pub fn group(department: impl Into<String>, group: impl Into<String>) -> Self {
        Self::Group {
            department: department.into(),
            group: group.into(),
        }
    }

    /// Form fields for the POST body. A student lookup sends empty
    /// department/group fields; a group lookup sends no `student_id` field
    /// at all.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            TimetableRequest::Student { student_id } => vec![
                ("dept", String::new()),
                ("student_id", student_id.clone()),
                ("studentgroup", String::new()),
                ("view", VIEW_FIELD.to_string()),
            ],
            TimetableRequest::Group { department, group } => vec![
                ("dept", department.clone()),
                ("studentgroup", group.clone()),
                ("view", VIEW_FIELD.to_string()),
            ],
        }
    }

    /// The student ID of a personal lookup; empty for group lookups.
    pub fn student_id(&self) -> &str {
        match self {
            TimetableRequest::Student { student_id } => student_id,
            TimetableRequest::Group { .. } => "",
        }
    }
}

impl fmt::Display for TimetableRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimetableRequest::Student { student_id } => write!(f, "student {student_id}"),
            TimetableRequest::Group { department, group } => {
                write!(f, "group {department}/{group}")
            }
        }
    }
}

/// A fetched timetable page and everything processed out of it.
///
/// The page is fetched at construction and kept as a raw body; [`process`]
/// parses it and can be re-run without touching the network.
///
/// [`process`]: TimeTable::process
#[derive(Debug, Clone)]
pub struct TimeTable {
    request: TimetableRequest,
    html: String,
    fetched_at: DateTime<Utc>,
    day_names: DayNames,
    schedule: WeeklySchedule,
    status: String,
    is_valid: bool,
    department: String,
    department_key: String,
    student_group: String,
    group_key: String,
    link: Option<ViewLink>,
}

impl TimeTable {
    /// Fetches a personal timetable by student ID.
    pub async fn fetch_student(
        client: &TimetableClient,
        student_id: impl Into<String>,
    ) -> Result<Self, TimetableError> {
        Self::fetch(client, TimetableRequest::student(student_id)).await
    }

    /// Fetches a group timetable by department and student group.
    pub async fn fetch_group(
        client: &TimetableClient,
        department: impl Into<String>,
        group: impl Into<String>,
    ) -> Result<Self, TimetableError> {
        Self::fetch(client, TimetableRequest::group(department, group)).await
    }

    /// Fetches the page for an already-built request. A transport failure
    /// surfaces as [`TimetableError::Fetch`], untouched.
    pub async fn fetch(
        client: &TimetableClient,
        request: TimetableRequest,
    ) -> Result<Self, TimetableError> {
        let html = client.fetch(&request).await?;
        Ok(Self::from_html(request, html))
    }

    /// Wraps an already-fetched page body, for callers that bring their
    /// own transport.
    pub fn from_html(request: TimetableRequest, html: impl Into<String>) -> Self {
        Self {
            request,
            html: html.into(),
            fetched_at: Utc::now(),
            day_names: DayNames::standard(),
            schedule: WeeklySchedule::new(),
            status: String::new(),
            is_valid: false,
            department: String::new(),
            department_key: String::new(),
            student_group: String::new(),
            group_key: String::new(),
            link: None,
        }
    }

    /// Replaces the day-name lookup used by [`process`](Self::process).
    pub fn with_day_names(mut self, day_names: DayNames) -> Self {
        self.day_names = day_names;
        self
    }

    /// Parses the stored page body into the schedule and status, and, when
    /// the page is valid, the department/group metadata and view link.
    /// Invalid pages keep all metadata unset and populate only the status.
    /// Re-running re-parses the same stored body; nothing is re-fetched.
    pub fn process(&mut self) -> Result<(), TimetableError> {
        let document = Html::parse_document(&self.html);
        let parsed = ScheduleParser::new(self.day_names.clone()).parse(&document)?;

        self.schedule = parsed.schedule;
        self.status = parsed.status;
        self.is_valid = parsed.is_valid;

        if self.is_valid {
            self.department = selected_option(&document, DEPT_CONTROL, false);
            self.department_key = selected_option(&document, DEPT_CONTROL, true);
            self.student_group = selected_option(&document, GROUP_CONTROL, false);
            self.group_key = selected_option(&document, GROUP_CONTROL, true);
            self.link = view_link(&document);
        } else {
            self.department.clear();
            self.department_key.clear();
            self.student_group.clear();
            self.group_key.clear();
            self.link = None;
        }

        info!(
            request = %self.request,
            valid = self.is_valid,
            courses = self.schedule.len(),
            "timetable processed"
        );
        Ok(())
    }

    pub fn request(&self) -> &TimetableRequest {
        &self.request
    }

    /// When the page body was fetched.
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// False when the site reported "no timetable found"; the raw message
    /// is then in [`status`](Self::status).
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.schedule
    }

    /// Courses for one canonical day name, in document order. Days with no
    /// classes yield an empty slice, unknown names included.
    pub fn courses_for_day(&self, day: &str) -> &[Course] {
        self.schedule.courses_for(day)
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn department_key(&self) -> &str {
        &self.department_key
    }

    pub fn student_group(&self) -> &str {
        &self.student_group
    }

    pub fn group_key(&self) -> &str {
        &self.group_key
    }

    pub fn link(&self) -> Option<&ViewLink> {
        self.link.as_ref()
    }
}

impl fmt::Display for TimeTable {
    /// The plain-text report: identity and link header, then each day with
    /// its separator and tab-indented courses. An invalid timetable
    /// renders as the raw status text, unmodified.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid {
            return f.write_str(&self.status);
        }

        let (title, url) = match &self.link {
            Some(link) => (link.title.as_str(), link.url.as_str()),
            None => ("", ""),
        };
        write!(
            f,
            "Student Number: {}\nDepartment: {} \nDepartment Key: {}\nStudent Group: {} \nGroup Key: {}\nTitle: {}\nURL: {} \n",
            self.request.student_id(),
            self.department,
            self.department_key,
            self.student_group,
            self.group_key,
            title,
            url,
        )?;
        for day in self.schedule.iter() {
            writeln!(f, "{}", day.day)?;
            writeln!(f, "{DAY_SEPARATOR}")?;
            for course in &day.courses {
                writeln!(f, "\t{course}")?;
            }
        }
        Ok(())
    }
}
