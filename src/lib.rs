//! Scraper for the IT Sligo student timetable pages.
//!
//! Submits the lookup form (by student ID, or by department and student
//! group), parses the returned HTML into an ordered weekly schedule, and
//! renders the classic plain-text report.
//!
//! ```no_run
//! use ttscrape::{TimeTable, TimetableClient};
//!
//! # async fn run() -> Result<(), ttscrape::TimetableError> {
//! let client = TimetableClient::new()?;
//! let mut timetable = TimeTable::fetch_student(&client, "S00123456").await?;
//! timetable.process()?;
//! if timetable.is_valid() {
//!     for day in timetable.schedule() {
//!         println!("{}: {} classes", day.day, day.courses.len());
//!     }
//! } else {
//!     println!("{}", timetable.status());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod days;
pub mod error;
pub mod page;
pub mod parse;
pub mod timetable;
pub mod types;

pub use client::{ClientConfig, TimetableClient};
pub use days::DayNames;
pub use error::TimetableError;
pub use parse::{CourseBlockView, ParsedSchedule, ScheduleParser};
pub use timetable::{TimeTable, TimetableRequest};
pub use types::{Course, DayCourses, ViewLink, WeeklySchedule};
