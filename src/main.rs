//! Command-line wrapper: fetch one timetable and print the report.

use anyhow::{bail, Context, Result};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use ttscrape::{TimeTable, TimetableClient, TimetableRequest};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json_output = if let Some(pos) = args.iter().position(|a| a == "--json") {
        args.remove(pos);
        true
    } else {
        false
    };

    let request = match args.as_slice() {
        [student_id] => TimetableRequest::student(student_id.as_str()),
        [department, group] => TimetableRequest::group(department.as_str(), group.as_str()),
        _ => bail!("usage: ttscrape [--json] <student-id> | <department> <student-group>"),
    };

    let client = TimetableClient::new().context("building HTTP client")?;
    let mut timetable = TimeTable::fetch(&client, request)
        .await
        .context("fetching timetable page")?;
    timetable.process().context("parsing timetable page")?;

    if json_output {
        let report = json!({
            "request": timetable.request(),
            "fetched_at": timetable.fetched_at().to_rfc3339(),
            "valid": timetable.is_valid(),
            "status": timetable.status(),
            "department": timetable.department(),
            "department_key": timetable.department_key(),
            "student_group": timetable.student_group(),
            "group_key": timetable.group_key(),
            "link": timetable.link(),
            "schedule": timetable.schedule(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{timetable}");
    }
    Ok(())
}
