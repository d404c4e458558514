//! Attendance taking and sheet export

use std::fs::File;
use std::io::{BufWriter, Write};

use chrono::Utc;
use clubhub_core::attendance::{self, AttendanceSheet};
use clubhub_core::{Error, Result};

use super::short_date;
use crate::cli::AttendanceArgs;
use crate::state::AppState;

pub fn run<W: Write>(state: &AppState, args: AttendanceArgs, out: &mut W) -> Result<()> {
    state.require_admin()?;

    let mut store = state.store();
    let event = store
        .state()
        .find_event(&args.event_id)
        .ok_or_else(|| Error::NotFound(format!("event {}", args.event_id)))?;
    if event.registrations.is_empty() {
        return Err(Error::InvalidInput(format!(
            "no registrations found for {}",
            event.title
        )));
    }

    let mut sheet = AttendanceSheet::new(event);
    for id in &args.present {
        sheet.mark(id, true)?;
    }
    for id in &args.absent {
        sheet.mark(id, false)?;
    }

    let report = attendance::submit(&mut *store, &sheet, Utc::now())?;
    drop(store);

    std::fs::create_dir_all(&args.out)?;
    let path = args.out.join(report.file_name());
    report.write_csv(BufWriter::new(File::create(&path)?))?;

    writeln!(
        out,
        "Attendance saved for {} ({}): {} of {} present",
        report.event_title,
        short_date(report.event_date),
        report.total_attendees(),
        sheet.registrations().len()
    )?;
    writeln!(out, "Sheet written to {}", path.display())?;
    Ok(())
}
