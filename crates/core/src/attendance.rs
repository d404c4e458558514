//! Attendance recording and export
//!
//! An admin opens a sheet for one event, ticks who was present, and
//! submits. Submission writes the whole roster back through
//! `update_event_registrations` and produces a report of the attendees
//! that can be saved as CSV.

use std::collections::HashMap;
use std::io::Write;

use chrono::{DateTime, Local, NaiveDate, Utc};
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{Event, Registration};
use crate::storage::KeyValueStore;
use crate::store::AppStore;

const CLUB_FALLBACK: &str = "N/A";

/// Working copy of one event's roster while attendance is being taken.
///
/// Marks start empty regardless of what was recorded before; anyone not
/// marked present on submission is recorded as absent.
#[derive(Debug, Clone)]
pub struct AttendanceSheet {
    event_id: String,
    registrations: Vec<Registration>,
    marks: HashMap<String, bool>,
}

impl AttendanceSheet {
    pub fn new(event: &Event) -> Self {
        Self {
            event_id: event.id.clone(),
            registrations: event.registrations.clone(),
            marks: HashMap::new(),
        }
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn mark(&mut self, registration_id: &str, present: bool) -> Result<()> {
        if !self.registrations.iter().any(|r| r.id == registration_id) {
            return Err(Error::NotFound(format!(
                "registration {} for event {}",
                registration_id, self.event_id
            )));
        }
        self.marks.insert(registration_id.to_string(), present);
        Ok(())
    }

    pub fn is_present(&self, registration_id: &str) -> bool {
        self.marks.get(registration_id).copied().unwrap_or(false)
    }

    /// Submission is only allowed once something has been ticked
    pub fn has_marks(&self) -> bool {
        !self.marks.is_empty()
    }

    /// The roster with attended flags applied, in roster order
    pub fn finalize(&self) -> Vec<Registration> {
        self.registrations
            .iter()
            .map(|r| Registration {
                attended: self.is_present(&r.id),
                ..r.clone()
            })
            .collect()
    }
}

/// One attendee line in the exported sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeRow {
    pub roll_number: String,
    pub name: String,
    pub year: String,
    pub section: String,
    pub registered_at: DateTime<Utc>,
}

/// Attendees of one event plus the metadata printed above them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceReport {
    pub event_title: String,
    pub club_name: String,
    pub event_date: NaiveDate,
    pub attendees: Vec<AttendeeRow>,
    pub generated_at: DateTime<Utc>,
}

impl AttendanceReport {
    pub fn build(
        event: &Event,
        club_name: Option<&str>,
        registrations: &[Registration],
        generated_at: DateTime<Utc>,
    ) -> Self {
        let attendees = registrations
            .iter()
            .filter(|r| r.attended)
            .map(|r| AttendeeRow {
                roll_number: r.roll_number.clone(),
                name: r.name.clone(),
                year: r.year.clone(),
                section: r.section.clone(),
                registered_at: r.registered_at,
            })
            .collect();

        Self {
            event_title: event.title.clone(),
            club_name: club_name.unwrap_or(CLUB_FALLBACK).to_string(),
            event_date: event.date,
            attendees,
            generated_at,
        }
    }

    pub fn total_attendees(&self) -> usize {
        self.attendees.len()
    }

    /// `<Title_With_Underscores>_Attendance_<YYYY-MM-DD>.csv`
    pub fn file_name(&self) -> String {
        let title = self
            .event_title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_");
        format!(
            "{}_Attendance_{}.csv",
            title,
            self.generated_at.format("%Y-%m-%d")
        )
    }

    pub fn write_csv<W: Write>(&self, mut out: W) -> Result<()> {
        let total = self.total_attendees().to_string();
        let date = self.event_date.format("%d/%m/%Y").to_string();
        let stamp = local_timestamp(self.generated_at);

        write_row(&mut out, &["Event Title:", &self.event_title])?;
        write_row(&mut out, &["Club:", &self.club_name])?;
        write_row(&mut out, &["Date:", &date])?;
        write_row(&mut out, &["Total Attendees:", &total])?;
        write_row(&mut out, &["Timestamp:", &stamp])?;
        writeln!(out)?;

        write_row(
            &mut out,
            &["Roll Number", "Name", "Year", "Section", "Registered At"],
        )?;
        for row in &self.attendees {
            let registered = local_timestamp(row.registered_at);
            write_row(
                &mut out,
                &[&row.roll_number, &row.name, &row.year, &row.section, &registered],
            )?;
        }

        out.flush()?;
        Ok(())
    }
}

/// Persist a sheet's marks and build the report.
///
/// Fails with `InvalidInput` when nothing was marked, and with `NotFound`
/// when the event has disappeared from the store.
pub fn submit<S: KeyValueStore>(
    store: &mut AppStore<S>,
    sheet: &AttendanceSheet,
    generated_at: DateTime<Utc>,
) -> Result<AttendanceReport> {
    if !sheet.has_marks() {
        return Err(Error::InvalidInput(
            "mark at least one registration before submitting".into(),
        ));
    }

    let registrations = sheet.finalize();
    if !store.update_event_registrations(sheet.event_id(), registrations.clone())? {
        return Err(Error::NotFound(format!("event {}", sheet.event_id())));
    }

    let state = store.state();
    let event = state
        .find_event(sheet.event_id())
        .ok_or_else(|| Error::NotFound(format!("event {}", sheet.event_id())))?;
    let club = state.find_club(&event.club_id).map(|c| c.name.as_str());

    let report = AttendanceReport::build(event, club, &registrations, generated_at);
    info!(
        event_id = %event.id,
        attendees = report.total_attendees(),
        "Attendance recorded"
    );
    Ok(report)
}

/// Wall-clock time on this machine, e.g. `18/01/2025, 03:05:00 PM`
fn local_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%d/%m/%Y, %I:%M:%S %p")
        .to_string()
}

fn write_row<W: Write>(out: &mut W, fields: &[&str]) -> std::io::Result<()> {
    let line = fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(out, "{}", line)
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
