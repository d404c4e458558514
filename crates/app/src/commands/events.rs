//! Event listing and admin event management

use std::io::Write;
use std::path::Path;

use chrono::Utc;
use clubhub_core::directory::{self, club_name};
use clubhub_core::{Club, Error, Event, EventStatus, NewEvent, NewRegistration, Result};

use super::{non_blank, short_date, short_timestamp};
use crate::cli::EventsCommand;
use crate::state::AppState;

pub fn run<W: Write>(state: &AppState, command: EventsCommand, out: &mut W) -> Result<()> {
    match command {
        EventsCommand::List {
            upcoming,
            past,
            club,
        } => list(state, upcoming, past, club.as_deref(), out),
        EventsCommand::Add {
            club,
            title,
            date,
            location,
            timings,
            description,
            poster,
            registration_url,
        } => add(
            state,
            NewEvent {
                club_id: club,
                title,
                date,
                location,
                timings,
                description,
                poster_url: non_blank(poster),
                registration_url: non_blank(registration_url),
            },
            out,
        ),
        EventsCommand::Status { id, status } => set_status(state, &id, status, out),
        EventsCommand::Certificates { id, url } => set_certificates(state, &id, &url, out),
        EventsCommand::Register { id, file } => import_registrations(state, &id, &file, out),
        EventsCommand::Roster { id } => roster(state, &id, out),
    }
}

fn list<W: Write>(
    state: &AppState,
    upcoming: bool,
    past: bool,
    club: Option<&str>,
    out: &mut W,
) -> Result<()> {
    let store = state.store();
    let snapshot = store.state();
    let today = state.today();

    let events: Vec<&Event> = if upcoming {
        directory::upcoming_events(&snapshot.events, today, None)
    } else if past {
        directory::past_events(&snapshot.events, today)
    } else {
        snapshot.events.iter().collect()
    };

    let mut shown = 0;
    for event in events
        .into_iter()
        .filter(|e| club.map_or(true, |id| e.club_id == id))
    {
        write_event_line(out, event, &snapshot.clubs)?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(out, "No events found.")?;
    }
    Ok(())
}

fn write_event_line<W: Write>(
    out: &mut W,
    event: &Event,
    clubs: &[Club],
) -> Result<()> {
    writeln!(
        out,
        "  [{}] {}  {} ({}) @ {} - {}",
        event.id,
        short_date(event.date),
        event.title,
        club_name(clubs, &event.club_id).unwrap_or(directory::UNKNOWN),
        event.location,
        event.status
    )?;
    Ok(())
}

fn add<W: Write>(state: &AppState, draft: NewEvent, out: &mut W) -> Result<()> {
    state.require_admin()?;
    draft.validate()?;

    let event = state.store().add_event(draft)?;
    writeln!(out, "Event added: {} [{}]", event.title, event.id)?;
    Ok(())
}

fn set_status<W: Write>(
    state: &AppState,
    id: &str,
    status: EventStatus,
    out: &mut W,
) -> Result<()> {
    state.require_admin()?;

    if state.store().update_event_status(id, status)? {
        writeln!(out, "Event {} is now {}", id, status)?;
    } else {
        writeln!(out, "No event with id {}; nothing changed", id)?;
    }
    Ok(())
}

fn set_certificates<W: Write>(state: &AppState, id: &str, url: &str, out: &mut W) -> Result<()> {
    state.require_admin()?;
    let url = url.trim();
    if url.is_empty() {
        return Err(Error::InvalidInput("certificates link is required".into()));
    }

    if state.store().update_event(id, url)? {
        writeln!(out, "Certificates link published for event {}", id)?;
    } else {
        writeln!(out, "No event with id {}; nothing changed", id)?;
    }
    Ok(())
}

/// Append sign-ups read from a JSON array of `{name, rollNumber, year, section}`
fn import_registrations<W: Write>(
    state: &AppState,
    id: &str,
    file: &Path,
    out: &mut W,
) -> Result<()> {
    state.require_admin()?;

    let raw = std::fs::read_to_string(file)?;
    let drafts: Vec<NewRegistration> = serde_json::from_str(&raw)?;
    for draft in &drafts {
        draft.validate()?;
    }

    let mut store = state.store();
    let mut registrations = store
        .state()
        .find_event(id)
        .map(|e| e.registrations.clone())
        .ok_or_else(|| Error::NotFound(format!("event {}", id)))?;

    let now = Utc::now();
    let added = drafts.len();
    registrations.extend(drafts.into_iter().map(|d| d.into_registration(id, now)));
    store.update_event_registrations(id, registrations)?;

    tracing::debug!(event_id = %id, added, "Registrations imported");
    writeln!(out, "Imported {} registration(s) for event {}", added, id)?;
    Ok(())
}

fn roster<W: Write>(state: &AppState, id: &str, out: &mut W) -> Result<()> {
    state.require_admin()?;

    let store = state.store();
    let event = store
        .state()
        .find_event(id)
        .ok_or_else(|| Error::NotFound(format!("event {}", id)))?;

    writeln!(
        out,
        "{} ({} registered, {} attended)",
        event.title,
        event.registrations.len(),
        event.attendee_count()
    )?;
    for reg in &event.registrations {
        writeln!(
            out,
            "  [{}] {} {} Year {} Sec {} registered {}{}",
            reg.id,
            reg.roll_number,
            reg.name,
            reg.year,
            reg.section,
            short_timestamp(reg.registered_at),
            if reg.attended { " (present)" } else { "" }
        )?;
    }
    Ok(())
}
