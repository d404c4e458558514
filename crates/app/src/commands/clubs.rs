//! Club directory commands

use std::io::Write;

use clubhub_core::directory::{self, club_name};
use clubhub_core::{Club, Error, NewClub, Result};

use super::{long_date, short_date};
use crate::cli::ClubsCommand;
use crate::state::AppState;

pub fn run<W: Write>(state: &AppState, command: ClubsCommand, out: &mut W) -> Result<()> {
    match command {
        ClubsCommand::List => list(state, out),
        ClubsCommand::Show { id } => show(state, &id, out),
        ClubsCommand::Add {
            name,
            description,
            logo,
            contacts,
        } => add(
            state,
            NewClub {
                name,
                description,
                logo,
                contacts,
            },
            out,
        ),
    }
}

pub fn home<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    let store = state.store();
    let snapshot = store.state();
    let page = directory::home_page(snapshot, state.today(), &state.config.listing);

    writeln!(out, "CBIT Connect: Clubs & Events")?;
    writeln!(out)?;
    writeln!(out, "Clubs ({})", page.clubs.len())?;
    for club in page.clubs {
        write_club_line(out, club)?;
    }

    if !page.upcoming_events.is_empty() {
        writeln!(out)?;
        writeln!(out, "Upcoming Events")?;
        for event in &page.upcoming_events {
            writeln!(
                out,
                "  {}  {} ({}) - {}",
                short_date(event.date),
                event.title,
                club_name(&snapshot.clubs, &event.club_id).unwrap_or(directory::UNKNOWN),
                event.status
            )?;
        }
    }

    if !page.recruitments.is_empty() {
        writeln!(out)?;
        writeln!(out, "Recruitment Opportunities")?;
        for recruitment in &page.recruitments {
            writeln!(
                out,
                "  [{}] {} ({}) - apply by {}",
                recruitment.id,
                recruitment.position,
                club_name(&snapshot.clubs, &recruitment.club_id).unwrap_or(directory::UNKNOWN),
                short_date(recruitment.deadline)
            )?;
        }
    }

    Ok(())
}

fn list<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    let store = state.store();
    for club in store.clubs() {
        write_club_line(out, club)?;
    }
    Ok(())
}

fn write_club_line<W: Write>(out: &mut W, club: &Club) -> Result<()> {
    writeln!(out, "  [{}] {} - {}", club.id, club.name, club.description)?;
    Ok(())
}

fn show<W: Write>(state: &AppState, id: &str, out: &mut W) -> Result<()> {
    let store = state.store();
    let overview = directory::club_overview(store.state(), id, state.today())
        .ok_or_else(|| Error::NotFound(format!("club {}", id)))?;
    let club = overview.club;

    writeln!(out, "{} ({})", club.name, club.logo)?;
    writeln!(out, "{}", club.description)?;

    writeln!(out)?;
    writeln!(out, "Upcoming Events ({})", overview.upcoming_events.len())?;
    if overview.upcoming_events.is_empty() {
        writeln!(out, "  Stay tuned! New events will be announced soon.")?;
    }
    for event in &overview.upcoming_events {
        writeln!(
            out,
            "  {}  {} @ {}, {} [{}]",
            long_date(event.date),
            event.title,
            event.location,
            event.timings,
            event.status
        )?;
        if let Some(url) = &event.registration_url {
            writeln!(out, "      Register: {}", url)?;
        }
    }

    if !overview.past_events.is_empty() {
        writeln!(out)?;
        writeln!(out, "Past Events & Certificates")?;
        for event in &overview.past_events {
            writeln!(out, "  {}  {} [{}]", long_date(event.date), event.title, event.status)?;
            if let Some(url) = &event.certificates_url {
                writeln!(out, "      Certificates: {}", url)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Open Positions ({})", overview.open_positions.len())?;
    if overview.open_positions.is_empty() {
        writeln!(
            out,
            "  We're not currently recruiting, but check back soon for new opportunities!"
        )?;
    }
    for recruitment in &overview.open_positions {
        writeln!(
            out,
            "  [{}] {} - apply by {}",
            recruitment.id,
            recruitment.position,
            long_date(recruitment.deadline)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Contact")?;
    for contact in &club.contacts {
        match &contact.email {
            Some(email) => writeln!(out, "  {}  {}  {}", contact.name, contact.phone, email)?,
            None => writeln!(out, "  {}  {}", contact.name, contact.phone)?,
        }
    }

    Ok(())
}

fn add<W: Write>(state: &AppState, draft: NewClub, out: &mut W) -> Result<()> {
    state.require_admin()?;
    draft.validate()?;

    let club = state.store().add_club(draft)?;
    writeln!(out, "Club added: {} [{}]", club.name, club.id)?;
    Ok(())
}
