//! Read-side queries over a store snapshot
//!
//! Everything here is a pure function of the state and the current date,
//! so the views built on top (home page, club page, admin tables) can be
//! tested without a clock.

use chrono::NaiveDate;

use crate::config::ListingConfig;
use crate::models::{Application, Club, Event, Recruitment};
use crate::store::StoreState;

/// Shown when a referenced club or recruitment no longer resolves
pub const UNKNOWN: &str = "Unknown";

/// Events on or after `today`, soonest first.
///
/// Events sharing a date keep their collection order.
pub fn upcoming_events(events: &[Event], today: NaiveDate, limit: Option<usize>) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = events.iter().filter(|e| e.date >= today).collect();
    upcoming.sort_by_key(|e| e.date);
    if let Some(limit) = limit {
        upcoming.truncate(limit);
    }
    upcoming
}

/// Events before `today`, in collection order
pub fn past_events(events: &[Event], today: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|e| e.date < today).collect()
}

pub fn active_recruitments(recruitments: &[Recruitment], limit: Option<usize>) -> Vec<&Recruitment> {
    recruitments
        .iter()
        .filter(|r| r.is_active)
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// Events that have a certificates link to show
pub fn events_with_certificates(events: &[Event]) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| {
            e.certificates_url
                .as_deref()
                .is_some_and(|url| !url.trim().is_empty())
        })
        .collect()
}

pub fn club_name<'a>(clubs: &'a [Club], id: &str) -> Option<&'a str> {
    clubs.iter().find(|c| c.id == id).map(|c| c.name.as_str())
}

/// The landing page: all clubs plus short lists of what's coming up
#[derive(Debug)]
pub struct HomePage<'a> {
    pub clubs: &'a [Club],
    pub upcoming_events: Vec<&'a Event>,
    pub recruitments: Vec<&'a Recruitment>,
}

pub fn home_page<'a>(state: &'a StoreState, today: NaiveDate, listing: &ListingConfig) -> HomePage<'a> {
    HomePage {
        clubs: &state.clubs,
        upcoming_events: upcoming_events(&state.events, today, Some(listing.upcoming_events)),
        recruitments: active_recruitments(&state.recruitments, Some(listing.active_recruitments)),
    }
}

/// Everything shown on one club's page
#[derive(Debug)]
pub struct ClubOverview<'a> {
    pub club: &'a Club,
    pub upcoming_events: Vec<&'a Event>,
    pub past_events: Vec<&'a Event>,
    pub open_positions: Vec<&'a Recruitment>,
}

/// A club's page. Its events keep collection order within each split.
pub fn club_overview<'a>(
    state: &'a StoreState,
    club_id: &str,
    today: NaiveDate,
) -> Option<ClubOverview<'a>> {
    let club = state.find_club(club_id)?;
    let own_events = || state.events.iter().filter(|e| e.club_id == club_id);

    Some(ClubOverview {
        club,
        upcoming_events: own_events().filter(|e| e.date >= today).collect(),
        past_events: own_events().filter(|e| e.date < today).collect(),
        open_positions: state
            .recruitments
            .iter()
            .filter(|r| r.club_id == club_id && r.is_active)
            .collect(),
    })
}

/// One line of the admin applicants table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantRow<'a> {
    pub application: &'a Application,
    pub position: &'a str,
    pub club_name: &'a str,
}

pub fn applicant_rows(state: &StoreState) -> Vec<ApplicantRow<'_>> {
    state
        .applications
        .iter()
        .map(|application| ApplicantRow {
            application,
            position: state
                .find_recruitment(&application.recruitment_id)
                .map(|r| r.position.as_str())
                .unwrap_or(UNKNOWN),
            club_name: club_name(&state.clubs, &application.club_id).unwrap_or(UNKNOWN),
        })
        .collect()
}
