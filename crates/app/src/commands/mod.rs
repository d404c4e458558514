//! Command handlers
//!
//! Each area of the site gets a module. Handlers read the store through
//! `AppState`, call its mutation operations, and write human-readable
//! output to `out`.

mod attendance;
mod auth;
mod clubs;
mod events;
mod recruitments;

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use clubhub_core::Result;

use crate::cli::Command;
use crate::state::AppState;

pub fn dispatch<W: Write>(state: &AppState, command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Home => clubs::home(state, out),
        Command::Clubs(cmd) => clubs::run(state, cmd, out),
        Command::Events(cmd) => events::run(state, cmd, out),
        Command::Attendance(args) => attendance::run(state, args, out),
        Command::Recruitments(cmd) => recruitments::run(state, cmd, out),
        Command::Applications => recruitments::list_applications(state, out),
        Command::Login { username, password } => auth::login(state, &username, &password, out),
        Command::Logout => auth::logout(state, out),
        Command::Whoami => auth::whoami(state, out),
    }
}

/// dd/mm/yyyy
pub(crate) fn short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// e.g. "1 January 2025"
pub(crate) fn long_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

pub(crate) fn short_timestamp(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y").to_string()
}

/// Treat blank optional inputs as absent
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
pub(crate) fn run_to_string(state: &AppState, command: Command) -> Result<String> {
    let mut buf = Vec::new();
    dispatch(state, command, &mut buf)?;
    Ok(String::from_utf8(buf).expect("utf-8 output"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(short_date(date), "05/01/2025");
        assert_eq!(long_date(date), "5 January 2025");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some("x".into())).as_deref(), Some("x"));
    }
}
