//! Command-line surface

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use clubhub_core::{Contact, EventStatus};

#[derive(Parser, Debug)]
#[command(name = "clubhub")]
#[command(author, version, about = "CBIT Connect: clubs, events and recruitments", long_about = None)]
pub struct Cli {
    /// Path to clubhub.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Landing page: clubs, upcoming events and open positions
    Home,
    /// Browse and add clubs
    #[command(subcommand)]
    Clubs(ClubsCommand),
    /// Browse and manage events
    #[command(subcommand)]
    Events(EventsCommand),
    /// Record attendance for an event and export the attendee sheet
    Attendance(AttendanceArgs),
    /// Browse, post and apply to recruitments
    #[command(subcommand)]
    Recruitments(RecruitmentsCommand),
    /// List every submitted application (admin)
    Applications,
    /// Start an admin session
    Login { username: String, password: String },
    /// End the admin session
    Logout,
    /// Show whether an admin session is active
    Whoami,
}

#[derive(Subcommand, Debug)]
pub enum ClubsCommand {
    List,
    Show {
        id: String,
    },
    /// Add a club (admin)
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        /// Image filename or a short glyph
        #[arg(long)]
        logo: String,
        /// NAME:PHONE[:EMAIL], repeatable
        #[arg(long = "contact", value_parser = parse_contact)]
        contacts: Vec<Contact>,
    },
}

#[derive(Subcommand, Debug)]
pub enum EventsCommand {
    List {
        #[arg(long, conflicts_with = "past")]
        upcoming: bool,
        #[arg(long)]
        past: bool,
        /// Only events of this club
        #[arg(long)]
        club: Option<String>,
    },
    /// Add an event (admin)
    Add {
        #[arg(long)]
        club: String,
        #[arg(long)]
        title: String,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        location: String,
        #[arg(long)]
        timings: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        poster: Option<String>,
        #[arg(long)]
        registration_url: Option<String>,
    },
    /// Change an event's status (admin)
    Status { id: String, status: EventStatus },
    /// Publish the certificates link (admin)
    Certificates { id: String, url: String },
    /// Import registrations from a JSON file (admin)
    Register { id: String, file: PathBuf },
    /// Show an event's registrations (admin)
    Roster { id: String },
}

#[derive(Args, Debug)]
pub struct AttendanceArgs {
    pub event_id: String,
    /// Registration ids to mark present
    #[arg(long = "present")]
    pub present: Vec<String>,
    /// Registration ids to mark absent explicitly
    #[arg(long = "absent")]
    pub absent: Vec<String>,
    /// Directory the CSV sheet is written to
    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum RecruitmentsCommand {
    List {
        /// Include closed postings
        #[arg(long)]
        all: bool,
        #[arg(long)]
        club: Option<String>,
    },
    /// Post a recruitment (admin)
    Add {
        #[arg(long)]
        club: String,
        #[arg(long)]
        position: String,
        #[arg(long)]
        description: String,
        /// YYYY-MM-DD
        #[arg(long)]
        deadline: NaiveDate,
        /// Post as closed
        #[arg(long)]
        inactive: bool,
    },
    /// Apply to a recruitment
    Apply {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        roll_number: String,
        #[arg(long)]
        section: String,
        #[arg(long)]
        year: String,
        #[arg(long)]
        branch: String,
    },
}

fn parse_contact(s: &str) -> Result<Contact, String> {
    let mut parts = s.splitn(3, ':').map(str::trim);
    let name = parts.next().unwrap_or_default();
    let phone = parts.next().unwrap_or_default();
    if name.is_empty() || phone.is_empty() {
        return Err(format!("expected NAME:PHONE[:EMAIL], got '{}'", s));
    }

    let contact = Contact::new(name, phone);
    Ok(match parts.next().filter(|e| !e.is_empty()) {
        Some(email) => contact.with_email(email),
        None => contact,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_contact() {
        let contact = parse_contact("Admin: +91 1234567890 :udc@cbit.ac.in").unwrap();
        assert_eq!(contact.name, "Admin");
        assert_eq!(contact.phone, "+91 1234567890");
        assert_eq!(contact.email.as_deref(), Some("udc@cbit.ac.in"));

        assert!(parse_contact("Admin:+91 1").unwrap().email.is_none());
        assert!(parse_contact("Admin").is_err());
    }

    #[test]
    fn test_status_argument() {
        let cli = Cli::try_parse_from(["clubhub", "events", "status", "e1", "completed"]).unwrap();
        match cli.command {
            Command::Events(EventsCommand::Status { id, status }) => {
                assert_eq!(id, "e1");
                assert_eq!(status, EventStatus::Completed);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_upcoming_conflicts_with_past() {
        assert!(Cli::try_parse_from(["clubhub", "events", "list", "--upcoming", "--past"]).is_err());
    }
}
