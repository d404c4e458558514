//! Recruitment postings and applications

use std::io::Write;

use clubhub_core::directory::{self, club_name};
use clubhub_core::{NewApplication, NewRecruitment, Recruitment, Result};

use super::{short_date, short_timestamp};
use crate::cli::RecruitmentsCommand;
use crate::state::AppState;

pub fn run<W: Write>(state: &AppState, command: RecruitmentsCommand, out: &mut W) -> Result<()> {
    match command {
        RecruitmentsCommand::List { all, club } => list(state, all, club.as_deref(), out),
        RecruitmentsCommand::Add {
            club,
            position,
            description,
            deadline,
            inactive,
        } => add(
            state,
            NewRecruitment {
                club_id: club,
                position,
                description,
                deadline,
                is_active: !inactive,
            },
            out,
        ),
        RecruitmentsCommand::Apply {
            id,
            name,
            roll_number,
            section,
            year,
            branch,
        } => apply(
            state,
            NewApplication {
                recruitment_id: id,
                name,
                roll_number,
                section,
                year,
                branch,
            },
            out,
        ),
    }
}

fn list<W: Write>(state: &AppState, all: bool, club: Option<&str>, out: &mut W) -> Result<()> {
    let store = state.store();
    let snapshot = store.state();

    let postings: Vec<&Recruitment> = if all {
        snapshot.recruitments.iter().collect()
    } else {
        directory::active_recruitments(&snapshot.recruitments, None)
    };

    let mut shown = 0;
    for recruitment in postings
        .into_iter()
        .filter(|r| club.map_or(true, |id| r.club_id == id))
    {
        writeln!(
            out,
            "  [{}] {} ({}) - apply by {}{}",
            recruitment.id,
            recruitment.position,
            club_name(&snapshot.clubs, &recruitment.club_id).unwrap_or(directory::UNKNOWN),
            short_date(recruitment.deadline),
            if recruitment.is_active { "" } else { " (closed)" }
        )?;
        writeln!(out, "      {}", recruitment.description)?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(out, "No open positions right now.")?;
    }
    Ok(())
}

fn add<W: Write>(state: &AppState, draft: NewRecruitment, out: &mut W) -> Result<()> {
    state.require_admin()?;
    draft.validate()?;

    let recruitment = state.store().add_recruitment(draft)?;
    writeln!(
        out,
        "Recruitment posted: {} [{}]",
        recruitment.position, recruitment.id
    )?;
    Ok(())
}

fn apply<W: Write>(state: &AppState, draft: NewApplication, out: &mut W) -> Result<()> {
    draft.validate()?;

    let application = state.store().add_application(draft)?;
    writeln!(
        out,
        "Application submitted successfully! Reference {}",
        application.id
    )?;
    Ok(())
}

/// Admin table of every application with its position and club
pub fn list_applications<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    state.require_admin()?;

    let store = state.store();
    let rows = directory::applicant_rows(store.state());
    writeln!(out, "Applications ({})", rows.len())?;
    for row in rows {
        let app = row.application;
        writeln!(
            out,
            "  {}  {} ({}) Sec {} Year {} {}  {} @ {}",
            short_timestamp(app.submitted_at),
            app.name,
            app.roll_number,
            app.section,
            app.year,
            app.branch,
            row.position,
            row.club_name
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::{Command, RecruitmentsCommand};
    use crate::commands::run_to_string;
    use crate::state::test_support::{admin_state, temp_state};
    use crate::state::AppState;
    use chrono::Duration;
    use clubhub_core::Error;

    fn post(state: &AppState, position: &str, inactive: bool) -> String {
        run_to_string(
            state,
            Command::Recruitments(RecruitmentsCommand::Add {
                club: "10".into(),
                position: position.into(),
                description: "Join the core team".into(),
                deadline: state.today() + Duration::days(14),
                inactive,
            }),
        )
        .unwrap();
        state.store().recruitments().last().unwrap().id.clone()
    }

    fn apply(id: &str, name: &str) -> Command {
        Command::Recruitments(RecruitmentsCommand::Apply {
            id: id.into(),
            name: name.into(),
            roll_number: "160122733010".into(),
            section: "C".into(),
            year: "2".into(),
            branch: "CSE".into(),
        })
    }

    fn list(state: &AppState, all: bool) -> String {
        run_to_string(
            state,
            Command::Recruitments(RecruitmentsCommand::List { all, club: None }),
        )
        .unwrap()
    }

    #[test]
    fn test_list_hides_closed_postings() {
        let (_dir, state) = admin_state();
        post(&state, "Web Lead", false);
        post(&state, "Treasurer", true);

        let active = list(&state, false);
        assert!(active.contains("Web Lead (IEEE CBIT)"));
        assert!(!active.contains("Treasurer"));

        let all = list(&state, true);
        assert!(all.contains("Treasurer (IEEE CBIT)"));
        assert!(all.contains("(closed)"));
    }

    #[test]
    fn test_list_empty() {
        let (_dir, state) = temp_state();
        assert_eq!(list(&state, false).trim(), "No open positions right now.");
    }

    #[test]
    fn test_apply_as_visitor_then_review_as_admin() {
        let (_dir, state) = admin_state();
        let id = post(&state, "Web Lead", false);
        state.store().logout().unwrap();

        let out = run_to_string(&state, apply(&id, "Asha")).unwrap();
        assert!(out.starts_with("Application submitted successfully!"));

        let application = state.store().applications()[0].clone();
        assert_eq!(application.club_id, "10");

        let err = run_to_string(&state, Command::Applications).unwrap_err();
        assert!(matches!(err, Error::PermissionDenied(_)));

        state.store().login("admin", "admin123").unwrap();
        let table = run_to_string(&state, Command::Applications).unwrap();
        assert!(table.starts_with("Applications (1)"));
        assert!(table.contains("Asha (160122733010)"));
        assert!(table.contains("Web Lead @ IEEE CBIT"));
    }

    #[test]
    fn test_apply_validates_and_checks_posting() {
        let (_dir, state) = temp_state();

        let err = run_to_string(&state, apply("missing", "Asha")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let err = run_to_string(&state, apply("missing", " ")).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(state.store().applications().is_empty());
    }
}
