//! Admin session commands

use std::io::Write;

use clubhub_core::Result;

use crate::state::AppState;

pub fn login<W: Write>(state: &AppState, username: &str, password: &str, out: &mut W) -> Result<()> {
    if state.store().login(username, password)? {
        writeln!(out, "Login successful. Admin tools are now available.")?;
    } else {
        writeln!(out, "Login failed: invalid credentials.")?;
    }
    Ok(())
}

pub fn logout<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    state.store().logout()?;
    writeln!(out, "Logged out.")?;
    Ok(())
}

pub fn whoami<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    let label = if state.store().is_admin() {
        "admin"
    } else {
        "visitor"
    };
    writeln!(out, "{}", label)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::Command;
    use crate::commands::run_to_string;
    use crate::state::test_support::temp_state;

    #[test]
    fn test_login_logout_cycle() {
        let (_dir, state) = temp_state();

        let out = run_to_string(
            &state,
            Command::Login {
                username: "admin".into(),
                password: "nope".into(),
            },
        )
        .unwrap();
        assert!(out.contains("Login failed"));
        assert_eq!(run_to_string(&state, Command::Whoami).unwrap(), "visitor\n");

        run_to_string(
            &state,
            Command::Login {
                username: "admin".into(),
                password: "admin123".into(),
            },
        )
        .unwrap();
        assert_eq!(run_to_string(&state, Command::Whoami).unwrap(), "admin\n");

        run_to_string(&state, Command::Logout).unwrap();
        assert_eq!(run_to_string(&state, Command::Whoami).unwrap(), "visitor\n");
    }
}
