//! fires — inspection CLI for the 1000 Fires permission core.
//!
//! Drives the session core over the seed roster: list accounts, show a
//! user's contexts, evaluate a permission check. This binary stands in
//! for the dashboard's view layer — it only ever reads session state and
//! calls the public operations.
//!
//! # Environment Variables
//!
//! - `FIRES_LOG`: tracing filter (e.g. `fires_session=debug`)
//!
//! # Exit Codes
//!
//! `fires check` exits 0 when the permission is granted and 1 when it is
//! denied, so scripts can gate on it directly.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fires_auth::Permission;
use fires_session::{fixtures, SessionContext, UserDirectory};
use fires_types::{MembershipId, UserId};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Inspect the 1000 Fires role/context/permission core.
#[derive(Parser, Debug)]
#[command(name = "fires")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable debug logging (overrides FIRES_LOG)
    #[arg(short, long)]
    debug: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the seed accounts and their contexts
    Roster,

    /// Show one user's memberships and grants
    Contexts {
        /// User id (e.g. u3)
        #[arg(short, long)]
        user: String,
    },

    /// Log in as a user and evaluate a permission check
    Check {
        /// User id (e.g. u3)
        #[arg(short, long)]
        user: String,

        /// Act in this membership instead of the default context
        #[arg(short, long)]
        context: Option<String>,

        /// Permission token (e.g. EDIT_CAMP_DETAILS)
        permission: Permission,
    },
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("FIRES_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.debug);

    let directory = fixtures::seed_directory();

    match args.command {
        Command::Roster => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(directory.roster())?);
            } else {
                for user in directory.roster() {
                    println!("{user}");
                    for membership in user.memberships() {
                        println!("    {membership}  [{}]", membership.id());
                    }
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Contexts { user } => {
            let id = UserId::new(user);
            let user = directory
                .find_user(&id)
                .with_context(|| format!("no user found for id '{id}'"))?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(user.memberships())?);
            } else {
                println!("{user}");
                for (i, membership) in user.memberships().iter().enumerate() {
                    let marker = if i == 0 { " (default)" } else { "" };
                    println!("  {membership}  [{}]{marker}", membership.id());
                    for permission in membership.permissions() {
                        println!("      {permission}");
                    }
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Command::Check {
            user,
            context,
            permission,
        } => {
            let mut session = SessionContext::new(directory);
            session
                .login(&UserId::new(user))
                .context("login failed")?;

            if let Some(context) = context {
                session.switch_context(&MembershipId::new(context));
            }

            let granted = session.check_permission(permission);
            let active = session
                .active_membership()
                .context("no active context after login")?;
            let verdict = if granted { "granted" } else { "denied" };

            if args.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "permission": permission,
                        "membership": active.id(),
                        "granted": granted,
                    })
                );
            } else {
                println!("{permission} {verdict} for {active}");
            }

            if granted {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn permission_parses_as_value_arg() {
        let args = Args::parse_from(["fires", "check", "--user", "u3", "EDIT_CAMP_DETAILS"]);
        match args.command {
            Command::Check { permission, .. } => {
                assert_eq!(permission, Permission::EditCampDetails);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_permission_token_is_rejected() {
        let result =
            Args::try_parse_from(["fires", "check", "--user", "u3", "MANAGE_MAP"]);
        assert!(result.is_err());
    }
}
