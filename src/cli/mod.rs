//! Command-line front end.
//!
//! Each invocation opens a [`PermissionEditor`], which loads the authorized
//! collection, then runs one command against it.

use std::io::Write;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use coffeeshop_auth::TokenAuthorizer;
use coffeeshop_models::{User, UserId};

use crate::modules::permissions::PermissionEditor;
use crate::modules::users::{LoadOutcome, PersistOutcome};
use crate::utils::errors::ClientError;

#[derive(Parser, Debug)]
#[command(name = "coffeeshop")]
#[command(about = "Coffeeshop staff permissions - list and edit manager/barista permissions", long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides API_SERVER_URL)
    #[arg(short = 'u', long)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds (overrides API_TIMEOUT_SECS)
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the users of the collection you may manage
    List,
    /// Set one permission flag and save the user
    Set {
        /// Id of the user to edit
        user_id: i64,

        /// Position of the permission in the user's list (see `list`)
        index: usize,

        /// New value of the flag
        #[arg(action = clap::ArgAction::Set)]
        valid: bool,
    },
}

/// Build the authorizer for the bearer token given on the command line.
///
/// # Errors
///
/// `ClientError::InvalidToken` if `token` is not a readable JWT.
pub fn token_authorizer(token: &str) -> Result<TokenAuthorizer, ClientError> {
    Ok(TokenAuthorizer::from_jwt(token)?)
}

/// Run `command` against an already opened editor, writing results to `out`.
pub async fn run<W: Write>(
    editor: &mut PermissionEditor,
    loaded: LoadOutcome,
    command: &Commands,
    out: &mut W,
) -> anyhow::Result<()> {
    if loaded == LoadOutcome::Skipped {
        bail!("token grants neither manage:managers nor manage:baristas");
    }

    match command {
        Commands::List => {
            for user in editor.users() {
                write_user(out, user)?;
            }
        }
        Commands::Set {
            user_id,
            index,
            valid,
        } => {
            let user_id = UserId::new(*user_id);
            editor
                .set_permission(user_id, *index, *valid)
                .with_context(|| format!("cannot edit user {user_id}"))?;

            match editor.save(user_id).await? {
                PersistOutcome::Saved { collection } => {
                    writeln!(out, "saved user {user_id} to {collection}")?;
                }
                PersistOutcome::Skipped => bail!("save skipped: not authorized"),
            }
            if let Some(user) = editor.user(user_id) {
                write_user(out, user)?;
            }
        }
    }

    Ok(())
}

fn write_user<W: Write>(out: &mut W, user: &User) -> std::io::Result<()> {
    writeln!(out, "{} {}", user.id, user.name)?;
    for (index, permission) in user.permissions.iter().enumerate() {
        let mark = if permission.valid { 'x' } else { ' ' };
        writeln!(out, "  [{mark}] {index}: {}", permission.name)?;
    }
    Ok(())
}
