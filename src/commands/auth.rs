use crate::commands::{AppState, CommandError};
use crate::core::session::{self, SessionContext};
use clap::Args;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Your name; defaults to the remembered user
    #[arg(long)]
    pub name: Option<String>,

    /// Your email; defaults to the remembered user
    #[arg(long)]
    pub email: Option<String>,

    /// Remember this identity and keep favorites after logout
    #[arg(long)]
    pub remember: bool,
}

pub async fn login(state: &mut AppState, args: LoginArgs) -> Result<(), CommandError> {
    let remembered = session::remembered_identity(&state.durable);

    let (name, email, remember) = match (args.name, args.email, remembered) {
        (Some(name), Some(email), _) => (name, email, args.remember),
        (name, email, Some((saved_name, saved_email))) => (
            name.unwrap_or(saved_name),
            email.unwrap_or(saved_email),
            true,
        ),
        _ => {
            return Err(CommandError::Usage(
                "Both --name and --email are required.".to_string(),
            ))
        }
    };

    let context = session::login_flow(
        &state.auth,
        &mut state.durable,
        &mut state.session,
        &name,
        &email,
        remember,
    )
    .await?;

    println!("Welcome, {}! You are logged in as {}.", context.name, context.email);

    Ok(())
}

pub async fn logout(state: &mut AppState) -> Result<(), CommandError> {
    session::logout_flow(&state.auth, &mut state.durable, &mut state.session).await?;

    println!("You have been logged out.");

    Ok(())
}

pub async fn status(state: &mut AppState) -> Result<(), CommandError> {
    let valid = session::check_existing_session(&state.auth, &mut state.session).await;

    match (SessionContext::restore(&state.session), valid) {
        (Some(ctx), true) => {
            let since = ctx
                .logged_in_at
                .map(|ts| format!(" since {}", ts.format("%Y-%m-%d %H:%M UTC")))
                .unwrap_or_default();
            println!("Logged in as {} <{}>{}.", ctx.name, ctx.email, since);
        }
        (None, true) => println!("Session is valid."),
        (_, false) => println!("Not logged in to {}.", state.auth.api().base_url()),
    }

    Ok(())
}
