use crate::commands::{AppState, CommandError};
use crate::core::session::MATCH_FAVORITES_KEY;
use crate::core::{load_favorites, MatchOrchestrator, MatchedDog, SessionContext};
use crate::services::KeyValueStore;
use clap::Args;

#[derive(Debug, Args)]
pub struct MatchArgs {
    /// Generate this many matches in a row
    #[arg(long, default_value_t = 1)]
    pub rounds: u32,
}

/// Favorites to match on, read fresh from the user's saved favorites
fn match_candidates(
    state: &AppState,
    context: Option<&SessionContext>,
) -> Result<Vec<String>, CommandError> {
    let Some(context) = context else {
        return Err(CommandError::Usage("Session expired. Please log in again.".to_string()));
    };

    let favorites = load_favorites(&state.durable, Some(context));
    if favorites.is_empty() {
        return Err(CommandError::Usage(
            "No favorites selected. Please select favorites first.".to_string(),
        ));
    }

    Ok(favorites)
}

pub async fn run(
    state: &mut AppState,
    context: Option<&SessionContext>,
    args: MatchArgs,
) -> Result<(), CommandError> {
    let favorites = match_candidates(state, context)?;
    state.session.set_json(MATCH_FAVORITES_KEY, &favorites)?;

    let mut orchestrator = MatchOrchestrator::new();
    for round in 0..args.rounds.max(1) {
        if round > 0 {
            println!();
        }
        let matched = orchestrator.next_match(&state.catalog, &favorites).await?;
        print_match(&matched);
    }

    Ok(())
}

fn print_match(matched: &MatchedDog) {
    let dog = &matched.dog;

    println!("Meet {}! Your perfect match.", dog.name);
    if matched.shown > 1 {
        println!("Match {} of {}", matched.shown, matched.total_favorites);
    }
    println!("  Breed:    {}", dog.breed);
    println!("  Age:      {}", dog.age_label());
    println!("  Location: ZIP {}", dog.zip_code);
    println!("  Dog ID:   {}", dog.id);
    println!("  Photo:    {}", dog.img);
}
