use crate::commands::{AppState, CommandError};
use crate::core::{
    filter_breeds, load_favorites, page_offset, page_slice, paginate, toggle_and_save, Pagination,
    SessionContext,
};
use crate::models::{Dog, SearchQuery, SortOrder};
use clap::Args;

#[derive(Debug, Args)]
pub struct BreedsArgs {
    /// Only show breeds containing this text
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Breed to include; repeat for several
    #[arg(long = "breed")]
    pub breeds: Vec<String>,

    /// Zip code to include; repeat for several
    #[arg(long = "zip")]
    pub zip_codes: Vec<String>,

    #[arg(long)]
    pub age_min: Option<u32>,

    #[arg(long)]
    pub age_max: Option<u32>,

    /// breed:asc or breed:desc
    #[arg(long, default_value = "breed:asc")]
    pub sort: SortOrder,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: u64,

    /// Show favorites instead of searching
    #[arg(long)]
    pub favorites_only: bool,

    /// Continue from a cursor printed by an earlier search
    #[arg(
        long,
        conflicts_with_all = ["breeds", "zip_codes", "age_min", "age_max", "page", "favorites_only"]
    )]
    pub cursor: Option<String>,
}

#[derive(Debug, Args)]
pub struct FavoriteArgs {
    /// Dog ids to toggle
    #[arg(required = true)]
    pub ids: Vec<String>,
}

pub async fn breeds(state: &mut AppState, args: BreedsArgs) -> Result<(), CommandError> {
    let breeds = state
        .catalog
        .breeds()
        .await
        .map_err(|e| CommandError::Failed("Failed to load dog breeds. Please try again.", e))?;

    let shown = filter_breeds(&breeds, args.filter.as_deref().unwrap_or(""));
    for breed in &shown {
        println!("{}", breed);
    }
    println!("{} of {} breeds", shown.len(), breeds.len());

    Ok(())
}

pub async fn search(
    state: &mut AppState,
    context: Option<&SessionContext>,
    args: SearchArgs,
) -> Result<(), CommandError> {
    let page_size = state.page_size();
    let favorites = load_favorites(&state.durable, context);

    if args.favorites_only {
        return show_favorites(state, &favorites, args.page).await;
    }

    if let Some(cursor) = args.cursor.as_deref() {
        return continue_search(state, &favorites, cursor).await;
    }

    let query = SearchQuery {
        breeds: args.breeds,
        zip_codes: args.zip_codes,
        age_min: args.age_min,
        age_max: args.age_max,
        sort: args.sort,
        size: page_size,
        from: u32::try_from(page_offset(args.page, page_size as u64))
            .map_err(|_| CommandError::Usage(format!("Page {} is out of range.", args.page)))?,
    };

    let response = state
        .catalog
        .search(&query)
        .await
        .map_err(|e| CommandError::Failed("Failed to search dogs. Please try again.", e))?;

    let dogs = state
        .catalog
        .dog_details(&response.result_ids)
        .await
        .map_err(|e| CommandError::Failed("Failed to search dogs. Please try again.", e))?;

    print_dogs(&dogs, &favorites);
    print_pagination(&paginate(args.page, response.total, page_size as u64));

    Ok(())
}

async fn continue_search(
    state: &AppState,
    favorites: &[String],
    cursor: &str,
) -> Result<(), CommandError> {
    let response = state
        .catalog
        .search_continuation(cursor)
        .await
        .map_err(|e| CommandError::Failed("Failed to search dogs. Please try again.", e))?;

    let dogs = state
        .catalog
        .dog_details(&response.result_ids)
        .await
        .map_err(|e| CommandError::Failed("Failed to search dogs. Please try again.", e))?;

    print_dogs(&dogs, favorites);
    println!("{} dogs in total", response.total);
    if let Some(next) = response.next {
        println!("More: --cursor '{}'", next);
    }

    Ok(())
}

pub async fn favorite(
    state: &mut AppState,
    context: Option<&SessionContext>,
    args: FavoriteArgs,
) -> Result<(), CommandError> {
    let mut current = Vec::new();
    for id in &args.ids {
        current = toggle_and_save(&mut state.durable, context, id)?;
        if current.contains(id) {
            println!("Added {} to favorites.", id);
        } else {
            println!("Removed {} from favorites.", id);
        }
    }

    println!("{} favorite(s).", current.len());

    Ok(())
}

pub async fn favorites(
    state: &mut AppState,
    context: Option<&SessionContext>,
) -> Result<(), CommandError> {
    let favorites = load_favorites(&state.durable, context);
    show_favorites(state, &favorites, 1).await
}

async fn show_favorites(
    state: &AppState,
    favorites: &[String],
    page: u64,
) -> Result<(), CommandError> {
    if favorites.is_empty() {
        println!("No favorites yet. Use `favorite <ID>` to add some.");
        return Ok(());
    }

    let dogs = state
        .catalog
        .dog_details(favorites)
        .await
        .map_err(|e| CommandError::Failed("Failed to search dogs. Please try again.", e))?;

    let page_size = state.page_size() as u64;
    print_dogs(page_slice(&dogs, page, page_size), favorites);
    print_pagination(&paginate(page, dogs.len() as u64, page_size));

    Ok(())
}

fn print_dogs(dogs: &[Dog], favorites: &[String]) {
    if dogs.is_empty() {
        println!("No dogs found.");
        return;
    }

    for dog in dogs {
        let marker = if favorites.contains(&dog.id) { "*" } else { " " };
        println!(
            "{} {}  {:<14} {:<28} {:<9} ZIP {}",
            marker,
            dog.id,
            dog.name,
            dog.breed,
            dog.age_label(),
            dog.zip_code
        );
    }
}

fn print_pagination(p: &Pagination) {
    if p.total_items == 0 {
        return;
    }

    let pages = p
        .visible_pages
        .iter()
        .map(|n| {
            if *n == p.current_page {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    println!(
        "Showing {}-{} of {} dogs | page {} of {} | {}{}{}",
        p.start_item,
        p.end_item,
        p.total_items,
        p.current_page,
        p.total_pages,
        if p.has_prev { "< " } else { "" },
        pages,
        if p.has_next { " >" } else { "" },
    );
}
