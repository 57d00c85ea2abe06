use crate::commands::{AppState, CommandError};
use crate::core::{bounding_box_around, nearest_within};
use crate::models::{Coordinates, LocationSearchRequest};
use clap::Args;

#[derive(Debug, Args)]
pub struct LocationsArgs {
    /// Zip code to look up; repeat for several
    #[arg(long = "zip", conflicts_with_all = ["lat", "lon"])]
    pub zip_codes: Vec<String>,

    /// Center latitude for a radius search
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Center longitude for a radius search
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    #[arg(long, default_value_t = 25.0)]
    pub radius_km: f64,

    /// Maximum number of locations to ask for
    #[arg(long, default_value_t = 25)]
    pub size: u32,
}

pub async fn run(state: &mut AppState, args: LocationsArgs) -> Result<(), CommandError> {
    if !args.zip_codes.is_empty() {
        let locations = state
            .catalog
            .locations_by_zip(&args.zip_codes)
            .await
            .map_err(|e| CommandError::Failed("Failed to fetch locations. Please try again.", e))?;

        for loc in &locations {
            println!("{}  {}, {} ({} county)", loc.zip_code, loc.city, loc.state, loc.county);
        }
        return Ok(());
    }

    let (Some(lat), Some(lon)) = (args.lat, args.lon) else {
        return Err(CommandError::Usage(
            "Give --zip, or --lat and --lon for a radius search.".to_string(),
        ));
    };

    let center = Coordinates { lat, lon };
    let request = LocationSearchRequest {
        geo_bounding_box: Some(bounding_box_around(center, args.radius_km)),
        size: Some(args.size),
        ..Default::default()
    };

    let response = state
        .catalog
        .search_locations(&request)
        .await
        .map_err(|e| CommandError::Failed("Failed to search locations. Please try again.", e))?;

    let nearby = nearest_within(center, args.radius_km, response.results);
    for (loc, distance) in &nearby {
        println!("{}  {:>6.1} km  {}, {}", loc.zip_code, distance, loc.city, loc.state);
    }
    println!("{} within {} km ({} in area)", nearby.len(), args.radius_km, response.total);

    Ok(())
}
