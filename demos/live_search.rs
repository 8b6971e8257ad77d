use mapfly::prelude::*;

/// Example of the live variant: free text goes to the public Nominatim
/// endpoint, biased toward Egypt, and the view fits or flies to the hit.
///
/// Run with `RUST_LOG=debug` for request-level logging.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Ismailia, Egypt".to_string());

    let geocoder = NominatimGeocoder::new().with_country_bias("eg");
    let resolver = Resolver::new(Arc::new(geocoder)).with_timeout(Duration::from_secs(10));
    let view = MapView::new(MapViewOptions::default());
    let mut session = SearchSession::new(resolver, Gazetteer::egypt(), view)
        .with_go_to_options(GoToOptions::geocoded());

    println!("searching for {query:?} ...");
    match session.search(&query).await {
        Ok(SearchOutcome::Located(candidate)) => {
            println!("found: {}", candidate.label);
            if let Some(ref bounds) = candidate.bounds {
                println!(
                    "fitting extent ({:.4}, {:.4}) .. ({:.4}, {:.4})",
                    bounds.south_west.lat,
                    bounds.south_west.lng,
                    bounds.north_east.lat,
                    bounds.north_east.lng
                );
            }

            while session.view().is_animating() {
                session.view_mut().update(100.0);
            }
            let viewport = session.view().viewport();
            println!(
                "viewport: center=({:.4}, {:.4}) zoom={:.1}",
                viewport.center.lat, viewport.center.lng, viewport.zoom
            );
        }
        Ok(SearchOutcome::NoResults) => println!("no results"),
        Ok(SearchOutcome::Superseded) => {}
        Err(err) => println!("search failed, try again ({err})"),
    }

    session.view_mut().detach();
    Ok(())
}
