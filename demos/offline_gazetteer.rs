use mapfly::prelude::*;

/// Example of the offline variant: suggestions and flights come entirely
/// from the built-in gazetteer, no network involved.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let gazetteer = Gazetteer::egypt();
    let resolver = Resolver::new(Arc::new(gazetteer.clone()));
    let view = MapView::new(MapViewOptions::default());
    let mut session = SearchSession::new(resolver, gazetteer, view);

    println!("mapfly offline gazetteer demo");
    println!("=============================");

    let query = "si";
    println!("\nSuggestions for {query:?}:");
    for candidate in session.suggest(query) {
        println!(
            "   {} ({:.4}, {:.4})",
            candidate.label, candidate.position.lat, candidate.position.lng
        );
    }

    match session.search("Luxor").await? {
        SearchOutcome::Located(candidate) => println!("\nFlying to {} ...", candidate.label),
        other => println!("\nUnexpected outcome: {other:?}"),
    }

    // Step the animation the way a frame loop would.
    let mut elapsed = 0.0;
    while session.view().is_animating() {
        session.view_mut().update(100.0);
        elapsed += 100.0;
        let viewport = session.view().viewport();
        println!(
            "   t={elapsed:>6.0}ms  center=({:.4}, {:.4})  zoom={:.2}",
            viewport.center.lat, viewport.center.lng, viewport.zoom
        );
    }

    if let Some(marker) = session.view().marker() {
        println!(
            "\nMarker: {} at ({:.4}, {:.4})",
            marker.label, marker.position.lat, marker.position.lng
        );
    }

    session.view_mut().detach();
    Ok(())
}
