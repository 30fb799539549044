//! Render a route map to stdout.
//!
//! Usage: `cargo run --example render_route --features tracing -- [scenario.json]`
//!
//! The argument is a scenario file with `locations` and `route` keys (the
//! files under `tests/scenarios/` work). Without one, a small built-in route
//! is drawn. Set `RUST_LOG=routeplot=debug` to see the render pipeline.

use routeplot::{RenderOptions, RouteRenderer, SvgSurface};
use tracing_subscriber::EnvFilter;

const BUILTIN: &str = r#"{
    "locations": [
        {"name": "Green Valley Depot", "lat": 37.7749, "lng": -122.4194},
        {"name": "Mission Market", "lat": 37.7599, "lng": -122.4148},
        {"name": "Sunset Grocers", "lat": 37.7534, "lng": -122.4944},
        {"name": "Marina Deli", "lat": 37.8037, "lng": -122.4368}
    ],
    "route": [0, 1, 2, 3, 0]
}"#;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .map_err(|e| miette::miette!("failed to read {path}: {e}"))?,
        None => BUILTIN.to_string(),
    };
    let doc: serde_json::Value =
        serde_json::from_str(&input).map_err(|e| miette::miette!("invalid scenario: {e}"))?;
    let locations = doc.get("locations").map(|v| v.to_string());
    let route = doc.get("route").map(|v| v.to_string());
    // A scenario's `"depot": null` draws every location as a stop
    let depot = match doc.get("depot") {
        None => Some(0),
        Some(v) => v.as_u64().map(|d| d as usize),
    };

    let mut surface = SvgSurface::default();
    let options = RenderOptions {
        depot,
        ..RenderOptions::default()
    };
    let outcome = RouteRenderer::new(options).render_attributes(
        locations.as_deref(),
        route.as_deref(),
        &mut surface,
    );
    if let Some(err) = outcome.error {
        eprintln!("{:?}", miette::Report::new(err));
    }
    for line in &outcome.route_info {
        eprintln!("{line}");
    }

    println!("{}", surface.to_html()?);
    Ok(())
}
