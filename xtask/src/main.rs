use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use routeplot::{RenderOptions, RouteRenderer, SvgSurface};
use serde::Deserialize;
use serde_json::Value;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery    Render every scenario fixture into one HTML page");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => gallery(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

#[derive(Deserialize)]
struct Scenario {
    description: String,
    locations: Option<Value>,
    route: Option<Value>,
    locations_attr: Option<String>,
    route_attr: Option<String>,
    #[serde(default = "default_depot")]
    depot: Option<usize>,
}

fn default_depot() -> Option<usize> {
    Some(0)
}

struct Rendered {
    name: String,
    description: String,
    state: String,
    html: String,
}

fn gallery() {
    let workspace = Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask lives inside the workspace")
        .to_owned();
    let scenarios_dir = workspace.join("tests/scenarios");
    let output_path = workspace.join("target/gallery.html");

    let mut paths: Vec<Utf8PathBuf> = fs::read_dir(&scenarios_dir)
        .expect("Failed to read scenarios directory")
        .filter_map(|e| e.ok())
        .filter_map(|e| Utf8PathBuf::from_path_buf(e.path()).ok())
        .filter(|p| p.extension() == Some("json"))
        .collect();
    paths.sort();

    let rendered: Vec<Rendered> = paths.par_iter().map(|path| render_scenario(path)).collect();

    let succeeded = rendered.iter().filter(|r| r.state == "Succeeded").count();
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>routeplot gallery</title>
    <style>
        body { font-family: system-ui, sans-serif; background: #eee; color: #333; margin: 0; }
        .page { max-width: 900px; margin: 0 auto; padding: 24px; }
        .card { background: white; border-radius: 8px; margin-bottom: 16px; overflow: hidden;
                box-shadow: 0 1px 3px rgba(0,0,0,0.08); }
        .card-header { padding: 12px 16px; border-bottom: 1px solid #eee; background: #fafafa; }
        .card-title { font-weight: 600; font-size: 13px; }
        .card-state { float: right; font-size: 11px; font-weight: 600; }
        .card-body { padding: 16px; }
        .alert { padding: 12px; border-radius: 4px; }
        .alert-info { background: #cff4fc; color: #055160; }
        .alert-danger { background: #f8d7da; color: #842029; }
        .list-unstyled { list-style: none; padding-left: 0; font-size: 0.85rem; }
    </style>
</head>
<body>
<div class="page">
"#,
    );
    html.push_str(&format!(
        "<h1>{} scenarios, {} rendered</h1>\n",
        rendered.len(),
        succeeded
    ));
    for r in &rendered {
        html.push_str(&format!(
            r#"<div class="card">
<div class="card-header"><span class="card-title">{} &mdash; {}</span><span class="card-state">{}</span></div>
<div class="card-body">{}</div>
</div>
"#,
            escape_html(&r.name),
            escape_html(&r.description),
            r.state,
            r.html
        ));
    }
    html.push_str("</div>\n</body>\n</html>\n");

    if let Some(dir) = output_path.parent() {
        fs::create_dir_all(dir).expect("Failed to create output directory");
    }
    fs::write(&output_path, html).expect("Failed to write gallery");
    eprintln!("Wrote {} ({} of {} succeeded)", output_path, succeeded, rendered.len());
}

fn render_scenario(path: &Utf8Path) -> Rendered {
    let name = path.file_stem().unwrap_or("scenario").to_string();
    let scenario: Scenario = match fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
    {
        Ok(s) => s,
        Err(e) => {
            return Rendered {
                name,
                description: "unreadable fixture".to_string(),
                state: "Invalid".to_string(),
                html: format!("<pre>{}</pre>", escape_html(&e)),
            };
        }
    };

    let locations = scenario
        .locations_attr
        .or_else(|| scenario.locations.map(|v| v.to_string()));
    let route = scenario
        .route_attr
        .or_else(|| scenario.route.map(|v| v.to_string()));

    let options = RenderOptions {
        depot: scenario.depot,
        ..RenderOptions::default()
    };
    let mut surface = SvgSurface::default();
    let outcome = RouteRenderer::new(options).render_attributes(
        locations.as_deref(),
        route.as_deref(),
        &mut surface,
    );
    let html = surface
        .to_html()
        .unwrap_or_else(|e| format!("<pre>Error: {}</pre>", escape_html(&e.to_string())));

    Rendered {
        name,
        description: scenario.description,
        state: format!("{:?}", outcome.state),
        html,
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
