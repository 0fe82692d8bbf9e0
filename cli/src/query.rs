use baconpath_core::{PathMode, find_path, get_center_statistics};
use std::{error::Error, io::Write};

use crate::app::BaconPathApp;
use crate::colors::ColorScheme;
use crate::display::{display_bacon_number, display_no_path, display_path, display_statistics};
use crate::json_output::{JsonStatsOutput, create_path_json};

pub struct PathQuery {
    pub from: String,
    pub to: String,
    pub mode: PathMode,
    pub json: bool,
}

/// Answers one path query and writes it as text or JSON.
pub fn run_path_query<W: Write>(
    app: &BaconPathApp,
    query: PathQuery,
    colors: &ColorScheme,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let from = app.resolve_actor(&query.from)?;
    let to = app.resolve_actor(&query.to)?;
    let path = find_path(&app.graph, &from, &to, query.mode)?;

    if query.json {
        let json = create_path_json(&app.graph, from, to, query.mode, path.as_deref())?;
        writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        return Ok(());
    }

    match path {
        Some(path) => {
            if query.mode == PathMode::Shortest {
                display_bacon_number(out, &from, &to, &path, colors)?;
            }
            display_path(out, &app.graph, &path, colors)?;
        }
        None => display_no_path(out, colors)?,
    }
    Ok(())
}

pub fn run_stats_query<W: Write>(
    app: &BaconPathApp,
    center: &str,
    json: bool,
    colors: &ColorScheme,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    let center = app.resolve_actor(center)?;
    let statistics = get_center_statistics(&app.graph, &center)?;

    if json {
        let output = JsonStatsOutput { center, statistics };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        display_statistics(out, &statistics, colors)?;
    }
    Ok(())
}
