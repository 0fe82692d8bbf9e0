use baconpath_core::{ActorGraph, CenterStatistics};
use std::io::{self, Write};

use crate::colors::ColorScheme;

pub const MENU_OPTIONS: [(char, &str); 6] = [
    ('s', "Get statistics for the center"),
    ('p', "Find a path to another actor"),
    ('f', "Find a famous path to another actor"),
    ('o', "Find an obscure path to another actor"),
    ('c', "Change the center"),
    ('q', "Quit"),
];

pub fn display_menu<W: Write>(out: &mut W, center: &str, colors: &ColorScheme) -> io::Result<()> {
    let rule = "=".repeat(center.chars().count() + 19);
    writeln!(out, "{}", colors.banner(&rule))?;
    writeln!(out, "Current center is: {}", colors.actor_name(center))?;
    writeln!(out, "{}", colors.banner(&rule))?;

    for (key, label) in MENU_OPTIONS {
        writeln!(out, "{}) {}", key, label)?;
    }
    Ok(())
}

/// One line per hop, naming the movie the two actors share.
pub fn display_path<W: Write>(
    out: &mut W,
    graph: &ActorGraph,
    path: &[String],
    colors: &ColorScheme,
) -> io::Result<()> {
    for step in path.windows(2) {
        let (from, to) = (&step[0], &step[1]);
        let movie = graph
            .edge_data(from, to)
            .map(String::as_str)
            .unwrap_or("an unlisted movie");

        writeln!(
            out,
            "{} and {} were in {}",
            colors.actor_name(from),
            colors.actor_name(to),
            colors.movie(movie)
        )?;
    }
    Ok(())
}

pub fn display_bacon_number<W: Write>(
    out: &mut W,
    center: &str,
    target: &str,
    path: &[String],
    colors: &ColorScheme,
) -> io::Result<()> {
    let hops = path.len().saturating_sub(1);
    writeln!(
        out,
        "{}'s {} number is: {}",
        colors.actor_name(target),
        center,
        colors.number(&hops.to_string())
    )
}

pub fn display_no_path<W: Write>(out: &mut W, colors: &ColorScheme) -> io::Result<()> {
    writeln!(out, "{}", colors.error("No path found!"))
}

pub fn display_statistics<W: Write>(
    out: &mut W,
    stats: &CenterStatistics,
    colors: &ColorScheme,
) -> io::Result<()> {
    writeln!(
        out,
        "Average distance: {}",
        colors.number(&format!("{:.4}", stats.average_distance))
    )?;
    writeln!(
        out,
        "Max distance: {}",
        colors.number(&stats.max_distance.to_string())
    )?;
    writeln!(
        out,
        "Percent connected: {}",
        colors.number(&format!("{:.2}", stats.percent_connected))
    )
}
