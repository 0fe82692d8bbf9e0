use baconpath::logging::init_tracing;
use baconpath::*;
use baconpath_core::PathMode;
use clap::Parser;
use std::error::Error;
use std::io::{self, Write};

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = init_tracing(args.verbose) {
        eprintln!("⚠️  Logging disabled: {}", error);
    }

    if let Err(error) = run(args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error);
        std::process::exit(1);
    }
}

fn run(args: Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout().lock();

    match args.command {
        None => {
            writeln!(stdout, "Creating actor graph...")?;
            let app = BaconPathApp::load(&args.movies)?;
            let center = app.resolve_actor(&args.center)?;

            let stdin = io::stdin().lock();
            let mut session = Session::new(&app.graph, &app.index, center, stdin, &mut stdout, colors);
            session.run()
        }
        Some(Command::Path {
            from,
            to,
            mode,
            json,
        }) => {
            let app = BaconPathApp::load(&args.movies)?;
            let query = PathQuery {
                from,
                to,
                mode: PathMode::from(mode),
                json,
            };
            run_path_query(&app, query, colors, &mut stdout)
        }
        Some(Command::Stats { center, json }) => {
            let app = BaconPathApp::load(&args.movies)?;
            let center = center.unwrap_or(args.center);
            run_stats_query(&app, &center, json, colors, &mut stdout)
        }
    }
}
