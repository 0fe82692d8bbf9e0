//! The interactive menu loop.
//!
//! Reads from any `BufRead` and writes to any `Write`, so the whole game can
//! be driven from a byte buffer. End of input quits.

use baconpath_core::{ActorGraph, ActorIndex, PathMode, find_path, get_center_statistics};
use std::{
    error::Error,
    io::{BufRead, Write},
};
use tracing::debug;

use crate::colors::ColorScheme;
use crate::display::{
    display_bacon_number, display_menu, display_no_path, display_path, display_statistics,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Statistics,
    Path,
    FamousPath,
    ObscurePath,
    ChangeCenter,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "s" => Some(MenuChoice::Statistics),
            "p" => Some(MenuChoice::Path),
            "f" => Some(MenuChoice::FamousPath),
            "o" => Some(MenuChoice::ObscurePath),
            "c" => Some(MenuChoice::ChangeCenter),
            "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

pub struct Session<'a, R, W> {
    graph: &'a ActorGraph,
    index: &'a ActorIndex,
    center: String,
    input: R,
    output: W,
    colors: &'a ColorScheme,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        graph: &'a ActorGraph,
        index: &'a ActorIndex,
        center: String,
        input: R,
        output: W,
        colors: &'a ColorScheme,
    ) -> Self {
        Self {
            graph,
            index,
            center,
            input,
            output,
            colors,
        }
    }

    pub fn center(&self) -> &str {
        &self.center
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        loop {
            display_menu(&mut self.output, &self.center, self.colors)?;

            let Some(choice) = self.read_choice()? else {
                break;
            };
            debug!(?choice, center = %self.center, "menu choice");

            match choice {
                MenuChoice::Quit => {}
                MenuChoice::Statistics => self.show_statistics()?,
                MenuChoice::Path => self.show_path(PathMode::Shortest)?,
                MenuChoice::FamousPath => self.show_path(PathMode::Famous)?,
                MenuChoice::ObscurePath => self.show_path(PathMode::Obscure)?,
                MenuChoice::ChangeCenter => {
                    if let Some(actor) = self.read_actor()? {
                        self.center = actor;
                    }
                }
            }

            let continued = self.prompt("(hit enter to continue)")?;
            if choice == MenuChoice::Quit || continued.is_none() {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn show_statistics(&mut self) -> Result<(), Box<dyn Error>> {
        let stats = get_center_statistics(self.graph, &self.center)?;
        display_statistics(&mut self.output, &stats, self.colors)?;
        Ok(())
    }

    fn show_path(&mut self, mode: PathMode) -> Result<(), Box<dyn Error>> {
        let Some(target) = self.read_actor()? else {
            return Ok(());
        };

        match find_path(self.graph, &self.center, &target, mode)? {
            Some(path) => {
                if mode == PathMode::Shortest {
                    display_bacon_number(
                        &mut self.output,
                        &self.center,
                        &target,
                        &path,
                        self.colors,
                    )?;
                }
                display_path(&mut self.output, self.graph, &path, self.colors)?;
            }
            None => display_no_path(&mut self.output, self.colors)?,
        }
        Ok(())
    }

    fn read_choice(&mut self) -> Result<Option<MenuChoice>, Box<dyn Error>> {
        let mut line = self.prompt("Please select an option: ")?;
        while let Some(input) = line {
            if let Some(choice) = MenuChoice::parse(&input) {
                return Ok(Some(choice));
            }
            writeln!(
                self.output,
                "Option not recognized, please type p, s, f, o, c, or q"
            )?;
            line = self.prompt("Please select an option: ")?;
        }
        Ok(None)
    }

    /// Asks until the name resolves to an actor in the graph.
    fn read_actor(&mut self) -> Result<Option<String>, Box<dyn Error>> {
        let mut line = self.prompt("Actor's name: ")?;
        while let Some(input) = line {
            match self.index.find_actor(&input) {
                Ok(actor) => return Ok(Some(actor.to_string())),
                Err(reason) => debug!(%reason, "actor lookup failed"),
            }
            line = self.prompt("Actor not in the database. Please select another: ")?;
        }
        Ok(None)
    }

    /// Writes `message` and reads one line without its newline. `None` at end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>, Box<dyn Error>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
