//! Interactive planner session
//!
//! Reads menu choices and arguments line by line, calls into the campus
//! engine and renders results. Engine errors are reported and the loop
//! continues; only I/O failures end the session with an error. End of input
//! behaves like choosing Exit.

/// Prompt for a value, leaving the handler with `Flow::Exit` at end of input
macro_rules! ask_or_exit {
    ($session:expr, $prompt:expr) => {
        match $session.ask($prompt)? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

mod campus;
mod hierarchy;
pub mod menu;
pub mod render;

use std::io::{BufRead, Write};

use campus_core::campus::CampusGraph;
use campus_core::config::CampusConfig;
use campus_core::error::{CampusError, Result};
use campus_core::hierarchy::HierarchyTree;

use crate::cli::OutputFormat;
use menu::{MainChoice, MAIN_MENU};

/// Whether the loop should keep going after a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    input: R,
    out: W,
    config: CampusConfig,
    format: OutputFormat,
    quiet: bool,
    campus: CampusGraph,
    hierarchy: HierarchyTree,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, config: CampusConfig, format: OutputFormat, quiet: bool) -> Self {
        Self {
            input,
            out,
            config,
            format,
            quiet,
            campus: CampusGraph::new(),
            hierarchy: HierarchyTree::new(),
        }
    }

    /// Run the main menu loop until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.banner(MAIN_MENU)?;
            let Some(raw) = self.ask("Select option: ")? else {
                break;
            };

            let Some(choice) = MainChoice::parse(&raw) else {
                let error = CampusError::invalid_value("option", &raw);
                self.notice_or_report("Invalid option, please try again.", &error)?;
                continue;
            };
            tracing::debug!(?choice, "menu");

            match self.dispatch(choice) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if is_fatal(&e) => return Err(e),
                Err(e) => self.report(&e)?,
            }
        }

        self.say("Exiting Campus Navigation and Utility Planner. Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MainChoice) -> Result<Flow> {
        match choice {
            MainChoice::AddBuilding => self.add_building(),
            MainChoice::AddRoad => self.add_road(),
            MainChoice::DisplayMap => self.display_map(),
            MainChoice::ShortestPath => self.shortest_path(),
            MainChoice::Bfs => self.traverse(campus_core::graph::Strategy::Bfs),
            MainChoice::Dfs => self.traverse(campus_core::graph::Strategy::Dfs),
            MainChoice::Hierarchy => self.hierarchy_menu(),
            MainChoice::Exit => Ok(Flow::Exit),
        }
    }

    /// Menus and prompts are only shown in interactive human mode
    fn interactive(&self) -> bool {
        self.format == OutputFormat::Human && !self.quiet
    }

    fn banner(&mut self, text: &str) -> Result<()> {
        if self.interactive() {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }

    /// Prompt for one line of input; `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        if self.interactive() {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Human-mode message line (ignored in JSON mode)
    fn say(&mut self, message: &str) -> Result<()> {
        if self.format == OutputFormat::Human {
            writeln!(self.out, "{}", message)?;
        }
        Ok(())
    }

    /// Emit a result: rendered text for humans, one JSON line otherwise
    fn emit(&mut self, human: &str, json: serde_json::Value) -> Result<()> {
        match self.format {
            OutputFormat::Human => writeln!(self.out, "{}", human)?,
            OutputFormat::Json => writeln!(self.out, "{}", serde_json::to_string(&json)?)?,
        }
        Ok(())
    }

    fn report(&mut self, error: &CampusError) -> Result<()> {
        tracing::debug!(error = %error, "reported");
        match self.format {
            OutputFormat::Human => writeln!(self.out, "Error: {}", error)?,
            OutputFormat::Json => writeln!(self.out, "{}", error.to_json())?,
        }
        Ok(())
    }

    /// Friendly message for humans, structured error for JSON consumers
    fn notice_or_report(&mut self, message: &str, error: &CampusError) -> Result<()> {
        match self.format {
            OutputFormat::Human => self.say(message),
            OutputFormat::Json => self.report(error),
        }
    }
}

/// Errors that end the session instead of being reported
fn is_fatal(error: &CampusError) -> bool {
    matches!(error, CampusError::Io(_) | CampusError::Json(_))
}
