//! Map menu handlers: buildings, roads, traversals and shortest paths

use std::io::{BufRead, Write};

use campus_core::campus::{normalize_code, BuildingKind, Registration};
use campus_core::error::{CampusError, Result};
use campus_core::graph::{Distance, Strategy};
use serde_json::json;

use super::{render, Flow, Session};

impl<R: BufRead, W: Write> Session<R, W> {
    pub(super) fn add_building(&mut self) -> Result<Flow> {
        let code = ask_or_exit!(self, "Building code (e.g., CS, LIB, ADM): ");
        let name = ask_or_exit!(self, "Building name: ");
        let types_prompt = format!("Type ({}): ", self.config.building_types.join("/"));
        let kind = ask_or_exit!(self, &types_prompt);
        let zone = ask_or_exit!(self, "Zone/Block (e.g., North, South, Block-A): ");

        if code.is_empty() {
            return Err(CampusError::invalid_value("building code", "(empty)"));
        }
        if !self.config.allows_building_type(&kind) {
            return Err(CampusError::invalid_value("building type", &kind));
        }

        let outcome =
            self.campus
                .register_building(&code, &name, BuildingKind::from(kind.as_str()), &zone);
        let building = self
            .campus
            .building(&code)
            .cloned()
            .ok_or_else(|| CampusError::unknown_building(code.as_str()))?;

        let (status, human) = match outcome {
            Registration::Added => ("added", format!("Building added: {}", building)),
            Registration::Updated { .. } => (
                "updated",
                format!(
                    "Building code already exists, updating building information.\nBuilding updated: {}",
                    building
                ),
            ),
        };
        self.emit(
            &human,
            json!({ "type": "building", "status": status, "building": building }),
        )?;
        Ok(Flow::Continue)
    }

    pub(super) fn add_road(&mut self) -> Result<Flow> {
        let from = ask_or_exit!(self, "From building code: ");
        let to = ask_or_exit!(self, "To building code: ");
        let Some(distance) = self.ask_distance("Distance / cost between them: ")? else {
            return Ok(Flow::Exit);
        };

        self.campus.connect(&from, &to, distance)?;

        let (from, to) = (normalize_code(&from), normalize_code(&to));
        let human = format!(
            "Road added between {} and {} with distance {}.",
            from,
            to,
            self.config.display.format_distance(distance.value())
        );
        self.emit(
            &human,
            json!({ "type": "road", "from": from, "to": to, "distance": distance }),
        )?;
        Ok(Flow::Continue)
    }

    /// Re-prompt until the input is a finite, non-negative number
    fn ask_distance(&mut self, prompt: &str) -> Result<Option<Distance>> {
        loop {
            let Some(raw) = self.ask(prompt)? else {
                return Ok(None);
            };

            let parsed = match raw.parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    let error = CampusError::invalid_value("distance", &raw);
                    self.notice_or_report("Invalid number, try again.", &error)?;
                    continue;
                }
            };

            match Distance::try_new(parsed) {
                Ok(distance) => return Ok(Some(distance)),
                Err(e) => self.notice_or_report("Value must be >= 0", &e)?,
            }
        }
    }

    pub(super) fn display_map(&mut self) -> Result<Flow> {
        let snapshot = self.campus.snapshot();
        let human = render::map(&snapshot, &self.config.display);
        let mut value = serde_json::to_value(&snapshot)?;
        value["type"] = json!("map");
        self.emit(&human, value)?;
        Ok(Flow::Continue)
    }

    pub(super) fn shortest_path(&mut self) -> Result<Flow> {
        let start = ask_or_exit!(self, "Start building code: ");
        let end = ask_or_exit!(self, "Destination building code: ");

        let result = self.campus.shortest_path(&start, &end)?;

        let human = render::path(&result, &self.campus, &self.config.display);
        let buildings: Vec<_> = result
            .path
            .iter()
            .filter_map(|code| self.campus.building(code))
            .collect();
        let mut value = serde_json::to_value(&result)?;
        value["type"] = json!("path");
        value["buildings"] = serde_json::to_value(&buildings)?;
        self.emit(&human, value)?;
        Ok(Flow::Continue)
    }

    pub(super) fn traverse(&mut self, strategy: Strategy) -> Result<Flow> {
        let prompt = format!("Start building code for {}: ", strategy);
        let start = ask_or_exit!(self, &prompt);

        let result = match strategy {
            Strategy::Bfs => self.campus.breadth_first(&start)?,
            Strategy::Dfs => self.campus.depth_first(&start)?,
        };

        let mut value = serde_json::to_value(&result)?;
        value["type"] = json!("traversal");
        self.emit(&render::traversal(&result), value)?;
        Ok(Flow::Continue)
    }
}
