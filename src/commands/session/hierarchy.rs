//! Hierarchy submenu handlers

use std::io::{BufRead, Write};

use campus_core::error::{CampusError, Result};
use campus_core::hierarchy::RootChange;
use serde_json::json;

use super::menu::{HierarchyChoice, HIERARCHY_MENU};
use super::{is_fatal, render, Flow, Session};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Run the hierarchy submenu until Back; end of input exits the session
    pub(super) fn hierarchy_menu(&mut self) -> Result<Flow> {
        loop {
            self.banner(HIERARCHY_MENU)?;
            let raw = ask_or_exit!(self, "Select option: ");

            let Some(choice) = HierarchyChoice::parse(&raw) else {
                let error = CampusError::invalid_value("option", &raw);
                self.notice_or_report("Invalid option.", &error)?;
                continue;
            };

            let outcome = match choice {
                HierarchyChoice::SetRoot => self.set_root(),
                HierarchyChoice::AddChild => self.add_child(),
                HierarchyChoice::Display => self.display_hierarchy(),
                HierarchyChoice::Back => return Ok(Flow::Continue),
            };

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(Flow::Exit),
                Err(e) if is_fatal(&e) => return Err(e),
                Err(e) => self.report(&e)?,
            }
        }
    }

    fn set_root(&mut self) -> Result<Flow> {
        let name = ask_or_exit!(self, "Root name (e.g., Campus, University): ");

        let change = self.hierarchy.set_root(&name);
        let previous = match &change {
            RootChange::Created => None,
            RootChange::Renamed { previous } => Some(previous.clone()),
        };
        let status = if previous.is_some() {
            "renamed"
        } else {
            "created"
        };

        self.emit(
            &format!("Root set to: {}", name),
            json!({
                "type": "hierarchy_root",
                "status": status,
                "root": name,
                "previous": previous,
            }),
        )?;
        Ok(Flow::Continue)
    }

    fn add_child(&mut self) -> Result<Flow> {
        let parent = ask_or_exit!(self, "Parent name: ");
        let child = ask_or_exit!(self, "Child name: ");

        self.hierarchy.add_child(&parent, &child)?;

        self.emit(
            &format!("Added '{}' under '{}'.", child, parent),
            json!({ "type": "hierarchy_child", "parent": parent, "child": child }),
        )?;
        Ok(Flow::Continue)
    }

    fn display_hierarchy(&mut self) -> Result<Flow> {
        let human = render::hierarchy(&self.hierarchy, &self.config.display);
        let nodes: Vec<_> = self
            .hierarchy
            .display()
            .map(|(depth, name)| json!({ "depth": depth, "name": name }))
            .collect();
        self.emit(&human, json!({ "type": "hierarchy", "nodes": nodes }))?;
        Ok(Flow::Continue)
    }
}
