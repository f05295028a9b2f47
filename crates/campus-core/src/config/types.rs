//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Building types offered by default when registering buildings
pub const DEFAULT_BUILDING_TYPES: [&str; 5] = ["Academic", "Hostel", "Admin", "Sports", "Other"];

/// Planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusConfig {
    /// Building types suggested when registering a building
    #[serde(default = "default_building_types")]
    pub building_types: Vec<String>,

    /// Reject building types that are not listed in `building_types`
    #[serde(default)]
    pub strict_building_types: bool,

    /// Rendering options
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Rendering options for the interactive session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Spaces per hierarchy level
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Fixed number of decimals for distances (None = shortest representation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_precision: Option<usize>,
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self {
            building_types: default_building_types(),
            strict_building_types: false,
            display: DisplayConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            distance_precision: None,
        }
    }
}

fn default_building_types() -> Vec<String> {
    DEFAULT_BUILDING_TYPES
        .iter()
        .map(|t| t.to_string())
        .collect()
}

fn default_indent_width() -> usize {
    2
}
