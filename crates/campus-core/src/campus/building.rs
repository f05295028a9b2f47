use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Normalize a user-supplied building code to its canonical key
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Category of a building.
///
/// The well-known categories are matched case-insensitively; anything else is
/// kept verbatim as `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BuildingKind {
    Academic,
    Hostel,
    Admin,
    Sports,
    #[default]
    Other,
    Custom(String),
}

impl BuildingKind {
    pub fn as_str(&self) -> &str {
        match self {
            BuildingKind::Academic => "Academic",
            BuildingKind::Hostel => "Hostel",
            BuildingKind::Admin => "Admin",
            BuildingKind::Sports => "Sports",
            BuildingKind::Other => "Other",
            BuildingKind::Custom(s) => s,
        }
    }
}

impl From<&str> for BuildingKind {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "academic" => BuildingKind::Academic,
            "hostel" => BuildingKind::Hostel,
            "admin" => BuildingKind::Admin,
            "sports" => BuildingKind::Sports,
            "other" => BuildingKind::Other,
            _ => BuildingKind::Custom(trimmed.to_string()),
        }
    }
}

impl FromStr for BuildingKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(BuildingKind::from(s))
    }
}

impl fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BuildingKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A registered location on the campus map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Building {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: BuildingKind,
    pub zone: String,
}

impl Building {
    pub fn new(
        code: &str,
        name: impl Into<String>,
        kind: BuildingKind,
        zone: impl Into<String>,
    ) -> Self {
        Self {
            code: normalize_code(code),
            name: name.into(),
            kind,
            zone: zone.into(),
        }
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} | Type: {} | Zone: {}",
            self.code, self.name, self.kind, self.zone
        )
    }
}
