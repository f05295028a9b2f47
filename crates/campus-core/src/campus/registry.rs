use super::{normalize_code, Building, BuildingKind, CampusGraph};

/// Outcome of registering a building
#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    /// The code was new
    Added,
    /// The code already existed; its record was replaced
    Updated { previous: Building },
}

impl Registration {
    pub fn is_update(&self) -> bool {
        matches!(self, Registration::Updated { .. })
    }
}

impl CampusGraph {
    /// Insert or overwrite a building record.
    ///
    /// The code is trimmed and upper-cased. Re-registering a code replaces the
    /// record in place and keeps its roads. Never fails.
    #[tracing::instrument(skip(self, name, zone), fields(code = %code))]
    pub fn register_building(
        &mut self,
        code: &str,
        name: &str,
        kind: BuildingKind,
        zone: &str,
    ) -> Registration {
        let building = Building::new(code, name, kind, zone);
        let key = building.code.clone();

        self.adjacency.entry(key.clone()).or_default();

        match self.buildings.insert(key, building) {
            Some(previous) => {
                tracing::info!(code = %previous.code, "building code already exists, record updated");
                Registration::Updated { previous }
            }
            None => {
                tracing::debug!("building added");
                Registration::Added
            }
        }
    }

    /// Look up a building by (case-insensitive) code
    pub fn building(&self, code: &str) -> Option<&Building> {
        self.buildings.get(&normalize_code(code))
    }

    /// Whether a (case-insensitive) code is registered
    pub fn is_registered(&self, code: &str) -> bool {
        self.buildings.contains_key(&normalize_code(code))
    }

    /// Registered buildings ordered by code
    pub fn buildings(&self) -> impl Iterator<Item = &Building> {
        self.buildings.values()
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}
