//! Menu text and choice parsing

pub const MAIN_MENU: &str = "\
\n====== CAMPUS NAVIGATION AND UTILITY PLANNER ======
1. Add Building
2. Add Road / Connection
3. Display Campus Map
4. Shortest Path (Dijkstra)
5. BFS Traversal
6. DFS Traversal
7. Manage Building Hierarchy Tree
8. Exit";

pub const HIERARCHY_MENU: &str = "\
\n--- Building Hierarchy Management ---
1. Set / Change Root Category
2. Add Child Category / Building
3. Display Hierarchy
4. Back to Main Menu";

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    AddBuilding,
    AddRoad,
    DisplayMap,
    ShortestPath,
    Bfs,
    Dfs,
    Hierarchy,
    Exit,
}

impl MainChoice {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MainChoice::AddBuilding),
            "2" => Some(MainChoice::AddRoad),
            "3" => Some(MainChoice::DisplayMap),
            "4" => Some(MainChoice::ShortestPath),
            "5" => Some(MainChoice::Bfs),
            "6" => Some(MainChoice::Dfs),
            "7" => Some(MainChoice::Hierarchy),
            "8" => Some(MainChoice::Exit),
            _ => None,
        }
    }
}

/// Hierarchy submenu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyChoice {
    SetRoot,
    AddChild,
    Display,
    Back,
}

impl HierarchyChoice {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(HierarchyChoice::SetRoot),
            "2" => Some(HierarchyChoice::AddChild),
            "3" => Some(HierarchyChoice::Display),
            "4" => Some(HierarchyChoice::Back),
            _ => None,
        }
    }
}
