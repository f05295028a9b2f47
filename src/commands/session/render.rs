//! Human-readable rendering of engine results

use campus_core::campus::{CampusGraph, CampusSnapshot};
use campus_core::config::DisplayConfig;
use campus_core::graph::{PathResult, Traversal};
use campus_core::hierarchy::HierarchyTree;

pub fn map(snapshot: &CampusSnapshot, display: &DisplayConfig) -> String {
    if snapshot.is_empty() {
        return "No buildings in campus map yet.".to_string();
    }

    let mut lines = vec!["\n--- Buildings ---".to_string()];
    lines.extend(snapshot.buildings.iter().map(|b| format!("  {}", b)));

    lines.push("\n--- Road Network (Adjacency List) ---".to_string());
    for entry in &snapshot.adjacency {
        let edges: Vec<String> = entry
            .roads
            .iter()
            .map(|road| {
                format!(
                    "{}({})",
                    road.to,
                    display.format_distance(road.distance.value())
                )
            })
            .collect();
        lines.push(format!(" {} -> {}", entry.code, edges.join(", ")));
    }
    lines.join("\n")
}

pub fn path(result: &PathResult, campus: &CampusGraph, display: &DisplayConfig) -> String {
    let Some(total) = result.total_distance.filter(|_| result.found) else {
        return "No path found between the given buildings.".to_string();
    };

    let mut lines = vec![
        format!(
            "\nShortest path (by building code): {}",
            result.path.join(" -> ")
        ),
        format!("Total distance: {}", display.format_distance(total.value())),
        "Detailed path:".to_string(),
    ];
    lines.extend(
        result
            .path
            .iter()
            .filter_map(|code| campus.building(code))
            .map(|b| format!("  {}", b)),
    );
    lines.join("\n")
}

pub fn traversal(result: &Traversal) -> String {
    format!(
        "{} traversal order (by building code): {}",
        result.strategy,
        result.order.join(" -> ")
    )
}

pub fn hierarchy(tree: &HierarchyTree, display: &DisplayConfig) -> String {
    if tree.is_empty() {
        return "Hierarchy tree is empty.".to_string();
    }

    let mut lines = vec!["\n--- Building Hierarchy ---".to_string()];
    lines.extend(
        tree.display()
            .map(|(depth, name)| format!("{}- {}", display.indent(depth), name)),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::campus::BuildingKind;
    use campus_core::graph::Distance;

    fn campus() -> CampusGraph {
        let mut campus = CampusGraph::new();
        campus.register_building("CS", "Computer Science", BuildingKind::Academic, "North");
        campus.register_building("LIB", "Library", BuildingKind::Academic, "Center");
        campus.connect("CS", "LIB", Distance::new(4.0)).unwrap();
        campus
    }

    #[test]
    fn test_map_empty() {
        let snapshot = CampusGraph::new().snapshot();
        assert_eq!(
            map(&snapshot, &DisplayConfig::default()),
            "No buildings in campus map yet."
        );
    }

    #[test]
    fn test_map_lists_buildings_and_roads() {
        let text = map(&campus().snapshot(), &DisplayConfig::default());
        assert!(text.contains("  CS - Computer Science | Type: Academic | Zone: North"));
        assert!(text.contains(" CS -> LIB(4)"));
        assert!(text.contains(" LIB -> CS(4)"));
    }

    #[test]
    fn test_path_with_precision() {
        let campus = campus();
        let result = campus.shortest_path("CS", "LIB").unwrap();
        let display = DisplayConfig {
            distance_precision: Some(1),
            ..Default::default()
        };
        let text = path(&result, &campus, &display);
        assert!(text.contains("Shortest path (by building code): CS -> LIB"));
        assert!(text.contains("Total distance: 4.0"));
        assert!(text.contains("  LIB - Library | Type: Academic | Zone: Center"));
    }

    #[test]
    fn test_path_not_found() {
        let result = PathResult::not_found("CS", "GYM");
        assert_eq!(
            path(&result, &campus(), &DisplayConfig::default()),
            "No path found between the given buildings."
        );
    }

    #[test]
    fn test_hierarchy_indentation() {
        let mut tree = HierarchyTree::new();
        assert_eq!(
            hierarchy(&tree, &DisplayConfig::default()),
            "Hierarchy tree is empty."
        );

        tree.set_root("Campus");
        tree.add_child("Campus", "North").unwrap();
        tree.add_child("North", "Hostel-A").unwrap();
        let text = hierarchy(&tree, &DisplayConfig::default());
        assert!(text.ends_with("- Campus\n  - North\n    - Hostel-A"));
    }
}
