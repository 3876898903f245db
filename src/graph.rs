//! Room adjacency graph export in Graphviz DOT format.
//!
//! The exported edges come from [`build_room_mst`], which always roots the tree at
//! room 0 and knows nothing about the carving strategy. The graph therefore
//! describes a spanning tree over room centers and may differ from the corridors
//! actually carved into the grid.

use std::fmt::Write as _;
use std::path::Path;

use crate::generators::spanning::grow_spanning_tree;
use crate::maze::{Room, room::manhattan};

/// Greedy spanning tree over room centers, rooted at room 0.
/// Edges are `(connected room, attached room)` pairs of indices into `rooms`.
pub fn build_room_mst(rooms: &[Room]) -> Vec<(usize, usize)> {
    grow_spanning_tree(rooms.len(), 0, |i, j| {
        manhattan(rooms[i].center(), rooms[j].center())
    })
}

/// Renders the rooms as boxed nodes `r<index>` and the edges as undirected links.
pub fn to_dot(rooms: &[Room], edges: &[(usize, usize)]) -> String {
    let mut dot = String::from("graph rooms {\n");
    dot.push_str("  node [shape=box, style=filled, color=gray90];\n");
    for (idx, room) in rooms.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = writeln!(
            dot,
            "  r{idx} [label=\"Room {idx}\\n({},{}) {}x{}\"];",
            room.x, room.y, room.width, room.height
        );
    }
    for (a, b) in edges {
        let _ = writeln!(dot, "  r{a} -- r{b};");
    }
    dot.push_str("}\n");
    dot
}

/// Writes the DOT description of `rooms` and `edges` to `path`.
pub fn write_graphviz(
    rooms: &[Room],
    edges: &[(usize, usize)],
    path: impl AsRef<Path>,
) -> std::io::Result<()> {
    std::fs::write(path, to_dot(rooms, edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mst_of_few_rooms() {
        assert!(build_room_mst(&[]).is_empty());
        assert!(build_room_mst(&[Room::new(0, 0, 2, 2)]).is_empty());
    }

    #[test]
    fn test_mst_roots_at_first_room() {
        let rooms = [
            Room::new(20, 0, 3, 3),
            Room::new(0, 0, 3, 3),
            Room::new(10, 0, 3, 3),
        ];
        assert_eq!(build_room_mst(&rooms), vec![(0, 2), (2, 1)]);
    }

    #[test]
    fn test_dot_output() {
        let rooms = [Room::new(0, 0, 3, 3), Room::new(6, 0, 3, 2)];
        let dot = to_dot(&rooms, &build_room_mst(&rooms));
        let expected = "graph rooms {\n  \
            node [shape=box, style=filled, color=gray90];\n  \
            r0 [label=\"Room 0\\n(0,0) 3x3\"];\n  \
            r1 [label=\"Room 1\\n(6,0) 3x2\"];\n  \
            r0 -- r1;\n}\n";
        assert_eq!(dot, expected);
    }
}
