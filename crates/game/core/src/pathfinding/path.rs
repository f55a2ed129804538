use std::collections::VecDeque;

use crate::state::Position;

/// One step of a path with its cumulative distance from the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathNode {
    pub position: Position,
    pub distance: u32,
}

/// Shortest route from a source (excluded) to a destination (included).
///
/// Walking entities consume nodes front to back; a consumed node is gone.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Path {
    nodes: VecDeque<PathNode>,
    distance: u32,
}

impl Path {
    pub(crate) fn from_nodes(nodes: VecDeque<PathNode>) -> Self {
        let distance = nodes.back().map_or(0, |node| node.distance);
        Self { nodes, distance }
    }

    /// Total distance from the source to the destination.
    pub fn distance(&self) -> u32 {
        self.distance
    }

    /// Remaining node count.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn destination(&self) -> Option<Position> {
        self.nodes.back().map(|node| node.position)
    }

    pub fn front(&self) -> Option<&PathNode> {
        self.nodes.front()
    }

    pub fn pop_front(&mut self) -> Option<PathNode> {
        self.nodes.pop_front()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PathNode> + '_ {
        self.nodes.iter()
    }

    /// Cell reached after walking exactly `distance` steps, if the path is that long.
    pub fn position_at(&self, distance: u32) -> Option<Position> {
        self.nodes
            .iter()
            .find(|node| node.distance == distance)
            .map(|node| node.position)
    }

    /// Prefix of this path no longer than `max_distance` steps.
    pub fn truncated(&self, max_distance: u32) -> Path {
        let nodes = self
            .nodes
            .iter()
            .take_while(|node| node.distance <= max_distance)
            .copied()
            .collect();
        Path::from_nodes(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn straight(len: i32) -> Path {
        Path::from_nodes(
            (1..=len)
                .map(|step| PathNode {
                    position: Position::new(step, 0),
                    distance: step as u32,
                })
                .collect(),
        )
    }

    #[test]
    fn consuming_nodes_is_one_shot() {
        let mut path = straight(3);
        assert_eq!(path.distance(), 3);
        assert_eq!(path.pop_front().map(|n| n.position), Some(Position::new(1, 0)));
        assert_eq!(path.len(), 2);
        assert_eq!(path.front().map(|n| n.position), Some(Position::new(2, 0)));
        assert_eq!(path.destination(), Some(Position::new(3, 0)));
    }

    #[test]
    fn truncation_keeps_the_reachable_prefix() {
        let path = straight(5);
        let prefix = path.truncated(3);
        assert_eq!(prefix.distance(), 3);
        assert_eq!(prefix.destination(), Some(Position::new(3, 0)));
        assert_eq!(path.position_at(3), Some(Position::new(3, 0)));
        assert_eq!(path.position_at(9), None);
        assert!(path.truncated(0).is_empty());
    }
}
