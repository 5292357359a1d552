//! Projections of a waypoint onto the edge-based graph.
//!
//! Resolving a geographic coordinate to a [`PhantomNode`] (nearest-edge
//! search, location index) happens upstream of this crate; this module only
//! carries the result and the invariants the routing core relies on.

use serde::{Deserialize, Serialize};

use crate::coordinate::FixedPointCoordinate;
use crate::types::{NodeId, Weight, INVALID_NODE};

/// A waypoint projected onto one directed edge-based node.
///
/// When the underlying road is bidirected, `edge_based_node + 1` is the
/// edge-based node of the opposite traversal direction, and `weight2`
/// carries the remaining weight for that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhantomNode {
    pub edge_based_node: NodeId,
    pub is_bidirected: bool,
    pub weight1: Weight,
    pub weight2: Weight,
    pub name_id: u32,
    pub location: FixedPointCoordinate,
}

impl PhantomNode {
    pub fn invalid() -> Self {
        Self {
            edge_based_node: INVALID_NODE,
            is_bidirected: false,
            weight1: 0,
            weight2: 0,
            name_id: 0,
            location: FixedPointCoordinate::new(0, 0),
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.edge_based_node == INVALID_NODE
    }

    /// Edge-based node id of the reverse-direction twin, if any.
    pub fn reverse_node(&self) -> Option<NodeId> {
        self.is_bidirected
            .then_some(self.edge_based_node.wrapping_add(1))
    }
}

/// The two phantom candidates resolved for one waypoint of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhantomNodePair {
    pub start_phantom: PhantomNode,
    pub target_phantom: PhantomNode,
}

impl PhantomNodePair {
    /// A leg is routable only if at least one side resolved to something real.
    pub fn at_least_one_valid(&self) -> bool {
        !self.start_phantom.is_invalid() || !self.target_phantom.is_invalid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_phantom_has_sentinel_node() {
        assert!(PhantomNode::invalid().is_invalid());
    }

    #[test]
    fn unidirected_phantom_has_no_reverse_node() {
        let phantom = PhantomNode {
            edge_based_node: 4,
            is_bidirected: false,
            weight1: 10,
            weight2: 0,
            name_id: 1,
            location: FixedPointCoordinate::new(0, 0),
        };
        assert_eq!(phantom.reverse_node(), None);
    }

    #[test]
    fn bidirected_phantom_reverse_node_is_plus_one() {
        let phantom = PhantomNode {
            edge_based_node: 4,
            is_bidirected: true,
            weight1: 10,
            weight2: 5,
            name_id: 1,
            location: FixedPointCoordinate::new(0, 0),
        };
        assert_eq!(phantom.reverse_node(), Some(5));
    }

    #[test]
    fn pair_with_one_invalid_side_is_still_routable() {
        let pair = PhantomNodePair {
            start_phantom: PhantomNode::invalid(),
            target_phantom: PhantomNode {
                edge_based_node: 2,
                is_bidirected: false,
                weight1: 1,
                weight2: 0,
                name_id: 0,
                location: FixedPointCoordinate::new(0, 0),
            },
        };
        assert!(pair.at_least_one_valid());
    }

    #[test]
    fn pair_with_both_invalid_is_unroutable() {
        let pair = PhantomNodePair {
            start_phantom: PhantomNode::invalid(),
            target_phantom: PhantomNode::invalid(),
        };
        assert!(!pair.at_least_one_valid());
    }
}
