//! Read-only view of a contraction hierarchy that the routing core queries.
//!
//! Building this view — node ordering, contraction, witness search, the
//! resulting shortcut set — lives entirely upstream of this crate. What
//! follows is the contract the core needs, plus an in-memory reference
//! implementation (built straight from an edge list, one outgoing/incoming
//! adjacency list per node) good enough to exercise the core end to end in
//! tests, benchmarks and the CLI demo. It is not a substitute for a
//! memory-mapped, precomputed graph container.
//!
//! Each direction of an original, traversable-both-ways road is its own
//! edge-based node (`PhantomNode::edge_based_node` vs `+ 1`), so a CH edge
//! here is already single-direction and carries one weight, not a
//! forward/backward pair. `outgoing`/`incoming` track, per node, which edges
//! leave it and which arrive at it; a forward search relaxes along
//! `outgoing(u)`, a backward search along `incoming(u)` — list membership is
//! what "valid in this direction" means, so no separate direction flag is
//! needed on the edge itself.

use crate::coordinate::FixedPointCoordinate;
use crate::types::{EdgeId, NodeId, Weight, INVALID_NODE};

/// One CH edge: either a plain original-graph edge, or a shortcut that
/// stands in for a two-edge path through a higher-ranked `contracted_via`
/// node.
#[derive(Debug, Clone, Copy)]
pub struct CHEdgeData {
    pub start: NodeId,
    pub end: NodeId,
    pub weight: Weight,
    pub duration: Weight,
    pub is_shortcut: bool,
    /// Meaningful only when `is_shortcut`: the node the shortcut was
    /// contracted through. `UnpackPath` rediscovers the two edges this
    /// shortcut replaces by looking up `(start, contracted_via)` and
    /// `(contracted_via, end)` rather than caching their ids directly.
    pub contracted_via: NodeId,
    pub name_id: u32,
    pub turn_instruction: u8,
}

/// Read-only contract the routing core needs from a contraction hierarchy.
pub trait DataFacade {
    fn number_of_nodes(&self) -> usize;

    /// Edges that can be left from `node` — relax along these in a forward search.
    fn outgoing_edges(&self, node: NodeId) -> &[EdgeId];

    /// Edges that arrive at `node` — relax along these in a backward search,
    /// and consult them for `RoutingStep`'s stall-on-demand check.
    fn incoming_edges(&self, node: NodeId) -> &[EdgeId];

    fn edge_data(&self, edge: EdgeId) -> &CHEdgeData;

    /// Geographic location of `node`, for placing an unpacked edge's segment.
    fn node_location(&self, node: NodeId) -> FixedPointCoordinate;

    fn target(&self, edge: EdgeId) -> NodeId {
        self.edge_data(edge).end
    }

    fn source(&self, edge: EdgeId) -> NodeId {
        self.edge_data(edge).start
    }

    /// Find the CH edge `a -> b` or `b -> a`, whichever exists. Used by
    /// `UnpackPath` to rediscover the two edges a shortcut was built from.
    fn find_edge_in_either_direction(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.outgoing_edges(a)
            .iter()
            .copied()
            .find(|&edge| self.edge_data(edge).end == b)
            .or_else(|| {
                self.outgoing_edges(b)
                    .iter()
                    .copied()
                    .find(|&edge| self.edge_data(edge).end == a)
            })
    }
}

/// In-memory reference [`DataFacade`], built from a flat edge list.
#[derive(Debug, Default)]
pub struct InMemoryDataFacade {
    node_count: usize,
    edges: Vec<CHEdgeData>,
    outgoing: Vec<Vec<EdgeId>>,
    incoming: Vec<Vec<EdgeId>>,
    locations: Vec<FixedPointCoordinate>,
}

impl InMemoryDataFacade {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            edges: Vec::new(),
            outgoing: vec![Vec::new(); node_count],
            incoming: vec![Vec::new(); node_count],
            locations: vec![FixedPointCoordinate::new(0, 0); node_count],
        }
    }

    pub fn set_location(&mut self, node: NodeId, location: FixedPointCoordinate) {
        self.locations[node as usize] = location;
    }

    /// Add a plain (non-shortcut) directed edge `start -> end`.
    pub fn add_edge(
        &mut self,
        start: NodeId,
        end: NodeId,
        weight: Weight,
        duration: Weight,
        name_id: u32,
        turn_instruction: u8,
    ) -> EdgeId {
        self.push_edge(CHEdgeData {
            start,
            end,
            weight,
            duration,
            is_shortcut: false,
            contracted_via: INVALID_NODE,
            name_id,
            turn_instruction,
        })
    }

    /// Add a shortcut `start -> end` standing in for the path through `via`.
    /// The caller must have already added the two edges it replaces.
    pub fn add_shortcut(
        &mut self,
        start: NodeId,
        end: NodeId,
        via: NodeId,
        weight: Weight,
        duration: Weight,
    ) -> EdgeId {
        self.push_edge(CHEdgeData {
            start,
            end,
            weight,
            duration,
            is_shortcut: true,
            contracted_via: via,
            name_id: 0,
            turn_instruction: 0,
        })
    }

    fn push_edge(&mut self, edge: CHEdgeData) -> EdgeId {
        let id = self.edges.len() as EdgeId;
        self.outgoing[edge.start as usize].push(id);
        self.incoming[edge.end as usize].push(id);
        self.edges.push(edge);
        id
    }
}

impl DataFacade for InMemoryDataFacade {
    fn number_of_nodes(&self) -> usize {
        self.node_count
    }

    fn outgoing_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.outgoing[node as usize]
    }

    fn incoming_edges(&self, node: NodeId) -> &[EdgeId] {
        &self.incoming[node as usize]
    }

    fn edge_data(&self, edge: EdgeId) -> &CHEdgeData {
        &self.edges[edge as usize]
    }

    fn node_location(&self, node: NodeId) -> FixedPointCoordinate {
        self.locations[node as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_direct_edge_either_direction() {
        let mut facade = InMemoryDataFacade::new(3);
        facade.add_edge(0, 1, 5, 5, 0, 0);

        assert_eq!(facade.find_edge_in_either_direction(0, 1), Some(0));
        assert_eq!(facade.find_edge_in_either_direction(1, 0), Some(0));
    }

    #[test]
    fn outgoing_and_incoming_split_by_direction() {
        let mut facade = InMemoryDataFacade::new(3);
        facade.add_edge(0, 1, 5, 5, 0, 0);

        assert_eq!(facade.outgoing_edges(0), &[0]);
        assert_eq!(facade.incoming_edges(1), &[0]);
        assert!(facade.incoming_edges(0).is_empty());
        assert!(facade.outgoing_edges(1).is_empty());
    }

    #[test]
    fn shortcut_reports_contracted_via() {
        let mut facade = InMemoryDataFacade::new(3);
        facade.add_edge(0, 1, 3, 3, 0, 0);
        facade.add_edge(1, 2, 4, 4, 0, 0);
        let shortcut = facade.add_shortcut(0, 2, 1, 7, 7);

        let edge = facade.edge_data(shortcut);
        assert!(edge.is_shortcut);
        assert_eq!(edge.contracted_via, 1);
    }
}
