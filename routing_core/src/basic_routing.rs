//! One bidirectional Dijkstra settle step over a contraction hierarchy,
//! packed-path retrieval, and shortcut unpacking.
//!
//! This is deliberately simpler than a general A*-style bidirectional
//! search: there is no heuristic (CH shortcuts already do the pruning
//! work), and the per-side "offset" that corrects for a partial starting
//! edge is passed in explicitly by the caller rather than folded into node
//! data, because it is a property of the *leg*, not of any single node.

use tracing::trace;

use crate::facade::DataFacade;
use crate::path_data::PathData;
use crate::phantom::PhantomNode;
use crate::query_heap::QueryHeap;
use crate::types::{EdgeId, NodeId, Weight, INVALID_NODE, INVALID_WEIGHT};

/// One settle step of a bidirectional Dijkstra search. Pops the best node
/// off `own_heap`, checks whether it improves the best-known meeting point
/// against `other_heap`, and relaxes its neighbours in the direction given
/// by `is_forward`.
///
/// `offset` is `ComputeEdgeOffset` of the phantom that seeded `own_heap`;
/// it cancels the negative key the seed was inserted with once both sides
/// have met.
pub fn routing_step<F: DataFacade>(
    facade: &F,
    own_heap: &mut QueryHeap,
    other_heap: &QueryHeap,
    middle: &mut NodeId,
    upper_bound: &mut Weight,
    offset: Weight,
    is_forward: bool,
) {
    let Some(u) = own_heap.delete_min() else {
        return;
    };
    let d = own_heap.get_key(u);

    // The edges used to step out of `u` in this direction, and the edges
    // used to check whether a cheaper path into `u` already exists.
    let (relax_edges, stall_edges): (&[EdgeId], &[EdgeId]) = if is_forward {
        (facade.outgoing_edges(u), facade.incoming_edges(u))
    } else {
        (facade.incoming_edges(u), facade.outgoing_edges(u))
    };

    for &edge in stall_edges {
        let data = facade.edge_data(edge);
        let v = if is_forward { data.start } else { data.end };
        if own_heap.was_inserted(v) && own_heap.get_key(v) + data.weight < d {
            trace!(node = u, via = v, "stalled");
            return;
        }
    }

    if other_heap.was_inserted(u) {
        let new_distance = d + other_heap.get_key(u) - offset;
        if new_distance >= 0 && new_distance < *upper_bound {
            *middle = u;
            *upper_bound = new_distance;
            trace!(node = u, distance = new_distance, "new meeting point");
        }
    }

    if d > *upper_bound {
        return;
    }

    for &edge in relax_edges {
        let data = facade.edge_data(edge);
        let v = if is_forward { data.end } else { data.start };
        let new_distance = d + data.weight;

        if !own_heap.was_inserted(v) {
            own_heap.insert(v, new_distance, u);
        } else if new_distance < own_heap.get_key(v) {
            own_heap.decrease_key(v, new_distance, u);
        }
    }
}

/// Offset added at a phantom's side of a leg, cancelling the negative key
/// the corresponding heap was seeded with. Bidirected phantoms pay for
/// both traversal directions since either may end up being the one used.
pub fn compute_edge_offset(phantom: &PhantomNode) -> Weight {
    phantom.weight1 + if phantom.is_bidirected { phantom.weight2 } else { 0 }
}

/// Reconstruct the packed node sequence through `middle`: parent pointers
/// from `middle` back to the forward search's root, reversed, followed by
/// parent pointers from `middle` to the backward search's root.
///
/// A node whose own parent is itself marks a heap's root (how the driver
/// seeds start/target nodes), which stops both walks.
pub fn retrieve_packed_path_from_heap(
    forward_heap: &QueryHeap,
    reverse_heap: &QueryHeap,
    middle: NodeId,
) -> Vec<NodeId> {
    let mut packed_path = vec![middle];

    let mut current = middle;
    while forward_heap.get_data(current) != current {
        current = forward_heap.get_data(current);
        packed_path.push(current);
    }
    packed_path.reverse();

    let mut current = middle;
    while reverse_heap.get_data(current) != current {
        current = reverse_heap.get_data(current);
        packed_path.push(current);
    }

    packed_path
}

/// Expand a CH-packed node sequence into a stream of original-graph edges,
/// recursively replacing shortcuts with the two edges they were contracted
/// from. Implemented with an explicit stack rather than recursion so a long
/// route with many stacked shortcuts doesn't grow the call stack.
pub fn unpack_path<F: DataFacade>(facade: &F, packed_leg: &[NodeId]) -> Vec<PathData> {
    let mut out = Vec::with_capacity(packed_leg.len());

    let mut stack: Vec<(NodeId, NodeId)> =
        packed_leg.windows(2).map(|pair| (pair[0], pair[1])).rev().collect();

    while let Some((s, t)) = stack.pop() {
        let edge = facade
            .find_edge_in_either_direction(s, t)
            .unwrap_or_else(|| panic!("no CH edge between packed path nodes {s} and {t}"));
        let data = facade.edge_data(edge);

        if data.is_shortcut {
            let via = data.contracted_via;
            stack.push((via, t));
            stack.push((s, via));
        } else {
            out.push(PathData {
                node: t,
                name_id: data.name_id,
                duration: data.duration,
                weight: data.weight,
                turn_instruction: data.turn_instruction,
            });
        }
    }

    out
}

/// Sentinel middle/upper-bound pair a fresh bidirectional search starts from.
pub fn initial_search_state() -> (NodeId, Weight) {
    (INVALID_NODE, INVALID_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_step_settles_along_a_chain() {
        let facade = crate::test_support::chain_graph();
        let mut forward_heap = QueryHeap::new(5);
        let reverse_heap = QueryHeap::new(5);

        forward_heap.insert(0, 0, 0);
        let (mut middle, mut upper_bound) = initial_search_state();

        while !forward_heap.is_empty() {
            routing_step(
                &facade,
                &mut forward_heap,
                &reverse_heap,
                &mut middle,
                &mut upper_bound,
                0,
                true,
            );
        }

        assert_eq!(forward_heap.get_key(4), 18);
    }

    #[test]
    fn unpack_path_expands_a_shortcut() {
        let facade = crate::test_support::diamond_with_shortcut();

        let edges = unpack_path(&facade, &[0, 2]);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].name_id, 1);
        assert_eq!(edges[1].name_id, 2);
    }

    #[test]
    fn retrieve_packed_path_walks_both_heaps_to_their_roots() {
        let mut forward_heap = QueryHeap::new(5);
        let mut reverse_heap = QueryHeap::new(5);

        forward_heap.insert(0, 0, 0);
        forward_heap.insert(1, 3, 0);
        forward_heap.insert(2, 7, 1);

        reverse_heap.insert(4, 0, 4);
        reverse_heap.insert(3, 6, 4);
        reverse_heap.insert(2, 11, 3);

        let path = retrieve_packed_path_from_heap(&forward_heap, &reverse_heap, 2);
        assert_eq!(path, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn compute_edge_offset_ignores_weight2_when_unidirected() {
        let phantom = PhantomNode {
            edge_based_node: 0,
            is_bidirected: false,
            weight1: 5,
            weight2: 100,
            name_id: 0,
            location: crate::coordinate::FixedPointCoordinate::new(0, 0),
        };
        assert_eq!(compute_edge_offset(&phantom), 5);
    }

    #[test]
    fn compute_edge_offset_sums_both_weights_when_bidirected() {
        let phantom = PhantomNode {
            edge_based_node: 0,
            is_bidirected: true,
            weight1: 5,
            weight2: 7,
            name_id: 0,
            location: crate::coordinate::FixedPointCoordinate::new(0, 0),
        };
        assert_eq!(compute_edge_offset(&phantom), 12);
    }
}
