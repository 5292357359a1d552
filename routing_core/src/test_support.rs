//! Hand-built CH fixtures exercising the core end to end, mirroring how the
//! crate this one grew from keeps a small hand-built graph (there: a map of
//! Romania) around for algorithm-level tests rather than mocking the
//! `DataFacade` trait itself.

#![cfg(test)]

use crate::coordinate::FixedPointCoordinate;
use crate::facade::InMemoryDataFacade;
use crate::phantom::PhantomNode;
use crate::types::{NodeId, Weight};

/// `0 --3--> 1 --4--> 2 --5--> 3 --6--> 4`, the chain graph scenario 1 is
/// built against (expected shortest-path length 18).
pub fn chain_graph() -> InMemoryDataFacade {
    let mut facade = InMemoryDataFacade::new(5);
    facade.add_edge(0, 1, 3, 3, 1, 0);
    facade.add_edge(1, 2, 4, 4, 2, 0);
    facade.add_edge(2, 3, 5, 5, 3, 0);
    facade.add_edge(3, 4, 6, 6, 4, 0);
    facade
}

/// A diamond with a contracted shortcut `0 -> 2` standing in for `0 -> 1 -> 2`,
/// for exercising shortcut unpacking directly.
pub fn diamond_with_shortcut() -> InMemoryDataFacade {
    let mut facade = InMemoryDataFacade::new(3);
    facade.add_edge(0, 1, 3, 3, 1, 0);
    facade.add_edge(1, 2, 4, 4, 2, 0);
    facade.add_shortcut(0, 2, 1, 7, 7);
    facade
}

pub fn unidirected_phantom(node: NodeId, weight: Weight, name_id: u32) -> PhantomNode {
    PhantomNode {
        edge_based_node: node,
        is_bidirected: false,
        weight1: weight,
        weight2: 0,
        name_id,
        location: FixedPointCoordinate::new(0, 0),
    }
}

pub fn bidirected_phantom(node: NodeId, weight1: Weight, weight2: Weight, name_id: u32) -> PhantomNode {
    PhantomNode {
        edge_based_node: node,
        is_bidirected: true,
        weight1,
        weight2,
        name_id,
        location: FixedPointCoordinate::new(0, 0),
    }
}
