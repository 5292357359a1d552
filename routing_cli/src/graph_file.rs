//! JSON description of a small precomputed CH graph plus the waypoints to
//! route between, read from disk for the `route` subcommand.

use serde::Deserialize;

use routing_core::coordinate::FixedPointCoordinate;
use routing_core::error::RoutingError;
use routing_core::facade::InMemoryDataFacade;
use routing_core::phantom::{PhantomNode, PhantomNodePair};
use routing_core::types::NodeId;

#[derive(Deserialize)]
pub struct EdgeEntry {
    pub start: NodeId,
    pub end: NodeId,
    pub weight: i32,
    pub duration: i32,
    pub name_id: u32,
    #[serde(default)]
    pub turn_instruction: u8,
}

#[derive(Deserialize)]
pub struct NodeEntry {
    pub node: NodeId,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Deserialize)]
pub struct ShortcutEntry {
    pub start: NodeId,
    pub end: NodeId,
    pub via: NodeId,
    pub weight: i32,
    pub duration: i32,
}

#[derive(Deserialize)]
pub struct PhantomEntry {
    pub edge_based_node: NodeId,
    #[serde(default)]
    pub is_bidirected: bool,
    pub weight1: i32,
    #[serde(default)]
    pub weight2: i32,
    pub name_id: u32,
    pub lat: f64,
    pub lon: f64,
}

impl From<PhantomEntry> for PhantomNode {
    fn from(entry: PhantomEntry) -> Self {
        PhantomNode {
            edge_based_node: entry.edge_based_node,
            is_bidirected: entry.is_bidirected,
            weight1: entry.weight1,
            weight2: entry.weight2,
            name_id: entry.name_id,
            location: FixedPointCoordinate::from_degrees(entry.lat, entry.lon),
        }
    }
}

#[derive(Deserialize)]
pub struct WaypointEntry {
    pub start: PhantomEntry,
    pub target: PhantomEntry,
}

#[derive(Deserialize)]
pub struct GraphFile {
    pub node_count: usize,
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
    #[serde(default)]
    pub shortcuts: Vec<ShortcutEntry>,
    /// Per-node coordinates, used to place unpacked edges' segments.
    /// Nodes with no entry here default to `(0, 0)`.
    #[serde(default)]
    pub nodes: Vec<NodeEntry>,
    pub waypoints: Vec<WaypointEntry>,
}

pub struct LoadedGraph {
    pub facade: InMemoryDataFacade,
    pub legs: Vec<PhantomNodePair>,
}

fn check_node(node: NodeId, node_count: usize) -> Result<(), RoutingError> {
    if (node as usize) < node_count {
        Ok(())
    } else {
        Err(RoutingError::NodeOutOfBounds(node, node_count))
    }
}

pub fn load(path: &str) -> Result<LoadedGraph, RoutingError> {
    let raw = std::fs::read_to_string(path)?;
    let file: GraphFile = serde_json::from_str(&raw)?;
    let node_count = file.node_count;

    let mut facade = InMemoryDataFacade::new(node_count);
    for edge in file.edges {
        check_node(edge.start, node_count)?;
        check_node(edge.end, node_count)?;
        facade.add_edge(edge.start, edge.end, edge.weight, edge.duration, edge.name_id, edge.turn_instruction);
    }
    for shortcut in file.shortcuts {
        check_node(shortcut.start, node_count)?;
        check_node(shortcut.end, node_count)?;
        check_node(shortcut.via, node_count)?;
        facade.add_shortcut(shortcut.start, shortcut.end, shortcut.via, shortcut.weight, shortcut.duration);
    }
    for node in file.nodes {
        check_node(node.node, node_count)?;
        facade.set_location(node.node, FixedPointCoordinate::from_degrees(node.lat, node.lon));
    }

    let legs = file
        .waypoints
        .into_iter()
        .map(|waypoint| PhantomNodePair {
            start_phantom: waypoint.start.into(),
            target_phantom: waypoint.target.into(),
        })
        .collect();

    Ok(LoadedGraph { facade, legs })
}
