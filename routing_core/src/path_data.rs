//! The output shapes of a routed query: unpacked edges, and the geometric
//! description built from them.

use serde::{Deserialize, Serialize};

use crate::coordinate::FixedPointCoordinate;
use crate::types::{NodeId, Weight};

/// One original-graph edge emitted by `UnpackPath`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathData {
    /// Edge-based node this edge arrives at — what `DataFacade::node_location`
    /// is looked up against to place this edge's segment.
    pub node: NodeId,
    pub name_id: u32,
    pub duration: Weight,
    pub weight: Weight,
    pub turn_instruction: u8,
}

/// One entry of the final geometric description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentInformation {
    pub location: FixedPointCoordinate,
    pub name_id: u32,
    pub duration: Weight,
    pub weight: Weight,
    pub turn_instruction: u8,
    pub necessary: bool,
}

/// The routing core's full result: per-leg unpacked edges plus the best
/// route's total weight. `length_of_alternative_path` mirrors the upstream
/// engine's field but alternative-route computation is out of scope here,
/// so it is always [`crate::types::INVALID_WEIGHT`] on a successful route,
/// same as `length_of_shortest_path` is on an unroutable one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRouteData {
    pub unpacked_path_segments: Vec<Vec<PathData>>,
    pub length_of_shortest_path: Weight,
    pub length_of_alternative_path: Weight,
}

impl RawRouteData {
    pub fn unreachable() -> Self {
        use crate::types::INVALID_WEIGHT;
        Self {
            unpacked_path_segments: Vec::new(),
            length_of_shortest_path: INVALID_WEIGHT,
            length_of_alternative_path: INVALID_WEIGHT,
        }
    }
}
