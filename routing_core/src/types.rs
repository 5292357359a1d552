//! Scalar identifiers and sentinel values shared by every routing module.

/// Identifier of an edge-based node. CH edges connect edge-based nodes, not
/// the raw intersections of the original road graph.
pub type NodeId = u32;

/// Identifier of a CH edge (plain edge or shortcut) inside a [`crate::facade::DataFacade`].
pub type EdgeId = u32;

/// A path weight / cost. Signed because intermediate heap keys are seeded as
/// `distance - offset` and can go negative before the true distance accumulates.
pub type Weight = i32;

/// Sentinel for "no node" / "not yet resolved", mirroring `UINTMAX` in the
/// original routing engine.
pub const INVALID_NODE: NodeId = NodeId::MAX;

/// Sentinel for "no edge".
pub const INVALID_EDGE: EdgeId = EdgeId::MAX;

/// Sentinel for "unreachable" / "no route", mirroring `INT_MAX`.
pub const INVALID_WEIGHT: Weight = Weight::MAX;

/// Turn instruction emitted for the first segment of a route.
pub const TURN_DEPART: u8 = 10;

/// Turn instruction emitted for the last segment of a route.
pub const TURN_ARRIVE: u8 = 0;
