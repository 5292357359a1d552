//! Typed errors for the parts of the crate that can genuinely fail.
//!
//! An unroutable or unresolvable leg is not one of these: per the routing
//! core's contract it is a normal `RawRouteData` value (`INT_MAX` length),
//! never an `Err`. What lives here is the boundary around building or
//! loading a [`crate::facade::DataFacade`], where malformed input is a real
//! possibility.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("edge references node {0} which is out of bounds for a graph of {1} nodes")]
    NodeOutOfBounds(u32, usize),

    #[error("failed to read graph description: {0}")]
    GraphRead(#[from] std::io::Error),

    #[error("failed to parse graph description: {0}")]
    GraphParse(#[from] serde_json::Error),
}
