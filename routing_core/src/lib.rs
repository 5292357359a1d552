//! Multi-leg shortest-path routing over a precomputed contraction hierarchy.
//!
//! Resolving a waypoint to a [`phantom::PhantomNode`] and building the
//! [`facade::DataFacade`] a hierarchy is queried through both happen
//! upstream of this crate. What lives here is the part that turns an
//! ordered sequence of [`phantom::PhantomNodePair`]s into a routed,
//! described path: [`query_heap`] (component A), [`basic_routing`]
//! (component B), [`shortest_path_routing`] (component C), and
//! [`description_factory`] (component D).

pub mod basic_routing;
pub mod constants;
pub mod coordinate;
pub mod description_factory;
pub mod error;
pub mod facade;
pub mod path_data;
pub mod phantom;
pub mod polyline;
pub mod query_heap;
pub mod search_engine_data;
pub mod shortest_path_routing;
pub mod stopwatch;
mod test_support;
pub mod types;
