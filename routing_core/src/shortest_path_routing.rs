//! The multi-leg routing driver.
//!
//! Each leg of the query is routed twice, once per possible orientation of
//! a bidirected start phantom, because until a later leg forces continuity
//! there is no way to know which orientation produces the globally shortest
//! route. The two candidates are carried leg by leg, reconciled at every
//! junction (did the natural continuation cross over? did they just fuse?),
//! and canonicalised into "candidate 1 is the best one" only once the whole
//! query has been routed.

use tracing::{debug, warn};

use crate::basic_routing::{
    compute_edge_offset, initial_search_state, retrieve_packed_path_from_heap, routing_step,
    unpack_path,
};
use crate::facade::DataFacade;
use crate::path_data::RawRouteData;
use crate::phantom::PhantomNodePair;
use crate::search_engine_data::SearchEngineData;
use crate::types::{NodeId, Weight, INVALID_WEIGHT};

/// Drives the per-leg bidirectional searches and twin-candidate bookkeeping
/// against a fixed [`DataFacade`].
pub struct ShortestPathRouting<'a, F: DataFacade> {
    facade: &'a F,
}

impl<'a, F: DataFacade> ShortestPathRouting<'a, F> {
    pub fn new(facade: &'a F) -> Self {
        Self { facade }
    }

    pub fn route(&self, engine_data: &mut SearchEngineData, legs: &[PhantomNodePair]) -> RawRouteData {
        if legs.iter().any(|leg| !leg.at_least_one_valid()) {
            warn!("leg with no valid phantom on either side, returning no-route");
            return RawRouteData::unreachable();
        }

        let mut search_from_1st_node = true;
        let mut search_from_2nd_node = true;
        let mut distance1: Weight = 0;
        let mut distance2: Weight = 0;

        let mut packed_legs1: Vec<Vec<NodeId>> = vec![Vec::new(); legs.len()];
        let mut packed_legs2: Vec<Vec<NodeId>> = vec![Vec::new(); legs.len()];

        for (leg_index, leg) in legs.iter().enumerate() {
            engine_data.clear();

            let start = &leg.start_phantom;
            let target = &leg.target_phantom;

            if search_from_1st_node && !start.is_invalid() {
                let key = distance1 - start.weight1;
                engine_data
                    .forward_heap1
                    .insert(start.edge_based_node, key, start.edge_based_node);
                engine_data
                    .forward_heap2
                    .insert(start.edge_based_node, key, start.edge_based_node);
            }
            if start.is_bidirected && search_from_2nd_node && !start.is_invalid() {
                let node = start.edge_based_node + 1;
                let key = distance2 - start.weight2;
                engine_data.forward_heap1.insert(node, key, node);
                engine_data.forward_heap2.insert(node, key, node);
            }

            if !target.is_invalid() {
                engine_data.reverse_heap1.insert(
                    target.edge_based_node,
                    target.weight1,
                    target.edge_based_node,
                );
                if target.is_bidirected {
                    let node = target.edge_based_node + 1;
                    engine_data.reverse_heap2.insert(node, target.weight2, node);
                }
            }

            let forward_offset = compute_edge_offset(start);
            let reverse_offset = compute_edge_offset(target);

            let (middle1, mut upper_bound1) = run_bidirectional_search(
                self.facade,
                &mut engine_data.forward_heap1,
                &mut engine_data.reverse_heap1,
                forward_offset,
                reverse_offset,
            );

            let (middle2, mut upper_bound2) = if !engine_data.reverse_heap2.is_empty() {
                run_bidirectional_search(
                    self.facade,
                    &mut engine_data.forward_heap2,
                    &mut engine_data.reverse_heap2,
                    forward_offset,
                    reverse_offset,
                )
            } else {
                initial_search_state()
            };

            if upper_bound1 == INVALID_WEIGHT && upper_bound2 == INVALID_WEIGHT {
                debug!(leg = leg_index, "leg unroutable on both candidates");
                return RawRouteData::unreachable();
            }

            if middle1 == crate::types::INVALID_NODE {
                search_from_1st_node = false;
            }
            if middle2 == crate::types::INVALID_NODE {
                search_from_2nd_node = false;
            }

            let mut temp1 = if upper_bound1 != INVALID_WEIGHT {
                retrieve_packed_path_from_heap(
                    &engine_data.forward_heap1,
                    &engine_data.reverse_heap1,
                    middle1,
                )
            } else {
                Vec::new()
            };
            let mut temp2 = if upper_bound2 != INVALID_WEIGHT {
                retrieve_packed_path_from_heap(
                    &engine_data.forward_heap2,
                    &engine_data.reverse_heap2,
                    middle2,
                )
            } else {
                Vec::new()
            };

            if temp1.is_empty() && !temp2.is_empty() {
                temp1 = temp2.clone();
                upper_bound1 = upper_bound2;
            } else if temp2.is_empty() && !temp1.is_empty() {
                temp2 = temp1.clone();
                upper_bound2 = upper_bound1;
            }

            if leg_index > 0 {
                let e1 = *packed_legs1[leg_index - 1].last().unwrap();
                let e2 = *packed_legs2[leg_index - 1].last().unwrap();
                let s1 = temp1[0];
                let s2 = temp2[0];

                if e1 != s1 && e2 != s2 {
                    std::mem::swap(&mut temp1, &mut temp2);
                    std::mem::swap(&mut upper_bound1, &mut upper_bound2);
                }

                let s1 = temp1[0];
                let s2 = temp2[0];
                if s1 == s2 {
                    if s1 != e1 {
                        warn!(
                            leg = leg_index,
                            "candidate 1 history diverged from candidate 2 at this junction, collapsing onto candidate 2"
                        );
                        packed_legs1 = packed_legs2.clone();
                    } else if s2 != e2 {
                        warn!(
                            leg = leg_index,
                            "candidate 2 history diverged from candidate 1 at this junction, collapsing onto candidate 1"
                        );
                        packed_legs2 = packed_legs1.clone();
                    }
                }
            }

            packed_legs1[leg_index] = temp1;
            packed_legs2[leg_index] = temp2;

            if target.is_bidirected {
                let last1 = *packed_legs1[leg_index].last().unwrap();
                let last2 = *packed_legs2[leg_index].last().unwrap();
                if last1 == last2 {
                    if last1 == target.edge_based_node {
                        search_from_2nd_node = false;
                    } else {
                        search_from_1st_node = false;
                    }
                    debug_assert_ne!(search_from_1st_node, search_from_2nd_node);
                }
            }

            distance1 = upper_bound1;
            distance2 = upper_bound2;
        }

        if distance1 > distance2 {
            std::mem::swap(&mut packed_legs1, &mut packed_legs2);
        }

        let unpacked_path_segments = packed_legs1
            .iter()
            .map(|packed_leg| unpack_path(self.facade, packed_leg))
            .collect();

        RawRouteData {
            unpacked_path_segments,
            length_of_shortest_path: distance1.min(distance2),
            length_of_alternative_path: INVALID_WEIGHT,
        }
    }
}

/// Run both halves of a bidirectional Dijkstra search to completion,
/// alternating settle steps between the forward and reverse heap.
fn run_bidirectional_search<F: DataFacade>(
    facade: &F,
    forward_heap: &mut crate::query_heap::QueryHeap,
    reverse_heap: &mut crate::query_heap::QueryHeap,
    forward_offset: Weight,
    reverse_offset: Weight,
) -> (NodeId, Weight) {
    let (mut middle, mut upper_bound) = initial_search_state();

    while !forward_heap.is_empty() || !reverse_heap.is_empty() {
        if !forward_heap.is_empty() {
            routing_step(
                facade,
                forward_heap,
                reverse_heap,
                &mut middle,
                &mut upper_bound,
                forward_offset,
                true,
            );
        }
        if !reverse_heap.is_empty() {
            routing_step(
                facade,
                reverse_heap,
                forward_heap,
                &mut middle,
                &mut upper_bound,
                reverse_offset,
                false,
            );
        }
    }

    (middle, upper_bound)
}
