use clap::Args;

use routing_core::description_factory::DescriptionFactory;
use routing_core::facade::DataFacade;
use routing_core::search_engine_data::SearchEngineData;
use routing_core::shortest_path_routing::ShortestPathRouting;
use routing_core::stopwatch::Stopwatch;
use routing_core::types::INVALID_WEIGHT;

use crate::graph_file;

#[derive(Args)]
pub struct RouteArgs {
    /// Path to a JSON graph description (see `graph_file::GraphFile`).
    pub graph: String,

    /// Print coordinates as a raw list instead of an encoded polyline.
    #[arg(long)]
    pub raw_geometry: bool,
}

pub fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let loaded = graph_file::load(&args.graph)?;
    let facade = loaded.facade;
    let legs = loaded.legs;

    let mut engine_data = SearchEngineData::new(facade.number_of_nodes());
    let routing = ShortestPathRouting::new(&facade);

    let watch = Stopwatch::new("route");
    let result = routing.route(&mut engine_data, &legs);
    watch.report();

    if result.length_of_shortest_path == INVALID_WEIGHT {
        println!("no route found");
        return Ok(());
    }

    let mut description = DescriptionFactory::new();
    let mut total_duration = 0;
    if let (Some(first), Some(last)) = (legs.first(), legs.last()) {
        description.set_start_segment(&first.start_phantom);
        for path in &result.unpacked_path_segments {
            for edge in path {
                total_duration += edge.duration;
                description.append_segment(facade.node_location(edge.node), edge);
            }
        }
        description.set_end_segment(&last.target_phantom);
    }

    let summary = description.build_route_summary(result.length_of_shortest_path, total_duration);
    println!("distance: {}", summary.formatted_distance());
    println!("duration: {}", summary.formatted_duration());
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
