use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::route::RouteArgs;

mod graph_file;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,

    #[arg(long, global = true)]
    env: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Route through an ordered list of waypoints over a JSON-described graph.
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    if let Some(env) = cli.env {
        dotenvy::from_filename(env).ok();
    }

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Route { args }) => route::run(args)?,
        None => {}
    }

    Ok(())
}
