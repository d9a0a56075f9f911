//! Clusters Binary
//!
//! Connected components of strong pairings in a cached co-occurrence graph.
//! Fit the graph model with `recommend --model graph --cache <dir>` first.

use clap::Parser;
use colored::Colorize;
use robodeck::save::Disk;
use robodeck::scoring::Graph;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Explore clusters of strongly paired cards", long_about = None)]
struct Args {
    #[arg(long, default_value = "data", help = "directory holding graph.json")]
    cache: PathBuf,
    #[arg(long, short, default_value_t = robodeck::CLUSTER_THRESHOLD, help = "minimum edge weight")]
    threshold: f32,
}

fn main() -> anyhow::Result<()> {
    robodeck::log();
    let args = Args::parse();
    let graph = Graph::load(&args.cache)?;
    let strong = graph.edges().filter(|(_, w)| *w > args.threshold).count();
    log::info!("{} edges above {}", strong, args.threshold);
    let clusters = graph.clusters(args.threshold);
    for (i, cluster) in clusters.iter().enumerate() {
        let cards = cluster
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{} {}", format!("#{:<3}", i).cyan(), cards);
    }
    println!("{} clusters", clusters.len().to_string().bold());
    Ok(())
}
