use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::Level;

use mazegen::{Bias, EntryType, GeneratorKind, MazeConfig};

/// Generate a maze and print it as an X/. character grid.
#[derive(Parser, Debug)]
#[command(name = "mazegen", version, about)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 20)]
    width: u16,

    /// Maze height in cells
    #[arg(long, default_value_t = 20)]
    height: u16,

    /// Gate placement: diagonal, horizontal or vertical
    #[arg(long, default_value = "diagonal")]
    entry_type: EntryType,

    /// Corridor bias: none, horizontal or vertical
    #[arg(long, default_value = "none")]
    bias: Bias,

    /// Spanning-tree algorithm: backtracker or wilson
    #[arg(long, default_value = "backtracker")]
    generator: GeneratorKind,

    /// Number of extra walls to remove (introduces cycles)
    #[arg(long, default_value_t = 0)]
    remove_walls: u32,

    /// Retry budget for wall removal
    #[arg(long, default_value_t = 300)]
    max_walls_remove: u32,

    /// Seed for reproducible generation
    #[arg(long)]
    seed: Option<u64>,

    /// Write the grid to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = MazeConfig {
        width: args.width,
        height: args.height,
        entry_type: args.entry_type,
        bias: args.bias,
        generator: args.generator,
        remove_walls: args.remove_walls,
        max_walls_remove: args.max_walls_remove,
    };

    let maze = mazegen::generate(&config, args.seed)?;

    match args.output {
        Some(path) => {
            // The maze already exists in memory; a failed write can be
            // retried against another destination without regenerating
            std::fs::write(&path, maze.to_string())
                .with_context(|| format!("failed to write maze to {}", path.display()))?;
            tracing::info!(path = %path.display(), "maze written");
        }
        None => println!("{maze}"),
    }

    Ok(())
}
