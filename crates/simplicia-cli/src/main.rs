//! Simplicia CLI - interactive simplicial complex explorer

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

mod generate;
mod repl;

#[derive(Parser)]
#[command(name = "simplicia")]
#[command(about = "Explore simplicial complexes and their Betti numbers", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Disable colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a complex description file and start the interactive shell
    ///
    /// Each line of the file declares one simplex:
    /// `<id> <face1> ... <facen>`. A bare id declares a vertex; faces
    /// must be declared on earlier lines. Lines starting with '#' are
    /// comments.
    Shell {
        /// Description file to load
        file: PathBuf,
    },

    /// Load a file and report its Betti numbers and hash statistics
    Info {
        /// Description file to load
        file: PathBuf,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Write synthetic chain-complex description files for timing runs
    Generate {
        /// Number of vertices in each chain
        #[arg(short = 'n', long)]
        vertices: usize,

        /// Output path for the left-to-right chain
        ltr: PathBuf,

        /// Output path for the right-to-left chain
        rtl: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_env_filter("simplicia=debug")
            .init();
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Commands::Shell { file } => repl::run(&file),
        Commands::Info { file, format } => show_info(&file, &format),
        Commands::Generate { vertices, ltr, rtl } => generate::write_chains(vertices, &ltr, &rtl),
    };

    if let Err(err) = result {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn show_info(file: &PathBuf, format: &str) -> Result<()> {
    let complex = simplicia::load_path(file)
        .with_context(|| format!("failed to load '{}'", file.display()))?;
    let betti = complex.betti_snapshot();
    let stats = complex.hash_statistics();

    match format {
        "table" => {
            println!("{}", "Complex".bold());
            println!("  simplices:     {}", complex.len());
            println!("  max dimension: {}", complex.max_dimension());
            println!("{}", "Betti numbers".bold());
            println!("  b0: {}  b1: {}  b2: {}", betti.b0, betti.b1, betti.b2);
            if betti.unreliable {
                eprintln!("{}", "Warning: Betti2 is unreliable".yellow());
            }
            println!("{}", "Hash table".bold());
            println!("  {} buckets", stats.buckets);
            println!("  {} occupants", stats.occupied);
            println!("  {} collisions", stats.collisions);
            println!("  load factor = {:.2}", stats.load_factor);
        }
        "json" => {
            let report = serde_json::json!({
                "simplices": complex.len(),
                "max_dimension": complex.max_dimension(),
                "betti": betti,
                "hash": stats,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        other => anyhow::bail!("unsupported output format: {other}"),
    }
    Ok(())
}
