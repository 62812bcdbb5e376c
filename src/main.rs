use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use anfmap::emit::render;
use anfmap::map::parse_map;
use anfmap::resolve::{resolve, Resolution};
use anfmap::solution::{parse_solution, SolverOutput};

#[derive(Debug, Parser)]
#[command(name = "anfmap")]
#[command(about = "Maps a CNF solver solution back onto the original ANF problem")]
struct Cli {
    /// Solution map written by the ANF-to-CNF conversion.
    map_file: String,
    /// Output of the CNF solver run on the converted problem.
    solution_file: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("c map file: {}", cli.map_file);
    println!("c solution file: {}", cli.solution_file);

    let solution_text = fs::read_to_string(&cli.solution_file)
        .with_context(|| format!("failed to read solution file {}", cli.solution_file))?;
    let output = parse_solution(&solution_text)?;

    // The map file cannot change an UNSAT verdict, so don't even read it.
    if output == SolverOutput::Unsat {
        print!("{}", render(&Resolution::Unsat));
        return Ok(());
    }

    let map_text = fs::read_to_string(&cli.map_file)
        .with_context(|| format!("failed to read map file {}", cli.map_file))?;
    let map = parse_map(&map_text)?;

    let resolution = resolve(&map, &output)?;
    print!("{}", render(&resolution));
    Ok(())
}
