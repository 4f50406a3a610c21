//! delve: generate a rooms-and-mazes dungeon from the command line
//!
//! Prints the level as ASCII (or JSON with `--json`) along with the seed so
//! the same map can be produced again.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde_json::json;

use delve_core::{GenParams, GenReport, GenRng, Generator, World, analysis};

/// Deterministic dungeon generator
#[derive(Parser, Debug)]
#[command(name = "delve")]
#[command(author, version, about = "Generate a connected rooms-and-mazes dungeon", long_about = None)]
struct Args {
    /// Map width (odd, at least 3)
    #[arg(short = 'W', long, default_value_t = 41)]
    width: i32,

    /// Map height (odd, at least 3)
    #[arg(short = 'H', long, default_value_t = 21)]
    height: i32,

    /// Random seed (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with generation parameters; missing fields use recommended values
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Minimum room side (odd)
    #[arg(long)]
    room_size_min: Option<i32>,

    /// Maximum room side (odd)
    #[arg(long)]
    room_size_max: Option<i32>,

    /// Number of room placement attempts
    #[arg(long)]
    room_density: Option<u32>,

    /// Percent chance for corridors to keep going straight
    #[arg(long)]
    straightness: Option<u32>,

    /// Percent chance for a redundant connector to become a door
    #[arg(long)]
    redundancy: Option<u32>,

    /// Print the world as JSON instead of ASCII
    #[arg(long)]
    json: bool,

    /// Report connectivity, dead ends and tile counts
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("delve: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let params = load_params(args)?;
    let rng = match args.seed {
        Some(seed) => GenRng::new(seed),
        None => GenRng::from_entropy(),
    };

    let mut world = World::new(args.width, args.height)?;
    let report = Generator::with_rng(rng, &mut world).generate(&params)?;

    if args.json {
        let mut out = json!({ "report": report, "params": params, "world": world });
        if args.check {
            out["check"] = check_json(&world);
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{world}");
        print_summary(&report);
        if args.check {
            print_check(&world);
        }
    }
    Ok(())
}

/// Parameters from the optional file, then individual flag overrides
fn load_params(args: &Args) -> Result<GenParams, Box<dyn std::error::Error>> {
    let mut params = match &args.params {
        Some(path) => read_params_file(path)?,
        None => GenParams::default(),
    };

    if let Some(v) = args.room_size_min {
        params.room_size_min = v;
    }
    if let Some(v) = args.room_size_max {
        params.room_size_max = v;
    }
    if let Some(v) = args.room_density {
        params.room_density = v;
    }
    if let Some(v) = args.straightness {
        params.path_straightness = v;
    }
    if let Some(v) = args.redundancy {
        params.connection_redundancy = v;
    }

    params.validate()?;
    Ok(params)
}

fn read_params_file(path: &Path) -> Result<GenParams, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let params = serde_json::from_str(&text).map_err(|e| format!("bad parameter file {}: {e}", path.display()))?;
    Ok(params)
}

fn print_summary(report: &GenReport) {
    println!();
    println!("seed:          {}", report.seed);
    println!("rooms:         {}", report.rooms);
    println!("regions:       {}", report.regions);
    println!(
        "doors:         {} (+{} redundant)",
        report.doors, report.redundant_doors
    );
    println!("dead ends:     {} cells filled", report.dead_ends_filled);
    println!("stairs:        ({}, {})", report.stairs.x, report.stairs.y);
}

fn print_check(world: &World) {
    let tiles = world.tiles();
    println!();
    println!("connected:     {}", analysis::is_connected(tiles));
    println!("dead ends:     {}", analysis::dead_ends(tiles).len());
    println!(
        "uncovered:     {}",
        analysis::uncovered_cells(tiles, world.regions()).len()
    );
    for (tile, count) in analysis::tile_counts(tiles) {
        println!("{:<14} {count}", format!("{tile}:"));
    }
}

fn check_json(world: &World) -> serde_json::Value {
    let tiles = world.tiles();
    json!({
        "connected": analysis::is_connected(tiles),
        "dead_ends": analysis::dead_ends(tiles),
        "uncovered": analysis::uncovered_cells(tiles, world.regions()),
        "doors": analysis::door_count(tiles),
        "tiles": analysis::tile_counts(tiles),
    })
}
