//! lot: terminal demo for the parking finder.
//!
//! Draws a random lot, places the car, routes it to a destination with BFS
//! or A*, and animates the drive one cell per `step_delay_ms`.
//!
//! ```text
//! lot --seed 7 --start 0,0 --goal 5,5 --strategy astar --out output/lot
//! ```

mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use pf_core::{Cell, LotConfig, Strategy};
use pf_output::{CsvStepWriter, DriveOutputObserver, StepWriter};
use pf_sim::{DriveObserver, DriveStep, LogObserver, Navigator, ParkingLot, SimError};
use pf_spatial::{Path as Route, SpatialError};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file (fields of LotConfig; missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid side length (overrides the config file)
    #[arg(long)]
    size: Option<u32>,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Search strategy: bfs or astar (overrides the config file)
    #[arg(long, value_parser = parse_strategy)]
    strategy: Option<Strategy>,

    /// Car start cell as "row,col"; defaults to the first free cell
    #[arg(long)]
    start: Option<Cell>,

    /// Destination cell as "row,col"; defaults to the last free cell
    #[arg(long)]
    goal: Option<Cell>,

    /// Write routes.csv and steps.csv into this directory
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Skip the animation delay
    #[arg(long)]
    no_delay: bool,

    /// Print the adjacency list before routing
    #[arg(long)]
    show_graph: bool,
}

fn parse_strategy(s: &str) -> Result<Strategy, String> {
    match s.to_ascii_lowercase().as_str() {
        "bfs" => Ok(Strategy::Bfs),
        "astar" | "a*" => Ok(Strategy::AStar),
        other => Err(format!("unknown strategy {other:?} (expected bfs or astar)")),
    }
}

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards every callback to the log and, when enabled, the CSV writer.
struct DemoObserver<W: StepWriter> {
    log: LogObserver,
    csv: Option<DriveOutputObserver<W>>,
}

impl<W: StepWriter> DriveObserver for DemoObserver<W> {
    fn on_route(&mut self, strategy: Strategy, path: &Route) {
        self.log.on_route(strategy, path);
        if let Some(csv) = &mut self.csv {
            csv.on_route(strategy, path);
        }
    }

    fn on_step(&mut self, step: &DriveStep) {
        self.log.on_step(step);
        if let Some(csv) = &mut self.csv {
            csv.on_step(step);
        }
    }

    fn on_arrival(&mut self, cell: Cell) {
        self.log.on_arrival(cell);
        if let Some(csv) = &mut self.csv {
            csv.on_arrival(cell);
        }
    }

    fn on_reset(&mut self, lot: &ParkingLot) {
        self.log.on_reset(lot);
        if let Some(csv) = &mut self.csv {
            csv.on_reset(lot);
        }
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(args: &Args) -> Result<LotConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            log::info!("loading config from {}", path.display());
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => LotConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if args.no_delay {
        config.step_delay_ms = 0;
    }
    config.validate()?;
    Ok(config)
}

fn open_csv(dir: &Path) -> Result<DriveOutputObserver<CsvStepWriter>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    Ok(DriveOutputObserver::new(CsvStepWriter::new(dir)?))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let mut nav = Navigator::new(&config)?;

    println!("=== lot: parking finder ===");
    println!(
        "Size: {0}x{0}  |  Seed: {1}  |  Strategy: {2}",
        config.size, config.seed, config.strategy
    );
    let graph = nav.lot().graph();
    println!("Graph: {} free cells, {} edges", graph.node_count(), graph.edge_count());
    println!();
    print!("{}", render::frame(&nav));
    println!();
    if args.show_graph {
        print!("{}", render::adjacency(&nav));
        println!();
    }

    let free: Vec<Cell> = nav.lot().grid().free_cells().collect();
    let (Some(start), Some(goal)) = (
        args.start.or_else(|| free.first().copied()),
        args.goal.or_else(|| free.last().copied()),
    ) else {
        log::warn!("every spot is occupied; nothing to route");
        return Ok(());
    };

    let mut obs = DemoObserver {
        log: LogObserver,
        csv: args.out.as_deref().map(open_csv).transpose()?,
    };

    nav.select(start, &mut obs)?;
    match nav.select(goal, &mut obs) {
        Ok(_) => {}
        Err(SimError::Route(SpatialError::NoRoute { .. })) => {
            log::warn!("no route available from {start} to {goal}");
            return Ok(());
        }
        Err(SimError::SameCell(cell)) => {
            log::warn!("car is already at {cell}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let delay = Duration::from_millis(config.step_delay_ms);
    while nav.is_driving() {
        if let Some(step) = nav.step(&mut obs) {
            println!("Step {}: {} -> {}", step.index, step.from, step.to);
            print!("{}", render::frame(&nav));
            println!();
        }
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    if let Some(path) = nav.path() {
        println!("Reached {} in {} moves.", path.goal(), path.edge_count());
    }

    if let Some(csv) = &mut obs.csv {
        csv.finish()?;
        if let Some(dir) = &args.out {
            println!("Drive log written to {}", dir.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names() {
        assert_eq!(parse_strategy("BFS"), Ok(Strategy::Bfs));
        assert_eq!(parse_strategy("a*"), Ok(Strategy::AStar));
        assert!(parse_strategy("dijkstra").is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "lot", "--size", "3", "--seed", "7", "--strategy", "astar", "--no-delay",
            "--start", "0,0", "--goal", "(2,2)",
        ]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.size, 3);
        assert_eq!(config.seed, 7);
        assert_eq!(config.strategy, Strategy::AStar);
        assert_eq!(config.step_delay_ms, 0);
        assert_eq!(args.start, Some(Cell::new(0, 0)));
        assert_eq!(args.goal, Some(Cell::new(2, 2)));
    }

    #[test]
    fn json_config_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lot.json");
        fs::write(&path, r#"{ "size": 8, "occupied_one_in": 5 }"#).unwrap();
        let path = path.to_string_lossy().into_owned();

        let args = Args::parse_from(["lot", "--config", &path, "--seed", "3"]);
        let config = load_config(&args).unwrap();
        assert_eq!(config.size, 8);
        assert_eq!(config.occupied_one_in, 5);
        assert_eq!(config.seed, 3);
        assert_eq!(config.step_delay_ms, LotConfig::default().step_delay_ms);
    }

    #[test]
    fn invalid_size_rejected() {
        let args = Args::parse_from(["lot", "--size", "0"]);
        assert!(load_config(&args).is_err());
    }
}
