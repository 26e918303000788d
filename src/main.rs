use std::{path::Path, time::Instant};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;

use cdcl_engine::{
    dimacs::DimacsParser,
    solver::{CDCLSolver, LearningScheme, SearchDriver, SolveStatus, SolverConfig},
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File path of instance to parse
    #[arg(short, long)]
    pub file: String,

    /// How conflicts are turned into learnt clauses
    #[arg(short, long, value_enum, default_value_t = LearningScheme::FirstUip)]
    pub learning: LearningScheme,

    /// Whether to prefer true in decisions
    #[arg(short, long, default_value_t = false)]
    pub true_pref: bool,

    /// Whether to randomize polarity
    #[arg(short, long, default_value_t = false)]
    pub pol_rand: bool,

    /// Seed for random polarity
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Give up after this many conflicts
    #[arg(short, long)]
    pub max_conflicts: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    pub verbosity: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize solver config
    let mut cfg = SolverConfig::default();
    cfg.verbosity = args
        .verbosity
        .parse::<log::LevelFilter>()
        .map_err(|e| anyhow!("bad verbosity `{}`: {e}", args.verbosity))?;
    cfg.learning = args.learning;
    cfg.decision_policy.prefer_true = args.true_pref;
    cfg.decision_policy.random_pol = args.pol_rand;
    cfg.decision_policy.seed = args.seed;
    cfg.decision_policy.max_conflicts = args.max_conflicts;

    log::set_max_level(cfg.verbosity);
    env_logger::builder().filter(None, cfg.verbosity).init();

    info!("Config: {:#?}", cfg);

    // Get instance
    let dimacs_parser =
        DimacsParser::new(&args.file).with_context(|| format!("cannot open {}", args.file))?;
    let instance = dimacs_parser
        .parse()
        .with_context(|| format!("cannot parse {}", args.file))?;

    let start = Instant::now();
    let (res, model) = if instance.has_empty_clause() {
        info!("Instance contains an empty clause");
        (SolveStatus::UNSAT, vec![])
    } else {
        let mut driver = SearchDriver::new(cfg.decision_policy.clone());
        let mut solver = CDCLSolver::new(cfg, instance);
        let res = driver.solve(&mut solver);
        info!("Stats: {:#?}", solver.stats());
        (res, solver.assignments())
    };
    let elapsed = start.elapsed();

    println!("s {res}");
    if let SolveStatus::SAT = res {
        let display_str = model
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        println!("v {display_str} 0");
    }

    let file = Path::new(&args.file)
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.clone());
    info!("[{}] Status: {}\tElapsed: {:#?}", file, res, elapsed);
    Ok(())
}
