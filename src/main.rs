use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use segmented_fenwick::aggregate::{self, WeightSummary};
use segmented_fenwick::{Coordinate, EncodingConfig, EncodingForest, HoppingSupport, Lattice};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "segmented-fenwick",
    about = "Pauli weight of lattice hopping terms under a segmented Fenwick-tree encoding"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct LatticeArgs {
    /// Side N of a square lattice (N² modes, width N).
    #[arg(long, default_value_t = 20)]
    side: usize,
    /// Modes per encoding tree.
    #[arg(long, default_value_t = EncodingConfig::TILE_SEGMENT_SIZE)]
    segment_size: usize,
    /// Total modes (default: side²).
    #[arg(long)]
    total_modes: Option<usize>,
    /// Lattice width (default: side).
    #[arg(long)]
    width: Option<usize>,
}

impl LatticeArgs {
    fn config(&self) -> EncodingConfig {
        EncodingConfig {
            segment_size: self.segment_size,
            total_modes: self.total_modes.unwrap_or(self.side * self.side),
            lattice_width: self.width.unwrap_or(self.side),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Cost every nearest-neighbour hopping term of one lattice.
    Survey {
        #[command(flatten)]
        lattice: LatticeArgs,
        /// Cost sites on the rayon thread pool.
        #[arg(long)]
        parallel: bool,
        /// Print the segment id of every site.
        #[arg(long)]
        show_lattice: bool,
        /// Print each directed term with its weight.
        #[arg(long)]
        edges: bool,
    },
    /// Survey square lattices over a range of sides.
    Sweep {
        /// Smallest side.
        #[arg(long, default_value_t = 4)]
        from: usize,
        /// Largest side (inclusive).
        #[arg(long, default_value_t = 20)]
        to: usize,
        /// Side increment (sides must stay multiples of 4).
        #[arg(long, default_value_t = 4)]
        step: usize,
    },
    /// Weight of a single hopping term between two sites.
    Weight {
        #[command(flatten)]
        lattice: LatticeArgs,
        /// Creation site as x,y.
        #[arg(value_parser = parse_coordinate)]
        creation: Coordinate,
        /// Annihilation site as x,y.
        #[arg(value_parser = parse_coordinate)]
        annihilation: Coordinate,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Survey {
            lattice,
            parallel,
            show_lattice,
            edges,
        } => run_survey(lattice.config(), parallel, show_lattice, edges)?,
        Commands::Sweep { from, to, step } => run_sweep(from, to, step)?,
        Commands::Weight {
            lattice,
            creation,
            annihilation,
        } => run_weight(lattice.config(), creation, annihilation)?,
    }

    Ok(())
}

fn build(config: EncodingConfig) -> Result<(EncodingForest, Lattice)> {
    let forest = EncodingForest::build(&config).context("failed to build encoding forest")?;
    let lattice = Lattice::embed(&forest, config.lattice_width)
        .with_context(|| format!("failed to embed forest on width {}", config.lattice_width))?;
    Ok((forest, lattice))
}

fn run_survey(config: EncodingConfig, parallel: bool, show_lattice: bool, edges: bool) -> Result<()> {
    let (forest, lattice) = build(config)?;

    if show_lattice {
        print!("{lattice}");
    }

    if edges {
        for edge in aggregate::edge_weights(&lattice, &forest).context("edge costing failed")? {
            println!("{} - {}\t{}", edge.creation, edge.annihilation, edge.weight);
        }
    }

    let summary = if parallel {
        aggregate::survey_parallel(&lattice, &forest)
    } else {
        aggregate::survey(&lattice, &forest)
    }
    .context("lattice survey failed")?;

    println!("{}", summary.report());
    println!(
        "Loose per-term bound: {}",
        aggregate::loose_weight_bound(&forest)
    );
    Ok(())
}

fn run_sweep(from: usize, to: usize, step: usize) -> Result<()> {
    ensure!(step > 0, "step must be positive");

    println!("side\tinteractions\ttotal\taverage\treference\tmax");
    for side in (from..=to).step_by(step) {
        let (forest, lattice) = build(EncodingConfig::square_lattice(side))?;
        let summary = aggregate::survey_parallel(&lattice, &forest)
            .with_context(|| format!("survey failed for side {side}"))?;
        print_row(&summary);
    }
    Ok(())
}

fn print_row(summary: &WeightSummary) {
    println!(
        "{}\t{}\t{}\t{:.4}\t{:.4}\t{}",
        summary.side,
        summary.interactions,
        summary.total_weight,
        summary.average_weight().unwrap_or(0.0),
        summary.analytic_reference().unwrap_or(0.0),
        summary.max_weight
    );
}

fn run_weight(config: EncodingConfig, creation: Coordinate, annihilation: Coordinate) -> Result<()> {
    let (forest, lattice) = build(config)?;
    let support = HoppingSupport::between(creation, annihilation, &lattice, &forest)
        .with_context(|| format!("cannot cost term {creation} - {annihilation}"))?;

    let describe = |set: &segmented_fenwick::QubitSet| -> Vec<String> {
        set.iter()
            .filter_map(|flat| forest.qubit_at(flat))
            .map(|qubit| qubit.to_string())
            .collect()
    };

    println!("Update qubits: {}", describe(&support.update).join(" "));
    println!("Parity qubits: {}", describe(&support.parity).join(" "));
    println!("Target qubits: {}", describe(&support.target).join(" "));
    println!("Pauli weight: {}", support.weight());
    Ok(())
}

fn parse_coordinate(raw: &str) -> Result<Coordinate> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| anyhow::anyhow!("expected x,y but got '{raw}'"))?;
    let x = x
        .trim()
        .parse()
        .with_context(|| format!("invalid x coordinate '{x}'"))?;
    let y = y
        .trim()
        .parse()
        .with_context(|| format!("invalid y coordinate '{y}'"))?;
    Ok(Coordinate::new(x, y))
}
