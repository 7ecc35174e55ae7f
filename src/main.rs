//! Passive - Standard Value Selector
//!
//! Picks EIA standard resistors and capacitors for a target value, ratio or
//! RC time constant.
//!
//! # Usage
//!
//! ```bash
//! passive nearest 12.3k --series E12 --count 2
//! passive ratio 3.3 --series E24 --min 1k --max 100k
//! passive rc 1m --resistor-series E24 --capacitor-series E6 --c-max 1u
//! passive spread 10k 22k --topology parallel --tolerance 5
//! passive table --series E6 --family capacitor
//! ```

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use passive_core::{
    combine::RcNetwork,
    error::Result,
    search::{nearest_combination, ratio_search, rc_search, RatioQuery, RcQuery},
    tolerance,
    units::{format_value, parse_value},
    Arrangement, Bounds, Catalog, CombinationRule, EiaStandard, Family, Topology,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// EIA standard value selector for resistors and capacitors
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every value of a standard table
    Table {
        /// EIA series (E3, E6, E12, E24, E48, E96)
        #[arg(short, long, default_value = "E12")]
        series: EiaStandard,

        #[arg(short, long, value_enum, default_value_t = FamilyArg::Resistor)]
        family: FamilyArg,
    },

    /// Closest single value or series/parallel group to a target
    Nearest {
        /// Target value, SI suffixes allowed (e.g. 12.3k, 47n)
        #[arg(value_parser = parse_value)]
        target: f64,

        #[arg(short, long, default_value = "E24")]
        series: EiaStandard,

        #[arg(short, long, value_enum, default_value_t = FamilyArg::Resistor)]
        family: FamilyArg,

        /// Number of parts (1-3)
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        #[arg(short, long, value_enum, default_value_t = TopologyArg::Series)]
        topology: TopologyArg,

        #[command(flatten)]
        bounds: BoundsArgs,
    },

    /// Numerator and denominator groups closest to a ratio
    Ratio {
        /// Target ratio numerator/denominator
        #[arg(value_parser = parse_value)]
        ratio: f64,

        #[arg(short, long, default_value = "E24")]
        series: EiaStandard,

        /// Parts in the numerator group (1-3)
        #[arg(long, default_value_t = 1)]
        numerator: usize,

        /// Parts in the denominator group (1-3)
        #[arg(long, default_value_t = 1)]
        denominator: usize,

        /// Wiring of both groups
        #[arg(short, long, value_enum, default_value_t = TopologyArg::Series)]
        topology: TopologyArg,

        #[command(flatten)]
        bounds: BoundsArgs,
    },

    /// Resistor and capacitor groups closest to a time constant
    Rc {
        /// Target time constant in seconds, SI suffixes allowed (e.g. 1m)
        #[arg(value_parser = parse_value)]
        tau: f64,

        #[arg(long, default_value = "E24")]
        resistor_series: EiaStandard,

        #[arg(long, default_value = "E12")]
        capacitor_series: EiaStandard,

        /// Number of resistors (1-3)
        #[arg(long, default_value_t = 1)]
        resistors: usize,

        #[arg(long, value_enum, default_value_t = TopologyArg::Series)]
        resistor_topology: TopologyArg,

        /// Number of capacitors (1-3)
        #[arg(long, default_value_t = 1)]
        capacitors: usize,

        #[arg(long, value_enum, default_value_t = TopologyArg::Parallel)]
        capacitor_topology: TopologyArg,

        #[arg(long, value_parser = parse_value)]
        r_min: Option<f64>,

        #[arg(long, value_parser = parse_value)]
        r_max: Option<f64>,

        #[arg(long, value_parser = parse_value)]
        c_min: Option<f64>,

        #[arg(long, value_parser = parse_value)]
        c_max: Option<f64>,

        /// Also report the time-constant spread at this tolerance (percent)
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Tolerance spread of a combination of nominal parts
    Spread {
        /// Nominal part values
        #[arg(required = true, value_parser = parse_value)]
        values: Vec<f64>,

        /// Symmetric part tolerance in percent
        #[arg(long, default_value_t = 5.0)]
        tolerance: f64,

        #[arg(short, long, value_enum, default_value_t = FamilyArg::Resistor)]
        family: FamilyArg,

        #[arg(short, long, value_enum, default_value_t = TopologyArg::Series)]
        topology: TopologyArg,
    },
}

/// Per-part value limits, SI suffixes allowed
#[derive(ClapArgs, Debug)]
struct BoundsArgs {
    /// Smallest allowed part value
    #[arg(long, value_parser = parse_value)]
    min: Option<f64>,

    /// Largest allowed part value
    #[arg(long, value_parser = parse_value)]
    max: Option<f64>,
}

impl BoundsArgs {
    fn bounds(&self) -> Result<Option<Bounds>> {
        Bounds::from_limits(self.min, self.max)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FamilyArg {
    Resistor,
    Capacitor,
}

impl From<FamilyArg> for Family {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Resistor => Family::Resistor,
            FamilyArg::Capacitor => Family::Capacitor,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TopologyArg {
    Series,
    Parallel,
}

impl From<TopologyArg> for Topology {
    fn from(arg: TopologyArg) -> Self {
        match arg {
            TopologyArg::Series => Topology::Series,
            TopologyArg::Parallel => Topology::Parallel,
        }
    }
}

fn format_parts(values: &[f64], unit: &str) -> String {
    values
        .iter()
        .map(|v| format_value(*v, unit))
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let catalog = Catalog::new();

    match args.command {
        Command::Table { series, family } => {
            let family = Family::from(family);
            let table = catalog.table(family, series);
            info!("{} {} table: {} values", series, family, table.len());
            for value in table.iter() {
                println!("{}", format_value(value, family.unit()));
            }
        }

        Command::Nearest {
            target,
            series,
            family,
            count,
            topology,
            bounds,
        } => {
            let family = Family::from(family);
            let arrangement = Arrangement::new(topology.into(), count)?;
            let rule = arrangement.rule(family);
            let table = catalog.table(family, series);

            info!("Searching {} {} {} for {}", series, family, arrangement, target);
            let best = nearest_combination(target, table, &rule, count, bounds.bounds()?)?;

            println!("parts:    {} ({})", format_parts(&best.values, family.unit()), arrangement);
            println!("achieved: {}", format_value(best.achieved, family.unit()));
            println!("error:    {:.4}%", best.relative_error_percent());
        }

        Command::Ratio {
            ratio,
            series,
            numerator,
            denominator,
            topology,
            bounds,
        } => {
            let topology = Topology::from(topology);
            let mut query = RatioQuery::new()
                .with_numerator(Arrangement::new(topology, numerator)?)
                .with_denominator(Arrangement::new(topology, denominator)?);
            if let Some(bounds) = bounds.bounds()? {
                query = query.with_bounds(bounds);
            }

            let table = catalog.table(Family::Resistor, series);
            info!("Searching {} ratio {} ({} / {})", series, ratio, query.numerator, query.denominator);
            let best = ratio_search(ratio, table, &query)?;

            println!("numerator:   {}", format_parts(&best.numerator, Family::Resistor.unit()));
            println!("denominator: {}", format_parts(&best.denominator, Family::Resistor.unit()));
            println!("ratio:       {:.6}", best.ratio);
            println!("error:       {:.4}%", 100.0 * best.error / ratio);
        }

        Command::Rc {
            tau,
            resistor_series,
            capacitor_series,
            resistors,
            resistor_topology,
            capacitors,
            capacitor_topology,
            r_min,
            r_max,
            c_min,
            c_max,
            tolerance,
        } => {
            let network = RcNetwork::new(
                Arrangement::new(resistor_topology.into(), resistors)?,
                Arrangement::new(capacitor_topology.into(), capacitors)?,
            );
            let mut query = RcQuery::new(resistor_series, capacitor_series)
                .with_resistors(network.resistors)
                .with_capacitors(network.capacitors);
            if let Some(b) = Bounds::from_limits(r_min, r_max)? {
                query = query.with_resistor_bounds(b);
            }
            if let Some(b) = Bounds::from_limits(c_min, c_max)? {
                query = query.with_capacitor_bounds(b);
            }

            info!(
                "Searching {} resistors ({}) and {} capacitors ({}) for tau = {}",
                resistor_series, network.resistors, capacitor_series, network.capacitors, tau
            );
            let best = rc_search(&catalog, tau, &query)?;

            println!("resistors:  {}", format_parts(&best.resistors, Family::Resistor.unit()));
            println!("capacitors: {}", format_parts(&best.capacitors, Family::Capacitor.unit()));
            println!("tau:        {}", format_value(best.time_constant, "s"));
            println!("error:      {:.4}%", 100.0 * best.error / tau);

            if let Some(tolerance) = tolerance {
                let spread = network.tolerance_spread(&best.resistors, &best.capacitors, tolerance)?;
                println!("spread:     {:.3}% at ±{}%", spread, tolerance);
            }
        }

        Command::Spread {
            values,
            tolerance,
            family,
            topology,
        } => {
            let rule = CombinationRule::new(family.into(), topology.into());
            let pct = tolerance::spread(&values, tolerance, &rule)?;

            println!("nominal: {}", format_value(rule.combine(&values)?, rule.family().unit()));
            println!("spread:  {:.4}% at ±{}%", pct, tolerance);
        }
    }

    Ok(())
}
