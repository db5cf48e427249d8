use std::error::Error;

use clap::{Parser, ValueEnum};
use smartstring::{LazyCompact, SmartString};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use buchberger::{
    parser::parse_polynomial,
    poly::{groebner::GroebnerBasis, polynomial::Polynomial, MonomialOrder},
    printer::{PolynomialPrinter, PrintOptions},
};

/// Compute reduced Gröbner bases of sample systems or of an ideal given on the command line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// The monomial order: lex, grlex or grevlex
    #[arg(short, long, default_value = "grevlex")]
    order: MonomialOrder,

    /// A sample system to solve. All samples are solved if neither this nor `--poly` is given
    #[arg(short, long, value_enum)]
    scenario: Vec<Scenario>,

    /// Comma-separated variable names of the `--poly` generators
    #[arg(long, value_delimiter = ',', default_value = "x,y,z")]
    vars: Vec<String>,

    /// A generator of a custom ideal
    #[arg(short, long)]
    poly: Vec<String>,

    /// Print statistics of the completion
    #[arg(long)]
    stats: bool,

    /// Print `*` between the factors of a term
    #[arg(long)]
    explicit_mul: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Scenario {
    TwoCircles,
    ParallelLines,
    TwistedCubic,
    Cyclic3,
}

impl Scenario {
    const ALL: [Scenario; 4] = [
        Scenario::TwoCircles,
        Scenario::ParallelLines,
        Scenario::TwistedCubic,
        Scenario::Cyclic3,
    ];

    fn title(&self) -> &'static str {
        match self {
            Scenario::TwoCircles => "Two circles",
            Scenario::ParallelLines => "Parallel lines",
            Scenario::TwistedCubic => "Twisted cubic",
            Scenario::Cyclic3 => "Cyclic-3",
        }
    }

    fn vars(&self) -> &'static [&'static str] {
        match self {
            Scenario::TwoCircles | Scenario::ParallelLines => &["x", "y"],
            Scenario::TwistedCubic | Scenario::Cyclic3 => &["x", "y", "z"],
        }
    }

    fn generators(&self) -> &'static [&'static str] {
        match self {
            Scenario::TwoCircles => &["x^2 + y^2 - 1", "x^2 + y^2 - 4y"],
            Scenario::ParallelLines => &["x + y - 1", "x + y - 3"],
            Scenario::TwistedCubic => &["y - x^2", "z - xy"],
            Scenario::Cyclic3 => &["x + y + z", "xy + xz + yz", "xyz - 1"],
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("BUCHBERGER_LOG"))
        .init();

    let args = CliArgs::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    info!("args: {:?}", args);

    let opts = if args.explicit_mul {
        PrintOptions::explicit()
    } else {
        PrintOptions::new()
    };

    if !args.poly.is_empty() {
        let vars: Vec<SmartString<LazyCompact>> =
            args.vars.iter().map(|v| v.trim().into()).collect();
        let ideal = args
            .poly
            .iter()
            .map(|p| parse_polynomial(p, &vars, args.order))
            .collect::<Result<Vec<_>, _>>()?;

        return solve_and_print("Custom ideal", &vars, &ideal, args.stats, opts);
    }

    let scenarios = if args.scenario.is_empty() {
        Scenario::ALL.to_vec()
    } else {
        args.scenario.clone()
    };

    for s in scenarios {
        let vars: Vec<SmartString<LazyCompact>> = s.vars().iter().map(|&v| v.into()).collect();
        let ideal = s
            .generators()
            .iter()
            .map(|p| parse_polynomial(p, &vars, args.order))
            .collect::<Result<Vec<_>, _>>()?;

        solve_and_print(s.title(), &vars, &ideal, args.stats, opts)?;
    }

    Ok(())
}

fn solve_and_print(
    title: &str,
    vars: &[SmartString<LazyCompact>],
    ideal: &[Polynomial],
    print_stats: bool,
    opts: PrintOptions,
) -> Result<(), Box<dyn Error>> {
    println!("=== {} ===", title);
    for p in ideal {
        println!("\t{} = 0", PolynomialPrinter::new_with_options(p, vars, opts));
    }

    let basis = GroebnerBasis::new(ideal, print_stats)?;

    println!("Reduced Groebner basis:");
    for p in &basis.system {
        println!("\t{}", PolynomialPrinter::new_with_options(p, vars, opts));
    }

    if basis.is_trivial() {
        println!("The system has no common solutions.");
    }
    println!();

    Ok(())
}
