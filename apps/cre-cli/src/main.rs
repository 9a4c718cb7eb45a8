mod error;
mod input;
mod report;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use cre_kinetics::DEFAULT_SUBINTERVALS;
use cre_project::{CaseDef, CaseFile, load_case_file};
use cre_reactors::{
    ConversionSweep, IntegralMethod, Numerics, ParameterSet, ReactorKind, evaluate_with, run_sweep,
};
use error::{AppError, AppResult};
use rayon::prelude::*;
use report::{Report, SweepRow, evaluation_lines, sweep_table};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cre-cli")]
#[command(about = "Reactor design calculator - batch, CSTR, PFR and packed bed", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate case file syntax and every case's parameters
    Validate {
        /// Path to the case file (YAML, or JSON by extension)
        path: PathBuf,
    },
    /// List cases in a case file
    Cases {
        /// Path to the case file
        path: PathBuf,
    },
    /// Evaluate the cases of a case file
    Run {
        /// Path to the case file
        path: PathBuf,
        /// Evaluate only this case
        #[arg(long)]
        case: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[command(flatten)]
        numerics: NumericsArgs,
    },
    /// Evaluate an ad-hoc parameter map
    Eval {
        /// Reactor type: batch, cstr, pfr or pbr
        reactor: ReactorKind,
        /// Field assignment, repeatable; an empty value leaves the field absent
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[command(flatten)]
        numerics: NumericsArgs,
    },
    /// Tabulate a case's design quantity over a conversion grid
    Sweep {
        /// Path to the case file
        path: PathBuf,
        /// Case ID to sweep
        case_id: String,
        /// First conversion (defaults to the case's sweep, else 0.1)
        #[arg(long)]
        from: Option<f64>,
        /// Last conversion (defaults to the case's sweep, else 0.9)
        #[arg(long)]
        to: Option<f64>,
        /// Number of grid points (defaults to the case's sweep, else 9)
        #[arg(long)]
        points: Option<usize>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[command(flatten)]
        numerics: NumericsArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Clone, Debug)]
struct NumericsArgs {
    /// Integrate numerically even where a closed form exists
    #[arg(long)]
    quadrature: bool,
    /// Trapezoidal subintervals over [0, X]
    #[arg(long, default_value_t = DEFAULT_SUBINTERVALS)]
    subintervals: usize,
    /// Catalyst-mass step for the pressure-drop march, kg
    #[arg(long, default_value_t = 1e-3)]
    step: f64,
}

impl NumericsArgs {
    fn numerics(&self) -> Numerics {
        let mut numerics = Numerics::default();
        if self.quadrature {
            numerics.method = IntegralMethod::Trapezoid;
        }
        numerics.subintervals = self.subintervals;
        numerics.march.step = self.step;
        numerics
    }
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate { path } => cmd_validate(&path),
        Commands::Cases { path } => cmd_cases(&path),
        Commands::Run {
            path,
            case,
            format,
            numerics,
        } => cmd_run(&path, case.as_deref(), format, &numerics.numerics()),
        Commands::Eval {
            reactor,
            set,
            format,
            numerics,
        } => cmd_eval(reactor, &set, format, &numerics.numerics()),
        Commands::Sweep {
            path,
            case_id,
            from,
            to,
            points,
            format,
            numerics,
        } => cmd_sweep(
            &path,
            &case_id,
            (from, to, points),
            format,
            &numerics.numerics(),
        ),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_validate(path: &Path) -> AppResult<()> {
    println!("Validating case file: {}", path.display());
    let file = load_case_file(path)?;
    println!("✓ Case file is valid ({} cases)", file.cases.len());
    Ok(())
}

fn cmd_cases(path: &Path) -> AppResult<()> {
    let file = load_case_file(path)?;
    if file.cases.is_empty() {
        println!("No cases found in {}", file.name);
    } else {
        println!("Cases in {}:", file.name);
        for case in &file.cases {
            println!(
                "  {} - {} ({}, {} parameters)",
                case.id,
                case.name,
                case.reactor,
                case.parameters.len()
            );
        }
    }
    Ok(())
}

fn cmd_run(
    path: &Path,
    case_id: Option<&str>,
    format: OutputFormat,
    numerics: &Numerics,
) -> AppResult<()> {
    let file = load_case_file(path)?;
    let selected: Vec<&CaseDef> = match case_id {
        Some(id) => vec![file.find_case(id)?],
        None => file.cases.iter().collect(),
    };
    info!(file = %file.name, cases = selected.len(), "evaluating cases");

    let outcomes: Vec<_> = selected
        .par_iter()
        .map(|case| evaluate_with(case.reactor, &case.parameters, numerics))
        .collect();

    let reports: Vec<Report<'_>> = selected
        .iter()
        .zip(&outcomes)
        .map(|(case, outcome)| Report::new(&case.id, &case.name, case.reactor, outcome))
        .collect();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => print_run_text(&file, &selected, &outcomes),
    }

    let failed = outcomes.iter().filter(|o| o.is_err()).count();
    if failed > 0 {
        return Err(AppError::Failed {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}

fn print_run_text(
    file: &CaseFile,
    cases: &[&CaseDef],
    outcomes: &[cre_reactors::ReactorResult<cre_reactors::Evaluation>],
) {
    println!("{}", file.name);
    for (case, outcome) in cases.iter().zip(outcomes) {
        println!();
        println!("{} - {} ({})", case.id, case.name, case.reactor);
        match outcome {
            Ok(eval) => {
                for line in evaluation_lines(eval) {
                    println!("  {line}");
                }
            }
            Err(e) => println!("  ✗ {e}"),
        }
    }
}

fn cmd_eval(
    reactor: ReactorKind,
    assignments: &[String],
    format: OutputFormat,
    numerics: &Numerics,
) -> AppResult<()> {
    let params = input::apply_assignments(ParameterSet::new(), assignments)?;
    let eval = evaluate_with(reactor, &params, numerics)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&eval)?),
        OutputFormat::Text => {
            println!("{reactor}");
            for line in evaluation_lines(&eval) {
                println!("  {line}");
            }
        }
    }
    Ok(())
}

fn cmd_sweep(
    path: &Path,
    case_id: &str,
    (from, to, points): (Option<f64>, Option<f64>, Option<usize>),
    format: OutputFormat,
    numerics: &Numerics,
) -> AppResult<()> {
    let file = load_case_file(path)?;
    let case = file.find_case(case_id)?;
    let (start, end, count) = match case.sweep {
        Some(s) => (s.start, s.end, s.points),
        None => (0.1, 0.9, 9),
    };
    let sweep = ConversionSweep::new(
        from.unwrap_or(start),
        to.unwrap_or(end),
        points.unwrap_or(count),
    )?;
    info!(case = case_id, %sweep, "sweeping conversion");

    let results = run_sweep(case.reactor, &case.parameters, &sweep, numerics);
    match format {
        OutputFormat::Json => {
            let rows: Vec<SweepRow> = results.iter().map(SweepRow::from).collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            println!("{} - {} ({}), {}", case.id, case.name, case.reactor, sweep);
            for row in sweep_table(case.reactor, &results) {
                println!("{row}");
            }
        }
    }
    Ok(())
}
