use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use atk_core::UnitSystem;
use atk_units::{ConversionError, ConversionTable, TableError, UnitConv};

#[derive(Parser)]
#[command(name = "atk-cli")]
#[command(about = "Accelerator toolkit CLI - unit conversion tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build every conversion in a table and report failures
    Check {
        /// Path to the conversion table (YAML, or JSON by extension)
        table_path: PathBuf,
    },
    /// List the conversions in a table
    Show {
        /// Path to the conversion table
        table_path: PathBuf,
    },
    /// Convert a value with one conversion from a table
    Convert {
        /// Path to the conversion table
        table_path: PathBuf,
        /// Conversion id
        id: u32,
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: f64,
        /// Unit system of the input (eng | phys)
        #[arg(long, default_value = "eng")]
        from: UnitSystem,
        /// Unit system of the output (eng | phys)
        #[arg(long, default_value = "phys")]
        to: UnitSystem,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("No conversion with id {0}")]
    UnknownId(u32),

    #[error("{0} conversion(s) failed to build")]
    CheckFailed(usize),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { table_path } => cmd_check(&table_path),
        Commands::Show { table_path } => cmd_show(&table_path),
        Commands::Convert {
            table_path,
            id,
            value,
            from,
            to,
        } => cmd_convert(&table_path, id, value, from, to),
    }
}

fn cmd_check(table_path: &Path) -> CliResult<()> {
    let table = ConversionTable::load(table_path)?;
    info!(path = %table_path.display(), count = table.conversions.len(), "checking table");

    let mut failed = 0;
    for (id, outcome) in table.check() {
        match outcome {
            Ok(()) => println!("✓ {id}"),
            Err(e) => {
                failed += 1;
                println!("✗ {id}: {e}");
            }
        }
    }
    if failed > 0 {
        return Err(CliError::CheckFailed(failed));
    }
    // Duplicate ids only show up when building the whole table.
    table.build()?;
    println!("All {} conversion(s) valid", table.conversions.len());
    Ok(())
}

fn describe(uc: &UnitConv) -> String {
    let kind = match uc.strategy() {
        atk_units::Strategy::Null(_) => "identity".to_string(),
        atk_units::Strategy::Poly(p) => format!("poly {:?}", p.coefficients()),
        atk_units::Strategy::Pchip(p) => format!("pchip ({} knots)", p.x().len()),
    };
    let (lower, upper) = uc.limits();
    let fmt_limit = |l: Option<f64>| l.map_or_else(|| "-".to_string(), |v| v.to_string());
    format!(
        "{:>5}  {:<24} [{}] -> [{}]  limits {} .. {}",
        uc.id(),
        kind,
        uc.eng_units(),
        uc.phys_units(),
        fmt_limit(lower),
        fmt_limit(upper)
    )
}

fn cmd_show(table_path: &Path) -> CliResult<()> {
    let convs = ConversionTable::load(table_path)?.build()?;
    for uc in convs.values() {
        println!("{}", describe(uc));
    }
    Ok(())
}

fn cmd_convert(
    table_path: &Path,
    id: u32,
    value: f64,
    from: UnitSystem,
    to: UnitSystem,
) -> CliResult<()> {
    let convs = ConversionTable::load(table_path)?.build()?;
    let uc = convs.get(&id).ok_or(CliError::UnknownId(id))?;
    let out = uc.convert(value, from, to)?;
    let unit = match to {
        UnitSystem::Eng => uc.eng_units(),
        UnitSystem::Phys => uc.phys_units(),
    };
    println!("{out} {unit}");
    Ok(())
}
