use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};

use rela::data::linear_algebra::matrix::{Matrix, SparseMatrix};
use rela::data::linear_algebra::vector::DenseVector;
use rela::data::number_types::complex::ComplexRational;
use rela::data::number_types::rational::{Rational64, RationalBig};
use rela::data::number_types::traits::Scalar;
use rela::error::LinalgError;
use rela::io::{import, write_csv};

/// Sparse linear algebra on matrices stored as comma separated values.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct CliArgs {
    #[command(subcommand)]
    command: Cmd,

    /// Number type used for all values
    #[arg(short, long, value_enum, default_value_t = ScalarType::Rational, global = true)]
    scalar: ScalarType,

    /// Log verbosity, repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    log: u8,
}

#[derive(Subcommand, Debug)]
#[clap(rename_all = "lower")]
enum Cmd {
    /// Determinant of a square matrix
    Det { matrix: PathBuf },
    /// Inverse of a square matrix
    Inverse { matrix: PathBuf },
    /// Solve `Ax = b` without pivoting, `b` is a single row or column
    Solve { matrix: PathBuf, rhs: PathBuf },
    /// Factors `L` and `U` without pivoting, separated by an empty line
    Lu { matrix: PathBuf },
    /// Reduced row echelon form
    Reduce { matrix: PathBuf },
    /// Nullspace vector of an `m x (m + 1)` matrix
    Nullspace { matrix: PathBuf },
    /// Product of two matrices
    Multiply {
        left: PathBuf,
        right: PathBuf,
        /// Use one level of Strassen's scheme, square operands only
        #[arg(long)]
        strassen: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum ScalarType {
    Rational,
    BigRational,
    Complex,
    Float,
}

impl CliArgs {
    fn log_level(&self) -> log::LevelFilter {
        use log::LevelFilter::*;
        match self.log {
            0 => Off,
            1 => Info,
            2 => Debug,
            _ => Trace,
        }
    }
}

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = init_logger(args.log_level()) {
        eprintln!("could not start logging: {e}");
    }
    info!("args: {:?}", args);

    let start = Instant::now();
    let result = match args.scalar {
        ScalarType::Rational => run::<Rational64>(&args.command),
        ScalarType::BigRational => run::<RationalBig>(&args.command),
        ScalarType::Complex => run::<ComplexRational>(&args.command),
        ScalarType::Float => run::<f64>(&args.command),
    };
    info!("time: {:?}", start.elapsed());

    match result {
        Ok(output) => print!("{output}"),
        Err(e) => {
            error!("{}", e);
            eprintln!("\x1b[0;31merror\x1b[0m: {e}");
            std::process::exit(1)
        }
    }
}

fn init_logger(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    use simplelog::*;

    let mut cb = ConfigBuilder::new();
    cb.set_location_level(LevelFilter::Off);
    cb.set_target_level(LevelFilter::Off);
    cb.set_thread_level(LevelFilter::Off);
    cb.set_level_color(Level::Trace, Some(Color::Green));
    let config = cb.build();

    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}

fn run<F: Scalar>(command: &Cmd) -> Result<String, Box<dyn Error>> {
    let mut out = Vec::new();

    match command {
        Cmd::Det { matrix } => {
            let det = read::<F>(matrix)?.det()?;
            out.extend(format!("{}\n", det).into_bytes());
        },
        Cmd::Inverse { matrix } => {
            write_csv(&read::<F>(matrix)?.inverse()?, &mut out)?;
        },
        Cmd::Solve { matrix, rhs } => {
            let a = read::<F>(matrix)?;
            let b = read_vector(rhs)?;
            let x = a.solve(&b)?;
            write_csv(&SparseMatrix::from_vectors(&[x], true)?, &mut out)?;
        },
        Cmd::Lu { matrix } => {
            let (lower, upper) = read::<F>(matrix)?.lu_no_pivoting()?.into_parts();
            write_csv(&lower, &mut out)?;
            out.push(b'\n');
            write_csv(&upper, &mut out)?;
        },
        Cmd::Reduce { matrix } => {
            write_csv(&read::<F>(matrix)?.reduce()?, &mut out)?;
        },
        Cmd::Nullspace { matrix } => {
            let vector = read::<F>(matrix)?.nullspace()?;
            write_csv(&SparseMatrix::from_vectors(&[vector], true)?, &mut out)?;
        },
        Cmd::Multiply { left, right, strassen } => {
            let left = read::<F>(left)?;
            let right = read::<F>(right)?;
            let product = if *strassen {
                left.times_strassen(&right)?
            } else {
                (&left * &right)?
            };
            write_csv(&product, &mut out)?;
        },
    }

    Ok(String::from_utf8(out)?)
}

fn read<F: Scalar>(path: &Path) -> Result<SparseMatrix<F>, LinalgError> {
    info!("reading {:?}", path);
    let matrix = import(path)?;
    info!("read a {}x{} matrix with {} nonzeros", matrix.nr_rows(), matrix.nr_columns(), matrix.nnz());

    Ok(matrix)
}

/// Read a file holding a single row or a single column as a vector.
fn read_vector<F: Scalar>(path: &Path) -> Result<DenseVector<F>, LinalgError> {
    let matrix = read::<F>(path)?;
    match matrix.shape() {
        (_, 1) => matrix.get_column(0),
        (1, _) => matrix.get_row(0),
        shape => Err(LinalgError::DimensionMismatch { operation: "reading a vector", left: shape, right: (shape.0, 1) }),
    }
}
