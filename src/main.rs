//! Command line interface for the N-queens SAT solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use n_queens_sat::{
    board::BoardSize,
    config::{CliOverrides, OutputFormat, Settings, SolverBackend},
    puzzle::QueensProblem,
    sat::PuzzleEncoder,
    utils::{ColorOutput, SolutionFormatter},
};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::Level;

const DEFAULT_CONFIG: &str = "config/queens.yaml";

#[derive(Parser)]
#[command(name = "n_queens_sat")]
#[command(about = "N-Queens puzzle solver backed by a SAT engine")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an N-queens instance and print the board
    Solve {
        /// Number of queens (prompted for when neither this nor a config is given)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        size: Option<i64>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// SAT backend (overrides config)
        #[arg(short, long, value_enum)]
        backend: Option<SolverBackend>,

        /// Emit each attacking pair once
        #[arg(long)]
        deduplicate: bool,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Also write the result to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write the CNF encoding in DIMACS format
    Encode {
        /// Number of queens
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        size: Option<i64>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit each attacking pair once
        #[arg(long)]
        deduplicate: bool,

        /// Destination file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Solve { verbose: true, .. });
    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::INFO } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Solve {
            size, config, backend, deduplicate, format, output, verbose
        } => {
            let overrides = CliOverrides {
                size,
                backend,
                deduplicate_threats: deduplicate,
                format,
                output_file: output,
            };
            solve_command(config, overrides, verbose)
        }
        Commands::Encode { size, config, deduplicate, output } => {
            let overrides = CliOverrides {
                size,
                deduplicate_threats: deduplicate,
                ..CliOverrides::default()
            };
            // stdout carries the DIMACS stream, so the prompt goes to stderr
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            encode_command(
                config,
                overrides,
                output,
                &mut stdin.lock(),
                &mut std::io::stderr(),
                stdout.lock(),
            )
        }
        Commands::Setup { directory, force } => {
            setup_command(directory, force)
        }
    }
}

/// Load settings, apply overrides and ask for the size if nothing supplied one
///
/// The prompt is written to `prompt` and the answer read from `input`.
/// Validation runs after the overrides, so `--size` can repair a bad config.
fn resolve_settings<R: BufRead, W: Write>(
    config_path: Option<PathBuf>,
    overrides: &CliOverrides,
    input: &mut R,
    prompt: &mut W,
) -> Result<Settings> {
    let (mut settings, from_file) = match config_path {
        Some(path) => {
            let settings = Settings::from_file(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            (settings, true)
        }
        None if Path::new(DEFAULT_CONFIG).exists() => {
            let settings = Settings::from_file(Path::new(DEFAULT_CONFIG))
                .with_context(|| format!("Failed to load config from {}", DEFAULT_CONFIG))?;
            (settings, true)
        }
        None => (Settings::default(), false),
    };

    settings.merge_with_cli(overrides);

    if overrides.size.is_none() && !from_file {
        let size = prompt_board_size(input, prompt)?;
        settings.board.size = size.get() as i64;
    }

    settings.validate()
        .context("Configuration validation failed")?;
    Ok(settings)
}

/// Ask for the number of queens on `output` and read it from `input`
fn prompt_board_size<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<BoardSize> {
    write!(output, "Number of queens: ")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)
        .context("Failed to read number of queens")?;
    if read == 0 {
        anyhow::bail!("No board size given");
    }

    line.parse::<BoardSize>()
        .context("Invalid number of queens")
}

fn solve_command(
    config_path: Option<PathBuf>,
    overrides: CliOverrides,
    verbose: bool,
) -> Result<()> {
    let stdin = std::io::stdin();
    let settings = resolve_settings(
        config_path,
        &overrides,
        &mut stdin.lock(),
        &mut std::io::stdout(),
    )?;

    let mut problem = QueensProblem::new(settings.clone())
        .context("Failed to create n-queens problem")?;

    if verbose {
        eprintln!("{}", ColorOutput::info(&format!(
            "Solving {0}x{0} board with {1:?}", problem.size(), settings.solver.backend
        )));
        eprintln!("{}", problem.encoding_statistics());
    }

    let solution = problem.solve()
        .context("Failed to solve n-queens problem")?;
    let solver_stats = problem.solver_statistics();

    let rendered = SolutionFormatter::format_outcome(
        solution.as_ref(),
        problem.size().get(),
        settings.solver.backend,
        solver_stats.solve_time,
        &settings.output,
    )?;
    print!("{}", rendered);

    if let Some(ref path) = settings.output.output_file {
        SolutionFormatter::save_output(&rendered, path)
            .context("Failed to save result")?;
        if verbose {
            eprintln!("{}", ColorOutput::success(&format!("Result saved to {}", path.display())));
        }
    }

    if verbose {
        if let Some(ref solution) = solution {
            eprintln!("Queen positions:");
            let output = &settings.output;
            let grid = SolutionFormatter::format_grid_with_coords(
                &solution.board,
                output.queen_marker,
                output.empty_marker,
            );
            eprint!("{}", grid);
        }
        eprintln!("{}", solver_stats);
    }

    Ok(())
}

/// Encode the configured board and write DIMACS to `output` or `stdout`
fn encode_command<R: BufRead, P: Write, W: Write>(
    config_path: Option<PathBuf>,
    overrides: CliOverrides,
    output: Option<PathBuf>,
    input: &mut R,
    prompt: &mut P,
    stdout: W,
) -> Result<()> {
    let settings = resolve_settings(config_path, &overrides, input, prompt)?;
    let encoder = PuzzleEncoder::new(settings.board_size()?, settings.encoding.deduplicate_threats);
    let formula = encoder.encode();

    match output {
        Some(path) => {
            let file = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            formula.write_dimacs(std::io::BufWriter::new(file))
                .with_context(|| format!("Failed to write DIMACS to {}", path.display()))?;
            eprintln!("{}", ColorOutput::success(&format!(
                "Wrote {} clauses over {} variables to {}",
                formula.clause_count(), formula.variable_count(), path.display()
            )));
        }
        None => {
            formula.write_dimacs(stdout)
                .context("Failed to write DIMACS to stdout")?;
        }
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_path = directory.join(DEFAULT_CONFIG);
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Skipped: {} (already exists)", config_path.display()
        )));
    }

    println!("{}", ColorOutput::success("Setup complete!"));
    Ok(())
}
