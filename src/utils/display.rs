//! Display and output formatting utilities

use crate::board::Board;
use crate::config::{OutputConfig, OutputFormat, SolverBackend};
use crate::puzzle::{Solution, SolutionReport};
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;

/// Line printed when the formula is unsatisfiable
pub const NO_SOLUTION: &str = "No solution!";

/// Format solve outcomes for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Legend line naming the two markers
    pub fn legend(queen_marker: char, empty_marker: char) -> String {
        format!("\"{}\" - queen, \"{}\" - empty cell", queen_marker, empty_marker)
    }

    /// One line per row, one marker per cell
    pub fn format_grid(board: &Board, queen_marker: char, empty_marker: char) -> String {
        let mut output = String::new();
        for row in board.rows() {
            for &queen in row {
                output.push(if queen { queen_marker } else { empty_marker });
            }
            output.push('\n');
        }
        output
    }

    /// Legend followed by the grid
    pub fn format_board(board: &Board, queen_marker: char, empty_marker: char) -> String {
        let mut output = Self::legend(queen_marker, empty_marker);
        output.push('\n');
        output.push_str(&Self::format_grid(board, queen_marker, empty_marker));
        output
    }

    /// Text rendering of a solve outcome
    pub fn format_text(solution: Option<&Solution>, config: &OutputConfig) -> String {
        match solution {
            Some(solution) => {
                Self::format_board(&solution.board, config.queen_marker, config.empty_marker)
            }
            None => format!("{}\n", NO_SOLUTION),
        }
    }

    /// JSON rendering of a solve outcome
    pub fn format_json(
        solution: Option<&Solution>,
        size: usize,
        backend: SolverBackend,
        solve_time: Duration,
        config: &OutputConfig,
    ) -> Result<String> {
        let report = match solution {
            Some(solution) => solution.report(config.queen_marker, config.empty_marker),
            None => SolutionReport::unsatisfiable(size, backend, solve_time),
        };
        let mut json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize solution report")?;
        json.push('\n');
        Ok(json)
    }

    /// Render in the configured format
    pub fn format_outcome(
        solution: Option<&Solution>,
        size: usize,
        backend: SolverBackend,
        solve_time: Duration,
        config: &OutputConfig,
    ) -> Result<String> {
        match config.format {
            OutputFormat::Text => Ok(Self::format_text(solution, config)),
            OutputFormat::Json => Self::format_json(solution, size, backend, solve_time, config),
        }
    }

    /// Write rendered output to a file, creating parent directories
    pub fn save_output<P: AsRef<Path>>(content: &str, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        Ok(())
    }

    /// Format a board with row and column numbers
    pub fn format_grid_with_coords(
        board: &Board,
        queen_marker: char,
        empty_marker: char,
    ) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for y in 0..board.width() {
            output.push_str(&format!("{:2}", y % 10));
        }
        output.push('\n');

        for (x, row) in board.rows().enumerate() {
            output.push_str(&format!("{:2} ", x));
            for &queen in row {
                output.push(' ');
                output.push(if queen { queen_marker } else { empty_marker });
            }
            output.push('\n');
        }

        output
    }
}

/// Kind of status message printed around the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
}

impl Tone {
    fn ansi_code(self) -> u8 {
        match self {
            Tone::Info => 34,
            Tone::Success => 32,
            Tone::Warning => 33,
        }
    }
}

/// ANSI styling for status lines; the board itself is never colored
pub struct ColorOutput;

impl ColorOutput {
    pub fn paint(text: &str, tone: Tone) -> String {
        let enabled = color_allowed(
            std::env::var_os("NO_COLOR").as_deref(),
            std::env::var_os("TERM").as_deref(),
        );
        Self::render(text, tone, enabled)
    }

    fn render(text: &str, tone: Tone, enabled: bool) -> String {
        if enabled {
            format!("\x1b[{}m{}\x1b[0m", tone.ansi_code(), text)
        } else {
            text.to_string()
        }
    }

    pub fn success(text: &str) -> String {
        Self::paint(text, Tone::Success)
    }

    pub fn warning(text: &str) -> String {
        Self::paint(text, Tone::Warning)
    }

    pub fn info(text: &str) -> String {
        Self::paint(text, Tone::Info)
    }
}

/// A non-empty `NO_COLOR` or `TERM=dumb` turns escapes off
fn color_allowed(no_color: Option<&OsStr>, term: Option<&OsStr>) -> bool {
    let no_color = no_color.is_some_and(|value| !value.is_empty());
    let dumb = term.is_some_and(|term| term == "dumb");
    !no_color && !dumb
}
