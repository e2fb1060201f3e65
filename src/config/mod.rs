//! Configuration management for the N-queens solver

pub mod settings;

pub use settings::{
    Settings, BoardConfig, SolverConfig, EncodingConfig, OutputConfig,
    OutputFormat, CliOverrides, SolverBackend
};
