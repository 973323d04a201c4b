pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::SolverEngine, pipeline::ExpansionPipeline};
pub use utils::error::{PuzzleError, Result};
