pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_scale, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cosmic-expansion")]
#[command(about = "Sums shortest paths between galaxies in an expanding universe")]
pub struct CliConfig {
    #[arg(long, default_value = "./input")]
    pub input_path: String,

    /// Total width/height an empty line contributes in part 2.
    #[arg(long, default_value = "1000000")]
    pub scale: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn scale(&self) -> u64 {
        self.scale
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_scale("scale", self.scale)?;
        Ok(())
    }
}
