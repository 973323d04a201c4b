use crate::core::{ConfigProvider, Pipeline, PuzzleSolution, Storage};
use crate::domain::services;
use crate::utils::error::Result;

/// Runs the cosmic-expansion puzzle over one input file: extract reads and
/// trims the raw text, transform computes both answers, load renders the
/// report lines.
pub struct ExpansionPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ExpansionPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ExpansionPipeline<S, C> {
    fn extract(&self) -> Result<String> {
        tracing::debug!("Reading puzzle input from: {}", self.config.input_path());
        let raw = self.storage.read_file(self.config.input_path())?;
        let text = String::from_utf8(raw)?;

        // Both parts run over the same trimmed text.
        Ok(text.trim().to_string())
    }

    fn transform(&self, input: String) -> Result<PuzzleSolution> {
        let grid = services::parse_grid(&input)?;
        tracing::debug!("Parsed {}x{} grid", grid.height(), grid.width());

        let expanded = services::expand(&grid);
        let galaxies = services::locate_galaxies(&expanded);
        tracing::debug!(
            "Expanded grid is {}x{} with {} galaxies",
            expanded.height(),
            expanded.width(),
            galaxies.len()
        );
        let part1 = services::sum_shortest_paths(&galaxies);

        let part2 = services::sum_scaled_paths(&grid, self.config.scale());

        Ok(PuzzleSolution { part1, part2 })
    }

    fn load(&self, solution: PuzzleSolution) -> Result<String> {
        Ok(format!(
            "Result part 1: {}\nResult part 2: {}",
            solution.part1, solution.part2
        ))
    }
}
