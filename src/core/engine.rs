use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct SolverEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SolverEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order and returns the rendered
    /// report. Progress goes to the log, never to stdout.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Reading puzzle input...");
        let input = self.pipeline.extract()?;
        tracing::info!("Read {} lines", input.lines().count());

        tracing::info!("Solving...");
        let solution = self.pipeline.transform(input)?;
        tracing::info!(
            "Solved: part 1 = {}, part 2 = {}",
            solution.part1,
            solution.part2
        );

        let report = self.pipeline.load(solution)?;
        Ok(report)
    }
}
