use crate::domain::model::PuzzleSolution;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn scale(&self) -> u64;
}

pub trait Pipeline {
    fn extract(&self) -> Result<String>;
    fn transform(&self, input: String) -> Result<PuzzleSolution>;
    fn load(&self, solution: PuzzleSolution) -> Result<String>;
}
