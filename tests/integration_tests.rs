use cosmic_expansion::{CliConfig, ExpansionPipeline, LocalStorage, PuzzleError, SolverEngine};
use tempfile::TempDir;

const EXAMPLE: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....";

fn write_input(dir: &TempDir, contents: &str) {
    std::fs::write(dir.path().join("input"), contents).unwrap();
}

fn engine_for(
    dir: &TempDir,
    scale: u64,
) -> SolverEngine<ExpansionPipeline<LocalStorage, CliConfig>> {
    let config = CliConfig {
        input_path: "input".to_string(),
        scale,
        verbose: false,
    };
    let storage = LocalStorage::new(dir.path().to_str().unwrap().to_string());
    SolverEngine::new(ExpansionPipeline::new(storage, config))
}

#[test]
fn test_end_to_end_reference_grid() {
    let dir = TempDir::new().unwrap();
    // The raw file carries trailing whitespace; extraction trims it.
    write_input(&dir, &format!("{}\n\n", EXAMPLE));

    let report = engine_for(&dir, 10).run().unwrap();
    assert_eq!(report, "Result part 1: 374\nResult part 2: 1030");

    let report = engine_for(&dir, 100).run().unwrap();
    assert_eq!(report, "Result part 1: 374\nResult part 2: 8410");
}

#[test]
fn test_end_to_end_with_production_scale() {
    let dir = TempDir::new().unwrap();
    write_input(&dir, EXAMPLE);

    let report = engine_for(&dir, 1_000_000).run().unwrap();
    let part2: u64 = report
        .lines()
        .nth(1)
        .and_then(|line| line.rsplit(' ').next())
        .unwrap()
        .parse()
        .unwrap();

    // 210 plain steps and 82 scaled steps across the reference grid's pairs.
    assert_eq!(part2, 82_000_210);
}

#[test]
fn test_missing_input_file_fails_with_io_error() {
    let dir = TempDir::new().unwrap();

    let result = engine_for(&dir, 10).run();
    assert!(matches!(result, Err(PuzzleError::IoError(_))));
}

#[test]
fn test_blank_input_file_fails_with_parse_error() {
    let dir = TempDir::new().unwrap();
    write_input(&dir, "  \n \n");

    let result = engine_for(&dir, 10).run();
    assert!(matches!(result, Err(PuzzleError::ParseError { .. })));
}

#[test]
fn test_grid_without_empty_lines_ignores_scale() {
    let dir = TempDir::new().unwrap();
    write_input(&dir, "#.#\n.#.\n#.#");

    let small = engine_for(&dir, 2).run().unwrap();
    let large = engine_for(&dir, 1_000_000).run().unwrap();
    assert_eq!(small, large);
}

#[test]
fn test_single_galaxy_has_no_pairs() {
    let dir = TempDir::new().unwrap();
    write_input(&dir, "...\n.#.\n...");

    let report = engine_for(&dir, 10).run().unwrap();
    assert_eq!(report, "Result part 1: 0\nResult part 2: 0");
}
