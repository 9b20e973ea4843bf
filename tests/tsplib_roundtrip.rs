//! Reading an instance from disk, solving it, and writing the tour back.

use std::path::PathBuf;

use tsp_ga::ga::{GaConfig, GeneticEngine, MutationPolicy};
use tsp_ga::tsp::tsplib::{read_instance, write_tour_file};
use tsp_ga::TspError;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tsp_ga_{}_{name}", std::process::id()))
}

/// Eight cities on the perimeter of a 2x2 square, listed out of order.
const OCTAGON: &str = "\
NAME : perimeter8
TYPE : TSP
COMMENT : optimal tour length 8
DIMENSION : 8
EDGE_WEIGHT_TYPE : EUC_2D
NODE_COORD_SECTION
1 0 0
2 2 2
3 1 0
4 0 2
5 2 0
6 1 2
7 2 1
8 0 1
EOF
";

#[test]
fn solve_file_and_write_tour() {
    let input = scratch_path("perimeter8.tsp");
    let output = scratch_path("perimeter8.tour");
    std::fs::write(&input, OCTAGON).unwrap();

    let problem = read_instance(&input).unwrap();
    assert_eq!(problem.name.as_deref(), Some("perimeter8"));

    let config = GaConfig::default()
        .with_population_size(60)
        .with_max_generations(400)
        .with_crossover_probability(0.8)
        .with_mutation_policy(MutationPolicy::Always)
        .without_time_limit()
        .with_seed(2024);
    let engine = GeneticEngine::new(problem.instance.clone(), config).unwrap();
    let result = engine.run().unwrap();
    assert!(result.solution.distance >= 8.0 - 1e-9);

    write_tour_file(&output, "perimeter8", &result.solution, &problem.instance).unwrap();
    let written = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();

    assert_eq!(lines[0], "NAME : perimeter8");
    assert!(lines[1].starts_with("COMMENT : Total distance = "));
    assert_eq!(lines[3], "DIMENSION : 8");
    assert_eq!(lines[4], "TOUR_SECTION");
    assert_eq!(lines[lines.len() - 2], "-1");
    assert_eq!(lines[lines.len() - 1], "EOF");

    let mut ids: Vec<i64> = lines[5..lines.len() - 2]
        .iter()
        .map(|l| l.parse().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=8).collect::<Vec<i64>>());

    std::fs::remove_file(&input).ok();
    std::fs::remove_file(&output).ok();
}

#[test]
fn missing_file_is_io_error() {
    let err = read_instance(scratch_path("does_not_exist.tsp")).unwrap_err();
    assert!(matches!(err, TspError::Io(_)));
}
