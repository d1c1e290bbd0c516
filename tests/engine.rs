use mazemap::{ser, Dims, Maze, Random, SolveMethod};
use rand::SeedableRng as _;

const METHODS: [SolveMethod; 3] = [SolveMethod::Dfs, SolveMethod::Bfs, SolveMethod::Heuristic];

#[test]
fn generate_solve_and_serialize() {
    let mut rng = Random::seed_from_u64(2024);
    let maze = Maze::generate(Dims(30, 20), &mut rng).unwrap();

    assert_eq!(maze.tree().node_count(), 30 * 20);
    assert_eq!(maze.tree().edge_count(), 30 * 20 - 1);
    assert!(maze.tree().is_connected());

    let mut lengths = Vec::new();
    for method in METHODS {
        let solution = maze.solve(method, &mut rng).unwrap();

        assert_eq!(solution.path.first(), Some(&maze.start()));
        assert_eq!(solution.path.last(), Some(&maze.end()));
        for pair in solution.history.windows(2) {
            assert!(maze.tree().neighbors(pair[0]).contains(&pair[1]));
        }

        let mut buf = Vec::new();
        ser::write_path(&solution.history, &mut buf).unwrap();
        assert_eq!(ser::read_path(buf.as_slice()).unwrap(), solution.history);

        lengths.push(solution.path.len());
    }

    let (dfs, bfs, heuristic) = (lengths[0], lengths[1], lengths[2]);
    assert_eq!(bfs, heuristic);
    assert!(dfs >= bfs);

    let mut buf = Vec::new();
    ser::write_maze(&maze, &mut buf).unwrap();
    let edges = ser::read_maze_edges(buf.as_slice()).unwrap();
    assert_eq!(edges.len(), maze.tree().edge_count());
}

#[test]
fn strategy_tags_parse() {
    assert_eq!("heuristic".parse::<SolveMethod>(), Ok(SolveMethod::Heuristic));
    assert!("best-first".parse::<SolveMethod>().is_err());
}
