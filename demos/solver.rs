use std::env;
use std::path::Path;

use mazemap::{ser, Dims, Maze, Random, SolveMethod};

use rand::{thread_rng, Rng as _, SeedableRng as _};

fn main() {
    let args = env::args()
        .skip(1)
        .take(3)
        .map(|s| s.parse())
        .collect::<Result<Vec<i64>, _>>()
        .expect("Expected integers: width height [seed]");

    assert!(
        args.len() == 2 || args.len() == 3,
        "Expected width height [seed]"
    );

    let input_seed = args.get(2).copied().map(|seed| seed as u64);
    let seed = input_seed.unwrap_or_else(|| thread_rng().gen());
    let mut rng = Random::seed_from_u64(seed);

    if input_seed.is_none() {
        println!("Seed: {}", seed);
    }

    let size = Dims(args[0] as i32, args[1] as i32);
    let maze = Maze::generate(size, &mut rng).expect("maze size must be positive");
    ser::save_maze(&maze, Path::new("maze.txt")).expect("failed to write maze file");

    for method in [SolveMethod::Dfs, SolveMethod::Bfs, SolveMethod::Heuristic] {
        let solution = maze.solve(method, &mut rng).expect("maze is solvable");

        println!(
            "{:?}: explored {} moves, solution of {} nodes",
            method,
            solution.history.len(),
            solution.path.len()
        );

        let tag = format!("{method:?}").to_lowercase();
        ser::save_path(&solution.history, Path::new(&format!("search_{tag}.txt")))
            .expect("failed to write search file");
        ser::save_path(&solution.path, Path::new(&format!("solution_{tag}.txt")))
            .expect("failed to write solution file");
    }
}
