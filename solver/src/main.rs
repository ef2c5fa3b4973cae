use minotaur::{solve, solve_path_tiles};

// AoC 2024 day 16 first example
const MAZE: &str = "###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

fn main() {
    let lowest = solve(MAZE.lines()).unwrap();
    let tiles = solve_path_tiles(MAZE.lines()).unwrap();

    assert_eq!(lowest, 7036);
    assert_eq!(tiles, 45);

    println!("lowest score: {}", lowest);
    println!("tiles on any best path: {}", tiles);
}
