//! Properties that hold for every generated maze.

use labyrinth_core::{Maze, STRAIGHT_COST, text};
use labyrinth_gen::generate;
use labyrinth_paths::{Heuristic, Solver, Strategy, is_solvable};
use proptest::prelude::*;

fn solve_with(maze: &mut Maze, heuristic: Heuristic, strategy: Strategy) -> labyrinth_paths::Path {
    Solver::new(heuristic, strategy)
        .solve(maze)
        .expect("generated mazes are solvable")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn always_solvable(w in 2i32..30, h in 2i32..30, seed in any::<u64>()) {
        let m = generate(w, h, Some(seed)).unwrap();
        prop_assert!(m.is_passable(m.start()));
        prop_assert!(m.is_passable(m.end()));
        prop_assert!(is_solvable(&m));
    }

    #[test]
    fn engines_agree_on_cost(w in 2i32..25, h in 2i32..25, seed in any::<u64>()) {
        let mut m = generate(w, h, Some(seed)).unwrap();
        let a = solve_with(&mut m, Heuristic::Diagonal, Strategy::AStar);
        let d = solve_with(&mut m, Heuristic::Diagonal, Strategy::Dijkstra);
        prop_assert_eq!(a.cost(), d.cost());
        prop_assert_eq!(a.start(), Some(m.start()));
        prop_assert_eq!(a.end(), Some(m.end()));
    }

    #[test]
    fn odd_mazes_route_through_corridors(w in 1i32..12, h in 1i32..12, seed in any::<u64>()) {
        // Odd sides leave no diagonal shortcuts, so every step is straight.
        let (w, h) = (2 * w + 1, 2 * h + 1);
        let mut m = generate(w, h, Some(seed)).unwrap();
        let path = solve_with(&mut m, Heuristic::Manhattan, Strategy::AStar);
        prop_assert_eq!(path.cost(), (path.len() as u32 - 1) * STRAIGHT_COST);
    }

    #[test]
    fn text_round_trip(w in 2i32..20, h in 2i32..20, seed in any::<u64>()) {
        let m = generate(w, h, Some(seed)).unwrap();
        let encoded = text::encode(&m).unwrap();
        let back = text::decode(&encoded).unwrap();
        prop_assert_eq!((back.width(), back.height()), (w, h));
        prop_assert_eq!(back.passable_count(), m.passable_count());
        prop_assert_eq!(text::encode(&back).unwrap(), encoded);
    }
}

#[test]
fn reset_after_solving_clears_bookkeeping() {
    let mut m = generate(15, 9, Some(11)).unwrap();
    solve_with(&mut m, Heuristic::Euclidean, Strategy::AStar);
    assert!(m.cells().iter().any(|c| c.parent.is_some()));

    m.reset_nodes();
    assert!(m.cells().iter().all(|c| c.g == 0 && c.h == 0 && c.parent.is_none()));
    m.reset_nodes();
    assert!(m.cells().iter().all(|c| c.g == 0 && c.h == 0 && c.parent.is_none()));
}

#[test]
fn repeated_solves_are_stable() {
    let mut m = generate(21, 13, Some(5)).unwrap();
    let mut solver = Solver::new(Heuristic::Diagonal, Strategy::AStar);
    let first = solver.solve(&mut m).unwrap();
    let second = solver.solve(&mut m).unwrap();
    assert_eq!(first, second);
}

#[test]
fn drawn_solution_marks_every_interior_step() {
    let mut m = generate(11, 7, Some(2)).unwrap();
    let path = solve_with(&mut m, Heuristic::Diagonal, Strategy::AStar);
    let drawn = text::encode_with_path(&m, path.positions()).unwrap();
    let dots = drawn.chars().filter(|&c| c == '.').count();
    assert_eq!(dots, path.len() - 2);
}
