use proptest::prelude::*;

use blackbox::{
    board::{Coordinate, GRID_SIZE},
    game::{GameSetup, STARTING_SCORE},
    ray::RayOutcome,
};

fn edges() -> Vec<Coordinate> {
    (0..GRID_SIZE)
        .flat_map(|row| (0..GRID_SIZE).map(move |column| Coordinate::new(row, column)))
        .filter(Coordinate::is_edge)
        .collect()
}

fn interior_atoms() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((1usize..GRID_SIZE - 1, 1usize..GRID_SIZE - 1), 1..12)
}

proptest! {
    #[test]
    fn every_edge_shot_resolves(atoms in interior_atoms()) {
        let mut game = GameSetup::with_atoms(atoms).start().unwrap();
        for origin in edges() {
            let before = game.score();
            let exit = game.shoot(origin).unwrap();
            let ray = game.rays().last().unwrap();
            prop_assert!(ray.is_stopped());
            prop_assert_eq!(ray.origin(), origin);

            match exit {
                Some(exit) => {
                    prop_assert!(exit.is_edge());
                    prop_assert_ne!(exit, origin);
                    prop_assert_eq!(ray.outcome(), Some(RayOutcome::Exited(exit)));
                    prop_assert_eq!(game.score(), before - 2);
                    let cell = game.get_coord(exit).unwrap();
                    prop_assert_eq!(cell.terminating_ray(), Some(origin));
                }
                None => {
                    prop_assert!(
                        ray.is_reflection() || ray.outcome() == Some(RayOutcome::Absorbed)
                    );
                    prop_assert_eq!(game.score(), before - 1);
                }
            }
        }
        prop_assert_eq!(game.rays().len(), edges().len());
    }

    #[test]
    fn ray_paths_are_connected(atoms in interior_atoms(), pick in 0usize..32) {
        let origin = edges()[pick];
        let mut game = GameSetup::with_atoms(atoms).start().unwrap();
        game.shoot(origin).unwrap();
        let path = game.rays()[0].path();

        prop_assert_eq!(path[0], origin);
        for pair in path.windows(2) {
            let rows = (pair[0].row as isize - pair[1].row as isize).abs();
            let columns = (pair[0].column as isize - pair[1].column as isize).abs();
            prop_assert_eq!(rows + columns, 1);
        }
        let inner = path.len().saturating_sub(2);
        for cell in path.iter().skip(1).take(inner) {
            prop_assert!(cell.is_interior());
        }
    }

    #[test]
    fn guessing_every_atom_wins_without_penalty(atoms in interior_atoms()) {
        let mut game = GameSetup::with_atoms(atoms.clone()).start().unwrap();
        for &(row, column) in &atoms {
            prop_assert!(game.guess(Coordinate::new(row, column)).unwrap());
        }
        prop_assert_eq!(game.atoms_remaining(), 0);
        prop_assert_eq!(game.score(), STARTING_SCORE);

        let (row, column) = atoms[0];
        prop_assert!(!game.guess(Coordinate::new(row, column)).unwrap());
        prop_assert_eq!(game.score(), STARTING_SCORE - 5);
    }
}
