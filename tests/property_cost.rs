use hexboard::{
    check_keyboard, compute_cell_location, compute_cost, compute_cost_ours, Grid, Keyboard,
    KeyboardError, LayoutConfig,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

proptest! {
    // Sequential walk and bigram pricing agree on any text and layout
    #[test]
    fn both_cost_formulations_agree(text in "[a-zçãé ,.!?A-Z\n]{0,200}", seed in any::<u64>(), start in proptest::option::of(0usize..44)) {
        let mut cfg = LayoutConfig::default();
        cfg.start_cell = start;
        let mut rng = StdRng::seed_from_u64(seed);
        let kb = Keyboard::random(&cfg, &mut rng).unwrap();
        let a = compute_cost(&text, &kb);
        let b = compute_cost_ours(&text, &kb);
        prop_assert!(a >= 0.0);
        prop_assert!((a - b).abs() <= 1e-9 * a.max(1.0), "{} vs {}", a, b);
    }

    // Every shuffle of the alphabet is accepted
    #[test]
    fn random_layouts_pass_validation(seed in any::<u64>()) {
        let cfg = LayoutConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let kb = Keyboard::random(&cfg, &mut rng).unwrap();
        prop_assert!(check_keyboard(&kb.as_string(), &cfg).is_ok());
    }

    // Replacing one key by another symbol of the alphabet always yields a duplicate
    #[test]
    fn overwriting_a_key_is_a_duplicate(seed in any::<u64>(), i in 0usize..44, j in 0usize..44) {
        prop_assume!(i != j);
        let cfg = LayoutConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut keys: Vec<char> = Keyboard::random(&cfg, &mut rng).unwrap().keys().to_vec();
        keys[i] = keys[j];
        let s: String = keys.iter().collect();
        prop_assert!(matches!(check_keyboard(&s, &cfg), Err(KeyboardError::DuplicateSymbol(_))));
    }

    // Distances are symmetric and obey the triangle inequality
    #[test]
    fn distance_is_a_metric(rows in 1usize..8, cols in 1usize..12, a in 0usize..96, b in 0usize..96, c in 0usize..96) {
        let grid = Grid::new(rows, cols).unwrap();
        let cap = grid.capacity();
        let (a, b, c) = (a % cap, b % cap, c % cap);
        let la = compute_cell_location(a, grid).unwrap();
        let lb = compute_cell_location(b, grid).unwrap();
        let lc = compute_cell_location(c, grid).unwrap();
        prop_assert!((la.distance_to(&lb) - lb.distance_to(&la)).abs() < 1e-12);
        prop_assert!(la.distance_to(&lc) <= la.distance_to(&lb) + lb.distance_to(&lc) + 1e-9);
        prop_assert!(compute_cell_location(cap, grid).is_err());
    }
}

#[test]
fn moving_to_a_neighbour_costs_one() {
    let cfg = LayoutConfig::default();
    let kb = Keyboard::identity(&cfg).unwrap();
    // a is cell 0, b cell 1, l cell 11 (row 1, col 0): all mutual neighbours
    assert!((compute_cost("ab", &kb) - 1.0).abs() < 1e-12);
    assert!((compute_cost("al", &kb) - 1.0).abs() < 1e-12);
    assert!((compute_cost("bl", &kb) - 1.0).abs() < 1e-12);
    assert!((compute_cost("alba", &kb) - 3.0).abs() < 1e-12);
}
