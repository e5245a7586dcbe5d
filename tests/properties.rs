use medianpb::data::PreferenceProfile;
use medianpb::sampling::random_profile;
use medianpb::{compute_budget, BudgetProblem, Termination};
use proptest::prelude::*;

fn preference_rows() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..=5, 1usize..=6)
        .prop_flat_map(|(citizens, options)| {
            prop::collection::vec(prop::collection::vec(0u32..=100, options), citizens)
        })
        .prop_map(|rows| {
            rows.into_iter()
                .map(|row| row.into_iter().map(f64::from).collect())
                .collect()
        })
}

proptest! {
    #[test]
    fn allocation_is_non_negative_and_within_budget(
        rows in preference_rows(),
        budget in 0.0f64..600.0,
    ) {
        let options = rows[0].len();
        let problem = BudgetProblem::new(PreferenceProfile::from_rows(&rows).unwrap(), budget)
            .unwrap();
        let result = problem.solve().unwrap();

        let allocation = result.to_vec();
        prop_assert_eq!(allocation.len(), options);
        prop_assert!(allocation.iter().all(|value| *value >= 0.0));

        let total: f64 = allocation.iter().sum();
        if result.summary().overspent() {
            prop_assert_eq!(result.summary().termination, Termination::BudgetBelowMinimum);
            prop_assert!(result.summary().gap > 0.0);
            let floor = problem.allocation_at(0.0).unwrap().sum();
            prop_assert!(floor > budget, "floor {floor} vs budget {budget}");
            prop_assert!(total + 1e-9 >= floor);
        } else {
            prop_assert!(total <= budget + 1e-9);
        }
        if result.summary().converged() {
            prop_assert!((total - budget).abs() <= 1e-6);
        }
    }

    #[test]
    fn raising_the_budget_never_shrinks_an_option(
        rows in preference_rows(),
        budget in 0.0f64..600.0,
        raise in 1.0f64..400.0,
    ) {
        let lower = compute_budget(budget, &rows).unwrap();
        let higher = compute_budget(budget + raise, &rows).unwrap();

        for (before, after) in lower.iter().zip(&higher) {
            prop_assert!(after + 1e-6 >= *before, "{before} -> {after}");
        }
    }

    #[test]
    fn repeated_calls_agree(rows in preference_rows(), budget in 0.0f64..600.0) {
        let first = compute_budget(budget, &rows).unwrap();
        let second = compute_budget(budget, &rows).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Citizens who each ask for the whole budget always leave a crossing point inside (0, 1).
    #[test]
    fn full_budget_requests_converge(
        citizens in 2usize..=7,
        options in 2usize..=8,
        budget in 1.0f64..1000.0,
        seed in any::<u64>(),
    ) {
        let profile = random_profile(citizens, options, budget, seed).unwrap();
        let result = BudgetProblem::new(profile, budget).unwrap().solve().unwrap();

        prop_assert!(result.summary().converged());
        prop_assert!((result.total() - budget).abs() <= 1e-6 * budget.max(1.0));
    }
}
