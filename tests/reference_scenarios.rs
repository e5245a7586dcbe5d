use approx::assert_relative_eq;
use medianpb::data::PreferenceProfile;
use medianpb::{compute_budget, BudgetProblem, Termination};
use nalgebra::DVector;

/// Two citizens backing opposite options split the budget between them.
#[test]
fn opposing_citizens_split_evenly() {
    let allocation = compute_budget(100.0, &[vec![100.0, 0.0, 0.0], vec![0.0, 0.0, 100.0]])
        .unwrap();
    assert_eq!(allocation, vec![50.0, 0.0, 50.0]);
}

/// Nine options where each citizen funds a different subset; the phantom midpoint is 1/15.
#[test]
fn overlapping_subsets_share_the_budget() {
    let allocation = compute_budget(
        30.0,
        &[
            vec![6.0, 6.0, 6.0, 6.0, 0.0, 0.0, 6.0, 0.0, 0.0],
            vec![0.0, 0.0, 6.0, 6.0, 6.0, 6.0, 0.0, 6.0, 0.0],
            vec![6.0, 6.0, 0.0, 0.0, 6.0, 6.0, 0.0, 0.0, 6.0],
        ],
    )
    .unwrap();

    let expected = DVector::from_vec(vec![4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 2.0, 2.0, 2.0]);
    assert_relative_eq!(DVector::from_vec(allocation), expected, epsilon = 1e-6);
}

#[test]
fn median_citizen_wins_every_option() {
    let allocation = compute_budget(
        130.0,
        &[
            vec![100.0, 30.0, 0.0],
            vec![15.0, 100.0, 15.0],
            vec![50.0, 50.0, 30.0],
        ],
    )
    .unwrap();
    assert_eq!(allocation, vec![50.0, 50.0, 30.0]);
}

/// Without phantoms the lone citizen's preference is returned as is.
#[test]
fn single_citizen_gets_own_preference() {
    let preference = vec![12.5, 0.0, 40.0, 7.5];
    let budget: f64 = preference.iter().sum();

    let profile = PreferenceProfile::from_rows(&[preference.clone()]).unwrap();
    let result = BudgetProblem::new(profile, budget).unwrap().solve().unwrap();

    assert_eq!(result.to_vec(), preference);
    assert!(result.phantoms().is_empty());
    assert_eq!(result.summary().termination, Termination::Converged);
}

/// A budget below the per-option minimums still yields the lowest reachable allocation.
#[test]
fn zero_budget_returns_per_option_minimums() {
    let profile = PreferenceProfile::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let result = BudgetProblem::new(profile, 0.0).unwrap().solve().unwrap();

    assert_eq!(result.to_vec(), vec![1.0, 2.0]);
    assert_eq!(result.summary().termination, Termination::BudgetBelowMinimum);
    assert_relative_eq!(result.summary().gap, 3.0);
}

#[test]
fn malformed_input_is_rejected_up_front() {
    let ragged = compute_budget(10.0, &[vec![1.0, 2.0, 3.0], vec![1.0, 2.0]]).unwrap_err();
    assert!(ragged.is_invalid_input());

    let empty = compute_budget(10.0, &[]).unwrap_err();
    assert!(empty.is_invalid_input());

    let negative_budget = compute_budget(-5.0, &[vec![1.0]]).unwrap_err();
    assert!(negative_budget.is_invalid_input());

    let negative_preference = compute_budget(5.0, &[vec![1.0, -1.0]]).unwrap_err();
    assert!(negative_preference.is_invalid_input());
}
