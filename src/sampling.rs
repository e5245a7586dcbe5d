//! Seeded random preference profiles for experiments, property tests and benchmarks.

use nalgebra::DMatrix;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Exp1};

use crate::data::PreferenceProfile;
use crate::error::{BudgetError, Result};

/// Draws `citizens` preference rows, each uniform on the simplex scaled to `total_budget`.
///
/// Rows are normalized `Exp(1)` draws, so every citizen asks for exactly the whole budget.
pub fn random_profile(
    citizens: usize,
    options: usize,
    total_budget: f64,
    seed: u64,
) -> Result<PreferenceProfile> {
    if !total_budget.is_finite() || total_budget < 0.0 {
        return Err(BudgetError::InvalidBudget {
            budget: total_budget,
        });
    }
    if citizens == 0 {
        return Err(BudgetError::empty("citizen"));
    }
    if options == 0 {
        return Err(BudgetError::empty("option"));
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut preferences = DMatrix::zeros(citizens, options);
    for mut row in preferences.row_iter_mut() {
        for value in row.iter_mut() {
            *value = Exp1.sample(&mut rng);
        }
        let sum = row.sum();
        if sum > 0.0 {
            row *= total_budget / sum;
        } else {
            row.fill(total_budget / options as f64);
        }
    }

    PreferenceProfile::from_matrix(preferences)
}
