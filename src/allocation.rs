//! Per-option median allocation for a fixed set of phantom bids.

use nalgebra::DVector;

use crate::data::PreferenceProfile;
use crate::error::{BudgetError, Result};
use crate::phantom::PhantomBids;

/// Median of `pool`, reordering it in place.
///
/// Odd pools yield the central value; even pools the mean of the two central values.
pub fn median(pool: &mut [f64]) -> Result<f64> {
    if pool.is_empty() {
        return Err(BudgetError::NumericalError {
            context: "median of an empty pool",
        });
    }
    if pool.iter().any(|value| value.is_nan()) {
        return Err(BudgetError::NumericalError {
            context: "median pool",
        });
    }
    pool.sort_by(f64::total_cmp);

    let mid = pool.len() / 2;
    if pool.len() % 2 == 1 {
        Ok(pool[mid])
    } else {
        Ok((pool[mid - 1] + pool[mid]) / 2.0)
    }
}

/// Computes the candidate allocation: for each option, the median of every citizen's
/// stated amount together with all phantom values.
pub fn median_allocation(
    profile: &PreferenceProfile,
    phantoms: &PhantomBids,
) -> Result<DVector<f64>> {
    let options = profile.option_count();
    let mut pool = Vec::with_capacity(profile.citizen_count() + phantoms.len());
    let mut candidate = DVector::zeros(options);

    for option in 0..options {
        pool.clear();
        pool.extend(profile.option_preferences(option));
        pool.extend_from_slice(phantoms.values());
        candidate[option] = median(&mut pool)?;
    }

    Ok(candidate)
}
