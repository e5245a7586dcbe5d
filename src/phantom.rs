//! Linear ascending phantom bids injected into every option's median pool.

use serde::{Deserialize, Serialize};

/// Phantom values for a single trial midpoint.
///
/// With `n` citizens there are `n - 1` phantoms, the `k`-th being
/// `min(total_budget, total_budget * k * midpoint)`. Every option's pool receives
/// the same sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhantomBids {
    midpoint: f64,
    values: Vec<f64>,
}

impl PhantomBids {
    /// Evaluates the linear phantom functions at `midpoint`.
    pub fn linear(total_budget: f64, citizen_count: usize, midpoint: f64) -> Self {
        let values = (1..citizen_count)
            .map(|k| total_budget.min(total_budget * k as f64 * midpoint))
            .collect();
        Self { midpoint, values }
    }

    /// The bisection parameter these phantoms were evaluated at.
    pub fn midpoint(&self) -> f64 {
        self.midpoint
    }

    /// Number of phantom bids (`citizen_count - 1`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for single-citizen profiles.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Phantom values in ascending order of `k`.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
