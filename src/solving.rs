//! Bisection solver configuration and diagnostics.

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, Result};

/// Configuration for the bisection over the phantom midpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct BisectionOptions {
    /// Relative tolerance on the budget gap, scaled by `max(1, total_budget)`.
    ///
    /// A candidate is accepted only when its total lies within the tolerance *below* the
    /// budget, so an accepted allocation never overspends.
    pub budget_tolerance: f64,
    /// Maximum number of bisection steps before giving up on convergence.
    pub max_iterations: usize,
}

impl Default for BisectionOptions {
    fn default() -> Self {
        Self {
            budget_tolerance: 1e-10,
            max_iterations: 256,
        }
    }
}

impl BisectionOptions {
    /// Absolute tolerance for a given budget.
    pub fn absolute_tolerance(&self, total_budget: f64) -> f64 {
        self.budget_tolerance * total_budget.max(1.0)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.budget_tolerance.is_finite() || self.budget_tolerance < 0.0 {
            return Err(BudgetError::InvalidOptions {
                reason: "budget tolerance must be finite and non-negative",
            });
        }
        if self.max_iterations == 0 {
            return Err(BudgetError::InvalidOptions {
                reason: "at least one bisection iteration is required",
            });
        }
        Ok(())
    }
}

/// How the bisection loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// The allocated total landed within tolerance of the budget.
    Converged,
    /// The interval shrank to adjacent floating-point values without convergence.
    IntervalCollapsed,
    /// `max_iterations` was reached without convergence.
    IterationLimit,
    /// Every candidate overspent: the budget lies below what the median rule allocates as
    /// the midpoint approaches zero. The allocation at the lowest midpoint reached is
    /// returned and its summary carries a positive gap.
    BudgetBelowMinimum,
}

/// Diagnostics returned alongside the allocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BisectionSummary {
    /// Number of candidate allocations evaluated.
    pub iterations: usize,
    /// Midpoint of the returned candidate.
    pub midpoint: f64,
    /// Sum of the returned allocation.
    pub total: f64,
    /// `total - total_budget` for the returned allocation; positive only for
    /// [`Termination::BudgetBelowMinimum`].
    pub gap: f64,
    /// Reason the loop stopped.
    pub termination: Termination,
}

impl BisectionSummary {
    /// True when the total matched the budget within tolerance.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// True when the returned allocation spends more than the budget.
    pub fn overspent(&self) -> bool {
        self.termination == Termination::BudgetBelowMinimum
    }
}
