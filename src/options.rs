//! Aggregated solver configuration with builder-style overrides.

use crate::solving::BisectionOptions;

/// Solver configuration used by [`BudgetProblem::solve_with_options`](crate::BudgetProblem::solve_with_options).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BudgetOptions {
    /// Configuration for the bisection over the phantom midpoint.
    pub bisection: BisectionOptions,
}

impl BudgetOptions {
    /// Override the bisection settings.
    pub fn with_bisection(mut self, bisection: BisectionOptions) -> Self {
        self.bisection = bisection;
        self
    }

    /// Set the relative tolerance used to accept a candidate total.
    pub fn with_budget_tolerance(mut self, tolerance: f64) -> Self {
        self.bisection.budget_tolerance = tolerance;
        self
    }

    /// Set the maximum number of bisection steps that should be attempted.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.bisection.max_iterations = max_iterations.max(1);
        self
    }
}
