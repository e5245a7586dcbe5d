//! Budget solver: bisection over the phantom midpoint until the median allocation
//! exhausts the total budget.

use log::{debug, trace, warn};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::allocation::median_allocation;
use crate::data::PreferenceProfile;
use crate::error::{BudgetError, Result};
use crate::options::BudgetOptions;
use crate::phantom::PhantomBids;
use crate::solving::{BisectionSummary, Termination};

/// A preference profile paired with the total budget to distribute.
#[derive(Clone, Debug)]
pub struct BudgetProblem {
    profile: PreferenceProfile,
    total_budget: f64,
}

impl BudgetProblem {
    /// Constructs a new problem, rejecting negative or non-finite budgets.
    pub fn new(profile: PreferenceProfile, total_budget: f64) -> Result<Self> {
        if !total_budget.is_finite() || total_budget < 0.0 {
            return Err(BudgetError::InvalidBudget {
                budget: total_budget,
            });
        }
        Ok(Self {
            profile,
            total_budget,
        })
    }

    /// Accessor for the citizen preferences.
    pub fn profile(&self) -> &PreferenceProfile {
        &self.profile
    }

    /// Accessor for the budget being distributed.
    pub fn total_budget(&self) -> f64 {
        self.total_budget
    }

    /// Phantom bids for a given midpoint of this problem.
    pub fn phantoms_at(&self, midpoint: f64) -> PhantomBids {
        PhantomBids::linear(self.total_budget, self.profile.citizen_count(), midpoint)
    }

    /// Median allocation for a fixed midpoint, without searching.
    pub fn allocation_at(&self, midpoint: f64) -> Result<DVector<f64>> {
        median_allocation(&self.profile, &self.phantoms_at(midpoint))
    }

    /// Solves with [`BudgetOptions::default`].
    pub fn solve(&self) -> Result<BudgetAllocation> {
        self.solve_with_options(&BudgetOptions::default())
    }

    /// Bisects the midpoint in `[0, 1]` until the allocated total meets the budget.
    ///
    /// The allocated total is non-decreasing in the midpoint, so the bracket always
    /// retains the crossing point. A total inside the tolerance keeps the search going
    /// from below until the interval collapses; an exact hit returns at once. When the
    /// search stops without converging, the last candidate that stayed within the budget
    /// is returned, or, if every candidate overspent, the one at the lowest midpoint
    /// reached with [`Termination::BudgetBelowMinimum`].
    pub fn solve_with_options(&self, options: &BudgetOptions) -> Result<BudgetAllocation> {
        let bisection = &options.bisection;
        bisection.validate()?;

        let tolerance = bisection.absolute_tolerance(self.total_budget);
        let mut low = 0.0_f64;
        let mut high = 1.0_f64;
        let mut feasible: Option<(DVector<f64>, PhantomBids, f64)> = None;
        let mut excess: Option<(DVector<f64>, PhantomBids, f64)> = None;
        let mut iterations = 0usize;

        let stopped = loop {
            if iterations >= bisection.max_iterations {
                break Termination::IterationLimit;
            }
            let midpoint = 0.5 * (low + high);
            if midpoint <= low || midpoint >= high {
                break Termination::IntervalCollapsed;
            }

            let phantoms = self.phantoms_at(midpoint);
            trace!("phantom bids at midpoint {midpoint}: {:?}", phantoms.values());

            let allocation = median_allocation(&self.profile, &phantoms)?;
            let total = allocation.sum();
            let gap = total - self.total_budget;
            iterations += 1;
            debug!("iteration {iterations}: midpoint {midpoint}, total {total}, gap {gap}");

            if gap == 0.0 {
                let summary = BisectionSummary {
                    iterations,
                    midpoint,
                    total,
                    gap,
                    termination: Termination::Converged,
                };
                return Ok(BudgetAllocation::new(allocation, phantoms, summary));
            }

            if gap < 0.0 {
                low = midpoint;
                feasible = Some((allocation, phantoms, total));
            } else {
                high = midpoint;
                excess = Some((allocation, phantoms, total));
            }
        };

        let (allocation, phantoms, total, termination) = match (feasible, excess) {
            (Some((allocation, phantoms, total)), _) => {
                let termination = if total - self.total_budget >= -tolerance {
                    Termination::Converged
                } else {
                    stopped
                };
                (allocation, phantoms, total, termination)
            }
            (None, Some((allocation, phantoms, total))) => {
                (allocation, phantoms, total, Termination::BudgetBelowMinimum)
            }
            (None, None) => {
                return Err(BudgetError::NumericalError {
                    context: "bisection without candidates",
                })
            }
        };

        if termination != Termination::Converged {
            warn!(
                "bisection stopped ({termination:?}, loop exit {stopped:?}) after {iterations} \
                 iterations; allocating {total} of {}",
                self.total_budget
            );
        }
        let summary = BisectionSummary {
            iterations,
            midpoint: phantoms.midpoint(),
            total,
            gap: total - self.total_budget,
            termination,
        };
        Ok(BudgetAllocation::new(allocation, phantoms, summary))
    }
}

/// Result of a budget computation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BudgetAllocation {
    allocation: DVector<f64>,
    phantoms: PhantomBids,
    summary: BisectionSummary,
}

impl BudgetAllocation {
    fn new(allocation: DVector<f64>, phantoms: PhantomBids, summary: BisectionSummary) -> Self {
        Self {
            allocation,
            phantoms,
            summary,
        }
    }

    /// Amount assigned to each option.
    pub fn allocation(&self) -> &DVector<f64> {
        &self.allocation
    }

    /// Phantom bids at the returned midpoint.
    pub fn phantoms(&self) -> &PhantomBids {
        &self.phantoms
    }

    /// Bisection diagnostics.
    pub fn summary(&self) -> &BisectionSummary {
        &self.summary
    }

    /// Sum over all options.
    pub fn total(&self) -> f64 {
        self.summary.total
    }

    /// Copies the allocation into a plain vector.
    pub fn to_vec(&self) -> Vec<f64> {
        self.allocation.iter().copied().collect()
    }
}

/// Distributes `total_budget` across options given one preference row per citizen.
///
/// ```
/// let allocation = medianpb::compute_budget(100.0, &[vec![100.0, 0.0, 0.0], vec![0.0, 0.0, 100.0]])
///     .expect("valid input");
/// assert_eq!(allocation, vec![50.0, 0.0, 50.0]);
/// ```
pub fn compute_budget(total_budget: f64, citizen_preferences: &[Vec<f64>]) -> Result<Vec<f64>> {
    let profile = PreferenceProfile::from_rows(citizen_preferences)?;
    let problem = BudgetProblem::new(profile, total_budget)?;
    Ok(problem.solve()?.to_vec())
}
