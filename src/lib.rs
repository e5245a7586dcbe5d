//! Generalized median participatory budgeting with linear phantom functions.
//!
//! Given a total budget and each citizen's preferred split of that budget across a set of
//! spending options, this crate computes a single consensus allocation. Every option receives
//! the median of the citizens' stated amounts together with `n - 1` shared "phantom" bids,
//! and the phantoms are scaled by one parameter that is bisected until the medians exhaust
//! the budget without exceeding it.
//!
//! The crate is organized as
//!
//! - validated preference profiles (`data` module),
//! - the phantom bids for one trial parameter (`phantom` module),
//! - the per-option median allocation (`allocation` module),
//! - the bisection driver (`budget` module) with its configuration (`options`, `solving`), and
//! - seeded random profiles for experiments (`sampling` module).
//!
//! # Quick start
//!
//! ```
//! use medianpb::data::PreferenceProfile;
//! use medianpb::{BudgetOptions, BudgetProblem};
//!
//! let profile = PreferenceProfile::from_rows(&[
//!     vec![100.0, 30.0, 0.0],
//!     vec![15.0, 100.0, 15.0],
//!     vec![50.0, 50.0, 30.0],
//! ])
//! .expect("rectangular, non-negative preferences");
//!
//! let problem = BudgetProblem::new(profile, 130.0).expect("valid budget");
//! let result = problem
//!     .solve_with_options(&BudgetOptions::default())
//!     .expect("budget is reachable");
//!
//! assert_eq!(result.to_vec(), vec![50.0, 50.0, 30.0]);
//! assert!(result.summary().converged());
//! ```
//!
//! For one-off calls, [`compute_budget`] takes plain nested vectors.

pub mod allocation;
pub mod budget;
pub mod data;
pub mod error;
pub mod options;
pub mod phantom;
pub mod sampling;
pub mod solving;

pub use budget::{compute_budget, BudgetAllocation, BudgetProblem};
pub use error::{BudgetError, Result};
pub use options::BudgetOptions;
pub use solving::{BisectionOptions, BisectionSummary, Termination};
