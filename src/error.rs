use thiserror::Error;

/// Unified error type for `medianpb` operations.
#[derive(Debug, Error)]
pub enum BudgetError {
    /// Raised when citizen rows have incompatible lengths.
    #[error("dimension mismatch in {context}: expected {expected} but found {found}")]
    DimensionMismatch {
        /// Human-readable context describing the operation.
        context: &'static str,
        /// The required dimension, taken from the first citizen.
        expected: usize,
        /// The dimension that was actually supplied.
        found: usize,
    },

    /// Raised when the profile has no citizens or no options.
    #[error("preference profile must contain at least one {dimension}")]
    EmptyProfile { dimension: &'static str },

    /// Raised when a stated preference is negative, NaN or infinite.
    #[error("preference of citizen {citizen} for option {option} must be finite and non-negative, found {value}")]
    InvalidPreference {
        citizen: usize,
        option: usize,
        value: f64,
    },

    /// Raised when the total budget is negative, NaN or infinite.
    #[error("total budget must be finite and non-negative, found {budget}")]
    InvalidBudget { budget: f64 },

    /// Raised when numerical routines produce NaN.
    #[error("encountered NaN during {context}")]
    NumericalError { context: &'static str },

    /// Raised when solver options are out of range.
    #[error("invalid solver options: {reason}")]
    InvalidOptions { reason: &'static str },
}

impl BudgetError {
    /// Helper to format a [`DimensionMismatch`](BudgetError::DimensionMismatch) error.
    pub fn dimension_mismatch(context: &'static str, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            context,
            expected,
            found,
        }
    }

    /// Helper to raise when a profile dimension is empty.
    pub fn empty(dimension: &'static str) -> Self {
        Self::EmptyProfile { dimension }
    }

    /// Returns `true` for errors caused by malformed caller input rather than by the search.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. }
                | Self::EmptyProfile { .. }
                | Self::InvalidPreference { .. }
                | Self::InvalidBudget { .. }
                | Self::InvalidOptions { .. }
        )
    }
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, BudgetError>;
