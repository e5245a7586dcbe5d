//! Citizen preference containers and the validation applied before any budget is computed.

use nalgebra::DMatrix;
use serde::Serialize;

use crate::error::{BudgetError, Result};

/// Validated preference matrix: one row per citizen, one column per spending option.
#[derive(Clone, Debug, Serialize)]
pub struct PreferenceProfile {
    preferences: DMatrix<f64>,
}

impl PreferenceProfile {
    /// Builds a profile from citizen rows, rejecting empty or ragged input.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        PreferenceProfileBuilder::new()
            .citizens(rows.iter().map(|row| row.as_ref().to_vec()))
            .build()
    }

    /// Wraps an existing matrix after checking that it is non-empty and non-negative.
    pub fn from_matrix(preferences: DMatrix<f64>) -> Result<Self> {
        if preferences.nrows() == 0 {
            return Err(BudgetError::empty("citizen"));
        }
        if preferences.ncols() == 0 {
            return Err(BudgetError::empty("option"));
        }
        for citizen in 0..preferences.nrows() {
            for option in 0..preferences.ncols() {
                check_preference(citizen, option, preferences[(citizen, option)])?;
            }
        }
        Ok(Self { preferences })
    }

    /// Number of citizens (rows).
    pub fn citizen_count(&self) -> usize {
        self.preferences.nrows()
    }

    /// Number of spending options (columns).
    pub fn option_count(&self) -> usize {
        self.preferences.ncols()
    }

    /// Returns a read-only view of the full matrix.
    pub fn preferences(&self) -> &DMatrix<f64> {
        &self.preferences
    }

    /// Iterates over every citizen's stated amount for `option`.
    pub fn option_preferences(&self, option: usize) -> impl Iterator<Item = f64> + '_ {
        self.preferences.row_iter().map(move |row| row[option])
    }
}

/// Accumulates citizen rows and validates the shape before constructing [`PreferenceProfile`].
#[derive(Debug, Default)]
pub struct PreferenceProfileBuilder {
    rows: Vec<Vec<f64>>,
}

impl PreferenceProfileBuilder {
    /// Starts an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one citizen's preferred allocation.
    pub fn citizen(mut self, preferences: Vec<f64>) -> Self {
        self.rows.push(preferences);
        self
    }

    /// Appends several citizens at once.
    pub fn citizens<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<f64>>,
    {
        self.rows.extend(rows);
        self
    }

    /// Finalizes construction after validating the row lengths and every entry.
    pub fn build(self) -> Result<PreferenceProfile> {
        let first = self.rows.first().ok_or_else(|| BudgetError::empty("citizen"))?;
        let options = first.len();
        if options == 0 {
            return Err(BudgetError::empty("option"));
        }

        for (citizen, row) in self.rows.iter().enumerate() {
            if row.len() != options {
                return Err(BudgetError::dimension_mismatch(
                    "citizen preference length",
                    options,
                    row.len(),
                ));
            }
            for (option, value) in row.iter().enumerate() {
                check_preference(citizen, option, *value)?;
            }
        }

        let rows = self.rows;
        let preferences = DMatrix::from_fn(rows.len(), options, |citizen, option| {
            rows[citizen][option]
        });
        Ok(PreferenceProfile { preferences })
    }
}

fn check_preference(citizen: usize, option: usize, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(BudgetError::InvalidPreference {
            citizen,
            option,
            value,
        });
    }
    Ok(())
}
