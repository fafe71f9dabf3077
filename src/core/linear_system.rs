// src/core/linear_system.rs

use serde::{Deserialize, Serialize};
use crate::config::SolverConfig;
use crate::matrix::augmented_matrix::AugmentedMatrix;
use crate::matrix::error::SolveError;
use crate::matrix::modular_solver::ModularLinearSystemSolver;
use crate::matrix::solution::Classification;

/// A system of congruences as callers write it down: raw signed coefficients, one row per
/// equation, the constant last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearSystem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub modulus: u64,
    pub rows: Vec<Vec<i64>>,
}

impl LinearSystem {
    pub fn new(modulus: u64, rows: Vec<Vec<i64>>) -> Self {
        LinearSystem { name: None, modulus, rows }
    }

    pub fn named(name: impl Into<String>, modulus: u64, rows: Vec<Vec<i64>>) -> Self {
        LinearSystem { name: Some(name.into()), modulus, rows }
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    pub fn unknowns(&self) -> usize {
        self.rows.len()
    }

    /// Normalised augmented matrix.
    pub fn to_matrix(&self) -> Result<AugmentedMatrix, SolveError> {
        AugmentedMatrix::from_signed_rows(self.modulus, &self.rows)
    }

    pub fn solver(&self, config: &SolverConfig) -> Result<ModularLinearSystemSolver, SolveError> {
        ModularLinearSystemSolver::from_matrix(self.to_matrix()?, config)
    }

    pub fn solve(&self, config: &SolverConfig) -> Result<Classification, SolveError> {
        self.solver(config)?.solve()
    }
}
