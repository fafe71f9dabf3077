// src/matrix/row_role.rs

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::matrix::augmented_matrix::AugmentedMatrix;

/// `coefficient * x_column + sum(residual) = constant (mod m)`.
///
/// `residual` only ever names free columns. An empty residual with a coefficient of 1
/// means `x_column = constant` outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotRelation {
    pub column: usize,
    pub coefficient: u64,
    pub residual: Vec<(usize, u64)>,
    pub constant: u64,
}

impl PivotRelation {
    pub fn is_resolved(&self) -> bool {
        self.residual.is_empty() && self.coefficient == 1
    }

    /// The value of `x_column` when nothing is left to substitute.
    pub fn value(&self) -> Option<u64> {
        if self.is_resolved() {
            Some(self.constant)
        } else {
            None
        }
    }

    pub fn depends_on(&self, column: usize) -> bool {
        self.residual.iter().any(|&(c, _)| c == column)
    }
}

impl fmt::Display for PivotRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficient == 1 {
            write!(f, "x{}", self.column)?;
        } else {
            write!(f, "{}*x{}", self.coefficient, self.column)?;
        }
        for (column, coefficient) in &self.residual {
            write!(f, " + {}*x{}", coefficient, column)?;
        }
        write!(f, " = {}", self.constant)
    }
}

/// What one row of an eliminated matrix means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRole {
    /// Zero diagonal but nonzero coefficients. Only reachable under a composite modulus.
    Unresolved,
    Pivot(PivotRelation),
    /// No pivot landed on this row; it reads `0 = constant` and `column` is free.
    Free { column: usize },
}

impl RowRole {
    /// Reads row `r` of an eliminated matrix.
    pub fn of_row(matrix: &AugmentedMatrix, r: usize) -> RowRole {
        let coefficients = matrix.coefficients(r);
        let diagonal = coefficients[r];

        if diagonal == 0 {
            if coefficients.iter().all(|&c| c == 0) {
                return RowRole::Free { column: r };
            }
            return RowRole::Unresolved;
        }

        let residual = coefficients
            .iter()
            .enumerate()
            .filter(|&(c, &value)| c != r && value != 0)
            .map(|(c, &value)| (c, value))
            .collect();

        RowRole::Pivot(PivotRelation {
            column: r,
            coefficient: diagonal,
            residual,
            constant: matrix.constant(r),
        })
    }

    pub fn is_pivot(&self) -> bool {
        matches!(self, RowRole::Pivot(_))
    }
}
