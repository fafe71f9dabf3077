// src/matrix/modular_solver.rs
//
// Gaussian elimination over Z/mZ without division.
//
// Column i is cancelled from row j by scaling both rows with the cofactors of
// g = gcd(mat[j][i], mat[i][i]):
//
//   a = mat[i][i] / g,  b = mat[j][i] / g
//   mat[j][k] <- mat[j][k] * a - mat[i][k] * b      for k in i..=n
//
// No inverse is ever needed, so elimination is valid for any modulus. When row j already
// hosts the pivot of an earlier column it also carries coefficients on columns j..i-1
// (free columns it still depends on). Those are scaled by a as well so the whole row
// keeps describing the same congruence.

use std::time::Instant;
use log::{debug, info, trace};
use crate::config::SolverConfig;
use crate::integer_math::gcd::GCD;
use crate::integer_math::modular_inverse::ModularInverse;
use crate::integer_math::primality::Primality;
use crate::integer_math::residue::Residue;
use crate::matrix::augmented_matrix::AugmentedMatrix;
use crate::matrix::error::SolveError;
use crate::matrix::row_role::RowRole;
use crate::matrix::solution::{Classification, Underdetermined};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Populated,
    Eliminated,
    Resolved,
}

#[derive(Debug, Clone)]
pub struct ModularLinearSystemSolver {
    matrix: AugmentedMatrix,
    inverse: ModularInverse,
    inverse_table_limit: u64,
    require_prime_modulus: bool,
    stage: Stage,
}

impl ModularLinearSystemSolver {
    /// `rows` holds `n` rows of `n + 1` residues in `[0, modulus)`.
    pub fn new(modulus: u64, rows: &[Vec<u64>]) -> Result<Self, SolveError> {
        Self::with_config(modulus, rows, &SolverConfig::default())
    }

    pub fn with_config(modulus: u64, rows: &[Vec<u64>], config: &SolverConfig) -> Result<Self, SolveError> {
        Self::from_matrix(AugmentedMatrix::new(modulus, rows)?, config)
    }

    pub fn from_matrix(matrix: AugmentedMatrix, config: &SolverConfig) -> Result<Self, SolveError> {
        let modulus = matrix.modulus();
        Self::check_modulus(modulus, config.require_prime_modulus)?;

        Ok(ModularLinearSystemSolver {
            inverse: ModularInverse::new(modulus, config.inverse_table_limit),
            matrix,
            inverse_table_limit: config.inverse_table_limit,
            require_prime_modulus: config.require_prime_modulus,
            stage: Stage::Populated,
        })
    }

    fn check_modulus(modulus: u64, require_prime: bool) -> Result<(), SolveError> {
        if require_prime && !Primality::is_prime(modulus) {
            return Err(SolveError::CompositeModulus { modulus });
        }
        Ok(())
    }

    /// Loads a fresh system. The inverse lookup is kept when the modulus is unchanged.
    pub fn reset(&mut self, modulus: u64, rows: &[Vec<u64>]) -> Result<(), SolveError> {
        let matrix = AugmentedMatrix::new(modulus, rows)?;
        if modulus != self.inverse.modulus() {
            Self::check_modulus(modulus, self.require_prime_modulus)?;
            self.inverse = ModularInverse::new(modulus, self.inverse_table_limit);
        }
        self.matrix = matrix;
        self.stage = Stage::Populated;
        Ok(())
    }

    pub fn matrix(&self) -> &AugmentedMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> AugmentedMatrix {
        self.matrix
    }

    pub fn modulus(&self) -> u64 {
        self.matrix.modulus()
    }

    pub fn unknowns(&self) -> usize {
        self.matrix.unknowns()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.matrix.swap_rows(a, b);
    }

    /// Row `row` hosts the pivot of an earlier column than `column`.
    fn is_settled(&self, row: usize, column: usize) -> bool {
        row < column && self.matrix.diagonal(row) != 0
    }

    fn find_pivot_row(&self, column: usize) -> Option<usize> {
        (0..self.matrix.unknowns())
            .filter(|&row| !self.is_settled(row, column))
            .find(|&row| self.matrix[(row, column)] != 0)
    }

    /// Cancels column `column` out of row `row` using the pivot row `column`.
    fn cancel(&mut self, row: usize, column: usize) {
        let m = self.matrix.modulus();
        let n = self.matrix.unknowns();
        let settled = self.is_settled(row, column);
        let (a, b) = GCD::cofactors(self.matrix[(column, column)], self.matrix[(row, column)]);

        trace!("row {} <- {} * row {} - {} * row {}", row, a, row, b, column);

        let (target, pivot_row) = self.matrix.row_pair_mut(row, column);
        if settled {
            for value in &mut target[row..column] {
                *value = Residue::mul_mod(*value, a, m);
            }
        }
        for k in column..=n {
            target[k] = Residue::combine(target[k], a, pivot_row[k], b, m);
        }
    }

    /// Reduces the matrix in place. A second call does nothing.
    pub fn eliminate(&mut self) {
        if self.stage != Stage::Populated {
            debug!("eliminate() called on an already eliminated system, skipping");
            return;
        }

        let n = self.matrix.unknowns();
        let mut free_columns = 0;

        for i in 0..n {
            let pivot_row = match self.find_pivot_row(i) {
                Some(row) => row,
                None => {
                    debug!("column {}: no pivot, free", i);
                    free_columns += 1;
                    continue;
                }
            };

            if pivot_row != i {
                trace!("column {}: swapping rows {} and {}", i, i, pivot_row);
                self.matrix.swap_rows(i, pivot_row);
            }
            debug!("column {}: pivot {}", i, self.matrix[(i, i)]);

            for j in 0..n {
                if j != i && self.matrix[(j, i)] != 0 {
                    self.cancel(j, i);
                }
            }
        }

        debug!("elimination done: {} pivot columns, {} free", n - free_columns, free_columns);
        self.stage = Stage::Eliminated;
    }

    /// Divides out every pivot that no longer depends on a free column.
    ///
    /// Rows that still carry free-column coefficients are left as relations.
    pub fn resolve_pivots(&mut self) -> Result<(), SolveError> {
        match self.stage {
            Stage::Populated => {
                return Err(SolveError::Stage {
                    operation: "resolve_pivots",
                    required: "eliminate",
                })
            }
            Stage::Resolved => return Ok(()),
            Stage::Eliminated => {}
        }

        let m = self.matrix.modulus();
        let n = self.matrix.unknowns();

        for i in 0..n {
            let pivot = self.matrix.diagonal(i);
            if pivot == 0 {
                continue;
            }
            if self.matrix.coefficients(i)[i + 1..].iter().any(|&c| c != 0) {
                trace!("row {}: pivot still depends on free columns", i);
                continue;
            }
            if pivot == 1 {
                continue;
            }

            let inverse = self.inverse.inverse(pivot).ok_or(SolveError::NonInvertibleModulus {
                row: i,
                pivot,
                modulus: m,
            })?;
            self.matrix[(i, n)] = Residue::mul_mod(self.matrix.constant(i), inverse, m);
            self.matrix[(i, i)] = 1;
        }

        self.stage = Stage::Resolved;
        Ok(())
    }

    /// Role of every row after elimination.
    pub fn row_roles(&self) -> Vec<RowRole> {
        (0..self.matrix.unknowns())
            .map(|r| RowRole::of_row(&self.matrix, r))
            .collect()
    }

    pub fn classify(&self) -> Result<Classification, SolveError> {
        self.classify_from(0)
    }

    /// Classifies the solution space, checking pivot-less rows from
    /// `first_meaningful_row` onwards for a `0 = k` contradiction.
    pub fn classify_from(&self, first_meaningful_row: usize) -> Result<Classification, SolveError> {
        if self.stage != Stage::Resolved {
            return Err(SolveError::Stage {
                operation: "classify",
                required: "resolve_pivots",
            });
        }

        let n = self.matrix.unknowns();
        if first_meaningful_row > n {
            return Err(SolveError::malformed(format!(
                "first meaningful row {} is past the last row {}",
                first_meaningful_row, n
            )));
        }

        let roles = self.row_roles();

        for (row, role) in roles.iter().enumerate().skip(first_meaningful_row) {
            if let RowRole::Free { .. } = role {
                let constant = self.matrix.constant(row);
                if constant != 0 {
                    debug!("row {} reads 0 = {}", row, constant);
                    return Ok(Classification::Inconsistent { row, constant });
                }
            }
        }

        if let Some(row) = roles.iter().position(|role| *role == RowRole::Unresolved) {
            return Err(SolveError::DegeneratePivot { row });
        }

        let mut free_columns = Vec::new();
        let mut relations = Vec::new();
        for role in roles {
            match role {
                RowRole::Pivot(relation) => relations.push(relation),
                RowRole::Free { column } => free_columns.push(column),
                RowRole::Unresolved => {}
            }
        }

        if free_columns.is_empty() {
            return Ok(Classification::Unique(relations.into_iter().map(|r| r.constant).collect()));
        }

        Ok(Classification::Infinite(Underdetermined {
            modulus: self.matrix.modulus(),
            unknowns: n,
            free_columns,
            relations,
        }))
    }

    /// `eliminate`, `resolve_pivots` and `classify` in one go.
    pub fn solve(&mut self) -> Result<Classification, SolveError> {
        let start = Instant::now();
        self.eliminate();
        self.resolve_pivots()?;
        let classification = self.classify()?;

        info!(
            "Solved {} unknowns mod {}: {} ({:.3?})",
            self.matrix.unknowns(),
            self.matrix.modulus(),
            classification.kind(),
            start.elapsed()
        );
        Ok(classification)
    }
}
