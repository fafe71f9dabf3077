// src/matrix/augmented_matrix.rs

use std::fmt;
use std::ops::{Index, IndexMut};
use crate::integer_math::residue::Residue;
use crate::matrix::error::SolveError;

/// Dense `n x (n+1)` matrix of residues modulo `m`.
///
/// Column `n` is the constant column. Storage is one row-major buffer owned by the
/// matrix; row swaps exchange index ranges of it.
#[derive(Clone, PartialEq, Eq)]
pub struct AugmentedMatrix {
    modulus: u64,
    unknowns: usize,
    cells: Vec<u64>,
}

impl AugmentedMatrix {
    /// Builds a matrix from rows of residues already reduced into `[0, m)`.
    pub fn new(modulus: u64, rows: &[Vec<u64>]) -> Result<Self, SolveError> {
        let unknowns = Self::validate_shape(modulus, rows.len(), rows.iter().map(|r| r.len()))?;

        let mut cells = Vec::with_capacity(unknowns * (unknowns + 1));
        for (r, row) in rows.iter().enumerate() {
            if let Some((c, value)) = row.iter().enumerate().find(|(_, v)| **v >= modulus) {
                return Err(SolveError::malformed(format!(
                    "entry ({}, {}) = {} is not a residue modulo {}",
                    r, c, *value, modulus
                )));
            }
            cells.extend_from_slice(row);
        }

        Ok(AugmentedMatrix { modulus, unknowns, cells })
    }

    /// Builds a matrix from raw signed coefficients, normalising each into `[0, m)`.
    pub fn from_signed_rows(modulus: u64, rows: &[Vec<i64>]) -> Result<Self, SolveError> {
        let unknowns = Self::validate_shape(modulus, rows.len(), rows.iter().map(|r| r.len()))?;

        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(move |&c| Residue::normalize(c, modulus)))
            .collect();

        Ok(AugmentedMatrix { modulus, unknowns, cells })
    }

    fn validate_shape(
        modulus: u64,
        row_count: usize,
        row_lengths: impl Iterator<Item = usize>,
    ) -> Result<usize, SolveError> {
        if modulus == 0 {
            return Err(SolveError::malformed("modulus must be positive"));
        }
        if row_count == 0 {
            return Err(SolveError::malformed("system has no equations"));
        }
        for (r, len) in row_lengths.enumerate() {
            if len != row_count + 1 {
                return Err(SolveError::malformed(format!(
                    "row {} has {} columns, expected {}",
                    r,
                    len,
                    row_count + 1
                )));
            }
        }
        Ok(row_count)
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Number of unknowns, which is also the number of rows.
    pub fn unknowns(&self) -> usize {
        self.unknowns
    }

    pub fn width(&self) -> usize {
        self.unknowns + 1
    }

    /// Index of the constant column.
    pub fn constant_column(&self) -> usize {
        self.unknowns
    }

    pub fn row(&self, r: usize) -> &[u64] {
        let w = self.width();
        &self.cells[r * w..(r + 1) * w]
    }

    /// Coefficients of row `r`, without the constant.
    pub fn coefficients(&self, r: usize) -> &[u64] {
        &self.row(r)[..self.unknowns]
    }

    pub fn constant(&self, r: usize) -> u64 {
        self.row(r)[self.unknowns]
    }

    pub fn diagonal(&self, r: usize) -> u64 {
        self[(r, r)]
    }

    /// Mutable access to two distinct rows at once.
    pub fn row_pair_mut(&mut self, first: usize, second: usize) -> (&mut [u64], &mut [u64]) {
        assert_ne!(first, second, "row_pair_mut needs two distinct rows");
        let w = self.width();
        if first < second {
            let (head, tail) = self.cells.split_at_mut(second * w);
            (&mut head[first * w..(first + 1) * w], &mut tail[..w])
        } else {
            let (head, tail) = self.cells.split_at_mut(first * w);
            (&mut tail[..w], &mut head[second * w..(second + 1) * w])
        }
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (left, right) = self.row_pair_mut(a, b);
        left.swap_with_slice(right);
    }

    /// Checks `values` against every row: `sum a_k * x_k == b (mod m)`.
    pub fn is_satisfied_by(&self, values: &[u64]) -> bool {
        values.len() == self.unknowns
            && (0..self.unknowns).all(|r| {
                Residue::dot(self.coefficients(r), values, self.modulus) == self.constant(r)
            })
    }

    pub fn rows(&self) -> Vec<Vec<u64>> {
        self.cells.chunks(self.width()).map(|row| row.to_vec()).collect()
    }
}

impl Index<(usize, usize)> for AugmentedMatrix {
    type Output = u64;

    fn index(&self, (r, c): (usize, usize)) -> &u64 {
        &self.cells[r * self.width() + c]
    }
}

impl IndexMut<(usize, usize)> for AugmentedMatrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut u64 {
        let w = self.width();
        &mut self.cells[r * w + c]
    }
}

impl fmt::Display for AugmentedMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.unknowns {
            let coefficients: Vec<String> = self.coefficients(r).iter().map(|c| c.to_string()).collect();
            writeln!(f, "[{} | {}]", coefficients.join(" "), self.constant(r))?;
        }
        Ok(())
    }
}

impl fmt::Debug for AugmentedMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AugmentedMatrix(mod {}, {}x{})\n{}", self.modulus, self.unknowns, self.width(), self)
    }
}
