// src/matrix/solution.rs

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::integer_math::modular_inverse::invert;
use crate::integer_math::residue::Residue;
use crate::matrix::error::SolveError;
use crate::matrix::row_role::PivotRelation;

/// Outcome of solving a system of congruences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Row `row` reduced to `0 = constant` with a nonzero constant.
    Inconsistent { row: usize, constant: u64 },
    /// Every unknown is a pivot; `values[i]` is `x_i`.
    Unique(Vec<u64>),
    Infinite(Underdetermined),
}

impl Classification {
    pub fn kind(&self) -> &'static str {
        match self {
            Classification::Inconsistent { .. } => "inconsistent",
            Classification::Unique(_) => "unique",
            Classification::Infinite(_) => "infinite",
        }
    }

    pub fn is_consistent(&self) -> bool {
        !matches!(self, Classification::Inconsistent { .. })
    }

    pub fn unique_values(&self) -> Option<&[u64]> {
        match self {
            Classification::Unique(values) => Some(values),
            _ => None,
        }
    }

    pub fn underdetermined(&self) -> Option<&Underdetermined> {
        match self {
            Classification::Infinite(u) => Some(u),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Inconsistent { row, constant } => {
                write!(f, "inconsistent: row {} reads 0 = {}", row, constant)
            }
            Classification::Unique(values) => write!(f, "unique: {:?}", values),
            Classification::Infinite(family) => {
                write!(f, "infinite: free columns {:?}", family.free_columns)?;
                if let Some(count) = family.solution_count() {
                    write!(f, " ({} solutions)", count)?;
                }
                for relation in &family.relations {
                    write!(f, "\n  {}", relation)?;
                }
                Ok(())
            }
        }
    }
}

/// Solution family of an under-determined system.
///
/// The free columns are independent parameters; every other unknown is given by a
/// [`PivotRelation`] over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Underdetermined {
    pub modulus: u64,
    pub unknowns: usize,
    pub free_columns: Vec<usize>,
    pub relations: Vec<PivotRelation>,
}

impl Underdetermined {
    pub fn is_free(&self, column: usize) -> bool {
        self.free_columns.binary_search(&column).is_ok()
    }

    pub fn relation(&self, column: usize) -> Option<&PivotRelation> {
        self.relations.iter().find(|r| r.column == column)
    }

    /// `m ^ free`, or `None` if that does not fit in a u128.
    pub fn solution_count(&self) -> Option<u128> {
        let exponent = u32::try_from(self.free_columns.len()).ok()?;
        (self.modulus as u128).checked_pow(exponent)
    }

    /// Back-solves every pivot relation for one choice of the free variables.
    ///
    /// `free_values[k]` is assigned to `free_columns[k]`. Returns all `unknowns` values.
    pub fn assign(&self, free_values: &[u64]) -> Result<Vec<u64>, SolveError> {
        if free_values.len() != self.free_columns.len() {
            return Err(SolveError::malformed(format!(
                "expected {} free values, got {}",
                self.free_columns.len(),
                free_values.len()
            )));
        }

        let m = self.modulus;
        let mut values = vec![0u64; self.unknowns];
        for (&column, &value) in self.free_columns.iter().zip(free_values) {
            values[column] = Residue::reduce(value, m);
        }

        for relation in &self.relations {
            let substituted = relation
                .residual
                .iter()
                .fold(0, |acc, &(c, coefficient)| {
                    Residue::add_mod(acc, Residue::mul_mod(coefficient, values[c], m), m)
                });
            let rhs = Residue::sub_mod(relation.constant, substituted, m);

            values[relation.column] = if relation.coefficient == 1 {
                rhs
            } else {
                let inverse = invert(relation.coefficient, m).ok_or(SolveError::NonInvertibleModulus {
                    row: relation.column,
                    pivot: relation.coefficient,
                    modulus: m,
                })?;
                Residue::mul_mod(rhs, inverse, m)
            };
        }

        Ok(values)
    }

    /// The particular solution with every free variable set to zero.
    pub fn particular(&self) -> Result<Vec<u64>, SolveError> {
        self.assign(&vec![0; self.free_columns.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_c_family() -> Underdetermined {
        Underdetermined {
            modulus: 7,
            unknowns: 3,
            free_columns: vec![2],
            relations: vec![
                PivotRelation { column: 0, coefficient: 1, residual: vec![], constant: 2 },
                PivotRelation { column: 1, coefficient: 6, residual: vec![(2, 6)], constant: 6 },
            ],
        }
    }

    #[test]
    fn test_assign_back_solves() {
        let family = scenario_c_family();
        // 6*x1 + 6*x2 = 6  =>  x1 = 1 - x2
        assert_eq!(family.assign(&[0]).unwrap(), vec![2, 1, 0]);
        assert_eq!(family.assign(&[3]).unwrap(), vec![2, 5, 3]);
        assert_eq!(family.assign(&[10]).unwrap(), vec![2, 5, 3]);
        assert_eq!(family.particular().unwrap(), vec![2, 1, 0]);
    }

    #[test]
    fn test_assign_wrong_arity() {
        let family = scenario_c_family();
        assert!(matches!(family.assign(&[]), Err(SolveError::Malformed { .. })));
    }

    #[test]
    fn test_assign_non_invertible() {
        let family = Underdetermined {
            modulus: 6,
            unknowns: 2,
            free_columns: vec![1],
            relations: vec![PivotRelation { column: 0, coefficient: 2, residual: vec![(1, 1)], constant: 4 }],
        };
        assert_eq!(
            family.assign(&[0]),
            Err(SolveError::NonInvertibleModulus { row: 0, pivot: 2, modulus: 6 })
        );
    }

    #[test]
    fn test_counts_and_lookup() {
        let family = scenario_c_family();
        assert_eq!(family.solution_count(), Some(7));
        assert!(family.is_free(2));
        assert!(!family.is_free(1));
        assert_eq!(family.relation(1).map(|r| r.coefficient), Some(6));
        assert!(family.relation(2).is_none());
    }

    #[test]
    fn test_classification_accessors() {
        let unique = Classification::Unique(vec![4, 1, 5]);
        assert_eq!(unique.kind(), "unique");
        assert_eq!(unique.unique_values(), Some(&[4u64, 1, 5][..]));
        assert!(unique.underdetermined().is_none());

        let none = Classification::Inconsistent { row: 2, constant: 1 };
        assert!(!none.is_consistent());
        assert_eq!(none.kind(), "inconsistent");
        assert_eq!(none.to_string(), "inconsistent: row 2 reads 0 = 1");
        assert_eq!(unique.to_string(), "unique: [4, 1, 5]");

        let family = Classification::Infinite(scenario_c_family());
        assert_eq!(
            family.to_string(),
            "infinite: free columns [2] (7 solutions)\n  x0 = 2\n  6*x1 + 6*x2 = 6"
        );
    }
}
