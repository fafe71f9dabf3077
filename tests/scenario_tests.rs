// tests/scenario_tests.rs
//
// Worked systems over Z/7Z with hand-checked results.

use modsolve::matrix::{AugmentedMatrix, Classification, ModularLinearSystemSolver, RowRole, SolveError};

#[cfg(test)]
mod scenario_tests {
    use super::*;

    fn solve(modulus: u64, rows: &[Vec<u64>]) -> (ModularLinearSystemSolver, Classification) {
        let mut solver = ModularLinearSystemSolver::new(modulus, rows).unwrap();
        let result = solver.solve().unwrap();
        (solver, result)
    }

    #[test]
    fn test_scenario_a_unique() {
        let rows = vec![vec![4, 2, 4, 3], vec![2, 5, 2, 2], vec![6, 3, 4, 5]];
        let (_, result) = solve(7, &rows);

        assert_eq!(result, Classification::Unique(vec![4, 1, 5]));
        let original = AugmentedMatrix::new(7, &rows).unwrap();
        assert!(original.is_satisfied_by(result.unique_values().unwrap()));
    }

    #[test]
    fn test_scenario_b_inconsistent() {
        // Second row is the first doubled, but 5 != 2 * 2 (mod 7)
        let rows = vec![vec![1, 2, 3, 2], vec![2, 4, 6, 5], vec![0, 3, 4, 2]];
        let (_, result) = solve(7, &rows);

        assert_eq!(result, Classification::Inconsistent { row: 2, constant: 1 });
        assert!(!result.is_consistent());
    }

    #[test]
    fn test_scenario_c_infinite_keeps_dependency() {
        let rows = vec![vec![1, 1, 1, 3], vec![2, 1, 1, 5], vec![0, 3, 3, 3]];
        let (solver, result) = solve(7, &rows);

        let family = match &result {
            Classification::Infinite(family) => family,
            other => panic!("expected infinite solutions, got {:?}", other),
        };
        assert_eq!(family.free_columns, vec![2]);

        // x1 resolves outright
        let x1 = family.relation(0).unwrap();
        assert!(x1.is_resolved());
        assert_eq!(x1.value(), Some(2));

        // x2 stays 6*x2 + 6*x3 = 6 until x3 is chosen
        let x2 = family.relation(1).unwrap();
        assert_eq!(x2.coefficient, 6);
        assert_eq!(x2.residual, vec![(2, 6)]);
        assert_eq!(x2.constant, 6);

        let roles = solver.row_roles();
        assert!(roles[0].is_pivot());
        assert!(roles[1].is_pivot());
        assert_eq!(roles[2], RowRole::Free { column: 2 });

        let original = AugmentedMatrix::new(7, &rows).unwrap();
        for x3 in 0..7 {
            let values = family.assign(&[x3]).unwrap();
            assert_eq!(values[0], 2);
            assert_eq!(values[2], x3);
            assert!(original.is_satisfied_by(&values), "x3 = {}: {:?}", x3, values);
        }
    }

    #[test]
    fn test_scalar_multiple_with_incompatible_constant() {
        // x1 + x2 + x3 = 2 and 2x1 + 2x2 + 2x3 = 5 (mod 7)
        let rows = vec![vec![1, 1, 1, 2], vec![2, 2, 2, 5], vec![0, 0, 1, 0]];
        let (_, result) = solve(7, &rows);

        assert!(matches!(result, Classification::Inconsistent { row: 1, constant: 1 }));
    }

    #[test]
    fn test_classification_is_idempotent() {
        for rows in [
            vec![vec![4, 2, 4, 3], vec![2, 5, 2, 2], vec![6, 3, 4, 5]],
            vec![vec![1, 2, 3, 2], vec![2, 4, 6, 5], vec![0, 3, 4, 2]],
            vec![vec![1, 1, 1, 3], vec![2, 1, 1, 5], vec![0, 3, 3, 3]],
        ] {
            let (solver, first) = solve(7, &rows);
            let second = solver.classify().unwrap();
            let third = solver.classify().unwrap();
            assert_eq!(first, second);
            assert_eq!(second, third);
        }
    }

    #[test]
    fn test_all_zero_system() {
        let (_, result) = solve(7, &[vec![0, 0, 0], vec![0, 0, 0]]);
        let family = result.underdetermined().unwrap();
        assert_eq!(family.free_columns, vec![0, 1]);
        assert!(family.relations.is_empty());
        assert_eq!(family.solution_count(), Some(49));
    }

    #[test]
    fn test_pivot_found_below_free_column_row() {
        // Column 0 is free; row 0 (zero diagonal) is not settled and can take column 1.
        let rows = vec![vec![0, 2, 1, 4], vec![0, 0, 0, 0], vec![0, 1, 3, 0]];
        let (_, result) = solve(7, &rows);
        let family = result.underdetermined().unwrap();
        assert_eq!(family.free_columns, vec![0]);

        let original = AugmentedMatrix::new(7, &rows).unwrap();
        for x0 in 0..7 {
            assert!(original.is_satisfied_by(&family.assign(&[x0]).unwrap()));
        }
    }

    #[test]
    fn test_composite_modulus_non_invertible_pivot() {
        // 3x = 3 (mod 9) has three solutions; resolving the pivot needs 3^-1
        let mut solver = ModularLinearSystemSolver::new(9, &[vec![3, 3]]).unwrap();
        assert_eq!(
            solver.solve(),
            Err(SolveError::NonInvertibleModulus { row: 0, pivot: 3, modulus: 9 })
        );
    }

    #[test]
    fn test_large_prime_modulus_without_table() {
        let p = 1_000_000_007u64;
        // 2x + y = 5, x + 3y = 10  =>  x = 1, y = 3
        let (_, result) = solve(p, &[vec![2, 1, 5], vec![1, 3, 10]]);
        assert_eq!(result, Classification::Unique(vec![1, 3]));
    }
}
